use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, seeded, Painting};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn painting(id: &str, title: &str) -> Painting {
    Painting {
        id: id.to_string(),
        title: title.to_string(),
        artist: String::new(),
        image: String::new(),
        description: String::new(),
        year: None,
    }
}

// --- list ---

#[tokio::test]
async fn list_paintings_empty_envelope() {
    let resp = app().oneshot(empty_request("GET", "/paintings")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["paintings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_paintings_keeps_seed_order() {
    let app = seeded(vec![painting("a", "Irises"), painting("b", "The Kiss")]);
    let resp = app.oneshot(empty_request("GET", "/paintings")).await.unwrap();

    let body = body_json(resp).await;
    let paintings: Vec<Painting> = serde_json::from_value(body["paintings"].clone()).unwrap();
    assert_eq!(paintings, vec![painting("a", "Irises"), painting("b", "The Kiss")]);
}

// --- create ---

#[tokio::test]
async fn create_painting_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/paintings/add",
            r#"{"title":"Irises","artist":"Vincent van Gogh","year":1889}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let created: Painting = serde_json::from_value(body["painting"].clone()).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Irises");
    assert_eq!(created.year, Some(1889));
}

#[tokio::test]
async fn create_painting_without_title_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/paintings/add", r#"{"artist":"Monet"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_to_collection_is_not_allowed() {
    let resp = app()
        .oneshot(json_request("POST", "/paintings", r#"{"title":"Irises"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn patch_with_empty_fields_clears_them() {
    use tower::Service;

    let mut stored = painting("p1", "Irises");
    stored.description = "old".to_string();
    stored.year = Some(1889);
    let mut app = seeded(vec![stored]).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            "/paintings/p1",
            r#"{"title":"Irises","artist":"","image":"","description":"","year":null}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/paintings/p1"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let fetched: Painting = serde_json::from_value(body["painting"].clone()).unwrap();
    assert_eq!(fetched, painting("p1", "Irises"));
}

// --- get / update / delete on unknown ids ---

#[tokio::test]
async fn get_painting_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/paintings/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_painting_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/paintings/missing", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_painting_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/paintings/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/paintings/add",
            r#"{"title":"Starry Night","artist":"Vincent van Gogh"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let created: Painting = serde_json::from_value(body["painting"].clone()).unwrap();
    let id = created.id.clone();

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/paintings/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let fetched: Painting = serde_json::from_value(body["painting"].clone()).unwrap();
    assert_eq!(fetched, created);

    // patch only the title
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/paintings/{id}"),
            r#"{"title":"The Starry Night"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let updated: Painting = serde_json::from_value(body["painting"].clone()).unwrap();
    assert_eq!(updated.title, "The Starry Night");
    assert_eq!(updated.artist, "Vincent van Gogh"); // unchanged

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/paintings/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/paintings/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/paintings"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body["paintings"].as_array().unwrap().is_empty());
}
