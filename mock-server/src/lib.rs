//! In-memory stand-in for the painting backend.
//!
//! Serves the same routes and response envelopes as the real API so the core
//! client can be exercised over real HTTP. Paintings are kept in insertion
//! order; ids are random UUID strings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painting {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub artist: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Deserialize)]
pub struct NewPainting {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub year: Option<i32>,
}

/// PATCH body; omitted fields keep their stored value, present ones replace
/// it. `"year": null` clears the year.
#[derive(Deserialize)]
pub struct PaintingChanges {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i32>>,
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub type Db = Arc<RwLock<Vec<Painting>>>;

pub fn app() -> Router {
    seeded(Vec::new())
}

/// Router whose store starts with `paintings`.
pub fn seeded(paintings: Vec<Painting>) -> Router {
    let db: Db = Arc::new(RwLock::new(paintings));
    Router::new()
        .route("/paintings", get(list_paintings))
        .route("/paintings/add", post(create_painting))
        .route(
            "/paintings/{id}",
            get(get_painting).patch(update_painting).delete(delete_painting),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_paintings(State(db): State<Db>) -> Json<Value> {
    let paintings = db.read().await;
    Json(json!({ "paintings": &*paintings }))
}

async fn create_painting(
    State(db): State<Db>,
    Json(input): Json<NewPainting>,
) -> (StatusCode, Json<Value>) {
    let painting = Painting {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        artist: input.artist,
        image: input.image,
        description: input.description,
        year: input.year,
    };
    tracing::info!(id = %painting.id, title = %painting.title, "painting created");
    db.write().await.push(painting.clone());
    (StatusCode::CREATED, Json(json!({ "painting": painting })))
}

async fn get_painting(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let paintings = db.read().await;
    paintings
        .iter()
        .find(|p| p.id == id)
        .map(|painting| Json(json!({ "painting": painting })))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_painting(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<PaintingChanges>,
) -> Result<Json<Value>, StatusCode> {
    let mut paintings = db.write().await;
    let painting = paintings
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        painting.title = title;
    }
    if let Some(artist) = input.artist {
        painting.artist = artist;
    }
    if let Some(image) = input.image {
        painting.image = image;
    }
    if let Some(description) = input.description {
        painting.description = description;
    }
    if let Some(year) = input.year {
        painting.year = year;
    }
    tracing::info!(%id, "painting modified");
    Ok(Json(json!({ "painting": painting })))
}

async fn delete_painting(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let mut paintings = db.write().await;
    let index = paintings
        .iter()
        .position(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    paintings.remove(index);
    tracing::info!(%id, "painting deleted");
    Ok(Json(json!({ "message": "Painting deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painting_omits_empty_optional_fields() {
        let painting = Painting {
            id: "p1".to_string(),
            title: "Irises".to_string(),
            artist: String::new(),
            image: String::new(),
            description: String::new(),
            year: None,
        };
        let json = serde_json::to_value(&painting).unwrap();
        assert_eq!(json, json!({ "id": "p1", "title": "Irises" }));
    }

    #[test]
    fn new_painting_requires_title() {
        let result: Result<NewPainting, _> = serde_json::from_str(r#"{"artist":"Klimt"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_painting_defaults_optional_fields() {
        let input: NewPainting = serde_json::from_str(r#"{"title":"The Kiss"}"#).unwrap();
        assert_eq!(input.title, "The Kiss");
        assert!(input.artist.is_empty());
        assert!(input.year.is_none());
    }

    #[test]
    fn changes_are_all_optional() {
        let input: PaintingChanges = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.description.is_none());
        assert!(input.year.is_none());
    }

    #[test]
    fn null_year_is_a_change() {
        let input: PaintingChanges = serde_json::from_str(r#"{"year":null}"#).unwrap();
        assert_eq!(input.year, Some(None));
        let input: PaintingChanges = serde_json::from_str(r#"{"year":1907}"#).unwrap();
        assert_eq!(input.year, Some(Some(1907)));
    }
}
