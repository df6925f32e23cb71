//! Stateless HTTP request builder and response parser for the painting API.
//!
//! # Design
//! `PaintingClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip is left to a `Transport`, keeping
//! this layer deterministic and free of I/O.

use std::fmt::Write;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Painting, PaintingDraft, PaintingEnvelope, PaintingId, PaintingList};

/// Synchronous, stateless client for the painting API.
#[derive(Debug, Clone)]
pub struct PaintingClient {
    base_url: String,
}

impl PaintingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_paintings(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/paintings", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_painting(&self, id: &PaintingId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.painting_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_painting(&self, draft: &PaintingDraft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/paintings/add", self.base_url),
            headers: json_headers(),
            body: Some(to_json(draft)?),
        })
    }

    pub fn build_update_painting(
        &self,
        id: &PaintingId,
        draft: &PaintingDraft,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: self.painting_path(id),
            headers: json_headers(),
            body: Some(to_json(draft)?),
        })
    }

    pub fn build_delete_painting(&self, id: &PaintingId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.painting_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_paintings(&self, response: HttpResponse) -> Result<Vec<Painting>, ApiError> {
        check_status(&response)?;
        from_json::<PaintingList>(&response.body).map(|list| list.paintings)
    }

    pub fn parse_get_painting(&self, response: HttpResponse) -> Result<Painting, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_create_painting(&self, response: HttpResponse) -> Result<Painting, ApiError> {
        parse_envelope(response)
    }

    pub fn parse_update_painting(&self, response: HttpResponse) -> Result<Painting, ApiError> {
        parse_envelope(response)
    }

    /// The delete response body is opaque; only the status is checked.
    pub fn parse_delete_painting(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn painting_path(&self, id: &PaintingId) -> String {
        format!("{}/paintings/{}", self.base_url, path_segment(id.as_str()))
    }
}

/// Percent-encode `raw` so it stays one path segment. Only RFC 3986
/// unreserved characters pass through; dot segments are encoded as well.
fn path_segment(raw: &str) -> String {
    let dot_segment = raw == "." || raw == "..";
    let mut segment = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'.' if dot_segment => segment.push_str("%2E"),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                segment.push(char::from(byte));
            }
            _ => {
                // Writing to a String cannot fail.
                let _ = write!(segment, "%{byte:02X}");
            }
        }
    }
    segment
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(draft: &PaintingDraft) -> Result<String, ApiError> {
    serde_json::to_string(draft).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn parse_envelope(response: HttpResponse) -> Result<Painting, ApiError> {
    check_status(&response)?;
    from_json::<PaintingEnvelope>(&response.body).map(|envelope| envelope.painting)
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
