//! Domain DTOs for the painting API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. A `Painting` is
//! its id plus a flattened `PaintingDraft`, so a draft can never carry an id
//! and a parsed painting can never lack one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Server-assigned painting identifier. Opaque and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaintingId(String);

impl PaintingId {
    pub fn new(id: impl Into<String>) -> Result<Self, ApiError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ApiError::InvalidId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PaintingId {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaintingId> for String {
    fn from(id: PaintingId) -> Self {
        id.0
    }
}

impl fmt::Display for PaintingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Painting attributes without an identifier, as sent on create and update.
///
/// Every field is always serialized: an empty string or a `null` year in an
/// update clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintingDraft {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
}

impl PaintingDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A persisted painting returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painting {
    pub id: PaintingId,
    #[serde(flatten)]
    pub details: PaintingDraft,
}

/// `GET /paintings` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct PaintingList {
    pub paintings: Vec<Painting>,
}

/// Single-painting response body shared by get, create and update.
#[derive(Debug, Deserialize)]
pub(crate) struct PaintingEnvelope {
    pub painting: Painting,
}
