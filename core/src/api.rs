//! The painting data-access layer used by views.
//!
//! # Design
//! Every operation follows the same contract: hold a busy guard while the
//! request runs, then report the result as an `Outcome` carrying the typed
//! `Result` together with the notifications (and, for create, the
//! navigation) the view should perform. Failures are never returned as
//! panics and each one produces exactly one error notification whose text
//! does not depend on the cause.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::busy::BusyIndicator;
use crate::client::PaintingClient;
use crate::config::ApiConfig;
use crate::effect::{Effect, EffectSink, Notification, Route};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{Painting, PaintingDraft, PaintingId};

pub const GENERIC_ERROR: &str = "An error occurred, please try again";
pub const LOAD_ERROR: &str = "Something went wrong, please try again";
pub const CREATED: &str = "Your artwork has been added successfully";
pub const UPDATED: &str = "Your painting was successfully modified";
pub const DELETED: &str = "Painting deleted successfully";

/// What an operation reports back to the user.
struct Feedback {
    success: Option<&'static str>,
    error: &'static str,
    navigate: Option<Route>,
}

const LIST: Feedback = Feedback {
    success: None,
    error: LOAD_ERROR,
    navigate: None,
};
const GET: Feedback = Feedback {
    success: None,
    error: GENERIC_ERROR,
    navigate: None,
};
const CREATE: Feedback = Feedback {
    success: Some(CREATED),
    error: GENERIC_ERROR,
    navigate: Some(Route::Home),
};
const UPDATE: Feedback = Feedback {
    success: Some(UPDATED),
    error: GENERIC_ERROR,
    navigate: None,
};
const REMOVE: Feedback = Feedback {
    success: Some(DELETED),
    error: LOAD_ERROR,
    navigate: None,
};

/// Result of a painting operation plus the effects it requests.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    result: Result<T, ApiError>,
    effects: Vec<Effect>,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn result(&self) -> &Result<T, ApiError> {
        &self.result
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        self.result
    }

    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.result.as_ref().err()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(n) => Some(n),
            Effect::Navigate(_) => None,
        })
    }

    pub fn navigation(&self) -> Option<Route> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Navigate(route) => Some(*route),
            Effect::Notify(_) => None,
        })
    }

    /// Hand every effect to `sink` and keep only the payload.
    ///
    /// `None` means the operation failed and the user has already been told.
    pub fn apply<S: EffectSink + ?Sized>(self, sink: &S) -> Option<T> {
        for effect in &self.effects {
            sink.apply(effect);
        }
        self.result.ok()
    }
}

/// Painting operations over a `Transport`, tracked by a `BusyIndicator`.
///
/// Clones share the transport and the indicator.
#[derive(Debug)]
pub struct PaintingsApi<T> {
    client: PaintingClient,
    transport: Arc<T>,
    busy: BusyIndicator,
}

impl<T> Clone for PaintingsApi<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
            busy: self.busy.clone(),
        }
    }
}

impl PaintingsApi<UreqTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, UreqTransport::new())
    }
}

impl<T: Transport> PaintingsApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: PaintingClient::new(base_url),
            transport: Arc::new(transport),
            busy: BusyIndicator::new(),
        }
    }

    /// Share an indicator owned elsewhere, e.g. by the loading overlay.
    pub fn with_busy_indicator(mut self, busy: BusyIndicator) -> Self {
        self.busy = busy;
        self
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn client(&self) -> &PaintingClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list(&self) -> Outcome<Vec<Painting>> {
        let result = {
            let _guard = self.busy.track();
            self.try_list().await
        };
        finish("list", result, &LIST)
    }

    pub async fn get(&self, id: &str) -> Outcome<Painting> {
        let result = {
            let _guard = self.busy.track();
            self.try_get(id).await
        };
        finish("get", result, &GET)
    }

    pub async fn create(&self, draft: &PaintingDraft) -> Outcome<Painting> {
        let result = {
            let _guard = self.busy.track();
            self.try_create(draft).await
        };
        finish("create", result, &CREATE)
    }

    pub async fn update(&self, id: &str, draft: &PaintingDraft) -> Outcome<Painting> {
        let result = {
            let _guard = self.busy.track();
            self.try_update(id, draft).await
        };
        finish("update", result, &UPDATE)
    }

    pub async fn remove(&self, id: &str) -> Outcome<()> {
        let result = {
            let _guard = self.busy.track();
            self.try_remove(id).await
        };
        finish("remove", result, &REMOVE)
    }

    async fn try_list(&self) -> Result<Vec<Painting>, ApiError> {
        let response = self.send(self.client.build_list_paintings()).await?;
        self.client.parse_list_paintings(response)
    }

    async fn try_get(&self, id: &str) -> Result<Painting, ApiError> {
        let id = PaintingId::new(id)?;
        let response = self.send(self.client.build_get_painting(&id)).await?;
        self.client.parse_get_painting(response)
    }

    async fn try_create(&self, draft: &PaintingDraft) -> Result<Painting, ApiError> {
        let request = self.client.build_create_painting(draft)?;
        let response = self.send(request).await?;
        self.client.parse_create_painting(response)
    }

    async fn try_update(&self, id: &str, draft: &PaintingDraft) -> Result<Painting, ApiError> {
        let id = PaintingId::new(id)?;
        let request = self.client.build_update_painting(&id, draft)?;
        let response = self.send(request).await?;
        self.client.parse_update_painting(response)
    }

    async fn try_remove(&self, id: &str) -> Result<(), ApiError> {
        let id = PaintingId::new(id)?;
        let response = self.send(self.client.build_delete_painting(&id)).await?;
        self.client.parse_delete_painting(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        debug!(method, path = %request.path, "sending painting request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "painting response received");
        Ok(response)
    }
}

fn finish<V>(
    operation: &'static str,
    result: Result<V, ApiError>,
    feedback: &Feedback,
) -> Outcome<V> {
    let mut effects = Vec::new();
    match &result {
        Ok(_) => {
            debug!(operation, "painting operation succeeded");
            if let Some(message) = feedback.success {
                effects.push(Effect::Notify(Notification::success(message)));
            }
            if let Some(route) = feedback.navigate {
                effects.push(Effect::Navigate(route));
            }
        }
        Err(error) => {
            warn!(operation, kind = ?error.kind(), %error, "painting operation failed");
            effects.push(Effect::Notify(Notification::error(feedback.error)));
        }
    }
    Outcome { result, effects }
}
