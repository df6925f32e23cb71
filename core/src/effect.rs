//! Presentation effects requested by data operations.
//!
//! Operations never show toasts or change routes themselves. They describe
//! what should happen as `Effect` values, and the view layer carries them out
//! through an `EffectSink`.

use std::sync::Mutex;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

/// A transient user-facing message ("toast").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Application routes an operation may ask to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Navigate(Route),
}

/// Receives the effects of completed operations.
pub trait EffectSink: Send + Sync {
    fn notify(&self, notification: &Notification);

    fn navigate(&self, route: Route);

    fn apply(&self, effect: &Effect) {
        match effect {
            Effect::Notify(notification) => self.notify(notification),
            Effect::Navigate(route) => self.navigate(*route),
        }
    }
}

/// Sink that records every effect in arrival order.
///
/// Useful for headless front-ends that render effects later, and in tests.
#[derive(Debug, Default)]
pub struct EffectLog {
    effects: Mutex<Vec<Effect>>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.lock().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter_map(|effect| match effect {
                Effect::Notify(n) => Some(n.clone()),
                Effect::Navigate(_) => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.lock()
            .iter()
            .filter_map(|effect| match effect {
                Effect::Navigate(route) => Some(*route),
                Effect::Notify(_) => None,
            })
            .collect()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Effect>> {
        // A poisoned log still holds valid effects.
        self.effects.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EffectSink for EffectLog {
    fn notify(&self, notification: &Notification) {
        self.lock().push(Effect::Notify(notification.clone()));
    }

    fn navigate(&self, route: Route) {
        self.lock().push(Effect::Navigate(route));
    }
}
