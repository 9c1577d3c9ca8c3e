//! Top-level error boundary.
//!
//! Wraps a unit of app work and turns both `Err` results and panics into a
//! fallback screen. Once tripped the boundary keeps showing the fallback
//! until it is reset.

use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Mutex;

use futures_util::FutureExt;

pub const FALLBACK_MESSAGE: &str = "Something went wrong";
pub const FALLBACK_HINT: &str = "Please restart the app";

/// What the user sees instead of the failed screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub message: &'static str,
    pub hint: &'static str,
    /// Logged, never shown
    pub cause: String,
}

impl Fallback {
    fn new(cause: String) -> Self {
        Self {
            message: FALLBACK_MESSAGE,
            hint: FALLBACK_HINT,
            cause,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutcome<T> {
    Completed(T),
    Fallback(Fallback),
}

impl<T> BoundaryOutcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, BoundaryOutcome::Fallback(_))
    }
}

#[derive(Default)]
pub struct ErrorBoundary {
    tripped: Mutex<Option<Fallback>>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn run<F, T, E>(&self, work: F) -> BoundaryOutcome<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        if let Some(fallback) = self.current() {
            return BoundaryOutcome::Fallback(fallback);
        }

        match AssertUnwindSafe(work).catch_unwind().await {
            Ok(Ok(value)) => BoundaryOutcome::Completed(value),
            Ok(Err(e)) => BoundaryOutcome::Fallback(self.trip(e.to_string())),
            Err(panic) => BoundaryOutcome::Fallback(self.trip(panic_message(panic.as_ref()))),
        }
    }

    pub fn has_error(&self) -> bool {
        self.current().is_some()
    }

    pub fn reset(&self) {
        if let Ok(mut tripped) = self.tripped.lock() {
            *tripped = None;
        }
    }

    fn current(&self) -> Option<Fallback> {
        self.tripped.lock().ok().and_then(|guard| guard.clone())
    }

    fn trip(&self, cause: String) -> Fallback {
        tracing::warn!(error = %cause, "Error caught by boundary");
        let fallback = Fallback::new(cause);
        if let Ok(mut tripped) = self.tripped.lock() {
            *tripped = Some(fallback.clone());
        }
        fallback
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}
