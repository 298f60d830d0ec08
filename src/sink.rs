//! Injection sinks that deliver motion events to a UI runtime

use thiserror::Error;
use tracing::debug;

use crate::motion_event::MotionEvent;

/// The runtime refused to let this process inject events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{cause}")]
pub struct InjectDenied {
    cause: String,
}

impl InjectDenied {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Capability that delivers a motion event into the target UI runtime
pub trait InjectionSink {
    /// Inject one event. `Ok(false)` means the runtime did not accept it.
    fn inject_motion_event(&mut self, event: &MotionEvent) -> Result<bool, InjectDenied>;
}

impl<S: InjectionSink + ?Sized> InjectionSink for Box<S> {
    fn inject_motion_event(&mut self, event: &MotionEvent) -> Result<bool, InjectDenied> {
        (**self).inject_motion_event(event)
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Accept,
    Reject,
    Deny(InjectDenied),
}

/// In-memory sink that records every event offered to it
///
/// Accepts by default; can be switched to reject or deny for dry runs.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    outcome: Outcome,
    events: Vec<MotionEvent>,
}

impl RecordingSink {
    /// Sink accepting every event
    pub fn new() -> Self {
        Self {
            outcome: Outcome::Accept,
            events: Vec::new(),
        }
    }

    /// Sink answering `false` to every event
    pub fn rejecting() -> Self {
        Self {
            outcome: Outcome::Reject,
            events: Vec::new(),
        }
    }

    /// Sink denying every event with the given cause
    pub fn denying(cause: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Deny(InjectDenied::new(cause)),
            events: Vec::new(),
        }
    }

    /// Events offered so far, accepted or not
    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    /// Number of injection attempts
    pub fn attempts(&self) -> usize {
        self.events.len()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectionSink for RecordingSink {
    fn inject_motion_event(&mut self, event: &MotionEvent) -> Result<bool, InjectDenied> {
        debug!(
            "Recording event action={:#x} pointers={} t={}",
            event.action(),
            event.pointer_count(),
            event.event_time()
        );
        self.events.push(event.clone());
        match &self.outcome {
            Outcome::Accept => Ok(true),
            Outcome::Reject => Ok(false),
            Outcome::Deny(denied) => Err(denied.clone()),
        }
    }
}
