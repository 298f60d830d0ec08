//! Motion-Inject - multi-pointer motion event synthesis
//!
//! This library provides components for:
//! - Describing one motion event through a fluent builder
//! - Encoding actions, pointer counts and timestamps the way the platform expects
//! - Dispatching the constructed event to an injection sink

pub mod action;
pub mod clock;
pub mod config;
pub mod event_builder;
pub mod input_simulator;
pub mod motion_event;
pub mod pointer;
pub mod sink;

pub use action::Action;
pub use clock::{Clock, FixedClock, UptimeClock};
pub use config::Config;
pub use event_builder::{MotionEventBuilder, MotionEventParams, MotionEventRunner};
pub use input_simulator::InputSimulator;
pub use motion_event::MotionEvent;
pub use pointer::{tool_type, PointerCoords, PointerProperties, PointerType, ToolType};
pub use sink::{InjectDenied, InjectionSink, RecordingSink};

use thiserror::Error;

/// Main error type for Motion-Inject
#[derive(Error, Debug)]
pub enum MotionInjectError {
    /// The injection sink rejected the event or denied access to it.
    #[error("{message}")]
    InjectionFailed {
        message: String,
        #[source]
        cause: Option<InjectDenied>,
    },

    #[error("Unknown {kind}: '{value}'")]
    Parse { kind: &'static str, value: String },
}

impl MotionInjectError {
    pub(crate) fn rejected() -> Self {
        Self::InjectionFailed {
            message: "Could not complete pointer operation".to_string(),
            cause: None,
        }
    }

    pub(crate) fn denied(cause: InjectDenied) -> Self {
        Self::InjectionFailed {
            message: format!(
                "Could not complete pointer operation. An internal server error occurred: {}",
                cause
            ),
            cause: Some(cause),
        }
    }

    /// True for failures reported by the injection sink
    pub fn is_injection_failed(&self) -> bool {
        matches!(self, Self::InjectionFailed { .. })
    }
}
