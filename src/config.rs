//! Configuration management for Motion-Inject

use crate::event_builder::MotionEventBuilder;
use crate::pointer::PointerType;

/// Device metadata applied to synthesized events
#[derive(Debug, Clone)]
pub struct Config {
    /// Pointer type used for every pointer
    pub pointer_type: PointerType,

    /// Input source; `None` derives it from the pointer type
    pub source: Option<i32>,

    /// Id of the device the events claim to come from
    pub device_id: i32,

    /// Coordinate precision reported on both axes
    pub x_precision: f32,
    pub y_precision: f32,

    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pointer_type: PointerType::Touch,
            source: None,
            device_id: 0,
            x_precision: 1.0,
            y_precision: 1.0,
            verbose: false,
        }
    }
}

impl Config {
    /// Use a different pointer type
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Override the input source
    pub fn with_source(mut self, source: i32) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_device_id(mut self, device_id: i32) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn with_precision(mut self, x_precision: f32, y_precision: f32) -> Self {
        self.x_precision = x_precision;
        self.y_precision = y_precision;
        self
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Input source events are tagged with
    pub fn resolved_source(&self) -> i32 {
        self.source
            .unwrap_or_else(|| self.pointer_type.default_source())
    }

    /// Event builder pre-loaded with this device metadata
    pub fn builder(&self) -> MotionEventBuilder {
        MotionEventBuilder::new()
            .with_pointer_type(self.pointer_type)
            .with_source(self.resolved_source())
            .with_device_id(self.device_id)
            .with_x_precision(self.x_precision)
            .with_y_precision(self.y_precision)
    }
}
