//! Motion event builder and synthesizer
//!
//! A [`MotionEventBuilder`] collects the parameters of one event. Building it
//! yields a [`MotionEventRunner`], which encodes the event and hands it to an
//! [`InjectionSink`] exactly once.

use tracing::{debug, error, info, warn};

use crate::action::Action;
use crate::clock::{Clock, UptimeClock};
use crate::motion_event::MotionEvent;
use crate::pointer::{tool_type, PointerCoords, PointerProperties, PointerType};
use crate::sink::InjectionSink;
use crate::MotionInjectError;

/// Parameters of a single motion event
///
/// Unset fields keep their zero value. Nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionEventParams {
    pub down_time: i64,
    pub event_time: i64,
    pub action: Action,
    pub x: Option<Vec<f32>>,
    pub y: Option<Vec<f32>>,
    pub meta_state: i32,
    pub button_state: i32,
    pub x_precision: f32,
    pub y_precision: f32,
    pub device_id: i32,
    pub edge_flags: i32,
    pub source: i32,
    pub pointer_type: PointerType,
}

/// Fluent builder for one motion event
#[derive(Debug, Clone, Default)]
pub struct MotionEventBuilder {
    params: MotionEventParams,
}

impl MotionEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// X coordinate of every active pointer, in pointer order
    pub fn with_x(mut self, x: Vec<f32>) -> Self {
        self.params.x = Some(x);
        self
    }

    /// Y coordinate of every active pointer, in pointer order
    pub fn with_y(mut self, y: Vec<f32>) -> Self {
        self.params.y = Some(y);
        self
    }

    /// Time the gesture started
    pub fn with_down_time(mut self, down_time: i64) -> Self {
        self.params.down_time = down_time;
        self
    }

    /// Time of this event; non-positive means "when dispatched"
    pub fn with_event_time(mut self, event_time: i64) -> Self {
        self.params.event_time = event_time;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.params.action = action;
        self
    }

    pub fn with_meta_state(mut self, meta_state: i32) -> Self {
        self.params.meta_state = meta_state;
        self
    }

    pub fn with_button_state(mut self, button_state: i32) -> Self {
        self.params.button_state = button_state;
        self
    }

    pub fn with_x_precision(mut self, x_precision: f32) -> Self {
        self.params.x_precision = x_precision;
        self
    }

    pub fn with_y_precision(mut self, y_precision: f32) -> Self {
        self.params.y_precision = y_precision;
        self
    }

    pub fn with_device_id(mut self, device_id: i32) -> Self {
        self.params.device_id = device_id;
        self
    }

    pub fn with_source(mut self, source: i32) -> Self {
        self.params.source = source;
        self
    }

    pub fn with_edge_flags(mut self, edge_flags: i32) -> Self {
        self.params.edge_flags = edge_flags;
        self
    }

    /// Pointer type applied to every pointer of the event
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.params.pointer_type = pointer_type;
        self
    }

    /// Freeze the parameters
    pub fn build(self) -> MotionEventRunner {
        MotionEventRunner {
            params: self.params,
        }
    }
}

/// Frozen event parameters, consumed by a single dispatch
#[derive(Debug, Clone)]
pub struct MotionEventRunner {
    params: MotionEventParams,
}

impl MotionEventRunner {
    pub fn params(&self) -> &MotionEventParams {
        &self.params
    }

    /// Synthesize the event and inject it, reading "now" from the uptime clock
    ///
    /// Returns `Ok(None)` without touching the sink when there are no
    /// pointers and the action is not a cancel.
    ///
    /// The uptime clock counts from its first read in this process, not from
    /// system boot. A `down_time` taken from another clock may be later than
    /// the resolved event time; take it from [`UptimeClock`] or pass the
    /// matching clock to [`run_with_clock`](Self::run_with_clock).
    pub fn run<S>(self, sink: &mut S) -> Result<Option<MotionEvent>, MotionInjectError>
    where
        S: InjectionSink + ?Sized,
    {
        self.run_with_clock(sink, &UptimeClock)
    }

    /// Same as [`run`](Self::run) with an explicit clock
    pub fn run_with_clock<S, C>(
        self,
        sink: &mut S,
        clock: &C,
    ) -> Result<Option<MotionEvent>, MotionInjectError>
    where
        S: InjectionSink + ?Sized,
        C: Clock + ?Sized,
    {
        let Some(event) = self.synthesize(clock) else {
            return Ok(None);
        };

        match sink.inject_motion_event(&event) {
            Ok(true) => {
                debug!("Injected motion event (action {:#x})", event.action());
                Ok(Some(event))
            }
            Ok(false) => {
                error!("Sink rejected motion event (action {:#x})", event.action());
                Err(MotionInjectError::rejected())
            }
            Err(denied) => {
                error!("Sink denied motion event injection: {}", denied);
                Err(MotionInjectError::denied(denied))
            }
        }
    }

    /// Build the event record without dispatching it
    pub fn synthesize<C>(&self, clock: &C) -> Option<MotionEvent>
    where
        C: Clock + ?Sized,
    {
        let p = &self.params;
        let x = p.x.as_deref().unwrap_or_default();
        let y = p.y.as_deref().unwrap_or_default();
        let nominal = x.len();

        info!("Calling pointers: {}", nominal);

        if nominal == 0 && p.action != Action::Cancel {
            debug!("No pointers for {}, nothing to inject", p.action);
            return None;
        }

        if y.len() != nominal {
            warn!(
                "Pointer coordinate mismatch: {} x values, {} y values",
                nominal,
                y.len()
            );
        }

        let tool = tool_type(p.pointer_type);
        let pointer_coords: Vec<PointerCoords> = x
            .iter()
            .enumerate()
            .map(|(i, &px)| PointerCoords::contact(px, y.get(i).copied().unwrap_or_default()))
            .collect();
        let pointer_properties: Vec<PointerProperties> = (0..nominal)
            .map(|i| PointerProperties {
                id: i as u32,
                tool_type: tool,
            })
            .collect();

        // PointerDown/PointerUp always name the pointer in slot 1
        let mut action = p.action.code();
        if nominal > 1 && p.action.is_pointer_transition() {
            action = p.action.with_pointer_index(pointer_properties[1].id);
            debug!("Encoded {} for pointer 1 as {:#x}", p.action, action);
        }

        // Down, Up and Cancel carry exactly the first pointer
        let pointer_count = if p.action.is_single_pointer() {
            if p.x.is_some() && p.y.is_some() {
                1
            } else {
                0
            }
        } else {
            nominal
        };

        let event_time = if p.event_time > 0 {
            p.event_time
        } else {
            clock.now_millis()
        };

        Some(MotionEvent {
            down_time: p.down_time,
            event_time,
            action,
            pointer_count,
            pointer_properties,
            pointer_coords,
            meta_state: p.meta_state,
            button_state: p.button_state,
            x_precision: p.x_precision,
            y_precision: p.y_precision,
            device_id: p.device_id,
            edge_flags: p.edge_flags,
            source: p.source,
            flags: 0,
        })
    }
}
