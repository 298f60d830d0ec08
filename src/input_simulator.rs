//! Desktop input simulation using rdev
//!
//! Replays motion events as OS-level mouse input. A desktop has a single
//! cursor, so only the first pointer of an event is used.

use rdev::{simulate, Button, EventType};
use tracing::debug;

use crate::action::Action;
use crate::motion_event::MotionEvent;
use crate::sink::{InjectDenied, InjectionSink};

/// Injection sink that drives the desktop mouse
#[derive(Debug, Clone, Copy)]
pub struct InputSimulator {
    button: Button,
}

impl InputSimulator {
    /// Simulator pressing the left mouse button for contacts
    pub fn new() -> Self {
        Self {
            button: Button::Left,
        }
    }

    /// Use a different mouse button for contacts
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }

    /// OS events that replay `event`, or `None` if it has no desktop equivalent
    fn translate(&self, event: &MotionEvent) -> Option<Vec<EventType>> {
        let coords = event.pointer_coords(0)?;
        let to = EventType::MouseMove {
            x: coords.x as f64,
            y: coords.y as f64,
        };

        let events = match event.action_masked()? {
            Action::Down | Action::PointerDown => vec![to, EventType::ButtonPress(self.button)],
            Action::Up | Action::PointerUp | Action::Cancel => {
                vec![to, EventType::ButtonRelease(self.button)]
            }
            Action::Move | Action::HoverMove => vec![to],
            _ => return None,
        };
        Some(events)
    }
}

impl Default for InputSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectionSink for InputSimulator {
    fn inject_motion_event(&mut self, event: &MotionEvent) -> Result<bool, InjectDenied> {
        let Some(events) = self.translate(event) else {
            debug!(
                "No desktop equivalent for action {:#x} with {} pointers",
                event.action(),
                event.pointer_count()
            );
            return Ok(false);
        };

        for event_type in &events {
            debug!("Simulating {:?}", event_type);
            simulate(event_type)
                .map_err(|e| InjectDenied::new(format!("rdev simulate failed: {:?}", e)))?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::event_builder::MotionEventBuilder;

    fn event(action: Action, x: Vec<f32>, y: Vec<f32>) -> MotionEvent {
        MotionEventBuilder::new()
            .with_action(action)
            .with_x(x)
            .with_y(y)
            .build()
            .synthesize(&FixedClock(1))
            .unwrap()
    }

    #[test]
    fn test_down_moves_then_presses() {
        let events = InputSimulator::new()
            .translate(&event(Action::Down, vec![10.0, 99.0], vec![20.0, 99.0]))
            .unwrap();
        assert_eq!(
            events,
            vec![
                EventType::MouseMove { x: 10.0, y: 20.0 },
                EventType::ButtonPress(Button::Left),
            ]
        );
    }

    #[test]
    fn test_pointer_up_releases_configured_button() {
        let events = InputSimulator::new()
            .with_button(Button::Right)
            .translate(&event(Action::PointerUp, vec![1.0, 2.0], vec![3.0, 4.0]))
            .unwrap();
        assert_eq!(events.last(), Some(&EventType::ButtonRelease(Button::Right)));
    }

    #[test]
    fn test_scroll_has_no_equivalent() {
        let sim = InputSimulator::new();
        assert!(sim.translate(&event(Action::Scroll, vec![1.0], vec![1.0])).is_none());
    }

    #[test]
    fn test_button_and_hover_transitions_have_no_equivalent() {
        let sim = InputSimulator::new();
        for action in [
            Action::ButtonPress,
            Action::ButtonRelease,
            Action::HoverEnter,
            Action::HoverExit,
        ] {
            assert!(sim.translate(&event(action, vec![1.0], vec![1.0])).is_none());
        }
    }

    #[test]
    fn test_event_without_effective_pointers_is_not_injected() {
        let down_without_y = MotionEventBuilder::new()
            .with_action(Action::Down)
            .with_x(vec![5.0])
            .build()
            .synthesize(&FixedClock(1))
            .unwrap();
        assert_eq!(down_without_y.pointer_count(), 0);

        let mut sim = InputSimulator::new();
        assert!(sim.translate(&down_without_y).is_none());
        assert_eq!(sim.inject_motion_event(&down_without_y), Ok(false));
    }
}
