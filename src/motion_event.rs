//! Constructed motion event record

use crate::action::{self, Action};
use crate::pointer::{PointerCoords, PointerProperties};

/// A fully encoded motion event, ready for injection
///
/// The pointer arrays may hold more entries than `pointer_count`. Only the
/// first `pointer_count` entries belong to the event.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    pub(crate) down_time: i64,
    pub(crate) event_time: i64,
    pub(crate) action: i32,
    pub(crate) pointer_count: usize,
    pub(crate) pointer_properties: Vec<PointerProperties>,
    pub(crate) pointer_coords: Vec<PointerCoords>,
    pub(crate) meta_state: i32,
    pub(crate) button_state: i32,
    pub(crate) x_precision: f32,
    pub(crate) y_precision: f32,
    pub(crate) device_id: i32,
    pub(crate) edge_flags: i32,
    pub(crate) source: i32,
    pub(crate) flags: i32,
}

impl MotionEvent {
    pub fn down_time(&self) -> i64 {
        self.down_time
    }

    pub fn event_time(&self) -> i64 {
        self.event_time
    }

    /// Encoded action, including any packed pointer index
    pub fn action(&self) -> i32 {
        self.action
    }

    /// Action without the pointer index
    pub fn action_masked(&self) -> Option<Action> {
        Action::from_code(self.action)
    }

    /// Pointer index packed into the action
    pub fn action_index(&self) -> u32 {
        action::pointer_index(self.action)
    }

    /// Effective number of pointers carried by the event
    pub fn pointer_count(&self) -> usize {
        self.pointer_count
    }

    /// Pointers belonging to the event, in id order
    pub fn pointers(&self) -> impl Iterator<Item = (&PointerProperties, &PointerCoords)> {
        self.pointer_properties
            .iter()
            .zip(self.pointer_coords.iter())
            .take(self.pointer_count)
    }

    /// Coordinates of pointer `index`, if it belongs to the event
    pub fn pointer_coords(&self, index: usize) -> Option<&PointerCoords> {
        if index < self.pointer_count {
            self.pointer_coords.get(index)
        } else {
            None
        }
    }

    /// Properties of pointer `index`, if it belongs to the event
    pub fn pointer_properties(&self, index: usize) -> Option<&PointerProperties> {
        if index < self.pointer_count {
            self.pointer_properties.get(index)
        } else {
            None
        }
    }

    /// Every coordinate record built for the event, including collapsed ones
    pub fn raw_pointer_coords(&self) -> &[PointerCoords] {
        &self.pointer_coords
    }

    /// Every property record built for the event, including collapsed ones
    pub fn raw_pointer_properties(&self) -> &[PointerProperties] {
        &self.pointer_properties
    }

    pub fn meta_state(&self) -> i32 {
        self.meta_state
    }

    pub fn button_state(&self) -> i32 {
        self.button_state
    }

    pub fn x_precision(&self) -> f32 {
        self.x_precision
    }

    pub fn y_precision(&self) -> f32 {
        self.y_precision
    }

    pub fn device_id(&self) -> i32 {
        self.device_id
    }

    pub fn edge_flags(&self) -> i32 {
        self.edge_flags
    }

    pub fn source(&self) -> i32 {
        self.source
    }

    /// Always 0; event flags are not modeled
    pub fn flags(&self) -> i32 {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::ToolType;

    fn two_pointer_event(pointer_count: usize) -> MotionEvent {
        MotionEvent {
            down_time: 10,
            event_time: 20,
            action: Action::PointerUp.with_pointer_index(1),
            pointer_count,
            pointer_properties: vec![
                PointerProperties { id: 0, tool_type: ToolType::Finger },
                PointerProperties { id: 1, tool_type: ToolType::Finger },
            ],
            pointer_coords: vec![
                PointerCoords::contact(1.0, 2.0),
                PointerCoords::contact(3.0, 4.0),
            ],
            meta_state: 0,
            button_state: 0,
            x_precision: 1.0,
            y_precision: 1.0,
            device_id: 0,
            edge_flags: 0,
            source: 0,
            flags: 0,
        }
    }

    #[test]
    fn test_pointers_respect_effective_count() {
        let event = two_pointer_event(1);
        assert_eq!(event.pointers().count(), 1);
        assert!(event.pointer_coords(1).is_none());
        assert_eq!(event.raw_pointer_coords().len(), 2);
    }

    #[test]
    fn test_action_decoding() {
        let event = two_pointer_event(2);
        assert_eq!(event.action_masked(), Some(Action::PointerUp));
        assert_eq!(event.action_index(), 1);
        assert_eq!(event.pointer_coords(1).map(|c| c.x), Some(3.0));
    }
}
