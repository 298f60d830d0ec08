//! Motion event action codes
//!
//! An encoded action carries the action itself in the low byte and, for
//! pointer-specific transitions, the index of the affected pointer in the
//! second byte.

use std::fmt;
use std::str::FromStr;

use crate::MotionInjectError;

/// Bits of an encoded action holding the action itself
pub const ACTION_MASK: i32 = 0xff;

/// Bits of an encoded action holding the pointer index
pub const ACTION_POINTER_INDEX_MASK: i32 = 0xff00;

/// Shift applied to a pointer index before packing it into an action
pub const ACTION_POINTER_INDEX_SHIFT: i32 = 8;

/// Semantic operation a motion event represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Action {
    #[default]
    Down = 0,
    Up = 1,
    Move = 2,
    Cancel = 3,
    Outside = 4,
    PointerDown = 5,
    PointerUp = 6,
    HoverMove = 7,
    Scroll = 8,
    HoverEnter = 9,
    HoverExit = 10,
    ButtonPress = 11,
    ButtonRelease = 12,
}

impl Action {
    const ALL: [Action; 13] = [
        Action::Down,
        Action::Up,
        Action::Move,
        Action::Cancel,
        Action::Outside,
        Action::PointerDown,
        Action::PointerUp,
        Action::HoverMove,
        Action::Scroll,
        Action::HoverEnter,
        Action::HoverExit,
        Action::ButtonPress,
        Action::ButtonRelease,
    ];

    /// Numeric platform code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Decode the action part of a (possibly encoded) action code
    pub fn from_code(code: i32) -> Option<Self> {
        let masked = masked(code);
        Self::ALL.iter().copied().find(|a| a.code() == masked)
    }

    /// PointerDown and PointerUp describe a secondary pointer changing state
    pub fn is_pointer_transition(self) -> bool {
        matches!(self, Action::PointerDown | Action::PointerUp)
    }

    /// Down, Up and Cancel always carry a single pointer
    pub fn is_single_pointer(self) -> bool {
        matches!(self, Action::Down | Action::Up | Action::Cancel)
    }

    /// Pack a pointer index into the high bits of this action's code
    pub fn with_pointer_index(self, index: u32) -> i32 {
        self.code() | ((index as i32) << ACTION_POINTER_INDEX_SHIFT)
    }

    fn name(self) -> &'static str {
        match self {
            Action::Down => "down",
            Action::Up => "up",
            Action::Move => "move",
            Action::Cancel => "cancel",
            Action::Outside => "outside",
            Action::PointerDown => "pointer-down",
            Action::PointerUp => "pointer-up",
            Action::HoverMove => "hover-move",
            Action::Scroll => "scroll",
            Action::HoverEnter => "hover-enter",
            Action::HoverExit => "hover-exit",
            Action::ButtonPress => "button-press",
            Action::ButtonRelease => "button-release",
        }
    }
}

/// Strip the pointer index from an encoded action
pub fn masked(code: i32) -> i32 {
    code & ACTION_MASK
}

/// Extract the pointer index packed into an encoded action
pub fn pointer_index(code: i32) -> u32 {
    ((code & ACTION_POINTER_INDEX_MASK) >> ACTION_POINTER_INDEX_SHIFT) as u32
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = MotionInjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| MotionInjectError::Parse {
                kind: "action",
                value: s.to_string(),
            })
    }
}
