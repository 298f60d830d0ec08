//! Per-pointer records and pointer type lookups

use std::fmt;
use std::str::FromStr;

use crate::MotionInjectError;

/// Input source for touchscreen events
pub const SOURCE_TOUCHSCREEN: i32 = 0x1002;

/// Input source for mouse events
pub const SOURCE_MOUSE: i32 = 0x2002;

/// Input source for stylus events
pub const SOURCE_STYLUS: i32 = 0x4002;

/// Kind of device driving a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerType {
    Mouse,
    Pen,
    #[default]
    Touch,
}

impl PointerType {
    /// Input source events for this pointer type are usually tagged with
    pub fn default_source(self) -> i32 {
        match self {
            PointerType::Mouse => SOURCE_MOUSE,
            PointerType::Pen => SOURCE_STYLUS,
            PointerType::Touch => SOURCE_TOUCHSCREEN,
        }
    }
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointerType::Mouse => "mouse",
            PointerType::Pen => "pen",
            PointerType::Touch => "touch",
        };
        f.write_str(name)
    }
}

impl FromStr for PointerType {
    type Err = MotionInjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mouse" => Ok(PointerType::Mouse),
            "pen" => Ok(PointerType::Pen),
            "touch" => Ok(PointerType::Touch),
            _ => Err(MotionInjectError::Parse {
                kind: "pointer type",
                value: s.to_string(),
            }),
        }
    }
}

/// Platform tool type code attached to each pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ToolType {
    #[default]
    Unknown = 0,
    Finger = 1,
    Stylus = 2,
    Mouse = 3,
    Eraser = 4,
}

impl ToolType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Resolve the tool type for a pointer type
pub fn tool_type(pointer_type: PointerType) -> ToolType {
    match pointer_type {
        PointerType::Mouse => ToolType::Mouse,
        PointerType::Pen => ToolType::Stylus,
        PointerType::Touch => ToolType::Finger,
    }
}

/// Position and contact shape of one pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerCoords {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub size: f32,
}

impl PointerCoords {
    /// Full-pressure contact at (x, y)
    pub fn contact(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            pressure: 1.0,
            size: 1.0,
        }
    }
}

/// Identity and tool of one pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerProperties {
    pub id: u32,
    pub tool_type: ToolType,
}
