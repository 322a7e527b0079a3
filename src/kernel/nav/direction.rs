use serde::{Deserialize, Serialize};

/// Axis along which focus moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NavDirection {
    pub const ALL: [NavDirection; 4] = [
        NavDirection::Left,
        NavDirection::Right,
        NavDirection::Up,
        NavDirection::Down,
    ];

    /// Signed step along the movement axis: negative is left/up.
    pub fn to_navigation_params(self) -> (i32, Axis) {
        match self {
            Self::Left => (-1, Axis::Horizontal),
            Self::Right => (1, Axis::Horizontal),
            Self::Up => (-1, Axis::Vertical),
            Self::Down => (1, Axis::Vertical),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "h" => Some(Self::Left),
            "right" | "l" => Some(Self::Right),
            "up" | "k" => Some(Self::Up),
            "down" | "j" => Some(Self::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/nav/direction.rs"]
mod tests;
