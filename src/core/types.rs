use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GROUND_LEVEL, DEFAULT_LEFT_WALL, DEFAULT_RIGHT_WALL};

/// Floor and walls of the arena. There is no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub ground_y: f64,
    pub left_x: f64,
    pub right_x: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            ground_y: DEFAULT_GROUND_LEVEL,
            left_x: DEFAULT_LEFT_WALL,
            right_x: DEFAULT_RIGHT_WALL,
        }
    }
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.right_x - self.left_x
    }
}

/// Outline a renderer should draw a body with. Has no effect on physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeTag {
    Circle,
    Square,
    Triangle,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 3] = [ShapeTag::Circle, ShapeTag::Square, ShapeTag::Triangle];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeTag::Circle => "circle",
            ShapeTag::Square => "square",
            ShapeTag::Triangle => "triangle",
        }
    }
}

/// Fill color a renderer should draw a body with. Has no effect on physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    White,
    Cyan,
    Magenta,
}

impl ColorTag {
    pub const ALL: [ColorTag; 9] = [
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Yellow,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::White,
        ColorTag::Cyan,
        ColorTag::Magenta,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::White => "white",
            ColorTag::Cyan => "cyan",
            ColorTag::Magenta => "magenta",
        }
    }

    /// sRGB value for renderers that want one.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ColorTag::Red => [255, 0, 0],
            ColorTag::Green => [0, 255, 0],
            ColorTag::Blue => [0, 0, 255],
            ColorTag::Yellow => [255, 255, 0],
            ColorTag::Purple => [160, 32, 240],
            ColorTag::Orange => [255, 165, 0],
            ColorTag::White => [255, 255, 255],
            ColorTag::Cyan => [0, 255, 255],
            ColorTag::Magenta => [255, 0, 255],
        }
    }
}

/// Initial state of a body, used when spawning deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    pub velocity: DVec2,
    pub size: f64,
    pub shape: ShapeTag,
    pub color: ColorTag,
}

impl BodyParams {
    pub fn new(velocity: DVec2, size: f64) -> Self {
        Self {
            velocity,
            size,
            ..Self::default()
        }
    }
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            velocity: DVec2::ZERO,
            size: 20.0,
            shape: ShapeTag::Circle,
            color: ColorTag::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_match_arena() {
        let bounds = Bounds::default();
        assert_eq!(bounds.ground_y, -250.0);
        assert_eq!(bounds.width(), 760.0);
    }

    #[test]
    fn tags_serialize_lowercase() {
        let json = serde_json::to_string(&(ShapeTag::Triangle, ColorTag::Magenta)).unwrap();
        assert_eq!(json, r#"["triangle","magenta"]"#);
        assert_eq!(ColorTag::Orange.name(), "orange");
        assert_eq!(ShapeTag::ALL.len(), 3);
        assert_eq!(ColorTag::ALL.len(), 9);
    }

    #[test]
    fn every_color_has_a_distinct_rgb() {
        let mut seen: Vec<[u8; 3]> = ColorTag::ALL.iter().map(ColorTag::rgb).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ColorTag::ALL.len());
        assert_eq!(ColorTag::Purple.rgb(), [160, 32, 240]);
    }
}
