// The cursor catalog: a closed set of shape and animation identities. Each
// render is a pure function of the scale context and the render config; no
// state survives a call.

pub mod arrow;
pub mod hand;
pub mod marks;
pub mod resize;
pub mod spinner;
pub mod zoom;

use image::RgbaImage;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::render::scale::Scale;

/// Compass direction for the parametric resize generator. Each value is a
/// unit vector on the grid; the geometry is derived from it, never drawn
/// per-direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::South => "s",
            Direction::East => "e",
            Direction::West => "w",
            Direction::NorthEast => "ne",
            Direction::NorthWest => "nw",
            Direction::SouthEast => "se",
            Direction::SouthWest => "sw",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, RenderError> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label() == label)
            .ok_or_else(|| RenderError::UnknownDirection(label.to_string()))
    }

    pub fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.vector();
        dx != 0 && dy != 0
    }
}

/// One static cursor identity. The set is fixed: 14 named shapes plus the 8
/// compass resize variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Default,
    Pointer,
    Text,
    Help,
    Crosshair,
    Move,
    NotAllowed,
    Grab,
    Grabbing,
    ZoomIn,
    ZoomOut,
    ColResize,
    RowResize,
    AllScroll,
    Resize(Direction),
}

impl Shape {
    const NAMED: [Shape; 14] = [
        Shape::Default,
        Shape::Pointer,
        Shape::Text,
        Shape::Help,
        Shape::Crosshair,
        Shape::Move,
        Shape::NotAllowed,
        Shape::Grab,
        Shape::Grabbing,
        Shape::ZoomIn,
        Shape::ZoomOut,
        Shape::ColResize,
        Shape::RowResize,
        Shape::AllScroll,
    ];

    pub fn all() -> Vec<Shape> {
        let mut shapes = Self::NAMED.to_vec();
        shapes.extend(Direction::ALL.iter().map(|d| Shape::Resize(*d)));
        shapes
    }

    pub fn name(&self) -> String {
        match self {
            Shape::Default => "default".to_string(),
            Shape::Pointer => "pointer".to_string(),
            Shape::Text => "text".to_string(),
            Shape::Help => "help".to_string(),
            Shape::Crosshair => "crosshair".to_string(),
            Shape::Move => "move".to_string(),
            Shape::NotAllowed => "not-allowed".to_string(),
            Shape::Grab => "grab".to_string(),
            Shape::Grabbing => "grabbing".to_string(),
            Shape::ZoomIn => "zoom-in".to_string(),
            Shape::ZoomOut => "zoom-out".to_string(),
            Shape::ColResize => "col-resize".to_string(),
            Shape::RowResize => "row-resize".to_string(),
            Shape::AllScroll => "all-scroll".to_string(),
            Shape::Resize(direction) => format!("{}-resize", direction.label()),
        }
    }

    pub fn render(&self, scale: &Scale, config: &RenderConfig) -> RgbaImage {
        match self {
            Shape::Default => arrow::default_arrow(scale, config),
            Shape::Pointer => hand::pointer(scale, config),
            Shape::Text => marks::text(scale, config),
            Shape::Help => arrow::help(scale, config),
            Shape::Crosshair => marks::crosshair(scale, config),
            Shape::Move => resize::move_arrows(scale, config),
            Shape::NotAllowed => marks::not_allowed(scale, config),
            Shape::Grab => hand::grab(scale, config),
            Shape::Grabbing => hand::grabbing(scale, config),
            Shape::ZoomIn => zoom::zoom_in(scale, config),
            Shape::ZoomOut => zoom::zoom_out(scale, config),
            Shape::ColResize => resize::col_resize(scale, config),
            Shape::RowResize => resize::row_resize(scale, config),
            Shape::AllScroll => resize::all_scroll(scale, config),
            Shape::Resize(direction) => resize::compass(scale, config, *direction),
        }
    }
}

/// Animated cursor identity; every frame is computed independently from its
/// index, so frames can be rendered in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Wait,
    Progress,
}

impl Animation {
    pub const ALL: [Animation; 2] = [Animation::Wait, Animation::Progress];

    pub fn name(&self) -> &'static str {
        match self {
            Animation::Wait => "wait",
            Animation::Progress => "progress",
        }
    }

    pub fn render_frame(&self, scale: &Scale, config: &RenderConfig, frame: Frame) -> RgbaImage {
        match self {
            Animation::Wait => spinner::wait_frame(scale, config, frame),
            Animation::Progress => spinner::progress_frame(scale, config, frame),
        }
    }
}

/// Position of one frame within an animation loop. The index is stored
/// modulo the total, which makes frame k and frame k+total identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    index: u32,
    total: u32,
}

impl Frame {
    pub fn new(index: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            index: index % total,
            total,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}
