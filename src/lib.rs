// Library exports for cursorgen

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod shapes;

// Re-export the types a theme-generating caller needs
pub use config::{Palette, RenderConfig, Resolution, ShadowStyle};
pub use error::RenderError;
pub use pipeline::{ThemeBuilder, ThemeSummary};
pub use render::scale::Scale;
pub use shapes::{Animation, Direction, Frame, Shape};
