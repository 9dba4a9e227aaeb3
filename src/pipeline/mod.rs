pub mod png_writer;
pub mod theme;

pub use theme::{RenderJob, ThemeBuilder, ThemeSummary};
