// Render configuration: palette, resolution table, frame count and shadow
// tuning. Everything the generators consume is carried here explicitly so a
// theme variant is a config edit, not a code edit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Rgb = [u8; 3];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_accent")]
    pub accent: Rgb,
    #[serde(default = "default_accent_dark")]
    pub accent_dark: Rgb,
    #[serde(default = "default_denied")]
    pub denied: Rgb,
    #[serde(default = "default_denied_dark")]
    pub denied_dark: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            accent_dark: default_accent_dark(),
            denied: default_denied(),
            denied_dark: default_denied_dark(),
        }
    }
}

/// Drop-shadow tuning. Offsets and blur are in canonical grid units so the
/// shadow scales with the cursor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShadowStyle {
    #[serde(default = "default_shadow_color")]
    pub color: Rgb,
    #[serde(default = "default_shadow_opacity")]
    pub opacity: u8,
    #[serde(default = "default_shadow_offset")]
    pub offset: (f32, f32),
    #[serde(default = "default_shadow_blur")]
    pub blur: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: default_shadow_color(),
            opacity: default_shadow_opacity(),
            offset: default_shadow_offset(),
            blur: default_shadow_blur(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub label: String,
    pub pixels: u32,
}

impl Resolution {
    pub fn new(label: impl Into<String>, pixels: u32) -> Self {
        Self {
            label: label.into(),
            pixels,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub shadow: ShadowStyle,
    #[serde(default = "default_resolutions")]
    pub resolutions: Vec<Resolution>,
    #[serde(default = "default_frame_count")]
    pub frame_count: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            palette: Palette::default(),
            shadow: ShadowStyle::default(),
            resolutions: default_resolutions(),
            frame_count: default_frame_count(),
        }
    }
}

impl RenderConfig {
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let content = self
            .to_toml_string()
            .map_err(std::io::Error::other)?;
        fs::write(path, content)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

fn default_theme_name() -> String {
    "Glacier".to_string()
}

fn default_accent() -> Rgb {
    [0, 212, 255]
}

fn default_accent_dark() -> Rgb {
    [0, 170, 204]
}

fn default_denied() -> Rgb {
    [220, 53, 69]
}

fn default_denied_dark() -> Rgb {
    [185, 43, 58]
}

fn default_shadow_color() -> Rgb {
    [0, 0, 0]
}

fn default_shadow_opacity() -> u8 {
    60
}

fn default_shadow_offset() -> (f32, f32) {
    (1.0, 1.0)
}

fn default_shadow_blur() -> f32 {
    2.0
}

fn default_resolutions() -> Vec<Resolution> {
    vec![
        Resolution::new("x1", 24),
        Resolution::new("x1.25", 32),
        Resolution::new("x1.5", 48),
        Resolution::new("x2", 64),
    ]
}

fn default_frame_count() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.palette.accent, [0, 212, 255]);
        assert_eq!(config.palette.accent_dark, [0, 170, 204]);
        assert_eq!(config.frame_count, 12);
        assert_eq!(config.resolutions.len(), 4);
        assert_eq!(config.resolutions[0].label, "x1");
        assert_eq!(config.resolutions[0].pixels, 24);
        assert_eq!(config.resolutions[3].pixels, 64);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RenderConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = RenderConfig::from_toml_str(&toml_str).unwrap();

        assert_eq!(parsed.theme_name, config.theme_name);
        assert_eq!(parsed.palette.accent, config.palette.accent);
        assert_eq!(parsed.resolutions, config.resolutions);
        assert_eq!(parsed.shadow.opacity, 60);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = RenderConfig::from_toml_str("theme_name = \"Test\"").unwrap();
        assert_eq!(parsed.theme_name, "Test");
        assert_eq!(parsed.frame_count, 12);
        assert_eq!(parsed.resolutions.len(), 4);
    }
}
