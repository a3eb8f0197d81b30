use std::path::Path;

use anyhow::Context;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Named colors used by all renderers.
///
/// Passed explicitly to every `render_*` call; there is no global theme
/// state in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent_primary: Color,
    pub accent_error: Color,
    pub border_primary: Color,
    pub border_secondary: Color,
    pub bg_surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Rgb(204, 204, 204),
            text_muted: Color::Rgb(110, 110, 110),
            accent_primary: Color::Rgb(86, 156, 214),
            accent_error: Color::Rgb(224, 108, 117),
            border_primary: Color::Rgb(90, 90, 90),
            border_secondary: Color::Rgb(60, 60, 60),
            bg_surface: Color::Rgb(37, 37, 38),
        }
    }
}

/// Layout constants shared by the field rows.
///
/// These travel as an explicit object rather than module-level constants,
/// so two forms can use different metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Width of the attribute-name column, in terminal cells
    pub label_width: u16,
    /// Height of a control row (bordered block)
    pub block_height: u16,
    /// Horizontal spacing between the control body and its neighbors
    pub spacing: u16,
    /// Width of the slider's inline numeric field
    pub field_width: u16,
    /// Width of the revert cell on the right edge
    pub revert_width: u16,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            label_width: 20,
            block_height: 3,
            spacing: 1,
            field_width: 8,
            revert_width: 4,
        }
    }
}

/// Top-level configuration: theme + widget metrics, loadable from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    pub widgets: WidgetConfig,
}

impl UiConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_consistent() {
        let cfg = WidgetConfig::default();
        assert!(cfg.label_width > 0);
        assert!(cfg.block_height >= 3); // bordered blocks need 3 rows
        assert!(cfg.revert_width >= 1);
    }

    #[test]
    fn test_parse_partial_toml() {
        // Unspecified keys fall back to defaults
        let cfg: UiConfig = toml::from_str(
            r##"
            [widgets]
            label_width = 30

            [theme]
            accent_primary = "#ffcc00"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.widgets.label_width, 30);
        assert_eq!(cfg.widgets.field_width, WidgetConfig::default().field_width);
        assert_eq!(cfg.theme.accent_primary, Color::Rgb(0xff, 0xcc, 0x00));
    }

    #[test]
    fn test_parse_empty_toml() {
        let cfg: UiConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.widgets.label_width, WidgetConfig::default().label_width);
    }
}
