use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_visible: String,
    pub text_hidden: String,
    pub text_hidden_bg: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub success: String,
    #[serde(default = "default_confetti")]
    pub confetti: Vec<String>,
}

fn default_confetti() -> Vec<String> {
    vec![
        "#a855f7".to_string(),
        "#d8b4fe".to_string(),
        "#f3e8ff".to_string(),
        "#fbbf24".to_string(),
    ]
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("versed")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("grape").unwrap_or_else(|| Self {
            name: "grape".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#241b2f".to_string(),
            fg: "#e8e3f5".to_string(),
            text_visible: "#f3e8ff".to_string(),
            text_hidden: "#8b6cb8".to_string(),
            text_hidden_bg: "#352a47".to_string(),
            accent: "#a855f7".to_string(),
            accent_dim: "#6b21a8".to_string(),
            border: "#584377".to_string(),
            header_bg: "#3b2d52".to_string(),
            header_fg: "#f3e8ff".to_string(),
            bar_filled: "#a855f7".to_string(),
            bar_empty: "#3b2d52".to_string(),
            success: "#fbbf24".to_string(),
            confetti: default_confetti(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_visible(&self) -> Color { Self::parse_color(&self.text_visible) }
    pub fn text_hidden(&self) -> Color { Self::parse_color(&self.text_hidden) }
    pub fn text_hidden_bg(&self) -> Color { Self::parse_color(&self.text_hidden_bg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }

    /// Confetti palette lookup; falls back to the accent color if a theme
    /// file declares an empty list.
    pub fn confetti_color(&self, index: usize) -> Color {
        if self.confetti.is_empty() {
            return self.accent();
        }
        Self::parse_color(&self.confetti[index % self.confetti.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(
            ThemeColors::parse_color("#a855f7"),
            Color::Rgb(0xa8, 0x55, 0xf7)
        );
        assert_eq!(ThemeColors::parse_color("not-a-color"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"grape".to_string()));
        for name in names {
            let theme = Theme::load(&name).unwrap_or_else(|| panic!("theme {name} should load"));
            assert!(
                !theme.colors.confetti.is_empty(),
                "theme {name} has no confetti palette"
            );
        }
    }

    #[test]
    fn test_confetti_color_wraps_palette() {
        let colors = ThemeColors::default();
        assert_eq!(colors.confetti_color(0), colors.confetti_color(4));
    }
}
