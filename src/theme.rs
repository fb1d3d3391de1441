use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::calendar::format::parse_hex_color;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme. Falls back to the default until one is installed.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Install the theme for the rest of the process. Only the first call wins.
pub fn install(theme: Theme) {
    let name = theme.name.clone();
    if THEME.set(theme).is_err() {
        warn!(theme = %name, "theme already installed, keeping the first one");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    pub conflict: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Black).bg(Color::Yellow),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            highlight: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            conflict: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Read `path` and apply `preset` (if given) over the file's own preset.
    /// Problems with the file are logged and the defaults are used.
    pub fn resolve(path: &Path, preset: Option<&str>) -> Self {
        let mut config = read_config(path).unwrap_or_default();
        if let Some(preset) = preset {
            config.preset = Some(preset.to_string());
        }
        let theme = config.into_theme();
        debug!(theme = %theme.name, "theme resolved");
        theme
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "dracula" => Some(DRACULA.theme()),
            "gruvbox" => Some(GRUVBOX.theme()),
            "nord" => Some(NORD.theme()),
            _ => None,
        }
    }

    /// Border color for a cell drawn with `style`.
    pub fn border_for(style: Style) -> Style {
        Style::default().fg(style.bg.unwrap_or(Color::Cyan))
    }
}

/// The colors a preset is built from.
struct Palette {
    name: &'static str,
    today: Color,
    selected: Color,
    text: Color,
    dim: Color,
    border: Color,
    surface: Color,
    conflict: Color,
}

const DRACULA: Palette = Palette {
    name: "dracula",
    today: Color::Rgb(189, 147, 249),    // purple
    selected: Color::Rgb(139, 233, 253), // cyan
    text: Color::Rgb(248, 248, 242),
    dim: Color::Rgb(98, 114, 164),
    border: Color::Rgb(68, 71, 90),
    surface: Color::Rgb(68, 71, 90),
    conflict: Color::Rgb(255, 85, 85),
};

const GRUVBOX: Palette = Palette {
    name: "gruvbox",
    today: Color::Rgb(250, 189, 47),     // yellow
    selected: Color::Rgb(131, 165, 152), // aqua
    text: Color::Rgb(235, 219, 178),
    dim: Color::Rgb(146, 131, 116),
    border: Color::Rgb(102, 92, 84),
    surface: Color::Rgb(80, 73, 69),
    conflict: Color::Rgb(251, 73, 52),
};

const NORD: Palette = Palette {
    name: "nord",
    today: Color::Rgb(235, 203, 139),    // yellow
    selected: Color::Rgb(136, 192, 208), // frost
    text: Color::Rgb(229, 233, 240),
    dim: Color::Rgb(76, 86, 106),
    border: Color::Rgb(67, 76, 94),
    surface: Color::Rgb(67, 76, 94),
    conflict: Color::Rgb(191, 97, 106),
};

impl Palette {
    fn theme(&self) -> Theme {
        Theme {
            name: self.name.to_string(),
            today: Style::default().fg(Color::Black).bg(self.today),
            selected: Style::default().fg(Color::Black).bg(self.selected),
            header: Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(self.dim),
            border: Style::default().fg(self.border),
            status: Style::default().fg(self.text).bg(self.surface),
            highlight: Style::default().bg(self.surface).add_modifier(Modifier::BOLD),
            conflict: Style::default().fg(self.conflict).add_modifier(Modifier::BOLD),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("month-view")
        .join("theme.toml")
}

fn read_config(path: &Path) -> Option<ThemeConfig> {
    if !path.exists() {
        debug!(file = %path.display(), "no theme file");
        return None;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(file = %path.display(), error = %err, "failed reading theme file");
            return None;
        }
    };

    match toml::from_str::<ThemeConfig>(&content) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(file = %path.display(), error = %err, "failed parsing theme file");
            None
        }
    }
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeConfig {
    preset: Option<String>,
    today_fg: Option<String>,
    today_bg: Option<String>,
    selected_fg: Option<String>,
    selected_bg: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    highlight_bg: Option<String>,
    conflict_fg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let mut theme = match self.preset.as_deref() {
            Some(name) => Theme::preset(name).unwrap_or_else(|| {
                warn!(preset = name, "unknown theme preset, using default");
                Theme::default()
            }),
            None => Theme::default(),
        };

        let color = |field: &Option<String>, key: &str| -> Option<Color> {
            let raw = field.as_deref()?;
            let parsed = parse_color(raw);
            if parsed.is_none() {
                warn!(key, value = raw, "ignoring unrecognised color");
            }
            parsed
        };

        if let Some(c) = color(&self.today_fg, "today_fg") {
            theme.today = theme.today.fg(c);
        }
        if let Some(c) = color(&self.today_bg, "today_bg") {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = color(&self.selected_fg, "selected_fg") {
            theme.selected = theme.selected.fg(c);
        }
        if let Some(c) = color(&self.selected_bg, "selected_bg") {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = color(&self.header_fg, "header_fg") {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = color(&self.dim_fg, "dim_fg") {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = color(&self.border_fg, "border_fg") {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = color(&self.status_fg, "status_fg") {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = color(&self.status_bg, "status_bg") {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = color(&self.highlight_bg, "highlight_bg") {
            theme.highlight = theme.highlight.bg(c);
        }
        if let Some(c) = color(&self.conflict_fg, "conflict_fg") {
            theme.conflict = theme.conflict.fg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex_color(s);
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_from(toml_src: &str) -> Theme {
        toml::from_str::<ThemeConfig>(toml_src).unwrap().into_theme()
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(theme_from(""), Theme::default());
    }

    #[test]
    fn test_preset_with_overrides() {
        let theme = theme_from(
            r##"
preset = "nord"
today_bg = "#ff0000"
conflict_fg = "magenta"
"##,
        );
        assert_eq!(theme.name, "nord");
        assert_eq!(theme.today.bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(theme.conflict.fg, Some(Color::Magenta));
        assert_eq!(theme.selected, NORD.theme().selected);
    }

    #[test]
    fn test_presets_built_from_their_palette() {
        for palette in [&DRACULA, &GRUVBOX, &NORD] {
            let theme = Theme::preset(palette.name).unwrap();
            assert_eq!(theme.name, palette.name);
            assert_eq!(theme.today.bg, Some(palette.today));
            assert_eq!(theme.status.bg, Some(palette.surface));
            assert_eq!(theme.highlight.bg, Some(palette.surface));
            assert_eq!(theme.conflict.fg, Some(palette.conflict));
        }
    }

    #[test]
    fn test_unknown_preset_and_bad_color_fall_back() {
        let theme = theme_from(
            r#"
preset = "solarized"
header_fg = "not-a-color"
"#,
        );
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<ThemeConfig>("today = \"red\"").is_err());
    }

    #[test]
    fn test_resolve_missing_file_uses_cli_preset() {
        let path = std::env::temp_dir().join("month-view-no-such-theme.toml");
        assert_eq!(Theme::resolve(&path, Some("gruvbox")).name, "gruvbox");
        assert_eq!(Theme::resolve(&path, None).name, "default");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(" Cyan "), Some(Color::Cyan));
        assert_eq!(parse_color("darkgrey"), Some(Color::DarkGray));
        assert_eq!(parse_color("#102030"), Some(Color::Rgb(16, 32, 48)));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_border_for_uses_background() {
        let style = Style::default().bg(Color::Yellow);
        assert_eq!(Theme::border_for(style).fg, Some(Color::Yellow));
        assert_eq!(Theme::border_for(Style::default()).fg, Some(Color::Cyan));
    }
}
