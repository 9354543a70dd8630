//! The NurOS dark look: colors, sizes and strings shared by both shells.
//!
//! Every value is in logical pixels (or points for fonts, which the shells
//! treat the same way). `Theme::default()` is the only theme the demos use;
//! the struct exists so the layout, the stylesheet and the widget trees all
//! read from one place.

use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Window background behind the card.
    pub window_bg: Rgb,
    /// Card surface.
    pub card_bg: Rgb,
    pub input_bg: Rgb,
    pub input_bg_focused: Rgb,
    /// Accent, also the released button background and the focus ring.
    pub accent: Rgb,
    pub button_hover: Rgb,
    pub button_pressed: Rgb,
    /// Text on every surface.
    pub foreground: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            window_bg: Rgb(0x1a, 0x1a, 0x1a),
            card_bg: Rgb(0x2d, 0x2d, 0x2d),
            input_bg: Rgb(0x3d, 0x3d, 0x3d),
            input_bg_focused: Rgb(0x45, 0x45, 0x45),
            accent: Rgb(0x5c, 0x90, 0xff),
            button_hover: Rgb(0x4a, 0x7a, 0xe0),
            button_pressed: Rgb(0x3e, 0x68, 0xc7),
            foreground: Rgb::WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub window_width: u32,
    pub window_height: u32,

    pub card_width: f32,
    pub card_padding: f32,
    pub card_radius: f32,
    /// Gap between rows inside the card.
    pub card_spacing: f32,

    pub title_font: f32,
    pub title_margin_bottom: f32,

    pub input_font: f32,
    pub input_padding: f32,
    pub input_radius: f32,
    /// Applied above and below the entry.
    pub input_margin_y: f32,
    pub focus_border: f32,

    pub button_font: f32,
    pub button_padding: f32,
    pub button_radius: f32,
    pub button_margin_top: f32,

    /// Line box height relative to the font size.
    pub line_height: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            card_width: 400.0,
            card_padding: 20.0,
            card_radius: 10.0,
            card_spacing: 10.0,
            title_font: 24.0,
            title_margin_bottom: 20.0,
            input_font: 14.0,
            input_padding: 10.0,
            input_radius: 5.0,
            input_margin_y: 10.0,
            focus_border: 2.0,
            button_font: 14.0,
            button_padding: 12.0,
            button_radius: 5.0,
            button_margin_top: 10.0,
            line_height: 1.25,
        }
    }
}

impl Metrics {
    /// Width available to the rows inside the card.
    pub fn card_content_width(&self) -> f32 {
        (self.card_width - 2.0 * self.card_padding).max(0.0)
    }

    /// Height of a single-line row with `font` text and `padding` on each side.
    pub fn row_height(&self, font: f32, padding: f32) -> f32 {
        font * self.line_height + 2.0 * padding
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strings {
    pub window_title: &'static str,
    pub heading: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            window_title: "NurOS Dark App",
            heading: "Welcome to NurOS Dark",
            placeholder: "Enter something...",
            button: "Perform Action",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub metrics: Metrics,
    pub strings: Strings,
}

/// Native window configuration derived from a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.strings.window_title.to_string(),
            width: theme.metrics.window_width,
            height: theme.metrics.window_height,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_literals() {
        let p = Palette::default();
        let expect = [
            (p.window_bg, "#1a1a1a"),
            (p.card_bg, "#2d2d2d"),
            (p.input_bg, "#3d3d3d"),
            (p.input_bg_focused, "#454545"),
            (p.accent, "#5c90ff"),
            (p.button_hover, "#4a7ae0"),
            (p.button_pressed, "#3e68c7"),
            (p.foreground, "#ffffff"),
        ];
        for (color, literal) in expect {
            assert_eq!(color, Rgb::from_hex(literal).unwrap());
        }
    }

    #[test]
    fn window_config_is_800_by_600() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.title, "NurOS Dark App");
        assert_eq!((cfg.width, cfg.height), (800, 600));
    }

    #[test]
    fn content_width_excludes_padding() {
        assert_eq!(Metrics::default().card_content_width(), 360.0);
    }
}
