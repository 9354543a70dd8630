//! CSS for the native widget shell.
//!
//! The sheet is built from the [`Theme`] rather than kept as a string literal
//! so the two shells share one palette. Widget names used in selectors are
//! exported so the shell names its widgets to match.

use std::fmt;

use crate::theme::Theme;

pub const CARD_NAME: &str = "card";
pub const TITLE_NAME: &str = "title";
pub const INPUT_NAME: &str = "input";
pub const BUTTON_NAME: &str = "actionButton";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(mut self, property: &'static str, value: impl fmt::Display) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (property, value) in &self.declarations {
            writeln!(f, "    {property}: {value};")?;
        }
        write!(f, "}}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

fn px(v: f32) -> String {
    format!("{v}px")
}

impl Stylesheet {
    /// The GTK sheet: window, card frame, title label, entry and button, with
    /// `:focus`, `:hover` and `:active` states.
    pub fn gtk(theme: &Theme) -> Self {
        let p = &theme.palette;
        let m = &theme.metrics;
        let button = format!("button#{BUTTON_NAME}");
        let input = format!("entry#{INPUT_NAME}");

        let rules = vec![
            Rule::new("window").decl("background-color", p.window_bg),
            Rule::new(format!("frame#{CARD_NAME}"))
                .decl("background-color", p.card_bg)
                .decl("border-radius", px(m.card_radius))
                .decl("border", "none")
                .decl("min-width", px(m.card_width)),
            Rule::new(format!("label#{TITLE_NAME}"))
                .decl("color", p.foreground)
                .decl("font-size", px(m.title_font))
                .decl("font-weight", "bold")
                .decl("margin-bottom", px(m.title_margin_bottom)),
            Rule::new(input.clone())
                .decl("background-color", p.input_bg)
                .decl("border", "none")
                .decl("border-radius", px(m.input_radius))
                .decl("padding", px(m.input_padding))
                .decl("color", p.foreground)
                .decl("font-size", px(m.input_font))
                .decl("margin", format!("{} 0", px(m.input_margin_y))),
            Rule::new(format!("{input}:focus"))
                .decl("background-color", p.input_bg_focused)
                .decl("border", format!("{} solid {}", px(m.focus_border), p.accent)),
            Rule::new(button.clone())
                .decl("background-color", p.accent)
                .decl("background-image", "none")
                .decl("color", p.foreground)
                .decl("border", "none")
                .decl("border-radius", px(m.button_radius))
                .decl("padding", px(m.button_padding))
                .decl("font-size", px(m.button_font))
                .decl("font-weight", "bold")
                .decl("margin-top", px(m.button_margin_top)),
            Rule::new(format!("{button}:hover")).decl("background-color", p.button_hover),
            Rule::new(format!("{button}:active")).decl("background-color", p.button_pressed),
        ];
        Self { rules }
    }

    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.selector.as_str())
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
