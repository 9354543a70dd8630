use crate::*;

#[test]
fn default_window_holds_a_centered_card() {
    let theme = Theme::default();
    let window = WindowConfig::from_theme(&theme);
    let layout = CardLayout::compute(
        Size::new(window.width as f32, window.height as f32),
        &theme.metrics,
    );

    assert_eq!((window.width, window.height), (800, 600));
    assert_eq!(layout.card.w, 400.0);
    assert_eq!(layout.card.x, layout.card.right() - 400.0);
    assert!((layout.card.x - (800.0 - layout.card.right())).abs() < 1e-3);
    assert!((layout.card.y - (600.0 - layout.card.bottom())).abs() < 1e-3);
}

#[test]
fn stylesheet_and_state_machine_agree_on_colors() {
    let theme = Theme::default();
    let sheet = Stylesheet::gtk(&theme);
    let css_bg = |sel: &str| {
        sheet
            .rule(sel)
            .and_then(|r| r.get("background-color"))
            .map(str::to_string)
    };

    let mut button = ButtonFeedback::new(FeedbackStyle::ThreeState);
    assert_eq!(
        css_bg("button#actionButton"),
        Some(button.background(&theme.palette).to_string())
    );
    button.apply(PointerInput::Enter);
    assert_eq!(
        css_bg("button#actionButton:hover"),
        Some(button.background(&theme.palette).to_string())
    );
    button.apply(PointerInput::Down);
    assert_eq!(
        css_bg("button#actionButton:active"),
        Some(button.background(&theme.palette).to_string())
    );
}

#[test]
fn every_css_color_parses_back() {
    let sheet = Stylesheet::gtk(&Theme::default());
    for rule in &sheet.rules {
        for (property, value) in &rule.declarations {
            if property.ends_with("color") && *property != "color" {
                assert!(value.parse::<Rgb>().is_ok(), "{}: {property}", rule.selector);
            }
        }
    }
}
