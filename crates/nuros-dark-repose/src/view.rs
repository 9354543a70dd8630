//! The card, composed as a Repose view tree.
//!
//! Window surface centers a fixed-width column (the card) holding the title,
//! the text field and the button. The button is a plain clickable box whose
//! background follows a two-state [`ButtonFeedback`] held in a remembered
//! signal, so pointer down/up swap between the two literal colors.

use nuros_dark_core::{ButtonFeedback, FeedbackStyle, PointerInput, Rgb, Theme, Transition};
use repose_core::{
    AlignItems, Color, JustifyContent, Modifier, Role, Scheduler, Semantics, Signal, View,
    remember, signal,
};
use repose_ui::{Box, Column, Surface, Text, TextField, TextStyle, ViewExt};

pub fn color(c: Rgb) -> Color {
    Color::from_rgb(c.r(), c.g(), c.b())
}

/// Widget colors for the parts Repose paints itself (text field, focus ring).
pub fn toolkit_theme(theme: &Theme) -> repose_core::Theme {
    let p = &theme.palette;
    let mut t = repose_core::Theme::default();
    t.background = color(p.window_bg);
    t.surface = color(p.input_bg);
    t.on_surface = color(p.foreground);
    t.primary = color(p.accent);
    t.on_primary = color(p.foreground);
    t.outline = color(p.input_bg);
    t.focus = color(p.accent);
    t.button_bg = color(p.accent);
    t.button_bg_hover = color(p.accent);
    t.button_bg_pressed = color(p.button_pressed);
    t
}

/// Root composable for the runner.
pub fn app(theme: Theme) -> impl FnMut(&mut Scheduler) -> View {
    move |_s| card_screen(&theme)
}

fn gap(height: f32) -> View {
    Box(Modifier::new().height(height))
}

fn feed(button: &Signal<ButtonFeedback>, input: PointerInput) {
    let mut t = Transition::default();
    button.update(|b| t = b.apply(input));
    if t.repaint {
        log::debug!("button {input:?} -> {:?}", button.get().state());
    }
    if t.activated {
        log::info!("action button activated");
    }
}

pub fn card_screen(theme: &Theme) -> View {
    let p = &theme.palette;
    let m = &theme.metrics;
    let s = &theme.strings;

    let button = remember(|| signal(ButtonFeedback::new(FeedbackStyle::TwoState)));
    let text = remember(|| signal(String::new()));

    let title = Text(s.heading)
        .color(color(p.foreground))
        .size(m.title_font);

    let input = TextField(
        s.placeholder,
        Modifier::new()
            .fill_max_width()
            .height(m.row_height(m.input_font, m.input_padding))
            .background(color(p.input_bg))
            .clip_rounded(m.input_radius),
        Some({
            let text = (*text).clone();
            move |value: String| {
                log::trace!("input changed ({} bytes)", value.len());
                text.set(value)
            }
        }),
        None::<fn(String)>,
    );

    let action = Column(
        Modifier::new()
            .fill_max_width()
            .padding(m.button_padding)
            .background(color(button.get().background(p)))
            .clip_rounded(m.button_radius)
            .align_items(AlignItems::Center)
            .clickable()
            .on_pointer_down({
                let button = (*button).clone();
                move |_| feed(&button, PointerInput::Down)
            })
            .on_pointer_up({
                let button = (*button).clone();
                move |_| feed(&button, PointerInput::Up)
            })
            .on_pointer_enter({
                let button = (*button).clone();
                move |_| feed(&button, PointerInput::Enter)
            })
            .on_pointer_leave({
                let button = (*button).clone();
                move |_| feed(&button, PointerInput::Leave)
            }),
    )
    .semantics(Semantics {
        role: Role::Button,
        label: Some(s.button.to_string()),
        focused: false,
        enabled: true,
    })
    .child(Text(s.button).color(color(p.foreground)).size(m.button_font));

    let card = Column(
        Modifier::new()
            .width(m.card_width)
            .padding(m.card_padding)
            .background(color(p.card_bg))
            .clip_rounded(m.card_radius),
    )
    .child((
        title,
        gap(m.title_margin_bottom + m.input_margin_y),
        input,
        gap(m.input_margin_y + m.button_margin_top),
        action,
    ));

    Surface(
        Modifier::new()
            .fill_max_size()
            .background(color(p.window_bg))
            .justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center),
        card,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuros_dark_core::{CardLayout, Size};
    use repose_core::input::{
        Modifiers, PointerButton, PointerEvent, PointerEventKind, PointerId, PointerKind,
    };
    use repose_core::{Brush, ComposeGuard, SceneNode, Vec2, ViewKind};
    use repose_ui::{Interactions, layout_and_paint};
    use std::collections::HashMap;

    fn compose(theme: &Theme) -> View {
        let _guard = ComposeGuard::begin();
        card_screen(theme)
    }

    fn card(root: &View) -> &View {
        &root.children[0]
    }

    fn action(root: &View) -> &View {
        card(root).children.last().unwrap()
    }

    fn background(v: &View) -> Color {
        match v.modifier.background {
            Some(Brush::Solid(c)) => c,
            other => panic!("unexpected background {other:?}"),
        }
    }

    fn pointer(event: PointerEventKind) -> PointerEvent {
        PointerEvent {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            event,
            position: Vec2 { x: 0.0, y: 0.0 },
            pressure: 1.0,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn surface_holds_a_400_wide_card() {
        let theme = Theme::default();
        let root = compose(&theme);
        assert!(matches!(root.kind, ViewKind::Surface));
        assert_eq!(background(&root), color(theme.palette.window_bg));

        let card = card(&root);
        assert_eq!(card.modifier.width, Some(400.0));
        assert_eq!(card.modifier.padding, Some(20.0));
        assert_eq!(card.modifier.clip_rounded, Some(10.0));
        assert_eq!(background(card), color(theme.palette.card_bg));
        assert_eq!(card.children.len(), 5);
    }

    #[test]
    fn card_is_laid_out_centered_in_800_by_600() {
        let theme = Theme::default();
        let root = compose(&theme);
        let (scene, _, _) = layout_and_paint(
            &root,
            (800, 600),
            &HashMap::new(),
            &Interactions::default(),
            None,
        );

        let card_bg = color(theme.palette.card_bg);
        let rect = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Rect { rect, brush: Brush::Solid(color), .. } if *color == card_bg => Some(*rect),
                _ => None,
            })
            .expect("card background is painted");

        assert_eq!(rect.w, 400.0);
        assert_eq!(rect.x, 200.0);
        let above = rect.y;
        let below = 600.0 - (rect.y + rect.h);
        assert!((above - below).abs() < 1.0, "above {above}, below {below}");

        // Toolkit text metrics may round a row by a pixel.
        let reference = CardLayout::compute(Size::new(800.0, 600.0), &theme.metrics);
        assert!((rect.h - reference.card.h).abs() <= 1.0, "height {}", rect.h);
    }

    #[test]
    fn title_and_field_use_theme_strings() {
        let theme = Theme::default();
        let root = compose(&theme);
        let card = card(&root);

        match &card.children[0].kind {
            ViewKind::Text {
                text,
                font_size,
                color: c,
                ..
            } => {
                assert_eq!(text, "Welcome to NurOS Dark");
                assert_eq!(*font_size, 24.0);
                assert_eq!(*c, Color::WHITE);
            }
            _ => panic!("first row is not the title"),
        }
        match &card.children[2].kind {
            ViewKind::TextField { hint, .. } => assert_eq!(hint, "Enter something..."),
            _ => panic!("third row is not the text field"),
        }
    }

    #[test]
    fn button_darkens_while_pressed() {
        let theme = Theme::default();
        let released = color(theme.palette.accent);
        let pressed = color(theme.palette.button_pressed);

        let root = compose(&theme);
        assert_eq!(background(action(&root)), released);

        let down = action(&root).modifier.on_pointer_down.clone().unwrap();
        down(pointer(PointerEventKind::Down(PointerButton::Primary)));
        let root = compose(&theme);
        assert_eq!(background(action(&root)), pressed);

        let up = action(&root).modifier.on_pointer_up.clone().unwrap();
        up(pointer(PointerEventKind::Up(PointerButton::Primary)));
        let root = compose(&theme);
        assert_eq!(background(action(&root)), released);
    }

    #[test]
    fn toolkit_theme_focus_is_accent() {
        let t = toolkit_theme(&Theme::default());
        assert_eq!(t.focus, Color::from_hex("#5c90ff"));
        assert_eq!(t.background, Color::from_hex("#1a1a1a"));
    }
}
