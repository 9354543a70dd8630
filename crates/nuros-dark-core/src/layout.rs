//! Card geometry.
//!
//! The shells let their toolkits do the real layout; this is the reference
//! arrangement both are expected to match, and what the window-size and
//! centering properties are checked against.

use crate::theme::Metrics;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.w
    }
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub card: Rect,
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
}

impl CardLayout {
    pub fn compute(window: Size, m: &Metrics) -> Self {
        let title_h = m.row_height(m.title_font, 0.0);
        let input_h = m.row_height(m.input_font, m.input_padding);
        let button_h = m.row_height(m.button_font, m.button_padding);

        let card_h = m.card_padding
            + title_h
            + m.title_margin_bottom
            + m.input_margin_y
            + input_h
            + m.input_margin_y
            + m.button_margin_top
            + button_h
            + m.card_padding;

        // Pinned to the origin when the window is smaller than the card.
        let card = Rect {
            x: ((window.width - m.card_width) / 2.0).max(0.0),
            y: ((window.height - card_h) / 2.0).max(0.0),
            w: m.card_width,
            h: card_h,
        };

        let x = card.x + m.card_padding;
        let w = m.card_content_width();
        let mut y = card.y + m.card_padding;

        let title = Rect { x, y, w, h: title_h };
        y += title_h + m.title_margin_bottom + m.input_margin_y;
        let input = Rect { x, y, w, h: input_h };
        y += input_h + m.input_margin_y + m.button_margin_top;
        let button = Rect { x, y, w, h: button_h };

        Self {
            card,
            title,
            input,
            button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn card_is_400_wide_and_centered() {
        let m = Metrics::default();
        let l = CardLayout::compute(Size::new(800.0, 600.0), &m);
        assert_eq!(l.card.w, 400.0);
        assert_eq!(l.card.x, 200.0);
        assert!(approx(l.card.x + l.card.w / 2.0, 400.0));
        assert!(approx(l.card.y + l.card.h / 2.0, 300.0));
    }

    #[test]
    fn rows_stack_top_to_bottom_inside_padding() {
        let m = Metrics::default();
        let l = CardLayout::compute(Size::new(800.0, 600.0), &m);

        assert!(approx(l.title.y, l.card.y + 20.0));
        assert!(l.title.bottom() < l.input.y);
        assert!(l.input.bottom() < l.button.y);
        assert!(approx(l.button.bottom() + 20.0, l.card.bottom()));
        for row in [l.title, l.input, l.button] {
            assert!(approx(row.x, l.card.x + 20.0));
            assert!(approx(row.w, 360.0));
        }
    }

    #[test]
    fn row_heights_follow_fonts_and_padding() {
        let m = Metrics::default();
        let l = CardLayout::compute(Size::new(800.0, 600.0), &m);
        assert!(approx(l.title.h, 30.0));
        assert!(approx(l.input.h, 37.5));
        assert!(approx(l.button.h, 41.5));
    }

    #[test]
    fn small_window_pins_card_to_origin() {
        let m = Metrics::default();
        let l = CardLayout::compute(Size::new(300.0, 100.0), &m);
        assert_eq!((l.card.x, l.card.y), (0.0, 0.0));
        assert_eq!(l.card.w, 400.0);
    }
}
