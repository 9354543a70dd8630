//! Button press feedback.
//!
//! The button background is always one of the palette's literal button
//! colors. Shell A drives a [`FeedbackStyle::TwoState`] machine from pointer
//! down/up callbacks; the stylesheet encodes the [`FeedbackStyle::ThreeState`]
//! variant through `:hover`/`:active`.

use crate::color::Rgb;
use crate::theme::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStyle {
    /// Pressed while the pointer is down, released otherwise.
    TwoState,
    /// Adds a hover color while the pointer is over the button.
    ThreeState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Released,
    Hovered,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

/// What a single pointer input did to the button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// The background color changed and needs repainting.
    pub repaint: bool,
    /// A press was released over the button.
    pub activated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonFeedback {
    style: FeedbackStyle,
    state: ButtonState,
    /// Tracked in both styles so a two-state release knows whether it was
    /// still over the button.
    inside: bool,
}

impl ButtonFeedback {
    pub fn new(style: FeedbackStyle) -> Self {
        Self {
            style,
            state: ButtonState::Released,
            inside: false,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn background(&self, palette: &Palette) -> Rgb {
        match self.state {
            ButtonState::Released => palette.accent,
            ButtonState::Hovered => palette.button_hover,
            ButtonState::Pressed => palette.button_pressed,
        }
    }

    pub fn apply(&mut self, input: PointerInput) -> Transition {
        let before = self.state;
        let mut activated = false;

        self.state = match (self.style, input) {
            (FeedbackStyle::TwoState, PointerInput::Enter) => {
                self.inside = true;
                before
            }
            (FeedbackStyle::TwoState, PointerInput::Leave) => {
                self.inside = false;
                before
            }
            (FeedbackStyle::TwoState, PointerInput::Down) => {
                self.inside = true;
                ButtonState::Pressed
            }
            (FeedbackStyle::TwoState, PointerInput::Up) => {
                activated = before == ButtonState::Pressed && self.inside;
                ButtonState::Released
            }

            (FeedbackStyle::ThreeState, PointerInput::Enter) => {
                self.inside = true;
                if before == ButtonState::Pressed {
                    before
                } else {
                    ButtonState::Hovered
                }
            }
            (FeedbackStyle::ThreeState, PointerInput::Leave) => {
                self.inside = false;
                ButtonState::Released
            }
            (FeedbackStyle::ThreeState, PointerInput::Down) => {
                self.inside = true;
                ButtonState::Pressed
            }
            (FeedbackStyle::ThreeState, PointerInput::Up) => {
                activated = before == ButtonState::Pressed && self.inside;
                if self.inside {
                    ButtonState::Hovered
                } else {
                    ButtonState::Released
                }
            }
        };

        Transition {
            repaint: before != self.state,
            activated,
        }
    }
}
