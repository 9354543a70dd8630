//! # NurOS dark card
//!
//! Shared pieces of the two NurOS dark demo shells: a dark window holding a
//! centered card with a title, a text entry and a button that darkens while
//! pressed.
//!
//! Nothing here touches a toolkit. The shells read the look from [`Theme`],
//! check the host with [`platform::ensure_supported_host`], drive the button
//! background through [`ButtonFeedback`] (or the [`Stylesheet`] pseudo-states)
//! and finish with [`startup::report`]:
//!
//! ```rust
//! use nuros_dark_core::*;
//!
//! let theme = Theme::default();
//! let mut button = ButtonFeedback::new(FeedbackStyle::TwoState);
//! button.apply(PointerInput::Down);
//! assert_eq!(button.background(&theme.palette).to_string(), "#3e68c7");
//! button.apply(PointerInput::Up);
//! assert_eq!(button.background(&theme.palette).to_string(), "#5c90ff");
//! ```

pub mod color;
pub mod error;
pub mod feedback;
pub mod layout;
pub mod platform;
pub mod startup;
pub mod stylesheet;
pub mod theme;

#[cfg(test)]
mod tests;

pub use color::Rgb;
pub use error::{Error, Result};
pub use feedback::{ButtonFeedback, ButtonState, FeedbackStyle, PointerInput, Transition};
pub use layout::{CardLayout, Rect, Size};
pub use stylesheet::{Rule, Stylesheet};
pub use theme::{Metrics, Palette, Strings, Theme, WindowConfig};
