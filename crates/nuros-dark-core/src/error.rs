use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This application is designed to run only on Linux!")]
    UnsupportedPlatform { os: String },

    #[error("invalid color literal {literal:?}, expected #rrggbb")]
    InvalidColor { literal: String },

    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create renderer: {0}")]
    Renderer(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
