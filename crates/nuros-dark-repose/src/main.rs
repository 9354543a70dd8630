//! NurOS dark card on Repose.
//!
//! Linux only: any other host gets the refusal message and status 1 before a
//! window is created.

mod runner;
mod view;

use nuros_dark_core::{Theme, WindowConfig, platform, startup};

fn run() -> anyhow::Result<()> {
    platform::ensure_supported_host()?;

    let theme = Theme::default();
    startup::guard(|| {
        runner::run_desktop_app(
            WindowConfig::from_theme(&theme),
            view::toolkit_theme(&theme),
            view::app(theme),
        )
    })
}

fn main() {
    env_logger::init();
    std::process::exit(startup::report(run()));
}
