use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use agbinator_lib::{Settings, settings_path};

use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Print the effective settings (file values merged over defaults).
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, defaults shown)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    log::info!(
        "# {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    log::info!("{}", settings.to_toml_string()?);
    Ok(())
}
