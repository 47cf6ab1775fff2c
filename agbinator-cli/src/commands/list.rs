use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use agbinator_lib::{RecognizerContext, Settings};

use crate::CliError;

pub(crate) fn run_list(settings: &Settings) -> Result<(), CliError> {
    let mut context = RecognizerContext::with_builtin()?;
    context.apply_settings(&settings.recognizers);

    log::info!("Recognizers, in priority order:");
    log::info!("");
    for (i, recognizer) in context.recognizers().enumerate() {
        let name = recognizer.name();
        if context.is_enabled(recognizer) {
            log::info!("  {:>2}. {}", i + 1, name.if_supports_color(Stdout, |t| t.bold()));
        } else {
            log::info!(
                "  {:>2}. {} {}",
                i + 1,
                name.if_supports_color(Stdout, |t| t.dimmed()),
                "(disabled)".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }
    Ok(())
}
