use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use agbinator_drivers::MusyxRecognizer;
use agbinator_lib::{RomImage, format_bytes};

use crate::CliError;

/// Run the musyx command: entry points of the MusyX library in one ROM.
pub(crate) fn run_musyx(file: &Path, json: bool) -> Result<(), CliError> {
    let rom = RomImage::load(file)?;
    log::debug!("{}: {}", file.display(), format_bytes(rom.len() as u64));
    let functions = MusyxRecognizer::new()?.locate(&rom);

    if json {
        println!("{}", serde_json::to_string_pretty(&functions)?);
        return Ok(());
    }

    if functions.is_empty() {
        log::info!("No MusyX found in {}", file.display());
        return Ok(());
    }

    log::info!("{}", "MusyX for GBA".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");
    for function in &functions {
        log::info!("{:<15} {:08X}", function.name, function.address);
    }
    Ok(())
}
