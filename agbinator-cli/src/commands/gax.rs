use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use agbinator_drivers::GaxRecognizer;
use agbinator_lib::{RecognizeOptions, RomImage, format_bytes};

use crate::CliError;

/// Run the gax command: song catalog and entry points of one ROM.
pub(crate) fn run_gax(file: &Path, json: bool) -> Result<(), CliError> {
    let rom = RomImage::load(file)?;
    log::debug!("{}: {}", file.display(), format_bytes(rom.len() as u64));
    let recognizer = GaxRecognizer::new()?;

    let Some(scan) = recognizer.scan(&rom, &RecognizeOptions::new()) else {
        if json {
            println!("null");
        } else {
            log::info!("No GAX Sound Engine found in {}", file.display());
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&scan)?);
        return Ok(());
    }

    log::info!(
        "{}",
        format!("GAX Sound Engine {}", scan.version.raw_text)
            .if_supports_color(Stdout, |t| t.bold()),
    );
    if scan.version.number.is_none() {
        log::warn!("Version text not understood, song headers were not scanned");
    }
    log::info!("{} songs", scan.music.len());
    for (address, header) in &scan.music {
        log::info!(
            "{} {}",
            format!("{:08X}", address).if_supports_color(Stdout, |t| t.cyan()),
            header.info.text,
        );
    }

    if !scan.functions.is_empty() {
        log::info!("");
        for function in &scan.functions {
            log::info!("{:<15} {:08X}", function.name, function.address);
        }
    }
    Ok(())
}
