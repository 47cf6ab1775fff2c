use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use agbinator_lib::{RecognizeOptions, RecognizerContext, RomReport, Settings, collect_rom_files};

use crate::CliError;

/// Run the identify command.
pub(crate) fn run_identify(
    settings: &Settings,
    paths: &[PathBuf],
    quick: bool,
    json: bool,
) -> Result<(), CliError> {
    let mut context = RecognizerContext::with_builtin()?;
    context.apply_settings(&settings.recognizers);
    let options = RecognizeOptions::new().quick(quick || settings.scan.quick);

    let files = collect_rom_files(paths, &settings.scan.extensions)?;
    if files.is_empty() {
        return Err(CliError::other("No ROM files found"));
    }
    log::debug!("{} files to scan", files.len());

    let mut reports = Vec::new();
    let mut failed = 0;
    for path in &files {
        match RomReport::from_file(&context, path, &options) {
            Ok(report) => {
                if !json {
                    print_report(&report);
                }
                reports.push(report);
            }
            Err(e) => {
                log::warn!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn print_report(report: &RomReport) {
    let driver = report.driver_name();
    log::info!(
        "{}\t{}\t{}\t{}\t{}",
        report.cartridge.internal_name,
        report.cartridge.product_id,
        driver.if_supports_color(Stdout, |t| t.green()),
        report.driver_version(),
        report.file_name,
    );
}
