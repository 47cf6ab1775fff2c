//! GBA sound driver recognizers.
//!
//! This crate provides one recognizer per audio middleware vendor:
//!
//! - GAX Sound Engine (full song header scan)
//! - MusicPlayer2000 and MusyX (entry point signatures)
//! - Krawall and SCM3LT (embedded text markers)
//! - about twenty more vendors identified by code signatures alone

pub mod gax;
pub mod markers;
pub mod mp2k;
pub mod musyx;
pub mod vendors;

pub use gax::GaxRecognizer;
pub use markers::{KrawallRecognizer, Scm3ltRecognizer};
pub use mp2k::Mp2kRecognizer;
pub use musyx::MusyxRecognizer;
pub use vendors::{SignatureRecognizer, VendorSignature};

use agbinator_core::{AnalysisError, DriverRecognizer};

/// Signature-only vendors checked between MusyX and SCM3LT.
const EARLY_VENDORS: &[VendorSignature] = &[
    vendors::GBAMODPLAY,
    vendors::KCEJ,
    vendors::NATSUME,
    vendors::QUINTET,
    vendors::G_STYLE,
    vendors::MOBIUS,
    vendors::WEBFOOT,
    vendors::RARE,
];

/// Signature-only vendors checked after SCM3LT.
const LATE_VENDORS: &[VendorSignature] = &[
    vendors::TORUS,
    vendors::BROWNIE_BROWN,
    vendors::ALPHADREAM,
    vendors::QUICKTHUNDER,
    vendors::ENGINE_SOFTWARE,
    vendors::GBASS,
    vendors::SONIX,
    vendors::APEX,
    vendors::BIT_MANAGERS,
    vendors::PAUL_TONGE,
    vendors::MARK_COOKSEY,
    vendors::UGBA_PLAYER,
    vendors::UBISOFT_MILAN,
];

/// Every built-in recognizer, in priority order.
///
/// Fails only if a built-in signature table is malformed.
pub fn builtin_recognizers() -> Result<Vec<Box<dyn DriverRecognizer>>, AnalysisError> {
    let mut recognizers: Vec<Box<dyn DriverRecognizer>> = vec![
        Box::new(Mp2kRecognizer::new()?),
        Box::new(GaxRecognizer::new()?),
        Box::new(MusyxRecognizer::new()?),
        Box::new(KrawallRecognizer::new()?),
    ];
    for signature in EARLY_VENDORS {
        recognizers.push(Box::new(SignatureRecognizer::new(signature)?));
    }
    recognizers.push(Box::new(Scm3ltRecognizer::new()?));
    for signature in LATE_VENDORS {
        recognizers.push(Box::new(SignatureRecognizer::new(signature)?));
    }
    Ok(recognizers)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
