//! Drivers that identify themselves with an embedded text marker.
//!
//! The marker runs up to the next NUL byte and doubles as the version
//! string, e.g. `$Id: Krawall.c,v 1.12 2004/03/11 ...`.

use regex::bytes::Regex;

use agbinator_core::pattern::Pattern;
use agbinator_core::util::decode_latin1;
use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, RecognizeOptions, RomImage,
};

/// Compile a NUL-terminated marker expression. `.` matches any byte except
/// a newline.
fn marker_regex(expr: &str) -> Result<Regex, AnalysisError> {
    Regex::new(&format!(r"(?-u){}.*?\x00", expr))
        .map_err(|e| AnalysisError::invalid_pattern(format!("{}: {}", expr, e)))
}

/// Marker text without its terminating NUL.
fn marker_text(rom: &[u8], marker: &Regex) -> Option<String> {
    let found = marker.find(rom)?;
    let bytes = found.as_bytes();
    Some(decode_latin1(&bytes[..bytes.len() - 1]))
}

/// Krawall, identified by its RCS `$Id` keyword.
pub struct KrawallRecognizer {
    marker: Regex,
}

impl KrawallRecognizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            marker: marker_regex(r"\$Id: Krawall")?,
        })
    }
}

impl DriverRecognizer for KrawallRecognizer {
    fn name(&self) -> &'static str {
        "Krawall"
    }

    fn recognize(
        &self,
        rom: &RomImage,
        _options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        let version = marker_text(rom, &self.marker)?;
        Some(DriverIdentification::new(self.name()).with_version(version))
    }
}

/// SCM3LT, identified by its version string or, failing that, by the
/// full-width Shift-JIS spelling of its name.
///
/// Both markers can also show up in game data, so false positives exist.
pub struct Scm3ltRecognizer {
    marker: Regex,
    wide_name: Pattern,
}

/// "ＳＣＭ３ＬＴ" in Shift-JIS.
const SCM3LT_WIDE: &[u8] = &[
    0x82, 0x72, 0x82, 0x62, 0x82, 0x6C, 0x82, 0x52, 0x82, 0x6B, 0x82, 0x73,
];

impl Scm3ltRecognizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            marker: marker_regex("SCM3LT Ver")?,
            wide_name: Pattern::literal(SCM3LT_WIDE),
        })
    }
}

impl DriverRecognizer for Scm3ltRecognizer {
    fn name(&self) -> &'static str {
        "SCM3LT"
    }

    fn recognize(
        &self,
        rom: &RomImage,
        _options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        if let Some(version) = marker_text(rom, &self.marker) {
            return Some(DriverIdentification::new(self.name()).with_version(version));
        }
        self.wide_name.find(rom, 0)?;
        Some(DriverIdentification::new(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rom(at: usize, marker: &[u8]) -> RomImage {
        let mut rom = vec![0u8; 0x400];
        rom[at..at + marker.len()].copy_from_slice(marker);
        RomImage::new(rom).unwrap()
    }

    #[test]
    fn test_krawall_version_up_to_nul() {
        let rom = make_rom(0x123, b"$Id: Krawall.c,v 1.12 2004/03/11 sebastian Exp $\0more");
        let result = KrawallRecognizer::new()
            .unwrap()
            .recognize(&rom, &RecognizeOptions::new())
            .unwrap();
        assert_eq!(
            result.version_text(),
            "$Id: Krawall.c,v 1.12 2004/03/11 sebastian Exp $"
        );
    }

    #[test]
    fn test_krawall_needs_terminator() {
        let mut bytes = vec![0u8; 0x400];
        let marker = b"$Id: Krawall.c";
        let at = bytes.len() - marker.len();
        bytes[at..].copy_from_slice(marker);
        let rom = RomImage::new(bytes).unwrap();
        let recognizer = KrawallRecognizer::new().unwrap();
        assert!(recognizer.recognize(&rom, &RecognizeOptions::new()).is_none());
    }

    #[test]
    fn test_marker_accepts_high_bytes() {
        let rom = make_rom(0x40, b"SCM3LT Ver 1.0 \xA9SEGA\0");
        let result = Scm3ltRecognizer::new()
            .unwrap()
            .recognize(&rom, &RecognizeOptions::new())
            .unwrap();
        assert_eq!(result.version_text(), "SCM3LT Ver 1.0 \u{A9}SEGA");
    }

    #[test]
    fn test_scm3lt_wide_fallback() {
        let rom = make_rom(0x81, SCM3LT_WIDE);
        let result = Scm3ltRecognizer::new()
            .unwrap()
            .recognize(&rom, &RecognizeOptions::new())
            .unwrap();
        assert_eq!(result.driver_name, "SCM3LT");
        assert_eq!(result.driver_version, None);
    }

    #[test]
    fn test_markers_miss_on_blank_rom() {
        let rom = RomImage::new(vec![0u8; 0x400]).unwrap();
        let options = RecognizeOptions::new();
        assert!(KrawallRecognizer::new().unwrap().recognize(&rom, &options).is_none());
        assert!(Scm3ltRecognizer::new().unwrap().recognize(&rom, &options).is_none());
    }
}
