//! GAX engine version marker.
//!
//! Every GAX build links in a banner such as
//! `GAX Sound Engine 3.05A-NJ (Mar  5 2003)`. The token after the prefix is
//! the engine version; its major number decides the song header layout.

use regex::Regex;
use serde::{Deserialize, Serialize};

use agbinator_core::AnalysisError;
use agbinator_core::util::decode_latin1;

pub use agbinator_core::VersionNumber;

/// Literal prefix of the engine banner.
pub const SIGNATURE: &[u8] = b"GAX Sound Engine ";

/// Strict version form: one major digit, up to three minor digits and an
/// optional revision made of letters and dashes.
const VERSION_PATTERN: &str = r"^([0-9])\.([0-9]{1,3})([A-Za-z-]*)$";

/// Engine version as printed in the ROM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineVersion {
    /// Version token exactly as found
    pub raw_text: String,
    /// Present only when `raw_text` has the strict `M.mmm[rev]` form
    pub number: Option<VersionNumber>,
}

impl EngineVersion {
    pub fn major(&self) -> Option<u8> {
        self.number.as_ref().map(|n| n.major)
    }
}

/// Finds the engine banner and parses its version token.
pub struct VersionScanner {
    pattern: Regex,
}

impl VersionScanner {
    pub fn new() -> Result<Self, AnalysisError> {
        let pattern = Regex::new(VERSION_PATTERN)
            .map_err(|e| AnalysisError::invalid_pattern(format!("{}: {}", VERSION_PATTERN, e)))?;
        Ok(Self { pattern })
    }

    /// Parse a version token. Tokens that don't match the strict form keep
    /// only the raw text.
    pub fn parse(&self, text: &str) -> EngineVersion {
        EngineVersion {
            raw_text: text.to_string(),
            number: self.parse_number(text),
        }
    }

    fn parse_number(&self, text: &str) -> Option<VersionNumber> {
        let caps = self.pattern.captures(text)?;
        Some(VersionNumber {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            revision: caps[3].to_string(),
        })
    }

    /// Scan word-aligned offsets for the engine banner and parse the first
    /// one.
    ///
    /// Only the first banner is considered. If the ROM ends before a space
    /// terminates the version token, the scan reports no version at all.
    pub fn scan(&self, rom: &[u8]) -> Option<EngineVersion> {
        let start = (0..rom.len()).step_by(4).find(|&offset| {
            rom[offset..].starts_with(SIGNATURE) && offset + SIGNATURE.len() < rom.len()
        })?;

        let token_start = start + SIGNATURE.len();
        let token_len = rom[token_start..].iter().position(|&b| b == b' ')?;
        let text = decode_latin1(&rom[token_start..token_start + token_len]);
        Some(self.parse(&text))
    }
}

#[cfg(test)]
#[path = "tests/version_tests.rs"]
mod tests;
