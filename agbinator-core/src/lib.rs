//! Shared types for GBA sound driver identification.
//!
//! Every vendor scanner implements [`DriverRecognizer`]; the orchestrator in
//! `agbinator-lib` tries them in a fixed order and keeps the first hit.

use serde::{Deserialize, Serialize};

pub mod address;
pub mod cartridge;
pub mod error;
pub mod pattern;
pub mod region;
pub mod rom;
pub mod signature;
pub mod util;

pub use address::{RomAddress, RomOffset, is_rom_address, to_address, to_offset};
pub use cartridge::CartridgeHeader;
pub use error::AnalysisError;
pub use pattern::Pattern;
pub use region::Region;
pub use rom::RomImage;
pub use signature::{EngineFunction, FunctionIndex, FunctionSignature};

/// Options that control how much work a recognizer does.
#[derive(Debug, Clone, Default)]
pub struct RecognizeOptions {
    /// Quick mode: stop once the driver is identified and skip deep scans
    /// (song header sweeps, function indexes).
    pub quick: bool,
}

impl RecognizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quick(mut self, quick: bool) -> Self {
        self.quick = quick;
        self
    }
}

/// Major/minor/revision triple parsed from a driver's version text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionNumber {
    pub major: u8,
    pub minor: u16,
    /// Trailing letters and dashes, e.g. `A-NJ`
    pub revision: String,
}

/// One song located by a driver-specific scanner, with its header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    /// Address of the song header
    pub address: RomAddress,
    /// Best-effort title recovered from the ROM text
    pub title: String,
    /// Whole metadata text the title was taken from
    pub info_text: String,
    /// Number of channels in the song
    pub channels: usize,
    pub pattern_length: u16,
    pub num_patterns: u16,
    pub master_volume: u16,
    pub seq_address: RomAddress,
    pub instr_address: RomAddress,
    pub sample_address: RomAddress,
    /// Per-channel data addresses, in header order
    pub channel_addresses: Vec<RomAddress>,
}

/// Result of a positive driver identification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverIdentification {
    /// Vendor / driver name (e.g., "GAX Sound Engine")
    pub driver_name: String,

    /// Version text as found in the ROM, if the driver embeds one
    pub driver_version: Option<String>,

    /// Parsed form of `driver_version`, when it follows the driver's
    /// numbering scheme
    pub version_number: Option<VersionNumber>,

    /// Driver entry points located by signature
    pub functions: Vec<EngineFunction>,

    /// Songs located by the driver's header scanner, in address order
    pub songs: Vec<SongEntry>,
}

impl DriverIdentification {
    pub fn new(driver_name: impl Into<String>) -> Self {
        Self {
            driver_name: driver_name.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.driver_version = Some(version.into());
        self
    }

    pub fn with_version_number(mut self, number: Option<VersionNumber>) -> Self {
        self.version_number = number;
        self
    }

    pub fn with_functions(mut self, functions: Vec<EngineFunction>) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_songs(mut self, songs: Vec<SongEntry>) -> Self {
        self.songs = songs;
        self
    }

    /// Version text, or an empty string when the driver has none.
    pub fn version_text(&self) -> &str {
        self.driver_version.as_deref().unwrap_or("")
    }
}

/// Trait for recognizing one vendor's sound driver inside a ROM.
///
/// Implementations are pure functions of the ROM bytes: they never mutate
/// shared state, so one instance can be reused across many ROMs.
pub trait DriverRecognizer: Send + Sync {
    /// Human-readable driver name, also used to disable the recognizer
    /// from the settings file.
    fn name(&self) -> &'static str;

    /// Attempt recognition. `None` means this driver was not found; it is
    /// not an error.
    fn recognize(&self, rom: &RomImage, options: &RecognizeOptions)
    -> Option<DriverIdentification>;

    /// Check if this recognizer answers to `name` (case-insensitive).
    fn matches_name(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}
