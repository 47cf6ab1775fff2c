//! Shin'en GAX Sound Engine.
//!
//! Recognition is a two-stage process. The engine banner gives the version,
//! and the version's major number picks the song header layout. The whole
//! ROM is then swept for headers of that layout. For 3.x builds the known
//! entry points are also located by code signature.

pub mod functions;
pub mod header;
pub mod sweep;
pub mod title;
pub mod version;

use serde::Serialize;

use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, EngineFunction, FunctionIndex,
    RecognizeOptions, RomImage, SongEntry,
};

pub use header::{HeaderLayout, MusicHeader, RejectReason};
pub use sweep::MusicCatalog;
pub use title::SongInfo;
pub use version::{EngineVersion, VersionNumber, VersionScanner};

/// Everything found about the GAX engine in one ROM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GaxScan {
    pub version: EngineVersion,
    /// Layout used for the sweep; `None` when the version gave no usable
    /// major number or the sweep was skipped.
    pub layout: Option<HeaderLayout>,
    pub music: MusicCatalog,
    pub functions: Vec<EngineFunction>,
}

impl GaxScan {
    /// Song list in address order, as reported by the recognizer.
    pub fn songs(&self) -> Vec<SongEntry> {
        self.music
            .iter()
            .map(|(&address, header)| SongEntry {
                address,
                title: header.title().to_string(),
                info_text: header.info.text.clone(),
                channels: header.num_channels as usize,
                pattern_length: header.pattern_length,
                num_patterns: header.num_patterns,
                master_volume: header.master_volume,
                seq_address: header.seq_address,
                instr_address: header.instr_address,
                sample_address: header.sample_address,
                channel_addresses: header.channel_addresses.clone(),
            })
            .collect()
    }
}

/// Recognizer for the GAX Sound Engine.
pub struct GaxRecognizer {
    versions: VersionScanner,
    functions: FunctionIndex,
}

impl GaxRecognizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            versions: VersionScanner::new()?,
            functions: FunctionIndex::new(functions::GAX_FUNCTIONS)?,
        })
    }

    /// Run the full scan. Returns `None` when no engine banner is present.
    ///
    /// In quick mode only the banner is read.
    pub fn scan(&self, rom: &[u8], options: &RecognizeOptions) -> Option<GaxScan> {
        let version = self.versions.scan(rom)?;
        log::debug!("GAX banner found, version '{}'", version.raw_text);

        let mut scan = GaxScan {
            version,
            layout: None,
            music: MusicCatalog::new(),
            functions: Vec::new(),
        };
        if options.quick {
            return Some(scan);
        }

        let Some(major) = scan.version.major() else {
            log::debug!("Unparsed GAX version, skipping header sweep");
            return Some(scan);
        };
        let Some(layout) = HeaderLayout::for_major(major) else {
            log::debug!("No header layout known for GAX {}.x", major);
            return Some(scan);
        };

        scan.layout = Some(layout);
        scan.music = sweep::sweep(rom, layout);
        if layout == HeaderLayout::V3 {
            scan.functions = self.functions.locate(rom);
        }
        Some(scan)
    }
}

impl DriverRecognizer for GaxRecognizer {
    fn name(&self) -> &'static str {
        "GAX Sound Engine"
    }

    fn recognize(
        &self,
        rom: &RomImage,
        options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        let scan = self.scan(rom, options)?;
        let songs = scan.songs();
        Some(
            DriverIdentification::new(self.name())
                .with_version(scan.version.raw_text)
                .with_version_number(scan.version.number)
                .with_functions(scan.functions)
                .with_songs(songs),
        )
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
