//! Orchestration for GBA sound driver identification: the recognizer
//! registry, ROM file discovery, settings and reports.

pub mod context;
pub mod report;
pub mod scanner;
pub mod settings;

pub use context::RecognizerContext;
pub use report::RomReport;
pub use scanner::collect_rom_files;
pub use settings::{RecognizerSettings, ScanSettings, Settings, settings_path};

// Re-export core types so frontends need only this crate.
pub use agbinator_core::{
    AnalysisError, CartridgeHeader, DriverIdentification, DriverRecognizer, EngineFunction,
    RecognizeOptions, RomImage, SongEntry, VersionNumber,
};
pub use agbinator_core::util::format_bytes;
