//! Nintendo MusicPlayer2000 ("Sappy", the m4a library).

use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, FunctionIndex, FunctionSignature,
    RecognizeOptions, RomImage,
};

pub const MP2K_FUNCTIONS: &[FunctionSignature] = &[
    FunctionSignature::new(
        "m4aSongNumStart",
        &[
            "00 B5 00 04 07 4B 08 49 40 0B 40 18 82 88 51 00 89 18 89 00 C9 18 0A 68 01 68 10 1C",
            "00 B5 00 04 07 4A 08 49 40 0B 40 18 83 88 59 00 C9 18 89 00 89 18 0A 68 01 68 10 1C",
        ],
    ),
    FunctionSignature::new(
        "m4aSoundInit",
        &[
            "F0 B5 47 46 80 B4 18 48 02 21 49 42 08 40 17 49 17 4A",
            "70 B5 14 48 02 21 49 42 08 40 13 49 13 4A",
        ],
    ),
    FunctionSignature::new(
        "m4aSoundSync",
        &[
            "00 B5 18 48 02 68 10 68 17 49 40 18 01 28 26 D8 10 79 01 38 11 79 10 71 10 79 00 06 00 28 1E DC",
            "A4 48 00 68 A4 4A 03 68 9B 1A 01 2B 11 D8 01 79 01 39 01 71 0D DC C1 7A 01 71 06 4A 91 68 C9 01",
            "A6 48 00 68 A6 4A 03 68 9B 1A 01 2B 0E D8 01 79 01 39 01 71 0A DC C1 7A 01 71 00 20 B6 21 09 02",
            "A6 48 00 68 A6 4A 03 68 9B 1A 01 2B 11 D8 01 79 01 39 01 71 0D DC C1 7A 01 71 06 4A 91 68 C9 01",
            "A8 48 00 68 A8 4A 03 68 9B 1A 01 2B 18 D8 01 79 01 39 01 71 14 DC C1 7A 01 71 0A 4A 91 68 C9 01",
            "AA 48 00 68 AA 4A 03 68 9B 1A 01 2B 18 D8 01 79 01 39 01 71 14 DC C1 7A 01 71 0A 4A 91 68 C9 01",
            "E6 48 00 68 E6 4A 03 68 9A 42 0E D1 01 79 01 39 01 71 0A DC C1 7A 01 71 00 20 B6 21 09 02 03 4A",
        ],
    ),
];

/// Reported when only some of the m4a entry points were found.
const PARTIAL_NAME: &str = "MusicPlayer2000/?";

pub struct Mp2kRecognizer {
    functions: FunctionIndex,
}

impl Mp2kRecognizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            functions: FunctionIndex::new(MP2K_FUNCTIONS)?,
        })
    }
}

impl DriverRecognizer for Mp2kRecognizer {
    fn name(&self) -> &'static str {
        "MusicPlayer2000"
    }

    fn recognize(
        &self,
        rom: &RomImage,
        _options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        let functions = self.functions.locate(rom);
        if functions.is_empty() {
            return None;
        }

        let name = if functions.len() == self.functions.function_count() {
            self.name()
        } else {
            PARTIAL_NAME
        };
        Some(DriverIdentification::new(name).with_functions(functions))
    }
}
