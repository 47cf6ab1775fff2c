//! Factor 5 MusyX Audio Tools.

use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, EngineFunction, FunctionIndex,
    FunctionSignature, RecognizeOptions, RomImage,
};

pub const MUSYX_FUNCTIONS: &[FunctionSignature] = &[
    FunctionSignature::new(
        "snd_Init",
        &[
            "70 B5 05 1C 0E 1C 30 68 03 21 08 40 00 28 00 D0 B4 E0 70 68 08 40 00 28 00 D0 AF E0 B0 68 08 40",
            "F0 B5 47 46 80 B4 05 1C 0E 1C 90 46 1F 1C 00 2A 00 D1 C1 E0 00 2F 00 D1 BE E0 30 68 03 21 08 40",
        ],
    ),
    // the prologue is shared with too many functions; match the body instead
    FunctionSignature::new(
        "snd_Handle",
        &[
            "00 20 81 46 00 24 2A 48 03 68 4A 46 91 00 18 1C 18 30 42 18 11 68 40 20 08 40 00 28 19 D0 41 20",
            "00 20 81 46 00 24 2A 48 03 68 4A 46 91 00 18 1C 10 30 42 18 11 68 40 20 08 40 00 28 18 D0 41 20",
        ],
    )
    .displaced(0x2C),
    FunctionSignature::new(
        "snd_DoSample",
        &[
            "F0 B5 57 46 4E 46 45 46 E0 B4 85 B0 31 4E 35 68 28 78 00 28 00 D1 AA E0 2F 1C D0 37 38 68 00 90",
            "F0 B5 57 46 4E 46 45 46 E0 B4 85 B0 36 4D 2C 68 20 78 00 28 00 D1 B4 E0 27 1C D0 37 38 68 00 90",
            "F0 B5 57 46 4E 46 45 46 E0 B4 85 B0 36 4D 2C 68 20 7A 00 28 00 D1 B4 E0 27 1C D8 37 38 68 00 90",
        ],
    ),
    FunctionSignature::new(
        "snd_StartSong",
        &[
            "F0 B5 57 46 4E 46 45 46 E0 B4 05 1C 39 4A 13 68 88 21 49 00 58 18 00 68 81 69 40 18 00 68 A8 42",
            "F0 B5 57 46 4E 46 45 46 E0 B4 04 1C 3A 4A 13 68 8C 21 49 00 58 18 00 68 81 69 40 18 00 68 A0 42",
        ],
    ),
    FunctionSignature::new(
        "snd_ResumeSong",
        &[
            "06 48 00 68 8C 21 49 00 40 18 00 68 39 31 42 18 11 78 01 29 04 D0 00 20 06 E0 00 00",
            "06 48 00 68 90 21 49 00 40 18 00 68 31 31 42 18 11 78 01 29 04 D0 00 20 06 E0 00 00",
            "00 B5 06 48 00 68 90 21 49 00 40 18 00 68 31 31 42 18 11 78 01 29 03 D0 00 20 05 E0",
        ],
    ),
    FunctionSignature::new(
        "snd_GetSampleWorkingSetSize",
        &["F0 B5 57 46 4E 46 45 46 E0 B4 82 B0 04 1C 0E 1C 00 2E 01 D1 00 20 DC E0 A2 78 10 01 80 18 80 00"],
    ),
];

pub struct MusyxRecognizer {
    functions: FunctionIndex,
}

impl MusyxRecognizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            functions: FunctionIndex::new(MUSYX_FUNCTIONS)?,
        })
    }

    /// Locate the library entry points. Any hit means MusyX is linked in.
    pub fn locate(&self, rom: &[u8]) -> Vec<EngineFunction> {
        self.functions.locate(rom)
    }
}

impl DriverRecognizer for MusyxRecognizer {
    fn name(&self) -> &'static str {
        "MusyX Audio Tools"
    }

    fn recognize(
        &self,
        rom: &RomImage,
        _options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        let functions = self.locate(rom);
        if functions.is_empty() {
            return None;
        }
        Some(DriverIdentification::new(self.name()).with_functions(functions))
    }
}
