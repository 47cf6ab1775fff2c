//! Code signatures of GAX 3.x entry points.
//!
//! The second alternative, where present, matches the 3.05-ND builds.

use agbinator_core::FunctionSignature;

pub const GAX_FUNCTIONS: &[FunctionSignature] = &[
    FunctionSignature::new(
        "gax2_estimate",
        &["F0 B5 57 46 4E 46 45 46 E0 B4 82 B0 07 1C 00 24 00 20 00 90"],
    ),
    FunctionSignature::new("gax2_new", &["F0 B5 47 46 80 B4 81 B0 06 1C 00 2E"]),
    FunctionSignature::new(
        "gax2_init",
        &[
            "F0 B5 57 46 4E 46 45 46 E0 B4 81 B0 07 1C 00 26 0E 48 39 68 01 60",
            "F0 B5 57 46 4E 46 45 46 E0 B4 81 B0 07 1C 00 22 0E 48 39 68",
        ],
    ),
    FunctionSignature::new(
        "gax2_jingle",
        &["F0 B5 47 46 80 B4 81 B0 80 46 0D 48 01 68 08 1C 80 30 8C 6F 04 60 04 30 CB 6F 03 60 4A 68 D1 89"],
    ),
    FunctionSignature::new(
        "gax_irq",
        &[
            "F0 B5 3B 48 02 68 11 68 3A 48 81 42 6D D1 50 6D 00 28 6A D0 50 6D 01 28 1A D1 02 20 50 65 36 49",
            "F0 B5 33 48 03 68 1A 68 32 49 07 1C 8A 42 5B D1 58 6D 00 28 58 D0 58 6D 01 28 1A D1 02 20 58 65",
        ],
    ),
    FunctionSignature::new("gax_play", &["70 B5 81 B0 47 48 01 68 48 6D 00 28 00 D1"]),
    FunctionSignature::new(
        "gax_fx",
        &["F0 B5 07 1C 00 25 1C 4C FF 2F 39 D8 00 22 1B 48 01 68 0B 69 06 1C 9D 42 09 D2 C8 68 01 6C A1 42"],
    ),
    FunctionSignature::new(
        "gax2_fx",
        &[
            "F0 B5 04 1C 00 2C 09 D1 02 48 03 49",
            "F0 B5 01 1C 00 29 35 D0 0F 88 48 88 16 4A 01 23 5B 42 9C 46 90 42 00 D0 84 46 48 68 01 25 6D 42",
        ],
    ),
    FunctionSignature::new(
        "gax2_new_fx",
        &[
            "00 B5 01 1C 00 29 09 D1 02 48 03 49",
            "01 1C 00 29 07 D0 04 48 08 80 01 20 40 42 48 80 48 60 88 60 88 81 70 47 FF FF 00 00",
        ],
    ),
];
