//! Vendors recognized by fixed code signatures alone.
//!
//! Each vendor is described by a static [`VendorSignature`] table entry.
//! Variants are tried in order and the first one that holds wins; a variant
//! holds when one of its alternative patterns is found (the first
//! alternative found anywhere is the one that counts), the match lies at or
//! after `min_offset`, and the optional follow-up pattern is found too.

use agbinator_core::pattern::Pattern;
use agbinator_core::{
    AnalysisError, DriverIdentification, DriverRecognizer, RecognizeOptions, RomImage,
};

/// A second signature that must also be present.
#[derive(Debug, Clone, Copy)]
pub enum Followup {
    /// Somewhere after the end of the first match
    After(&'static str),
    /// Anywhere in the ROM
    Anywhere(&'static str),
}

/// One way of recognizing a vendor's driver.
#[derive(Debug, Clone, Copy)]
pub struct SignatureVariant {
    /// Reported version text; empty when the variant carries none.
    pub version: &'static str,
    pub patterns: &'static [&'static str],
    /// Matches before this offset are discarded. Used where the signature
    /// starts mid-function and a match too close to the ROM start cannot
    /// be the real thing.
    pub min_offset: usize,
    pub followup: Option<Followup>,
}

impl SignatureVariant {
    pub const fn new(patterns: &'static [&'static str]) -> Self {
        Self {
            version: "",
            patterns,
            min_offset: 0,
            followup: None,
        }
    }

    pub const fn version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub const fn min_offset(mut self, min_offset: usize) -> Self {
        self.min_offset = min_offset;
        self
    }

    pub const fn followup(mut self, followup: Followup) -> Self {
        self.followup = Some(followup);
        self
    }
}

/// Static description of a signature-only vendor.
#[derive(Debug, Clone, Copy)]
pub struct VendorSignature {
    pub name: &'static str,
    pub variants: &'static [SignatureVariant],
}

impl VendorSignature {
    pub const fn new(name: &'static str, variants: &'static [SignatureVariant]) -> Self {
        Self { name, variants }
    }
}

// ---------------------------------------------------------------------------
// Signature tables
// ---------------------------------------------------------------------------

pub const GBAMODPLAY: VendorSignature = VendorSignature::new(
    "GBAModPlay/LS_Play",
    // "Logik State"
    &[SignatureVariant::new(&["4C 6F 67 69 6B 20 53 74 61 74 65"])],
);

pub const KCEJ: VendorSignature = VendorSignature::new(
    "Konami(KCEJ)/GUN",
    &[
        SignatureVariant::new(&["50 18 01 88 80 20 80 01 08 40 00 04 05 0C 00 2D"])
            .version("Late")
            .min_offset(12),
        SignatureVariant::new(&["F0 7B 48 43 04 13 30 88 00 19 38 80 70 88 78 80 B0 78 F8 80"])
            .version("Middle")
            .min_offset(0x498),
        SignatureVariant::new(&["08 0D 98 80 1D 60 60 42 30 80 80 20 C0 01 02 40 00 2A"])
            .version("Early")
            .min_offset(0x64),
    ],
);

pub const NATSUME: VendorSignature = VendorSignature::new(
    "Natsume",
    &[SignatureVariant::new(&[
        "42 18 11 88 0A 48 81 42 01 D8 48 1C 10 80 18 1C",
        "42 18 11 88 0B 48 81 42 01 D8 48 1C 10 80 18 1C",
        "42 18 11 88 0C 48 81 42 01 D8 48 1C 10 80 18 1C",
    ])
    .min_offset(10)],
);

pub const QUINTET: VendorSignature = VendorSignature::new(
    "Quintet",
    &[SignatureVariant::new(&[
        "F0 B5 4F 46 46 46 C0 B4 00 20 80 46 1E 4E 20 21 89 19 89 46 00 27 30 1C 1C 30 3D 18 29 68 01 20",
    ])],
);

pub const G_STYLE: VendorSignature = VendorSignature::new(
    "G-Style",
    &[SignatureVariant::new(&[
        "00 B5 01 1C 05 48 89 00 00 68 40 18 01 68 40 18 04 30 00 21",
    ])],
);

pub const MOBIUS: VendorSignature = VendorSignature::new(
    "Mobius Entertainment",
    &[SignatureVariant::new(&["00 B5 05 4B 1B 6C 80 00 C0 18 42 68 9B 18 18 1C"])],
);

pub const WEBFOOT: VendorSignature = VendorSignature::new(
    "Webfoot Technologies",
    &[SignatureVariant::new(&[
        "70 B5 01 25 85 70 05 70 00 22 42 70 C1 60 04 1C 48 7C E0 70 D0 43 20 61 00 20 43 00 1B 18 5B 01",
        // Legacy of Goku
        "70 B5 10 4C 01 26 A6 70 05 1C 00 20 E6 70 60 70 E5 60 68 7A 20 71 70 42 E0 80",
    ])],
);

pub const RARE: VendorSignature = VendorSignature::new(
    "Rare",
    &[
        SignatureVariant::new(&["F0 B5 43 46 4C 46 55 46 5E 46 67 46 F8 B4"]).followup(
            Followup::After("49 08 60 F8 BC 98 46 A1 46 AA 46 B3 46 BC 46 F0 BC"),
        ),
    ],
);

pub const TORUS: VendorSignature = VendorSignature::new(
    "Torus Games",
    &[SignatureVariant::new(&[
        "0B 1C 18 78 C1 08 24 D3 04 22 12 06 BC 32 98 69 40 08",
    ])],
);

pub const BROWNIE_BROWN: VendorSignature = VendorSignature::new(
    "Brownie Brown",
    // ARM-mode SoundMain fragment
    &[SignatureVariant::new(&[
        "02 00 51 E1 00 10 A0 43 02 10 41 50 00 10 C0 E5 A1 22 A0 E1 02 32 A0 E1 02 20 83 E0",
    ])],
);

pub const ALPHADREAM: VendorSignature = VendorSignature::new(
    "AlphaDream",
    &[SignatureVariant::new(&[
        "78 01 20 08 43 08 70 31 68 C9 18 ?? 19 0A 78 FD 20 10 40 08 70 0E 48",
    ])],
);

pub const QUICKTHUNDER: VendorSignature = VendorSignature::new(
    "QuickThunder",
    &[SignatureVariant::new(&["80 00 37 49 09 18 37 4A 4C 78 01 34 D3 7F 9C 42"])],
);

pub const ENGINE_SOFTWARE: VendorSignature = VendorSignature::new(
    "Engine Software",
    &[SignatureVariant::new(&[
        "1C 35 22 35 29 35 2F 35 35 35 3B 35 41 35 47 35 4D 35 54",
    ])],
);

pub const GBASS: VendorSignature = VendorSignature::new(
    "GBASS/Paragon 5",
    &[SignatureVariant::new(&[
        "04 CC 00 00 04 0A 4B 0B 49 0B 4C 0C 4D 68 78 0C 4B 00 28 00 D0",
    ])],
);

pub const SONIX: VendorSignature = VendorSignature::new(
    "Sonix Audio Tools",
    &[SignatureVariant::new(&["10 21 82 78 0A 43 82 70 ?? E7"])],
);

pub const APEX: VendorSignature = VendorSignature::new(
    "Apex",
    &[
        SignatureVariant::new(&["B2 42 00 DB 1F 22 5D 01 4B 19 91 02 5D 18 ?? 46 15 80 02"])
            .followup(Followup::Anywhere("B2 42 09 DA 8B 68 44 46 1B 1B 1B 12")),
    ],
);

pub const BIT_MANAGERS: VendorSignature = VendorSignature::new(
    "Bit Managers",
    &[SignatureVariant::new(&["C9 0E 2B 0F 8D 0F EE 0F 4F 10"])],
);

pub const PAUL_TONGE: VendorSignature = VendorSignature::new(
    "Paul Tonge",
    &[SignatureVariant::new(&["09 01 C8 18 84 46 64 46 24 34"])],
);

pub const MARK_COOKSEY: VendorSignature = VendorSignature::new(
    "Mark Cooksey",
    &[SignatureVariant::new(&[
        "9D 07 6B CA 23 78 C7 12 59 9C DB 17 4F 84 B6 E5 12 3C 64",
    ])],
);

pub const UGBA_PLAYER: VendorSignature = VendorSignature::new(
    "UGBA Player",
    &[SignatureVariant::new(&[
        "30 80 BD 18 72 FD FF EB 83 FD FF EB 30 40 BD E8 B2 FC FF EA 70 40 2D E9 42 F3 FF EB 3D F8",
    ])],
);

pub const UBISOFT_MILAN: VendorSignature = VendorSignature::new(
    "Ubisoft Milan",
    &[SignatureVariant::new(&[
        "02 F0 B5 4F 46 46 46 C0 B4 83 B0 81 46 0E 1C 77 1C 71 78 78 78 00 02 01 43",
    ])],
);

// ---------------------------------------------------------------------------
// Recognizer
// ---------------------------------------------------------------------------

enum CompiledFollowup {
    After(Pattern),
    Anywhere(Pattern),
}

struct CompiledVariant {
    version: &'static str,
    alternatives: Vec<Pattern>,
    min_offset: usize,
    followup: Option<CompiledFollowup>,
}

impl CompiledVariant {
    fn compile(variant: &SignatureVariant) -> Result<Self, AnalysisError> {
        let alternatives = variant
            .patterns
            .iter()
            .map(|p| Pattern::parse(p))
            .collect::<Result<Vec<_>, _>>()?;
        let followup = match variant.followup {
            Some(Followup::After(p)) => Some(CompiledFollowup::After(Pattern::parse(p)?)),
            Some(Followup::Anywhere(p)) => Some(CompiledFollowup::Anywhere(Pattern::parse(p)?)),
            None => None,
        };
        Ok(Self {
            version: variant.version,
            alternatives,
            min_offset: variant.min_offset,
            followup,
        })
    }

    fn matches(&self, rom: &[u8]) -> bool {
        let Some((offset, len)) = self
            .alternatives
            .iter()
            .find_map(|p| p.find(rom, 0).map(|offset| (offset, p.len())))
        else {
            return false;
        };
        if offset < self.min_offset {
            return false;
        }

        match &self.followup {
            Some(CompiledFollowup::After(p)) => p.find(rom, offset + len).is_some(),
            Some(CompiledFollowup::Anywhere(p)) => p.find(rom, 0).is_some(),
            None => true,
        }
    }
}

/// Recognizer driven by a [`VendorSignature`] table entry.
pub struct SignatureRecognizer {
    name: &'static str,
    variants: Vec<CompiledVariant>,
}

impl SignatureRecognizer {
    pub fn new(signature: &VendorSignature) -> Result<Self, AnalysisError> {
        let variants = signature
            .variants
            .iter()
            .map(CompiledVariant::compile)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AnalysisError::invalid_pattern(format!("{}: {}", signature.name, e)))?;
        Ok(Self {
            name: signature.name,
            variants,
        })
    }
}

impl DriverRecognizer for SignatureRecognizer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn recognize(
        &self,
        rom: &RomImage,
        _options: &RecognizeOptions,
    ) -> Option<DriverIdentification> {
        let variant = self.variants.iter().find(|v| v.matches(rom))?;
        let result = DriverIdentification::new(self.name);
        if variant.version.is_empty() {
            Some(result)
        } else {
            Some(result.with_version(variant.version))
        }
    }
}

#[cfg(test)]
#[path = "tests/vendors_tests.rs"]
mod tests;
