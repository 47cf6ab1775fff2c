//! Known driver entry points located by exact code signatures.
//!
//! Each entry point has one or more alternative signatures (usually one per
//! library revision). The first alternative found anywhere in the ROM wins;
//! a missing entry point is simply left out of the result.

use serde::{Deserialize, Serialize};

use crate::address::{RomAddress, to_address};
use crate::pattern::{Pattern, find_first};
use crate::AnalysisError;

/// Static description of one entry point signature.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSignature {
    /// Symbol name reported for the entry point.
    pub name: &'static str,
    /// Alternative hex patterns, tried in order.
    pub patterns: &'static [&'static str],
    /// Distance from the function start to the matched bytes. Used when
    /// the prologue itself is too generic to fingerprint.
    pub displacement: usize,
}

impl FunctionSignature {
    pub const fn new(name: &'static str, patterns: &'static [&'static str]) -> Self {
        Self {
            name,
            patterns,
            displacement: 0,
        }
    }

    pub const fn displaced(mut self, displacement: usize) -> Self {
        self.displacement = displacement;
        self
    }
}

/// A located driver function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineFunction {
    pub name: String,
    pub address: RomAddress,
}

struct IndexEntry {
    name: &'static str,
    alternatives: Vec<Pattern>,
    displacement: usize,
}

/// A pre-parsed set of function signatures.
pub struct FunctionIndex {
    entries: Vec<IndexEntry>,
}

impl FunctionIndex {
    /// Parse every pattern of `signatures` up front.
    pub fn new(signatures: &[FunctionSignature]) -> Result<Self, AnalysisError> {
        let entries = signatures
            .iter()
            .map(|sig| {
                let alternatives = sig
                    .patterns
                    .iter()
                    .map(|p| Pattern::parse(p))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| {
                        AnalysisError::invalid_pattern(format!("{}: {}", sig.name, e))
                    })?;
                Ok(IndexEntry {
                    name: sig.name,
                    alternatives,
                    displacement: sig.displacement,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        Ok(Self { entries })
    }

    /// Number of entry points this index knows about.
    pub fn function_count(&self) -> usize {
        self.entries.len()
    }

    /// Locate every known entry point, in table order.
    pub fn locate(&self, rom: &[u8]) -> Vec<EngineFunction> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let found = find_first(&entry.alternatives, rom)?;
                let start = found.checked_sub(entry.displacement)?;
                Some(EngineFunction {
                    name: entry.name.to_string(),
                    address: to_address(start),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/signature_tests.rs"]
mod tests;
