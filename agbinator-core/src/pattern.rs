//! Byte signatures with optional wildcards.
//!
//! Signatures are written as whitespace-separated hex tokens, with `??`
//! standing for any byte: `"F0 B5 ?? 46"`.

use memchr::memmem;

use crate::AnalysisError;

/// A parsed byte signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<Option<u8>>,
    /// Literal form when no wildcard is present.
    exact: Option<Vec<u8>>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, AnalysisError> {
        let mut bytes = Vec::new();
        for token in pattern.split_whitespace() {
            if token == "??" || token == "?" {
                bytes.push(None);
                continue;
            }

            let value = u8::from_str_radix(token, 16).map_err(|e| {
                AnalysisError::invalid_pattern(format!("bad token '{}': {}", token, e))
            })?;
            bytes.push(Some(value));
        }

        if bytes.is_empty() {
            return Err(AnalysisError::invalid_pattern("signature is empty"));
        }

        let exact = bytes.iter().copied().collect::<Option<Vec<u8>>>();
        Ok(Self { bytes, exact })
    }

    /// Build a pattern from literal bytes.
    pub fn literal(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().map(|&b| Some(b)).collect(),
            exact: Some(bytes.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Find the first match starting at or after `from`.
    pub fn find(&self, haystack: &[u8], from: usize) -> Option<usize> {
        let window = haystack.get(from..)?;
        match &self.exact {
            Some(needle) => memmem::find(window, needle).map(|pos| from + pos),
            None => self.find_with_wildcards(window).map(|pos| from + pos),
        }
    }

    fn find_with_wildcards(&self, buffer: &[u8]) -> Option<usize> {
        if buffer.len() < self.bytes.len() {
            return None;
        }

        let last = buffer.len() - self.bytes.len();
        'outer: for i in 0..=last {
            for (j, byte) in self.bytes.iter().enumerate() {
                if let Some(value) = byte
                    && buffer[i + j] != *value
                {
                    continue 'outer;
                }
            }
            return Some(i);
        }
        None
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .bytes
            .iter()
            .map(|b| match b {
                Some(value) => format!("{:02X}", value),
                None => "??".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

/// Find the first of several alternative patterns that matches anywhere.
///
/// Alternatives are tried in order; the first one that is found wins even
/// if a later alternative would match earlier in the buffer.
pub fn find_first(alternatives: &[Pattern], haystack: &[u8]) -> Option<usize> {
    alternatives.iter().find_map(|p| p.find(haystack, 0))
}
