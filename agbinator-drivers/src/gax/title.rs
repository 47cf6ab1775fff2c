//! Song title recovery.
//!
//! GAX songs carry a metadata string like `"Main Theme" © Composer` that
//! the converter places right before the channel data. There is no length
//! or pointer to it, so the text is found by walking backward from the
//! start of that data. The result is best-effort.

use serde::{Deserialize, Serialize};

use agbinator_core::util::decode_latin1;

/// Trailing zero bytes skipped before the text (word-alignment padding).
const MAX_PADDING: usize = 4;

/// How far before a quote-less text span to look for the opening quote.
const MAX_QUOTE_LOOKBEHIND: usize = 0x100;

const QUOTE: u8 = b'"';
const COPYRIGHT: u8 = 0xA9;

/// Metadata text found in front of a song's channel data.
///
/// Both fields are heuristic: garbage or empty strings are possible and
/// do not make the song header invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    /// Everything from the opening quote to the end boundary,
    /// e.g. `"Main Theme" © Composer`
    pub text: String,
    /// The quoted part only, e.g. `Main Theme`
    pub title: String,
}

/// Bytes that may appear in the metadata text.
pub fn is_text_byte(b: u8) -> bool {
    (0x20..=0x7E).contains(&b) || b == COPYRIGHT
}

/// Recover the metadata text ending at `end_offset`.
pub fn extract_song_info(rom: &[u8], end_offset: usize) -> SongInfo {
    if end_offset > rom.len() {
        return SongInfo::default();
    }

    let mut end = end_offset;
    for _ in 0..MAX_PADDING {
        if end == 0 {
            return SongInfo::default();
        }
        if rom[end - 1] != 0 {
            break;
        }
        end -= 1;
    }

    let mut span_start = end;
    while span_start > 0 && is_text_byte(rom[span_start - 1]) {
        span_start -= 1;
    }
    if span_start == end {
        return SongInfo::default();
    }

    let Some(mut start) = find_opening_quote(rom, span_start, end) else {
        return SongInfo {
            text: decode_latin1(&rom[span_start..end]),
            title: String::new(),
        };
    };

    // `""Title"` style escapes: anchor on the last quote of the run
    while start + 1 < end && rom[start + 1] == QUOTE {
        start += 1;
    }

    let inner = &rom[start + 1..end];
    let title_len = inner.iter().position(|&b| b == QUOTE).unwrap_or(inner.len());

    SongInfo {
        text: decode_latin1(&rom[start..end]),
        title: decode_latin1(&inner[..title_len]),
    }
}

/// First quote inside the text span, or failing that the nearest quote
/// before it (titles may contain bytes outside the text class). A quote in
/// the last position can only be a closing one.
fn find_opening_quote(rom: &[u8], span_start: usize, end: usize) -> Option<usize> {
    let search_end = if rom[end - 1] == QUOTE { end - 1 } else { end };
    rom[span_start..search_end]
        .iter()
        .position(|&b| b == QUOTE)
        .map(|pos| span_start + pos)
        .or_else(|| {
            let floor = span_start.saturating_sub(MAX_QUOTE_LOOKBEHIND);
            (floor..span_start).rev().find(|&i| rom[i] == QUOTE)
        })
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
