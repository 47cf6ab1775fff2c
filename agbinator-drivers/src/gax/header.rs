//! Speculative GAX song header parser.
//!
//! Song headers have no magic number. A candidate offset is accepted only
//! when every field is in range and every pointer lands on a word-aligned
//! address inside the ROM. Any failed check rejects the whole candidate;
//! nothing is ever repaired.
//!
//! Layout of the song record shared by both engine generations:
//!
//! | Offset | Size | Field          |
//! |--------|------|----------------|
//! | 0x00   | 2    | num_channels   |
//! | 0x02   | 2    | pattern_length |
//! | 0x04   | 2    | num_patterns   |
//! | 0x06   | 2    | (unused)       |
//! | 0x08   | 2    | master_volume  |
//! | 0x0A   | 2    | (unused)       |
//! | 0x0C   | 4    | seq_address    |
//! | 0x10   | 4    | instr_address  |
//! | 0x14   | 4    | sample_address |
//! | 0x18   | 8    | reserved (v3)  |
//!
//! v3 follows the record directly with `num_channels` channel pointers.
//! v2 reaches the record through a table of handler records instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agbinator_core::address::{RomAddress, is_rom_address, is_valid_pointer, to_offset};
use agbinator_core::rom::{read_u16_le, read_u32_le};

use super::title::{SongInfo, extract_song_info};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Channel limit documented for the engine.
pub const MAX_CHANNELS: u16 = 32;

/// Size of the fixed song record.
const SONG_RECORD_SIZE: usize = 0x20;

/// Offset of the last reserved halfword in a v3 record.
const V3_RESERVED_TAIL: usize = 0x1E;

/// v2 handler table: entry 1 leads to the song record, entries 3.. are
/// the per-channel handlers.
const MIN_HANDLERS: u32 = 4;
const MAX_HANDLERS: u32 = 255;
const SONG_HANDLER_INDEX: usize = 1;
const FIRST_CHANNEL_HANDLER_INDEX: usize = 3;

/// v2 handler record: three function pointers, a linked-handler count and
/// three data words. The last data word is the one the parser follows.
const HANDLER_RECORD_SIZE: usize = 7 * 4;
const HANDLER_LINK_COUNT: usize = 0x0C;
const HANDLER_DATA: usize = 0x18;
const MAX_LINKED_HANDLERS: u32 = 255;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Header format generation, selected by the engine's major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderLayout {
    /// GAX 2.x: handler table leading to the song record (best-effort)
    V2,
    /// GAX 3.x: song record followed by the channel pointer table
    V3,
}

impl HeaderLayout {
    /// Layout used by an engine major version, if supported.
    pub fn for_major(major: u8) -> Option<Self> {
        match major {
            2 => Some(Self::V2),
            3 => Some(Self::V3),
            _ => None,
        }
    }
}

/// A validated song header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicHeader {
    pub layout: HeaderLayout,
    pub num_channels: u16,
    pub pattern_length: u16,
    pub num_patterns: u16,
    pub master_volume: u16,
    pub seq_address: RomAddress,
    pub instr_address: RomAddress,
    pub sample_address: RomAddress,
    /// Channel data pointers (v3) or channel handler pointers (v2), in ROM
    /// order; always `num_channels` long.
    pub channel_addresses: Vec<RomAddress>,
    /// Best-effort metadata text
    pub info: SongInfo,
}

impl MusicHeader {
    pub fn title(&self) -> &str {
        &self.info.title
    }
}

/// Why a candidate offset is not a song header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("record runs past the end of the ROM")]
    Truncated,

    #[error("channel count {0} outside 1..=32")]
    ChannelCount(u16),

    #[error("reserved field is not zero")]
    ReservedNotZero,

    #[error("{field} is not a valid ROM pointer (0x{value:08X})")]
    BadPointer { field: &'static str, value: u32 },

    #[error("handler count {0} outside 4..=255")]
    HandlerCount(u32),

    #[error("linked handler count {0} exceeds 255")]
    LinkedHandlerCount(u32),

    #[error("{handlers} channel handlers for {channels} channels")]
    ChannelMismatch { handlers: usize, channels: u16 },
}

/// The fields of the song record common to both layouts.
struct SongRecord {
    num_channels: u16,
    pattern_length: u16,
    num_patterns: u16,
    master_volume: u16,
    seq_address: RomAddress,
    instr_address: RomAddress,
    sample_address: RomAddress,
}

impl SongRecord {
    fn into_header(
        self,
        layout: HeaderLayout,
        channel_addresses: Vec<RomAddress>,
        info: SongInfo,
    ) -> MusicHeader {
        MusicHeader {
            layout,
            num_channels: self.num_channels,
            pattern_length: self.pattern_length,
            num_patterns: self.num_patterns,
            master_volume: self.master_volume,
            seq_address: self.seq_address,
            instr_address: self.instr_address,
            sample_address: self.sample_address,
            channel_addresses,
            info,
        }
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn u16_at(rom: &[u8], offset: usize) -> Result<u16, RejectReason> {
    read_u16_le(rom, offset).ok_or(RejectReason::Truncated)
}

fn u32_at(rom: &[u8], offset: usize) -> Result<u32, RejectReason> {
    read_u32_le(rom, offset).ok_or(RejectReason::Truncated)
}

/// Read a data pointer: word-aligned, in the cartridge window, in bounds.
fn pointer_at(rom: &[u8], offset: usize, field: &'static str) -> Result<RomAddress, RejectReason> {
    let value = u32_at(rom, offset)?;
    if is_valid_pointer(value, rom.len()) {
        Ok(value)
    } else {
        Err(RejectReason::BadPointer { field, value })
    }
}

/// Require `len` bytes at `offset` plus at least one byte after them.
fn ensure_room(rom: &[u8], offset: usize, len: usize) -> Result<(), RejectReason> {
    match offset.checked_add(len) {
        Some(end) if end < rom.len() => Ok(()),
        _ => Err(RejectReason::Truncated),
    }
}

fn read_song_record(rom: &[u8], offset: usize) -> Result<SongRecord, RejectReason> {
    ensure_room(rom, offset, SONG_RECORD_SIZE)?;

    let num_channels = u16_at(rom, offset)?;
    if num_channels == 0 || num_channels > MAX_CHANNELS {
        return Err(RejectReason::ChannelCount(num_channels));
    }

    Ok(SongRecord {
        num_channels,
        pattern_length: u16_at(rom, offset + 0x02)?,
        num_patterns: u16_at(rom, offset + 0x04)?,
        master_volume: u16_at(rom, offset + 0x08)?,
        seq_address: pointer_at(rom, offset + 0x0C, "seq_address")?,
        instr_address: pointer_at(rom, offset + 0x10, "instr_address")?,
        sample_address: pointer_at(rom, offset + 0x14, "sample_address")?,
    })
}

// ---------------------------------------------------------------------------
// v3
// ---------------------------------------------------------------------------

/// Try to decode a v3 song header at `offset`.
pub fn parse_v3(rom: &[u8], offset: usize) -> Result<MusicHeader, RejectReason> {
    let record = read_song_record(rom, offset)?;

    if u16_at(rom, offset + V3_RESERVED_TAIL)? != 0 {
        return Err(RejectReason::ReservedNotZero);
    }

    let table = offset + SONG_RECORD_SIZE;
    let count = record.num_channels as usize;
    ensure_room(rom, table, count * 4)?;

    let channel_addresses = (0..count)
        .map(|i| pointer_at(rom, table + i * 4, "channel_address"))
        .collect::<Result<Vec<_>, _>>()?;

    // The table is not always sorted; the text ends where the first
    // channel's data begins.
    let info = channel_addresses
        .iter()
        .min()
        .map(|&lowest| extract_song_info(rom, to_offset(lowest)))
        .unwrap_or_default();

    Ok(record.into_header(HeaderLayout::V3, channel_addresses, info))
}

// ---------------------------------------------------------------------------
// v2
// ---------------------------------------------------------------------------

/// Validate one v2 handler record. Empty handlers (first word zero) are
/// allowed.
fn check_handler(rom: &[u8], address: RomAddress) -> Result<(), RejectReason> {
    if !is_valid_pointer(address, rom.len()) {
        return Err(RejectReason::BadPointer {
            field: "handler",
            value: address,
        });
    }

    let offset = to_offset(address);
    ensure_room(rom, offset, 4)?;
    if u32_at(rom, offset)? == 0 {
        return Ok(());
    }

    if offset + HANDLER_RECORD_SIZE > rom.len() {
        return Err(RejectReason::Truncated);
    }

    // mandatory function pointers (Thumb entry points, so no alignment)
    for i in 0..3 {
        let value = u32_at(rom, offset + i * 4)?;
        if !is_rom_address(value) {
            return Err(RejectReason::BadPointer {
                field: "handler_function",
                value,
            });
        }
    }

    let linked = u32_at(rom, offset + HANDLER_LINK_COUNT)?;
    if linked > MAX_LINKED_HANDLERS {
        return Err(RejectReason::LinkedHandlerCount(linked));
    }

    Ok(())
}

/// Try to decode a v2 song header whose handler table starts at `offset`.
///
/// The handler indices and field offsets come from a small number of
/// observed ROMs; treat results as lower confidence than v3.
pub fn parse_v2(rom: &[u8], offset: usize) -> Result<MusicHeader, RejectReason> {
    ensure_room(rom, offset, 4)?;

    let num_handlers = u32_at(rom, offset)?;
    if !(MIN_HANDLERS..=MAX_HANDLERS).contains(&num_handlers) {
        return Err(RejectReason::HandlerCount(num_handlers));
    }

    let table = offset + 4;
    ensure_room(rom, table, num_handlers as usize * 4)?;

    let handlers = (0..num_handlers as usize)
        .map(|i| u32_at(rom, table + i * 4))
        .collect::<Result<Vec<_>, _>>()?;
    for &handler in &handlers {
        check_handler(rom, handler)?;
    }

    let song_handler = to_offset(handlers[SONG_HANDLER_INDEX]);
    if song_handler + HANDLER_RECORD_SIZE > rom.len() {
        return Err(RejectReason::Truncated);
    }
    let song_address = pointer_at(rom, song_handler + HANDLER_DATA, "song_header")?;
    let record = read_song_record(rom, to_offset(song_address))?;

    let channel_addresses = handlers[FIRST_CHANNEL_HANDLER_INDEX..].to_vec();
    if channel_addresses.len() != record.num_channels as usize {
        return Err(RejectReason::ChannelMismatch {
            handlers: channel_addresses.len(),
            channels: record.num_channels,
        });
    }

    let Some(&lowest) = channel_addresses.iter().min() else {
        return Err(RejectReason::ChannelMismatch {
            handlers: 0,
            channels: record.num_channels,
        });
    };
    let lowest_offset = to_offset(lowest);
    ensure_room(rom, lowest_offset, HANDLER_DATA + 4)?;
    let info_end = u32_at(rom, lowest_offset + HANDLER_DATA)?;
    if !is_rom_address(info_end) {
        return Err(RejectReason::BadPointer {
            field: "song_info",
            value: info_end,
        });
    }
    let info = extract_song_info(rom, to_offset(info_end));

    Ok(record.into_header(HeaderLayout::V2, channel_addresses, info))
}

/// Dispatch to the parser for `layout`.
pub fn parse_header(
    rom: &[u8],
    offset: usize,
    layout: HeaderLayout,
) -> Result<MusicHeader, RejectReason> {
    match layout {
        HeaderLayout::V2 => parse_v2(rom, offset),
        HeaderLayout::V3 => parse_v3(rom, offset),
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
