//! Mapping between file offsets and the GBA cartridge address window.
//!
//! The Game Pak ROM is mirrored at 0x08000000 (wait state 0). Pointers
//! stored inside a ROM use that base, so every 32-bit field that claims to
//! be a pointer must fall in the 32 MiB window starting there.

/// A CPU-visible address in the cartridge window.
pub type RomAddress = u32;

/// A zero-based byte position inside the ROM file.
pub type RomOffset = usize;

/// First address of the cartridge window.
pub const ROM_BASE: RomAddress = 0x0800_0000;

/// Last address of the cartridge window (inclusive).
pub const ROM_END: RomAddress = 0x09FF_FFFF;

/// Returns true if `value` falls inside the cartridge address window.
pub fn is_rom_address(value: u32) -> bool {
    (ROM_BASE..=ROM_END).contains(&value)
}

/// Convert a file offset to its cartridge address. No validation is done.
pub fn to_address(offset: RomOffset) -> RomAddress {
    ROM_BASE.wrapping_add(offset as u32)
}

/// Convert a cartridge address to its file offset. No validation is done.
pub fn to_offset(address: RomAddress) -> RomOffset {
    address.wrapping_sub(ROM_BASE) as RomOffset
}

/// Returns true if `value` is a word-aligned cartridge address whose offset
/// lies inside a ROM of `rom_len` bytes.
pub fn is_valid_pointer(value: u32, rom_len: usize) -> bool {
    is_rom_address(value) && value % 4 == 0 && to_offset(value) < rom_len
}
