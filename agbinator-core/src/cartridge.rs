//! GBA cartridge header fields used to label scan results.

use serde::{Deserialize, Serialize};

use crate::Region;
use crate::util::read_ascii;

const TITLE_START: usize = 0xA0;
const TITLE_END: usize = 0xAC;
const GAME_CODE_START: usize = 0xAC;
const GAME_CODE_END: usize = 0xB0;

/// Identification fields from the cartridge header at 0xA0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartridgeHeader {
    /// Internal title, up to 12 ASCII characters
    pub internal_name: String,
    /// Four-character game code (e.g. "AGSJ")
    pub product_code: String,
    /// Full product id (e.g. "AGB-AGSJ-JPN"), empty for homebrew
    pub product_id: String,
    /// Region decoded from the last game-code character
    pub region: Option<Region>,
}

impl CartridgeHeader {
    /// Read the header from a ROM buffer.
    ///
    /// Buffers shorter than the header yield an empty header.
    pub fn parse(rom: &[u8]) -> Self {
        let (Some(title), Some(code)) = (
            rom.get(TITLE_START..TITLE_END),
            rom.get(GAME_CODE_START..GAME_CODE_END),
        ) else {
            return Self::default();
        };

        let internal_name = read_ascii(title);

        if code[0] == 0 {
            return Self {
                internal_name,
                ..Self::default()
            };
        }

        let product_code = read_ascii(code);
        let region = Region::from_code(code[3]);
        let product_id = format!("AGB-{:<4}-{}", product_code, region.code());

        Self {
            internal_name,
            product_code,
            product_id,
            region: Some(region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_header(title: &[u8], code: &[u8; 4]) -> Vec<u8> {
        let mut rom = vec![0u8; 0xC0];
        rom[TITLE_START..TITLE_START + title.len()].copy_from_slice(title);
        rom[GAME_CODE_START..GAME_CODE_END].copy_from_slice(code);
        rom
    }

    #[test]
    fn test_parse_retail_header() {
        let rom = make_header(b"CRASH B PURP", b"BCPE");
        let header = CartridgeHeader::parse(&rom);
        assert_eq!(header.internal_name, "CRASH B PURP");
        assert_eq!(header.product_code, "BCPE");
        assert_eq!(header.product_id, "AGB-BCPE-USA");
        assert_eq!(header.region, Some(Region::Usa));
    }

    #[test]
    fn test_parse_unknown_region() {
        let rom = make_header(b"TEST", b"ATEW");
        let header = CartridgeHeader::parse(&rom);
        assert_eq!(header.internal_name, "TEST");
        assert_eq!(header.product_id, "AGB-ATEW-XXX");
    }

    #[test]
    fn test_parse_homebrew_without_code() {
        let rom = make_header(b"HOMEBREW", &[0, 0, 0, 0]);
        let header = CartridgeHeader::parse(&rom);
        assert_eq!(header.internal_name, "HOMEBREW");
        assert!(header.product_id.is_empty());
        assert_eq!(header.region, None);
    }

    #[test]
    fn test_parse_short_buffer() {
        assert_eq!(CartridgeHeader::parse(&[0u8; 0x20]), CartridgeHeader::default());
    }
}
