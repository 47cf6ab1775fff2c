use super::*;

const ROM_SIZE: usize = 192 * 1024;
const BANNER: usize = 0x1000;
const HEADER: usize = BANNER + 0x40;
const CHANNEL_DATA: usize = 0x2400;

fn put_u16(rom: &mut [u8], offset: usize, value: u16) {
    rom[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(rom: &mut [u8], offset: usize, value: u32) {
    rom[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Write a two-channel v3 song header at `header` whose channel data starts
/// at `channel_data`, with `title` quoted in front of that data.
fn put_song(rom: &mut [u8], header: usize, channel_data: usize, title: &str) {
    put_u16(rom, header, 2);
    put_u16(rom, header + 0x02, 0x40);
    put_u16(rom, header + 0x04, 3);
    put_u16(rom, header + 0x08, 0x100);
    put_u32(rom, header + 0x0C, 0x0800_2000);
    put_u32(rom, header + 0x10, 0x0800_2100);
    put_u32(rom, header + 0x14, 0x0800_2200);
    put_u32(rom, header + 0x20, 0x0800_0000 + channel_data as u32);
    put_u32(rom, header + 0x24, 0x0800_0010 + channel_data as u32);

    let mut info = format!("\"{}\" ", title).into_bytes();
    info.push(0xA9);
    info.extend_from_slice(b" Shin'en");
    let start = channel_data - 3 - info.len();
    rom[start..start + info.len()].copy_from_slice(&info);
}

/// Build a ROM with an engine banner and one two-channel song header 0x40
/// bytes after it.
fn make_gax_rom(version: &str) -> Vec<u8> {
    let mut rom = vec![0u8; ROM_SIZE];
    let banner = format!("GAX Sound Engine {} (Mar  5 2003)", version);
    rom[BANNER..BANNER + banner.len()].copy_from_slice(banner.as_bytes());
    put_song(&mut rom, HEADER, CHANNEL_DATA, "Test Theme");
    rom
}

fn recognizer() -> GaxRecognizer {
    GaxRecognizer::new().unwrap()
}

#[test]
fn test_builtin_signatures_parse() {
    let recognizer = recognizer();
    assert_eq!(recognizer.functions.function_count(), functions::GAX_FUNCTIONS.len());
}

#[test]
fn test_end_to_end_v3() {
    let rom = RomImage::new(make_gax_rom("3.05A-NJ")).unwrap();
    let result = recognizer()
        .recognize(&rom, &RecognizeOptions::new())
        .unwrap();

    assert_eq!(result.driver_name, "GAX Sound Engine");
    assert_eq!(result.version_text(), "3.05A-NJ");
    assert_eq!(
        result.version_number,
        Some(VersionNumber {
            major: 3,
            minor: 5,
            revision: "A-NJ".into(),
        })
    );
    assert_eq!(result.songs.len(), 1);
    assert_eq!(
        result.songs[0],
        SongEntry {
            address: 0x0800_0000 + HEADER as u32,
            title: "Test Theme".into(),
            info_text: "\"Test Theme\" \u{A9} Shin'en".into(),
            channels: 2,
            pattern_length: 0x40,
            num_patterns: 3,
            master_volume: 0x100,
            seq_address: 0x0800_2000,
            instr_address: 0x0800_2100,
            sample_address: 0x0800_2200,
            channel_addresses: vec![0x0800_2400, 0x0800_2410],
        }
    );
}

#[test]
fn test_unparsed_version_has_no_number() {
    let rom = RomImage::new(make_gax_rom("v3.5")).unwrap();
    let result = recognizer()
        .recognize(&rom, &RecognizeOptions::new())
        .unwrap();
    assert_eq!(result.version_text(), "v3.5");
    assert_eq!(result.version_number, None);
}

#[test]
fn test_scan_keeps_full_info_text() {
    let rom = make_gax_rom("3.05A-NJ");
    let scan = recognizer().scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(scan.layout, Some(HeaderLayout::V3));

    let header = &scan.music[&(0x0800_0000 + HEADER as u32)];
    assert_eq!(header.info.text, "\"Test Theme\" \u{A9} Shin'en");
    assert_eq!(header.master_volume, 0x100);
}

#[test]
fn test_sweep_keeps_every_header_in_address_order() {
    let mut rom = make_gax_rom("3.05A-NJ");
    put_song(&mut rom, 0x3000, 0x3400, "Second");

    let first = sweep::sweep(&rom, HeaderLayout::V3);
    let found: Vec<(u32, &str)> = first
        .iter()
        .map(|(&address, header)| (address, header.title()))
        .collect();
    assert_eq!(
        found,
        vec![
            (0x0800_0000 + HEADER as u32, "Test Theme"),
            (0x0800_3000, "Second"),
        ]
    );
    assert_eq!(first, sweep::sweep(&rom, HeaderLayout::V3));
}

#[test]
fn test_locates_v3_functions() {
    let mut rom = make_gax_rom("3.05A-NJ");
    let gax_play = [
        0x70, 0xB5, 0x81, 0xB0, 0x47, 0x48, 0x01, 0x68, 0x48, 0x6D, 0x00, 0x28, 0x00, 0xD1,
    ];
    rom[0x3000..0x3000 + gax_play.len()].copy_from_slice(&gax_play);

    let scan = recognizer().scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(
        scan.functions,
        vec![EngineFunction {
            name: "gax_play".into(),
            address: 0x0800_3000,
        }]
    );
}

#[test]
fn test_quick_mode_reads_banner_only() {
    let rom = make_gax_rom("3.05A-NJ");
    let options = RecognizeOptions::new().quick(true);
    let scan = recognizer().scan(&rom, &options).unwrap();
    assert_eq!(scan.version.major(), Some(3));
    assert_eq!(scan.layout, None);
    assert!(scan.music.is_empty());
}

#[test]
fn test_unparsed_version_skips_sweep() {
    let rom = make_gax_rom("v3.5");
    let scan = recognizer().scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(scan.version.raw_text, "v3.5");
    assert_eq!(scan.version.number, None);
    assert_eq!(scan.layout, None);
    assert!(scan.music.is_empty());
    assert!(scan.functions.is_empty());
}

#[test]
fn test_unknown_major_skips_sweep() {
    let rom = make_gax_rom("4.00");
    let scan = recognizer().scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(scan.version.major(), Some(4));
    assert!(scan.music.is_empty());
}

#[test]
fn test_v2_banner_selects_handler_layout() {
    // the v3 fixture does not validate as a v2 handler table
    let rom = make_gax_rom("2.01");
    let scan = recognizer().scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(scan.layout, Some(HeaderLayout::V2));
    assert!(!scan.music.contains_key(&(0x0800_0000 + HEADER as u32)));
    assert!(scan.functions.is_empty());
}

#[test]
fn test_no_banner_is_a_miss() {
    let mut rom = make_gax_rom("3.05A-NJ");
    rom[BANNER] = b'g';
    let rom = RomImage::new(rom).unwrap();
    assert!(recognizer().recognize(&rom, &RecognizeOptions::new()).is_none());
}

/// Build a GAX 2.x ROM: handler table at 0x100 with two empty handlers, a
/// song handler and two channel handlers.
fn make_v2_gax_rom() -> Vec<u8> {
    const TABLE: usize = 0x100;
    const SONG: usize = 0x300;
    const HANDLERS: [usize; 5] = [0x200, 0x240, 0x280, 0x380, 0x3C0];
    const INFO_END: usize = 0x900;

    fn put_handler(rom: &mut [u8], offset: usize, data: u32) {
        put_u32(rom, offset, 0x0800_1001);
        put_u32(rom, offset + 0x04, 0x0800_1101);
        put_u32(rom, offset + 0x08, 0x0800_1201);
        put_u32(rom, offset + 0x0C, 2);
        put_u32(rom, offset + 0x18, data);
    }

    let mut rom = vec![0u8; ROM_SIZE];
    let banner = b"GAX Sound Engine 2.01 (Oct 10 2001)";
    rom[BANNER..BANNER + banner.len()].copy_from_slice(banner);

    put_u32(&mut rom, TABLE, HANDLERS.len() as u32);
    for (i, &handler) in HANDLERS.iter().enumerate() {
        put_u32(&mut rom, TABLE + 4 + i * 4, 0x0800_0000 + handler as u32);
    }
    put_handler(&mut rom, HANDLERS[1], 0x0800_0000 + SONG as u32);
    put_handler(&mut rom, HANDLERS[3], 0x0800_0000 + INFO_END as u32);
    put_handler(&mut rom, HANDLERS[4], 0x0800_0A00);

    put_u16(&mut rom, SONG, 2);
    put_u16(&mut rom, SONG + 0x02, 0x20);
    put_u16(&mut rom, SONG + 0x04, 5);
    put_u16(&mut rom, SONG + 0x08, 0xC0);
    put_u32(&mut rom, SONG + 0x0C, 0x0800_0400);
    put_u32(&mut rom, SONG + 0x10, 0x0800_0500);
    put_u32(&mut rom, SONG + 0x14, 0x0800_0600);

    let info = b"\"Legacy Tune\"";
    let start = INFO_END - 2 - info.len();
    rom[start..start + info.len()].copy_from_slice(info);
    rom
}

#[test]
fn test_end_to_end_v2() {
    let rom = RomImage::new(make_v2_gax_rom()).unwrap();
    let recognizer = recognizer();

    let scan = recognizer.scan(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(scan.layout, Some(HeaderLayout::V2));
    assert_eq!(scan.music.keys().copied().collect::<Vec<_>>(), vec![0x0800_0100]);
    assert!(scan.functions.is_empty());

    let result = recognizer.recognize(&rom, &RecognizeOptions::new()).unwrap();
    assert_eq!(result.version_text(), "2.01");
    assert_eq!(result.version_number.as_ref().map(|n| n.major), Some(2));
    assert_eq!(result.songs.len(), 1);
    let song = &result.songs[0];
    assert_eq!(song.title, "Legacy Tune");
    assert_eq!(song.channels, 2);
    assert_eq!(song.num_patterns, 5);
    assert_eq!(song.seq_address, 0x0800_0400);
    assert_eq!(song.channel_addresses, vec![0x0800_0380, 0x0800_03C0]);
}
