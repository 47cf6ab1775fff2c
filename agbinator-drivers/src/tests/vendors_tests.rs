use super::*;

/// Build a blank ROM with the given hex signatures written at the given
/// offsets. Wildcards are filled with 0x5A.
fn make_rom(placements: &[(usize, &str)]) -> RomImage {
    let mut rom = vec![0u8; 0x1000];
    for &(offset, hex) in placements {
        for (i, token) in hex.split_whitespace().enumerate() {
            rom[offset + i] = if token == "??" {
                0x5A
            } else {
                u8::from_str_radix(token, 16).unwrap()
            };
        }
    }
    RomImage::new(rom).unwrap()
}

fn recognize(signature: &VendorSignature, rom: &RomImage) -> Option<DriverIdentification> {
    SignatureRecognizer::new(signature)
        .unwrap()
        .recognize(rom, &RecognizeOptions::new())
}

fn pattern_of(signature: &VendorSignature, variant: usize, alternative: usize) -> &'static str {
    signature.variants[variant].patterns[alternative]
}

#[test]
fn test_single_pattern_vendor() {
    let rom = make_rom(&[(0x200, pattern_of(&QUINTET, 0, 0))]);
    let result = recognize(&QUINTET, &rom).unwrap();
    assert_eq!(result.driver_name, "Quintet");
    assert_eq!(result.driver_version, None);
    assert!(recognize(&MOBIUS, &rom).is_none());
}

#[test]
fn test_kcej_reports_variant() {
    let rom = make_rom(&[(0x20, pattern_of(&KCEJ, 0, 0))]);
    assert_eq!(recognize(&KCEJ, &rom).unwrap().version_text(), "Late");

    let rom = make_rom(&[(0x500, pattern_of(&KCEJ, 1, 0))]);
    assert_eq!(recognize(&KCEJ, &rom).unwrap().version_text(), "Middle");

    let rom = make_rom(&[(0x64, pattern_of(&KCEJ, 2, 0))]);
    assert_eq!(recognize(&KCEJ, &rom).unwrap().version_text(), "Early");
}

#[test]
fn test_kcej_min_offset_falls_through() {
    // Late signature too close to the start, Early one valid
    let rom = make_rom(&[(8, pattern_of(&KCEJ, 0, 0)), (0x100, pattern_of(&KCEJ, 2, 0))]);
    assert_eq!(recognize(&KCEJ, &rom).unwrap().version_text(), "Early");

    let rom = make_rom(&[(0x400, pattern_of(&KCEJ, 1, 0))]);
    assert!(recognize(&KCEJ, &rom).is_none());
}

#[test]
fn test_natsume_alternatives() {
    let rom = make_rom(&[(0x300, pattern_of(&NATSUME, 0, 2))]);
    assert!(recognize(&NATSUME, &rom).is_some());

    // the first alternative found decides, even if it is too early
    let rom = make_rom(&[(4, pattern_of(&NATSUME, 0, 0)), (0x300, pattern_of(&NATSUME, 0, 1))]);
    assert!(recognize(&NATSUME, &rom).is_none());
}

#[test]
fn test_webfoot_second_alternative() {
    let rom = make_rom(&[(0x40, pattern_of(&WEBFOOT, 0, 1))]);
    assert_eq!(recognize(&WEBFOOT, &rom).unwrap().driver_name, "Webfoot Technologies");
}

#[test]
fn test_rare_needs_epilogue_after_prologue() {
    let prologue = pattern_of(&RARE, 0, 0);
    let Some(Followup::After(epilogue)) = RARE.variants[0].followup else {
        panic!("Rare has no follow-up pattern");
    };

    let rom = make_rom(&[(0x100, prologue), (0x180, epilogue)]);
    assert!(recognize(&RARE, &rom).is_some());

    let rom = make_rom(&[(0x80, epilogue), (0x100, prologue)]);
    assert!(recognize(&RARE, &rom).is_none());
}

#[test]
fn test_apex_second_pattern_anywhere() {
    let first = pattern_of(&APEX, 0, 0);
    let Some(Followup::Anywhere(second)) = APEX.variants[0].followup else {
        panic!("Apex has no follow-up pattern");
    };

    let rom = make_rom(&[(0x80, second), (0x100, first)]);
    assert!(recognize(&APEX, &rom).is_some());

    let rom = make_rom(&[(0x100, first)]);
    assert!(recognize(&APEX, &rom).is_none());
}

#[test]
fn test_wildcard_signatures() {
    for signature in [&SONIX, &ALPHADREAM] {
        let rom = make_rom(&[(0x333, pattern_of(signature, 0, 0))]);
        assert_eq!(recognize(signature, &rom).unwrap().driver_name, signature.name);
    }
}

#[test]
fn test_invalid_table_is_an_error() {
    const BROKEN: VendorSignature =
        VendorSignature::new("Broken", &[SignatureVariant::new(&["12 XY"])]);
    let err = SignatureRecognizer::new(&BROKEN).err().unwrap();
    assert!(err.to_string().contains("Broken"));
}
