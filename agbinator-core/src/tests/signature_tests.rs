use super::*;

const SIGNATURES: &[FunctionSignature] = &[
    FunctionSignature::new("Alpha", &["AA BB CC DD"]),
    FunctionSignature::new("Beta", &["11 22 33 44", "55 66 ?? 88"]),
    FunctionSignature::new("Gamma", &["DE AD BE EF"]).displaced(0x10),
    FunctionSignature::new("Delta", &["01 02 03 04"]),
];

fn make_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x400];
    rom[0x100..0x104].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
    rom[0x200..0x204].copy_from_slice(&[0x55, 0x66, 0x77, 0x88]);
    rom[0x300..0x304].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    rom
}

#[test]
fn test_locate_in_table_order() {
    let index = FunctionIndex::new(SIGNATURES).unwrap();
    assert_eq!(index.function_count(), 4);

    let functions = index.locate(&make_rom());
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

    let addresses: Vec<u32> = functions.iter().map(|f| f.address).collect();
    assert_eq!(addresses, [0x0800_0100, 0x0800_0200, 0x0800_02F0]);
}

#[test]
fn test_displacement_before_start_is_absent() {
    let mut rom = vec![0u8; 0x100];
    rom[0x08..0x0C].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let index = FunctionIndex::new(&SIGNATURES[2..3]).unwrap();
    assert!(index.locate(&rom).is_empty());
}

#[test]
fn test_first_alternative_wins() {
    let mut rom = vec![0u8; 0x400];
    rom[0x010..0x014].copy_from_slice(&[0x55, 0x66, 0x00, 0x88]);
    rom[0x300..0x304].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);
    let index = FunctionIndex::new(&SIGNATURES[1..2]).unwrap();
    let functions = index.locate(&rom);
    assert_eq!(functions[0].address, 0x0800_0300);
}

#[test]
fn test_bad_pattern_names_the_entry() {
    let bad = [FunctionSignature::new("Broken", &["ZZ"])];
    let err = FunctionIndex::new(&bad).err().unwrap();
    assert!(err.to_string().contains("Broken"));
}
