/// Size string for log output. Whole MB or KB when the count divides
/// evenly, raw bytes otherwise.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 2] = [(1 << 20, "MB"), (1 << 10, "KB")];
    UNITS
        .iter()
        .find(|&&(size, _)| bytes >= size && bytes.is_multiple_of(size))
        .map(|&(size, unit)| format!("{} {}", bytes / size, unit))
        .unwrap_or_else(|| format!("{} bytes", bytes))
}

/// Printable text of a NUL-padded header field. Control bytes are dropped
/// and surrounding spaces are kept.
pub fn read_ascii(buf: &[u8]) -> String {
    let field = memchr::memchr(0, buf).map_or(buf, |end| &buf[..end]);
    field
        .iter()
        .filter(|b| b.is_ascii_graphic() || **b == b' ')
        .map(|&b| char::from(b))
        .collect()
}

/// Decode bytes as ISO-8859-1. Every byte maps to the code point of the
/// same value, so this never fails.
pub fn decode_latin1(buf: &[u8]) -> String {
    buf.iter().map(|&b| b as char).collect()
}
