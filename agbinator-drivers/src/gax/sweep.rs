//! Exhaustive song header search.

use std::collections::BTreeMap;

use agbinator_core::address::{RomAddress, to_address};

use super::header::{HeaderLayout, MusicHeader, RejectReason, parse_header};

/// Song headers keyed by their ROM address, in ascending order.
pub type MusicCatalog = BTreeMap<RomAddress, MusicHeader>;

/// Try `layout` at every word-aligned offset and keep every header that
/// validates. Rejected candidates leave no trace in the result.
pub fn sweep(rom: &[u8], layout: HeaderLayout) -> MusicCatalog {
    let mut catalog = MusicCatalog::new();
    let mut candidates = 0usize;

    for offset in (0..rom.len()).step_by(4) {
        candidates += 1;
        match parse_header(rom, offset, layout) {
            Ok(header) => {
                catalog.insert(to_address(offset), header);
            }
            Err(reason) if is_late_rejection(&reason) => {
                log::trace!("0x{:08X}: {}", to_address(offset), reason);
            }
            Err(_) => {}
        }
    }

    log::debug!(
        "{:?} sweep: {} candidates, {} headers",
        layout,
        candidates,
        catalog.len()
    );
    catalog
}

/// Rejections past the first field checks; the rest is noise.
fn is_late_rejection(reason: &RejectReason) -> bool {
    !matches!(
        reason,
        RejectReason::Truncated | RejectReason::ChannelCount(_) | RejectReason::HandlerCount(_)
    )
}
