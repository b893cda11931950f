//! Gold/Silver/Crystal Pokédex flags, plus the Unown letter dex.
//!
//! Seen and owned are 32-byte bitsets over the 251 species. Unown
//! additionally tracks which letter forms have been encountered in a
//! 26-entry list; the dex screen indexes that list unconditionally,
//! so owning Unown must populate it.

use crate::buffer;
use crate::core_api::CoreError;
use crate::gen2::Layout;
use crate::species::{GEN2_SPECIES_COUNT, UNOWN, UNOWN_FORM_COUNT};

fn flag_position(base: usize, species_id: u16) -> Result<(usize, u8), CoreError> {
    if species_id == 0 || species_id > GEN2_SPECIES_COUNT {
        return Err(CoreError::invalid_input(format!(
            "species id {species_id} is outside 1-{GEN2_SPECIES_COUNT}"
        )));
    }
    let index = (species_id - 1) as usize;
    Ok((base + index / 8, (index % 8) as u8))
}

pub fn is_owned(bytes: &[u8], layout: &Layout, species_id: u16) -> Result<bool, CoreError> {
    let (offset, bit) = flag_position(layout.dex_owned, species_id)?;
    Ok(buffer::get_flag(bytes, offset, bit))
}

pub fn is_seen(bytes: &[u8], layout: &Layout, species_id: u16) -> Result<bool, CoreError> {
    let (offset, bit) = flag_position(layout.dex_seen, species_id)?;
    Ok(buffer::get_flag(bytes, offset, bit))
}

pub fn set_seen(
    bytes: &mut [u8],
    layout: &Layout,
    species_id: u16,
    seen: bool,
) -> Result<(), CoreError> {
    let (offset, bit) = flag_position(layout.dex_seen, species_id)?;
    buffer::set_flag(bytes, offset, bit, seen);
    Ok(())
}

pub fn set_owned(
    bytes: &mut [u8],
    layout: &Layout,
    species_id: u16,
    owned: bool,
) -> Result<(), CoreError> {
    let first_time = owned && species_id == UNOWN && !is_owned(bytes, layout, UNOWN)?;
    let (offset, bit) = flag_position(layout.dex_owned, species_id)?;
    buffer::set_flag(bytes, offset, bit, owned);
    if first_time {
        mark_all_unown_forms(bytes, layout);
    }
    Ok(())
}

/// Owning Unown for the first time records every letter form as seen
/// and defaults the first-seen letter to 'A' when none is set yet.
/// The dex renderer walks this list without bounds checks, so an
/// owned Unown with an empty list would crash it.
fn mark_all_unown_forms(bytes: &mut [u8], layout: &Layout) {
    for index in 0..UNOWN_FORM_COUNT as usize {
        if bytes[layout.unown_dex + index] == 0 {
            bytes[layout.unown_dex + index] = index as u8 + 1;
        }
    }
    let first_seen = layout.unown_dex + UNOWN_FORM_COUNT as usize;
    if bytes[first_seen] == 0 {
        bytes[first_seen] = 1;
    }
}

pub fn owned_count(bytes: &[u8], layout: &Layout) -> usize {
    count_flags(bytes, layout.dex_owned)
}

pub fn seen_count(bytes: &[u8], layout: &Layout) -> usize {
    count_flags(bytes, layout.dex_seen)
}

fn count_flags(bytes: &[u8], base: usize) -> usize {
    (1..=GEN2_SPECIES_COUNT)
        .filter(|&species| {
            let index = (species - 1) as usize;
            buffer::get_flag(bytes, base + index / 8, (index % 8) as u8)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen2::CRYSTAL;

    #[test]
    fn flags_cover_the_full_national_dex() {
        let mut bytes = vec![0u8; 0x8000];
        let layout = &CRYSTAL;

        set_seen(&mut bytes, layout, 152, true).unwrap();
        set_owned(&mut bytes, layout, 251, true).unwrap();
        assert!(is_seen(&bytes, layout, 152).unwrap());
        assert!(is_owned(&bytes, layout, 251).unwrap());
        assert!(!is_owned(&bytes, layout, 250).unwrap());
        assert_eq!(seen_count(&bytes, layout), 1);
        assert_eq!(owned_count(&bytes, layout), 1);
        assert!(set_owned(&mut bytes, layout, 252, true).is_err());
    }

    #[test]
    fn owning_unown_marks_every_letter_form() {
        let mut bytes = vec![0u8; 0x8000];
        let layout = &CRYSTAL;
        // Letter 'C' already recorded as the first seen.
        bytes[layout.unown_dex] = 3;
        bytes[layout.unown_dex + UNOWN_FORM_COUNT as usize] = 3;

        set_owned(&mut bytes, layout, UNOWN, true).unwrap();
        assert_eq!(bytes[layout.unown_dex], 3);
        for index in 1..UNOWN_FORM_COUNT as usize {
            assert_eq!(bytes[layout.unown_dex + index], index as u8 + 1);
        }
        // Existing first-seen marker is preserved.
        assert_eq!(bytes[layout.unown_dex + UNOWN_FORM_COUNT as usize], 3);

        // Owning again does not rewrite the list.
        bytes[layout.unown_dex + 1] = 0;
        set_owned(&mut bytes, layout, UNOWN, true).unwrap();
        assert_eq!(bytes[layout.unown_dex + 1], 0);
    }

    #[test]
    fn first_seen_letter_defaults_to_a() {
        let mut bytes = vec![0u8; 0x8000];
        let layout = &CRYSTAL;
        set_owned(&mut bytes, layout, UNOWN, true).unwrap();
        assert_eq!(bytes[layout.unown_dex + UNOWN_FORM_COUNT as usize], 1);
    }
}
