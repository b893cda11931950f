//! Party and box placement for the Generation I layout.
//!
//! The party and the active box live in the main data bank; the other
//! twelve boxes are banked away in SRAM banks 2 and 3 and only the
//! active box's live copy is ever edited in place.

use crate::collection::PokemonList;
use crate::core_api::{CoreError, StorageId};

pub use crate::collection::NAME_LENGTH;

pub const PARTY_CAPACITY: usize = 6;
pub const BOX_CAPACITY: usize = 20;
pub const BOX_COUNT: usize = 12;

pub const BOX_STRUCT_LENGTH: usize = 0x21;
pub const PARTY_STRUCT_LENGTH: usize = 0x2C;

pub const PARTY: usize = 0x2F2C;
pub const CURRENT_BOX_INDEX: usize = 0x284C;
pub const CURRENT_BOX_DATA: usize = 0x30C0;
pub const BOX_SIZE: usize = 0x462;

const BANK_TWO: usize = 0x4000;
const BANK_THREE: usize = 0x6000;
const BOXES_PER_BANK: usize = 6;

pub fn party_layout() -> PokemonList {
    PokemonList {
        base: PARTY,
        capacity: PARTY_CAPACITY,
        stride: PARTY_STRUCT_LENGTH,
        in_party: true,
    }
}

pub fn box_layout(index: usize, current_box: usize) -> Result<PokemonList, CoreError> {
    if index >= BOX_COUNT {
        return Err(CoreError::invalid_input(format!(
            "box {index} is out of range (this game has {BOX_COUNT} boxes)"
        )));
    }
    let base = if index == current_box {
        CURRENT_BOX_DATA
    } else if index < BOXES_PER_BANK {
        BANK_TWO + index * BOX_SIZE
    } else {
        BANK_THREE + (index - BOXES_PER_BANK) * BOX_SIZE
    };
    Ok(PokemonList {
        base,
        capacity: BOX_CAPACITY,
        stride: BOX_STRUCT_LENGTH,
        in_party: false,
    })
}

pub fn layout_for(storage: StorageId, current_box: usize) -> Result<PokemonList, CoreError> {
    match storage {
        StorageId::Party => Ok(party_layout()),
        StorageId::Box(index) => box_layout(index as usize, current_box),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn party_regions_are_contiguous() {
        let party = party_layout();
        assert_eq!(party.species_offset(0), PARTY + 1);
        assert_eq!(party.data_offset(0), PARTY + 8);
        assert_eq!(party.trainer_name_offset(0), PARTY + 8 + 6 * PARTY_STRUCT_LENGTH);
        assert_eq!(
            party.nickname_offset(5) + NAME_LENGTH,
            PARTY + 8 + 6 * PARTY_STRUCT_LENGTH + 12 * NAME_LENGTH
        );
    }

    #[test]
    fn active_box_reads_from_its_live_copy() {
        let layout = box_layout(3, 3).unwrap();
        assert_eq!(layout.base, CURRENT_BOX_DATA);
        let layout = box_layout(3, 0).unwrap();
        assert_eq!(layout.base, BANK_TWO + 3 * BOX_SIZE);
        let layout = box_layout(8, 0).unwrap();
        assert_eq!(layout.base, BANK_THREE + 2 * BOX_SIZE);
        assert!(box_layout(12, 0).is_err());
    }

    #[test]
    fn delete_shifts_every_region() {
        let layout = party_layout();
        let mut bytes = vec![0u8; 0x8000];
        layout.set_size(&mut bytes, 3);
        for slot in 0..3 {
            bytes[layout.species_offset(slot)] = 10 + slot as u8;
            bytes[layout.data_offset(slot)] = 10 + slot as u8;
            bytes[layout.trainer_name_offset(slot)] = 0x80 + slot as u8;
            bytes[layout.nickname_offset(slot)] = 0x90 + slot as u8;
        }
        layout.delete(&mut bytes, 0).unwrap();
        assert_eq!(layout.size(&bytes), 2);
        assert_eq!(bytes[layout.species_offset(0)], 11);
        assert_eq!(bytes[layout.species_offset(2)], 0xFF);
        assert_eq!(bytes[layout.data_offset(1)], 12);
        assert_eq!(bytes[layout.trainer_name_offset(1)], 0x82);
        assert_eq!(bytes[layout.nickname_offset(0)], 0x91);
        // Freed tail slot is cleared.
        assert_eq!(bytes[layout.data_offset(2)], 0);
        assert_eq!(bytes[layout.nickname_offset(2)], text::TERMINATOR);
    }
}
