//! Party and box placement for the Gold/Silver/Crystal layout.
//!
//! Fourteen boxes split across SRAM banks 2 and 3, with the active
//! box additionally kept as a live working copy in the main data
//! bank. The party and current-box offsets differ between
//! Gold/Silver and Crystal, so they come from the version layout.

use crate::collection::PokemonList;
use crate::core_api::{CoreError, StorageId};

pub use crate::collection::NAME_LENGTH;

pub const PARTY_CAPACITY: usize = 6;
pub const BOX_CAPACITY: usize = 20;
pub const BOX_COUNT: usize = 14;

pub const BOX_STRUCT_LENGTH: usize = 0x20;
pub const PARTY_STRUCT_LENGTH: usize = 0x30;

pub const BOX_SIZE: usize = 0x450;

const BANK_TWO: usize = 0x4000;
const BANK_THREE: usize = 0x6000;
const BOXES_PER_BANK: usize = 7;

pub fn party_layout(party_base: usize) -> PokemonList {
    PokemonList {
        base: party_base,
        capacity: PARTY_CAPACITY,
        stride: PARTY_STRUCT_LENGTH,
        in_party: true,
    }
}

/// Where box `index` lives in the banked storage area, ignoring the
/// live working copy.
pub fn banked_box_base(index: usize) -> usize {
    if index < BOXES_PER_BANK {
        BANK_TWO + index * BOX_SIZE
    } else {
        BANK_THREE + (index - BOXES_PER_BANK) * BOX_SIZE
    }
}

pub fn box_layout(
    index: usize,
    current_box: usize,
    current_box_data: usize,
) -> Result<PokemonList, CoreError> {
    if index >= BOX_COUNT {
        return Err(CoreError::invalid_input(format!(
            "box {index} is out of range (this game has {BOX_COUNT} boxes)"
        )));
    }
    let base = if index == current_box {
        current_box_data
    } else {
        banked_box_base(index)
    };
    Ok(PokemonList {
        base,
        capacity: BOX_CAPACITY,
        stride: BOX_STRUCT_LENGTH,
        in_party: false,
    })
}

pub fn layout_for(
    storage: StorageId,
    party_base: usize,
    current_box: usize,
    current_box_data: usize,
) -> Result<PokemonList, CoreError> {
    match storage {
        StorageId::Party => Ok(party_layout(party_base)),
        StorageId::Box(index) => box_layout(index as usize, current_box, current_box_data),
    }
}
