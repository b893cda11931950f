//! Universal item-id translation.
//!
//! Each generation numbers items in its own local space; the crate
//! exposes one canonical "universal" numbering so hosts stay
//! generation-agnostic. The universal space is the Generation II
//! internal numbering; Generation I items without a Generation II
//! counterpart live in a reserved block at `0x100 | local` so they
//! still round-trip through their own generation.
//!
//! Decoding an unknown local id warns and yields the sentinel in both
//! generations. Encoding a universal id with no local representation
//! fails: Generation II items don't exist in Generation I and vice
//! versa, and that is an expected caller-visible condition.

use crate::core_api::CoreError;
use crate::version::Generation;

pub const UNSUPPORTED: u16 = 0;

/// Reserved universal block for Generation I items with no
/// Generation II counterpart.
pub const GEN1_ONLY_BASE: u16 = 0x100;

const GEN2_MAX_LOCAL: u8 = 249;

// Universal (Generation II) machine id blocks.
const TM_BASE: u16 = 191; // TM01
const TM_COUNT: u16 = 50;
const HM_BASE: u16 = 243; // HM01
const HM_COUNT: u16 = 7;

// Generation I machine id blocks.
const GEN1_HM_BASE: u8 = 0xC4; // HM01-HM05
const GEN1_HM_COUNT: u8 = 5;
const GEN1_TM_BASE: u8 = 0xC9; // TM01-TM50

pub fn is_technical_machine(universal: u16) -> bool {
    (TM_BASE..TM_BASE + TM_COUNT).contains(&universal)
}

pub fn is_hidden_machine(universal: u16) -> bool {
    (HM_BASE..HM_BASE + HM_COUNT).contains(&universal)
}

/// 1-based machine number for a universal TM id.
pub fn technical_machine_number(universal: u16) -> Option<u8> {
    is_technical_machine(universal).then(|| (universal - TM_BASE + 1) as u8)
}

pub fn hidden_machine_number(universal: u16) -> Option<u8> {
    is_hidden_machine(universal).then(|| (universal - HM_BASE + 1) as u8)
}

pub fn technical_machine_id(number: u8) -> u16 {
    TM_BASE + (number as u16 - 1)
}

pub fn hidden_machine_id(number: u8) -> u16 {
    HM_BASE + (number as u16 - 1)
}

/// Generation II ball ids, the allow-list for the Ball pocket.
pub const GEN2_BALL_IDS: [u16; 12] = [1, 2, 4, 5, 157, 159, 160, 161, 163, 164, 165, 166];

/// Generation II items the Key pocket stores (quantity is always 1).
pub const GEN2_KEY_ITEM_IDS: [u16; 18] = [
    7, 66, 67, 68, 69, 70, 71, 115, 116, 117, 118, 127, 128, 129, 130, 133, 134, 175,
];

pub fn local_to_universal(generation: Generation, local: u8) -> u16 {
    let universal = match generation {
        Generation::I => gen1_local_to_universal(local),
        Generation::II => gen2_local_to_universal(local),
    };
    if universal == UNSUPPORTED && local != 0 {
        tracing::warn!(local, ?generation, "unknown local item id, decoding as unsupported");
    }
    universal
}

pub fn universal_to_local(generation: Generation, universal: u16) -> Result<u8, CoreError> {
    let local = match generation {
        Generation::I => gen1_universal_to_local(universal),
        Generation::II => gen2_universal_to_local(universal),
    };
    local.ok_or_else(|| {
        CoreError::unsupported_operation(format!(
            "universal item id {universal} has no local id in Generation {generation:?}"
        ))
    })
}

fn gen2_local_to_universal(local: u8) -> u16 {
    if local == 0 || local > GEN2_MAX_LOCAL {
        return UNSUPPORTED;
    }
    local as u16
}

fn gen2_universal_to_local(universal: u16) -> Option<u8> {
    if universal == 0 || universal > GEN2_MAX_LOCAL as u16 {
        return None;
    }
    Some(universal as u8)
}

fn gen1_local_to_universal(local: u8) -> u16 {
    if (GEN1_HM_BASE..GEN1_HM_BASE + GEN1_HM_COUNT).contains(&local) {
        return hidden_machine_id(local - GEN1_HM_BASE + 1);
    }
    if local >= GEN1_TM_BASE {
        let number = (local - GEN1_TM_BASE) as u16 + 1;
        if number <= TM_COUNT {
            return TM_BASE + number - 1;
        }
        return UNSUPPORTED;
    }
    GEN1_ITEM_TO_UNIVERSAL
        .get(local as usize)
        .copied()
        .unwrap_or(UNSUPPORTED)
}

fn gen1_universal_to_local(universal: u16) -> Option<u8> {
    if let Some(number) = hidden_machine_number(universal) {
        if number <= GEN1_HM_COUNT {
            return Some(GEN1_HM_BASE + number - 1);
        }
        return None;
    }
    if let Some(number) = technical_machine_number(universal) {
        return Some(GEN1_TM_BASE + number - 1);
    }
    if universal == UNSUPPORTED {
        return None;
    }
    GEN1_ITEM_TO_UNIVERSAL
        .iter()
        .position(|&id| id == universal)
        .map(|local| local as u8)
}

/// Universal id per Generation I local id 0..=83. Badges and glitch
/// slots are unsupported; items with no Generation II counterpart sit
/// in the reserved `0x100` block.
static GEN1_ITEM_TO_UNIVERSAL: [u16; 84] = [
    UNSUPPORTED,          // 0x00
    1,                    // 0x01 Master Ball
    2,                    // 0x02 Ultra Ball
    4,                    // 0x03 Great Ball
    5,                    // 0x04 Poké Ball
    GEN1_ONLY_BASE | 0x05, // 0x05 Town Map
    7,                    // 0x06 Bicycle
    UNSUPPORTED,          // 0x07 glitch
    GEN1_ONLY_BASE | 0x08, // 0x08 Safari Ball
    GEN1_ONLY_BASE | 0x09, // 0x09 Pokédex
    8,                    // 0x0A Moon Stone
    9,                    // 0x0B Antidote
    10,                   // 0x0C Burn Heal
    11,                   // 0x0D Ice Heal
    12,                   // 0x0E Awakening
    13,                   // 0x0F Parlyz Heal
    14,                   // 0x10 Full Restore
    15,                   // 0x11 Max Potion
    16,                   // 0x12 Hyper Potion
    17,                   // 0x13 Super Potion
    18,                   // 0x14 Potion
    UNSUPPORTED,          // 0x15 BoulderBadge
    UNSUPPORTED,          // 0x16 CascadeBadge
    UNSUPPORTED,          // 0x17 ThunderBadge
    UNSUPPORTED,          // 0x18 RainbowBadge
    UNSUPPORTED,          // 0x19 SoulBadge
    UNSUPPORTED,          // 0x1A MarshBadge
    UNSUPPORTED,          // 0x1B VolcanoBadge
    UNSUPPORTED,          // 0x1C EarthBadge
    19,                   // 0x1D Escape Rope
    20,                   // 0x1E Repel
    GEN1_ONLY_BASE | 0x1F, // 0x1F Old Amber
    22,                   // 0x20 Fire Stone
    23,                   // 0x21 Thunderstone
    24,                   // 0x22 Water Stone
    26,                   // 0x23 HP Up
    27,                   // 0x24 Protein
    28,                   // 0x25 Iron
    29,                   // 0x26 Carbos
    GEN1_ONLY_BASE | 0x27, // 0x27 Calcium
    GEN1_ONLY_BASE | 0x28, // 0x28 Rare Candy
    GEN1_ONLY_BASE | 0x29, // 0x29 Dome Fossil
    GEN1_ONLY_BASE | 0x2A, // 0x2A Helix Fossil
    GEN1_ONLY_BASE | 0x2B, // 0x2B Secret Key
    UNSUPPORTED,          // 0x2C unused
    GEN1_ONLY_BASE | 0x2D, // 0x2D Bike Voucher
    GEN1_ONLY_BASE | 0x2E, // 0x2E X Accuracy
    34,                   // 0x2F Leaf Stone
    GEN1_ONLY_BASE | 0x30, // 0x30 Card Key
    GEN1_ONLY_BASE | 0x31, // 0x31 Nugget
    UNSUPPORTED,          // 0x32 glitch
    GEN1_ONLY_BASE | 0x33, // 0x33 Poké Doll
    GEN1_ONLY_BASE | 0x34, // 0x34 Full Heal
    GEN1_ONLY_BASE | 0x35, // 0x35 Revive
    GEN1_ONLY_BASE | 0x36, // 0x36 Max Revive
    GEN1_ONLY_BASE | 0x37, // 0x37 Guard Spec.
    GEN1_ONLY_BASE | 0x38, // 0x38 Super Repel
    GEN1_ONLY_BASE | 0x39, // 0x39 Max Repel
    GEN1_ONLY_BASE | 0x3A, // 0x3A Dire Hit
    UNSUPPORTED,          // 0x3B Coin
    GEN1_ONLY_BASE | 0x3C, // 0x3C Fresh Water
    GEN1_ONLY_BASE | 0x3D, // 0x3D Soda Pop
    GEN1_ONLY_BASE | 0x3E, // 0x3E Lemonade
    GEN1_ONLY_BASE | 0x3F, // 0x3F S.S. Ticket
    GEN1_ONLY_BASE | 0x40, // 0x40 Gold Teeth
    GEN1_ONLY_BASE | 0x41, // 0x41 X Attack
    GEN1_ONLY_BASE | 0x42, // 0x42 X Defend
    GEN1_ONLY_BASE | 0x43, // 0x43 X Speed
    GEN1_ONLY_BASE | 0x44, // 0x44 X Special
    GEN1_ONLY_BASE | 0x45, // 0x45 Coin Case
    GEN1_ONLY_BASE | 0x46, // 0x46 Oak's Parcel
    GEN1_ONLY_BASE | 0x47, // 0x47 Itemfinder
    GEN1_ONLY_BASE | 0x48, // 0x48 Silph Scope
    GEN1_ONLY_BASE | 0x49, // 0x49 Poké Flute
    GEN1_ONLY_BASE | 0x4A, // 0x4A Lift Key
    GEN1_ONLY_BASE | 0x4B, // 0x4B Exp. All
    GEN1_ONLY_BASE | 0x4C, // 0x4C Old Rod
    GEN1_ONLY_BASE | 0x4D, // 0x4D Good Rod
    GEN1_ONLY_BASE | 0x4E, // 0x4E Super Rod
    GEN1_ONLY_BASE | 0x4F, // 0x4F PP Up
    GEN1_ONLY_BASE | 0x50, // 0x50 Ether
    GEN1_ONLY_BASE | 0x51, // 0x51 Max Ether
    GEN1_ONLY_BASE | 0x52, // 0x52 Elixer
    GEN1_ONLY_BASE | 0x53, // 0x53 Max Elixer
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen1_round_trips_through_universal() {
        for local in 1..=0x53u8 {
            let universal = local_to_universal(Generation::I, local);
            if universal == UNSUPPORTED {
                continue;
            }
            assert_eq!(
                universal_to_local(Generation::I, universal).unwrap(),
                local,
                "local {local:#04X}"
            );
        }
    }

    #[test]
    fn machines_translate_by_range() {
        // Gen 1 TM01 (0xC9) and HM01 (0xC4).
        assert_eq!(local_to_universal(Generation::I, 0xC9), technical_machine_id(1));
        assert_eq!(local_to_universal(Generation::I, 0xC4), hidden_machine_id(1));
        assert_eq!(universal_to_local(Generation::I, technical_machine_id(50)).unwrap(), 0xFA);
        assert!(is_hidden_machine(hidden_machine_id(7)));
        assert!(!is_technical_machine(hidden_machine_id(1)));
        // HM06/07 exist only in Generation II.
        assert!(universal_to_local(Generation::I, hidden_machine_id(6)).is_err());
        assert_eq!(universal_to_local(Generation::II, hidden_machine_id(6)).unwrap(), 248);
    }

    #[test]
    fn cross_generation_items_fail_to_encode() {
        // Town Map is Generation I only.
        let town_map = local_to_universal(Generation::I, 0x05);
        assert!(universal_to_local(Generation::II, town_map).is_err());
        // BrightPowder (Generation II id 3) never existed in Generation I.
        assert!(universal_to_local(Generation::I, 3).is_err());
    }

    #[test]
    fn unknown_local_ids_decode_to_sentinel() {
        assert_eq!(local_to_universal(Generation::I, 0x15), UNSUPPORTED);
        assert_eq!(local_to_universal(Generation::II, 0), UNSUPPORTED);
        assert_eq!(local_to_universal(Generation::II, 255), UNSUPPORTED);
    }

    #[test]
    fn shared_balls_keep_their_ids() {
        assert_eq!(local_to_universal(Generation::I, 0x01), 1);
        assert_eq!(local_to_universal(Generation::II, 1), 1);
        assert_eq!(universal_to_local(Generation::I, 5).unwrap(), 0x04);
        assert_eq!(universal_to_local(Generation::II, 5).unwrap(), 5);
    }
}
