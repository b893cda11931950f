use serde::{Deserialize, Serialize};

use crate::gender::Gender;
use crate::version::GameVersion;

/// Identifies one Pokémon storage. The party is its own storage with a
/// different byte layout (live battle statistics) from boxed storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageId {
    Party,
    Box(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryKind {
    General,
    Computer,
    Balls,
    Keys,
    HiddenMachines,
    TechnicalMachines,
}

/// One inventory slot, in universal item ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemSlot {
    pub id: u16,
    pub quantity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventorySnapshot {
    pub kind: InventoryKind,
    pub capacity: usize,
    pub max_quantity: u8,
    pub items: Vec<ItemSlot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveSlot {
    pub id: u8,
    pub power_points: u8,
    pub ups: u8,
}

/// Per-stat hidden modifiers, 0-15 each. The health value is never
/// stored: it is derived from the low bit of the other four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndividualValues {
    pub health: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffortValues {
    pub health: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatisticValues {
    pub health: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: u16,
}

/// Pokérus infection state. `strain == 0` means never infected; the
/// strain caps the valid day count at `strain % 4 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pokerus {
    pub strain: u8,
    pub days: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Day,
    Night,
}

impl TimeOfDay {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            2 => Self::Day,
            3 => Self::Night,
            _ => Self::Morning,
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            Self::Morning => 1,
            Self::Day => 2,
            Self::Night => 3,
        }
    }
}

/// Crystal-only capture metadata packed into two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaughtData {
    pub time: TimeOfDay,
    pub level: u8,
    pub trainer_gender: Gender,
    pub location: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerInfo {
    pub name: String,
    pub visible_id: u16,
    /// Unused in Generations I-II, always zero; kept for forward
    /// compatibility with later formats.
    pub secret_id: u16,
    pub gender: Gender,
}

/// A decoded copy of one creature's stored attributes. An empty slot
/// is `species_id == 0`, never an absent object; the derived fields
/// (nature, statistics, form) are meaningless while empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSnapshot {
    pub species_id: u16,
    pub nickname: String,
    pub trainer_name: String,
    pub trainer_id: u16,
    pub level: u8,
    pub experience: u32,
    pub moves: [MoveSlot; 4],
    pub ivs: IndividualValues,
    pub evs: EffortValues,
    pub statistics: StatisticValues,
    pub shiny: bool,
    pub nature_id: u8,
    pub held_item: Option<u16>,
    pub friendship: Option<u8>,
    pub pokerus: Option<Pokerus>,
    pub form_letter: Option<char>,
    pub caught: Option<CaughtData>,
}

impl PokemonSnapshot {
    pub fn is_empty(&self) -> bool {
        self.species_id == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapabilityIssue {
    /// The file carries emulator trailing data past the save region;
    /// it is preserved verbatim on export.
    TrailingDataPreserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Capabilities {
    pub can_query: bool,
    pub can_apply_edits: bool,
    pub issues: Vec<CapabilityIssue>,
}

impl Capabilities {
    pub fn editable(issues: Vec<CapabilityIssue>) -> Self {
        Self {
            can_query: true,
            can_apply_edits: true,
            issues,
        }
    }
}

/// Top-level read view of a loaded save, in the shape hosts render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: GameVersion,
    pub trainer: TrainerInfo,
    pub party_size: usize,
    pub box_count: usize,
    pub current_box: u8,
    pub owned_count: usize,
    pub seen_count: usize,
}
