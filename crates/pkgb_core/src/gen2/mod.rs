//! Gold/Silver/Crystal save codec.
//!
//! Still a 32 KiB SRAM image, but the main data region is mirrored
//! into a backup copy elsewhere in the file, each copy guarded by its
//! own 16-bit little-endian checksum. Crystal moved most structures
//! relative to Gold/Silver, so every offset comes from a per-version
//! `Layout` table.

use crate::buffer;
use crate::collection;
use crate::core_api::{
    CaughtData, CoreError, CoreErrorCode, EffortValues, IndividualValues, InventoryKind,
    InventorySnapshot, ItemSlot, MoveSlot, Pokerus, PokemonSnapshot, StorageId, TrainerInfo,
};
use crate::gender::Gender;
use crate::text;
use crate::version::GameVersion;

pub mod inventory;
pub mod pokedex;
pub mod pokemon;
pub mod storage;

pub const KNOWN_LENGTHS: [usize; 3] = [0x8000, 0x802C, 0x8030];

const TRAINER_NAME_CHARS: usize = 7;
const RECORD_LENGTH: usize = storage::BOX_STRUCT_LENGTH + 2 * storage::NAME_LENGTH;

/// Fixed offsets for one version's save layout. `mirrors` lists the
/// `(start, end, destination)` ranges (end inclusive) copied into the
/// backup region at export time.
#[derive(Debug)]
pub struct Layout {
    pub trainer_id: usize,
    pub trainer_name: usize,
    pub trainer_gender: Option<usize>,
    pub tm_pocket: usize,
    pub items: usize,
    pub key_items: usize,
    pub balls: usize,
    pub pc_items: usize,
    pub current_box_index: usize,
    pub current_box_data: usize,
    pub party: usize,
    pub dex_owned: usize,
    pub dex_seen: usize,
    pub unown_dex: usize,
    pub checksum_start: usize,
    pub checksum_end: usize,
    pub primary_checksum: usize,
    pub secondary_checksum: usize,
    pub mirrors: &'static [(usize, usize, usize)],
}

pub static GOLD_SILVER: Layout = Layout {
    trainer_id: 0x2009,
    trainer_name: 0x200B,
    trainer_gender: None,
    tm_pocket: 0x23E6,
    items: 0x241F,
    key_items: 0x2449,
    balls: 0x2464,
    pc_items: 0x247E,
    current_box_index: 0x2724,
    current_box_data: 0x2D6C,
    party: 0x288A,
    dex_owned: 0x2A4C,
    dex_seen: 0x2A6C,
    unown_dex: 0x2A8C,
    checksum_start: 0x2009,
    checksum_end: 0x2D68,
    primary_checksum: 0x2D69,
    secondary_checksum: 0x7E6D,
    mirrors: &[
        (0x2009, 0x222E, 0x15C7),
        (0x222F, 0x23D8, 0x3D96),
        (0x23D9, 0x2856, 0x0C6B),
        (0x2857, 0x2889, 0x7E39),
        (0x288A, 0x2D68, 0x10E8),
    ],
};

pub static CRYSTAL: Layout = Layout {
    trainer_id: 0x2009,
    trainer_name: 0x200B,
    trainer_gender: Some(0x3E3D),
    tm_pocket: 0x23E7,
    items: 0x2420,
    key_items: 0x244A,
    balls: 0x2465,
    pc_items: 0x247F,
    current_box_index: 0x2700,
    current_box_data: 0x2D10,
    party: 0x2865,
    dex_owned: 0x2A27,
    dex_seen: 0x2A47,
    unown_dex: 0x2A67,
    checksum_start: 0x2009,
    checksum_end: 0x2B82,
    primary_checksum: 0x2D0D,
    secondary_checksum: 0x1F0D,
    mirrors: &[(0x2009, 0x2B82, 0x1209)],
};

fn layout_of(version: GameVersion) -> &'static Layout {
    match version {
        GameVersion::Crystal => &CRYSTAL,
        _ => &GOLD_SILVER,
    }
}

#[derive(Debug)]
pub struct SaveData {
    bytes: Vec<u8>,
    version: GameVersion,
}

fn structurally_valid(bytes: &[u8], layout: &Layout) -> bool {
    let item_count = bytes[layout.items] as usize;
    if item_count > inventory::GENERAL_CAPACITY
        || bytes[layout.items + 1 + item_count * 2] != collection::LIST_TERMINATOR
    {
        return false;
    }
    let party = storage::party_layout(layout.party);
    let party_count = bytes[party.base] as usize;
    party_count <= storage::PARTY_CAPACITY
        && bytes[party.species_offset(party_count)] == collection::LIST_TERMINATOR
}

/// Crystal is tried before Gold/Silver: its shifted offsets make a
/// Gold/Silver save fail the Crystal structural check and vice versa.
pub fn detect(bytes: &[u8]) -> Option<GameVersion> {
    if !KNOWN_LENGTHS.contains(&bytes.len()) {
        return None;
    }
    if structurally_valid(bytes, &CRYSTAL) {
        return Some(GameVersion::Crystal);
    }
    if structurally_valid(bytes, &GOLD_SILVER) {
        return Some(GameVersion::GoldSilver);
    }
    None
}

impl SaveData {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CoreError> {
        match detect(&bytes) {
            Some(version) => Ok(Self { bytes, version }),
            None => Err(CoreError::new(
                CoreErrorCode::UnsupportedFormat,
                "not a recognisable Gold/Silver/Crystal save",
            )),
        }
    }

    pub fn version(&self) -> GameVersion {
        self.version
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn layout(&self) -> &'static Layout {
        layout_of(self.version)
    }

    // Trainer.

    pub fn trainer(&self) -> TrainerInfo {
        let layout = self.layout();
        let gender = match layout.trainer_gender {
            Some(offset) if self.bytes[offset] != 0 => Gender::Female,
            _ => Gender::Male,
        };
        TrainerInfo {
            name: text::decode(
                &self.bytes[layout.trainer_name..layout.trainer_name + storage::NAME_LENGTH],
                storage::NAME_LENGTH,
            ),
            visible_id: buffer::read_u16_be(&self.bytes, layout.trainer_id),
            secret_id: 0,
            gender,
        }
    }

    pub fn set_trainer_name(&mut self, name: &str) {
        let layout = self.layout();
        let encoded = text::encode(name, storage::NAME_LENGTH, TRAINER_NAME_CHARS, true);
        self.bytes[layout.trainer_name..layout.trainer_name + storage::NAME_LENGTH]
            .copy_from_slice(&encoded);
    }

    pub fn set_trainer_id(&mut self, id: u16) {
        let offset = self.layout().trainer_id;
        buffer::write_u16_be(&mut self.bytes, offset, id);
    }

    /// Crystal added the female player character; the older pair has
    /// no gender byte to write.
    pub fn set_trainer_gender(&mut self, gender: Gender) -> Result<(), CoreError> {
        match self.layout().trainer_gender {
            Some(offset) => {
                self.bytes[offset] = (gender == Gender::Female) as u8;
                Ok(())
            }
            None => Err(CoreError::unsupported_operation(
                "trainer gender is fixed in this game",
            )),
        }
    }

    // Storage.

    pub fn box_count(&self) -> usize {
        storage::BOX_COUNT
    }

    pub fn current_box(&self) -> u8 {
        self.bytes[self.layout().current_box_index] & 0x7F
    }

    fn storage_layout(&self, storage: StorageId) -> Result<collection::PokemonList, CoreError> {
        let layout = self.layout();
        storage::layout_for(
            storage,
            layout.party,
            self.current_box() as usize,
            layout.current_box_data,
        )
    }

    pub fn storage_capacity(&self, storage: StorageId) -> usize {
        match storage {
            StorageId::Party => storage::PARTY_CAPACITY,
            StorageId::Box(_) => storage::BOX_CAPACITY,
        }
    }

    pub fn storage_size(&self, storage: StorageId) -> Result<usize, CoreError> {
        Ok(self.storage_layout(storage)?.size(&self.bytes))
    }

    pub fn pokemon(&self, storage: StorageId, slot: usize) -> Result<PokemonSnapshot, CoreError> {
        let layout = self.storage_layout(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        Ok(pokemon::read(&self.bytes, &layout.slot(slot), self.version))
    }

    pub fn import_pokemon(
        &mut self,
        storage: StorageId,
        slot: usize,
        snapshot: &PokemonSnapshot,
    ) -> Result<(), CoreError> {
        let layout = self.storage_layout(storage)?;
        let size = layout.size(&self.bytes);
        if slot > size || slot >= layout.capacity {
            return Err(CoreError::invalid_input(format!(
                "cannot import into slot {slot} of a storage holding {size}"
            )));
        }
        pokemon::write(&mut self.bytes, &layout.slot(slot), snapshot, self.version)?;
        self.bytes[layout.species_offset(slot)] = snapshot.species_id as u8;
        if slot == size {
            layout.set_size(&mut self.bytes, size + 1);
        }
        Ok(())
    }

    pub fn delete_pokemon(&mut self, storage: StorageId, slot: usize) -> Result<(), CoreError> {
        let layout = self.storage_layout(storage)?;
        layout.delete(&mut self.bytes, slot)
    }

    pub fn move_pokemon(
        &mut self,
        from: StorageId,
        from_slot: usize,
        to: StorageId,
        to_slot: usize,
    ) -> Result<(), CoreError> {
        let record = self.export_record(from, from_slot)?;
        self.delete_pokemon(from, from_slot)?;
        let size = self.storage_size(to)?;
        self.import_record(to, to_slot.min(size), &record)
    }

    pub fn export_record(&self, storage: StorageId, slot: usize) -> Result<Vec<u8>, CoreError> {
        let layout = self.storage_layout(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        let offsets = layout.slot(slot);
        let mut record = Vec::with_capacity(RECORD_LENGTH);
        record.extend_from_slice(
            &self.bytes[offsets.data..offsets.data + storage::BOX_STRUCT_LENGTH],
        );
        record.extend_from_slice(
            &self.bytes[offsets.trainer_name..offsets.trainer_name + storage::NAME_LENGTH],
        );
        record.extend_from_slice(
            &self.bytes[offsets.nickname..offsets.nickname + storage::NAME_LENGTH],
        );
        Ok(record)
    }

    pub fn import_record(
        &mut self,
        storage: StorageId,
        slot: usize,
        record: &[u8],
    ) -> Result<(), CoreError> {
        if record.len() != RECORD_LENGTH {
            return Err(CoreError::invalid_input(format!(
                "a stored record is {RECORD_LENGTH} bytes, got {}",
                record.len()
            )));
        }
        let layout = self.storage_layout(storage)?;
        let size = layout.size(&self.bytes);
        if slot > size || slot >= layout.capacity {
            return Err(CoreError::invalid_input(format!(
                "cannot import into slot {slot} of a storage holding {size}"
            )));
        }
        let offsets = layout.slot(slot);
        self.bytes[offsets.data..offsets.data + storage::BOX_STRUCT_LENGTH]
            .copy_from_slice(&record[..storage::BOX_STRUCT_LENGTH]);
        self.bytes[offsets.trainer_name..offsets.trainer_name + storage::NAME_LENGTH]
            .copy_from_slice(
                &record[storage::BOX_STRUCT_LENGTH
                    ..storage::BOX_STRUCT_LENGTH + storage::NAME_LENGTH],
            );
        self.bytes[offsets.nickname..offsets.nickname + storage::NAME_LENGTH]
            .copy_from_slice(&record[storage::BOX_STRUCT_LENGTH + storage::NAME_LENGTH..]);
        self.bytes[layout.species_offset(slot)] = record[0];
        if slot == size {
            layout.set_size(&mut self.bytes, size + 1);
        }
        pokemon::refresh_after_import(&mut self.bytes, &offsets)
    }

    // Per-field Pokémon mutators.

    fn checked_slot(
        &mut self,
        storage: StorageId,
        slot: usize,
    ) -> Result<collection::SlotOffsets, CoreError> {
        let layout = self.storage_layout(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        Ok(layout.slot(slot))
    }

    pub fn set_pokemon_species(
        &mut self,
        storage: StorageId,
        slot: usize,
        species_id: u16,
    ) -> Result<(), CoreError> {
        let layout = self.storage_layout(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        let offsets = layout.slot(slot);
        pokemon::set_species(&mut self.bytes, &offsets, species_id)?;
        self.bytes[layout.species_offset(slot)] = species_id as u8;
        Ok(())
    }

    pub fn set_pokemon_level(
        &mut self,
        storage: StorageId,
        slot: usize,
        level: u8,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_level(&mut self.bytes, &offsets, level)
    }

    pub fn set_pokemon_experience(
        &mut self,
        storage: StorageId,
        slot: usize,
        experience: u32,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_experience(&mut self.bytes, &offsets, experience)
    }

    pub fn set_pokemon_shiny(
        &mut self,
        storage: StorageId,
        slot: usize,
        shiny: bool,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_shiny(&mut self.bytes, &offsets, shiny)
    }

    pub fn set_pokemon_ivs(
        &mut self,
        storage: StorageId,
        slot: usize,
        ivs: &IndividualValues,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_individual_values(&mut self.bytes, &offsets, ivs)
    }

    pub fn set_pokemon_evs(
        &mut self,
        storage: StorageId,
        slot: usize,
        evs: &EffortValues,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_effort_values(&mut self.bytes, &offsets, evs)
    }

    pub fn set_pokemon_move(
        &mut self,
        storage: StorageId,
        slot: usize,
        index: usize,
        entry: &MoveSlot,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_move(&mut self.bytes, &offsets, index, entry)
    }

    pub fn set_pokemon_nickname(
        &mut self,
        storage: StorageId,
        slot: usize,
        nickname: &str,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_nickname(&mut self.bytes, &offsets, nickname);
        Ok(())
    }

    pub fn set_pokemon_trainer_name(
        &mut self,
        storage: StorageId,
        slot: usize,
        name: &str,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_trainer_name(&mut self.bytes, &offsets, name);
        Ok(())
    }

    pub fn set_pokemon_held_item(
        &mut self,
        storage: StorageId,
        slot: usize,
        item: Option<u16>,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_held_item(&mut self.bytes, &offsets, item)
    }

    pub fn set_pokemon_friendship(
        &mut self,
        storage: StorageId,
        slot: usize,
        friendship: u8,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_friendship(&mut self.bytes, &offsets, friendship);
        Ok(())
    }

    pub fn set_pokemon_pokerus(
        &mut self,
        storage: StorageId,
        slot: usize,
        pokerus: Option<Pokerus>,
    ) -> Result<(), CoreError> {
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_pokerus(&mut self.bytes, &offsets, pokerus);
        Ok(())
    }

    pub fn set_pokemon_caught(
        &mut self,
        storage: StorageId,
        slot: usize,
        caught: &CaughtData,
    ) -> Result<(), CoreError> {
        if self.version != GameVersion::Crystal {
            return Err(CoreError::unsupported_operation(
                "caught data exists only on Crystal",
            ));
        }
        let offsets = self.checked_slot(storage, slot)?;
        pokemon::set_caught(&mut self.bytes, &offsets, caught);
        Ok(())
    }

    // Inventories.

    pub fn inventory(&self, kind: InventoryKind) -> Result<InventorySnapshot, CoreError> {
        inventory::snapshot(&self.bytes, self.layout(), kind)
    }

    pub fn add_item(
        &mut self,
        kind: InventoryKind,
        id: u16,
        quantity: u8,
    ) -> Result<(), CoreError> {
        let layout = self.layout();
        inventory::add_item(&mut self.bytes, layout, kind, id, quantity)
    }

    pub fn remove_item(&mut self, kind: InventoryKind, index: usize) -> Result<(), CoreError> {
        let layout = self.layout();
        inventory::remove_item(&mut self.bytes, layout, kind, index)
    }

    pub fn set_items(&mut self, kind: InventoryKind, items: &[ItemSlot]) -> Result<(), CoreError> {
        let layout = self.layout();
        inventory::set_items(&mut self.bytes, layout, kind, items)
    }

    // Pokédex.

    pub fn is_owned(&self, species_id: u16) -> Result<bool, CoreError> {
        pokedex::is_owned(&self.bytes, self.layout(), species_id)
    }

    pub fn is_seen(&self, species_id: u16) -> Result<bool, CoreError> {
        pokedex::is_seen(&self.bytes, self.layout(), species_id)
    }

    pub fn set_owned(&mut self, species_id: u16, owned: bool) -> Result<(), CoreError> {
        let layout = self.layout();
        pokedex::set_owned(&mut self.bytes, layout, species_id, owned)
    }

    pub fn set_seen(&mut self, species_id: u16, seen: bool) -> Result<(), CoreError> {
        let layout = self.layout();
        pokedex::set_seen(&mut self.bytes, layout, species_id, seen)
    }

    pub fn owned_count(&self) -> usize {
        pokedex::owned_count(&self.bytes, self.layout())
    }

    pub fn seen_count(&self) -> usize {
        pokedex::seen_count(&self.bytes, self.layout())
    }

    // Export.

    /// Checksummed defensive copy. The live working copy of the
    /// current box is written back into its banked slot, the primary
    /// checksum is recomputed, and every mirror range is copied into
    /// the backup region before its checksum is stamped.
    pub fn export_to_bytes(&self) -> Vec<u8> {
        let layout = self.layout();
        let mut out = self.bytes.clone();

        let banked = storage::banked_box_base(self.current_box() as usize);
        out.copy_within(
            layout.current_box_data..layout.current_box_data + storage::BOX_SIZE,
            banked,
        );

        let sum = checksum(&out, layout.checksum_start, layout.checksum_end);
        buffer::write_u16_le(&mut out, layout.primary_checksum, sum);

        for &(start, end, destination) in layout.mirrors {
            out.copy_within(start..=end, destination);
        }
        buffer::write_u16_le(&mut out, layout.secondary_checksum, sum);
        out
    }
}

/// Additive 16-bit checksum over an inclusive byte range.
pub fn checksum(bytes: &[u8], start: usize, end: usize) -> u16 {
    bytes[start..=end]
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(b as u16))
}
