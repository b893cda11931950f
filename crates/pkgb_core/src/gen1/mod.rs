//! Red/Blue/Yellow save codec.
//!
//! The save is a 32 KiB SRAM image; everything this module touches
//! sits at fixed offsets inside it. Emulator dumps may carry a few
//! trailing real-time-clock bytes past 0x8000, which are preserved
//! untouched on export.

use crate::buffer;
use crate::collection;
use crate::core_api::{
    CoreError, CoreErrorCode, EffortValues, IndividualValues, InventoryKind, InventorySnapshot,
    ItemSlot, MoveSlot, Pokerus, PokemonSnapshot, StorageId, TrainerInfo,
};
use crate::gender::Gender;
use crate::species;
use crate::text;
use crate::version::GameVersion;

pub mod inventory;
pub mod pokedex;
pub mod pokemon;
pub mod storage;

pub const SAVE_LENGTH: usize = 0x8000;
pub const KNOWN_LENGTHS: [usize; 3] = [0x8000, 0x802C, 0x8030];

pub const TRAINER_NAME: usize = 0x2598;
pub const TRAINER_ID: usize = 0x2605;
pub const CHECKSUM: usize = 0x3523;
const CHECKSUM_START: usize = 0x2598;
const CHECKSUM_END: usize = 0x3522;

// Yellow is recognised by the starter byte holding Pikachu's
// internal index.
const STARTER: usize = 0x29C3;
const PIKACHU_INTERNAL: u8 = 0x54;

const TRAINER_NAME_CHARS: usize = 7;
const RECORD_LENGTH: usize =
    storage::BOX_STRUCT_LENGTH + 2 * storage::NAME_LENGTH;

#[derive(Debug)]
pub struct SaveData {
    bytes: Vec<u8>,
    version: GameVersion,
}

/// Structural sanity check: right length, and the bag and party lists
/// are well-formed (count within capacity, terminator where the count
/// says it should be).
pub fn detect(bytes: &[u8]) -> Option<GameVersion> {
    if !KNOWN_LENGTHS.contains(&bytes.len()) {
        return None;
    }
    let bag_count = bytes[inventory::BAG] as usize;
    if bag_count > inventory::BAG_CAPACITY
        || bytes[inventory::BAG + 1 + bag_count * 2] != collection::LIST_TERMINATOR
    {
        return None;
    }
    let party = storage::party_layout();
    let party_count = bytes[party.base] as usize;
    if party_count > storage::PARTY_CAPACITY
        || bytes[party.species_offset(party_count)] != collection::LIST_TERMINATOR
    {
        return None;
    }
    if bytes[STARTER] == PIKACHU_INTERNAL {
        Some(GameVersion::Yellow)
    } else {
        Some(GameVersion::RedBlue)
    }
}

impl SaveData {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CoreError> {
        match detect(&bytes) {
            Some(version) => Ok(Self { bytes, version }),
            None => Err(CoreError::new(
                CoreErrorCode::UnsupportedFormat,
                "not a recognisable Red/Blue/Yellow save",
            )),
        }
    }

    pub fn version(&self) -> GameVersion {
        self.version
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    // Trainer.

    pub fn trainer(&self) -> TrainerInfo {
        TrainerInfo {
            name: text::decode(
                &self.bytes[TRAINER_NAME..TRAINER_NAME + storage::NAME_LENGTH],
                storage::NAME_LENGTH,
            ),
            visible_id: buffer::read_u16_be(&self.bytes, TRAINER_ID),
            secret_id: 0,
            gender: Gender::Male,
        }
    }

    pub fn set_trainer_name(&mut self, name: &str) {
        let encoded = text::encode(name, storage::NAME_LENGTH, TRAINER_NAME_CHARS, true);
        self.bytes[TRAINER_NAME..TRAINER_NAME + storage::NAME_LENGTH].copy_from_slice(&encoded);
    }

    pub fn set_trainer_id(&mut self, id: u16) {
        buffer::write_u16_be(&mut self.bytes, TRAINER_ID, id);
    }

    pub fn set_trainer_gender(&mut self, _gender: Gender) -> Result<(), CoreError> {
        Err(CoreError::unsupported_operation(
            "trainer gender is fixed in this game",
        ))
    }

    // Storage.

    pub fn box_count(&self) -> usize {
        storage::BOX_COUNT
    }

    pub fn current_box(&self) -> u8 {
        self.bytes[storage::CURRENT_BOX_INDEX] & 0x7F
    }

    fn layout_for(&self, storage: StorageId) -> Result<collection::PokemonList, CoreError> {
        storage::layout_for(storage, self.current_box() as usize)
    }

    pub fn storage_capacity(&self, storage: StorageId) -> usize {
        match storage {
            StorageId::Party => storage::PARTY_CAPACITY,
            StorageId::Box(_) => storage::BOX_CAPACITY,
        }
    }

    pub fn storage_size(&self, storage: StorageId) -> Result<usize, CoreError> {
        Ok(self.layout_for(storage)?.size(&self.bytes))
    }

    pub fn pokemon(&self, storage: StorageId, slot: usize) -> Result<PokemonSnapshot, CoreError> {
        let layout = self.layout_for(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        Ok(pokemon::read(&self.bytes, &layout.slot(slot)))
    }

    /// Writes a snapshot into `slot`, appending when `slot` equals the
    /// current size.
    pub fn import_pokemon(
        &mut self,
        storage: StorageId,
        slot: usize,
        snapshot: &PokemonSnapshot,
    ) -> Result<(), CoreError> {
        let layout = self.layout_for(storage)?;
        let size = layout.size(&self.bytes);
        if slot > size || slot >= layout.capacity {
            return Err(CoreError::invalid_input(format!(
                "cannot import into slot {slot} of a storage holding {size}"
            )));
        }
        pokemon::write(&mut self.bytes, &layout.slot(slot), snapshot, self.version)?;
        self.bytes[layout.species_offset(slot)] = species::dex_to_internal(snapshot.species_id)?;
        if slot == size {
            layout.set_size(&mut self.bytes, size + 1);
        }
        Ok(())
    }

    pub fn delete_pokemon(&mut self, storage: StorageId, slot: usize) -> Result<(), CoreError> {
        let layout = self.layout_for(storage)?;
        layout.delete(&mut self.bytes, slot)
    }

    /// Moves one Pokémon by exporting its raw record, deleting the
    /// source slot, and importing at the destination (appending when
    /// the requested slot is past the end).
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

    /// One Pokémon's bytes: the box-sized numeric struct followed by
    /// the trainer name and nickname.
    pub fn export_record(&self, storage: StorageId, slot: usize) -> Result<Vec<u8>, CoreError> {
        let layout = self.layout_for(storage)?;
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
        let layout = self.layout_for(storage)?;
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
                &record[storage::BOX_STRUCT_LENGTH..storage::BOX_STRUCT_LENGTH + storage::NAME_LENGTH],
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
        let layout = self.layout_for(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        Ok(layout.slot(slot))
    }

    pub fn set_pokemon_species(
        &mut self,
        storage: StorageId,
        slot: usize,
        species_id: u16,
    ) -> Result<(), CoreError> {
        let layout = self.layout_for(storage)?;
        layout.check_slot(&self.bytes, slot)?;
        let offsets = layout.slot(slot);
        pokemon::set_species(&mut self.bytes, &offsets, species_id, self.version)?;
        self.bytes[layout.species_offset(slot)] = species::dex_to_internal(species_id)?;
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
        _storage: StorageId,
        _slot: usize,
        _item: Option<u16>,
    ) -> Result<(), CoreError> {
        Err(CoreError::unsupported_operation(
            "held items do not exist in this generation",
        ))
    }

    pub fn set_pokemon_friendship(
        &mut self,
        _storage: StorageId,
        _slot: usize,
        _friendship: u8,
    ) -> Result<(), CoreError> {
        Err(CoreError::unsupported_operation(
            "friendship does not exist in this generation",
        ))
    }

    pub fn set_pokemon_pokerus(
        &mut self,
        _storage: StorageId,
        _slot: usize,
        _pokerus: Option<Pokerus>,
    ) -> Result<(), CoreError> {
        Err(CoreError::unsupported_operation(
            "Pokérus does not exist in this generation",
        ))
    }

    // Inventories.

    pub fn inventory(&self, kind: InventoryKind) -> Result<InventorySnapshot, CoreError> {
        inventory::snapshot(&self.bytes, kind)
    }

    pub fn add_item(
        &mut self,
        kind: InventoryKind,
        id: u16,
        quantity: u8,
    ) -> Result<(), CoreError> {
        let list = inventory::list_for(kind)?;
        let mut items = list.read(&self.bytes, crate::version::Generation::I);
        collection::stack_item(&mut items, id, quantity, list.capacity, list.max_quantity)?;
        list.write(&mut self.bytes, crate::version::Generation::I, &items)
    }

    pub fn remove_item(&mut self, kind: InventoryKind, index: usize) -> Result<(), CoreError> {
        let list = inventory::list_for(kind)?;
        let mut items = list.read(&self.bytes, crate::version::Generation::I);
        collection::remove_slot(&mut items, index)?;
        list.write(&mut self.bytes, crate::version::Generation::I, &items)
    }

    pub fn set_items(&mut self, kind: InventoryKind, items: &[ItemSlot]) -> Result<(), CoreError> {
        inventory::write_items(&mut self.bytes, kind, items)
    }

    // Pokédex.

    pub fn is_owned(&self, species_id: u16) -> Result<bool, CoreError> {
        pokedex::is_owned(&self.bytes, species_id)
    }

    pub fn is_seen(&self, species_id: u16) -> Result<bool, CoreError> {
        pokedex::is_seen(&self.bytes, species_id)
    }

    pub fn set_owned(&mut self, species_id: u16, owned: bool) -> Result<(), CoreError> {
        pokedex::set_owned(&mut self.bytes, species_id, owned)
    }

    pub fn set_seen(&mut self, species_id: u16, seen: bool) -> Result<(), CoreError> {
        pokedex::set_seen(&mut self.bytes, species_id, seen)
    }

    pub fn owned_count(&self) -> usize {
        pokedex::owned_count(&self.bytes)
    }

    pub fn seen_count(&self) -> usize {
        pokedex::seen_count(&self.bytes)
    }

    // Export.

    /// Checksummed defensive copy; the live buffer is never touched,
    /// so the checksum only ever changes at export time.
    pub fn export_to_bytes(&self) -> Vec<u8> {
        let mut out = self.bytes.clone();
        out[CHECKSUM] = checksum(&out);
        out
    }
}

/// Additive 8-bit checksum over the main data region, bitwise
/// inverted.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes[CHECKSUM_START..=CHECKSUM_END]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    !sum
}
