use crate::gen1;
use crate::gen2;
use crate::gender::Gender;
use crate::version::{GameVersion, Generation};

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    Capabilities, CapabilityIssue, CaughtData, EffortValues, IndividualValues, InventoryKind,
    InventorySnapshot, ItemSlot, MoveSlot, Pokerus, PokemonSnapshot, Snapshot, StatisticValues,
    StorageId, TrainerInfo,
};

const RAW_SAVE_LENGTH: usize = 0x8000;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug)]
enum LoadedSave {
    Gen1(Box<gen1::SaveData>),
    Gen2(Box<gen2::SaveData>),
}

#[derive(Debug)]
pub struct Session {
    version: GameVersion,
    snapshot: Snapshot,
    capabilities: Capabilities,
    save: LoadedSave,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Tries each generation's detector in order and wraps the first
    /// structurally-valid match. An unrecognised buffer is the one
    /// expected failure and comes back as `UnsupportedFormat`.
    pub fn open_bytes<B: Into<Vec<u8>>>(
        &self,
        bytes: B,
        hint: Option<Generation>,
    ) -> Result<Session, CoreError> {
        let bytes = bytes.into();

        match hint {
            Some(Generation::I) => gen1::SaveData::from_bytes(bytes).map(session_from_gen1),
            Some(Generation::II) => gen2::SaveData::from_bytes(bytes).map(session_from_gen2),
            None => {
                if gen1::detect(&bytes).is_some() {
                    return gen1::SaveData::from_bytes(bytes).map(session_from_gen1);
                }
                if gen2::detect(&bytes).is_some() {
                    return gen2::SaveData::from_bytes(bytes).map(session_from_gen2);
                }
                Err(CoreError::new(
                    CoreErrorCode::UnsupportedFormat,
                    "input matched no known Game Boy save layout",
                ))
            }
        }
    }
}

/// A validly-initialised empty record for hosts to edit before any
/// species has been chosen. Everything meaningful is zero; the
/// generation decides which optional fields exist at all.
pub fn template(version: GameVersion) -> PokemonSnapshot {
    let second_generation = version.generation() == Generation::II;
    PokemonSnapshot {
        species_id: 0,
        nickname: String::new(),
        trainer_name: String::new(),
        trainer_id: 0,
        level: 1,
        experience: 0,
        moves: [MoveSlot::default(); 4],
        ivs: IndividualValues::default(),
        evs: EffortValues::default(),
        statistics: StatisticValues::default(),
        shiny: false,
        nature_id: 0,
        held_item: None,
        friendship: second_generation.then_some(0),
        pokerus: None,
        form_letter: None,
        caught: None,
    }
}

impl Session {
    pub fn version(&self) -> GameVersion {
        self.version
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot = match &self.save {
            LoadedSave::Gen1(save) => snapshot_of_gen1(save),
            LoadedSave::Gen2(save) => snapshot_of_gen2(save),
        };
    }

    // Trainer.

    pub fn trainer(&self) -> TrainerInfo {
        match &self.save {
            LoadedSave::Gen1(save) => save.trainer(),
            LoadedSave::Gen2(save) => save.trainer(),
        }
    }

    pub fn set_trainer_name(&mut self, name: &str) {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_trainer_name(name),
            LoadedSave::Gen2(save) => save.set_trainer_name(name),
        }
        self.snapshot.trainer = self.trainer();
    }

    pub fn set_trainer_id(&mut self, id: u16) {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_trainer_id(id),
            LoadedSave::Gen2(save) => save.set_trainer_id(id),
        }
        self.snapshot.trainer.visible_id = id;
    }

    pub fn set_trainer_gender(&mut self, gender: Gender) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_trainer_gender(gender),
            LoadedSave::Gen2(save) => save.set_trainer_gender(gender),
        }?;
        self.snapshot.trainer.gender = gender;
        Ok(())
    }

    // Storage.

    pub fn box_count(&self) -> usize {
        match &self.save {
            LoadedSave::Gen1(save) => save.box_count(),
            LoadedSave::Gen2(save) => save.box_count(),
        }
    }

    pub fn current_box(&self) -> u8 {
        match &self.save {
            LoadedSave::Gen1(save) => save.current_box(),
            LoadedSave::Gen2(save) => save.current_box(),
        }
    }

    pub fn storage_capacity(&self, storage: StorageId) -> usize {
        match &self.save {
            LoadedSave::Gen1(save) => save.storage_capacity(storage),
            LoadedSave::Gen2(save) => save.storage_capacity(storage),
        }
    }

    pub fn storage_size(&self, storage: StorageId) -> Result<usize, CoreError> {
        match &self.save {
            LoadedSave::Gen1(save) => save.storage_size(storage),
            LoadedSave::Gen2(save) => save.storage_size(storage),
        }
    }

    pub fn pokemon(&self, storage: StorageId, slot: usize) -> Result<PokemonSnapshot, CoreError> {
        match &self.save {
            LoadedSave::Gen1(save) => save.pokemon(storage, slot),
            LoadedSave::Gen2(save) => save.pokemon(storage, slot),
        }
    }

    pub fn party(&self) -> Result<Vec<PokemonSnapshot>, CoreError> {
        self.storage_contents(StorageId::Party)
    }

    pub fn storage_contents(&self, storage: StorageId) -> Result<Vec<PokemonSnapshot>, CoreError> {
        (0..self.storage_size(storage)?)
            .map(|slot| self.pokemon(storage, slot))
            .collect()
    }

    pub fn import_pokemon(
        &mut self,
        storage: StorageId,
        slot: usize,
        snapshot: &PokemonSnapshot,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.import_pokemon(storage, slot, snapshot),
            LoadedSave::Gen2(save) => save.import_pokemon(storage, slot, snapshot),
        }?;
        self.refresh_snapshot();
        Ok(())
    }

    pub fn delete_pokemon(&mut self, storage: StorageId, slot: usize) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.delete_pokemon(storage, slot),
            LoadedSave::Gen2(save) => save.delete_pokemon(storage, slot),
        }?;
        self.refresh_snapshot();
        Ok(())
    }

    pub fn move_pokemon(
        &mut self,
        from: StorageId,
        from_slot: usize,
        to: StorageId,
        to_slot: usize,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.move_pokemon(from, from_slot, to, to_slot),
            LoadedSave::Gen2(save) => save.move_pokemon(from, from_slot, to, to_slot),
        }?;
        self.refresh_snapshot();
        Ok(())
    }

    pub fn set_pokemon_species(
        &mut self,
        storage: StorageId,
        slot: usize,
        species_id: u16,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_species(storage, slot, species_id),
            LoadedSave::Gen2(save) => save.set_pokemon_species(storage, slot, species_id),
        }
    }

    pub fn set_pokemon_level(
        &mut self,
        storage: StorageId,
        slot: usize,
        level: u8,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_level(storage, slot, level),
            LoadedSave::Gen2(save) => save.set_pokemon_level(storage, slot, level),
        }
    }

    pub fn set_pokemon_experience(
        &mut self,
        storage: StorageId,
        slot: usize,
        experience: u32,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_experience(storage, slot, experience),
            LoadedSave::Gen2(save) => save.set_pokemon_experience(storage, slot, experience),
        }
    }

    pub fn set_pokemon_shiny(
        &mut self,
        storage: StorageId,
        slot: usize,
        shiny: bool,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_shiny(storage, slot, shiny),
            LoadedSave::Gen2(save) => save.set_pokemon_shiny(storage, slot, shiny),
        }
    }

    pub fn set_pokemon_ivs(
        &mut self,
        storage: StorageId,
        slot: usize,
        ivs: &IndividualValues,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_ivs(storage, slot, ivs),
            LoadedSave::Gen2(save) => save.set_pokemon_ivs(storage, slot, ivs),
        }
    }

    pub fn set_pokemon_evs(
        &mut self,
        storage: StorageId,
        slot: usize,
        evs: &EffortValues,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_evs(storage, slot, evs),
            LoadedSave::Gen2(save) => save.set_pokemon_evs(storage, slot, evs),
        }
    }

    pub fn set_pokemon_move(
        &mut self,
        storage: StorageId,
        slot: usize,
        index: usize,
        entry: &MoveSlot,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_move(storage, slot, index, entry),
            LoadedSave::Gen2(save) => save.set_pokemon_move(storage, slot, index, entry),
        }
    }

    pub fn set_pokemon_nickname(
        &mut self,
        storage: StorageId,
        slot: usize,
        nickname: &str,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_nickname(storage, slot, nickname),
            LoadedSave::Gen2(save) => save.set_pokemon_nickname(storage, slot, nickname),
        }
    }

    pub fn set_pokemon_trainer_name(
        &mut self,
        storage: StorageId,
        slot: usize,
        name: &str,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_trainer_name(storage, slot, name),
            LoadedSave::Gen2(save) => save.set_pokemon_trainer_name(storage, slot, name),
        }
    }

    pub fn set_pokemon_held_item(
        &mut self,
        storage: StorageId,
        slot: usize,
        item: Option<u16>,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_held_item(storage, slot, item),
            LoadedSave::Gen2(save) => save.set_pokemon_held_item(storage, slot, item),
        }
    }

    pub fn set_pokemon_friendship(
        &mut self,
        storage: StorageId,
        slot: usize,
        friendship: u8,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_friendship(storage, slot, friendship),
            LoadedSave::Gen2(save) => save.set_pokemon_friendship(storage, slot, friendship),
        }
    }

    pub fn set_pokemon_pokerus(
        &mut self,
        storage: StorageId,
        slot: usize,
        pokerus: Option<Pokerus>,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_pokemon_pokerus(storage, slot, pokerus),
            LoadedSave::Gen2(save) => save.set_pokemon_pokerus(storage, slot, pokerus),
        }
    }

    pub fn set_pokemon_caught(
        &mut self,
        storage: StorageId,
        slot: usize,
        caught: &CaughtData,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(_) => Err(CoreError::unsupported_operation(
                "caught data exists only on Crystal",
            )),
            LoadedSave::Gen2(save) => save.set_pokemon_caught(storage, slot, caught),
        }
    }

    // Inventories.

    pub fn inventory(&self, kind: InventoryKind) -> Result<InventorySnapshot, CoreError> {
        match &self.save {
            LoadedSave::Gen1(save) => save.inventory(kind),
            LoadedSave::Gen2(save) => save.inventory(kind),
        }
    }

    pub fn add_item(
        &mut self,
        kind: InventoryKind,
        id: u16,
        quantity: u8,
    ) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.add_item(kind, id, quantity),
            LoadedSave::Gen2(save) => save.add_item(kind, id, quantity),
        }
    }

    pub fn remove_item(&mut self, kind: InventoryKind, index: usize) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.remove_item(kind, index),
            LoadedSave::Gen2(save) => save.remove_item(kind, index),
        }
    }

    pub fn set_items(&mut self, kind: InventoryKind, items: &[ItemSlot]) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_items(kind, items),
            LoadedSave::Gen2(save) => save.set_items(kind, items),
        }
    }

    // Pokédex.

    pub fn is_owned(&self, species_id: u16) -> Result<bool, CoreError> {
        match &self.save {
            LoadedSave::Gen1(save) => save.is_owned(species_id),
            LoadedSave::Gen2(save) => save.is_owned(species_id),
        }
    }

    pub fn is_seen(&self, species_id: u16) -> Result<bool, CoreError> {
        match &self.save {
            LoadedSave::Gen1(save) => save.is_seen(species_id),
            LoadedSave::Gen2(save) => save.is_seen(species_id),
        }
    }

    pub fn set_owned(&mut self, species_id: u16, owned: bool) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_owned(species_id, owned),
            LoadedSave::Gen2(save) => save.set_owned(species_id, owned),
        }?;
        self.snapshot.owned_count = self.owned_count();
        Ok(())
    }

    pub fn set_seen(&mut self, species_id: u16, seen: bool) -> Result<(), CoreError> {
        match &mut self.save {
            LoadedSave::Gen1(save) => save.set_seen(species_id, seen),
            LoadedSave::Gen2(save) => save.set_seen(species_id, seen),
        }?;
        self.snapshot.seen_count = self.seen_count();
        Ok(())
    }

    pub fn owned_count(&self) -> usize {
        match &self.save {
            LoadedSave::Gen1(save) => save.owned_count(),
            LoadedSave::Gen2(save) => save.owned_count(),
        }
    }

    pub fn seen_count(&self) -> usize {
        match &self.save {
            LoadedSave::Gen1(save) => save.seen_count(),
            LoadedSave::Gen2(save) => save.seen_count(),
        }
    }

    // Export.

    pub fn export_to_bytes(&self) -> Vec<u8> {
        match &self.save {
            LoadedSave::Gen1(save) => save.export_to_bytes(),
            LoadedSave::Gen2(save) => save.export_to_bytes(),
        }
    }
}

fn capabilities_for(length: usize) -> Capabilities {
    let mut issues = Vec::new();
    if length > RAW_SAVE_LENGTH {
        issues.push(CapabilityIssue::TrailingDataPreserved);
    }
    Capabilities::editable(issues)
}

fn snapshot_of_gen1(save: &gen1::SaveData) -> Snapshot {
    Snapshot {
        version: save.version(),
        trainer: save.trainer(),
        party_size: save
            .storage_size(StorageId::Party)
            .unwrap_or_default(),
        box_count: save.box_count(),
        current_box: save.current_box(),
        owned_count: save.owned_count(),
        seen_count: save.seen_count(),
    }
}

fn snapshot_of_gen2(save: &gen2::SaveData) -> Snapshot {
    Snapshot {
        version: save.version(),
        trainer: save.trainer(),
        party_size: save
            .storage_size(StorageId::Party)
            .unwrap_or_default(),
        box_count: save.box_count(),
        current_box: save.current_box(),
        owned_count: save.owned_count(),
        seen_count: save.seen_count(),
    }
}

fn session_from_gen1(save: gen1::SaveData) -> Session {
    Session {
        version: save.version(),
        snapshot: snapshot_of_gen1(&save),
        capabilities: capabilities_for(save.bytes().len()),
        save: LoadedSave::Gen1(Box::new(save)),
    }
}

fn session_from_gen2(save: gen2::SaveData) -> Session {
    Session {
        version: save.version(),
        snapshot: snapshot_of_gen2(&save),
        capabilities: capabilities_for(save.bytes().len()),
        save: LoadedSave::Gen2(Box::new(save)),
    }
}
