//! Gold/Silver/Crystal Pokémon record codec and mutators.
//!
//! The numeric struct is 0x20 bytes in a box and 0x30 in the party;
//! unlike the earlier games the level lives inside the box struct, so
//! the party only adds status and the live battle statistics. New
//! fields over Generation I: held item, friendship, Pokérus, and the
//! Crystal-only packed caught data.

use crate::buffer;
use crate::collection::{NAME_LENGTH, SlotOffsets};
use crate::core_api::{
    CaughtData, CoreError, EffortValues, IndividualValues, MoveSlot, Pokerus, PokemonSnapshot,
    StatisticValues, TimeOfDay,
};
use crate::gender::Gender;
use crate::items;
use crate::species;
use crate::stats;
use crate::text;
use crate::version::{GameVersion, Generation};

// Field offsets inside the numeric struct.
const SPECIES: usize = 0x00;
const HELD_ITEM: usize = 0x01;
const MOVES: usize = 0x02;
const TRAINER_ID: usize = 0x06;
const EXPERIENCE: usize = 0x08;
const EFFORT_VALUES: usize = 0x0B;
const INDIVIDUAL_VALUES: usize = 0x15;
const POWER_POINTS: usize = 0x17;
const FRIENDSHIP: usize = 0x1B;
const POKERUS: usize = 0x1C;
const CAUGHT_DATA: usize = 0x1D;
const LEVEL: usize = 0x1F;
// Party-only live fields.
const STATUS: usize = 0x20;
const CURRENT_HEALTH: usize = 0x22;
const PARTY_STATISTICS: usize = 0x24;

const NICKNAME_CHARS: usize = 10;
const BASE_FRIENDSHIP: u8 = 70;

pub fn species_id(bytes: &[u8], slot: &SlotOffsets) -> u16 {
    let raw = bytes[slot.data + SPECIES] as u16;
    if raw > species::GEN2_SPECIES_COUNT {
        tracing::warn!(raw, "species byte outside the national dex, reading as empty");
        return 0;
    }
    raw
}

pub fn read(bytes: &[u8], slot: &SlotOffsets, version: GameVersion) -> PokemonSnapshot {
    let species_id = species_id(bytes, slot);
    let experience = buffer::read_u24_be(bytes, slot.data + EXPERIENCE);
    let ivs = stats::unpack_ivs(buffer::read_u16_be(bytes, slot.data + INDIVIDUAL_VALUES));
    let evs = read_effort_values(bytes, slot.data + EFFORT_VALUES);
    let level = bytes[slot.data + LEVEL];

    let mut moves = [MoveSlot::default(); 4];
    for (index, entry) in moves.iter_mut().enumerate() {
        let pp = bytes[slot.data + POWER_POINTS + index];
        *entry = MoveSlot {
            id: bytes[slot.data + MOVES + index],
            power_points: pp & 0x3F,
            ups: pp >> 6,
        };
    }

    let statistics = species::base_statistics(species_id)
        .map(|base| stats::calculate_statistics(level, &base, &ivs, &evs))
        .unwrap_or_else(|_| StatisticValues::default());

    let held_item = match bytes[slot.data + HELD_ITEM] {
        0 => None,
        local => Some(items::local_to_universal(Generation::II, local)),
    };

    PokemonSnapshot {
        species_id,
        nickname: text::decode(&bytes[slot.nickname..slot.nickname + NAME_LENGTH], NAME_LENGTH),
        trainer_name: text::decode(
            &bytes[slot.trainer_name..slot.trainer_name + NAME_LENGTH],
            NAME_LENGTH,
        ),
        trainer_id: buffer::read_u16_be(bytes, slot.data + TRAINER_ID),
        level,
        experience,
        moves,
        shiny: stats::is_shiny(&ivs),
        nature_id: stats::nature_from_experience(experience),
        held_item,
        friendship: Some(bytes[slot.data + FRIENDSHIP]),
        pokerus: decode_pokerus(bytes[slot.data + POKERUS]),
        form_letter: (species_id == species::UNOWN).then(|| species::unown_letter(&ivs)),
        caught: (version == GameVersion::Crystal)
            .then(|| decode_caught(buffer::read_u16_be(bytes, slot.data + CAUGHT_DATA))),
        ivs,
        evs,
        statistics,
    }
}

/// Fully encodes a snapshot into the slot.
pub fn write(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    snapshot: &PokemonSnapshot,
    version: GameVersion,
) -> Result<(), CoreError> {
    check_species(snapshot.species_id)?;
    let rate = species::growth_rate(snapshot.species_id)?;
    let level = snapshot.level.clamp(stats::MIN_LEVEL, stats::MAX_LEVEL);
    let experience = stats::sanitize_experience_points(snapshot.experience, level, rate);
    let held_item = match snapshot.held_item {
        None => 0,
        Some(universal) => items::universal_to_local(Generation::II, universal)?,
    };

    bytes[slot.data + SPECIES] = snapshot.species_id as u8;
    bytes[slot.data + HELD_ITEM] = held_item;
    buffer::write_u16_be(bytes, slot.data + TRAINER_ID, snapshot.trainer_id);
    buffer::write_u24_be(bytes, slot.data + EXPERIENCE, experience);
    write_effort_values(bytes, slot.data + EFFORT_VALUES, &snapshot.evs);
    buffer::write_u16_be(
        bytes,
        slot.data + INDIVIDUAL_VALUES,
        stats::pack_ivs(&snapshot.ivs),
    );
    for (index, entry) in snapshot.moves.iter().enumerate() {
        bytes[slot.data + MOVES + index] = entry.id;
        bytes[slot.data + POWER_POINTS + index] = (entry.ups << 6) | (entry.power_points & 0x3F);
    }
    bytes[slot.data + FRIENDSHIP] = snapshot.friendship.unwrap_or(BASE_FRIENDSHIP);
    bytes[slot.data + POKERUS] = encode_pokerus(snapshot.pokerus);
    let caught = match (version, snapshot.caught) {
        (GameVersion::Crystal, Some(caught)) => encode_caught(&caught),
        _ => 0,
    };
    buffer::write_u16_be(bytes, slot.data + CAUGHT_DATA, caught);
    bytes[slot.data + LEVEL] = level;

    let statistics = refresh_statistics(bytes, slot, snapshot.species_id, level)?;
    if slot.in_party {
        bytes[slot.data + STATUS] = 0;
        buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);
    }

    write_name(bytes, slot.nickname, &snapshot.nickname);
    write_name(bytes, slot.trainer_name, &snapshot.trainer_name);
    Ok(())
}

pub fn set_species(bytes: &mut [u8], slot: &SlotOffsets, species_id: u16) -> Result<(), CoreError> {
    check_species(species_id)?;
    bytes[slot.data + SPECIES] = species_id as u8;
    if slot.in_party {
        bytes[slot.data + STATUS] = 0;
    }
    let level = bytes[slot.data + LEVEL];
    let statistics = refresh_statistics(bytes, slot, species_id, level)?;
    if slot.in_party {
        buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);
    }
    Ok(())
}

pub fn set_level(bytes: &mut [u8], slot: &SlotOffsets, level: u8) -> Result<(), CoreError> {
    let species_id = species_id(bytes, slot);
    let rate = species::growth_rate(species_id)?;
    let level = level.clamp(stats::MIN_LEVEL, stats::MAX_LEVEL);
    let experience = stats::sanitize_experience_points(
        buffer::read_u24_be(bytes, slot.data + EXPERIENCE),
        level,
        rate,
    );

    bytes[slot.data + LEVEL] = level;
    buffer::write_u24_be(bytes, slot.data + EXPERIENCE, experience);
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_experience(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    experience: u32,
) -> Result<(), CoreError> {
    let species_id = species_id(bytes, slot);
    let rate = species::growth_rate(species_id)?;
    let level = stats::level_for_experience(rate, experience);
    let experience = stats::sanitize_experience_points(experience, level, rate);

    bytes[slot.data + LEVEL] = level;
    buffer::write_u24_be(bytes, slot.data + EXPERIENCE, experience);
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_individual_values(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    ivs: &IndividualValues,
) -> Result<(), CoreError> {
    buffer::write_u16_be(bytes, slot.data + INDIVIDUAL_VALUES, stats::pack_ivs(ivs));
    let species_id = species_id(bytes, slot);
    let level = bytes[slot.data + LEVEL];
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_effort_values(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    evs: &EffortValues,
) -> Result<(), CoreError> {
    write_effort_values(bytes, slot.data + EFFORT_VALUES, evs);
    let species_id = species_id(bytes, slot);
    let level = bytes[slot.data + LEVEL];
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_shiny(bytes: &mut [u8], slot: &SlotOffsets, shiny: bool) -> Result<(), CoreError> {
    let mut ivs = stats::unpack_ivs(buffer::read_u16_be(bytes, slot.data + INDIVIDUAL_VALUES));
    stats::apply_shininess(&mut ivs, shiny);
    set_individual_values(bytes, slot, &ivs)
}

pub fn set_move(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    index: usize,
    entry: &MoveSlot,
) -> Result<(), CoreError> {
    if index > 3 {
        return Err(CoreError::invalid_input(format!(
            "move index {index} is out of range 0-3"
        )));
    }
    bytes[slot.data + MOVES + index] = entry.id;
    bytes[slot.data + POWER_POINTS + index] = (entry.ups << 6) | (entry.power_points & 0x3F);
    Ok(())
}

pub fn set_held_item(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    item: Option<u16>,
) -> Result<(), CoreError> {
    bytes[slot.data + HELD_ITEM] = match item {
        None => 0,
        Some(universal) => items::universal_to_local(Generation::II, universal)?,
    };
    Ok(())
}

pub fn set_friendship(bytes: &mut [u8], slot: &SlotOffsets, friendship: u8) {
    bytes[slot.data + FRIENDSHIP] = friendship;
}

pub fn set_pokerus(bytes: &mut [u8], slot: &SlotOffsets, pokerus: Option<Pokerus>) {
    bytes[slot.data + POKERUS] = encode_pokerus(pokerus);
}

pub fn set_caught(bytes: &mut [u8], slot: &SlotOffsets, caught: &CaughtData) {
    buffer::write_u16_be(bytes, slot.data + CAUGHT_DATA, encode_caught(caught));
}

pub fn set_nickname(bytes: &mut [u8], slot: &SlotOffsets, nickname: &str) {
    write_name(bytes, slot.nickname, nickname);
}

pub fn set_trainer_name(bytes: &mut [u8], slot: &SlotOffsets, name: &str) {
    write_name(bytes, slot.trainer_name, name);
}

/// Rebuilds the party live fields after a raw record lands in a slot.
pub fn refresh_after_import(bytes: &mut [u8], slot: &SlotOffsets) -> Result<(), CoreError> {
    let species_id = species_id(bytes, slot);
    let level = bytes[slot.data + LEVEL];
    let statistics = refresh_statistics(bytes, slot, species_id, level)?;
    if slot.in_party {
        bytes[slot.data + STATUS] = 0;
        buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);
    }
    Ok(())
}

fn check_species(species_id: u16) -> Result<(), CoreError> {
    if species_id == 0 || species_id > species::GEN2_SPECIES_COUNT {
        return Err(CoreError::invalid_input(format!(
            "species id {species_id} is outside 1-{}",
            species::GEN2_SPECIES_COUNT
        )));
    }
    Ok(())
}

/// Party slots store six live statistics; the special stat is written
/// to both the special-attack and special-defense words, since the
/// stat engine predates the split.
fn refresh_statistics(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    species_id: u16,
    level: u8,
) -> Result<StatisticValues, CoreError> {
    let base = species::base_statistics(species_id)?;
    let ivs = stats::unpack_ivs(buffer::read_u16_be(bytes, slot.data + INDIVIDUAL_VALUES));
    let evs = read_effort_values(bytes, slot.data + EFFORT_VALUES);
    let statistics = stats::calculate_statistics(level, &base, &ivs, &evs);

    if slot.in_party {
        let stats_base = slot.data + PARTY_STATISTICS;
        buffer::write_u16_be(bytes, stats_base, statistics.health);
        buffer::write_u16_be(bytes, stats_base + 2, statistics.attack);
        buffer::write_u16_be(bytes, stats_base + 4, statistics.defense);
        buffer::write_u16_be(bytes, stats_base + 6, statistics.speed);
        buffer::write_u16_be(bytes, stats_base + 8, statistics.special);
        buffer::write_u16_be(bytes, stats_base + 10, statistics.special);
    }
    Ok(statistics)
}

fn decode_pokerus(byte: u8) -> Option<Pokerus> {
    if byte == 0 {
        return None;
    }
    Some(Pokerus {
        strain: byte >> 4,
        days: byte & 0xF,
    })
}

/// The strain caps the valid day count at `strain % 4 + 1`; writes
/// clamp rather than reject.
fn encode_pokerus(pokerus: Option<Pokerus>) -> u8 {
    match pokerus {
        None => 0,
        Some(p) if p.strain == 0 => 0,
        Some(p) => {
            let days = p.days.min(p.strain % 4 + 1);
            (p.strain << 4) | days
        }
    }
}

// Caught data packs into one big-endian word: time of day in the top
// two bits, then the met level, the trainer gender bit, and a
// seven-bit location.
fn decode_caught(word: u16) -> CaughtData {
    CaughtData {
        time: TimeOfDay::from_raw(((word >> 14) & 0x3) as u8),
        level: ((word >> 8) & 0x3F) as u8,
        trainer_gender: if word & 0x80 != 0 {
            Gender::Female
        } else {
            Gender::Male
        },
        location: (word & 0x7F) as u8,
    }
}

fn encode_caught(caught: &CaughtData) -> u16 {
    ((caught.time.raw() as u16) << 14)
        | (((caught.level & 0x3F) as u16) << 8)
        | (((caught.trainer_gender == Gender::Female) as u16) << 7)
        | (caught.location & 0x7F) as u16
}

fn read_effort_values(bytes: &[u8], offset: usize) -> EffortValues {
    EffortValues {
        health: buffer::read_u16_be(bytes, offset),
        attack: buffer::read_u16_be(bytes, offset + 2),
        defense: buffer::read_u16_be(bytes, offset + 4),
        speed: buffer::read_u16_be(bytes, offset + 6),
        special: buffer::read_u16_be(bytes, offset + 8),
    }
}

fn write_effort_values(bytes: &mut [u8], offset: usize, evs: &EffortValues) {
    buffer::write_u16_be(bytes, offset, evs.health);
    buffer::write_u16_be(bytes, offset + 2, evs.attack);
    buffer::write_u16_be(bytes, offset + 4, evs.defense);
    buffer::write_u16_be(bytes, offset + 6, evs.speed);
    buffer::write_u16_be(bytes, offset + 8, evs.special);
}

fn write_name(bytes: &mut [u8], offset: usize, value: &str) {
    let encoded = text::encode(value, NAME_LENGTH, NICKNAME_CHARS, false);
    bytes[offset..offset + NAME_LENGTH].copy_from_slice(&encoded);
}
