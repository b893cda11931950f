//! Generation I Pokémon record codec and mutators.
//!
//! The numeric struct is 0x21 bytes in a box and 0x2C in the party
//! (the extra bytes are the live level and five battle statistics).
//! The two names are stored in parallel tables, so one full record is
//! three discontiguous ranges handled together through `SlotOffsets`.

use crate::buffer;
use crate::collection::{NAME_LENGTH, SlotOffsets};
use crate::core_api::{
    CoreError, EffortValues, IndividualValues, MoveSlot, PokemonSnapshot, StatisticValues,
};
use crate::species;
use crate::stats;
use crate::text;
use crate::version::GameVersion;

// Field offsets inside the numeric struct.
const SPECIES: usize = 0x00;
const CURRENT_HEALTH: usize = 0x01;
const BOX_LEVEL: usize = 0x03;
const STATUS: usize = 0x04;
const TYPE_ONE: usize = 0x05;
const TYPE_TWO: usize = 0x06;
const CATCH_RATE: usize = 0x07;
const MOVES: usize = 0x08;
const TRAINER_ID: usize = 0x0C;
const EXPERIENCE: usize = 0x0E;
const EFFORT_VALUES: usize = 0x11;
const INDIVIDUAL_VALUES: usize = 0x1B;
const POWER_POINTS: usize = 0x1D;
// Party-only live fields.
const PARTY_LEVEL: usize = 0x21;
const PARTY_STATISTICS: usize = 0x22;

const NICKNAME_CHARS: usize = 10;

fn level_offset(slot: &SlotOffsets) -> usize {
    if slot.in_party {
        slot.data + PARTY_LEVEL
    } else {
        slot.data + BOX_LEVEL
    }
}

pub fn species_internal(bytes: &[u8], slot: &SlotOffsets) -> u8 {
    bytes[slot.data + SPECIES]
}

pub fn read(bytes: &[u8], slot: &SlotOffsets) -> PokemonSnapshot {
    let internal = species_internal(bytes, slot);
    let species_id = if internal == 0 {
        0
    } else {
        species::internal_to_dex(internal)
    };

    let experience = buffer::read_u24_be(bytes, slot.data + EXPERIENCE);
    let ivs = stats::unpack_ivs(buffer::read_u16_be(bytes, slot.data + INDIVIDUAL_VALUES));
    let evs = read_effort_values(bytes, slot.data + EFFORT_VALUES);
    let level = bytes[level_offset(slot)];

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
        ivs,
        evs,
        statistics,
        held_item: None,
        friendship: None,
        pokerus: None,
        form_letter: None,
        caught: None,
    }
}

/// Fully encodes a snapshot into the slot, deriving every dependent
/// field (types, catch rate, live statistics) from scratch.
pub fn write(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    snapshot: &PokemonSnapshot,
    version: GameVersion,
) -> Result<(), CoreError> {
    let internal = species::dex_to_internal(snapshot.species_id)?;
    let (type_one, type_two) = species::type_ids(snapshot.species_id)?;
    let catch_rate = species::catch_rate(snapshot.species_id, version)?;
    let rate = species::growth_rate(snapshot.species_id)?;

    let level = snapshot.level.clamp(stats::MIN_LEVEL, stats::MAX_LEVEL);
    let experience = stats::sanitize_experience_points(snapshot.experience, level, rate);

    bytes[slot.data + SPECIES] = internal;
    bytes[slot.data + BOX_LEVEL] = level;
    bytes[slot.data + STATUS] = 0;
    bytes[slot.data + TYPE_ONE] = type_one;
    bytes[slot.data + TYPE_TWO] = type_two;
    bytes[slot.data + CATCH_RATE] = catch_rate;
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

    let statistics = refresh_statistics(bytes, slot, snapshot.species_id, level)?;
    buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);

    write_name(bytes, slot.nickname, &snapshot.nickname);
    write_name(bytes, slot.trainer_name, &snapshot.trainer_name);
    Ok(())
}

pub fn set_species(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    species_id: u16,
    version: GameVersion,
) -> Result<(), CoreError> {
    let internal = species::dex_to_internal(species_id)?;
    let previous = species::internal_to_dex(species_internal(bytes, slot));
    let (type_one, type_two) = species::type_ids(species_id)?;

    bytes[slot.data + SPECIES] = internal;
    bytes[slot.data + TYPE_ONE] = type_one;
    bytes[slot.data + TYPE_TWO] = type_two;
    bytes[slot.data + STATUS] = 0;
    // Evolving keeps the original catch rate; any other species change
    // takes the new species' value.
    if !species::same_evolution_family(previous, species_id) {
        bytes[slot.data + CATCH_RATE] = species::catch_rate(species_id, version)?;
    }

    let level = bytes[level_offset(slot)];
    let statistics = refresh_statistics(bytes, slot, species_id, level)?;
    buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);
    Ok(())
}

pub fn set_level(bytes: &mut [u8], slot: &SlotOffsets, level: u8) -> Result<(), CoreError> {
    let species_id = species::internal_to_dex(species_internal(bytes, slot));
    let rate = species::growth_rate(species_id)?;
    let level = level.clamp(stats::MIN_LEVEL, stats::MAX_LEVEL);
    let experience = stats::sanitize_experience_points(
        buffer::read_u24_be(bytes, slot.data + EXPERIENCE),
        level,
        rate,
    );

    bytes[slot.data + BOX_LEVEL] = level;
    buffer::write_u24_be(bytes, slot.data + EXPERIENCE, experience);
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_experience(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    experience: u32,
) -> Result<(), CoreError> {
    let species_id = species::internal_to_dex(species_internal(bytes, slot));
    let rate = species::growth_rate(species_id)?;
    let level = stats::level_for_experience(rate, experience);
    let experience = stats::sanitize_experience_points(experience, level, rate);

    bytes[slot.data + BOX_LEVEL] = level;
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
    let species_id = species::internal_to_dex(species_internal(bytes, slot));
    let level = bytes[level_offset(slot)];
    refresh_statistics(bytes, slot, species_id, level)?;
    Ok(())
}

pub fn set_effort_values(
    bytes: &mut [u8],
    slot: &SlotOffsets,
    evs: &EffortValues,
) -> Result<(), CoreError> {
    write_effort_values(bytes, slot.data + EFFORT_VALUES, evs);
    let species_id = species::internal_to_dex(species_internal(bytes, slot));
    let level = bytes[level_offset(slot)];
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

pub fn set_nickname(bytes: &mut [u8], slot: &SlotOffsets, nickname: &str) {
    write_name(bytes, slot.nickname, nickname);
}

pub fn set_trainer_name(bytes: &mut [u8], slot: &SlotOffsets, name: &str) {
    write_name(bytes, slot.trainer_name, name);
}

/// Rebuilds the derived fields after a raw record lands in a slot.
/// A record carries only the box-sized struct, so a party destination
/// needs its live level and statistics regenerated, and every
/// destination gets its current health topped up to the maximum.
pub fn refresh_after_import(bytes: &mut [u8], slot: &SlotOffsets) -> Result<(), CoreError> {
    let species_id = species::internal_to_dex(species_internal(bytes, slot));
    let level = bytes[slot.data + BOX_LEVEL];
    if slot.in_party {
        bytes[slot.data + PARTY_LEVEL] = level;
    }
    let statistics = refresh_statistics(bytes, slot, species_id, level)?;
    buffer::write_u16_be(bytes, slot.data + CURRENT_HEALTH, statistics.health);
    Ok(())
}

/// Recomputes derived statistics after a mutation. Party slots carry
/// live battle statistics that must track the stored fields; box
/// slots store none, so only the computed values are returned.
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
        bytes[slot.data + PARTY_LEVEL] = level;
        let stats_base = slot.data + PARTY_STATISTICS;
        buffer::write_u16_be(bytes, stats_base, statistics.health);
        buffer::write_u16_be(bytes, stats_base + 2, statistics.attack);
        buffer::write_u16_be(bytes, stats_base + 4, statistics.defense);
        buffer::write_u16_be(bytes, stats_base + 6, statistics.speed);
        buffer::write_u16_be(bytes, stats_base + 8, statistics.special);
    }
    Ok(statistics)
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
    let encoded = text::encode(value, NAME_LENGTH, NICKNAME_CHARS, true);
    bytes[offset..offset + NAME_LENGTH].copy_from_slice(&encoded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GrowthRate;

    fn empty_slot() -> (Vec<u8>, SlotOffsets) {
        let bytes = vec![0u8; 0x100];
        let slot = SlotOffsets {
            data: 0x00,
            trainer_name: 0x50,
            nickname: 0x60,
            in_party: true,
        };
        (bytes, slot)
    }

    fn bulbasaur(bytes: &mut [u8], slot: &SlotOffsets) {
        let snapshot = PokemonSnapshot {
            species_id: 1,
            nickname: "BULBASAUR".to_string(),
            trainer_name: "RED".to_string(),
            trainer_id: 12345,
            level: 5,
            experience: 125,
            moves: [
                MoveSlot { id: 33, power_points: 35, ups: 0 },
                MoveSlot { id: 45, power_points: 40, ups: 0 },
                MoveSlot::default(),
                MoveSlot::default(),
            ],
            ivs: IndividualValues::default(),
            evs: EffortValues::default(),
            statistics: StatisticValues::default(),
            shiny: false,
            nature_id: 0,
            held_item: None,
            friendship: None,
            pokerus: None,
            form_letter: None,
            caught: None,
        };
        write(bytes, slot, &snapshot, GameVersion::RedBlue).unwrap();
    }

    #[test]
    fn write_then_read_round_trips() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);

        // Bulbasaur's internal index, not its dex number.
        assert_eq!(bytes[slot.data + SPECIES], 0x99);
        let snapshot = read(&bytes, &slot);
        assert_eq!(snapshot.species_id, 1);
        assert_eq!(snapshot.nickname, "BULBASAUR");
        assert_eq!(snapshot.trainer_id, 12345);
        assert_eq!(snapshot.level, 5);
        assert_eq!(snapshot.experience, 125);
        assert_eq!(snapshot.moves[1].id, 45);
        assert_eq!(snapshot.moves[1].power_points, 40);
        assert!(snapshot.held_item.is_none());
    }

    #[test]
    fn level_and_experience_reconcile_both_ways() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);

        set_level(&mut bytes, &slot, 10).unwrap();
        let snapshot = read(&bytes, &slot);
        assert_eq!(snapshot.level, 10);
        // Bulbasaur is medium-slow.
        assert_eq!(
            snapshot.experience,
            stats::experience_for_level(GrowthRate::MediumSlow, 10)
        );

        let threshold = stats::experience_for_level(GrowthRate::MediumSlow, 50);
        set_experience(&mut bytes, &slot, threshold + 3).unwrap();
        let snapshot = read(&bytes, &slot);
        assert_eq!(snapshot.level, 50);
        assert_eq!(snapshot.experience, threshold + 3);
    }

    #[test]
    fn species_change_outside_the_family_resets_catch_rate() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);
        let original = bytes[slot.data + CATCH_RATE];

        // Bulbasaur to Ivysaur is an evolution: rate untouched.
        set_species(&mut bytes, &slot, 2, GameVersion::RedBlue).unwrap();
        assert_eq!(bytes[slot.data + CATCH_RATE], original);

        // Bulbasaur line to Mewtwo is not.
        set_species(&mut bytes, &slot, 150, GameVersion::RedBlue).unwrap();
        assert_eq!(
            bytes[slot.data + CATCH_RATE],
            species::catch_rate(150, GameVersion::RedBlue).unwrap()
        );
        let snapshot = read(&bytes, &slot);
        assert_eq!(snapshot.species_id, 150);
    }

    #[test]
    fn party_statistics_track_mutations() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);

        set_level(&mut bytes, &slot, 50).unwrap();
        let base = species::base_statistics(1).unwrap();
        let expected = stats::calculate_statistics(
            50,
            &base,
            &IndividualValues::default(),
            &EffortValues::default(),
        );
        assert_eq!(bytes[slot.data + PARTY_LEVEL], 50);
        assert_eq!(
            buffer::read_u16_be(&bytes, slot.data + PARTY_STATISTICS),
            expected.health
        );
        assert_eq!(
            buffer::read_u16_be(&bytes, slot.data + PARTY_STATISTICS + 8),
            expected.special
        );
    }

    #[test]
    fn shininess_rewrites_the_stored_ivs() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);

        set_shiny(&mut bytes, &slot, true).unwrap();
        let snapshot = read(&bytes, &slot);
        assert!(snapshot.shiny);
        assert_eq!(snapshot.ivs.defense, 10);

        set_shiny(&mut bytes, &slot, false).unwrap();
        assert!(!read(&bytes, &slot).shiny);
    }

    #[test]
    fn move_index_is_bounded() {
        let (mut bytes, slot) = empty_slot();
        bulbasaur(&mut bytes, &slot);
        let entry = MoveSlot { id: 1, power_points: 10, ups: 2 };
        assert!(set_move(&mut bytes, &slot, 4, &entry).is_err());
        set_move(&mut bytes, &slot, 3, &entry).unwrap();
        let snapshot = read(&bytes, &slot);
        assert_eq!(snapshot.moves[3].ups, 2);
        assert_eq!(snapshot.moves[3].power_points, 10);
    }
}
