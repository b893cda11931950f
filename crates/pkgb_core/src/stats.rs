//! Statistics and experience engine shared by both generations.
//!
//! Pure functions only; the byte codecs call in here whenever a
//! mutation needs dependent fields re-derived (level from experience,
//! live party statistics from base data).

use serde::{Deserialize, Serialize};

use crate::core_api::{EffortValues, IndividualValues, StatisticValues};

pub const MAX_LEVEL: u8 = 100;
pub const MIN_LEVEL: u8 = 1;

/// Experience-to-level curves used by Generations I and II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthRate {
    MediumFast,
    MediumSlow,
    Fast,
    Slow,
}

/// Base statistics for one species, as the stat formula consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStatistics {
    pub health: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special: u8,
}

/// Total experience required to be exactly at `level`.
pub fn experience_for_level(rate: GrowthRate, level: u8) -> u32 {
    let n = level.clamp(MIN_LEVEL, MAX_LEVEL) as i64;
    let points = match rate {
        GrowthRate::MediumFast => n * n * n,
        GrowthRate::Fast => 4 * n * n * n / 5,
        GrowthRate::Slow => 5 * n * n * n / 4,
        // Negative below level 4; the games store it clamped to zero.
        GrowthRate::MediumSlow => 6 * n * n * n / 5 - 15 * n * n + 100 * n - 140,
    };
    points.max(0) as u32
}

/// The level a creature with `experience` points sits at: the highest
/// level whose threshold does not exceed the input. Ascending scan,
/// at most 100 steps; not a hot path.
pub fn level_for_experience(rate: GrowthRate, experience: u32) -> u8 {
    for level in (MIN_LEVEL + 1)..=MAX_LEVEL {
        if experience_for_level(rate, level) > experience {
            return level - 1;
        }
    }
    MAX_LEVEL
}

/// Reconciles an experience total with a target level: at the level
/// cap the points clamp to the cap threshold, and points that imply a
/// different level are replaced by the exact threshold for `level`.
/// Invoked whenever either field is mutated so the pair never
/// disagrees.
pub fn sanitize_experience_points(points: u32, level: u8, rate: GrowthRate) -> u32 {
    if level >= MAX_LEVEL {
        return experience_for_level(rate, MAX_LEVEL);
    }
    if level_for_experience(rate, points) != level {
        return experience_for_level(rate, level);
    }
    points
}

/// The Generation I/II stat formula. Every stat is
/// `floor((2*(base+iv) + floor((min(255, sqrt(ev)) + 1) / 4)) * level / 100) + 5`,
/// with health additionally `+ level + 5`.
pub fn calculate_statistics(
    level: u8,
    base: &BaseStatistics,
    ivs: &IndividualValues,
    evs: &EffortValues,
) -> StatisticValues {
    let stat = |base: u8, iv: u8, ev: u16| -> u16 {
        let ev_bonus = (ev.isqrt().min(255) + 1) / 4;
        let core = (2 * (base as u32 + iv as u32) + ev_bonus as u32) * level as u32 / 100;
        (core + 5) as u16
    };

    StatisticValues {
        health: stat(base.health, ivs.health, evs.health) + level as u16 + 5,
        attack: stat(base.attack, ivs.attack, evs.attack),
        defense: stat(base.defense, ivs.defense, evs.defense),
        speed: stat(base.speed, ivs.speed, evs.speed),
        special: stat(base.special, ivs.special, evs.special),
    }
}

/// Nature is never stored in these generations; later games derive it
/// from the experience total modulo the 25 natures.
pub fn nature_from_experience(experience: u32) -> u8 {
    (experience % 25) as u8
}

/// Unpacks the two on-cartridge IV bytes. The health IV is not
/// stored: its bits are the low bit of each of the other four.
pub fn unpack_ivs(packed: u16) -> IndividualValues {
    let attack = ((packed >> 12) & 0xF) as u8;
    let defense = ((packed >> 8) & 0xF) as u8;
    let speed = ((packed >> 4) & 0xF) as u8;
    let special = (packed & 0xF) as u8;
    IndividualValues {
        health: ((attack & 1) << 3) | ((defense & 1) << 2) | ((speed & 1) << 1) | (special & 1),
        attack,
        defense,
        speed,
        special,
    }
}

pub fn pack_ivs(ivs: &IndividualValues) -> u16 {
    ((ivs.attack as u16 & 0xF) << 12)
        | ((ivs.defense as u16 & 0xF) << 8)
        | ((ivs.speed as u16 & 0xF) << 4)
        | (ivs.special as u16 & 0xF)
}

/// Shininess is not a stored flag: a creature is shiny exactly when
/// defense, speed, and special IVs are 10 and the attack IV has bit 1
/// set.
pub fn is_shiny(ivs: &IndividualValues) -> bool {
    ivs.defense == 10 && ivs.speed == 10 && ivs.special == 10 && ivs.attack & 0b0010 != 0
}

/// Force-overwrites the diagnostic IV fields to make the pattern
/// match (or stop matching). Turning shininess off only clears the
/// attack bit so the other IVs keep their values.
pub fn apply_shininess(ivs: &mut IndividualValues, shiny: bool) {
    if shiny {
        ivs.defense = 10;
        ivs.speed = 10;
        ivs.special = 10;
        ivs.attack |= 0b0010;
    } else {
        ivs.attack &= !0b0010;
    }
    let packed = pack_ivs(ivs);
    *ivs = unpack_ivs(packed);
}
