//! Generation I Pokédex flags: two 19-byte bitsets indexed by
//! `species_id - 1`.

use crate::buffer;
use crate::core_api::CoreError;
use crate::species::GEN1_SPECIES_COUNT;

pub const OWNED: usize = 0x25A3;
pub const SEEN: usize = 0x25B6;

fn flag_position(base: usize, species_id: u16) -> Result<(usize, u8), CoreError> {
    if species_id == 0 || species_id > GEN1_SPECIES_COUNT {
        return Err(CoreError::invalid_input(format!(
            "species id {species_id} is outside 1-{GEN1_SPECIES_COUNT}"
        )));
    }
    let index = (species_id - 1) as usize;
    Ok((base + index / 8, (index % 8) as u8))
}

pub fn is_owned(bytes: &[u8], species_id: u16) -> Result<bool, CoreError> {
    let (offset, bit) = flag_position(OWNED, species_id)?;
    Ok(buffer::get_flag(bytes, offset, bit))
}

pub fn is_seen(bytes: &[u8], species_id: u16) -> Result<bool, CoreError> {
    let (offset, bit) = flag_position(SEEN, species_id)?;
    Ok(buffer::get_flag(bytes, offset, bit))
}

pub fn set_owned(bytes: &mut [u8], species_id: u16, owned: bool) -> Result<(), CoreError> {
    let (offset, bit) = flag_position(OWNED, species_id)?;
    buffer::set_flag(bytes, offset, bit, owned);
    Ok(())
}

pub fn set_seen(bytes: &mut [u8], species_id: u16, seen: bool) -> Result<(), CoreError> {
    let (offset, bit) = flag_position(SEEN, species_id)?;
    buffer::set_flag(bytes, offset, bit, seen);
    Ok(())
}

pub fn owned_count(bytes: &[u8]) -> usize {
    count_flags(bytes, OWNED)
}

pub fn seen_count(bytes: &[u8]) -> usize {
    count_flags(bytes, SEEN)
}

fn count_flags(bytes: &[u8], base: usize) -> usize {
    (1..=GEN1_SPECIES_COUNT)
        .filter(|&species| {
            let index = (species - 1) as usize;
            buffer::get_flag(bytes, base + index / 8, (index % 8) as u8)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_indexed_from_species_one() {
        let mut bytes = vec![0u8; 0x8000];
        set_owned(&mut bytes, 1, true).unwrap();
        set_seen(&mut bytes, 151, true).unwrap();

        assert_eq!(bytes[OWNED], 0b0000_0001);
        assert_eq!(bytes[SEEN + 18], 0b0100_0000);
        assert!(is_owned(&bytes, 1).unwrap());
        assert!(!is_owned(&bytes, 2).unwrap());
        assert!(is_seen(&bytes, 151).unwrap());
        assert_eq!(owned_count(&bytes), 1);
        assert_eq!(seen_count(&bytes), 1);

        set_owned(&mut bytes, 1, false).unwrap();
        assert_eq!(owned_count(&bytes), 0);
    }

    #[test]
    fn species_zero_and_overrange_are_rejected() {
        let bytes = vec![0u8; 0x8000];
        assert!(is_owned(&bytes, 0).is_err());
        assert!(is_seen(&bytes, 152).is_err());
    }
}
