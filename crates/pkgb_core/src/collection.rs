//! Count-prefixed dense list codecs.
//!
//! Both generations store their variable-length lists the same way: a
//! count byte, `count` live entries packed from the front, and a 0xFF
//! terminator immediately after the last entry. Deleting from the
//! middle shifts the tail up so the list never grows holes.

use crate::core_api::{CoreError, ItemSlot};
use crate::items;
use crate::version::Generation;

pub const LIST_TERMINATOR: u8 = 0xFF;

/// Layout of one item pocket: a count byte at `offset` followed by
/// two-byte entries. Generation I stores `[id, quantity]`, Generation
/// II `[quantity, id]`.
#[derive(Debug, Clone, Copy)]
pub struct ItemList {
    pub offset: usize,
    pub capacity: usize,
    pub quantity_first: bool,
    pub max_quantity: u8,
}

impl ItemList {
    /// Decodes the pocket into universal item ids. A stored count
    /// larger than the capacity is treated as corrupt and clamped.
    /// Local ids outside the translation tables come back as the
    /// sentinel id 0 so the slot count stays faithful to the file.
    pub fn read(&self, bytes: &[u8], generation: Generation) -> Vec<ItemSlot> {
        let mut count = bytes[self.offset] as usize;
        if count > self.capacity {
            tracing::warn!(
                count,
                capacity = self.capacity,
                "item list count exceeds pocket capacity, clamping"
            );
            count = self.capacity;
        }
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let entry = self.offset + 1 + index * 2;
            let (local, quantity) = if self.quantity_first {
                (bytes[entry + 1], bytes[entry])
            } else {
                (bytes[entry], bytes[entry + 1])
            };
            items.push(ItemSlot {
                id: items::local_to_universal(generation, local),
                quantity,
            });
        }
        items
    }

    /// Encodes a dense slot list back into the pocket. Fails when a
    /// universal id has no local representation in `generation`.
    pub fn write(
        &self,
        bytes: &mut [u8],
        generation: Generation,
        slots: &[ItemSlot],
    ) -> Result<(), CoreError> {
        if slots.len() > self.capacity {
            return Err(CoreError::invalid_input(format!(
                "{} items exceed the pocket capacity of {}",
                slots.len(),
                self.capacity
            )));
        }
        bytes[self.offset] = slots.len() as u8;
        for (index, slot) in slots.iter().enumerate() {
            let local = items::universal_to_local(generation, slot.id)?;
            let quantity = slot.quantity.clamp(1, self.max_quantity);
            let entry = self.offset + 1 + index * 2;
            if self.quantity_first {
                bytes[entry] = quantity;
                bytes[entry + 1] = local;
            } else {
                bytes[entry] = local;
                bytes[entry + 1] = quantity;
            }
        }
        bytes[self.offset + 1 + slots.len() * 2] = LIST_TERMINATOR;
        Ok(())
    }
}

/// Adds `quantity` of an item to a slot list, stacking onto an
/// existing slot of the same id first. Whatever exceeds the per-slot
/// maximum is discarded rather than split into a second slot.
pub fn stack_item(
    slots: &mut Vec<ItemSlot>,
    id: u16,
    quantity: u8,
    capacity: usize,
    max_quantity: u8,
) -> Result<(), CoreError> {
    if quantity == 0 {
        return Err(CoreError::invalid_input("cannot add zero of an item"));
    }
    if let Some(slot) = slots.iter_mut().find(|slot| slot.id == id) {
        slot.quantity = slot.quantity.saturating_add(quantity).min(max_quantity);
        return Ok(());
    }
    if slots.len() >= capacity {
        return Err(CoreError::invalid_input("the pocket is full"));
    }
    slots.push(ItemSlot {
        id,
        quantity: quantity.min(max_quantity),
    });
    Ok(())
}

/// Both generations store Pokémon names as fixed 11-byte runs.
pub const NAME_LENGTH: usize = 11;

/// The three byte ranges making up one stored Pokémon: the numeric
/// struct, the original-trainer name, and the nickname live in
/// separate parallel tables.
#[derive(Debug, Clone, Copy)]
pub struct SlotOffsets {
    pub data: usize,
    pub trainer_name: usize,
    pub nickname: usize,
    pub in_party: bool,
}

/// One Pokémon list: a count byte at `base`, a species index list
/// terminated with 0xFF, then the data structs and the two name
/// tables. A slot spans four discontiguous regions, so
/// shift-on-delete moves all four in step.
#[derive(Debug, Clone, Copy)]
pub struct PokemonList {
    pub base: usize,
    pub capacity: usize,
    pub stride: usize,
    pub in_party: bool,
}

impl PokemonList {
    pub fn species_offset(&self, slot: usize) -> usize {
        // The species list holds capacity + 1 bytes for the terminator.
        self.base + 1 + slot
    }

    fn data_base(&self) -> usize {
        self.base + 1 + self.capacity + 1
    }

    pub fn data_offset(&self, slot: usize) -> usize {
        self.data_base() + slot * self.stride
    }

    fn trainer_name_base(&self) -> usize {
        self.data_base() + self.capacity * self.stride
    }

    pub fn trainer_name_offset(&self, slot: usize) -> usize {
        self.trainer_name_base() + slot * NAME_LENGTH
    }

    pub fn nickname_offset(&self, slot: usize) -> usize {
        self.trainer_name_base() + self.capacity * NAME_LENGTH + slot * NAME_LENGTH
    }

    pub fn slot(&self, slot: usize) -> SlotOffsets {
        SlotOffsets {
            data: self.data_offset(slot),
            trainer_name: self.trainer_name_offset(slot),
            nickname: self.nickname_offset(slot),
            in_party: self.in_party,
        }
    }

    /// Stored count, clamped so a corrupt byte cannot push slot
    /// arithmetic past the region.
    pub fn size(&self, bytes: &[u8]) -> usize {
        let count = bytes[self.base] as usize;
        if count > self.capacity {
            tracing::warn!(
                count,
                capacity = self.capacity,
                "storage count exceeds capacity, clamping"
            );
            return self.capacity;
        }
        count
    }

    pub fn set_size(&self, bytes: &mut [u8], size: usize) {
        bytes[self.base] = size as u8;
        bytes[self.species_offset(size)] = LIST_TERMINATOR;
    }

    pub fn check_slot(&self, bytes: &[u8], slot: usize) -> Result<(), CoreError> {
        if slot >= self.size(bytes) {
            return Err(CoreError::invalid_input(format!(
                "slot {slot} is out of range (storage holds {})",
                self.size(bytes)
            )));
        }
        Ok(())
    }

    /// Deletes the slot and closes the gap across all four parallel
    /// regions, then clears the freed tail slot.
    pub fn delete(&self, bytes: &mut [u8], slot: usize) -> Result<(), CoreError> {
        self.check_slot(bytes, slot)?;
        let size = self.size(bytes);
        for index in slot..size - 1 {
            bytes[self.species_offset(index)] = bytes[self.species_offset(index + 1)];
            bytes.copy_within(
                self.data_offset(index + 1)..self.data_offset(index + 1) + self.stride,
                self.data_offset(index),
            );
            bytes.copy_within(
                self.trainer_name_offset(index + 1)
                    ..self.trainer_name_offset(index + 1) + NAME_LENGTH,
                self.trainer_name_offset(index),
            );
            bytes.copy_within(
                self.nickname_offset(index + 1)..self.nickname_offset(index + 1) + NAME_LENGTH,
                self.nickname_offset(index),
            );
        }
        self.clear_slot(bytes, size - 1);
        self.set_size(bytes, size - 1);
        Ok(())
    }

    pub fn clear_slot(&self, bytes: &mut [u8], slot: usize) {
        bytes[self.data_offset(slot)..self.data_offset(slot) + self.stride].fill(0);
        bytes[self.trainer_name_offset(slot)..self.trainer_name_offset(slot) + NAME_LENGTH]
            .fill(crate::text::TERMINATOR);
        bytes[self.nickname_offset(slot)..self.nickname_offset(slot) + NAME_LENGTH]
            .fill(crate::text::TERMINATOR);
    }
}

/// Removes the slot at `index`, shifting the tail up.
pub fn remove_slot(slots: &mut Vec<ItemSlot>, index: usize) -> Result<ItemSlot, CoreError> {
    if index >= slots.len() {
        return Err(CoreError::invalid_input(format!(
            "item slot {index} is out of range (list holds {})",
            slots.len()
        )));
    }
    Ok(slots.remove(index))
}
