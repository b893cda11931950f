//! Gold/Silver/Crystal item pockets.
//!
//! Four pocket shapes: the two-byte quantity-then-id lists (general,
//! balls, PC), the one-byte key item list (quantity is implicitly 1),
//! and the positional TM/HM pocket where the byte at a machine's
//! index is its count. HMs are unlimited-use field moves and cannot
//! be removed once present.

use crate::collection::{ItemList, LIST_TERMINATOR};
use crate::core_api::{CoreError, InventoryKind, InventorySnapshot, ItemSlot};
use crate::gen2::Layout;
use crate::items;
use crate::version::Generation;

pub const GENERAL_CAPACITY: usize = 20;
pub const BALL_CAPACITY: usize = 12;
pub const KEY_CAPACITY: usize = 26;
pub const PC_CAPACITY: usize = 50;
pub const MAX_QUANTITY: u8 = 99;

pub const TM_COUNT: usize = 50;
pub const HM_COUNT: usize = 7;

fn two_byte_list(kind: InventoryKind, layout: &Layout) -> Option<ItemList> {
    let (offset, capacity) = match kind {
        InventoryKind::General => (layout.items, GENERAL_CAPACITY),
        InventoryKind::Balls => (layout.balls, BALL_CAPACITY),
        InventoryKind::Computer => (layout.pc_items, PC_CAPACITY),
        _ => return None,
    };
    Some(ItemList {
        offset,
        capacity,
        quantity_first: true,
        max_quantity: MAX_QUANTITY,
    })
}

pub fn snapshot(
    bytes: &[u8],
    layout: &Layout,
    kind: InventoryKind,
) -> Result<InventorySnapshot, CoreError> {
    match kind {
        InventoryKind::Keys => Ok(InventorySnapshot {
            kind,
            capacity: KEY_CAPACITY,
            max_quantity: 1,
            items: read_key_items(bytes, layout.key_items),
        }),
        InventoryKind::TechnicalMachines => Ok(InventorySnapshot {
            kind,
            capacity: TM_COUNT,
            max_quantity: MAX_QUANTITY,
            items: read_machines(bytes, layout.tm_pocket, false),
        }),
        InventoryKind::HiddenMachines => Ok(InventorySnapshot {
            kind,
            capacity: HM_COUNT,
            max_quantity: 1,
            items: read_machines(bytes, layout.tm_pocket, true),
        }),
        _ => {
            let list = two_byte_list(kind, layout)
                .ok_or_else(|| CoreError::invalid_input(format!("unknown pocket {kind:?}")))?;
            Ok(InventorySnapshot {
                kind,
                capacity: list.capacity,
                max_quantity: list.max_quantity,
                items: list.read(bytes, Generation::II),
            })
        }
    }
}

pub fn add_item(
    bytes: &mut [u8],
    layout: &Layout,
    kind: InventoryKind,
    id: u16,
    quantity: u8,
) -> Result<(), CoreError> {
    match kind {
        InventoryKind::Keys => add_key_item(bytes, layout.key_items, id),
        InventoryKind::TechnicalMachines | InventoryKind::HiddenMachines => {
            add_machine(bytes, layout.tm_pocket, id, quantity)
        }
        _ => {
            let list = two_byte_list(kind, layout)
                .ok_or_else(|| CoreError::invalid_input(format!("unknown pocket {kind:?}")))?;
            let mut items = list.read(bytes, Generation::II);
            crate::collection::stack_item(&mut items, id, quantity, list.capacity, list.max_quantity)?;
            list.write(bytes, Generation::II, &items)
        }
    }
}

pub fn remove_item(
    bytes: &mut [u8],
    layout: &Layout,
    kind: InventoryKind,
    index: usize,
) -> Result<(), CoreError> {
    match kind {
        InventoryKind::Keys => remove_key_item(bytes, layout.key_items, index),
        InventoryKind::TechnicalMachines => remove_machine(bytes, layout.tm_pocket, index),
        InventoryKind::HiddenMachines => Err(CoreError::unsupported_operation(
            "hidden machines cannot be discarded",
        )),
        _ => {
            let list = two_byte_list(kind, layout)
                .ok_or_else(|| CoreError::invalid_input(format!("unknown pocket {kind:?}")))?;
            let mut items = list.read(bytes, Generation::II);
            crate::collection::remove_slot(&mut items, index)?;
            list.write(bytes, Generation::II, &items)
        }
    }
}

pub fn set_items(
    bytes: &mut [u8],
    layout: &Layout,
    kind: InventoryKind,
    items: &[ItemSlot],
) -> Result<(), CoreError> {
    match kind {
        InventoryKind::Keys => write_key_items(bytes, layout.key_items, items),
        InventoryKind::TechnicalMachines | InventoryKind::HiddenMachines => Err(
            CoreError::unsupported_operation("the machine pocket is edited per machine"),
        ),
        _ => {
            let list = two_byte_list(kind, layout)
                .ok_or_else(|| CoreError::invalid_input(format!("unknown pocket {kind:?}")))?;
            list.write(bytes, Generation::II, items)
        }
    }
}

// Key items: count byte, one id byte per slot, terminator.

fn read_key_items(bytes: &[u8], offset: usize) -> Vec<ItemSlot> {
    let mut count = bytes[offset] as usize;
    if count > KEY_CAPACITY {
        tracing::warn!(count, "key item count exceeds capacity, clamping");
        count = KEY_CAPACITY;
    }
    (0..count)
        .map(|index| ItemSlot {
            id: items::local_to_universal(Generation::II, bytes[offset + 1 + index]),
            quantity: 1,
        })
        .collect()
}

fn write_key_items(bytes: &mut [u8], offset: usize, slots: &[ItemSlot]) -> Result<(), CoreError> {
    if slots.len() > KEY_CAPACITY {
        return Err(CoreError::invalid_input(format!(
            "{} key items exceed the pocket capacity of {KEY_CAPACITY}",
            slots.len()
        )));
    }
    bytes[offset] = slots.len() as u8;
    for (index, slot) in slots.iter().enumerate() {
        bytes[offset + 1 + index] = items::universal_to_local(Generation::II, slot.id)?;
    }
    bytes[offset + 1 + slots.len()] = LIST_TERMINATOR;
    Ok(())
}

fn add_key_item(bytes: &mut [u8], offset: usize, id: u16) -> Result<(), CoreError> {
    let mut slots = read_key_items(bytes, offset);
    if slots.iter().any(|slot| slot.id == id) {
        return Ok(());
    }
    if slots.len() >= KEY_CAPACITY {
        return Err(CoreError::invalid_input("the key item pocket is full"));
    }
    slots.push(ItemSlot { id, quantity: 1 });
    write_key_items(bytes, offset, &slots)
}

fn remove_key_item(bytes: &mut [u8], offset: usize, index: usize) -> Result<(), CoreError> {
    let mut slots = read_key_items(bytes, offset);
    crate::collection::remove_slot(&mut slots, index)?;
    write_key_items(bytes, offset, &slots)
}

// The machine pocket: 50 TM count bytes followed by 7 HM count bytes.

fn read_machines(bytes: &[u8], offset: usize, hidden: bool) -> Vec<ItemSlot> {
    let (start, count, id_for): (usize, usize, fn(u8) -> u16) = if hidden {
        (TM_COUNT, HM_COUNT, items::hidden_machine_id)
    } else {
        (0, TM_COUNT, items::technical_machine_id)
    };
    (0..count)
        .filter_map(|index| {
            let quantity = bytes[offset + start + index];
            (quantity > 0).then(|| ItemSlot {
                id: id_for(index as u8 + 1),
                quantity,
            })
        })
        .collect()
}

fn machine_offset(offset: usize, id: u16) -> Result<usize, CoreError> {
    if let Some(number) = items::technical_machine_number(id) {
        return Ok(offset + number as usize - 1);
    }
    if let Some(number) = items::hidden_machine_number(id) {
        return Ok(offset + TM_COUNT + number as usize - 1);
    }
    Err(CoreError::invalid_input(format!(
        "item {id} is not a technical or hidden machine"
    )))
}

fn add_machine(bytes: &mut [u8], offset: usize, id: u16, quantity: u8) -> Result<(), CoreError> {
    let position = machine_offset(offset, id)?;
    if items::is_hidden_machine(id) {
        bytes[position] = 1;
    } else {
        bytes[position] = bytes[position]
            .saturating_add(quantity.max(1))
            .min(MAX_QUANTITY);
    }
    Ok(())
}

/// `index` counts only the machines currently present, matching the
/// order `read_machines` reports them.
fn remove_machine(bytes: &mut [u8], offset: usize, index: usize) -> Result<(), CoreError> {
    let present = read_machines(bytes, offset, false);
    let slot = present.get(index).ok_or_else(|| {
        CoreError::invalid_input(format!(
            "machine slot {index} is out of range (pocket holds {})",
            present.len()
        ))
    })?;
    let position = machine_offset(offset, slot.id)?;
    bytes[position] = 0;
    Ok(())
}
