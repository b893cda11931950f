//! Generation I item pockets: the bag and the PC item storage.
//!
//! Both are id-then-quantity slot lists; one bag holds everything, so
//! the TM/HM and ball pockets of the later games do not exist here.

use crate::collection::ItemList;
use crate::core_api::{CoreError, InventoryKind, InventorySnapshot, ItemSlot};
use crate::version::Generation;

pub const BAG: usize = 0x25C9;
pub const BAG_CAPACITY: usize = 20;
pub const PC_ITEMS: usize = 0x27E6;
pub const PC_CAPACITY: usize = 50;
pub const MAX_QUANTITY: u8 = 99;

pub fn list_for(kind: InventoryKind) -> Result<ItemList, CoreError> {
    match kind {
        InventoryKind::General => Ok(ItemList {
            offset: BAG,
            capacity: BAG_CAPACITY,
            quantity_first: false,
            max_quantity: MAX_QUANTITY,
        }),
        InventoryKind::Computer => Ok(ItemList {
            offset: PC_ITEMS,
            capacity: PC_CAPACITY,
            quantity_first: false,
            max_quantity: MAX_QUANTITY,
        }),
        _ => Err(CoreError::unsupported_operation(format!(
            "this game has no {kind:?} pocket"
        ))),
    }
}

pub fn snapshot(bytes: &[u8], kind: InventoryKind) -> Result<InventorySnapshot, CoreError> {
    let list = list_for(kind)?;
    Ok(InventorySnapshot {
        kind,
        capacity: list.capacity,
        max_quantity: list.max_quantity,
        items: list.read(bytes, Generation::I),
    })
}

pub fn write_items(
    bytes: &mut [u8],
    kind: InventoryKind,
    items: &[ItemSlot],
) -> Result<(), CoreError> {
    list_for(kind)?.write(bytes, Generation::I, items)
}
