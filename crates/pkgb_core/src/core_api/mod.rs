mod engine;
mod error;
mod types;

pub use engine::{Engine, Session, template};
pub use error::{CoreError, CoreErrorCode};
pub use types::{
    Capabilities, CapabilityIssue, CaughtData, EffortValues, IndividualValues, InventoryKind,
    InventorySnapshot, ItemSlot, MoveSlot, Pokerus, PokemonSnapshot, Snapshot, StatisticValues,
    StorageId, TimeOfDay, TrainerInfo,
};
