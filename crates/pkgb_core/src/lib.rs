//! Save-file editing core for the Generation I and II Game Boy
//! Pokémon games.
//!
//! The crate consumes a raw save buffer, detects which game wrote it,
//! and exposes one polymorphic [`core_api::Session`] over the two
//! incompatible on-cartridge layouts. All sub-entities are views into
//! the single owned buffer; checksums are recomputed only when
//! [`core_api::Session::export_to_bytes`] produces the write-back
//! copy. File I/O belongs to the host.

pub mod buffer;
pub mod collection;
pub mod core_api;
pub mod gen1;
pub mod gen2;
pub mod gender;
pub mod items;
pub mod species;
pub mod stats;
pub mod text;
pub mod version;

pub use core_api::{CoreError, CoreErrorCode, Engine, Session};
pub use version::{GameVersion, Generation};
