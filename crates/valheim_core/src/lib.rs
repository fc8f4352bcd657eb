//! Save decoding library for the Valheim LAN tracker.
//!
//! Two independent pipelines, both scan → validate → extract:
//! skill levels out of a raw `.fch` character file, and chest inventories
//! out of the base64 `items` payloads in a converted world snapshot. The
//! library does no I/O and keeps no state between calls; reading files,
//! running the converter and presenting results belong to the host.

pub mod error;
pub mod inventory;
pub mod reader;
pub mod skills;
pub mod world;

pub use error::DecodeError;
pub use inventory::{ItemRecord, decode_chest_items};
pub use skills::{SkillTable, decode_skills, find_skill_block};
pub use world::{ChestTotals, WorldSnapshot, ZdoRecord, aggregate_chests};
