//! World snapshot model and chest aggregation.
//!
//! The snapshot is the JSON export produced by the external save-tools
//! converter. Of the many fields it emits per object, the tracker reads
//! exactly two: the prefab identifier (to recognize chests) and the `items`
//! string property (the base64-encoded inventory payload).

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::error::DecodeError;
use crate::inventory::{ItemRecord, decode_chest_items};

/// Substring that identifies a container prefab, matched case-insensitively
/// ("piece_chest", "piece_chest_wood", "Piece_Chest_private", ...).
const CHEST_PREFAB_MARKER: &str = "piece_chest";

/// Name of the string property carrying the inventory payload.
const ITEMS_PROPERTY: &str = "items";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    #[serde(default)]
    pub zdo_list: Vec<ZdoRecord>,
}

/// One world object from the converter's export.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZdoRecord {
    #[serde(default)]
    pub prefab_name: Option<String>,
    #[serde(default)]
    pub strings_by_name: HashMap<String, String>,
}

impl ZdoRecord {
    fn is_chest(&self) -> bool {
        self.prefab_name
            .as_deref()
            .is_some_and(|p| p.to_lowercase().contains(CHEST_PREFAB_MARKER))
    }

    /// The inventory payload, if the chest has one. An empty `items`
    /// string means the same thing as a missing one: a chest nothing has
    /// ever been put into.
    fn items_payload(&self) -> Option<&str> {
        self.strings_by_name
            .get(ITEMS_PROPERTY)
            .map(String::as_str)
            .filter(|payload| !payload.is_empty())
    }
}

/// Per-item stack totals across all decoded chests, in order of first
/// occurrence. Rebuilt from scratch on every aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChestTotals {
    entries: Vec<(String, i64)>,
    /// Chests recognized by prefab but carrying no inventory payload.
    /// Normal (freshly placed chests), surfaced so hosts can log it.
    pub empty_chests: usize,
}

impl ChestTotals {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, total)| total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(n, total)| (n.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold one stack into the totals. Public so hosts that fan decoding
    /// out over many containers can merge per-container results into a
    /// single accumulation point.
    pub fn add(&mut self, name: &str, stack: i64) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 += stack,
            None => self.entries.push((name.to_string(), stack)),
        }
    }
}

/// Fold every chest's decoded items into per-name stack totals.
///
/// Objects whose prefab does not contain the chest marker contribute
/// nothing, payload or not. A malformed payload aborts the whole pass: a
/// partial total silently presented as complete is worse than no total.
pub fn aggregate_chests(snapshot: &WorldSnapshot) -> Result<ChestTotals, DecodeError> {
    let mut totals = ChestTotals::default();

    for zdo in &snapshot.zdo_list {
        if !zdo.is_chest() {
            continue;
        }
        let Some(payload) = zdo.items_payload() else {
            totals.empty_chests += 1;
            continue;
        };
        for item in decode_items_payload(payload)? {
            totals.add(&item.name, i64::from(item.stack));
        }
    }

    Ok(totals)
}

/// Base64-decode one `items` property and decode its records. An
/// undecodable base64 string is malformed input, not a missing payload.
pub fn decode_items_payload(payload: &str) -> Result<Vec<ItemRecord>, DecodeError> {
    let raw = BASE64
        .decode(payload)
        .map_err(|e| DecodeError::MalformedRecord(format!("invalid base64 payload: {e}")))?;
    decode_chest_items(&raw)
}
