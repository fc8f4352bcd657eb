//! Skill table location and decoding.
//!
//! The `.fch` character file embeds its skill table at a version-dependent
//! offset that no header records. The locator brute-force scans the whole
//! buffer and scores every candidate offset by how many consecutive
//! plausible (id, level, accumulator) triples follow it; the longest run
//! wins. Character files are a few kilobytes, so the quadratic-looking scan
//! is cheap in practice.

pub mod names;

use crate::error::DecodeError;
use names::skill_name;

/// One skill record: i32 id + f32 level + f32 accumulator, little-endian.
pub const SKILL_RECORD_LEN: usize = 12;

/// Cap on consecutive records counted per candidate offset. Real tables
/// hold a couple dozen skills; the cap bounds work on pathological inputs.
const MAX_RUN: usize = 64;

/// Decoded skill levels keyed by display name, in record order.
///
/// Keys are unique: a repeated id updates the existing entry in place
/// (real saves never repeat an id, but the table must not silently grow).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillTable {
    entries: Vec<(String, f32)>,
}

impl SkillTable {
    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, level)| level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(n, level)| (n.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, level: f32) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = level,
            None => self.entries.push((name, level)),
        }
    }
}

/// Read the record at `pos`. Callers guarantee `pos + SKILL_RECORD_LEN`
/// is in bounds.
fn read_record(data: &[u8], pos: usize) -> (i32, f32, f32) {
    let word = |at: usize| [data[at], data[at + 1], data[at + 2], data[at + 3]];
    let id = i32::from_le_bytes(word(pos));
    let level = f32::from_le_bytes(word(pos + 4));
    let accum = f32::from_le_bytes(word(pos + 8));
    (id, level, accum)
}

/// Validity predicate shared by the locator and the decoder: the id must be
/// in the game's skill range and the level must be sane. The first record
/// that fails this both terminates a run during scanning and terminates
/// decoding.
fn plausible_record(id: i32, level: f32) -> bool {
    0 < id && id < 200 && (0.0..=1000.0).contains(&level)
}

/// Scan the buffer for the longest run of plausible skill records.
///
/// Returns the start offset and record count of the best run, or `None`
/// when no offset yields even one valid record (including any buffer
/// shorter than one record). Ties keep the first offset found, so the
/// result is deterministic.
pub fn find_skill_block(data: &[u8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    if data.len() < SKILL_RECORD_LEN {
        return None;
    }

    for start in 0..=(data.len() - SKILL_RECORD_LEN) {
        let mut count = 0;
        let mut pos = start;
        while pos + SKILL_RECORD_LEN <= data.len() && count < MAX_RUN {
            let (id, level, _accum) = read_record(data, pos);
            if !plausible_record(id, level) {
                break;
            }
            count += 1;
            pos += SKILL_RECORD_LEN;
        }
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((start, count));
        }
    }

    best
}

/// Locate the skill block in a raw character file and decode it.
///
/// Walks fixed-size records from the located offset until the validity
/// predicate fails or the buffer ends; that first failing record is the
/// expected terminator, not corruption. Levels are rounded to 2 decimals.
/// The accumulator field is decoded but not retained: nothing downstream
/// consumes it.
pub fn decode_skills(data: &[u8]) -> Result<SkillTable, DecodeError> {
    let Some((start, count)) = find_skill_block(data) else {
        return Err(DecodeError::SkillBlockNotFound);
    };
    if count == 0 {
        return Err(DecodeError::SkillBlockNotFound);
    }

    let mut skills = SkillTable::default();
    let mut pos = start;
    while pos + SKILL_RECORD_LEN <= data.len() {
        let (id, level, _accum) = read_record(data, pos);
        if !plausible_record(id, level) {
            break;
        }
        skills.insert(skill_name(id), round2(level));
        pos += SKILL_RECORD_LEN;
    }

    Ok(skills)
}

fn round2(level: f32) -> f32 {
    (level * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{SkillTable, round2};

    #[test]
    fn round2_truncates_to_two_decimals() {
        assert_eq!(round2(36.2574), 36.26);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn repeated_name_updates_in_place() {
        let mut table = SkillTable::default();
        table.insert("Run".to_string(), 10.0);
        table.insert("Sneak".to_string(), 5.0);
        table.insert("Run".to_string(), 12.5);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Run"), Some(12.5));
        let order: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(order, ["Run", "Sneak"]);
    }
}
