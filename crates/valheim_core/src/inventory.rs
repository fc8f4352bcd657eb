//! Chest inventory payload decoding.
//!
//! The `items` property of a container object holds a base64-encoded record
//! stream: one reserved header word, an item count, then `count` records.
//! Each record allocates a fixed 35-byte slot for everything after the item
//! name, whether or not the optional crafter fields are present; whatever
//! part of the slot the record does not use must be skipped explicitly or
//! the cursor drifts off the next record's name length. This padding
//! arithmetic is the one place the layout has to be matched byte for byte.

use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

/// Fixed byte allocation per item record for all fields after the name,
/// inclusive of the optional crafter name and reserved padding.
pub const POST_NAME_BUDGET: usize = 35;

// Fixed-width fields inside the budget: equipped flag, quality, variant,
// crafter id, has-crafter-name flag.
const EQUIPPED_LEN: usize = 1;
const QUALITY_LEN: usize = 4;
const VARIANT_LEN: usize = 4;
const CRAFTER_ID_LEN: usize = 8;
const CRAFTER_FLAG_LEN: usize = 1;
const FIXED_TAIL_LEN: usize =
    EQUIPPED_LEN + QUALITY_LEN + VARIANT_LEN + CRAFTER_ID_LEN + CRAFTER_FLAG_LEN;

/// One decoded inventory slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    pub stack: i32,
    pub durability: f32,
    pub equipped: bool,
    pub quality: i32,
    pub variant: i32,
    pub crafter_id: u64,
    pub crafter_name: Option<String>,
}

/// Decode a raw (already base64-decoded) inventory payload into its item
/// records, in stream order.
///
/// A payload declaring zero items decodes to an empty vec; that is a normal
/// container state, not an error. Reads past the end of the payload fail
/// with [`DecodeError::Truncated`]; a record whose optional fields overrun
/// the fixed post-name budget fails with [`DecodeError::MalformedRecord`],
/// since silently skipping a negative byte count would misread every record
/// after it.
pub fn decode_chest_items(raw: &[u8]) -> Result<Vec<ItemRecord>, DecodeError> {
    let mut r = LittleEndianReader::new(raw);

    let _header = r.read_u32()?; // format marker, not interpreted
    let count = r.read_u32()?;

    // Capacity capped: a corrupt count word fails on its first read, and
    // must not get to reserve gigabytes before it does.
    let mut items = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        items.push(read_item(&mut r)?);
    }

    Ok(items)
}

fn read_item(r: &mut LittleEndianReader<'_>) -> Result<ItemRecord, DecodeError> {
    let name = r.read_len_prefixed_string()?;
    let stack = r.read_i32()?;
    let durability = r.read_f32()?;

    let slot_start = r.position();
    let equipped = r.read_u8()? != 0;
    let quality = r.read_i32()?;
    let variant = r.read_i32()?;
    let crafter_id = r.read_u64()?;

    let has_crafter_name = r.read_u8()? != 0;
    debug_assert_eq!(r.position() - slot_start, FIXED_TAIL_LEN);

    let crafter_name = if has_crafter_name {
        Some(r.read_len_prefixed_string()?)
    } else {
        None
    };

    // Consume whatever is left of the fixed post-name slot so the cursor
    // lands on the next record's name length. Measured from the cursor, not
    // recomputed from string lengths: lossy decoding can change the string's
    // byte length, the cursor cannot lie.
    let used = r.position() - slot_start;
    let skip = POST_NAME_BUDGET.checked_sub(used).ok_or_else(|| {
        DecodeError::MalformedRecord(format!(
            "item '{name}' overruns its {POST_NAME_BUDGET}-byte slot by {} bytes",
            used - POST_NAME_BUDGET
        ))
    })?;
    r.skip(skip)?;

    Ok(ItemRecord {
        name,
        stack,
        durability,
        equipped,
        quality,
        variant,
        crafter_id,
        crafter_name,
    })
}
