use valheim_core::error::DecodeError;
use valheim_core::inventory::{ItemRecord, POST_NAME_BUDGET, decode_chest_items};

// Bytes consumed by the fixed fields after the name: equipped flag, quality,
// variant, crafter id, has-crafter-name flag.
const FIXED_TAIL: usize = 1 + 4 + 4 + 8 + 1;

fn payload_header(count: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&103u32.to_le_bytes()); // format marker, arbitrary
    buf.extend_from_slice(&count.to_le_bytes());
    buf
}

fn push_item(buf: &mut Vec<u8>, item: &ItemRecord) {
    buf.push(item.name.len() as u8);
    buf.extend_from_slice(item.name.as_bytes());
    buf.extend_from_slice(&item.stack.to_le_bytes());
    buf.extend_from_slice(&item.durability.to_le_bytes());
    buf.push(item.equipped as u8);
    buf.extend_from_slice(&item.quality.to_le_bytes());
    buf.extend_from_slice(&item.variant.to_le_bytes());
    buf.extend_from_slice(&item.crafter_id.to_le_bytes());

    let mut used = FIXED_TAIL;
    match &item.crafter_name {
        Some(crafter) => {
            buf.push(1);
            buf.push(crafter.len() as u8);
            buf.extend_from_slice(crafter.as_bytes());
            used += 1 + crafter.len();
        }
        None => buf.push(0),
    }
    // Reserved padding filling out the fixed post-name slot.
    buf.extend(std::iter::repeat_n(0u8, POST_NAME_BUDGET - used));
}

fn wood(stack: i32) -> ItemRecord {
    ItemRecord {
        name: "Wood".to_string(),
        stack,
        durability: 100.0,
        equipped: false,
        quality: 1,
        variant: 0,
        crafter_id: 0,
        crafter_name: None,
    }
}

#[test]
fn zero_item_payload_decodes_to_empty_vec() {
    let buf = payload_header(0);
    assert_eq!(decode_chest_items(&buf), Ok(Vec::new()));
}

#[test]
fn round_trips_items_field_for_field() {
    let items = vec![
        wood(50),
        ItemRecord {
            name: "Bronze Axe".to_string(),
            stack: 1,
            durability: 87.25,
            equipped: true,
            quality: 3,
            variant: 0,
            crafter_id: 76561198000012345,
            crafter_name: Some("Svend".to_string()),
        },
        ItemRecord {
            name: "Coins".to_string(),
            stack: 999,
            durability: 100.0,
            equipped: false,
            quality: 1,
            variant: 2,
            crafter_id: 0,
            crafter_name: None,
        },
    ];

    let mut buf = payload_header(items.len() as u32);
    for item in &items {
        push_item(&mut buf, item);
    }

    assert_eq!(decode_chest_items(&buf), Ok(items));
}

#[test]
fn truncated_payload_is_an_error_not_a_partial_result() {
    let mut buf = payload_header(2);
    push_item(&mut buf, &wood(10));
    // Second record missing entirely.
    assert!(matches!(
        decode_chest_items(&buf),
        Err(DecodeError::Truncated { .. })
    ));

    // Header alone, count cut short.
    assert!(matches!(
        decode_chest_items(&103u32.to_le_bytes()),
        Err(DecodeError::Truncated { .. })
    ));
}

#[test]
fn crafter_name_overrunning_the_slot_is_malformed() {
    // 20-byte crafter name: 18 fixed + 21 = 39 bytes used of a 35-byte slot.
    let mut buf = payload_header(1);
    buf.push(4);
    buf.extend_from_slice(b"Wood");
    buf.extend_from_slice(&10i32.to_le_bytes());
    buf.extend_from_slice(&100.0f32.to_le_bytes());
    buf.push(0); // equipped
    buf.extend_from_slice(&1i32.to_le_bytes()); // quality
    buf.extend_from_slice(&0i32.to_le_bytes()); // variant
    buf.extend_from_slice(&0u64.to_le_bytes()); // crafter id
    buf.push(1); // has crafter name
    buf.push(20);
    buf.extend_from_slice(b"NameTooLongToFitHere");

    assert!(matches!(
        decode_chest_items(&buf),
        Err(DecodeError::MalformedRecord(_))
    ));
}

#[test]
fn padding_keeps_cursor_aligned_across_records() {
    // One record with a crafter name (shorter padding) followed by one
    // without (full 17-byte padding); a skip miscount would corrupt the
    // second record's name.
    let first = ItemRecord {
        crafter_name: Some("B".to_string()),
        ..wood(5)
    };
    let second = wood(7);

    let mut buf = payload_header(2);
    push_item(&mut buf, &first);
    push_item(&mut buf, &second);

    let decoded = decode_chest_items(&buf).unwrap();
    assert_eq!(decoded[0].crafter_name.as_deref(), Some("B"));
    assert_eq!(decoded[1].name, "Wood");
    assert_eq!(decoded[1].stack, 7);
}
