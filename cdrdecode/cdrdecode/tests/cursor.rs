use bytes::Bytes;
use cdrdecode::{CdrCursor, DecodeError};

#[test]
fn consume_advances_offset_and_keeps_length_invariant() -> Result<(), DecodeError> {
    let mut cursor = CdrCursor::from_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.total_length(), 5);

    let head = cursor.consume(2)?;
    assert_eq!(&head[..], &[1, 2]);
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(cursor.offset() + cursor.remaining(), cursor.total_length());
    Ok(())
}

#[test]
fn consume_past_end_is_out_of_bounds() {
    let mut cursor = CdrCursor::from_slice(&[1, 2, 3]);
    cursor.consume(2).expect("two bytes available");
    let err = cursor.consume(2).expect_err("only one byte left");
    assert!(matches!(
        err,
        DecodeError::OutOfBounds {
            offset: 2,
            requested: 2,
            remaining: 1
        }
    ));
    // a failed read does not move the cursor
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn consumed_views_share_the_input_allocation() -> Result<(), DecodeError> {
    let data = Bytes::from_static(b"abcdef");
    let mut cursor = CdrCursor::new(data.clone());
    cursor.consume(2)?;
    let view = cursor.consume(3)?;
    assert_eq!(view.as_ptr(), data[2..].as_ptr());
    assert_eq!(&view[..], b"cde");
    Ok(())
}

#[test]
fn consume_as_word_reads_fixed_width() -> Result<(), DecodeError> {
    let mut cursor = CdrCursor::from_slice(&1.25f64.to_le_bytes());
    let word: [u8; 8] = cursor.consume_as_word()?;
    assert_eq!(f64::from_le_bytes(word), 1.25);
    assert!(cursor.is_empty());

    let err = cursor
        .consume_as_word::<4>()
        .expect_err("cursor is exhausted");
    assert!(matches!(err, DecodeError::OutOfBounds { requested: 4, .. }));
    Ok(())
}

#[test]
fn align_skips_padding_only_when_misaligned() -> Result<(), DecodeError> {
    let mut cursor = CdrCursor::from_slice(&[0; 16]);
    cursor.align(4)?;
    assert_eq!(cursor.offset(), 0);

    cursor.consume(1)?;
    cursor.align(2)?;
    assert_eq!(cursor.offset(), 2);
    cursor.align(4)?;
    assert_eq!(cursor.offset(), 4);
    cursor.consume(1)?;
    cursor.align(8)?;
    assert_eq!(cursor.offset(), 8);
    cursor.align(1)?;
    assert_eq!(cursor.offset(), 8);
    Ok(())
}

#[test]
fn align_past_end_is_out_of_bounds() {
    let mut cursor = CdrCursor::from_slice(&[0, 0]);
    cursor.consume(1).expect("one byte available");
    let err = cursor.align(4).expect_err("three padding bytes required");
    assert!(matches!(
        err,
        DecodeError::OutOfBounds {
            offset: 1,
            requested: 3,
            remaining: 1
        }
    ));
}

#[test]
fn peek_does_not_advance() -> Result<(), DecodeError> {
    let mut cursor = CdrCursor::from_slice(&[7, 8, 9]);
    cursor.consume(1)?;
    assert_eq!(&cursor.peek(2)?[..], &[8, 9]);
    assert_eq!(cursor.offset(), 1);
    assert!(cursor.peek(3).is_err());
    Ok(())
}

#[test]
fn remaining_as_new_cursor_restarts_offset_at_zero() -> Result<(), DecodeError> {
    let mut cursor = CdrCursor::from_slice(&[0xAA, 0xBB, 0xCC, 0, 0, 0, 0, 0]);
    cursor.consume(3)?;

    let mut rest = cursor.remaining_as_new_cursor();
    assert_eq!(rest.offset(), 0);
    assert_eq!(rest.total_length(), 5);
    // the original cursor is untouched
    assert_eq!(cursor.offset(), 3);

    // offset 0 is aligned for any width in the new cursor
    rest.align(4)?;
    assert_eq!(rest.offset(), 0);
    Ok(())
}
