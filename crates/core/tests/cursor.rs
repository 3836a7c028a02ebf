use edid_core::cursor::ByteCursor;
use edid_core::ParseError;

#[test]
fn peek_and_advance_walk_forward_until_end() {
    let mut cursor = ByteCursor::new(b"ab");
    assert_eq!(cursor.peek(), Some(b'a'));
    cursor.advance().unwrap();
    assert_eq!(cursor.peek(), Some(b'b'));
    cursor.advance().unwrap();
    assert_eq!(cursor.peek(), None);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance(), Err(ParseError::EndOfInput));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn match_literal_consumes_only_on_success() {
    let mut cursor = ByteCursor::new(b"NVIDIA(0):");
    assert!(!cursor.match_literal("NVIDIA(GPU"));
    assert_eq!(cursor.position(), 0, "failed match must not move the cursor");
    assert!(cursor.match_literal("NVIDIA("));
    assert_eq!(cursor.position(), 7);
    assert_eq!(cursor.peek(), Some(b'0'));
}

#[test]
fn find_literal_stops_past_match_or_at_end() {
    let mut cursor = ByteCursor::new(b"xx Raw EDID bytes: 00");
    assert!(cursor.find_literal("Raw EDID bytes:"));
    assert_eq!(cursor.remaining(), b" 00");

    let mut missing = ByteCursor::new(b"no header here");
    assert!(!missing.find_literal("Raw EDID bytes:"));
    assert!(missing.is_at_end());
}

#[test]
fn find_literal_handles_literal_at_very_end() {
    let mut cursor = ByteCursor::new(b"abcEDID Version");
    assert!(cursor.find_literal("EDID Version"));
    assert!(cursor.is_at_end());
}

#[test]
fn find_any_prefers_earlier_literal_at_same_position() {
    let mut cursor = ByteCursor::new(b"(--) NVIDIA(GPU-0):");
    assert_eq!(cursor.find_any(&["NVIDIA(GPU", "NVIDIA("]), Some(0));
    assert_eq!(cursor.peek(), Some(b'-'));

    let mut screen = ByteCursor::new(b"(--) NVIDIA(3):");
    assert_eq!(screen.find_any(&["NVIDIA(GPU", "NVIDIA("]), Some(1));
    assert_eq!(screen.peek(), Some(b'3'));
}

#[test]
fn take_until_returns_span_and_skips_terminator() {
    let mut cursor = ByteCursor::new(b"Acme Display ---\nrest");
    assert_eq!(cursor.take_until(" ---"), Some(&b"Acme Display"[..]));
    assert_eq!(cursor.peek(), Some(b'\n'));

    let mut unterminated = ByteCursor::new(b"Acme Display");
    assert_eq!(unterminated.take_until(" ---"), None);
    assert!(unterminated.is_at_end());
}

#[test]
fn rewind_to_clamps_to_input_length() {
    let mut cursor = ByteCursor::new(b"abc");
    cursor.rewind_to(10);
    assert!(cursor.is_at_end());
    cursor.rewind_to(1);
    assert_eq!(cursor.peek(), Some(b'b'));
}
