use crate::SourceBuffer;

fn buffer(source: &str) -> SourceBuffer {
    SourceBuffer::new(source).expect("test source fits")
}

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = buffer("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = buffer("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = buffer("hi");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = buffer("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek_at(2), b'c');
}

#[test]
fn peek_past_end_returns_sentinel() {
    let buf = buffer("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek_at(500), 0);
}

// === EOF vs interior null ===

#[test]
fn interior_null_is_not_eof() {
    let buf = buffer("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let buf = buffer("");
    assert!(buf.cursor().is_eof());
}

// === Rest ===

#[test]
fn rest_excludes_sentinel() {
    let buf = buffer("port 22");
    let mut cursor = buf.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.rest(), b"22");
}

#[test]
fn rest_at_eof_is_empty() {
    let buf = buffer("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.rest().is_empty());
}

#[test]
fn bytes_between_positions() {
    let buf = buffer("sshd[7034]");
    let cursor = buf.cursor();
    assert_eq!(cursor.bytes(5, 9), b"7034");
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let buf = buffer("4228 ssh2");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = buffer("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_covers_all_ascii_space() {
    let buf = buffer(" \t\r\n\x0b\x0cx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_skips_multibyte() {
    let buf = buffer("ü!");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn utf8_widths() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(super::Cursor::utf8_char_width(0x80), 1);
}

// === Quotes ===

#[test]
fn closing_quote_found() {
    let buf = buffer("\"to 1 recips\" arg");
    let cursor = buf.cursor();
    assert_eq!(cursor.closing_quote(), Some(12));
}

#[test]
fn closing_quote_skips_escapes() {
    let buf = buffer(r#""say \"hi\"" x"#);
    let cursor = buf.cursor();
    assert_eq!(cursor.closing_quote(), Some(11));
}

#[test]
fn closing_quote_matches_same_kind_only() {
    let buf = buffer("'it\"s' tail");
    let cursor = buf.cursor();
    assert_eq!(cursor.closing_quote(), Some(5));
}

#[test]
fn unterminated_quote_is_none() {
    let buf = buffer("\"never closed");
    assert_eq!(buf.cursor().closing_quote(), None);
}

#[test]
fn trailing_backslash_does_not_overrun() {
    let buf = buffer("\"abc\\");
    assert_eq!(buf.cursor().closing_quote(), None);
}

#[test]
fn prev_is_zero_at_line_start() {
    let buf = buffer("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.prev(), 0);
    cursor.advance();
    assert_eq!(cursor.prev(), b'a');
}
