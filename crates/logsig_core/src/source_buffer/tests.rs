use super::*;

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("").expect("empty line fits");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn buffer_is_cache_line_padded() {
    let buf = SourceBuffer::new("jan 12 06:49:41").expect("short line fits");
    assert_eq!(buf.as_sentinel_bytes().len() % CACHE_LINE, 0);
    assert_eq!(buf.as_bytes(), b"jan 12 06:49:41");
}

#[test]
fn exact_cache_line_source_gets_extra_line_for_sentinel() {
    let source = "a".repeat(64);
    let buf = SourceBuffer::new(&source).expect("64 bytes fits");
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
    assert_eq!(buf.as_sentinel_bytes()[64], 0);
}

#[test]
fn padding_is_all_zero() {
    let buf = SourceBuffer::new("abc").expect("short line fits");
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn non_ascii_bytes_are_copied_verbatim() {
    let source = "user=jürgen ok";
    let buf = SourceBuffer::new(source).expect("short line fits");
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert_eq!(buf.len() as usize, source.len());
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("x").expect("short line fits");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn too_large_error_mentions_length() {
    let err = SourceTooLarge { len: 5_000_000_000 };
    assert!(err.to_string().contains("5000000000"));
}
