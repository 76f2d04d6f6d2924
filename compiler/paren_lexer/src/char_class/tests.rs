use super::*;

#[test]
fn space_set_is_exactly_four_bytes() {
    let spaces: Vec<u8> = (0u8..=255).filter(|&b| is_space(b)).collect();
    assert_eq!(spaces, vec![b'\t', b'\n', b'\r', b' ']);
}

#[test]
fn end_of_line_is_cr_or_lf() {
    assert!(is_end_of_line(b'\n'));
    assert!(is_end_of_line(b'\r'));
    assert!(!is_end_of_line(b' '));
    assert!(!is_end_of_line(b'\t'));
}

#[test]
fn alphanumerics_are_identifier_chars() {
    for b in (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9') {
        assert!(is_identifier_char(b), "{:?} should be an identifier char", b as char);
    }
}

#[test]
fn identifier_punctuation_set() {
    for &b in IDENTIFIER_PUNCTUATION {
        assert!(is_identifier_char(b), "{:?} should be an identifier char", b as char);
    }
    for b in [b'%', b'?', b'.', b'#', b'"', b'\'', b'`', b'&', b'$', b'@', b'|'] {
        assert!(!is_identifier_char(b), "{:?} should not be an identifier char", b as char);
    }
}

#[test]
fn syntax_bytes_are_not_identifier_chars() {
    for b in [COMMENT_START, OPEN_DELIMITER, CLOSE_DELIMITER, b' ', b'\n', 0] {
        assert!(!is_identifier_char(b));
    }
}

#[test]
fn non_ascii_is_never_classified() {
    for b in 128u8..=255 {
        assert!(!is_space(b));
        assert!(!is_identifier_char(b));
        assert!(!is_end_of_line(b));
    }
}

#[test]
fn delimiters() {
    assert!(is_open_delimiter(b'('));
    assert!(is_close_delimiter(b')'));
    assert!(!is_open_delimiter(b'['));
    assert!(!is_close_delimiter(b']'));
    assert!(is_comment_start(b';'));
    assert!(!is_comment_start(b'#'));
}
