//! Property tests for the scanner's stream-level invariants.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use paren_lexer::{tokenize, LexErrorKind, Position, Scanner, TokenKind};
use proptest::prelude::*;

/// Source built from the bytes the scanner cares about, biased toward
/// well-formed-looking input.
fn lisp_like(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => Just("("),
            4 => Just(")"),
            6 => Just(" "),
            1 => Just("\n"),
            1 => Just("\r\n"),
            1 => Just("\t"),
            6 => Just("foo"),
            3 => Just("+"),
            2 => Just("<="),
            2 => Just("42"),
            1 => Just("%"),
            1 => Just("; note\n"),
        ],
        0..max_len,
    )
    .prop_map(|parts| parts.concat())
}

fn count(tokens: &[paren_lexer::Token], kind: TokenKind) -> usize {
    tokens.iter().filter(|t| t.kind == kind).count()
}

proptest! {
    #[test]
    fn every_run_ends_in_exactly_one_terminal_token(src in lisp_like(40)) {
        let tokens = tokenize("p", &src);
        let last = tokens.last().unwrap();
        prop_assert!(last.kind.is_terminal());
        prop_assert_eq!(tokens.iter().filter(|t| t.kind.is_terminal()).count(), 1);
    }

    #[test]
    fn clean_runs_are_balanced(src in lisp_like(40)) {
        let mut scanner = Scanner::new("p", &src);
        let tokens: Vec<_> = scanner.by_ref().collect();
        if tokens.last().unwrap().kind == TokenKind::EndOfInput {
            prop_assert_eq!(count(&tokens, TokenKind::OpenParen), count(&tokens, TokenKind::CloseParen));
            prop_assert_eq!(scanner.paren_depth(), 0);
        }
    }

    #[test]
    fn unclosed_runs_have_surplus_open_parens(src in lisp_like(40)) {
        let mut scanner = Scanner::new("p", &src);
        let tokens: Vec<_> = scanner.by_ref().collect();
        if let Some(LexErrorKind::UnclosedParen { depth }) = scanner.error().map(|e| e.kind) {
            prop_assert!(depth > 0);
            prop_assert_eq!(
                count(&tokens, TokenKind::OpenParen),
                count(&tokens, TokenKind::CloseParen) + depth
            );
        }
    }

    #[test]
    fn comment_free_input_is_fully_covered(src in lisp_like(40)) {
        prop_assume!(!src.contains(';'));
        let tokens = tokenize("p", &src);
        if tokens.last().unwrap().kind == TokenKind::EndOfInput {
            let joined: Vec<u8> = tokens.iter().flat_map(|t| t.text.iter().copied()).collect();
            prop_assert_eq!(joined, src.as_bytes().to_vec());
        }
    }

    #[test]
    fn comment_free_prefix_is_covered_up_to_error(src in lisp_like(40)) {
        prop_assume!(!src.contains(';'));
        let tokens = tokenize("p", &src);
        let last = tokens.last().unwrap();
        if last.kind == TokenKind::Error {
            let joined: Vec<u8> = tokens[..tokens.len() - 1]
                .iter()
                .flat_map(|t| t.text.iter().copied())
                .collect();
            prop_assert!(src.as_bytes().starts_with(&joined));
        }
    }

    #[test]
    fn offsets_strictly_increase(src in lisp_like(40)) {
        let tokens = tokenize("p", &src);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].position.byte_offset < pair[1].position.byte_offset);
        }
    }

    #[test]
    fn positions_match_rescan(src in lisp_like(40)) {
        for token in tokenize("p", &src) {
            prop_assert_eq!(
                token.position,
                Position::compute(src.as_bytes(), token.position.byte_offset)
            );
        }
    }

    #[test]
    fn non_error_text_is_an_input_slice(src in lisp_like(40)) {
        for token in tokenize("p", &src) {
            if token.kind != TokenKind::Error {
                let start = token.position.byte_offset;
                prop_assert_eq!(&src.as_bytes()[start..start + token.text.len()], &token.text[..]);
            }
        }
    }

    #[test]
    fn scanning_is_deterministic(src in lisp_like(40)) {
        prop_assert_eq!(tokenize("p", &src), tokenize("p", &src));
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let tokens = tokenize("p", &bytes);
        prop_assert!(tokens.last().unwrap().kind.is_terminal());
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Number));
    }
}
