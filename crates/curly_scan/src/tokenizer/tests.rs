//! Tests for the rune tokenizer.

use super::*;

// === Basic navigation ===

#[test]
fn next_rune_advances() {
    let mut t = Tokenizer::new("abc");
    assert_eq!(t.next_rune(), 'a');
    assert_eq!(t.next_rune(), 'b');
    assert_eq!(t.index(), 2);
}

#[test]
fn has_next_tracks_exhaustion() {
    let mut t = Tokenizer::new("x");
    assert!(t.has_next());
    t.next_rune();
    assert!(!t.has_next());
}

#[test]
fn empty_pattern_has_no_runes() {
    let t = Tokenizer::new("");
    assert!(!t.has_next());
    assert_eq!(t.index(), 0);
}

#[test]
fn put_back_rewinds_one_rune() {
    let mut t = Tokenizer::new("ab");
    assert_eq!(t.next_rune(), 'a');
    t.put_back();
    assert_eq!(t.index(), 0);
    assert_eq!(t.next_rune(), 'a');
}

#[test]
fn multibyte_runes_count_as_one() {
    let mut t = Tokenizer::new("é{∀");
    assert_eq!(t.next_rune(), 'é');
    assert_eq!(t.index(), 1);
    assert_eq!(t.next_rune(), '{');
    assert_eq!(t.next_rune(), '∀');
    assert!(!t.has_next());
}

// === next_unsigned_int ===

#[test]
fn unsigned_int_reads_digit_run() {
    let mut t = Tokenizer::new("123x");
    assert_eq!(t.next_unsigned_int(), 123);
    assert_eq!(t.next_rune(), 'x');
}

#[test]
fn unsigned_int_without_digits_is_zero() {
    let mut t = Tokenizer::new("x1");
    assert_eq!(t.next_unsigned_int(), 0);
    assert_eq!(t.next_rune(), 'x');
}

#[test]
fn unsigned_int_at_end_of_input() {
    let mut t = Tokenizer::new("42");
    assert_eq!(t.next_unsigned_int(), 42);
    assert!(!t.has_next());
}

#[test]
fn unsigned_int_leading_zeros() {
    let mut t = Tokenizer::new("007");
    assert_eq!(t.next_unsigned_int(), 7);
}

#[test]
fn unsigned_int_saturates() {
    let mut t = Tokenizer::new("99999999999999999999999999999999999999");
    assert_eq!(t.next_unsigned_int(), usize::MAX);
    assert!(!t.has_next());
}

// === next_identifier ===

#[test]
fn identifier_reads_word_run() {
    let mut t = Tokenizer::new("my_name:rest");
    assert_eq!(t.next_identifier(), "my_name");
    assert_eq!(t.next_rune(), ':');
}

#[test]
fn identifier_includes_digits() {
    let mut t = Tokenizer::new("field2}");
    assert_eq!(t.next_identifier(), "field2");
    assert_eq!(t.next_rune(), '}');
}

#[test]
fn identifier_stops_at_non_ascii() {
    let mut t = Tokenizer::new("naïve");
    assert_eq!(t.next_identifier(), "na");
    assert_eq!(t.next_rune(), 'ï');
}

#[test]
fn identifier_empty_when_no_match() {
    let mut t = Tokenizer::new("{a}");
    assert_eq!(t.next_identifier(), "");
    assert_eq!(t.index(), 0);
}

// === Classification ===

#[test]
fn identifier_start_classes() {
    assert!(is_identifier_start('a'));
    assert!(is_identifier_start('Z'));
    assert!(is_identifier_start('_'));
    assert!(!is_identifier_start('0'));
    assert!(!is_identifier_start('-'));
    assert!(!is_identifier_start('é'));
}

#[test]
fn identifier_part_classes() {
    assert!(is_identifier_part('a'));
    assert!(is_identifier_part('9'));
    assert!(is_identifier_part('_'));
    assert!(!is_identifier_part(':'));
    assert!(!is_identifier_part('}'));
}

// === Property tests ===

mod proptest_tokenizer {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unsigned_int_matches_digit_prefix(s in "[0-9]{0,12}[a-z}]*") {
            let mut t = Tokenizer::new(&s);
            let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
            let expected = if digits.is_empty() {
                0
            } else {
                digits.parse::<usize>().unwrap_or(usize::MAX)
            };
            prop_assert_eq!(t.next_unsigned_int(), expected);
            prop_assert_eq!(t.index(), digits.chars().count());
        }

        #[test]
        fn identifier_matches_word_prefix(s in "[A-Za-z0-9_]{0,8}[^A-Za-z0-9_]*") {
            let mut t = Tokenizer::new(&s);
            let expected: String = s.chars().take_while(|&c| is_identifier_part(c)).collect();
            prop_assert_eq!(t.next_identifier(), expected);
        }

        #[test]
        fn put_back_is_inverse_of_next_rune(s in ".{1,16}") {
            let mut t = Tokenizer::new(&s);
            while t.has_next() {
                let before = t.index();
                let r = t.next_rune();
                t.put_back();
                prop_assert_eq!(t.index(), before);
                prop_assert_eq!(t.next_rune(), r);
            }
        }
    }
}
