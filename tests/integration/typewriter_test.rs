//! Typewriter behavior through the public API.

use entity::i18n::filler_fragments;
use entity::typewriter::{SequencePicker, Typewriter, TypewriterError, MIN_FILLER_LEN};
use entity::Language;

use crate::helpers::is_fragment_stream;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn empty_fragment_set_is_a_configuration_error() {
    let result = Typewriter::new(Vec::<&str>::new());
    assert!(matches!(result, Err(TypewriterError::EmptyFragmentSet)));
}

#[test]
fn error_message_names_the_problem() {
    let err = Typewriter::new(["A ", ""]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Fragment 1 is empty: every fragment needs at least one character"
    );
}

// ============================================================================
// Stream properties
// ============================================================================

#[test]
fn ten_thousand_reads_never_fail() {
    let mut tw = Typewriter::new(["HELLO ", "WORLD ", "TEST ", "FOO ", "BAR "]).unwrap();
    let text: String = (0..10_000).map(|_| tw.next_char()).collect();
    assert_eq!(text.chars().count(), 10_000);
    assert_eq!(tw.position(), 10_000);
}

#[test]
fn fifteen_chars_are_made_of_whole_words() {
    let fragments = ["HELLO ", "WORLD "];
    for _ in 0..50 {
        let mut tw = Typewriter::new(fragments).unwrap();
        let text: String = (0..15).map(|_| tw.next_char()).collect();
        assert!(is_fragment_stream(&text, &fragments), "{:?}", text);
    }
}

#[test]
fn stream_checker_rejects_corrupted_text() {
    assert!(is_fragment_stream("HELLO WORLD HEL", &["HELLO ", "WORLD "]));
    assert!(!is_fragment_stream("HELLO WORLX HEL", &["HELLO ", "WORLD "]));
}

#[test]
fn position_restarts_after_reset() {
    let mut tw = Typewriter::new(["ABC "]).unwrap();
    for _ in 0..250 {
        tw.next_char();
    }
    tw.reset();
    assert_eq!(tw.position(), 0);
    assert_eq!(tw.next_char(), 'A');
}

#[test]
fn reading_past_initial_buffer_extends_it() {
    let mut tw = Typewriter::new(["SIXCH "]).unwrap();
    let initial = tw.filler().chars().count();
    assert!(initial >= MIN_FILLER_LEN);
    let text: String = (0..initial + 1).map(|_| tw.next_char()).collect();
    assert!(text.ends_with('S'));
    assert_eq!(tw.filler().chars().count(), initial + 6);
}

#[test]
fn deterministic_picker_gives_exact_output() {
    let picker = SequencePicker::new(vec![1, 0, 1]);
    let mut tw = Typewriter::with_picker(["HELLO ", "WORLD "], picker).unwrap();
    let text: String = (0..15).map(|_| tw.next_char()).collect();
    assert_eq!(text, "WORLD HELLO WOR");
}

// ============================================================================
// Language tables
// ============================================================================

#[test]
fn both_languages_produce_valid_streams() {
    for lang in Language::ALL {
        let fragments = filler_fragments(lang);
        let mut tw = Typewriter::new(fragments.iter().copied()).unwrap();
        let text: String = (0..1_000).map(|_| tw.next_char()).collect();
        assert!(is_fragment_stream(&text, fragments), "{}: {:?}", lang, text);
    }
}

#[test]
fn language_switch_swaps_vocabulary() {
    let mut tw = Typewriter::new(filler_fragments(Language::En).iter().copied()).unwrap();
    tw.reset_with(filler_fragments(Language::PtBr).iter().copied())
        .unwrap();
    let text: String = (0..500).map(|_| tw.next_char()).collect();
    assert!(is_fragment_stream(&text, filler_fragments(Language::PtBr)));
}
