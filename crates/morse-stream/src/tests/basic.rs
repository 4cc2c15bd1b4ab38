use super::*;
use crate::{encode, encode_with};

// --- Single-write scenarios ---

#[test]
fn test_single_word() {
    assert_eq!(encode("aaa"), ".-/.-/.-");
}

#[test]
fn test_two_words() {
    assert_eq!(encode("aaa aaa"), ".-/.-/.-//.-/.-/.-");
}

#[test]
fn test_empty_input() {
    assert_eq!(encode(""), "");
    assert_eq!(encode("   \n\t "), "");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(encode("AaA"), encode("aaa"));
    assert_eq!(
        encode("Hello World"),
        morse(&[
            &["....", ".", ".-..", ".-..", "---"],
            &[".--", "---", ".-.", ".-..", "-.."],
        ])
    );
}

#[test]
fn test_punctuation_dropped_by_default() {
    assert_eq!(encode("!AaA"), ".-/.-/.-");
    assert_eq!(encode("!AaA"), encode("AaA"));
}

#[test]
fn test_sentence_base_only() {
    assert_eq!(
        encode_with("Encode this into Morse code.", BASE_ONLY),
        "./-./-.-./---/-.././/-/..../../...//../-./-/---//--/---/.-./..././/-.-./---/-../."
    );
}

#[test]
fn test_digits() {
    assert_eq!(
        encode("12305"),
        morse(&[&[".----", "..---", "...--", "-----", "....."]])
    );
}

#[test]
fn test_unconvertible_word_between_words() {
    // "!" is a word of its own and drops out entirely.
    assert_eq!(
        encode("avc ! cba"),
        morse(&[&[".-", "...-", "-.-."], &["-.-.", "-...", ".-"]])
    );
}

#[test]
fn test_unconvertible_inside_word_joins_letters() {
    assert_eq!(encode("ab!cd"), encode("abcd"));
    assert_eq!(encode("a#b"), ".-/-...");
}

#[test]
fn test_only_unconvertible() {
    assert_eq!(encode("!?# ~~ ¿"), "");
    assert_eq!(encode_with("čćž", BASE_ONLY), "");
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(encode("a    b"), ".-//-...");
    assert_eq!(encode("a\nb\tc"), ".-//-...//-.-.");
    assert_eq!(encode("  a  "), ".-");
}

#[test]
fn test_punctuation_enabled() {
    let config = EncoderConfig {
        extended: false,
        punctuation: true,
    };
    assert_eq!(
        encode_with("sos!", config),
        morse(&[&["...", "---", "...", "-.-.--"]])
    );
    assert_eq!(
        encode_with("a, b.", config),
        morse(&[&[".-", "--..--"], &["-...", ".-.-.-"]])
    );
}

#[test]
fn test_extended_letters() {
    assert_eq!(
        encode("če čebula"),
        morse(&[
            &["-.-..", "."],
            &["-.-..", ".", "-...", "..-", ".-..", ".-"],
        ])
    );
    assert_eq!(encode("ÄÖÜ"), encode("äöü"));
}

#[test]
fn test_extended_disabled() {
    assert_eq!(encode_with("čač", BASE_ONLY), ".-");
}

#[test]
fn test_all_classes() {
    assert_eq!(
        encode_with("še imela.", ALL_CLASSES),
        morse(&[&["----", "."], &["..", "--", ".", ".-..", ".-", ".-.-.-"]])
    );
}

#[test]
fn test_output_alphabet() {
    let out = encode_with("The quick (brown) fox: 42 jumps! Ž@ø", ALL_CLASSES);
    assert!(!out.is_empty());
    assert!(out.chars().all(|c| matches!(c, '.' | '-' | '/')));
    assert!(!out.contains("///"));
}

// --- Encoder state ---

#[test]
fn test_word_deferred_until_whitespace() {
    let mut enc = Encoder::default();
    enc.write(b"abc");
    assert_eq!(enc.available(), 0);
    assert_eq!(enc.pending_input(), 3);

    enc.write(b" ");
    assert_eq!(enc.pending_input(), 0);
    assert_eq!(drain(&mut enc), ".-/-.../-.-.");
}

#[test]
fn test_flush_emits_deferred_word() {
    let mut enc = Encoder::default();
    enc.write(b"sos");
    enc.flush();
    assert_eq!(enc.pending_input(), 0);
    assert_eq!(drain(&mut enc), ".../---/...");
}

#[test]
fn test_read_partial() {
    let mut enc = Encoder::default();
    enc.write(b"ab ");
    assert_eq!(enc.read(2), b".-");
    assert_eq!(enc.read(100), b"/-...");
    assert!(enc.read(10).is_empty());
}

#[test]
fn test_read_into() {
    let mut enc = Encoder::default();
    enc.write(b"e t ");
    let mut buf = [0u8; 8];
    let n = enc.read_into(&mut buf);
    assert_eq!(&buf[..n], b".//-");
    assert_eq!(enc.read_into(&mut buf), 0);
}

#[test]
fn test_invalid_utf8_dropped() {
    let mut enc = Encoder::default();
    enc.write(&[b'a', 0xFF, b'b', b' ', 0x80, b' ', b'c']);
    enc.flush();
    assert_eq!(drain(&mut enc), ".-/-...//-.-.");
}

#[test]
fn test_config_roundtrip() {
    let enc = Encoder::new(ALL_CLASSES);
    assert_eq!(enc.config(), ALL_CLASSES);
    assert_eq!(Encoder::default().config(), EncoderConfig::default());
}

#[test]
fn test_config_from_settings() {
    let settings = morse_core::settings::parse_settings_toml(
        "[encoder]\nextended = false\npunctuation = true\n",
    )
    .unwrap();
    assert_eq!(
        EncoderConfig::from_settings(&settings),
        EncoderConfig {
            extended: false,
            punctuation: true
        }
    );
}

#[test]
fn test_sessions_independent() {
    let mut a = Encoder::default();
    let mut b = Encoder::default();
    a.write(b"e ");
    b.write(b"t");
    a.write(b"e ");
    b.flush();
    assert_eq!(drain(&mut a), ".//.");
    assert_eq!(drain(&mut b), "-");
}
