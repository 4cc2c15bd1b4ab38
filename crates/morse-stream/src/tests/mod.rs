mod basic;

use super::{Encoder, EncoderConfig};

pub(super) const BASE_ONLY: EncoderConfig = EncoderConfig {
    extended: false,
    punctuation: false,
};

pub(super) const ALL_CLASSES: EncoderConfig = EncoderConfig {
    extended: true,
    punctuation: true,
};

/// Join letter codes with letter separators and words with word separators.
pub(super) fn morse(words: &[&[&str]]) -> String {
    words
        .iter()
        .map(|letters| letters.join("/"))
        .collect::<Vec<_>>()
        .join("//")
}

/// Drain everything the encoder has produced so far.
pub(super) fn drain(enc: &mut Encoder) -> String {
    let out = enc.read(enc.available());
    String::from_utf8(out).unwrap()
}

/// Feed `chunks` one write at a time, flush, and collect the output.
pub(super) fn encode_chunks(config: EncoderConfig, chunks: &[&[u8]]) -> String {
    let mut enc = Encoder::new(config);
    let mut out = String::new();
    for chunk in chunks {
        assert_eq!(enc.write(chunk), chunk.len());
        out.push_str(&drain(&mut enc));
    }
    enc.flush();
    out.push_str(&drain(&mut enc));
    out
}
