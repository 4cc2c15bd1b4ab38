use super::{Encoder, EncoderConfig};

/// Encode a complete string with the default configuration.
pub fn encode(s: &str) -> String {
    encode_with(s, EncoderConfig::default())
}

/// Encode a complete string in a fresh session.
pub fn encode_with(s: &str, config: EncoderConfig) -> String {
    let mut enc = Encoder::new(config);
    let n = enc.write(s.as_bytes());
    assert_eq!(n, s.len(), "couldn't encode whole string {s:?}");
    enc.flush();
    let out = enc.read(enc.available());
    // Output alphabet is ASCII ('.', '-', '/').
    String::from_utf8(out).expect("Morse output must be ASCII")
}
