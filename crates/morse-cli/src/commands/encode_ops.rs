use std::io::{self, BufWriter, ErrorKind, Read, Write};

use tracing::{debug, debug_span};

use morse_stream::{Encoder, EncoderConfig};

const CHUNK_SIZE: usize = 8192;

/// Stream `reader` through an encoder into `writer`.
///
/// Output is forwarded after every chunk, so long inputs are encoded without
/// being held in memory. The encoder is flushed at end of input. Returns the
/// number of bytes written.
pub fn pipe<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    config: EncoderConfig,
) -> io::Result<u64> {
    let _span = debug_span!("pipe", ?config).entered();
    let mut enc = Encoder::new(config);
    let mut buf = [0u8; CHUNK_SIZE];
    let mut read_total = 0u64;
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        read_total += n as u64;
        enc.write(&buf[..n]);
        written += io::copy(&mut enc, writer)?;
    }
    enc.flush();
    written += io::copy(&mut enc, writer)?;
    debug!(read_total, written, "input exhausted");
    Ok(written)
}

/// Encode stdin to stdout, optionally followed by a newline.
pub fn encode_stdio(config: EncoderConfig, newline: bool) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    pipe(&mut stdin, &mut out, config)?;
    if newline {
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[u8], config: EncoderConfig) -> String {
        let mut reader = input;
        let mut out = Vec::new();
        let written = pipe(&mut reader, &mut out, config).unwrap();
        assert_eq!(written as usize, out.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_pipe_basic() {
        assert_eq!(run(b"sos sos", EncoderConfig::default()), ".../---/...//.../---/...");
    }

    #[test]
    fn test_pipe_empty() {
        assert_eq!(run(b"", EncoderConfig::default()), "");
    }

    #[test]
    fn test_pipe_trailing_newline_input() {
        assert_eq!(run(b"e t\n", EncoderConfig::default()), ".//-");
    }

    #[test]
    fn test_pipe_large_input_crosses_chunks() {
        // The multi-byte character straddles the first chunk boundary.
        let mut input = vec![b'e'; CHUNK_SIZE - 1];
        input.extend_from_slice("č t".as_bytes());
        let out = run(&input, EncoderConfig::default());
        let expected = format!("{}/-.-..//-", vec!["."; CHUNK_SIZE - 1].join("/"));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_pipe_respects_config() {
        let config = EncoderConfig {
            extended: false,
            punctuation: true,
        };
        assert_eq!(run("č!".as_bytes(), config), "-.-.--");
    }

    /// Reader that yields one byte per call and fails once with `Interrupted`.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            match self.data.split_first() {
                Some((&b, rest)) if !buf.is_empty() => {
                    buf[0] = b;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_pipe_retries_interrupted_and_trickles() {
        let mut reader = Trickle {
            data: "čač bcčdef".as_bytes(),
            interrupted: false,
        };
        let mut out = Vec::new();
        pipe(&mut reader, &mut out, EncoderConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            morse_stream::encode("čač bcčdef")
        );
    }
}
