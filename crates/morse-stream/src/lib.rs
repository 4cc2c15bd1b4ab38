//! Incremental text to ITU Morse code encoder.
//!
//! `Encoder` accepts UTF-8 text in chunks of any size, resolves words across
//! chunk boundaries and buffers the Morse output until it is read. The output
//! is independent of how the input was chunked.

mod io_traits;
mod oneshot;
mod translate;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use morse_core::charset::ConvertPolicy;
use morse_core::table::MorseTable;

pub use oneshot::{encode, encode_with};
pub use types::EncoderConfig;

use types::EncoderState;

/// Stateful encoding session.
///
/// Configuration is fixed at construction. Each encoder owns its buffers and
/// state, so independent sessions can run side by side.
pub struct Encoder {
    policy: ConvertPolicy,
    table: &'static MorseTable,

    /// Bytes not yet resolved into words (a deferred word, an unfinished character).
    input: Vec<u8>,
    /// Encoded bytes waiting to be read.
    output: VecDeque<u8>,

    state: EncoderState,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            policy: ConvertPolicy::new(config.punctuation, config.extended),
            table: MorseTable::global(),
            input: Vec::new(),
            output: VecDeque::new(),
            state: EncoderState::new(),
        }
    }

    pub fn config(&self) -> EncoderConfig {
        EncoderConfig {
            extended: self.policy.extended(),
            punctuation: self.policy.punctuation(),
        }
    }

    /// Append `bytes` and encode every word they complete.
    ///
    /// A word running to the end of the buffered input is held until
    /// whitespace arrives or [`Encoder::flush`] is called. Always accepts the
    /// whole slice.
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        self.input.extend_from_slice(bytes);
        self.translate(false);
        bytes.len()
    }

    /// End the current segment: encode the held word, if any.
    ///
    /// An unfinished multi-byte character stays buffered for the next write.
    /// Writing may continue afterwards; a word split by a flush is joined to
    /// its continuation with a letter separator, so the output matches the
    /// unsplit input.
    pub fn flush(&mut self) {
        self.translate(true);
    }

    /// Drain up to `max` encoded bytes.
    pub fn read(&mut self, max: usize) -> Vec<u8> {
        let n = max.min(self.output.len());
        self.output.drain(..n).collect()
    }

    /// Drain encoded bytes into `buf`, returning how many were copied.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.output.len());
        for (dst, src) in buf.iter_mut().zip(self.output.drain(..n)) {
            *dst = src;
        }
        n
    }

    /// Number of encoded bytes ready to be read.
    pub fn available(&self) -> usize {
        self.output.len()
    }

    /// Number of input bytes buffered but not yet encoded.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}
