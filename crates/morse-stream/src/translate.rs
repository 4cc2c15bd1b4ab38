use tracing::{debug, debug_span};

use morse_core::charset::simple_upper;
use morse_core::tokenizer::Words;
use morse_core::utf8::decode_char;

use super::types::LETTER_SEPARATOR;
use super::Encoder;

impl Encoder {
    /// Resolve buffered input into words and encode them.
    ///
    /// With `at_eof` the trailing unterminated word is encoded too; otherwise
    /// it stays in the input buffer.
    pub(super) fn translate(&mut self, at_eof: bool) {
        let _span = debug_span!("translate", buffered = self.input.len(), at_eof).entered();
        let input = std::mem::take(&mut self.input);
        let mut words = Words::new(&input, at_eof, self.state.spaces, self.state.resume);
        let mut emitted = 0usize;
        for (range, spaces) in words.by_ref() {
            let clean = self.clean_word(&input[range]);
            if self.emit_word(&clean, spaces.leading) {
                emitted += 1;
            }
        }
        let consumed = words.consumed();
        self.state.spaces = words.state();
        self.state.resume = words.resume();
        self.input = input;
        self.input.drain(..consumed);
        debug!(
            emitted,
            consumed,
            pending = self.input.len(),
            resume = self.state.resume,
            leading = self.state.spaces.leading,
            trailing = self.state.spaces.trailing
        );
    }

    /// Uppercased convertible characters of `word`, in order. Invalid UTF-8
    /// and unconvertible characters are dropped.
    fn clean_word(&self, word: &[u8]) -> Vec<char> {
        let mut clean = Vec::with_capacity(word.len());
        let mut i = 0;
        while i < word.len() {
            let (c, width) = decode_char(&word[i..]);
            if let Some(c) = c.filter(|&c| self.policy.is_convertible(c)) {
                clean.push(simple_upper(c));
            }
            i += width;
        }
        clean
    }

    /// Write the separator and codes for one clean word. Returns false when
    /// the word was empty and nothing was written.
    fn emit_word(&mut self, clean: &[char], leading_space: bool) -> bool {
        if clean.is_empty() {
            self.state.skip_word(leading_space);
            return false;
        }
        if let Some(sep) = self.state.separator(leading_space) {
            self.output.extend(sep);
        }
        for (i, &c) in clean.iter().enumerate() {
            if i > 0 {
                self.output.extend(LETTER_SEPARATOR);
            }
            let code = self
                .table
                .code_for(c)
                .unwrap_or_else(|| panic!("{c:?} passed the policy but has no Morse code"));
            self.output.extend(code.as_bytes());
        }
        true
    }
}
