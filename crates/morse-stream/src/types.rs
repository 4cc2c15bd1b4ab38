use morse_core::settings::Settings;
use morse_core::tokenizer::SpaceState;

/// Character policy for an encoding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Convert accented Latin letters from the ITU extensions.
    pub extended: bool,
    /// Convert punctuation marks.
    pub punctuation: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            extended: true,
            punctuation: false,
        }
    }
}

impl EncoderConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            extended: settings.encoder.extended,
            punctuation: settings.encoder.punctuation,
        }
    }
}

pub(crate) const LETTER_SEPARATOR: &[u8] = b"/";
/// Between words that were adjacent in the input (split by a flush).
pub(crate) const JOINED_WORD_SEPARATOR: &[u8] = b"/";
/// Between words separated by whitespace.
pub(crate) const WORD_SEPARATOR: &[u8] = b"//";

/// Cross-call state of an encoding session.
#[derive(Debug, Clone, Default)]
pub(crate) struct EncoderState {
    /// A non-empty word has been emitted; later words need a separator.
    pub(crate) not_first_word: bool,
    pub(crate) spaces: SpaceState,
    /// Leading bytes of the deferred input already searched for whitespace.
    pub(crate) resume: usize,
    /// A dropped (fully unconvertible) word was preceded by whitespace, so
    /// the next emitted word is separated by a word gap.
    pub(crate) gap_pending: bool,
}

impl EncoderState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Separator to write before a non-empty word, updating the state.
    pub(crate) fn separator(&mut self, leading_space: bool) -> Option<&'static [u8]> {
        let gap = leading_space || self.gap_pending;
        self.gap_pending = false;
        if !self.not_first_word {
            self.not_first_word = true;
            return None;
        }
        Some(if gap {
            WORD_SEPARATOR
        } else {
            JOINED_WORD_SEPARATOR
        })
    }

    /// Record a word that had nothing convertible in it.
    pub(crate) fn skip_word(&mut self, leading_space: bool) {
        if leading_space {
            self.gap_pending = true;
        }
    }
}
