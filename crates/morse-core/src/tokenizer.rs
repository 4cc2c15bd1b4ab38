//! Streaming word tokenizer.
//!
//! [`scan_word`] extracts one whitespace-delimited word from a byte buffer
//! that may be only a prefix of the full input. It is a pure function: the
//! whitespace context carried between calls lives in [`SpaceState`], owned
//! by the caller.

use std::ops::Range;

use crate::utf8::{decode_char, incomplete_tail};

/// Whitespace context around the word being scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceState {
    /// The word was preceded by whitespace, possibly consumed by an earlier call.
    pub leading: bool,
    /// The word was followed by whitespace. Provisional when the buffer ran
    /// out before a delimiter was seen.
    pub trailing: bool,
}

/// Result of one [`scan_word`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Bytes of the buffer that are resolved and can be dropped.
    pub advance: usize,
    /// Byte range of the word, if one was completed.
    pub word: Option<Range<usize>>,
    /// Bytes of the trailing run left buffered past `advance`: the whole run
    /// when it was deferred, or its unfinished last character at end of input.
    /// Zero when whitespace terminated the word.
    pub held_back: usize,
    /// Bytes of a deferred run already searched for whitespace. Pass it back
    /// as `resume` on the next call, once more bytes have been appended.
    pub resume: usize,
    pub state: SpaceState,
}

fn is_space(bytes: &[u8]) -> (bool, usize) {
    let (c, width) = decode_char(bytes);
    (c.is_some_and(char::is_whitespace), width)
}

/// Scan the next word from `data`.
///
/// `at_eof` tells whether `data` is all the input available for now. Without
/// it, a word that runs to the end of `data` is deferred (no bytes past the
/// leading whitespace are consumed), since more of it may arrive. With it,
/// the run is returned as a word, minus any incomplete trailing character.
///
/// `resume` is the [`Scan::resume`] of the previous call when `data` starts
/// with the run that call deferred, and 0 otherwise. The search for the
/// terminating whitespace starts there, so a long run fed in small pieces is
/// searched once overall instead of once per piece.
pub fn scan_word(data: &[u8], at_eof: bool, carried: SpaceState, resume: usize) -> Scan {
    let mut start = 0;
    while start < data.len() {
        let (space, width) = is_space(&data[start..]);
        if !space {
            break;
        }
        start += width;
    }
    let leading = start > 0 || carried.trailing;

    let mut i = start.max(resume.min(data.len()));
    while i < data.len() {
        let (space, width) = is_space(&data[i..]);
        if space {
            return Scan {
                advance: i + width,
                word: Some(start..i),
                held_back: 0,
                resume: 0,
                state: SpaceState {
                    leading,
                    trailing: true,
                },
            };
        }
        i += width;
    }

    if at_eof && data.len() > start {
        let held_back = incomplete_tail(&data[start..]);
        let end = data.len() - held_back;
        if end > start {
            return Scan {
                advance: end,
                word: Some(start..end),
                held_back,
                resume: 0,
                state: SpaceState {
                    leading,
                    trailing: false,
                },
            };
        }
    }

    // Nothing resolved past the whitespace. Remember whether we sat on
    // whitespace so the next call sees it as leading space. An unfinished
    // last character may still turn out to be whitespace, so the next search
    // restarts at it.
    let held_back = data.len() - start;
    Scan {
        advance: start,
        word: None,
        held_back,
        resume: held_back - incomplete_tail(&data[start..]),
        state: SpaceState {
            leading,
            trailing: leading,
        },
    }
}

/// Iterate over every word [`scan_word`] can resolve in `data`.
///
/// Yields `(word_range, state)` pairs with ranges relative to `data`. After
/// the iterator is exhausted, [`Words::consumed`] is the number of resolved
/// bytes, and [`Words::state`] and [`Words::resume`] the context to carry
/// into the next buffer.
pub struct Words<'a> {
    data: &'a [u8],
    at_eof: bool,
    pos: usize,
    state: SpaceState,
    resume: usize,
    done: bool,
}

impl<'a> Words<'a> {
    pub fn new(data: &'a [u8], at_eof: bool, carried: SpaceState, resume: usize) -> Self {
        Self {
            data,
            at_eof,
            pos: 0,
            state: carried,
            resume,
            done: false,
        }
    }

    pub fn resume(&self) -> usize {
        self.resume
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }

    pub fn state(&self) -> SpaceState {
        self.state
    }
}

impl Iterator for Words<'_> {
    type Item = (Range<usize>, SpaceState);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let scan = scan_word(&self.data[self.pos..], self.at_eof, self.state, self.resume);
        let base = self.pos;
        self.pos += scan.advance;
        self.state = scan.state;
        self.resume = scan.resume;
        match scan.word {
            Some(range) => Some((base + range.start..base + range.end, scan.state)),
            None => {
                self.done = true;
                None
            }
        }
    }
}
