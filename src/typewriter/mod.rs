//! Keystroke-synchronized filler text.
//!
//! A [`Typewriter`] turns a small vocabulary of text fragments into an
//! unbounded character stream. The UI calls [`Typewriter::next_char`] once
//! per keystroke and shows the result instead of what the user typed.
//!
//! # How the buffer grows
//!
//! On construction (and on every reset) whole fragments are appended to the
//! filler buffer until it holds at least [`MIN_FILLER_LEN`] characters. When
//! the reader catches up with the end of the buffer, exactly one more whole
//! fragment is appended. Fragments are always appended whole before any of
//! their characters are read, so the stream is a prefix of a concatenation
//! of fragments.
//!
//! # Example
//!
//! ```
//! use entity::typewriter::{SequencePicker, Typewriter};
//!
//! let picker = SequencePicker::new(vec![0, 1]);
//! let mut tw = Typewriter::with_picker(["HELLO ", "WORLD "], picker).unwrap();
//! let typed: String = (0..15).map(|_| tw.next_char()).collect();
//! assert_eq!(typed, "HELLO WORLD HEL");
//! assert_eq!(tw.position(), 15);
//! ```

mod error;
mod picker;

pub use error::TypewriterError;
pub use picker::{
    picker_for_seed, BoxedPicker, FragmentPicker, SeededPicker, SequencePicker, ThreadRngPicker,
};

/// Minimum number of characters generated up front on every reset.
///
/// Enough filler for a typical answer. Longer answers are covered by lazy
/// extension, so this is not a limit.
pub const MIN_FILLER_LEN: usize = 100;

/// An ordered, non-empty vocabulary of non-empty fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: Vec<String>,
}

impl FragmentSet {
    /// Validate and collect fragments.
    ///
    /// Fails on an empty set or on any empty fragment: neither could ever
    /// produce a character.
    pub fn new<I, S>(fragments: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        if fragments.is_empty() {
            return Err(TypewriterError::EmptyFragmentSet);
        }
        if let Some(index) = fragments.iter().position(String::is_empty) {
            return Err(TypewriterError::EmptyFragment { index });
        }
        Ok(Self { fragments })
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment at `index`, wrapping around the set.
    fn get_wrapped(&self, index: usize) -> &str {
        &self.fragments[index % self.fragments.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    /// True when `text` is exactly one of the fragments.
    pub fn contains(&self, text: &str) -> bool {
        self.fragments.iter().any(|f| f == text)
    }
}

/// End of one appended fragment instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FragmentEnd {
    /// Character count of the buffer after this fragment.
    chars: usize,
    /// Byte length of the buffer after this fragment.
    bytes: usize,
}

/// Fragment-stream generator mapping keystrokes 1:1 onto filler characters.
pub struct Typewriter<P: FragmentPicker = ThreadRngPicker> {
    fragments: FragmentSet,
    picker: P,
    min_filler_len: usize,
    filler: String,
    filler_chars: usize,
    /// Byte offset of the read cursor into `filler`.
    offset: usize,
    /// Character offset of the read cursor.
    position: usize,
    /// One entry per appended fragment, ascending.
    fragment_ends: Vec<FragmentEnd>,
}

impl Typewriter<ThreadRngPicker> {
    /// Create a typewriter that picks fragments with the thread-local RNG.
    pub fn new<I, S>(fragments: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_picker(fragments, ThreadRngPicker)
    }
}

impl<P: FragmentPicker> Typewriter<P> {
    /// Create a typewriter with an injected fragment picker.
    pub fn with_picker<I, S>(fragments: I, picker: P) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_min_filler_len(fragments, picker, MIN_FILLER_LEN)
    }

    /// Create a typewriter that generates `min_filler_len` characters up
    /// front instead of [`MIN_FILLER_LEN`].
    pub fn with_min_filler_len<I, S>(
        fragments: I,
        picker: P,
        min_filler_len: usize,
    ) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments = FragmentSet::new(fragments)?;
        Ok(Self::build(fragments, picker, min_filler_len))
    }

    /// Create a typewriter from an already validated fragment set.
    pub fn from_set(fragments: FragmentSet, picker: P) -> Self {
        Self::build(fragments, picker, MIN_FILLER_LEN)
    }

    fn build(fragments: FragmentSet, picker: P, min_filler_len: usize) -> Self {
        tracing::debug!(
            fragments = fragments.len(),
            min_filler_len,
            "Creating typewriter"
        );
        let mut typewriter = Self {
            fragments,
            picker,
            min_filler_len,
            filler: String::new(),
            filler_chars: 0,
            offset: 0,
            position: 0,
            fragment_ends: Vec::new(),
        };
        typewriter.generate_filler();
        typewriter
    }

    /// Next filler character. Call once per keystroke.
    ///
    /// Appends one fresh fragment when the buffer is exhausted. Never fails.
    pub fn next_char(&mut self) -> char {
        loop {
            if let Some(ch) = self.filler[self.offset..].chars().next() {
                self.offset += ch.len_utf8();
                self.position += 1;
                return ch;
            }
            // Fragments are non-empty, so one append always makes a char readable.
            self.append_fragment();
            tracing::trace!(
                position = self.position,
                filler_len = self.filler_chars,
                "Extended filler buffer"
            );
        }
    }

    /// Start a fresh filler stream with the current fragments.
    pub fn reset(&mut self) {
        tracing::debug!(previous_position = self.position, "Resetting typewriter");
        self.generate_filler();
    }

    /// Swap the fragment set (e.g. after a language change) and reset.
    ///
    /// On error the typewriter keeps its previous fragments and state.
    pub fn reset_with<I, S>(&mut self, fragments: I) -> Result<(), TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fragments = FragmentSet::new(fragments)?;
        self.reset();
        Ok(())
    }

    /// Number of characters read since the last reset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unread tail of the fragment instance under the cursor.
    ///
    /// Empty when the cursor is at the end of the buffer.
    pub fn remaining_fragment(&self) -> &str {
        let index = self
            .fragment_ends
            .partition_point(|end| end.chars <= self.position);
        match self.fragment_ends.get(index) {
            Some(end) => &self.filler[self.offset..end.bytes],
            None => "",
        }
    }

    /// The whole filler buffer generated so far, read and unread.
    pub fn filler(&self) -> &str {
        &self.filler
    }

    pub fn fragments(&self) -> &FragmentSet {
        &self.fragments
    }

    fn generate_filler(&mut self) {
        self.filler.clear();
        self.filler_chars = 0;
        self.fragment_ends.clear();
        self.offset = 0;
        self.position = 0;
        while self.filler_chars < self.min_filler_len {
            self.append_fragment();
        }
    }

    fn append_fragment(&mut self) {
        let index = self.picker.pick(self.fragments.len());
        let fragment = self.fragments.get_wrapped(index);
        self.filler.push_str(fragment);
        self.filler_chars += fragment.chars().count();
        self.fragment_ends.push(FragmentEnd {
            chars: self.filler_chars,
            bytes: self.filler.len(),
        });
    }

    /// Appended fragment instances, in order.
    #[cfg(test)]
    fn fragment_instances(&self) -> Vec<&str> {
        let mut start = 0;
        self.fragment_ends
            .iter()
            .map(|end| {
                let piece = &self.filler[start..end.bytes];
                start = end.bytes;
                piece
            })
            .collect()
    }
}

impl<P: FragmentPicker> std::fmt::Debug for Typewriter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typewriter")
            .field("fragments", &self.fragments.len())
            .field("min_filler_len", &self.min_filler_len)
            .field("filler_len", &self.filler_chars)
            .field("position", &self.position)
            .finish()
    }
}
