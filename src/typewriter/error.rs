//! Typewriter configuration errors.

/// Errors raised when a typewriter is built from an unusable fragment set.
///
/// These are the only failures the typewriter knows about. Once a
/// [`FragmentSet`](super::FragmentSet) exists, every typewriter operation is
/// total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    #[error("Fragment set is empty: at least one fragment is required")]
    EmptyFragmentSet,

    #[error("Fragment {index} is empty: every fragment needs at least one character")]
    EmptyFragment { index: usize },
}
