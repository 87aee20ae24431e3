//! Tag applicability predicate.

/// Returns `true` when `tag` is selected by `tags`.
///
/// An empty tag list applies to everything.  Used for slot platforms, intent
/// platforms and intent environments alike.
pub fn applies_to<S: AsRef<str>>(tags: &[S], tag: &str) -> bool {
    tags.is_empty() || tags.iter().any(|t| t.as_ref() == tag)
}
