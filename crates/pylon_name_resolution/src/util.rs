//! A single shared accumulation helper used by every sub-resolver that walks
//! a list of sibling nodes (§5: "the multiset of errors produced must be
//! identical regardless of traversal order").
//!
//! `Option<Vec<T>>`'s `FromIterator<Option<T>>` impl stops pulling from its
//! source iterator at the first `None` it sees, so collecting a `Map`
//! directly into `Option<Vec<T>>` would never even call the resolver closure
//! for later siblings once an earlier one fails — their diagnostics would
//! never be pushed. Materializing the per-item results into a plain `Vec`
//! first forces every sibling's resolver to run (and push its diagnostic)
//! before the all-or-nothing collapse happens.

/// Forces full evaluation of `results`, then collapses to `None` if any
/// entry was `None`.
pub(crate) fn collect_all<T>(results: impl Iterator<Item = Option<T>>) -> Option<Vec<T>> {
    let results: Vec<Option<T>> = results.collect();
    results.into_iter().collect()
}
