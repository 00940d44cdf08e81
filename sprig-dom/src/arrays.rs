use tracing::trace;

/// Collect the present entries of `items` into a new `Vec`, keeping their
/// order. Only `None` is dropped; `Some(0)`, `Some("")` and `Some(false)`
/// are kept like any other value.
pub fn without_nulls<T>(items: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    let items = items.into_iter();
    let mut kept = Vec::with_capacity(items.size_hint().0);
    let mut dropped = 0usize;
    for item in items {
        match item {
            Some(v) => kept.push(v),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        trace!(dropped, kept = kept.len(), "dropped absent entries");
    }
    kept
}
