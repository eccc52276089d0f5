//! Distributes a fixed question total across the requested categories.

/// Ordered per-category question counts, summing exactly to the target total
pub type QuotaPlan = Vec<(String, usize)>;

/// Split `total` questions across `categories`, preserving input order.
///
/// Every category gets `total / n`; the last category in the input order also
/// absorbs the remainder `total % n`. Which category absorbs the remainder is
/// therefore determined by the caller's ordering, and callers rely on that.
///
/// Callers must truncate the list to at most `total` categories first; the
/// result is meaningless otherwise.
pub fn allocate(categories: &[String], total: usize) -> QuotaPlan {
    debug_assert!(!categories.is_empty());
    debug_assert!(categories.len() <= total);

    let n = categories.len();
    let base = total / n;
    let remainder = total % n;

    categories
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let count = if i == n - 1 { base + remainder } else { base };
            (key.clone(), count)
        })
        .collect()
}
