//! Batch progress math

/// Percentage of the batch done after the file at 1-based `index` of `total`.
///
/// Returns `(index / total) * 100`, clamped to `[0, 100]`. An empty batch
/// reports 0.
///
/// # Examples
/// ```
/// use word_pdf_common::percent;
///
/// assert_eq!(percent(1, 2), 50.0);
/// assert_eq!(percent(2, 2), 100.0);
/// ```
pub fn percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((index as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}
