//! Pure dimension math. No I/O.

/// Scale `original` so its longer edge is at most `max_edge`, keeping the
/// aspect ratio. Images already small enough are returned unchanged; nothing
/// is ever upscaled.
///
/// ```
/// # use artspace::imaging::fit_within;
/// assert_eq!(fit_within((4000, 3000), 1600), (1600, 1200));
/// assert_eq!(fit_within((600, 900), 1600), (600, 900));
/// ```
pub fn fit_within(original: (u32, u32), max_edge: u32) -> (u32, u32) {
    let (w, h) = original;
    let longer = w.max(h);
    if longer <= max_edge || longer == 0 {
        return original;
    }

    let ratio = max_edge as f64 / longer as f64;
    let scale = |side: u32| ((side as f64 * ratio).round() as u32).max(1);
    if w >= h {
        (max_edge, scale(h))
    } else {
        (scale(w), max_edge)
    }
}
