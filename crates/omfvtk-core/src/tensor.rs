//! Tensor-axis expansion into node coordinates.

/// Expands per-axis cell widths into cumulative node coordinates.
///
/// Returns `widths.len() + 1` coordinates: the prefix sum of the widths,
/// starting at `origin`. Widths are not validated; a negative width simply
/// produces non-monotonic output, which is the caller's responsibility.
#[must_use]
pub fn grid_coordinates(origin: f64, widths: &[f64]) -> Vec<f64> {
    let mut coords = Vec::with_capacity(widths.len() + 1);
    coords.push(origin);
    let mut acc = origin;
    for &w in widths {
        acc += w;
        coords.push(acc);
    }
    coords
}
