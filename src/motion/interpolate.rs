//! Clamped linear mapping between ranges.

/// Map `value` from the `from` range onto the `to` range, clamping at the ends.
///
/// `from` may be given in either order. A degenerate `from` range maps
/// everything below it to `to.0` and everything else to `to.1`.
#[inline]
pub fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let (from_lo, from_hi) = from;
    let span = from_hi - from_lo;
    if span == 0.0 {
        return if value < from_lo { to.0 } else { to.1 };
    }
    let t = ((value - from_lo) / span).clamp(0.0, 1.0);
    lerp(to.0, to.1, t)
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
