/// Wrap `x` into `[0, bound)` on a torus.
///
/// `x` must lie in `[-bound, 2 * bound)`; anything further out is a caller bug. Stages keep every
/// composed offset inside that window with [`fold_offset`].
pub fn wrap(x: i64, bound: i64) -> i64 {
    debug_assert!(
        bound > 0 && x >= -bound && x < 2 * bound,
        "wrap({x}, {bound}) outside [-bound, 2*bound)"
    );
    if x < 0 {
        return x + bound;
    }
    if x >= bound {
        return x - bound;
    }
    x
}

/// Reduce an arbitrary offset into `[0, bound)`.
///
/// `wrap(x + fold_offset(off, bound), bound)` equals `wrap(x + off, bound)` whenever the latter is
/// defined, and stays defined for offsets of any size.
pub fn fold_offset(offset: i64, bound: i64) -> i64 {
    offset.rem_euclid(bound)
}

/// Coordinate `x` shifted by `offset` on a torus of width `bound`.
pub(crate) fn shift(x: usize, offset: i64, bound: usize) -> usize {
    let bound = bound as i64;
    wrap(x as i64 + fold_offset(offset, bound), bound) as usize
}

/// Brighten a channel while reducing contrast, so nothing clips.
pub fn brighten(channel: u8, add: u8) -> u8 {
    let c = u32::from(channel);
    let add = u32::from(add);
    let v = c - c * add / 255 + add;
    u8::try_from(v).unwrap_or(u8::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
