use super::*;

#[test]
fn wrap_lands_in_range_for_whole_window() {
    for bound in [1i64, 2, 5, 17] {
        for x in -bound..2 * bound {
            let w = wrap(x, bound);
            assert!((0..bound).contains(&w), "wrap({x}, {bound}) = {w}");
            assert_eq!(w, x.rem_euclid(bound));
        }
    }
}

#[test]
fn wrap_is_identity_in_range() {
    for x in 0..9 {
        assert_eq!(wrap(x, 9), x);
    }
}

#[test]
fn wrap_single_pixel_always_zero() {
    for x in [-1i64, 0, 1] {
        assert_eq!(wrap(x, 1), 0);
    }
}

#[test]
fn fold_matches_wrap_inside_window() {
    let bound = 7i64;
    for x in 0..bound {
        for off in (-x - bound)..(2 * bound - x) {
            assert_eq!(
                wrap(x + fold_offset(off, bound), bound),
                wrap(x + off, bound)
            );
        }
    }
}

#[test]
fn shift_handles_offsets_far_outside_window() {
    assert_eq!(shift(1, 1_000_003, 4), (1 + 1_000_003) % 4);
    assert_eq!(shift(0, -9, 4), 3);
    assert_eq!(shift(0, i64::MIN, 1), 0);
}

#[test]
fn brighten_zero_is_identity() {
    for c in 0..=255u8 {
        assert_eq!(brighten(c, 0), c);
    }
}

#[test]
fn brighten_full_saturates() {
    for c in 0..=255u8 {
        assert_eq!(brighten(c, 255), 255);
    }
}

#[test]
fn brighten_is_monotonic_in_add() {
    for c in 0..=255u8 {
        let mut prev = brighten(c, 0);
        for add in 1..=255u8 {
            let next = brighten(c, add);
            assert!(next >= prev, "brighten({c}, {add}) decreased");
            prev = next;
        }
    }
}

#[test]
fn brighten_default_amount_values() {
    assert_eq!(brighten(10, 37), 46);
    assert_eq!(brighten(20, 37), 55);
    assert_eq!(brighten(30, 37), 63);
}
