use super::*;

#[test]
fn linear_is_identity_within_bounds() {
    assert_eq!(Ease::Linear.apply(0.0), 0.0);
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::Linear.apply(1.0), 1.0);
}

#[test]
fn every_curve_hits_the_boundaries() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::OutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_cubic_midpoint() {
    assert_eq!(Ease::OutCubic.apply(0.5), 0.875);
}

#[test]
fn progress_is_clamped_before_easing() {
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
}
