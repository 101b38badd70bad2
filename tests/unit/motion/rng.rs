use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn range_is_half_open_and_spread() {
    let mut rng = Rng64::new(7);
    let mut lo_half = 0;
    for _ in 0..2000 {
        let v = rng.range_f64(10.0, 30.0);
        assert!((10.0..30.0).contains(&v));
        if v < 20.0 {
            lo_half += 1;
        }
    }
    // Loose uniformity check: both halves get a fair share.
    assert!((800..1200).contains(&lo_half), "lower half count {lo_half}");
}

#[test]
fn empty_range_returns_lo() {
    let mut rng = Rng64::new(0);
    assert_eq!(rng.range_f64(5.0, 5.0), 5.0);
    assert_eq!(rng.range_f64(5.0, 1.0), 5.0);
}
