use crate::sim::Tick;

#[test]
fn tick_advances_by_one() {
    assert_eq!(Tick::ZERO.next(), Tick(1));
    assert_eq!(Tick(41).next(), Tick(42));
}

#[test]
fn tick_next_saturates_on_overflow() {
    assert_eq!(Tick(u64::MAX).next(), Tick(u64::MAX));
}
