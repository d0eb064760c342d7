//! 谓词组合。

/// 取反。
pub fn not<E: ?Sized>(mut predicate: impl FnMut(&E) -> bool) -> impl FnMut(&E) -> bool {
    move |value| !predicate(value)
}

/// 逻辑与，短路：`left`不满足时不调用`right`。
pub fn and<E: ?Sized>(
    mut left: impl FnMut(&E) -> bool, mut right: impl FnMut(&E) -> bool,
) -> impl FnMut(&E) -> bool {
    move |value| left(value) && right(value)
}

/// 逻辑或，短路：`left`满足时不调用`right`。
pub fn or<E: ?Sized>(
    mut left: impl FnMut(&E) -> bool, mut right: impl FnMut(&E) -> bool,
) -> impl FnMut(&E) -> bool {
    move |value| left(value) || right(value)
}

/// 逻辑异或，两侧都会被调用。
pub fn xor<E: ?Sized>(
    mut left: impl FnMut(&E) -> bool, mut right: impl FnMut(&E) -> bool,
) -> impl FnMut(&E) -> bool {
    move |value| left(value) ^ right(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_not() {
        let mut odd = not(|x: &i32| x % 2 == 0);
        assert!(odd(&1));
        assert!(!odd(&2));
    }

    #[test]
    fn test_and_or_xor() {
        let positive = |x: &i32| *x > 0;
        let even = |x: &i32| x % 2 == 0;
        let mut both = and(positive, even);
        assert!(both(&2));
        assert!(!both(&1));
        assert!(!both(&-2));
        let mut either = or(positive, even);
        assert!(either(&1));
        assert!(either(&-2));
        assert!(!either(&-1));
        let mut one = xor(positive, even);
        assert!(one(&1));
        assert!(one(&-2));
        assert!(!one(&2));
        assert!(!one(&-1));
    }

    #[test]
    fn test_short_circuit() {
        let calls = Cell::new(0);
        let mut both = and(|_: &str| false, |_: &str| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(!both("x"));
        let mut either = or(|_: &str| true, |_: &str| {
            calls.set(calls.get() + 1);
            false
        });
        assert!(either("x"));
        assert_eq!(calls.get(), 0);
    }
}
