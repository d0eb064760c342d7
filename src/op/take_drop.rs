use crate::cursor::Cursor;
use crate::stateful::Lookahead;

/// 持续保留满足条件的元素，条件首次不满足后终止，之后不再拉取上游。
pub struct TakeWhile<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> TakeWhile<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        TakeWhile { upstream, predicate }
    }
}

impl<C, P> Lookahead for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn compute_next(&mut self, _first: bool) -> Option<C::Item> {
        let value = self.upstream.pull()?;
        if (self.predicate)(&value) { Some(value) } else { None }
    }
}

/// 持续丢弃满足条件的元素，直到条件首次不满足，之后全部透传。
pub struct DropWhile<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> DropWhile<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        DropWhile { upstream, predicate }
    }
}

impl<C, P> Lookahead for DropWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn compute_next(&mut self, first: bool) -> Option<C::Item> {
        if !first {
            return self.upstream.pull();
        }
        while let Some(value) = self.upstream.pull() {
            if !(self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Generate, Values};
    use crate::stateful::StatefulCursor;
    use std::cell::Cell;

    fn drain<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
        let mut res = Vec::new();
        while let Some(value) = cursor.pull() {
            res.push(value);
        }
        res
    }

    #[test]
    fn test_take_while() {
        let cursor = StatefulCursor::new(TakeWhile::new(Values::new(vec![1, 2, 3, 4, 1, 2]), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), vec![1, 2]);
        let cursor = StatefulCursor::new(TakeWhile::new(Values::new(vec![5, 1]), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), Vec::<i32>::new());
        let cursor = StatefulCursor::new(TakeWhile::new(Values::new(vec![1, 2]), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), vec![1, 2]);
    }

    #[test]
    fn test_take_while_termination_is_sticky() {
        let calls = Cell::new(0);
        let mut cursor = StatefulCursor::new(TakeWhile::new(Values::new(vec![1, 9, 1, 1]), |x: &i32| {
            calls.set(calls.get() + 1);
            *x < 3
        }));
        assert_eq!(cursor.pull(), Some(1));
        assert!(!cursor.available());
        assert!(!cursor.available());
        assert_eq!(cursor.pull(), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_take_while_on_infinite_source() {
        let mut n = 0;
        let source = Generate::new(move || {
            n += 1;
            n
        });
        assert_eq!(drain(StatefulCursor::new(TakeWhile::new(source, |x: &i32| *x <= 4))), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_drop_while() {
        let cursor = StatefulCursor::new(DropWhile::new(Values::new(vec![1, 2, 3, 4, 1, 2]), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), vec![3, 4, 1, 2]);
        let cursor = StatefulCursor::new(DropWhile::new(Values::new(vec![1, 2]), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), Vec::<i32>::new());
        let cursor = StatefulCursor::new(DropWhile::new(Values::new(Vec::new()), |x: &i32| *x < 3));
        assert_eq!(drain(cursor), Vec::<i32>::new());
    }

    #[test]
    fn test_drop_while_consults_predicate_only_for_prefix() {
        let calls = Cell::new(0);
        let cursor = StatefulCursor::new(DropWhile::new(Values::new(vec![1, 2, 5, 1, 1]), |x: &i32| {
            calls.set(calls.get() + 1);
            *x < 3
        }));
        assert_eq!(drain(cursor), vec![5, 1, 1]);
        assert_eq!(calls.get(), 3);
    }
}
