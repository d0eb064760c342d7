use crate::buffer::SpinedBuffer;
use crate::cursor::Cursor;
use crate::stateful::{Lookahead, StatefulCursor};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::hash::Hash;

/// 物化后回放。
///
/// 排序、去重等操作需要知道完整序列，因此首次查询时会拉空上游并整体处理，
/// 在交出第一个元素之前缓存全部上游元素，这是惰性求值的例外。
pub struct Replay<C: Cursor, F> {
    upstream: C,
    name: &'static str,
    prepare: Option<F>,
    items: std::vec::IntoIter<C::Item>,
}

impl<C: Cursor, F> Replay<C, F>
where
    F: FnOnce(Vec<C::Item>) -> Vec<C::Item>,
{
    pub fn new(upstream: C, name: &'static str, prepare: F) -> Self {
        Replay { upstream, name, prepare: Some(prepare), items: Vec::new().into_iter() }
    }

    fn materialize(&mut self) {
        let Some(prepare) = self.prepare.take() else { return };
        let mut buffer = SpinedBuffer::new();
        buffer.drain_cursor(&mut self.upstream);
        #[cfg(feature = "tracing")]
        tracing::debug!(op = self.name, len = buffer.len(), "materialized upstream");
        self.items = prepare(buffer.into_vec()).into_iter();
    }
}

impl<C: Cursor, F> Lookahead for Replay<C, F>
where
    F: FnOnce(Vec<C::Item>) -> Vec<C::Item>,
{
    type Item = C::Item;

    fn compute_next(&mut self, first: bool) -> Option<C::Item> {
        if first {
            self.materialize();
        }
        self.items.next()
    }
}

/// 稳定排序。
pub fn sorted_by<C, F>(upstream: C, mut compare: F) -> StatefulCursor<impl Lookahead<Item = C::Item>>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    StatefulCursor::new(Replay::new(upstream, "sorted", move |mut items: Vec<C::Item>| {
        items.sort_by(&mut compare);
        items
    }))
}

/// 按元素自身去重，保留首次出现的顺序。
pub fn distinct<C>(upstream: C) -> StatefulCursor<impl Lookahead<Item = C::Item>>
where
    C: Cursor,
    C::Item: Eq + Hash,
{
    StatefulCursor::new(Replay::new(upstream, "distinct", |items: Vec<C::Item>| {
        let keep: Vec<bool> = {
            let mut seen = FxHashSet::default();
            items.iter().map(|item| seen.insert(item)).collect()
        };
        items.into_iter().zip(keep).filter_map(|(item, keep)| keep.then_some(item)).collect()
    }))
}

/// 按派生的键去重，保留每个键首次出现的元素。
pub fn distinct_by<C, K, F>(upstream: C, mut key: F) -> StatefulCursor<impl Lookahead<Item = C::Item>>
where
    C: Cursor,
    K: Eq + Hash,
    F: FnMut(&C::Item) -> K,
{
    StatefulCursor::new(Replay::new(upstream, "distinct", move |items: Vec<C::Item>| {
        let mut seen = FxHashSet::default();
        items.into_iter().filter(|item| seen.insert(key(item))).collect()
    }))
}

/// 随机重排。
pub fn shuffled<C, R>(upstream: C, mut rng: R) -> StatefulCursor<impl Lookahead<Item = C::Item>>
where
    C: Cursor,
    R: Rng,
{
    StatefulCursor::new(Replay::new(upstream, "shuffled", move |mut items: Vec<C::Item>| {
        items.shuffle(&mut rng);
        items
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Values;
    use crate::op::Peek;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    fn drain<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
        let mut res = Vec::new();
        while let Some(value) = cursor.pull() {
            res.push(value);
        }
        res
    }

    #[test]
    fn test_sorted_by() {
        assert_eq!(drain(sorted_by(Values::new(vec![3, 1, 2]), i32::cmp)), vec![1, 2, 3]);
        assert_eq!(drain(sorted_by(Values::new(vec![3, 1, 2]), |a: &i32, b: &i32| b.cmp(a))), vec![3, 2, 1]);
        assert_eq!(drain(sorted_by(Values::new(Vec::<i32>::new()), i32::cmp)), Vec::<i32>::new());
    }

    #[test]
    fn test_sorted_by_is_stable() {
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = drain(sorted_by(Values::new(items), |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0)));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_materializes_before_first_element() {
        let pulls = Cell::new(0);
        let source = Peek::new(Values::new(vec![5, 4, 3]), |_: &i32| pulls.set(pulls.get() + 1));
        let mut cursor = sorted_by(source, i32::cmp);
        assert_eq!(pulls.get(), 0);
        assert!(cursor.available());
        assert_eq!(pulls.get(), 3);
        assert_eq!(cursor.advance(), Ok(3));
    }

    #[test]
    fn test_distinct() {
        assert_eq!(drain(distinct(Values::new(vec![3, 1, 3, 2, 1]))), vec![3, 1, 2]);
        assert_eq!(drain(distinct(Values::new(vec!["a", "a"]))), vec!["a"]);
    }

    #[test]
    fn test_distinct_by() {
        let words = vec!["apple", "Avocado", "banana", "Blueberry", "cherry"];
        let res = drain(distinct_by(Values::new(words), |w: &&str| w.to_ascii_lowercase().chars().next()));
        assert_eq!(res, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut res = drain(shuffled(Values::new((0..50).collect()), StdRng::seed_from_u64(7)));
        assert_eq!(res.len(), 50);
        res.sort();
        assert_eq!(res, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_is_reproducible_with_seed() {
        let a = drain(shuffled(Values::new((0..20).collect::<Vec<i32>>()), StdRng::seed_from_u64(42)));
        let b = drain(shuffled(Values::new((0..20).collect::<Vec<i32>>()), StdRng::seed_from_u64(42)));
        assert_eq!(a, b);
    }
}
