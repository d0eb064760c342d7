use crate::PipeRes;
use crate::condition;
use crate::cursor::{Cursor, CursorIter};
use crate::err::PipeErr;
use crate::input::{Concat, Empty, Generate, Iterate, Once, Values};
use crate::num::Numeric;
use crate::op::{self, Chunks, DropWhile, Filter, FlatMap, Limit, Map, Peek, Sample, Skip, TakeWhile};
use crate::stateful::{IterSource, StatefulCursor};
use rand::Rng;
use std::cmp::Ordering;
use std::hash::Hash;

/// 惰性流水线。
///
/// 流水线独占一个游标，所有中间操作都消耗`self`并返回包装了新游标的新流水线，
/// 终止操作消耗`self`并拉取游标得到结果。在终止操作开始拉取之前不会做任何计算。
///
/// 流水线只能单线程、单次消费；排序与去重类操作会在交出首个元素前缓存全部上游元素。
pub struct Pipeline<'a, E> {
    pub(crate) cursor: Box<dyn Cursor<Item = E> + 'a>,
}

impl<'a, E: 'a> Pipeline<'a, E> {
    /// 使用自定义游标构造流水线。
    pub fn from_cursor(cursor: impl Cursor<Item = E> + 'a) -> Self {
        Pipeline { cursor: Box::new(cursor) }
    }

    /// 取出内部游标。
    pub fn into_cursor(self) -> Box<dyn Cursor<Item = E> + 'a> {
        self.cursor
    }

    /* **************************************** 生成 **************************************** */

    pub fn empty() -> Self {
        Pipeline::from_cursor(Empty::new())
    }

    pub fn of(values: Vec<E>) -> Self {
        Pipeline::from_cursor(Values::new(values))
    }

    pub fn once(value: E) -> Self {
        Pipeline::from_cursor(Once::new(value))
    }

    /// 基于任意迭代器构造流水线，迭代器同样按需拉取。
    pub fn of_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = E>,
        I::IntoIter: 'a,
    {
        Pipeline::from_cursor(StatefulCursor::new(IterSource::new(iter.into_iter())))
    }

    /// 无限流水线，每次拉取调用一次`supplier`。
    pub fn generate(supplier: impl FnMut() -> E + 'a) -> Self {
        Pipeline::from_cursor(Generate::new(supplier))
    }

    /// 无限流水线：`seed`, `step(seed)`, `step(step(seed))`, ...
    ///
    /// 例如：
    /// ```
    /// use lpipe::Pipeline;
    ///
    /// let res = Pipeline::iterate(1, |x| x + 5).limit(4).to_vec();
    /// assert_eq!(res, vec![1, 6, 11, 16]);
    /// ```
    pub fn iterate(seed: E, step: impl FnMut(&E) -> E + 'a) -> Self {
        Pipeline::from_cursor(Iterate::new(seed, step))
    }

    /// 与[`Pipeline::iterate`]相同，但在`predicate`首次不满足时结束。
    pub fn iterate_while(seed: E, predicate: impl FnMut(&E) -> bool + 'a, step: impl FnMut(&E) -> E + 'a) -> Self {
        Pipeline::iterate(seed, step).take_while(predicate)
    }

    /// 串联两条流水线。
    pub fn concat(first: Pipeline<'a, E>, second: Pipeline<'a, E>) -> Self {
        Pipeline::from_cursor(Concat::new(first.cursor, second.cursor))
    }

    /* **************************************** 访问 **************************************** */

    /// 应用任意自定义操作，可以返回新的流水线，也可以返回任意终止结果。
    ///
    /// ```
    /// use lpipe::Pipeline;
    ///
    /// let skip_and_limit = |p: Pipeline<'static, i32>| p.skip(1).limit(2);
    /// assert_eq!(Pipeline::of(vec![1, 2, 3, 4]).custom(skip_and_limit).to_vec(), vec![2, 3]);
    /// ```
    pub fn custom<R>(self, function: impl FnOnce(Self) -> R) -> R {
        function(self)
    }

    pub fn peek(self, action: impl FnMut(&E) + 'a) -> Self {
        Pipeline::from_cursor(Peek::new(self.cursor, action))
    }

    /* **************************************** 转换 **************************************** */

    pub fn map<R: 'a>(self, mapper: impl FnMut(E) -> R + 'a) -> Pipeline<'a, R> {
        Pipeline::from_cursor(Map::new(self.cursor, mapper))
    }

    /// 每个元素展开为一条流水线，空流水线被跳过。
    pub fn flat_map<R: 'a>(self, mut mapper: impl FnMut(E) -> Pipeline<'a, R> + 'a) -> Pipeline<'a, R> {
        Pipeline::from_cursor(FlatMap::new(self.cursor, move |value| mapper(value).cursor))
    }

    /* **************************************** 减少 **************************************** */

    pub fn filter(self, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        Pipeline::from_cursor(StatefulCursor::new(Filter::new(self.cursor, predicate)))
    }

    pub fn filter_not(self, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        self.filter(condition::not(predicate))
    }

    /// 持续保留满足条件的元素，直到条件首次不满足。
    pub fn take_while(self, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        Pipeline::from_cursor(StatefulCursor::new(TakeWhile::new(self.cursor, predicate)))
    }

    /// 持续丢弃满足条件的元素，直到条件首次不满足。
    pub fn drop_while(self, predicate: impl FnMut(&E) -> bool + 'a) -> Self {
        Pipeline::from_cursor(StatefulCursor::new(DropWhile::new(self.cursor, predicate)))
    }

    /// 保留前`max`个元素，`max`为0时直接返回空流水线。
    pub fn limit(self, max: usize) -> Self {
        if max == 0 {
            return Pipeline::empty();
        }
        Pipeline::from_cursor(Limit::new(self.cursor, max))
    }

    /// 丢弃前`n`个元素，`n`为0时原样返回。
    pub fn skip(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        Pipeline::from_cursor(Skip::new(self.cursor, n))
    }

    /// 每`step`个元素保留第一个。
    ///
    /// `step`为0时立即返回错误，为1时原样返回。
    pub fn sample(self, step: usize) -> PipeRes<Self> {
        match step {
            0 => Err(PipeErr::invalid_arg("sample", "step", step)),
            1 => Ok(self),
            _ => Ok(Pipeline::from_cursor(Sample::new(self.cursor, step))),
        }
    }

    /// 按顺序每`size`个元素分为一组，最后一组可能不足`size`个。
    pub fn chunks(self, size: usize) -> PipeRes<Pipeline<'a, Vec<E>>> {
        if size == 0 {
            return Err(PipeErr::invalid_arg("chunks", "size", size));
        }
        Ok(Pipeline::from_cursor(Chunks::new(self.cursor, size)))
    }

    /* **************************************** 调整位置 **************************************** */

    /// 稳定排序。排序会在交出首个元素前缓存全部上游元素。
    pub fn sorted_by(self, compare: impl FnMut(&E, &E) -> Ordering + 'a) -> Self {
        Pipeline::from_cursor(op::sorted_by(self.cursor, compare))
    }

    pub fn sorted_by_key<K: Ord>(self, mut key: impl FnMut(&E) -> K + 'a) -> Self {
        self.sorted_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// 随机重排，同样会缓存全部上游元素。
    pub fn shuffled(self, rng: impl Rng + 'a) -> Self {
        Pipeline::from_cursor(op::shuffled(self.cursor, rng))
    }

    /// 按派生的键去重，保留每个键首次出现的元素。
    pub fn distinct_by<K: Eq + Hash + 'a>(self, key: impl FnMut(&E) -> K + 'a) -> Self {
        Pipeline::from_cursor(op::distinct_by(self.cursor, key))
    }
}

impl<'a, E: Ord + 'a> Pipeline<'a, E> {
    /// 按自然顺序稳定排序。
    pub fn sorted(self) -> Self {
        self.sorted_by(E::cmp)
    }
}

impl<'a, E: Eq + Hash + 'a> Pipeline<'a, E> {
    /// 去重，保留首次出现的顺序。
    pub fn distinct(self) -> Self {
        Pipeline::from_cursor(op::distinct(self.cursor))
    }
}

impl<'a, E: Numeric + 'a> Pipeline<'a, E> {
    /// 按数值全序排序，浮点数中`-0.0`排在`0.0`之前，`NaN`排在最后。
    pub fn sorted_num(self) -> Self {
        self.sorted_by(E::total_cmp)
    }

    /// 按数值去重，浮点数的`NaN`视为相等。
    pub fn distinct_num(self) -> Self {
        self.distinct_by(|value| value.key())
    }
}

impl<'a, E> IntoIterator for Pipeline<'a, E> {
    type Item = E;
    type IntoIter = CursorIter<Box<dyn Cursor<Item = E> + 'a>>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.cursor)
    }
}
