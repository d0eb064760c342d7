mod replay;
mod take_drop;

pub use replay::{Replay, distinct, distinct_by, shuffled, sorted_by};
pub use take_drop::{DropWhile, TakeWhile};

use crate::PipeRes;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use crate::stateful::Lookahead;

/// 过滤：查询时持续拉取上游并丢弃不满足条件的元素，直到找到满足条件的元素或上游耗尽。
pub struct Filter<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub fn new(upstream: C, predicate: P) -> Self {
        Filter { upstream, predicate }
    }
}

impl<C, P> Lookahead for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn compute_next(&mut self, _first: bool) -> Option<C::Item> {
        while let Some(value) = self.upstream.pull() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }
}

/// 映射：无状态透传，前进时对上游元素应用转换函数。
pub struct Map<C, F> {
    upstream: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(upstream: C, mapper: F) -> Self {
        Map { upstream, mapper }
    }
}

impl<C, R, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn available(&mut self) -> bool {
        self.upstream.available()
    }

    #[inline]
    fn advance(&mut self) -> PipeRes<R> {
        self.upstream.advance().map(&mut self.mapper)
    }
}

/// 展开：每个上游元素展开为一个内层游标，跳过空的内层游标。
pub struct FlatMap<C, F, I> {
    upstream: C,
    expand: F,
    inner: Option<I>,
}

impl<C, F, I> FlatMap<C, F, I> {
    pub fn new(upstream: C, expand: F) -> Self {
        FlatMap { upstream, expand, inner: None }
    }
}

impl<C, F, I> Cursor for FlatMap<C, F, I>
where
    C: Cursor,
    F: FnMut(C::Item) -> I,
    I: Cursor,
{
    type Item = I::Item;

    fn available(&mut self) -> bool {
        if self.inner.as_mut().is_some_and(Cursor::available) {
            return true;
        }
        self.inner = None;
        while let Some(value) = self.upstream.pull() {
            let mut inner = (self.expand)(value);
            if inner.available() {
                self.inner = Some(inner);
                return true;
            }
        }
        false
    }

    fn advance(&mut self) -> PipeRes<I::Item> {
        match self.inner.as_mut() {
            Some(inner) => inner.advance(),
            None => Err(PipeErr::Exhausted),
        }
    }
}

/// 窥视：元素被拉取时执行一次动作，元素原样透传。
pub struct Peek<C, F> {
    upstream: C,
    action: F,
}

impl<C, F> Peek<C, F> {
    pub fn new(upstream: C, action: F) -> Self {
        Peek { upstream, action }
    }
}

impl<C, F> Cursor for Peek<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn available(&mut self) -> bool {
        self.upstream.available()
    }

    fn advance(&mut self) -> PipeRes<C::Item> {
        let value = self.upstream.advance()?;
        (self.action)(&value);
        Ok(value)
    }
}

/// 采样：每`step`个元素保留第一个。
pub struct Sample<C> {
    upstream: C,
    step: usize,
}

impl<C> Sample<C> {
    /// `step`必须大于1，0和1由调用方处理。
    pub(crate) fn new(upstream: C, step: usize) -> Self {
        Sample { upstream, step }
    }
}

impl<C: Cursor> Cursor for Sample<C> {
    type Item = C::Item;

    fn available(&mut self) -> bool {
        self.upstream.available()
    }

    fn advance(&mut self) -> PipeRes<C::Item> {
        let value = self.upstream.advance()?;
        let mut skipped = 1;
        while skipped < self.step && self.upstream.pull().is_some() {
            skipped += 1;
        }
        Ok(value)
    }
}

/// 限制：最多交出`max`个元素，不会从上游多拉取任何元素。
pub struct Limit<C> {
    upstream: C,
    max: usize,
    taken: usize,
}

impl<C> Limit<C> {
    pub fn new(upstream: C, max: usize) -> Self {
        Limit { upstream, max, taken: 0 }
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    type Item = C::Item;

    fn available(&mut self) -> bool {
        self.taken < self.max && self.upstream.available()
    }

    fn advance(&mut self) -> PipeRes<C::Item> {
        if self.taken >= self.max {
            return Err(PipeErr::Exhausted);
        }
        let value = self.upstream.advance()?;
        self.taken += 1;
        Ok(value)
    }
}

/// 跳过：首次查询时丢弃前`n`个元素（上游不足时提前停止），之后透传。
pub struct Skip<C> {
    upstream: C,
    remaining: usize,
}

impl<C> Skip<C> {
    pub fn new(upstream: C, n: usize) -> Self {
        Skip { upstream, remaining: n }
    }
}

impl<C: Cursor> Skip<C> {
    fn skip_prefix(&mut self) {
        while self.remaining > 0 && self.upstream.pull().is_some() {
            self.remaining -= 1;
        }
        self.remaining = 0;
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn available(&mut self) -> bool {
        self.skip_prefix();
        self.upstream.available()
    }

    fn advance(&mut self) -> PipeRes<C::Item> {
        self.skip_prefix();
        self.upstream.advance()
    }
}

/// 分组：把连续的最多`size`个元素合并为一组，最后一组可能不足`size`个。
pub struct Chunks<C> {
    upstream: C,
    size: usize,
}

impl<C> Chunks<C> {
    /// `size`必须大于0，由调用方检查。
    pub(crate) fn new(upstream: C, size: usize) -> Self {
        Chunks { upstream, size }
    }
}

impl<C: Cursor> Cursor for Chunks<C> {
    type Item = Vec<C::Item>;

    fn available(&mut self) -> bool {
        self.upstream.available()
    }

    fn advance(&mut self) -> PipeRes<Vec<C::Item>> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.upstream.pull() {
                Some(value) => chunk.push(value),
                None => break,
            }
        }
        if chunk.is_empty() { Err(PipeErr::Exhausted) } else { Ok(chunk) }
    }
}
