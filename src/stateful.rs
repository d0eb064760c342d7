use crate::PipeRes;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use std::mem;

/// 需要预先计算下一个元素才能回答“是否还有元素”的流水线级。
///
/// 实现者只需要给出`compute_next`，缓存与标记由[`StatefulCursor`]统一管理。
pub trait Lookahead {
    type Item;

    /// 计算下一个元素，返回`None`表示已经耗尽。
    ///
    /// `first`仅在首次计算时为`true`。返回`None`后不会再被调用。
    fn compute_next(&mut self, first: bool) -> Option<Self::Item>;
}

/// 预读槽位。
#[derive(Debug)]
enum Slot<E> {
    /// 尚未计算过
    Uninit,
    /// 缓存的元素已被取走，下次查询时重新计算
    Stale,
    Holding(E),
    /// 已耗尽，不可逆
    Exhausted,
}

/// 以“计算一次、缓存、标记”协议包装[`Lookahead`]的游标。
///
/// 在两次`advance`之间，无论`available`被调用多少次，`compute_next`至多执行一次。
#[derive(Debug)]
pub struct StatefulCursor<S: Lookahead> {
    stage: S,
    slot: Slot<S::Item>,
}

impl<S: Lookahead> StatefulCursor<S> {
    pub fn new(stage: S) -> Self {
        StatefulCursor { stage, slot: Slot::Uninit }
    }
}

impl<S: Lookahead> Cursor for StatefulCursor<S> {
    type Item = S::Item;

    fn available(&mut self) -> bool {
        let first = match self.slot {
            Slot::Holding(_) => return true,
            Slot::Exhausted => return false,
            Slot::Uninit => true,
            Slot::Stale => false,
        };
        self.slot = match self.stage.compute_next(first) {
            Some(value) => Slot::Holding(value),
            None => Slot::Exhausted,
        };
        matches!(self.slot, Slot::Holding(_))
    }

    fn advance(&mut self) -> PipeRes<Self::Item> {
        if !self.available() {
            return Err(PipeErr::Exhausted);
        }
        match mem::replace(&mut self.slot, Slot::Stale) {
            Slot::Holding(value) => Ok(value),
            other => {
                self.slot = other;
                Err(PipeErr::Exhausted)
            }
        }
    }
}

/// 基于任意迭代器的源，迭代器无法直接回答“是否还有元素”，因此需要预读。
#[derive(Debug)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I> {
    pub fn new(iter: I) -> Self {
        IterSource { iter }
    }
}

impl<I: Iterator> Lookahead for IterSource<I> {
    type Item = I::Item;

    fn compute_next(&mut self, _first: bool) -> Option<I::Item> {
        self.iter.next()
    }
}
