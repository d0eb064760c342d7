use crate::PipeRes;

/// 拉取式游标，流水线中每一级都实现此特征，并独占其上游游标。
///
/// 约定：
/// - `available`可以连续调用任意次，在两次调用之间未调用`advance`时结果保持不变；
/// - `advance`只能在`available`最近一次返回`true`后调用，否则返回[`PipeErr::Exhausted`]；
/// - 游标只能从前往后消费一次，不支持回退。
///
/// [`PipeErr::Exhausted`]: crate::PipeErr::Exhausted
pub trait Cursor {
    type Item;

    /// 是否还有下一个元素。
    fn available(&mut self) -> bool;

    /// 前进并返回下一个元素。
    fn advance(&mut self) -> PipeRes<Self::Item>;

    /// 先检查再前进，没有可用元素时返回`None`。
    ///
    /// 所有内置的流水线级都通过此方法拉取上游，因此不会在不可用的游标上调用`advance`。
    ///
    /// 注意：`available`返回`true`后`advance`仍然失败时，错误被丢弃并视为序列结束，
    /// 自定义游标应保证`available`为`true`时`advance`一定成功。
    fn pull(&mut self) -> Option<Self::Item> {
        if !self.available() {
            return None;
        }
        match self.advance() {
            Ok(value) => Some(value),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "cursor failed to advance after reporting available");
                None
            }
        }
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn available(&mut self) -> bool {
        self.as_mut().available()
    }

    #[inline]
    fn advance(&mut self) -> PipeRes<Self::Item> {
        self.as_mut().advance()
    }
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn available(&mut self) -> bool {
        (**self).available()
    }

    #[inline]
    fn advance(&mut self) -> PipeRes<Self::Item> {
        (**self).advance()
    }
}

/// 把游标适配为标准库迭代器。
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub(crate) fn new(cursor: C) -> Self {
        CursorIter { cursor }
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }
}
