use crate::PipeRes;
use crate::buffer::SpinedBuffer;
use crate::config::BufferConfig;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use crate::num::Numeric;
use crate::pipe::Pipeline;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::Display;

/// 合并参数：`prefix` + 以`delimiter`分隔的元素 + `postfix`。
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Joining {
    pub delimiter: String,
    pub prefix: String,
    pub postfix: String,
}

impl Joining {
    pub fn new(delimiter: impl Into<String>) -> Joining {
        Joining { delimiter: delimiter.into(), prefix: String::new(), postfix: String::new() }
    }

    pub fn with_affix(delimiter: impl Into<String>, prefix: impl Into<String>, postfix: impl Into<String>) -> Joining {
        Joining { delimiter: delimiter.into(), prefix: prefix.into(), postfix: postfix.into() }
    }
}

/// 终止操作，每个操作都会消耗流水线，并且至多拉取一遍游标。
impl<'a, E: 'a> Pipeline<'a, E> {
    pub fn for_each(mut self, mut action: impl FnMut(E)) {
        while let Some(value) = self.cursor.pull() {
            action(value);
        }
    }

    /// 带单位元的归约（左折叠）。
    ///
    /// `combine`应满足结合律，且`identity`应为其单位元，此约定不做检查。
    pub fn fold<R>(mut self, identity: R, mut combine: impl FnMut(R, E) -> R) -> R {
        let mut res = identity;
        while let Some(value) = self.cursor.pull() {
            res = combine(res, value);
        }
        res
    }

    /// 以首个元素为初值的归约，流水线为空时返回`None`。
    pub fn reduce(mut self, mut combine: impl FnMut(E, E) -> E) -> Option<E> {
        let first = self.cursor.pull()?;
        Some(self.fold(first, &mut combine))
    }

    /// 由`supplier`创建容器，再对每个元素调用一次`accumulate`。
    pub fn collect<R>(mut self, supplier: impl FnOnce() -> R, mut accumulate: impl FnMut(&mut R, E)) -> R {
        let mut container = supplier();
        while let Some(value) = self.cursor.pull() {
            accumulate(&mut container, value);
        }
        container
    }

    pub fn count(self) -> usize {
        self.fold(0, |count, _| count + 1)
    }

    /// 多个最小元素时取首个。
    pub fn min_by(self, mut compare: impl FnMut(&E, &E) -> Ordering) -> Option<E> {
        self.reduce(|left, right| if compare(&right, &left) == Ordering::Less { right } else { left })
    }

    /// 多个最大元素时取首个。
    pub fn max_by(self, mut compare: impl FnMut(&E, &E) -> Ordering) -> Option<E> {
        self.reduce(|left, right| if compare(&right, &left) == Ordering::Greater { right } else { left })
    }

    /// 是否存在满足条件的元素，找到后立即停止拉取。
    pub fn any_match(mut self, mut predicate: impl FnMut(&E) -> bool) -> bool {
        while let Some(value) = self.cursor.pull() {
            if predicate(&value) {
                return true;
            }
        }
        false
    }

    /// 是否全部元素都满足条件，遇到首个不满足的元素后立即停止拉取。
    pub fn all_match(mut self, mut predicate: impl FnMut(&E) -> bool) -> bool {
        while let Some(value) = self.cursor.pull() {
            if !predicate(&value) {
                return false;
            }
        }
        true
    }

    /// 是否没有元素满足条件，遇到首个满足的元素后立即停止拉取。
    pub fn none_match(self, predicate: impl FnMut(&E) -> bool) -> bool {
        !self.any_match(predicate)
    }

    pub fn find_first(mut self) -> Option<E> {
        self.cursor.pull()
    }

    /// 获取唯一元素，至多拉取两个元素。
    ///
    /// 没有元素时返回[`PipeErr::NoElement`]，多于一个元素时返回[`PipeErr::MoreThanOne`]。
    pub fn single(self) -> PipeRes<E> {
        self.find_single()?.ok_or(PipeErr::NoElement)
    }

    /// 与[`Pipeline::single`]相同，但没有元素时返回`Ok(None)`。
    pub fn find_single(mut self) -> PipeRes<Option<E>> {
        let Some(candidate) = self.cursor.pull() else { return Ok(None) };
        if self.cursor.available() {
            #[cfg(feature = "tracing")]
            tracing::debug!("pipeline expected to contain a single element but found more");
            return Err(PipeErr::MoreThanOne);
        }
        Ok(Some(candidate))
    }

    /// 拉空流水线并展平为连续数组。
    pub fn to_vec(self) -> Vec<E> {
        self.to_vec_with(&BufferConfig::default())
    }

    pub fn to_vec_with(mut self, config: &BufferConfig) -> Vec<E> {
        let mut buffer = SpinedBuffer::with_config(*config);
        buffer.drain_cursor(&mut self.cursor);
        buffer.into_vec()
    }
}

impl<'a, E: Numeric + 'a> Pipeline<'a, E> {
    pub fn sum(self) -> E {
        self.fold(E::ZERO, E::add)
    }

    /// 算术平均值，流水线为空时返回`None`。
    pub fn average(self) -> Option<f64> {
        let (count, sum) = self.fold((0usize, 0f64), |(count, sum), value| (count + 1, sum + value.as_f64()));
        if count == 0 { None } else { Some(sum / count as f64) }
    }

    pub fn min(self) -> Option<E> {
        self.reduce(E::min_of)
    }

    pub fn max(self) -> Option<E> {
        self.reduce(E::max_of)
    }
}

impl<'a, E: Display + 'a> Pipeline<'a, E> {
    /// 合并为字符串。
    ///
    /// ```
    /// use lpipe::{Joining, Pipeline};
    ///
    /// let res = Pipeline::of(vec![1, 2, 3]).joined(&Joining::with_affix(", ", "[", "]"));
    /// assert_eq!(res, "[1, 2, 3]");
    /// ```
    pub fn joined(self, joining: &Joining) -> String {
        format!("{}{}{}", joining.prefix, self.into_iter().join(&joining.delimiter), joining.postfix)
    }
}
