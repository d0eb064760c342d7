use crate::PipeRes;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use std::marker::PhantomData;
use std::mem;

/// 空源。
#[derive(Debug)]
pub struct Empty<E>(PhantomData<E>);

impl<E> Empty<E> {
    pub fn new() -> Self {
        Empty(PhantomData)
    }
}

impl<E> Default for Empty<E> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<E> Cursor for Empty<E> {
    type Item = E;

    fn available(&mut self) -> bool {
        false
    }

    fn advance(&mut self) -> PipeRes<E> {
        Err(PipeErr::Exhausted)
    }
}

/// 固定值源，按顺序逐个交出。
#[derive(Debug)]
pub struct Values<E> {
    values: std::vec::IntoIter<E>,
}

impl<E> Values<E> {
    pub fn new(values: Vec<E>) -> Self {
        Values { values: values.into_iter() }
    }
}

impl<E> Cursor for Values<E> {
    type Item = E;

    fn available(&mut self) -> bool {
        self.values.len() > 0
    }

    fn advance(&mut self) -> PipeRes<E> {
        self.values.next().ok_or(PipeErr::Exhausted)
    }
}

/// 单值源。
#[derive(Debug)]
pub struct Once<E> {
    value: Option<E>,
}

impl<E> Once<E> {
    pub fn new(value: E) -> Self {
        Once { value: Some(value) }
    }
}

impl<E> Cursor for Once<E> {
    type Item = E;

    fn available(&mut self) -> bool {
        self.value.is_some()
    }

    fn advance(&mut self) -> PipeRes<E> {
        self.value.take().ok_or(PipeErr::Exhausted)
    }
}

/// 无限源，每次拉取调用一次生产函数。
pub struct Generate<F> {
    supplier: F,
}

impl<F> Generate<F> {
    pub fn new(supplier: F) -> Self {
        Generate { supplier }
    }
}

impl<E, F> Cursor for Generate<F>
where
    F: FnMut() -> E,
{
    type Item = E;

    fn available(&mut self) -> bool {
        true
    }

    fn advance(&mut self) -> PipeRes<E> {
        Ok((self.supplier)())
    }
}

/// 无限源：`seed`, `step(seed)`, `step(step(seed))`, ...
///
/// 每次拉取先交出当前值，再计算下一个值。
pub struct Iterate<E, F> {
    current: E,
    step: F,
}

impl<E, F> Iterate<E, F> {
    pub fn new(seed: E, step: F) -> Self {
        Iterate { current: seed, step }
    }
}

impl<E, F> Cursor for Iterate<E, F>
where
    F: FnMut(&E) -> E,
{
    type Item = E;

    fn available(&mut self) -> bool {
        true
    }

    fn advance(&mut self) -> PipeRes<E> {
        let next = (self.step)(&self.current);
        Ok(mem::replace(&mut self.current, next))
    }
}

/// 串联两个游标，先耗尽`first`再切换到`second`，切换后不再回头。
#[derive(Debug)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    first_is_current: bool,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Concat { first, second, first_is_current: true }
    }
}

impl<A, B> Cursor for Concat<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn available(&mut self) -> bool {
        if self.first_is_current {
            if self.first.available() {
                return true;
            }
            self.first_is_current = false;
        }
        self.second.available()
    }

    fn advance(&mut self) -> PipeRes<A::Item> {
        if self.first_is_current { self.first.advance() } else { self.second.advance() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn drain<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
        let mut res = Vec::new();
        while let Some(value) = cursor.pull() {
            res.push(value);
        }
        res
    }

    #[test]
    fn test_empty() {
        let mut cursor = Empty::<i32>::new();
        assert!(!cursor.available());
        assert_eq!(cursor.advance(), Err(PipeErr::Exhausted));
    }

    #[test]
    fn test_values() {
        assert_eq!(drain(Values::new(vec![1, 2, 3])), vec![1, 2, 3]);
        let mut cursor = Values::new(vec!["a"]);
        assert!(cursor.available());
        assert!(cursor.available());
        assert_eq!(cursor.advance(), Ok("a"));
        assert!(!cursor.available());
        assert_eq!(cursor.advance(), Err(PipeErr::Exhausted));
    }

    #[test]
    fn test_once() {
        assert_eq!(drain(Once::new(42)), vec![42]);
    }

    #[test]
    fn test_generate_only_calls_supplier_on_advance() {
        let calls = Cell::new(0);
        let mut cursor = Generate::new(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert!(cursor.available());
        assert!(cursor.available());
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.advance(), Ok(1));
        assert_eq!(cursor.advance(), Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_iterate() {
        let mut cursor = Iterate::new(1, |x: &i32| x + 5);
        let res: Vec<_> = (0..4).filter_map(|_| cursor.pull()).collect();
        assert_eq!(res, vec![1, 6, 11, 16]);

        let mut cursor = Iterate::new(String::from("a"), |s: &String| format!("{s}a"));
        assert_eq!(cursor.advance().as_deref(), Ok("a"));
        assert_eq!(cursor.advance().as_deref(), Ok("aa"));
    }

    #[test]
    fn test_concat() {
        assert_eq!(drain(Concat::new(Values::new(vec![1, 2]), Values::new(vec![3, 4]))), vec![1, 2, 3, 4]);
        assert_eq!(drain(Concat::new(Empty::new(), Values::new(vec![3]))), vec![3]);
        assert_eq!(drain(Concat::new(Values::new(vec![1]), Empty::new())), vec![1]);
        assert_eq!(drain(Concat::new(Empty::<i32>::new(), Empty::new())), Vec::<i32>::new());
    }

    #[test]
    fn test_concat_never_switches_back() {
        let mut cursor = Concat::new(Values::new(vec![1]), Values::new(vec![2]));
        assert_eq!(cursor.pull(), Some(1));
        assert!(cursor.available());
        assert!(!cursor.first_is_current);
        assert_eq!(cursor.pull(), Some(2));
        assert!(!cursor.available());
    }
}
