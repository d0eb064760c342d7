use crate::PipeRes;
use crate::err::PipeErr;
use crate::pipe::Pipeline;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// 随机数流水线的数据源，生成的流水线独占内部的随机数生成器。
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    /// 使用线程随机数生成器。
    pub fn new() -> Self {
        RandomSource { rng: rand::rng() }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource<StdRng> {
    /// 使用固定种子，相同种子产生相同的序列。
    pub fn seeded(seed: u64) -> Self {
        RandomSource { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomSource { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// `[0, 1)`内的无限浮点数序列。
    pub fn doubles<'a>(self) -> Pipeline<'a, f64>
    where
        R: 'a,
    {
        let mut rng = self.rng;
        Pipeline::generate(move || rng.random::<f64>())
    }

    pub fn doubles_n<'a>(self, n: usize) -> Pipeline<'a, f64>
    where
        R: 'a,
    {
        self.doubles().limit(n)
    }

    /// `[origin, bound)`内的无限浮点数序列，边界必须有限且`origin < bound`。
    pub fn doubles_in<'a>(self, origin: f64, bound: f64) -> PipeRes<Pipeline<'a, f64>>
    where
        R: 'a,
    {
        if !(origin < bound && (bound - origin).is_finite()) {
            Err(PipeErr::invalid_arg("doubles_in", "bound", format!("[{origin}, {bound})")))?
        }
        let mut rng = self.rng;
        Ok(Pipeline::generate(move || rng.random_range(origin..bound)))
    }

    /// 无限整数序列，取值覆盖`i32`全部范围。
    pub fn ints<'a>(self) -> Pipeline<'a, i32>
    where
        R: 'a,
    {
        let mut rng = self.rng;
        Pipeline::generate(move || rng.random::<i32>())
    }

    pub fn ints_n<'a>(self, n: usize) -> Pipeline<'a, i32>
    where
        R: 'a,
    {
        self.ints().limit(n)
    }

    /// `[origin, bound)`内的无限整数序列。
    pub fn ints_in<'a>(self, origin: i32, bound: i32) -> PipeRes<Pipeline<'a, i32>>
    where
        R: 'a,
    {
        if origin >= bound {
            Err(PipeErr::invalid_arg("ints_in", "bound", format!("[{origin}, {bound})")))?
        }
        let mut rng = self.rng;
        Ok(Pipeline::generate(move || rng.random_range(origin..bound)))
    }
}
