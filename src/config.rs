use crate::PipeRes;
use crate::err::PipeErr;

/// 分块容量的指数上限，单个分块最多容纳`2^30`个元素。
pub const MAX_CHUNK_POWER: u32 = 30;
/// 默认首个分块的容量指数，即16个元素。
pub const MIN_CHUNK_POWER: u32 = 4;

/// 可增长缓冲区的分块配置。
///
/// 第`k`个分块的容量为`2^min(first_chunk_power + max(k, 1) - 1, max_chunk_power)`，
/// 即前两个分块容量相同，之后逐个翻倍，直到达到上限。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BufferConfig {
    first_chunk_power: u32,
    max_chunk_power: u32,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig { first_chunk_power: MIN_CHUNK_POWER, max_chunk_power: MAX_CHUNK_POWER }
    }
}

impl BufferConfig {
    pub fn new(first_chunk_power: u32, max_chunk_power: u32) -> PipeRes<BufferConfig> {
        if max_chunk_power > MAX_CHUNK_POWER {
            Err(PipeErr::invalid_arg("buffer", "max_chunk_power", max_chunk_power))?
        }
        if first_chunk_power > max_chunk_power {
            Err(PipeErr::invalid_arg("buffer", "first_chunk_power", first_chunk_power))?
        }
        Ok(BufferConfig { first_chunk_power, max_chunk_power })
    }

    /// 根据预期的元素数量选择首个分块大小，使其能一次容纳全部元素（不超过上限）。
    pub fn for_capacity(expected: usize) -> BufferConfig {
        let power = expected
            .max(1)
            .checked_next_power_of_two()
            .map_or(MAX_CHUNK_POWER, |cap| cap.trailing_zeros())
            .clamp(MIN_CHUNK_POWER, MAX_CHUNK_POWER);
        BufferConfig { first_chunk_power: power, max_chunk_power: MAX_CHUNK_POWER }
    }

    pub fn first_chunk_power(&self) -> u32 {
        self.first_chunk_power
    }

    pub fn max_chunk_power(&self) -> u32 {
        self.max_chunk_power
    }

    /// 第`index`个分块的容量。
    #[inline]
    pub(crate) fn chunk_capacity(&self, index: usize) -> usize {
        let grow = index.saturating_sub(1).min(MAX_CHUNK_POWER as usize) as u32;
        1usize << (self.first_chunk_power + grow).min(self.max_chunk_power)
    }
}
