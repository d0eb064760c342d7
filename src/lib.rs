//! 惰性、拉取式的序列处理流水线。
//!
//! 流水线由一串[`Cursor`]组成：数据源位于最内层，每个中间操作包装一个上游游标，
//! 终止操作从最外层开始逐个拉取元素。在终止操作执行之前不会发生任何计算。
//!
//! ```
//! use lpipe::Pipeline;
//!
//! let res = Pipeline::iterate(1, |x| x + 1).filter(|x| x % 3 == 0).map(|x| x * x).limit(4).to_vec();
//! assert_eq!(res, vec![9, 36, 81, 144]);
//! ```
//!
//! 流水线是一次性的：任何操作都会消耗流水线本身。

mod buffer;
pub mod condition;
mod config;
mod cursor;
mod err;
pub mod input;
mod num;
pub mod op;
mod output;
mod pipe;
mod random;
mod stateful;

pub use buffer::SpinedBuffer;
pub use config::{BufferConfig, MAX_CHUNK_POWER, MIN_CHUNK_POWER};
pub use cursor::{Cursor, CursorIter};
pub use err::PipeErr;
pub use num::Numeric;
pub use output::Joining;
pub use pipe::Pipeline;
pub use random::RandomSource;
pub use stateful::{IterSource, Lookahead, StatefulCursor};

pub type PipeRes<T> = Result<T, PipeErr>;
