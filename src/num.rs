use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::hash::Hash;

/// 数值元素，为求和、平均、最值以及数值排序去重提供统一的语义。
///
/// 整数求和按补码回绕；浮点数的最值与`NaN`、`-0.0`的处理与`Math.min`/`Math.max`一致：
/// 任一侧为`NaN`时结果为`NaN`，且`-0.0`小于`0.0`。
pub trait Numeric: Copy {
    /// 可哈希、可全序比较的键，浮点数使用[`OrderedFloat`]。
    type Key: Eq + Hash + Ord;

    const ZERO: Self;

    fn add(self, other: Self) -> Self;
    fn as_f64(self) -> f64;
    fn min_of(self, other: Self) -> Self;
    fn max_of(self, other: Self) -> Self;
    fn key(self) -> Self::Key;

    /// 全序比较。
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Key = $t;

                const ZERO: Self = 0;

                #[inline]
                fn add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn min_of(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn max_of(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                #[inline]
                fn key(self) -> Self::Key {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Key = OrderedFloat<$t>;

                const ZERO: Self = 0.0;

                #[inline]
                fn add(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn min_of(self, other: Self) -> Self {
                    if self.is_nan() || other.is_nan() {
                        <$t>::NAN
                    } else if self == other {
                        // 0.0 == -0.0，取带负号的一侧
                        if self.is_sign_negative() { self } else { other }
                    } else if self < other {
                        self
                    } else {
                        other
                    }
                }

                fn max_of(self, other: Self) -> Self {
                    if self.is_nan() || other.is_nan() {
                        <$t>::NAN
                    } else if self == other {
                        if self.is_sign_positive() { self } else { other }
                    } else if self > other {
                        self
                    } else {
                        other
                    }
                }

                #[inline]
                fn key(self) -> Self::Key {
                    OrderedFloat(self)
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
