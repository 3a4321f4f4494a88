use std::ops::RangeInclusive;
use rand::Rng;

/// 随机数来源
///
/// 生成器和展示用指标都通过它取随机数，测试时可以注入固定种子或预设序列。
pub trait EntropySource {
    /// [0, 1) 区间内均匀分布的浮点数
    fn unit(&mut self) -> f64;

    /// 闭区间内均匀分布的整数
    fn int_in(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<R: Rng> EntropySource for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn int_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.random_range(range)
    }
}
