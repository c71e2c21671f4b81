//! 核心工具函数
//!
//! 提供项目中常用的工具函数，避免代码重复

use glam::Vec2;
use rand::{Rng, RngCore};
use std::ops::RangeInclusive;

/// 在给定范围内生成随机二维向量
///
/// 每个分量独立均匀采样。范围为空 (起点大于终点) 时取起点。
///
/// # 示例
///
/// ```rust
/// use particle_engine::core::utils::random_vec2;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let v = random_vec2(&mut rng, -50.0..=50.0, -100.0..=100.0);
/// assert!(v.x >= -50.0 && v.x <= 50.0);
/// assert!(v.y >= -100.0 && v.y <= 100.0);
/// ```
pub fn random_vec2(
    rng: &mut dyn RngCore,
    x: RangeInclusive<f32>,
    y: RangeInclusive<f32>,
) -> Vec2 {
    Vec2::new(sample_range(rng, x), sample_range(rng, y))
}

fn sample_range(rng: &mut dyn RngCore, range: RangeInclusive<f32>) -> f32 {
    if range.is_empty() {
        return *range.start();
    }
    rng.gen_range(range)
}

/// 将整数限制在 `[min, max]` 之内
pub fn clamp_usize(value: usize, min: usize, max: usize) -> usize {
    value.max(min).min(max)
}

/// 帧增量是否可用于推进模拟 (有限且非负)
pub fn is_valid_delta(delta_seconds: f32) -> bool {
    delta_seconds.is_finite() && delta_seconds >= 0.0
}
