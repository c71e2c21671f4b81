//! 缓动函数
//!
//! 所有缓动函数都是 `[0,1] -> [0,1]` 的纯函数，且满足 `ease(0) = 0`、`ease(1) = 1`。
//! 补间动画只依赖这两个端点，中间的曲线形状可以任意替换。

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EaseFunction {
    /// 线性
    #[default]
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    /// 先减速再加速
    OutInQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl EaseFunction {
    pub const ALL: [EaseFunction; 11] = [
        EaseFunction::Linear,
        EaseFunction::InSine,
        EaseFunction::OutSine,
        EaseFunction::InOutSine,
        EaseFunction::InQuad,
        EaseFunction::OutQuad,
        EaseFunction::InOutQuad,
        EaseFunction::OutInQuad,
        EaseFunction::InCubic,
        EaseFunction::OutCubic,
        EaseFunction::InOutCubic,
    ];

    /// 计算缓动值，输入会先被限制到 `[0,1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        // 端点精确返回，避免三角函数带来的舍入误差
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            EaseFunction::Linear => t,
            EaseFunction::InSine => 1.0 - (t * PI / 2.0).cos(),
            EaseFunction::OutSine => (t * PI / 2.0).sin(),
            EaseFunction::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            EaseFunction::InQuad => t * t,
            EaseFunction::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EaseFunction::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EaseFunction::OutInQuad => {
                if t < 0.5 {
                    EaseFunction::OutQuad.apply(t * 2.0) / 2.0
                } else {
                    0.5 + EaseFunction::InQuad.apply(t * 2.0 - 1.0) / 2.0
                }
            }
            EaseFunction::InCubic => t * t * t,
            EaseFunction::OutCubic => 1.0 - (1.0 - t).powi(3),
            EaseFunction::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// 线性插值
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
