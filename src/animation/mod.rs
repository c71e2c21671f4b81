//! 动画系统模块
//!
//! 提供基于时间的属性补间 (tween) 与缓动函数。
//!
//! ## 功能特性
//!
//! - 按名称管理的补间轨道
//! - 可替换的缓动函数
//! - 延迟、循环与往返播放
//!
//! ## 使用示例
//!
//! ```rust
//! use particle_engine::animation::{EaseFunction, TweenController, TweenDefinition, TweenEffect};
//! use particle_engine::particles::Particle;
//!
//! let mut particle = Particle::default();
//! let mut tweens = TweenController::new();
//! tweens.add(
//!     "fade",
//!     TweenDefinition::new(1000.0)
//!         .with_effect(TweenEffect::new("alpha", 1.0, 0.0, EaseFunction::InOutQuad)),
//! );
//! tweens.play("fade").unwrap();
//! tweens.advance(0.5, &mut particle);
//! assert!((particle.alpha - 0.5).abs() < 1e-4);
//! ```

pub mod easing;
pub mod tween;

pub use easing::{lerp, EaseFunction};
pub use tween::{
    Tween, TweenController, TweenDefinition, TweenEffect, TweenState, TweenTarget,
};
