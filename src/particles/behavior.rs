//! 粒子激活时的动画配置策略
//!
//! 粒子池每激活一个粒子就调用一次 [`ParticleBehavior::configure`]，
//! 策略负责给出初速度并向 `"active"` 轨道写入补间定义。

use super::particle::{properties, Particle};
use super::ACTIVE_TWEEN;
use crate::animation::{EaseFunction, TweenDefinition, TweenEffect};
use crate::core::random_vec2;
use glam::{Vec2, Vec4};
use rand::RngCore;
use std::ops::RangeInclusive;

/// 激活时可见的系统参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationContext {
    /// 粒子寿命 (毫秒)，也是 `"active"` 轨道的时长
    pub lifetime_ms: f32,
    pub source_point: Vec2,
    pub mass: f32,
    pub color: Vec4,
}

/// 激活策略
pub trait ParticleBehavior {
    fn configure(&mut self, particle: &mut Particle, ctx: &ActivationContext, rng: &mut dyn RngCore);
}

impl<F> ParticleBehavior for F
where
    F: FnMut(&mut Particle, &ActivationContext, &mut dyn RngCore),
{
    fn configure(&mut self, particle: &mut Particle, ctx: &ActivationContext, rng: &mut dyn RngCore) {
        self(particle, ctx, rng)
    }
}

/// 默认策略：随机初速度，空的 `"active"` 轨道
#[derive(Debug, Clone)]
pub struct RandomBurst {
    pub velocity_x: RangeInclusive<f32>,
    pub velocity_y: RangeInclusive<f32>,
}

impl Default for RandomBurst {
    fn default() -> Self {
        Self {
            velocity_x: -50.0..=50.0,
            velocity_y: -100.0..=100.0,
        }
    }
}

impl ParticleBehavior for RandomBurst {
    fn configure(&mut self, particle: &mut Particle, ctx: &ActivationContext, rng: &mut dyn RngCore) {
        particle.velocity = random_vec2(rng, self.velocity_x.clone(), self.velocity_y.clone());
        particle.tweens.add(ACTIVE_TWEEN, TweenDefinition::new(ctx.lifetime_ms));
    }
}

/// 重力 + 淡出：在默认策略之上，把 `"active"` 轨道替换为透明度 1 → 0
///
/// 下落本身由粒子池按质量施加，这里只负责视觉上的淡出。
#[derive(Debug, Clone)]
pub struct GravityFade {
    pub burst: RandomBurst,
    pub ease: EaseFunction,
}

impl Default for GravityFade {
    fn default() -> Self {
        Self {
            burst: RandomBurst::default(),
            ease: EaseFunction::InOutQuad,
        }
    }
}

impl ParticleBehavior for GravityFade {
    fn configure(&mut self, particle: &mut Particle, ctx: &ActivationContext, rng: &mut dyn RngCore) {
        self.burst.configure(particle, ctx, rng);
        particle.tweens.add(
            ACTIVE_TWEEN,
            TweenDefinition::new(ctx.lifetime_ms).with_effect(TweenEffect::new(
                properties::ALPHA,
                1.0,
                0.0,
                self.ease,
            )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ctx() -> ActivationContext {
        ActivationContext {
            lifetime_ms: 1000.0,
            source_point: Vec2::ZERO,
            mass: 1.0,
            color: Vec4::ONE,
        }
    }

    #[test]
    fn test_random_burst_velocity_and_track() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut particle = Particle::default();
        RandomBurst::default().configure(&mut particle, &ctx(), &mut rng);

        assert!((-50.0..=50.0).contains(&particle.velocity.x));
        assert!((-100.0..=100.0).contains(&particle.velocity.y));
        let track = particle.tweens.get(ACTIVE_TWEEN).unwrap().definition();
        assert_eq!(track.duration, 1000.0);
        assert!(track.effects.is_empty());
    }

    #[test]
    fn test_gravity_fade_replaces_active_track() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut particle = Particle::default();
        GravityFade::default().configure(&mut particle, &ctx(), &mut rng);

        assert_eq!(particle.tweens.len(), 1);
        let track = particle.tweens.get(ACTIVE_TWEEN).unwrap().definition();
        assert_eq!(track.duration, 1000.0);
        assert_eq!(
            track.effects,
            vec![TweenEffect::new("alpha", 1.0, 0.0, EaseFunction::InOutQuad)]
        );
    }

    #[test]
    fn test_closure_behavior() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut particle = Particle::default();
        let mut behavior = |p: &mut Particle, ctx: &ActivationContext, _: &mut dyn RngCore| {
            p.velocity = Vec2::new(0.0, ctx.mass);
        };
        behavior.configure(&mut particle, &ctx(), &mut rng);
        assert_eq!(particle.velocity, Vec2::new(0.0, 1.0));
    }
}
