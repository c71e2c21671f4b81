//! 粒子池管理器
//!
//! 固定容量的粒子数组。每帧只访问前 `eligible` 个槽位：
//! 活跃粒子推进寿命、补间和物理，非活跃粒子被重新激活。
//! `eligible` 每帧增加固定配额直到覆盖整个池，从而把一次爆发摊到多帧完成。
//!
//! 活跃粒子的单帧顺序：
//! 1. 寿命减少 `delta_seconds * 1000`
//! 2. 推进补间轨道
//! 3. `velocity.y += mass * gravity_per_frame` (无上限)
//! 4. `position += velocity * delta_seconds`
//! 5. 寿命 `<= 0` 时把 `"active"` 轨道推到终点，并在同一帧失活

use super::behavior::{ActivationContext, ParticleBehavior};
use super::particle::Particle;
use super::ACTIVE_TWEEN;
use crate::config::ParticleSystemConfig;
use crate::core::{clamp_usize, is_valid_delta, ParticleError, ParticleResult};
use glam::Vec2;
use rand::RngCore;

/// 单帧统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// 本帧新激活的粒子数
    pub activated: usize,
    /// 本帧寿命耗尽的粒子数
    pub expired: usize,
    /// 本帧结束时的活跃粒子数
    pub active: usize,
}

/// 粒子池
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    eligible: usize,
    per_frame_quota: usize,
    gravity_per_frame: f32,
}

impl ParticlePool {
    /// 创建粒子池，所有粒子预先分配在 `source_point` 处并处于未激活状态
    pub fn new(
        capacity: usize,
        per_frame_quota: usize,
        source_point: Vec2,
        particle_size: f32,
        mass: f32,
    ) -> ParticleResult<Self> {
        if capacity == 0 {
            return Err(ParticleError::InvalidPoolSize);
        }
        if per_frame_quota == 0 {
            return Err(ParticleError::InvalidQuota);
        }
        let size = Vec2::splat(particle_size);
        let particles = (0..capacity)
            .map(|_| Particle::new(source_point, size, mass))
            .collect();

        Ok(Self {
            particles,
            eligible: per_frame_quota.min(capacity),
            per_frame_quota,
            gravity_per_frame: 10.0,
        })
    }

    /// 按配置创建粒子池
    pub fn from_config(config: &ParticleSystemConfig) -> ParticleResult<Self> {
        config.check()?;
        let mut pool = Self::new(
            config.pool_size,
            config.max_particles_per_frame,
            config.source_point,
            config.particle_size,
            config.mass,
        )?;
        pool.gravity_per_frame = config.gravity_per_frame;
        Ok(pool)
    }

    /// 推进一帧，增量非有限或为负时不做任何事
    pub fn update(
        &mut self,
        delta_seconds: f32,
        ctx: &ActivationContext,
        behavior: &mut dyn ParticleBehavior,
        rng: &mut dyn RngCore,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        if !is_valid_delta(delta_seconds) {
            stats.active = self.active_count();
            return stats;
        }
        let gravity = self.gravity_per_frame;

        for particle in &mut self.particles[..self.eligible] {
            if particle.is_active() {
                if Self::step_active(particle, delta_seconds, gravity) {
                    stats.expired += 1;
                }
            } else {
                Self::activate(particle, ctx, behavior, rng);
                stats.activated += 1;
            }
        }

        self.admit_next_quota();
        stats.active = self.active_count();
        tracing::trace!(
            target: "particles",
            activated = stats.activated,
            expired = stats.expired,
            active = stats.active,
            eligible = self.eligible,
            "Pool updated"
        );
        stats
    }

    /// 返回粒子是否在本帧失活
    fn step_active(particle: &mut Particle, delta_seconds: f32, gravity: f32) -> bool {
        particle.decrement_age(delta_seconds * 1000.0);
        particle.advance_tweens(delta_seconds);
        particle.velocity.y += particle.mass * gravity;
        particle.integrate(delta_seconds);

        if particle.age() <= 0.0 {
            // 寿命与轨道各自累加增量，舍入可能不同步
            particle.complete_tween(ACTIVE_TWEEN);
            particle.deactivate();
            return true;
        }
        false
    }

    fn activate(
        particle: &mut Particle,
        ctx: &ActivationContext,
        behavior: &mut dyn ParticleBehavior,
        rng: &mut dyn RngCore,
    ) {
        particle.activate(ctx.lifetime_ms, ctx.source_point);
        particle.color = ctx.color;
        particle.alpha = 1.0;
        particle.mass = ctx.mass;

        behavior.configure(particle, ctx, rng);

        if let Err(err) = particle.tweens.play(ACTIVE_TWEEN) {
            tracing::trace!(target: "particles", "Activated particle without tween: {}", err);
        }
    }

    /// 可发射窗口增加一个配额，不超过容量
    pub fn admit_next_quota(&mut self) {
        self.eligible = clamp_usize(
            self.eligible.saturating_add(self.per_frame_quota),
            0,
            self.particles.len(),
        );
    }

    /// 可发射窗口回到初始配额
    pub fn reset_eligible(&mut self) {
        self.eligible = self.per_frame_quota.min(self.particles.len());
    }

    /// 让所有活跃粒子失活，返回失活数量
    pub fn deactivate_all(&mut self) -> usize {
        let mut count = 0;
        for particle in self.particles.iter_mut().filter(|p| p.is_active()) {
            particle.deactivate();
            count += 1;
        }
        count
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible
    }

    pub fn per_frame_quota(&self) -> usize {
        self.per_frame_quota
    }

    pub fn gravity_per_frame(&self) -> f32 {
        self.gravity_per_frame
    }

    /// 修改每帧重力增量，非有限值被拒绝
    pub fn set_gravity_per_frame(&mut self, gravity: f32) -> ParticleResult<()> {
        if !gravity.is_finite() {
            return Err(ParticleError::InvalidGravity(gravity));
        }
        self.gravity_per_frame = gravity;
        Ok(())
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// 当前活跃的粒子
    pub fn active(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_active())
    }
}
