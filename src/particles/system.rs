//! 粒子系统控制器
//!
//! 负责整体运行时长、启动/停止语义、源点与质量的重新配置，
//! 并在每帧把这些参数交给粒子池。

use super::behavior::{ActivationContext, GravityFade, ParticleBehavior, RandomBurst};
use super::particle::Particle;
use super::pool::{FrameStats, ParticlePool};
use crate::config::ParticleSystemConfig;
use crate::core::{is_valid_delta, ParticleError, ParticleResult, Timer};
use glam::{Vec2, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 累计统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemStats {
    /// 运行中处理过的帧数
    pub frames: u64,
    pub total_activated: u64,
    pub total_expired: u64,
}

/// 粒子系统
pub struct ParticleSystem {
    pool: ParticlePool,
    lifetime_ms: f32,
    source_point: Vec2,
    mass: f32,
    color: Vec4,
    running: bool,
    run_timer: Timer,
    behavior: Box<dyn ParticleBehavior>,
    rng: StdRng,
    stats: SystemStats,
}

impl ParticleSystem {
    /// 使用默认激活策略 (随机初速度) 创建系统
    pub fn new(config: &ParticleSystemConfig) -> ParticleResult<Self> {
        Self::with_behavior(config, Box::new(RandomBurst::default()))
    }

    /// 使用重力淡出策略创建系统
    pub fn gravity_fade(config: &ParticleSystemConfig) -> ParticleResult<Self> {
        Self::with_behavior(config, Box::new(GravityFade::default()))
    }

    /// 使用自定义激活策略创建系统
    ///
    /// 参数不合法时立即失败，而不是在运行中静默不工作。
    pub fn with_behavior(
        config: &ParticleSystemConfig,
        behavior: Box<dyn ParticleBehavior>,
    ) -> ParticleResult<Self> {
        let pool = ParticlePool::from_config(config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::debug!(
            target: "particles",
            pool_size = config.pool_size,
            per_frame = config.max_particles_per_frame,
            lifetime_ms = config.lifetime_ms,
            "Particle system created"
        );

        Ok(Self {
            pool,
            lifetime_ms: config.lifetime_ms,
            source_point: config.source_point,
            mass: config.mass,
            color: config.color,
            running: false,
            run_timer: Timer::new(0.0),
            behavior,
            rng,
            stats: SystemStats::default(),
        })
    }

    /// 启动系统，运行 `duration_ms` 毫秒
    ///
    /// 先完整停止一次 (所有粒子失活)，然后应用可选的质量与源点覆盖。
    pub fn start(
        &mut self,
        duration_ms: f32,
        mass: Option<f32>,
        source_point: Option<Vec2>,
    ) -> ParticleResult<()> {
        if !(duration_ms >= 0.0 && duration_ms.is_finite()) {
            return Err(ParticleError::InvalidDuration(duration_ms));
        }
        if let Some(mass) = mass {
            if !mass.is_finite() {
                return Err(ParticleError::InvalidMass(mass));
            }
        }

        self.stop();

        self.run_timer = Timer::new(duration_ms);
        if let Some(mass) = mass {
            self.mass = mass;
        }
        if let Some(source_point) = source_point {
            self.source_point = source_point;
        }

        self.run_timer.start();
        self.running = true;
        self.pool.reset_eligible();

        tracing::debug!(
            target: "particles",
            duration_ms,
            mass = self.mass,
            source = ?self.source_point,
            "Particle system started"
        );
        Ok(())
    }

    /// 停止系统，所有活跃粒子在返回前失活
    pub fn stop(&mut self) {
        let was_running = self.running;
        self.running = false;
        let deactivated = self.pool.deactivate_all();
        if was_running {
            tracing::debug!(target: "particles", deactivated, "Particle system stopped");
        }
    }

    /// 每帧调用一次
    ///
    /// 未运行时什么也不做；运行计时器走完时停止系统。
    /// 非有限或为负的增量会跳过整帧，不改变任何状态。
    pub fn tick(&mut self, delta_seconds: f32) -> FrameStats {
        if !self.running {
            return FrameStats::default();
        }

        if !is_valid_delta(delta_seconds) {
            tracing::warn!(target: "particles", delta_seconds, "Skipping frame with invalid delta");
            return FrameStats::default();
        }

        if self.run_timer.is_stopped() {
            tracing::debug!(target: "particles", "Run timer elapsed");
            self.stop();
            return FrameStats::default();
        }

        let ctx = self.activation_context();
        let frame = self
            .pool
            .update(delta_seconds, &ctx, self.behavior.as_mut(), &mut self.rng);
        self.run_timer.update(delta_seconds * 1000.0);

        self.stats.frames += 1;
        self.stats.total_activated += frame.activated as u64;
        self.stats.total_expired += frame.expired as u64;
        frame
    }

    fn activation_context(&self) -> ActivationContext {
        ActivationContext {
            lifetime_ms: self.lifetime_ms,
            source_point: self.source_point,
            mass: self.mass,
            color: self.color,
        }
    }

    /// 修改颜色，下次激活时生效
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    /// 修改源点，下次激活时生效
    pub fn set_source_point(&mut self, source_point: Vec2) {
        self.source_point = source_point;
    }

    /// 替换激活策略
    pub fn set_behavior(&mut self, behavior: Box<dyn ParticleBehavior>) {
        self.behavior = behavior;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn eligible_count(&self) -> usize {
        self.pool.eligible_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn lifetime_ms(&self) -> f32 {
        self.lifetime_ms
    }

    pub fn source_point(&self) -> Vec2 {
        self.source_point
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }

    /// 运行计时器剩余时间 (毫秒)
    pub fn remaining_ms(&self) -> f32 {
        self.run_timer.remaining_ms()
    }

    pub fn stats(&self) -> SystemStats {
        self.stats
    }
}

impl std::fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("capacity", &self.pool.capacity())
            .field("active", &self.pool.active_count())
            .field("eligible", &self.pool.eligible_count())
            .field("running", &self.running)
            .field("remaining_ms", &self.run_timer.remaining_ms())
            .finish_non_exhaustive()
    }
}
