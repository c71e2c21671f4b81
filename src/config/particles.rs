use super::{ConfigError, ConfigResult};
use crate::core::ParticleError;
use crate::impl_default;
use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// 粒子系统构造参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSystemConfig {
    /// 粒子池容量
    pub pool_size: usize,

    /// 粒子发射源点
    pub source_point: Vec2,

    /// 单个粒子寿命 (毫秒)
    pub lifetime_ms: f32,

    /// 粒子边长
    pub particle_size: f32,

    /// 初始质量
    pub mass: f32,

    /// 每帧最多新增的可发射粒子数
    pub max_particles_per_frame: usize,

    /// 每帧按质量缩放的重力加速度
    pub gravity_per_frame: f32,

    /// 粒子颜色 (RGBA, 0-1)
    pub color: Vec4,

    /// 随机种子，未设置时使用系统熵
    pub seed: Option<u64>,
}

impl_default!(ParticleSystemConfig {
    pool_size: 100,
    source_point: Vec2::ZERO,
    lifetime_ms: 1000.0,
    particle_size: 2.0,
    mass: 1.0,
    max_particles_per_frame: 10,
    gravity_per_frame: 10.0,
    color: Vec4::new(1.0, 0.0, 0.0, 1.0),
    seed: None,
});

impl ParticleSystemConfig {
    /// 按构造期规则检查参数，返回第一个违反的规则
    pub fn check(&self) -> Result<(), ParticleError> {
        if self.pool_size == 0 {
            return Err(ParticleError::InvalidPoolSize);
        }
        if !(self.lifetime_ms > 0.0 && self.lifetime_ms.is_finite()) {
            return Err(ParticleError::InvalidLifetime(self.lifetime_ms));
        }
        if self.max_particles_per_frame == 0 {
            return Err(ParticleError::InvalidQuota);
        }
        if !(self.particle_size > 0.0 && self.particle_size.is_finite()) {
            return Err(ParticleError::InvalidParticleSize(self.particle_size));
        }
        if !self.mass.is_finite() {
            return Err(ParticleError::InvalidMass(self.mass));
        }
        if !self.gravity_per_frame.is_finite() {
            return Err(ParticleError::InvalidGravity(self.gravity_per_frame));
        }
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.check()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
