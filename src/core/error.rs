//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **构造期错误** (`ParticleError`): 粒子系统参数非法，构造时立即失败
//! - **动画错误** (`AnimationError`): 补间动画配置问题，只记录日志，不会中断模拟
//! - **配置错误** (`config::ConfigError`): 配置文件读取、解析与验证
//!
//! `EngineError` 可以同时承载以上所有错误。

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Particle error: {0}")]
    Particle(#[from] ParticleError),

    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("General error: {0}")]
    General(String),
}

/// 粒子系统错误
///
/// 只会在构造或 `start` 时产生，稳态 `tick` 不会返回错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    #[error("Invalid pool size: pool must hold at least one particle")]
    InvalidPoolSize,

    #[error("Invalid particle lifetime: {0}ms (must be positive and finite)")]
    InvalidLifetime(f32),

    #[error("Invalid per-frame quota: at least one particle must be admitted per frame")]
    InvalidQuota,

    #[error("Invalid particle size: {0} (must be positive and finite)")]
    InvalidParticleSize(f32),

    #[error("Invalid particle mass: {0} (must be finite)")]
    InvalidMass(f32),

    #[error("Invalid run duration: {0}ms (must be non-negative and finite)")]
    InvalidDuration(f32),

    #[error("Invalid gravity: {0} per frame (must be finite)")]
    InvalidGravity(f32),
}

/// 补间动画错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Unknown tweenable property: {0}")]
    UnknownProperty(String),

    #[error("Unknown tween: {0}")]
    UnknownTween(String),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type ParticleResult<T> = Result<T, ParticleError>;
pub type AnimationResult<T> = Result<T, AnimationError>;
