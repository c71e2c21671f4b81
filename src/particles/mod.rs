//! 粒子系统模块
//!
//! 固定容量的 CPU 粒子模拟：对象池复用、分帧激活、按质量缩放的重力，
//! 以及与物理解耦的补间动画。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              ParticleSystemManager (宿主持有)            │
//! ├─────────────────────────────────────────────────────────┤
//! │  ParticleSystem                                          │
//! │     - 运行计时器、启动/停止、源点/质量/颜色               │
//! │                                                          │
//! │  ParticlePool                                            │
//! │     - 固定数组 + 可发射窗口 (每帧增长一个配额)            │
//! │     - 活跃粒子：寿命 → 补间 → 重力 → 积分 → 过期检查      │
//! │     - 非活跃粒子：激活并交给 ParticleBehavior 配置动画    │
//! │                                                          │
//! │  Particle + TweenController                              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```rust
//! use particle_engine::config::ParticleSystemConfig;
//! use particle_engine::particles::ParticleSystem;
//! use glam::Vec2;
//!
//! let config = ParticleSystemConfig {
//!     pool_size: 10,
//!     max_particles_per_frame: 2,
//!     lifetime_ms: 1000.0,
//!     ..Default::default()
//! };
//! let mut system = ParticleSystem::gravity_fade(&config).unwrap();
//! system.start(5000.0, Some(2.0), Some(Vec2::new(320.0, 180.0))).unwrap();
//!
//! let frame = system.tick(0.016);
//! assert_eq!(frame.activated, 2);
//! ```

pub mod behavior;
pub mod manager;
pub mod particle;
pub mod pool;
pub mod system;


/// 每次激活时播放的轨道名
pub const ACTIVE_TWEEN: &str = "active";

pub use behavior::{ActivationContext, GravityFade, ParticleBehavior, RandomBurst};
pub use manager::{ParticleSystemManager, SystemId};
pub use particle::{properties, Particle};
pub use pool::{FrameStats, ParticlePool};
pub use system::{ParticleSystem, SystemStats};
