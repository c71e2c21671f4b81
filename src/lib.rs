//! # Particle Engine
//!
//! A fixed-capacity 2D particle simulation engine built with Rust.
//!
//! ## Features
//!
//! - **Object Pool**: particles are allocated once and recycled, never constructed per spawn
//! - **Staggered Spawning**: the eligible slice of the pool grows by a fixed quota each frame
//! - **Physics**: per-frame, mass-scaled gravity and velocity integration
//! - **Tween Animation**: named, time-keyed property tracks with pluggable easing,
//!   decoupled from the physics step
//! - **Configuration**: TOML/JSON files with environment overrides
//!
//! ## Architecture Design
//!
//! - **Particle**: pooled entity with physical state and a tween controller
//! - **ParticlePool**: owns the fixed array, admits a quota per frame, recycles expired slots
//! - **ParticleSystem**: run timer, start/stop, source point, mass and color
//! - **ParticleSystemManager**: explicit owner that ticks several systems
//!
//! ### Example
//!
//! ```rust
//! use particle_engine::config::ParticleSystemConfig;
//! use particle_engine::particles::{ParticleSystem, ParticleSystemManager};
//!
//! let mut manager = ParticleSystemManager::default();
//! let system = ParticleSystem::gravity_fade(&ParticleSystemConfig::default()).unwrap();
//! let id = manager.add_system(system).unwrap();
//! manager.get_mut(id).unwrap().start(2000.0, None, None).unwrap();
//!
//! manager.update_all(0.016);
//! assert!(manager.total_active() > 0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Errors, run timer, logging and utilities
//! - [`config`]: Configuration system
//! - [`animation`]: Tweens and easing functions
//! - [`particles`]: Particles, pool, system controller and manager

/// Core functionality: errors, timer, logging
pub mod core;
/// Configuration system
pub mod config;
/// Tween animation with easing functions
pub mod animation;
/// Pooled particle simulation
pub mod particles;

pub use crate::core::{EngineError, EngineResult};
