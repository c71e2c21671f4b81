//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `error` - 错误类型定义
//! - `timer` - 运行时长倒计时
//! - `logging` - 日志初始化
//! - `utils` - 随机向量等工具函数

pub mod error;
pub mod logging;
pub mod timer;
pub mod utils;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{
    AnimationError, AnimationResult, EngineError, EngineResult, ParticleError, ParticleResult,
};

pub use timer::{Timer, TimerState};
pub use utils::{clamp_usize, is_valid_delta, random_vec2};
