//! 配置系统
//!
//! 粒子系统与日志的配置，可以从 TOML/JSON 文件读取，并由 `PARTICLES_*` 环境变量覆盖。
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub mod particles;

pub use particles::ParticleSystemConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读写配置文件失败
    #[error("Failed to access config file: {0}")]
    FileError(#[from] std::io::Error),
    /// 内容无法解析或序列化
    #[error("Malformed config: {0}")]
    ParseError(String),
    /// 数值不合法
    #[error("Invalid config: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// 按扩展名推断格式，无法识别时返回 `None`
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> ConfigResult<EngineConfig> {
        let parsed = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(ConfigError::ParseError)
    }

    fn render(self, config: &EngineConfig) -> ConfigResult<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        };
        rendered.map_err(ConfigError::ParseError)
    }
}

/// 引擎主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub particles: ParticleSystemConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定格式读取配置文件
    pub fn load<P: AsRef<Path>>(path: P, format: ConfigFormat) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        format.parse(&content)
    }

    /// 以指定格式写出配置文件
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> ConfigResult<()> {
        fs::write(path, format.render(self)?)?;
        Ok(())
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::load(path, ConfigFormat::Toml)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        ConfigFormat::Toml.parse(content)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::load(path, ConfigFormat::Json)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        ConfigFormat::Json.parse(content)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        self.save(path, ConfigFormat::Toml)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        self.save(path, ConfigFormat::Json)
    }

    /// 用 `PARTICLES_*` 环境变量覆盖粒子参数
    ///
    /// 无法解析的值会被忽略。
    pub fn apply_env_overrides(&mut self) {
        let particles = &mut self.particles;
        override_from_env("PARTICLES_POOL_SIZE", &mut particles.pool_size);
        override_from_env("PARTICLES_LIFETIME_MS", &mut particles.lifetime_ms);
        override_from_env("PARTICLES_PER_FRAME", &mut particles.max_particles_per_frame);
        override_from_env("PARTICLES_MASS", &mut particles.mass);
        override_from_env("PARTICLES_GRAVITY", &mut particles.gravity_per_frame);

        let mut seed = particles.seed.unwrap_or_default();
        if override_from_env("PARTICLES_SEED", &mut seed) {
            particles.seed = Some(seed);
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.particles.validate()
    }

    /// 在工作目录中依次尝试 `particles.toml`、`particles.json`，都不可用时使用默认配置
    pub fn load_or_default() -> Self {
        for (file, format) in [
            ("particles.toml", ConfigFormat::Toml),
            ("particles.json", ConfigFormat::Json),
        ] {
            match Self::load(file, format) {
                Ok(config) => {
                    tracing::info!(target: "config", file, "Loaded particle config");
                    return config;
                }
                Err(ConfigError::FileError(_)) => {}
                Err(err) => tracing::warn!(target: "config", file, "Skipping config: {}", err),
            }
        }

        tracing::info!(target: "config", "No config file found, using defaults");
        Self::default()
    }
}

/// 环境变量存在且可解析时写入 `slot`，返回是否发生覆盖
fn override_from_env<T: FromStr>(key: &str, slot: &mut T) -> bool {
    let Ok(val) = env::var(key) else {
        return false;
    };
    match val.parse() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => {
            tracing::warn!(target: "config", key, value = %val, "Ignoring unparsable override");
            false
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}
