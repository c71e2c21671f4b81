use particle_engine::config::{ConfigError, ConfigFormat, EngineConfig};
use particle_engine::core::logging;
use particle_engine::particles::{ParticleSystem, ParticleSystemManager};
use particle_engine::EngineResult;
use std::path::Path;

/// 读取命令行给出的配置文件，未给出时在工作目录中查找
fn load_config() -> EngineResult<EngineConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EngineConfig::load_or_default());
    };
    let format = ConfigFormat::from_path(Path::new(&path)).ok_or_else(|| {
        ConfigError::ValidationError(format!("unsupported config extension: {}", path))
    })?;
    Ok(EngineConfig::load(&path, format)?)
}

/// 固定步长的无窗口演示：运行一个重力淡出粒子系统直到计时器结束
fn run() -> EngineResult<()> {
    let mut config = load_config()?;
    config.apply_env_overrides();
    config.validate()?;
    logging::init(&config.logging);

    let mut manager = ParticleSystemManager::default();
    let system = ParticleSystem::gravity_fade(&config.particles)?;
    let id = manager
        .add_system(system)
        .ok_or_else(|| particle_engine::EngineError::General("no free system slot".into()))?;

    if let Some(system) = manager.get_mut(id) {
        system.start(3000.0, None, None)?;
    }

    let delta_seconds = 1.0 / 60.0;
    let mut frame = 0u64;
    while manager.get(id).is_some_and(ParticleSystem::is_running) {
        let stats = manager.update_all(delta_seconds);
        frame += 1;
        if frame % 30 == 0 {
            tracing::info!(
                target: "engine",
                frame,
                active = stats.active,
                activated = stats.activated,
                expired = stats.expired,
                "Frame"
            );
        }
    }

    if let Some(system) = manager.get(id) {
        let totals = system.stats();
        tracing::info!(
            target: "engine",
            frames = totals.frames,
            activated = totals.total_activated,
            expired = totals.total_expired,
            "Simulation finished"
        );
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Particle demo failed: {}", e);
        std::process::exit(1);
    }
}
