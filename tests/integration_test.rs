use glam::{Vec2, Vec4};
use particle_engine::animation::{EaseFunction, TweenDefinition, TweenEffect};
use particle_engine::config::{ConfigError, EngineConfig, ParticleSystemConfig};
use particle_engine::particles::{
    properties, ActivationContext, Particle, ParticleSystem, ParticleSystemManager, ACTIVE_TWEEN,
};
use rand::RngCore;

fn scenario_config() -> ParticleSystemConfig {
    ParticleSystemConfig {
        pool_size: 10,
        max_particles_per_frame: 2,
        lifetime_ms: 1000.0,
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn test_burst_scenario() {
    let mut system = ParticleSystem::new(&scenario_config()).unwrap();
    system.start(5000.0, None, None).unwrap();
    assert_eq!(system.eligible_count(), 2);

    // 第一帧：恰好两个粒子激活，寿命约 1000ms
    let frame = system.tick(0.016);
    assert_eq!(frame.activated, 2);
    assert_eq!(system.active_count(), 2);
    for particle in system.particles().iter().filter(|p| p.is_active()) {
        assert!((particle.age() - 1000.0).abs() < 1e-3);
    }

    // 可发射窗口 2, 4, 6, 8, 10，第五帧覆盖整个池
    let mut eligible_seen = vec![2];
    for _ in 0..4 {
        eligible_seen.push(system.eligible_count());
        system.tick(0.016);
    }
    assert_eq!(eligible_seen, vec![2, 4, 6, 8, 10]);
    assert_eq!(system.active_count(), 10);

    // 首批粒子在第 2..=64 帧各扣 16ms，第 64 帧越过 0
    for _ in 5..63 {
        system.tick(0.016);
    }
    assert!(system.particles()[0].is_active());
    assert!((system.particles()[0].age() - 8.0).abs() < 1e-2);

    let frame = system.tick(0.016);
    assert_eq!(frame.expired, 2);
    assert!(!system.particles()[0].is_active());
    assert!(!system.particles()[1].is_active());

    // 下一帧被替换
    let frame = system.tick(0.016);
    assert!(frame.activated >= 2);
    assert!(system.particles()[0].is_active());
    assert!((system.particles()[0].age() - 1000.0).abs() < 1e-3);
}

#[test]
fn test_age_decreases_by_delta_each_tick() {
    let mut system = ParticleSystem::new(&ParticleSystemConfig {
        pool_size: 1,
        max_particles_per_frame: 1,
        lifetime_ms: 100.0,
        seed: Some(9),
        ..Default::default()
    })
    .unwrap();
    system.start(10_000.0, None, None).unwrap();
    system.tick(0.03);

    let mut previous = system.particles()[0].age();
    loop {
        system.tick(0.03);
        let particle = &system.particles()[0];
        if !particle.is_active() {
            assert!(particle.age() <= 0.0);
            break;
        }
        assert!((previous - particle.age() - 30.0).abs() < 1e-3);
        assert!(particle.age() > 0.0);
        previous = particle.age();
    }
}

#[test]
fn test_gravity_fade_alpha_reaches_zero_with_lifetime() {
    let config = ParticleSystemConfig {
        pool_size: 1,
        max_particles_per_frame: 1,
        lifetime_ms: 200.0,
        seed: Some(4),
        ..Default::default()
    };
    let mut system = ParticleSystem::gravity_fade(&config).unwrap();
    system.start(10_000.0, None, None).unwrap();

    system.tick(0.05);
    assert_eq!(system.particles()[0].alpha, 1.0);

    let mut alphas = Vec::new();
    for _ in 0..4 {
        system.tick(0.05);
        alphas.push(system.particles()[0].alpha);
    }
    assert!(alphas.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(*alphas.last().unwrap(), 0.0);
    assert!(!system.particles()[0].is_active());
}

#[test]
fn test_custom_behavior_adds_tracks() {
    let config = ParticleSystemConfig {
        pool_size: 4,
        max_particles_per_frame: 4,
        lifetime_ms: 400.0,
        seed: Some(8),
        ..Default::default()
    };
    let spin = |p: &mut Particle, ctx: &ActivationContext, _: &mut dyn RngCore| {
        p.velocity = Vec2::ZERO;
        p.tweens.add(
            ACTIVE_TWEEN,
            TweenDefinition::new(ctx.lifetime_ms)
                .with_effect(TweenEffect::new(
                    properties::ROTATION,
                    0.0,
                    std::f32::consts::TAU,
                    EaseFunction::Linear,
                ))
                .with_effect(TweenEffect::new("sparkle", 0.0, 1.0, EaseFunction::Linear)),
        );
    };
    let mut system = ParticleSystem::with_behavior(&config, Box::new(spin)).unwrap();
    system.start(10_000.0, Some(0.0), Some(Vec2::new(5.0, 5.0))).unwrap();

    system.tick(0.1);
    system.tick(0.1);
    for particle in system.particles() {
        assert!(particle.is_active());
        assert!((particle.rotation - std::f32::consts::TAU / 4.0).abs() < 1e-3);
        // 质量为 0 时不受重力影响
        assert_eq!(particle.position, Vec2::new(5.0, 5.0));
    }
}

#[test]
fn test_change_color_between_bursts() {
    let mut system = ParticleSystem::new(&scenario_config()).unwrap();
    let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
    system.set_color(blue);
    system.start(1000.0, None, None).unwrap();
    system.tick(0.016);
    assert!(system
        .particles()
        .iter()
        .filter(|p| p.is_active())
        .all(|p| p.color == blue));
}

#[test]
fn test_manager_with_config_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("particles.toml");

    let mut config = EngineConfig::default();
    config.particles = scenario_config();
    config.save_toml(&path)?;

    let loaded = EngineConfig::from_toml_file(&path)?;
    assert_eq!(loaded.particles, config.particles);
    loaded.validate()?;

    let mut manager = ParticleSystemManager::new(2);
    let id = manager
        .add_system(ParticleSystem::gravity_fade(&loaded.particles)?)
        .ok_or_else(|| anyhow::anyhow!("manager full"))?;
    manager
        .get_mut(id)
        .ok_or_else(|| anyhow::anyhow!("system missing"))?
        .start(32.0, None, None)?;

    manager.update_all(0.016);
    manager.update_all(0.016);
    assert_eq!(manager.total_active(), 4);

    // 计时器在两帧后耗尽，第三帧自动停止
    manager.update_all(0.016);
    assert_eq!(manager.total_active(), 0);
    assert!(!manager.get(id).map_or(true, ParticleSystem::is_running));
    Ok(())
}

#[test]
fn test_json_config_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("particles.json");

    let mut config = EngineConfig::default();
    config.particles.pool_size = 32;
    config.particles.source_point = Vec2::new(64.0, 48.0);
    config.save_json(&path)?;

    let loaded = EngineConfig::from_json_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = EngineConfig::from_toml_file("/nonexistent/particles.toml");
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}
