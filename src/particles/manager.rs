//! 粒子系统管理器
//!
//! 管理多个粒子系统，提供统一的更新接口。由宿主场景显式持有，不存在全局单例。

use super::pool::FrameStats;
use super::system::ParticleSystem;

/// 系统句柄
///
/// 槽位被复用后，旧句柄的代数不再匹配，查询会返回 `None`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemId {
    index: usize,
    generation: u32,
}

impl SystemId {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Default)]
struct Slot {
    generation: u32,
    system: Option<ParticleSystem>,
}

impl Slot {
    /// 清空槽位并使已发出的句柄失效
    fn vacate(&mut self) -> Option<ParticleSystem> {
        let system = self.system.take();
        if system.is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
        system
    }
}

/// 粒子系统管理器
///
/// 管理多个粒子系统，每帧按槽位顺序依次推进。
pub struct ParticleSystemManager {
    /// 系统槽位，移除后留空并递增代数
    slots: Vec<Slot>,
    /// 最大系统数
    max_systems: usize,
}

impl ParticleSystemManager {
    /// 创建新的粒子系统管理器
    ///
    /// # 参数
    ///
    /// * `max_systems` - 最大系统数
    pub fn new(max_systems: usize) -> Self {
        Self {
            slots: Vec::with_capacity(max_systems),
            max_systems,
        }
    }

    /// 添加粒子系统
    ///
    /// # 返回
    ///
    /// 返回系统ID；已达到上限时返回 `None`。
    pub fn add_system(&mut self, system: ParticleSystem) -> Option<SystemId> {
        if self.system_count() >= self.max_systems {
            tracing::warn!(
                target: "particles",
                max_systems = self.max_systems,
                "Particle system limit reached"
            );
            return None;
        }

        let index = match self.slots.iter().position(|slot| slot.system.is_none()) {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        slot.system = Some(system);
        Some(SystemId {
            index,
            generation: slot.generation,
        })
    }

    fn slot(&self, id: SystemId) -> Option<&Slot> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
    }

    fn slot_mut(&mut self, id: SystemId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
    }

    pub fn get(&self, id: SystemId) -> Option<&ParticleSystem> {
        self.slot(id).and_then(|slot| slot.system.as_ref())
    }

    /// 获取粒子系统（可变引用）
    pub fn get_mut(&mut self, id: SystemId) -> Option<&mut ParticleSystem> {
        self.slot_mut(id).and_then(|slot| slot.system.as_mut())
    }

    fn systems_mut(&mut self) -> impl Iterator<Item = &mut ParticleSystem> {
        self.slots.iter_mut().filter_map(|slot| slot.system.as_mut())
    }

    /// 更新所有粒子系统
    ///
    /// # 返回
    ///
    /// 返回所有系统本帧统计之和。
    pub fn update_all(&mut self, delta_seconds: f32) -> FrameStats {
        let mut total = FrameStats::default();
        for system in self.systems_mut() {
            let frame = system.tick(delta_seconds);
            total.activated += frame.activated;
            total.expired += frame.expired;
            total.active += frame.active;
        }
        total
    }

    /// 停止所有系统
    pub fn stop_all(&mut self) {
        for system in self.systems_mut() {
            system.stop();
        }
    }

    /// 获取系统数量
    pub fn system_count(&self) -> usize {
        self.iter().count()
    }

    /// 所有系统的活跃粒子总数
    pub fn total_active(&self) -> usize {
        self.iter().map(|(_, system)| system.active_count()).sum()
    }

    /// 移除系统并交还所有权
    pub fn remove_system(&mut self, id: SystemId) -> Option<ParticleSystem> {
        self.slot_mut(id).and_then(Slot::vacate)
    }

    /// 清空所有系统，之前发出的句柄全部失效
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.vacate();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SystemId, &ParticleSystem)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.system.as_ref().map(|system| {
                (
                    SystemId {
                        index,
                        generation: slot.generation,
                    },
                    system,
                )
            })
        })
    }
}

impl Default for ParticleSystemManager {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleSystemConfig;

    fn system(pool_size: usize) -> ParticleSystem {
        ParticleSystem::new(&ParticleSystemConfig {
            pool_size,
            max_particles_per_frame: pool_size,
            seed: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_particle_system_manager() {
        let manager = ParticleSystemManager::new(10);
        assert_eq!(manager.system_count(), 0);
        assert_eq!(manager.max_systems, 10);
    }

    #[test]
    fn test_limit() {
        let mut manager = ParticleSystemManager::new(1);
        assert!(manager.add_system(system(4)).is_some());
        assert!(manager.add_system(system(4)).is_none());
    }

    #[test]
    fn test_ids_survive_removal() {
        let mut manager = ParticleSystemManager::new(4);
        let a = manager.add_system(system(3)).unwrap();
        let b = manager.add_system(system(5)).unwrap();

        assert!(manager.remove_system(a).is_some());
        assert!(manager.remove_system(a).is_none());
        assert_eq!(manager.get(b).unwrap().capacity(), 5);

        // 空槽位被复用，但旧句柄不会指向新系统
        let c = manager.add_system(system(7)).unwrap();
        assert_eq!(c.index(), a.index());
        assert_ne!(c, a);
        assert_eq!(manager.system_count(), 2);
        assert!(manager.get(a).is_none());
        assert!(manager.get_mut(a).is_none());
        assert!(manager.remove_system(a).is_none());
        assert_eq!(manager.get(c).unwrap().capacity(), 7);
    }

    #[test]
    fn test_clear_invalidates_ids() {
        let mut manager = ParticleSystemManager::new(4);
        let a = manager.add_system(system(3)).unwrap();
        manager.clear();
        assert_eq!(manager.system_count(), 0);

        let b = manager.add_system(system(6)).unwrap();
        assert_eq!(b.index(), a.index());
        assert!(manager.get(a).is_none());
        assert_eq!(manager.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_update_all_ticks_each_system() {
        let mut manager = ParticleSystemManager::default();
        let a = manager.add_system(system(3)).unwrap();
        let b = manager.add_system(system(5)).unwrap();
        manager.get_mut(a).unwrap().start(1000.0, None, None).unwrap();
        manager.get_mut(b).unwrap().start(1000.0, None, None).unwrap();

        let frame = manager.update_all(0.016);
        assert_eq!(frame.activated, 8);
        assert_eq!(manager.total_active(), 8);

        manager.stop_all();
        assert_eq!(manager.total_active(), 0);
    }
}
