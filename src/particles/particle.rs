//! 可复用的粒子实体
//!
//! 粒子在系统初始化时一次性分配，之后只在激活/失活之间切换。
//! 生命周期相关的操作只对粒子池开放。

use crate::animation::{TweenController, TweenTarget};
use crate::core::{AnimationError, AnimationResult};
use glam::{Vec2, Vec4};

/// 可被补间动画写入的属性名
pub mod properties {
    pub const ALPHA: &str = "alpha";
    pub const ROTATION: &str = "rotation";
    pub const POSITION_X: &str = "positionX";
    pub const POSITION_Y: &str = "positionY";
    pub const SIZE_X: &str = "sizeX";
    pub const SIZE_Y: &str = "sizeY";
    /// 同时写入宽和高
    pub const SIZE: &str = "size";
}

/// 粒子
#[derive(Debug, Clone)]
pub struct Particle {
    /// 位置
    pub position: Vec2,
    /// 速度 (单位/秒)
    pub velocity: Vec2,
    /// 质量，决定每帧重力增量
    pub mass: f32,
    /// 显示尺寸
    pub size: Vec2,
    /// 是否可见
    pub visible: bool,
    /// 颜色
    pub color: Vec4,
    /// 透明度
    pub alpha: f32,
    /// 旋转 (弧度)
    pub rotation: f32,
    /// 补间轨道
    pub tweens: TweenController,
    age: f32,
    max_age: f32,
    active: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE, 1.0)
    }
}

impl Particle {
    /// 创建一个未激活、不可见的粒子
    pub fn new(position: Vec2, size: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            size,
            visible: false,
            color: Vec4::ONE,
            alpha: 1.0,
            rotation: 0.0,
            tweens: TweenController::new(),
            age: 0.0,
            max_age: 0.0,
            active: false,
        }
    }

    pub(crate) fn activate(&mut self, lifetime_ms: f32, position: Vec2) {
        self.age = lifetime_ms;
        self.max_age = lifetime_ms;
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.visible = true;
        self.active = true;
    }

    /// 失活并隐藏，可重复调用
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.visible = false;
        self.tweens.stop_all();
    }

    /// 只减少剩余寿命，是否失活由调用方判断
    pub(crate) fn decrement_age(&mut self, delta_ms: f32) {
        self.age -= delta_ms;
    }

    pub(crate) fn integrate(&mut self, delta_seconds: f32) {
        self.move_by(self.velocity * delta_seconds);
    }

    pub(crate) fn advance_tweens(&mut self, delta_seconds: f32) {
        // 控制器写回的目标就是粒子本身，先取出再放回
        let mut tweens = std::mem::take(&mut self.tweens);
        tweens.advance(delta_seconds, self);
        self.tweens = tweens;
    }

    /// 把轨道推到终点，使视觉状态与寿命同时结束
    pub(crate) fn complete_tween(&mut self, name: &str) {
        let mut tweens = std::mem::take(&mut self.tweens);
        tweens.complete(name, self);
        self.tweens = tweens;
    }

    /// 平移粒子
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 剩余寿命 (毫秒)
    pub fn age(&self) -> f32 {
        self.age
    }

    /// 本次激活时的总寿命 (毫秒)
    pub fn max_age(&self) -> f32 {
        self.max_age
    }

    /// 已消耗的寿命比例，范围 `[0,1]`
    pub fn age_ratio(&self) -> f32 {
        if self.max_age <= 0.0 {
            return 1.0;
        }
        (1.0 - self.age / self.max_age).clamp(0.0, 1.0)
    }
}

impl TweenTarget for Particle {
    fn set_tween_property(&mut self, property: &str, value: f32) -> AnimationResult<()> {
        match property {
            properties::ALPHA => self.alpha = value,
            properties::ROTATION => self.rotation = value,
            properties::POSITION_X => self.position.x = value,
            properties::POSITION_Y => self.position.y = value,
            properties::SIZE_X => self.size.x = value,
            properties::SIZE_Y => self.size.y = value,
            properties::SIZE => self.size = Vec2::splat(value),
            other => return Err(AnimationError::UnknownProperty(other.to_string())),
        }
        Ok(())
    }
}
