//! 补间动画
//!
//! 每个粒子持有一个 [`TweenController`]，按名称保存若干条补间轨道。
//! 轨道在 `play` 之前不会求值；播放结束后停留在 `Finished` 状态，
//! 直到下一次 `add` 用同名轨道整体替换它。

use super::easing::{lerp, EaseFunction};
use crate::core::{AnimationError, AnimationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 可被补间写入属性的对象
pub trait TweenTarget {
    /// 按名称写入属性值，未知属性返回 `AnimationError::UnknownProperty`
    fn set_tween_property(&mut self, property: &str, value: f32) -> AnimationResult<()>;
}

/// 单个属性的补间效果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenEffect {
    /// 目标属性名
    pub property: String,
    /// 起始值
    pub start: f32,
    /// 结束值
    pub end: f32,
    /// 缓动函数
    #[serde(default)]
    pub ease: EaseFunction,
}

impl TweenEffect {
    pub fn new(property: impl Into<String>, start: f32, end: f32, ease: EaseFunction) -> Self {
        Self {
            property: property.into(),
            start,
            end,
            ease,
        }
    }

    /// 归一化时间 `t` 处的属性值
    pub fn sample(&self, t: f32) -> f32 {
        lerp(self.start, self.end, self.ease.apply(t))
    }
}

/// 补间轨道定义 (时间单位：毫秒)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenDefinition {
    /// 开始前的延迟
    #[serde(default)]
    pub start_delay: f32,
    /// 持续时间
    pub duration: f32,
    /// 效果列表
    #[serde(default)]
    pub effects: Vec<TweenEffect>,
    /// 是否循环
    #[serde(default)]
    pub looping: bool,
    /// 播放结束后是否反向播放一遍
    #[serde(default)]
    pub reverse_on_complete: bool,
}

impl TweenDefinition {
    pub fn new(duration: f32) -> Self {
        Self {
            start_delay: 0.0,
            duration: duration.max(0.0),
            effects: Vec::new(),
            looping: false,
            reverse_on_complete: false,
        }
    }

    pub fn with_delay(mut self, start_delay: f32) -> Self {
        self.start_delay = start_delay.max(0.0);
        self
    }

    pub fn with_effect(mut self, effect: TweenEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn reverse_on_complete(mut self) -> Self {
        self.reverse_on_complete = true;
        self
    }
}

/// 轨道播放状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Stopped,
    Playing,
    Paused,
    /// 已播放完毕 (终止状态)
    Finished,
}

/// 轨道运行时数据
#[derive(Debug, Clone)]
pub struct Tween {
    definition: TweenDefinition,
    state: TweenState,
    elapsed_ms: f32,
    reversing: bool,
    /// 本次播放中已因属性未知而跳过的效果
    skipped: Vec<bool>,
}

impl Tween {
    fn new(definition: TweenDefinition) -> Self {
        let skipped = vec![false; definition.effects.len()];
        Self {
            definition,
            state: TweenState::Stopped,
            elapsed_ms: 0.0,
            reversing: false,
            skipped,
        }
    }

    fn rewind(&mut self) {
        self.elapsed_ms = 0.0;
        self.reversing = false;
        self.skipped.iter_mut().for_each(|s| *s = false);
    }

    pub fn definition(&self) -> &TweenDefinition {
        &self.definition
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    /// 自播放开始累计的时间 (含延迟)
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    fn advance(&mut self, name: &str, delta_ms: f32, target: &mut dyn TweenTarget) {
        if self.state != TweenState::Playing {
            return;
        }

        self.elapsed_ms += delta_ms;
        let start_delay = self.definition.start_delay;
        if self.elapsed_ms < start_delay {
            return;
        }

        let local = self.elapsed_ms - start_delay;
        let duration = self.definition.duration;
        if local < duration {
            let t = local / duration;
            let t = if self.reversing { 1.0 - t } else { t };
            self.write(name, t, target);
            return;
        }

        // 本段结束，精确写入端点值
        self.write(name, if self.reversing { 0.0 } else { 1.0 }, target);

        if self.definition.reverse_on_complete && !self.reversing {
            self.reversing = true;
            self.elapsed_ms = start_delay;
        } else if self.definition.looping {
            self.reversing = false;
            self.elapsed_ms = start_delay;
        } else {
            self.state = TweenState::Finished;
            tracing::trace!(target: "animation", tween = name, "Tween finished");
        }
    }

    /// 直接跳到终点：写入最终值并进入 `Finished`
    ///
    /// 往返轨道的最终值是起点，其余轨道是终点。
    fn complete(&mut self, name: &str, target: &mut dyn TweenTarget) {
        if !matches!(self.state, TweenState::Playing | TweenState::Paused) {
            return;
        }
        let t = if self.definition.reverse_on_complete { 0.0 } else { 1.0 };
        self.write(name, t, target);
        self.reversing = false;
        self.state = TweenState::Finished;
    }

    fn write(&mut self, name: &str, t: f32, target: &mut dyn TweenTarget) {
        for (effect, skipped) in self.definition.effects.iter().zip(self.skipped.iter_mut()) {
            if *skipped {
                continue;
            }
            if let Err(err) = target.set_tween_property(&effect.property, effect.sample(t)) {
                tracing::warn!(target: "animation", tween = name, "Skipping tween effect: {}", err);
                *skipped = true;
            }
        }
    }
}

/// 补间控制器，按名称管理一组轨道
#[derive(Debug, Clone, Default)]
pub struct TweenController {
    tweens: HashMap<String, Tween>,
}

impl TweenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或替换轨道，新轨道处于停止状态
    pub fn add(&mut self, name: impl Into<String>, definition: TweenDefinition) {
        self.tweens.insert(name.into(), Tween::new(definition));
    }

    /// 从头开始播放轨道
    pub fn play(&mut self, name: &str) -> AnimationResult<()> {
        let tween = self
            .tweens
            .get_mut(name)
            .ok_or_else(|| AnimationError::UnknownTween(name.to_string()))?;
        tween.rewind();
        tween.state = TweenState::Playing;
        Ok(())
    }

    /// 以循环模式播放轨道
    pub fn play_looping(&mut self, name: &str) -> AnimationResult<()> {
        let tween = self
            .tweens
            .get_mut(name)
            .ok_or_else(|| AnimationError::UnknownTween(name.to_string()))?;
        tween.definition.looping = true;
        self.play(name)
    }

    /// 停止轨道，不存在时什么也不做
    pub fn stop(&mut self, name: &str) {
        if let Some(tween) = self.tweens.get_mut(name) {
            tween.state = TweenState::Stopped;
            tween.rewind();
        }
    }

    /// 停止全部轨道
    pub fn stop_all(&mut self) {
        for tween in self.tweens.values_mut() {
            tween.state = TweenState::Stopped;
            tween.rewind();
        }
    }

    pub fn pause(&mut self, name: &str) {
        if let Some(tween) = self.tweens.get_mut(name) {
            if tween.state == TweenState::Playing {
                tween.state = TweenState::Paused;
            }
        }
    }

    pub fn resume(&mut self, name: &str) {
        if let Some(tween) = self.tweens.get_mut(name) {
            if tween.state == TweenState::Paused {
                tween.state = TweenState::Playing;
            }
        }
    }

    /// 推进所有正在播放的轨道并把插值结果写入目标
    pub fn advance(&mut self, delta_seconds: f32, target: &mut dyn TweenTarget) {
        let delta_ms = delta_seconds * 1000.0;
        for (name, tween) in self.tweens.iter_mut() {
            tween.advance(name, delta_ms, target);
        }
    }

    /// 立即结束轨道并写入最终值，轨道未在播放时什么也不做
    pub fn complete(&mut self, name: &str, target: &mut dyn TweenTarget) {
        if let Some(tween) = self.tweens.get_mut(name) {
            tween.complete(name, target);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tween> {
        self.tweens.get(name)
    }

    pub fn state(&self, name: &str) -> Option<TweenState> {
        self.tweens.get(name).map(Tween::state)
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.state(name) == Some(TweenState::Playing)
    }

    pub fn is_finished(&self, name: &str) -> bool {
        self.state(name) == Some(TweenState::Finished)
    }

    /// 是否有任何轨道正在播放
    pub fn any_playing(&self) -> bool {
        self.tweens.values().any(|t| t.state == TweenState::Playing)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tweens.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TweenDefinition> {
        self.tweens.remove(name).map(|t| t.definition)
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}
