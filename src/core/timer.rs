//! 运行计时器
//!
//! 粒子系统整体运行时长的倒计时。计时器由帧增量推进，
//! 而不是读取墙钟，所以同样的帧序列总会得到同样的结果。

/// 计时器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// 尚未启动
    Idle,
    /// 正在倒计时
    Active,
    /// 已经走完
    Stopped,
}

/// 有限时长倒计时 (毫秒)
#[derive(Debug, Clone)]
pub struct Timer {
    total_ms: f32,
    remaining_ms: f32,
    state: TimerState,
}

impl Timer {
    /// 创建计时器，`total_ms` 会被截断到非负值
    pub fn new(total_ms: f32) -> Self {
        let total_ms = total_ms.max(0.0);
        Self {
            total_ms,
            remaining_ms: total_ms,
            state: TimerState::Idle,
        }
    }

    /// 开始 (或重新开始) 倒计时
    pub fn start(&mut self) {
        self.remaining_ms = self.total_ms;
        self.state = if self.total_ms > 0.0 {
            TimerState::Active
        } else {
            TimerState::Stopped
        };
    }

    /// 推进计时器
    pub fn update(&mut self, delta_ms: f32) {
        if self.state != TimerState::Active {
            return;
        }
        self.remaining_ms -= delta_ms;
        if self.remaining_ms <= 0.0 {
            self.remaining_ms = 0.0;
            self.state = TimerState::Stopped;
        }
    }

    /// 倒计时是否已经结束
    pub fn is_stopped(&self) -> bool {
        self.state == TimerState::Stopped
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn total_ms(&self) -> f32 {
        self.total_ms
    }

    pub fn remaining_ms(&self) -> f32 {
        self.remaining_ms
    }
}
