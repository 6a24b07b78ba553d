//! 定时器封装模块
//!
//! 基于 `gloo-timers` 的 `setTimeout` 实现核心库的 `Scheduler`。

use gloo_timers::callback::Timeout;
use jamdate::timer::{Scheduled, Scheduler};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Scheduled {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, callback);
        // Timeout 被 drop 时执行 clearTimeout，已触发的定时器上调用也是安全的
        Scheduled::new(move || drop(timeout))
    }
}
