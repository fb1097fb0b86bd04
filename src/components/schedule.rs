//! Named, cancellable delayed work.
//!
//! Every timed step of the player lives in its own slot. Scheduling into a
//! slot cancels whatever was waiting there, so rapid input cannot stack up
//! overlapping callbacks.

use dioxus::prelude::*;
use rustydeck::timeline::TaskSlot;

#[derive(Clone, Copy, PartialEq)]
pub struct ScheduledTask {
    slot: Signal<TaskSlot<Task>>,
}

impl ScheduledTask {
    /// Must be called while a component is rendering (inside a hook).
    pub fn new() -> Self {
        Self {
            slot: Signal::new(TaskSlot::default()),
        }
    }

    /// Run `work` after `delay_ms`, replacing anything already pending here.
    pub fn schedule<F>(mut self, delay_ms: u32, work: F)
    where
        F: FnOnce() + 'static,
    {
        let generation = self.slot.write().reserve();
        let task = spawn(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            // Cleared first so `work` may reschedule into this slot.
            let due = self.slot.write().fire(generation);
            if due {
                work();
            }
        });
        let replaced = self.slot.write().arm(generation, task);
        if let Some(previous) = replaced {
            previous.cancel();
        }
    }

    pub fn cancel(mut self) {
        let pending = self.slot.write().cancel();
        if let Some(task) = pending {
            task.cancel();
        }
    }
}
