//! Sequencing of the player's delayed steps.
//!
//! Every timed follow-up lives in a named [`Slot`]. The controller turns each
//! user or media event into a [`SlotPlan`] and applies it; the plan decides
//! which slots are cancelled and which are armed, and with what delay.
//! [`TaskSlot`] holds the task for one slot and [`KeyQueue`] serialises
//! keyboard actions that wait out their feedback delay.

use crate::config::Timing;
use crate::navigator::Transition;
use crate::playback::PlaybackState;
use crate::surface::{advances_on_end, ControlId};

/// A named place for one pending delayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Call `play()` once a new source has settled.
    PlaybackStart,
    /// Drop the transition guard.
    GuardRelease,
    /// Move on after a track ended.
    AutoAdvance,
    /// Run the keyboard action that is waiting.
    KeyAction,
    /// Clear a control's flash/press classes.
    FeedbackReset(ControlId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOp {
    Cancel(Slot),
    /// Arm `slot`, replacing whatever was pending there.
    Schedule { slot: Slot, delay_ms: u32 },
}

/// Ordered slot operations for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotPlan {
    ops: Vec<SlotOp>,
}

impl SlotPlan {
    pub fn ops(&self) -> &[SlotOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append `other` after this plan's operations.
    pub fn then(mut self, other: SlotPlan) -> Self {
        self.ops.extend(other.ops);
        self
    }

    fn cancel(mut self, slot: Slot) -> Self {
        self.ops.push(SlotOp::Cancel(slot));
        self
    }

    fn schedule(mut self, slot: Slot, delay_ms: u32) -> Self {
        self.ops.push(SlotOp::Schedule { slot, delay_ms });
        self
    }

    /// Whether `slot` ends up cancelled or re-armed by this plan.
    pub fn touches(&self, slot: Slot) -> bool {
        self.ops.iter().any(|op| match *op {
            SlotOp::Cancel(s) | SlotOp::Schedule { slot: s, .. } => s == slot,
        })
    }

    /// Delay `slot` is armed with, if the plan arms it.
    pub fn delay_of(&self, slot: Slot) -> Option<u32> {
        self.ops.iter().rev().find_map(|op| match *op {
            SlotOp::Schedule { slot: s, delay_ms } if s == slot => Some(delay_ms),
            _ => None,
        })
    }

    /// A user-initiated next/previous. A pending end-of-track advance would
    /// skip a second time, so it goes.
    pub fn manual_step() -> Self {
        Self::default().cancel(Slot::AutoAdvance)
    }

    /// Follow-ups of a loaded track: start playback after the settle delay,
    /// and for automatic changes release the guard in its own slot at
    /// settle + guard. Cancelling the pending play never strands the guard.
    pub fn transition(transition: &Transition, timing: &Timing) -> Self {
        let plan = Self::default().schedule(Slot::PlaybackStart, timing.settle_ms);
        if transition.holds_guard() {
            plan.schedule(
                Slot::GuardRelease,
                timing.settle_ms + timing.transition_guard_ms,
            )
        } else {
            plan
        }
    }

    /// Turning random on jumps tracks right away, which replaces any pending
    /// auto-advance.
    pub fn random_jump(transition: &Transition, timing: &Timing) -> Self {
        Self::manual_step().then(Self::transition(transition, timing))
    }

    /// The media element reported `ended`. Repeat mode loops natively.
    pub fn media_ended(state: &PlaybackState, timing: &Timing) -> Self {
        if advances_on_end(state) {
            Self::default().schedule(Slot::AutoAdvance, timing.ended_delay_ms)
        } else {
            Self::default()
        }
    }

    /// A key was accepted; its action runs after the feedback delay.
    pub fn key_pressed(timing: &Timing) -> Self {
        Self::default().schedule(Slot::KeyAction, timing.feedback_ms)
    }

    /// A control flashed or was pressed; a new flash restarts its reset.
    pub fn feedback(control: ControlId, timing: &Timing) -> Self {
        Self::default().schedule(Slot::FeedbackReset(control), timing.feedback_ms)
    }

    /// Touch release clears a control's feedback immediately.
    pub fn feedback_cleared(control: ControlId) -> Self {
        Self::default().cancel(Slot::FeedbackReset(control))
    }
}

/// The task pending in one slot, tagged with the generation that armed it.
///
/// A timer that fires after its slot was re-armed or cancelled carries a stale
/// generation and is ignored by [`TaskSlot::fire`].
#[derive(Debug)]
pub struct TaskSlot<H> {
    pending: Option<(u64, H)>,
    generation: u64,
}

impl<H> Default for TaskSlot<H> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<H> TaskSlot<H> {
    /// Generation for the next task to be armed here.
    pub fn reserve(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Store `handle` as the pending task. Returns the task it replaces, which
    /// the caller must cancel.
    pub fn arm(&mut self, generation: u64, handle: H) -> Option<H> {
        self.pending
            .replace((generation, handle))
            .map(|(_, previous)| previous)
    }

    /// Remove the pending task, if any, for the caller to cancel.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take().map(|(_, handle)| handle)
    }

    /// A timer armed with `generation` elapsed. Clears the slot and returns
    /// whether its work should run.
    pub fn fire(&mut self, generation: u64) -> bool {
        match self.pending {
            Some((armed, _)) if armed == generation => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Holds at most one keyboard action waiting for its delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyQueue<T> {
    pending: Option<T>,
}

impl<T> Default for KeyQueue<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> KeyQueue<T> {
    /// Queue `action`. The one still waiting, if any, is handed back and must
    /// run now, before `action`.
    pub fn push(&mut self, action: T) -> Option<T> {
        self.pending.replace(action)
    }

    /// The delay elapsed; take the waiting action.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::Trigger;

    fn transition(trigger: Trigger) -> Transition {
        Transition { index: 1, trigger }
    }

    #[test]
    fn manual_step_cancels_pending_auto_advance() {
        let plan = SlotPlan::manual_step();
        assert_eq!(plan.ops(), &[SlotOp::Cancel(Slot::AutoAdvance)]);
    }

    #[test]
    fn manual_transition_only_starts_playback() {
        let timing = Timing::default();
        let plan = SlotPlan::transition(&transition(Trigger::Manual), &timing);

        assert_eq!(plan.delay_of(Slot::PlaybackStart), Some(timing.settle_ms));
        assert!(!plan.touches(Slot::GuardRelease));
    }

    #[test]
    fn automatic_transition_releases_guard_in_its_own_slot() {
        let timing = Timing::default();
        let plan = SlotPlan::transition(&transition(Trigger::Automatic), &timing);

        assert_eq!(plan.delay_of(Slot::PlaybackStart), Some(100));
        assert_eq!(plan.delay_of(Slot::GuardRelease), Some(600));
    }

    #[test]
    fn skip_during_automatic_transition_keeps_guard_release() {
        let timing = Timing::default();
        let plan = SlotPlan::transition(&transition(Trigger::Automatic), &timing)
            .then(SlotPlan::manual_step())
            .then(SlotPlan::transition(&transition(Trigger::Manual), &timing));

        // The skip re-arms playback but leaves the guard release alone.
        assert!(plan
            .ops()
            .iter()
            .all(|op| *op != SlotOp::Cancel(Slot::GuardRelease)));
        assert_eq!(plan.delay_of(Slot::GuardRelease), Some(600));
    }

    #[test]
    fn random_jump_replaces_auto_advance() {
        let timing = Timing::default();
        let plan = SlotPlan::random_jump(&transition(Trigger::Manual), &timing);

        assert_eq!(plan.ops()[0], SlotOp::Cancel(Slot::AutoAdvance));
        assert_eq!(plan.delay_of(Slot::PlaybackStart), Some(timing.settle_ms));
    }

    #[test]
    fn ended_schedules_advance_unless_repeating() {
        let timing = Timing::default();
        let mut state = PlaybackState::default();

        let plan = SlotPlan::media_ended(&state, &timing);
        assert_eq!(plan.delay_of(Slot::AutoAdvance), Some(timing.ended_delay_ms));

        state.toggle_repeat();
        assert!(SlotPlan::media_ended(&state, &timing).is_empty());
    }

    #[test]
    fn feedback_plans_target_the_control() {
        let timing = Timing::default();
        let flash = SlotPlan::feedback(ControlId::Next, &timing);
        assert_eq!(
            flash.delay_of(Slot::FeedbackReset(ControlId::Next)),
            Some(timing.feedback_ms)
        );
        assert!(!flash.touches(Slot::FeedbackReset(ControlId::Previous)));

        let cleared = SlotPlan::feedback_cleared(ControlId::Next);
        assert_eq!(
            cleared.ops(),
            &[SlotOp::Cancel(Slot::FeedbackReset(ControlId::Next))]
        );
    }

    #[test]
    fn arming_a_slot_hands_back_the_task_to_cancel() {
        let mut slot = TaskSlot::default();
        let first = slot.reserve();
        assert_eq!(slot.arm(first, "first"), None);

        let second = slot.reserve();
        assert_eq!(slot.arm(second, "second"), Some("first"));

        // The replaced timer may still fire; it must not run.
        assert!(!slot.fire(first));
        assert!(slot.is_armed());
        assert!(slot.fire(second));
        assert!(!slot.is_armed());
    }

    #[test]
    fn cancelled_slot_ignores_its_timer() {
        let mut slot = TaskSlot::default();
        let generation = slot.reserve();
        slot.arm(generation, 7);

        assert_eq!(slot.cancel(), Some(7));
        assert!(!slot.fire(generation));
        assert_eq!(slot.cancel(), None);
    }

    #[test]
    fn firing_clears_before_rearming() {
        let mut slot = TaskSlot::default();
        let generation = slot.reserve();
        slot.arm(generation, ());
        assert!(slot.fire(generation));

        let next = slot.reserve();
        assert_eq!(slot.arm(next, ()), None);
        assert!(slot.fire(next));
    }

    #[test]
    fn key_queue_flushes_waiting_action_in_order() {
        let mut queue = KeyQueue::default();
        let mut ran = Vec::new();

        for key in ["space", "right", "left"] {
            if let Some(waiting) = queue.push(key) {
                ran.push(waiting);
            }
        }
        ran.extend(queue.take());

        assert_eq!(ran, ["space", "right", "left"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn key_queue_take_after_flush_is_empty() {
        let mut queue = KeyQueue::default();
        assert_eq!(queue.push(1), None);
        assert_eq!(queue.take(), Some(1));
        assert_eq!(queue.take(), None);
    }

    #[test]
    fn key_press_waits_for_feedback_delay() {
        let timing = Timing::default();
        assert_eq!(
            SlotPlan::key_pressed(&timing).delay_of(Slot::KeyAction),
            Some(timing.feedback_ms)
        );
    }
}
