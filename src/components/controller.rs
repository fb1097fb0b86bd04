//! Player controller - owns playback state and every timed side effect.
//! Components and document listeners call into it; nothing else writes the
//! navigator or touches the media element.

use crate::components::schedule::ScheduledTask;
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use rustydeck::surface::{label_on_pause, label_on_play, play_click, toggle_play_pause};
use rustydeck::timeline::{KeyQueue, Slot, SlotOp, SlotPlan};
use rustydeck::web::{focused_element, trigger_download, ControlRefs};
use rustydeck::{
    input::clears_on_touch_end, ControlId, Direction, DownloadRequest, FeedbackBoard,
    FocusTracker, KeyAction, MediaElement, Navigator, PlayLabel, PlayerConfig, PlayerError,
    Playlist, Trigger,
};
use web_sys::HtmlElement;

/// A keyboard action waiting out its feedback delay.
#[derive(Clone)]
struct PendingKey {
    action: KeyAction,
    /// Element that had focus when Enter was pressed.
    focused: Option<HtmlElement>,
}

#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    pub navigator: Signal<Navigator>,
    pub label: Signal<PlayLabel>,
    pub config: Signal<PlayerConfig>,
    pub feedback: Signal<FeedbackBoard>,
    pub focus: Signal<FocusTracker>,
    refs: Signal<Option<ControlRefs>>,
    keys: Signal<KeyQueue<PendingKey>>,
    playback_start: ScheduledTask,
    guard_release: ScheduledTask,
    auto_advance: ScheduledTask,
    key_action: ScheduledTask,
    feedback_reset: [ScheduledTask; ControlId::ALL.len()],
}

/// Create the controller for this component tree.
pub fn use_player_controller() -> PlayerController {
    let navigator = use_signal(Navigator::default);
    let label = use_signal(PlayLabel::default);
    let config = use_signal(PlayerConfig::default);
    let feedback = use_signal(FeedbackBoard::default);
    let focus = use_signal(FocusTracker::default);
    let refs = use_signal(|| None::<ControlRefs>);
    let keys = use_signal(KeyQueue::<PendingKey>::default);

    use_hook(|| PlayerController {
        navigator,
        label,
        config,
        feedback,
        focus,
        refs,
        keys,
        playback_start: ScheduledTask::new(),
        guard_release: ScheduledTask::new(),
        auto_advance: ScheduledTask::new(),
        key_action: ScheduledTask::new(),
        feedback_reset: std::array::from_fn(|_| ScheduledTask::new()),
    })
}

impl PlayerController {
    fn refs(&self) -> Option<ControlRefs> {
        self.refs.with_peek(|refs| refs.clone())
    }

    pub fn attach(mut self, refs: ControlRefs) {
        self.refs.set(Some(refs));
    }

    pub fn configure(mut self, config: PlayerConfig) {
        self.config.set(config);
    }

    /// Swap in a freshly fetched playlist and cue its first track.
    pub fn install_playlist(mut self, playlist: Playlist) {
        let Some(refs) = self.refs() else {
            warn!("playlist arrived before the media element was bound");
            return;
        };
        let tracks = playlist.len();
        let cued = self.navigator.write().install(&refs.media, playlist);
        info!(tracks, cued, "playlist installed");
    }

    fn task(&self, slot: Slot) -> ScheduledTask {
        match slot {
            Slot::PlaybackStart => self.playback_start,
            Slot::GuardRelease => self.guard_release,
            Slot::AutoAdvance => self.auto_advance,
            Slot::KeyAction => self.key_action,
            Slot::FeedbackReset(control) => self.feedback_reset[control.index()],
        }
    }

    fn apply(self, plan: SlotPlan) {
        for op in plan.ops() {
            match *op {
                SlotOp::Cancel(slot) => self.task(slot).cancel(),
                SlotOp::Schedule { slot, delay_ms } => {
                    self.task(slot).schedule(delay_ms, move || self.fire(slot))
                }
            }
        }
    }

    /// A slot's delay elapsed.
    fn fire(mut self, slot: Slot) {
        match slot {
            Slot::PlaybackStart => {
                if let Some(refs) = self.refs() {
                    MediaElement::play(&refs.media);
                }
            }
            Slot::GuardRelease => self.navigator.write().finish_transition(),
            Slot::AutoAdvance => {
                if let Some(refs) = self.refs() {
                    self.advance(&refs, Direction::Forward, Trigger::Automatic);
                }
            }
            Slot::KeyAction => {
                let waiting = self.keys.write().take();
                if let Some(waiting) = waiting {
                    self.perform_key(waiting);
                }
            }
            Slot::FeedbackReset(control) => self.feedback.write().clear(control),
        }
    }

    fn click(&self, refs: &ControlRefs) {
        if self.config.peek().click_sound_url.is_some() {
            play_click(&refs.click);
        }
    }

    /// A control was clicked (or activated through Enter).
    pub fn activate(self, control: ControlId) {
        self.flash(control);
        match control {
            ControlId::PlayPause => self.toggle_play(),
            ControlId::Previous => self.step(Direction::Backward),
            ControlId::Next => self.step(Direction::Forward),
            ControlId::Repeat => self.toggle_repeat(),
            ControlId::Random => self.toggle_random(),
            ControlId::Download => self.download(),
        }
    }

    pub fn toggle_play(mut self) {
        let Some(refs) = self.refs() else {
            return;
        };
        self.click(&refs);
        self.label.set(toggle_play_pause(&refs.media));
    }

    /// User-initiated next/previous.
    pub fn step(self, direction: Direction) {
        let Some(refs) = self.refs() else {
            return;
        };
        self.click(&refs);
        self.apply(SlotPlan::manual_step());
        self.advance(&refs, direction, Trigger::Manual);
    }

    fn advance(mut self, refs: &ControlRefs, direction: Direction, trigger: Trigger) {
        let transition =
            self.navigator
                .write()
                .advance(&refs.media, &mut rand::thread_rng(), direction, trigger);
        let Some(transition) = transition else {
            debug!("advance ignored, playlist is empty");
            return;
        };
        let timing = self.config.peek().timing;
        self.apply(SlotPlan::transition(&transition, &timing));
        debug!(index = transition.index, trigger = ?transition.trigger, "track changed");
    }

    pub fn toggle_repeat(mut self) {
        let Some(refs) = self.refs() else {
            return;
        };
        self.click(&refs);
        let change = self.navigator.write().toggle_repeat(&refs.media);
        debug!(mode = ?change.current, "repeat toggled");
    }

    pub fn toggle_random(mut self) {
        let Some(refs) = self.refs() else {
            return;
        };
        self.click(&refs);
        let (change, transition) = self
            .navigator
            .write()
            .toggle_random(&refs.media, &mut rand::thread_rng());
        debug!(mode = ?change.current, "random toggled");
        if let Some(transition) = transition {
            let timing = self.config.peek().timing;
            self.apply(SlotPlan::random_jump(&transition, &timing));
        }
    }

    pub fn download(self) {
        let Some(refs) = self.refs() else {
            return;
        };
        self.click(&refs);
        let request = {
            let navigator = self.navigator.peek();
            let config = self.config.peek();
            DownloadRequest::for_track(navigator.current_track(), &config.fallback_filename)
        };
        let result = request.and_then(|request| {
            trigger_download(&request)?;
            Ok(request)
        });
        match result {
            Ok(request) => info!(filename = %request.filename, "download started"),
            Err(PlayerError::NoCurrentTrack) => debug!("download ignored, no current track"),
            Err(err) => warn!(%err, "download failed"),
        }
    }

    pub fn media_ended(self) {
        let timing = self.config.peek().timing;
        let plan = SlotPlan::media_ended(self.navigator.peek().state(), &timing);
        self.apply(plan);
    }

    pub fn media_paused(mut self) {
        let ended = self
            .refs()
            .map(|refs| MediaElement::has_ended(&refs.media))
            .unwrap_or(false);
        let update = label_on_pause(self.navigator.peek().state(), ended);
        if let Some(next) = update {
            self.label.set(next);
        }
    }

    pub fn media_played(mut self) {
        let update = label_on_play(self.navigator.peek().state());
        if let Some(next) = update {
            self.label.set(next);
        }
    }

    pub fn flash(mut self, control: ControlId) {
        self.feedback.write().flash(control);
        self.reset_feedback_later(control);
    }

    fn press(mut self, control: ControlId) {
        self.feedback.write().press(control);
        self.reset_feedback_later(control);
    }

    fn reset_feedback_later(self, control: ControlId) {
        let timing = self.config.peek().timing;
        self.apply(SlotPlan::feedback(control, &timing));
    }

    /// Map a key code to an action under the current mode and bindings.
    pub fn resolve_key(&self, code: &str, focus_activatable: bool) -> Option<KeyAction> {
        let bindings = self.config.peek().key_bindings();
        bindings.resolve(code, self.navigator.peek().state(), focus_activatable)
    }

    /// Show key feedback now, run the action after the feedback delay.
    ///
    /// A key that arrives while another is still waiting flushes the waiting
    /// one first, so fast presses are serialised rather than dropped.
    pub fn handle_key(mut self, action: KeyAction) {
        let focused = match action {
            KeyAction::ActivateFocused => focused_element(),
            _ => None,
        };
        let waiting = self.keys.write().push(PendingKey {
            action,
            focused: focused.clone(),
        });
        if let Some(waiting) = waiting {
            self.perform_key(waiting);
        }

        let target = action
            .control()
            .or_else(|| ControlId::from_dom_id(&focused.as_ref()?.id()));
        if let Some(control) = target {
            self.press(control);
        }
        if action == KeyAction::TogglePlay {
            self.focus_control(ControlId::PlayPause);
        }

        let timing = self.config.peek().timing;
        self.apply(SlotPlan::key_pressed(&timing));
    }

    fn perform_key(self, pending: PendingKey) {
        match pending.action {
            KeyAction::TogglePlay => self.toggle_play(),
            KeyAction::Next => {
                self.focus_control(ControlId::Next);
                self.step(Direction::Forward);
            }
            KeyAction::Previous => {
                self.focus_control(ControlId::Previous);
                self.step(Direction::Backward);
            }
            KeyAction::ActivateFocused => {
                if let Some(element) = pending.focused {
                    element.click();
                }
            }
        }
    }

    fn focus_control(&self, control: ControlId) {
        if !self.config.peek().focus_follows_keys {
            return;
        }
        if let Some(refs) = self.refs() {
            refs.focus(control);
        }
    }

    pub fn control_focused(mut self, control: ControlId) {
        let hovered = self
            .refs()
            .map(|refs| refs.is_hovered(control))
            .unwrap_or(false);
        self.focus.write().on_focus(hovered);
    }

    /// Mouse press or touch anywhere on the page.
    pub fn pointer_down(mut self) {
        if self.focus.peek().is_keyboard() {
            self.focus.write().on_pointer_down();
        }
        if let Some(refs) = self.refs() {
            refs.blur_all();
        }
    }

    pub fn touch_released(mut self, control: ControlId) {
        if !clears_on_touch_end(control) {
            return;
        }
        if let Some(refs) = self.refs() {
            refs.blur(control);
        }
        self.apply(SlotPlan::feedback_cleared(control));
        self.feedback.write().clear(control);
    }
}
