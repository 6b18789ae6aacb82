use std::time::Duration;

// Absorbs rounding when the host derives `now` by repeated addition.
const DEADLINE_SLACK_SEC: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A new expiry timer was armed.
    Scheduled,
    /// A timer was already pending; state stays Animating, no second timer.
    AlreadyPending,
}

/// Handle to an armed expiry. Owned by [`TriggeredAnimation`]; dropping it
/// cancels the expiry.
#[derive(Debug, PartialEq)]
pub struct PendingTimer {
    id: u64,
    deadline_sec: f64,
}

impl PendingTimer {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn deadline_sec(&self) -> f64 {
        self.deadline_sec
    }

    fn is_due(&self, now_sec: f64) -> bool {
        now_sec + DEADLINE_SLACK_SEC >= self.deadline_sec
    }
}

#[derive(Debug)]
pub struct TriggeredAnimation {
    state: AnimationState,
    pending: Option<PendingTimer>,
    duration: Duration,
    next_timer_id: u64,
    trigger_count: u64,
}

impl TriggeredAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: AnimationState::Idle,
            pending: None,
            duration,
            next_timer_id: 1,
            trigger_count: 0,
        }
    }

    pub fn trigger(&mut self, now_sec: f64) -> TriggerOutcome {
        self.state = AnimationState::Animating;
        self.trigger_count += 1;
        if self.pending.is_some() {
            log::debug!("trigger at {now_sec:.3}s ignored for scheduling; timer pending");
            return TriggerOutcome::AlreadyPending;
        }
        let timer = PendingTimer {
            id: self.next_timer_id,
            deadline_sec: now_sec + self.duration.as_secs_f64(),
        };
        self.next_timer_id += 1;
        log::debug!(
            "animation timer {} armed, expires at {:.3}s",
            timer.id,
            timer.deadline_sec
        );
        self.pending = Some(timer);
        TriggerOutcome::Scheduled
    }

    /// Fire the expiry if due. Returns the state after the check.
    pub fn tick(&mut self, now_sec: f64) -> AnimationState {
        if let Some(timer) = &self.pending {
            if timer.is_due(now_sec) {
                log::debug!("animation timer {} expired at {now_sec:.3}s", timer.id);
                self.pending = None;
                self.state = AnimationState::Idle;
            }
        }
        self.state
    }

    /// Release any pending timer and return to Idle. Returns true if a timer
    /// was outstanding.
    pub fn cancel(&mut self) -> bool {
        self.state = AnimationState::Idle;
        match self.pending.take() {
            Some(timer) => {
                log::debug!("animation timer {} cancelled", timer.id);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state == AnimationState::Animating
    }

    pub fn pending(&self) -> Option<&PendingTimer> {
        self.pending.as_ref()
    }

    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
