//! Value overlay timing.
//!
//! While the knob is being manipulated its caption shows the formatted
//! value instead of the label. Every interaction re-arms a one second
//! expiry; when it fires with no drag in progress the caption reverts to
//! the label, otherwise the expiry is re-armed and checked again later.

/// Seconds of inactivity before the caption reverts to the label.
pub const VALUE_DISPLAY_SECONDS: f64 = 1.0;

/// Duration of the fade back to the label.
pub const FADE_SECONDS: f32 = 0.25;

/// Which text the caption currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    ShowingLabel,
    ShowingValue,
}

/// A single cancellable deadline on the UI clock.
///
/// Arming replaces any pending deadline, so at most one is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpiryTimer {
    deadline: Option<f64>,
}

impl ExpiryTimer {
    /// Cancel any pending deadline and schedule a new one `delay` seconds from `now`.
    pub fn arm(&mut self, now: f64, delay: f64) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the pending deadline has been reached.
    pub fn has_expired(&self, now: f64) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Seconds until the pending deadline, if any.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now).max(0.0))
    }
}

/// Display state machine for the caption.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueOverlay {
    state: DisplayState,
    timer: ExpiryTimer,
}

impl ValueOverlay {
    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn timer(&self) -> &ExpiryTimer {
        &self.timer
    }

    /// Pointer made contact with the control.
    pub fn contact_started(&mut self, now: f64) {
        self.state = DisplayState::ShowingValue;
        self.timer.arm(now, VALUE_DISPLAY_SECONDS);
    }

    /// A gesture changed or ended. Postpones the expiry without changing state.
    pub fn touch(&mut self, now: f64) {
        self.timer.arm(now, VALUE_DISPLAY_SECONDS);
    }

    /// Check the expiry. Returns the new state when a transition happened.
    pub fn poll(&mut self, now: f64, drag_active: bool) -> Option<DisplayState> {
        if !self.timer.has_expired(now) {
            return None;
        }

        if drag_active {
            self.state = DisplayState::ShowingValue;
            self.timer.arm(now, VALUE_DISPLAY_SECONDS);
            return None;
        }

        self.timer.cancel();
        if self.state == DisplayState::ShowingLabel {
            return None;
        }
        self.state = DisplayState::ShowingLabel;
        Some(self.state)
    }
}
