use instant::{Duration, Instant};
use serde::{Deserialize, Serialize};

use crate::settings::SettingsTransition;

const KEY_PREFIX: &str = "egui_mission_panel_state";

fn state_key(id: Option<String>) -> egui::Id {
    egui::Id::new(format!("{KEY_PREFIX}_{}", id.unwrap_or_default()))
}

/// Style mutation scheduled to run once a transition delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StyleChange {
    /// Remove the toggle control from layout after its fade-out has played.
    HideControl,
    /// Bring the toggle control back to full opacity after it is laid out again.
    RestoreControlOpacity,
}

#[derive(Clone, Copy, Debug)]
struct PendingChange {
    due: Instant,
    change: StyleChange,
}

/// Visibility state of the panel and its toggle control.
///
/// Stored in egui's data map between frames, keyed by an optional custom id so
/// multiple panels in the same UI keep separate state. At most one style change
/// is pending at a time; scheduling a new one replaces it, so a stale
/// transition can never overwrite a newer state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanelState {
    shown: bool,
    control_displayed: bool,
    control_opacity: f32,
    #[serde(skip)]
    pending: Option<PendingChange>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            shown: false,
            control_displayed: true,
            control_opacity: 1.,
            pending: None,
        }
    }
}

impl PanelState {
    pub fn load(ui: &egui::Ui, id: Option<String>) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Self>(state_key(id))
                .unwrap_or_default()
        })
    }

    pub fn save(self, ui: &mut egui::Ui, id: Option<String>) {
        ui.data_mut(|data| {
            data.insert_persisted(state_key(id), self);
        });
    }

    /// Whether the panel is currently shown.
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Whether the toggle control participates in layout.
    pub fn control_displayed(&self) -> bool {
        self.control_displayed
    }

    /// Current opacity endpoint of the toggle control, 0.0 or 1.0.
    pub fn control_opacity(&self) -> f32 {
        self.control_opacity
    }

    /// Flips the panel's shown state.
    ///
    /// Showing fades the control out immediately and removes it from layout
    /// after `control_fade_out_ms`. Hiding goes through the same path as
    /// [`PanelState::dismiss_at`].
    pub fn toggle_at(&mut self, now: Instant, transitions: &SettingsTransition) {
        if self.shown {
            self.dismiss_at(now, transitions);
            return;
        }

        self.shown = true;
        self.control_opacity = 0.;
        self.schedule(
            StyleChange::HideControl,
            now + Duration::from_millis(transitions.control_fade_out_ms),
        );
    }

    /// Hides the panel and restores the toggle control: laid out again
    /// immediately, fully opaque after `control_fade_in_delay_ms`.
    ///
    /// No-op when the panel is already hidden.
    pub fn dismiss_at(&mut self, now: Instant, transitions: &SettingsTransition) {
        if !self.shown {
            return;
        }

        self.shown = false;
        self.control_displayed = true;
        self.schedule(
            StyleChange::RestoreControlOpacity,
            now + Duration::from_millis(transitions.control_fade_in_delay_ms),
        );
    }

    /// Applies the pending style change if its delay has elapsed.
    /// Returns whether a change was applied.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(p) = self.pending else {
            return false;
        };
        if now < p.due {
            return false;
        }

        match p.change {
            StyleChange::HideControl => self.control_displayed = false,
            StyleChange::RestoreControlOpacity => self.control_opacity = 1.,
        }
        self.pending = None;
        true
    }

    /// Time left until the pending style change is due, if any.
    /// Zero when the change is already due but not yet applied.
    pub fn time_until_pending(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| {
            if now < p.due {
                p.due - now
            } else {
                Duration::ZERO
            }
        })
    }

    fn schedule(&mut self, change: StyleChange, due: Instant) {
        self.pending = Some(PendingChange { due, change });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fade_out() -> Duration {
        Duration::from_millis(SettingsTransition::default().control_fade_out_ms)
    }

    fn fade_in_delay() -> Duration {
        Duration::from_millis(SettingsTransition::default().control_fade_in_delay_ms)
    }

    #[test]
    fn test_starts_hidden_with_visible_control() {
        let state = PanelState::default();
        assert!(!state.shown());
        assert!(state.control_displayed());
        assert_eq!(state.control_opacity(), 1.);
    }

    #[test]
    fn test_shown_strictly_alternates() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let mut now = Instant::now();

        for i in 0..10 {
            state.toggle_at(now, &transitions);
            assert_eq!(state.shown(), i % 2 == 0);
            now += Duration::from_millis(500);
            state.advance(now);
        }
    }

    #[test]
    fn test_show_fades_control_out_then_hides_it() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let t0 = Instant::now();

        state.toggle_at(t0, &transitions);
        assert!(state.shown());
        assert_eq!(state.control_opacity(), 0.);
        // Still laid out until the fade-out delay has elapsed.
        assert!(state.control_displayed());

        assert!(!state.advance(t0 + fade_out() - Duration::from_millis(1)));
        assert!(state.control_displayed());

        assert!(state.advance(t0 + fade_out()));
        assert!(!state.control_displayed());
        assert!(state.time_until_pending(t0 + fade_out()).is_none());
    }

    #[test]
    fn test_hide_restores_control() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let t0 = Instant::now();

        state.toggle_at(t0, &transitions);
        state.advance(t0 + fade_out());

        let t1 = t0 + Duration::from_millis(1000);
        state.toggle_at(t1, &transitions);
        assert!(!state.shown());
        assert!(state.control_displayed());
        assert_eq!(state.control_opacity(), 0.);

        assert!(state.advance(t1 + fade_in_delay()));
        assert_eq!(state.control_opacity(), 1.);
    }

    #[test]
    fn test_dismiss_matches_toggle_hide_path() {
        let transitions = SettingsTransition::default();
        let t0 = Instant::now();

        let mut toggled = PanelState::default();
        toggled.toggle_at(t0, &transitions);
        toggled.advance(t0 + fade_out());
        let mut dismissed = toggled.clone();

        let t1 = t0 + Duration::from_millis(1000);
        toggled.toggle_at(t1, &transitions);
        dismissed.dismiss_at(t1, &transitions);

        let t2 = t1 + fade_in_delay();
        toggled.advance(t2);
        dismissed.advance(t2);

        assert_eq!(toggled.shown(), dismissed.shown());
        assert_eq!(toggled.control_displayed(), dismissed.control_displayed());
        assert_eq!(toggled.control_opacity(), dismissed.control_opacity());
    }

    #[test]
    fn test_dismiss_is_noop_when_hidden() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let t0 = Instant::now();

        state.dismiss_at(t0, &transitions);
        state.dismiss_at(t0 + Duration::from_millis(1), &transitions);

        assert!(!state.shown());
        assert!(state.control_displayed());
        assert_eq!(state.control_opacity(), 1.);
        assert!(state.time_until_pending(t0).is_none());
    }

    #[test]
    fn test_retoggle_cancels_stale_change() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let t0 = Instant::now();

        // Show schedules the control removal, hiding again before it fires
        // replaces it so the control stays laid out.
        state.toggle_at(t0, &transitions);
        state.toggle_at(t0 + Duration::from_millis(100), &transitions);

        state.advance(t0 + fade_out() + Duration::from_millis(100));
        assert!(!state.shown());
        assert!(state.control_displayed());
        assert_eq!(state.control_opacity(), 1.);
    }

    #[test]
    fn test_pending_delay_reported_for_repaint() {
        let transitions = SettingsTransition::default();
        let mut state = PanelState::default();
        let t0 = Instant::now();

        state.toggle_at(t0, &transitions);
        assert_eq!(state.time_until_pending(t0), Some(fade_out()));
        assert_eq!(
            state.time_until_pending(t0 + fade_out() + Duration::from_millis(5)),
            Some(Duration::ZERO)
        );
    }
}
