use egui::{Response, Sense, Ui, Vec2, Widget};
use instant::Instant;

use crate::{
    settings::{SettingsInteraction, SettingsStyle, SettingsTransition},
    state::PanelState,
};

#[cfg(feature = "events")]
use crate::events::{Event, EventSink, PayloadDismiss, PayloadToggle};

/// Widget showing a dismissible mission panel together with its toggle control.
///
/// It implements [`egui::Widget`] and can be used like any other widget.
///
/// The panel's contents come from the caller as a closure; the widget only
/// controls visibility. Clicking the toggle control opens the panel and fades
/// the control out (opacity to zero immediately, removed from layout once the
/// fade-out delay has elapsed). Closing the panel restores the control: laid
/// out again immediately, fully opaque after a short delay so the host
/// application's styling can play a transition in between. A click landing
/// outside both the panel and the control dismisses the panel.
///
/// Visibility state is kept in egui's data map between frames, so the widget
/// can be recreated every frame. Use [`MissionPanel::with_id`] to keep several
/// panels in the same UI separate, and the free [`toggle`] function to flip a
/// panel from wiring outside this widget (a menu entry, a keyboard shortcut).
pub struct MissionPanel<'a> {
    add_contents: Box<dyn FnOnce(&mut Ui) + 'a>,

    settings_interaction: SettingsInteraction,
    settings_style: SettingsStyle,
    settings_transition: SettingsTransition,

    custom_id: Option<String>,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl<'a> MissionPanel<'a> {
    /// Creates a new `MissionPanel` widget with default settings rendering
    /// `add_contents` inside the panel while it is shown.
    pub fn new(add_contents: impl FnOnce(&mut Ui) + 'a) -> Self {
        Self {
            add_contents: Box::new(add_contents),

            settings_interaction: SettingsInteraction::default(),
            settings_style: SettingsStyle::default(),
            settings_transition: SettingsTransition::default(),

            custom_id: None,

            #[cfg(feature = "events")]
            events_sink: Option::default(),
        }
    }

    #[cfg(feature = "events")]
    /// Supply a generic sink that will receive interaction events.
    /// Works with `crossbeam::channel::Sender<Event>`, `std::sync::mpsc::Sender<Event>`,
    /// or custom implementations.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    /// Makes the widget interactive according to the provided settings.
    pub fn with_interactions(mut self, settings_interaction: &SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction.clone();
        self
    }

    /// Modifies default style settings.
    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    /// Modifies default transition delays.
    pub fn with_transitions(mut self, settings_transition: &SettingsTransition) -> Self {
        self.settings_transition = settings_transition.clone();
        self
    }

    /// Sets a custom unique ID for this widget instance. Useful when you have
    /// multiple mission panels in the same UI and want to keep their state separate.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }
}

impl Widget for MissionPanel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let now = Instant::now();

        #[cfg(feature = "events")]
        let sink = self.events_sink;

        let mut state = PanelState::load(ui, self.custom_id.clone());
        state.advance(now);

        // A click that opened the panel this frame must not also dismiss it,
        // so dismissal only considers a panel that was shown when the frame began.
        let was_shown = state.shown();

        // The control stays laid out while fully transparent, exactly until
        // its removal is due; clicks on it still count as inside.
        let control_resp = if state.control_displayed() {
            let resp = ui
                .scope(|ui| {
                    ui.set_opacity(state.control_opacity());
                    ui.button(&self.settings_style.control_label)
                })
                .inner;

            if self.settings_interaction.toggle_enabled && resp.clicked() {
                state.toggle_at(now, &self.settings_transition);

                #[cfg(feature = "events")]
                publish_event(
                    sink,
                    Event::Toggle(PayloadToggle {
                        shown: state.shown(),
                    }),
                );
            }

            Some(resp)
        } else {
            None
        };

        let panel_resp = if state.shown() {
            let inner = egui::Frame::group(ui.style()).show(ui, self.add_contents);
            Some(inner.response)
        } else {
            None
        };

        if was_shown && state.shown() && self.settings_interaction.dismiss_on_click_outside {
            let outside_panel = match &panel_resp {
                Some(resp) => resp.clicked_elsewhere(),
                None => false,
            };
            let outside_control = match &control_resp {
                Some(resp) => resp.clicked_elsewhere(),
                None => true,
            };

            if outside_panel && outside_control {
                state.dismiss_at(now, &self.settings_transition);

                #[cfg(feature = "events")]
                publish_event(sink, Event::Dismiss(PayloadDismiss {}));
            }
        }

        // Wake up for the delayed style mutation even without further input.
        if let Some(delay) = state.time_until_pending(now) {
            ui.ctx().request_repaint_after(delay);
        }

        state.save(ui, self.custom_id);

        match (control_resp, panel_resp) {
            (Some(control), Some(panel)) => control.union(panel),
            (Some(control), None) => control,
            (None, Some(panel)) => panel,
            (None, None) => ui.allocate_response(Vec2::ZERO, Sense::hover()),
        }
    }
}

#[cfg(feature = "events")]
fn publish_event(sink: Option<&dyn EventSink>, event: Event) {
    if let Some(sink) = sink {
        sink.send(event);
    }
}

/// Flips the panel's shown state from outside the widget's own click wiring,
/// e.g. from a menu entry or a keyboard shortcut. Uses default transition delays.
pub fn toggle(ui: &mut Ui, id: Option<String>) {
    let now = Instant::now();
    let mut state = PanelState::load(ui, id.clone());
    state.advance(now);
    state.toggle_at(now, &SettingsTransition::default());
    if let Some(delay) = state.time_until_pending(now) {
        ui.ctx().request_repaint_after(delay);
    }
    state.save(ui, id);
}

/// Dismisses the panel programmatically. Same path as the outside-click
/// dismissal; no-op when the panel is already hidden.
pub fn dismiss(ui: &mut Ui, id: Option<String>) {
    let now = Instant::now();
    let mut state = PanelState::load(ui, id.clone());
    state.advance(now);
    state.dismiss_at(now, &SettingsTransition::default());
    if let Some(delay) = state.time_until_pending(now) {
        ui.ctx().request_repaint_after(delay);
    }
    state.save(ui, id);
}

/// Helper to reset [`PanelState`] to its defaults: panel hidden, control
/// laid out and fully opaque.
pub fn reset(ui: &mut Ui, id: Option<String>) {
    PanelState::default().save(ui, id);
}

/// Loads the current persisted panel state (or default if none).
/// Useful for external UI panels.
pub fn get_panel_state(ui: &egui::Ui, id: Option<String>) -> PanelState {
    PanelState::load(ui, id)
}

/// Persists a new panel state so that on the next frame it will be applied.
pub fn set_panel_state(ui: &mut egui::Ui, state: PanelState, id: Option<String>) {
    state.save(ui, id);
}
