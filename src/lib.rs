mod panel_view;
mod settings;
mod state;

#[cfg(feature = "events")]
mod events;

#[cfg(feature = "events")]
pub use self::events::{Event, EventSink, PayloadDismiss, PayloadToggle};
pub use self::panel_view::{
    dismiss, get_panel_state, reset, set_panel_state, toggle, MissionPanel,
};
pub use self::settings::{SettingsInteraction, SettingsStyle, SettingsTransition};
pub use self::state::PanelState;
