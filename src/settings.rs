#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Clicking the toggle control shows or hides the panel
    pub toggle_enabled: bool,

    /// A click outside both the panel and the toggle control dismisses the panel
    pub dismiss_on_click_outside: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            toggle_enabled: true,
            dismiss_on_click_outside: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Label shown on the toggle control
    pub control_label: String,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            control_label: "Our mission".to_string(),
        }
    }
}

/// Delays applied to the toggle control's style endpoints so the host
/// application can play a transition in between.
#[derive(Debug, Clone)]
pub struct SettingsTransition {
    /// Delay before the faded-out control is removed from layout
    pub control_fade_out_ms: u64,

    /// Delay before the re-laid-out control is made fully opaque
    pub control_fade_in_delay_ms: u64,
}

impl Default for SettingsTransition {
    fn default() -> Self {
        Self {
            control_fade_out_ms: 300,
            control_fade_in_delay_ms: 10,
        }
    }
}
