use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadToggle {
    /// Panel shown state after the toggle.
    pub shown: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayloadDismiss {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    /// The toggle control was clicked or the panel was toggled externally.
    Toggle(PayloadToggle),
    /// A click outside both the panel and the toggle control closed the panel.
    Dismiss(PayloadDismiss),
}
