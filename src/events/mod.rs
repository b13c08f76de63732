mod event;
mod sink;

pub use event::{Event, PayloadDismiss, PayloadToggle};
pub use sink::EventSink;
