use super::Event;

/// Destination for widget interaction events.
///
/// Implemented for `crossbeam` and `std::sync::mpsc` senders; implement it
/// yourself to route events anywhere else.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // A full or disconnected channel drops the event.
        let _ = self.try_send(event);
    }
}

impl EventSink for std::sync::mpsc::Sender<Event> {
    fn send(&self, event: Event) {
        let _ = std::sync::mpsc::Sender::send(self, event);
    }
}
