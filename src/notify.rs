use std::sync::mpsc::Sender;

/// Outward-facing events published by the recognizer.
///
/// Lifecycle events report transitions; `Success` and `Failure` report the
/// outcome of evaluating a non-empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Activated,
    Evaluated,
    Dismissed,
    Success,
    Failure,
}

impl Notification {
    /// Stable event name, suitable for forwarding to a host event bus.
    pub fn name(self) -> &'static str {
        match self {
            Notification::Activated => "KIKU_ACTIVATE",
            Notification::Evaluated => "KIKU_EVALUATE",
            Notification::Dismissed => "KIKU_DISMISS",
            Notification::Success => "KIKU_ON_SUCCESS",
            Notification::Failure => "KIKU_ON_FAIL",
        }
    }
}

/// Host-supplied receiver of [`Notification`]s.
///
/// Delivery is fire-and-forget: the recognizer neither waits for nor retries a notification.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Discards every notification.
impl NotificationSink for () {
    fn notify(&mut self, _notification: Notification) {}
}

impl<F: FnMut(Notification)> NotificationSink for F {
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// A disconnected receiver is not an error.
impl NotificationSink for Sender<Notification> {
    fn notify(&mut self, notification: Notification) {
        let _ = self.send(notification);
    }
}
