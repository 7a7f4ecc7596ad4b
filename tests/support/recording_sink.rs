use std::cell::RefCell;
use std::rc::Rc;

use kiku::{Notification, NotificationSink};

/// Sink that records notifications; clones share the same log.
#[derive(Default, Debug, Clone)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.borrow().clone()
    }

    pub fn count(&self, notification: Notification) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|n| **n == notification)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.events.borrow_mut().push(notification);
    }
}
