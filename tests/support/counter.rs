use std::cell::Cell;
use std::rc::Rc;

use kiku::Binding;

/// Shared call counter for callbacks.
#[derive(Default, Debug, Clone)]
pub struct Counter {
    calls: Rc<Cell<u32>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.calls.get()
    }

    /// A binding that bumps this counter.
    pub fn binding(&self, trigger: &str) -> Binding {
        let calls = self.calls.clone();
        Binding::new(trigger, move || calls.set(calls.get() + 1))
    }
}
