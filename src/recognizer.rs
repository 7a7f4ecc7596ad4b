use std::fmt;

use tracing::{debug, error, trace};

use crate::bindings::{Binding, BindingTable};
use crate::config::Config;
use crate::decoder::{Signal, decode};
use crate::error::{Error, Result};
use crate::instance::{InstanceSlot, SlotGuard};
use crate::key::KeyPress;
use crate::notify::{Notification, NotificationSink};

/// Whether the recognizer is idle or buffering typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Waiting for the activation key.
    #[default]
    Inactive,
    /// Collecting characters until evaluation or dismissal.
    Active,
}

#[derive(Debug, Default, Clone)]
struct State {
    mode: Mode,
    buffer: String,
}

impl State {
    /// Return to inactive and hand back whatever had been typed.
    fn reset(&mut self) -> String {
        self.mode = Mode::Inactive;
        std::mem::take(&mut self.buffer)
    }
}

/// Point-in-time copy of the recognizer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerSnapshot {
    pub mode: Mode,
    pub buffer: String,
}

/// Result of evaluating the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Nothing had been typed; nothing was dispatched.
    Empty,
    /// The named trigger matched and its callback ran.
    Matched(String),
    /// No binding matched the typed input.
    NoMatch,
}

/// What a call to [`Recognizer::handle_key`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Ignored,
    Activated,
    Appended(char),
    Dismissed,
    Evaluated(Evaluation),
}

pub struct RecognizerBuilder {
    config: Config,
    bindings: Vec<Binding>,
    sink: Box<dyn NotificationSink>,
    slot: InstanceSlot,
}

impl Default for RecognizerBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            bindings: Vec::new(),
            sink: Box::new(()),
            slot: InstanceSlot::global(),
        }
    }
}

impl RecognizerBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Where notifications go. Defaults to discarding them.
    pub fn sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Register a binding at construction. Invalid bindings are dropped.
    pub fn binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn bindings(mut self, bindings: impl IntoIterator<Item = Binding>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Claim `slot` instead of the process-wide one.
    pub fn slot(mut self, slot: InstanceSlot) -> Self {
        self.slot = slot;
        self
    }

    pub fn build(self) -> Result<Recognizer> {
        if let Err(err) = self.config.validate() {
            error!(%err, "recognizer not initialized");
            return Err(err);
        }
        let Some(guard) = self.slot.claim() else {
            error!("recognizer has already been initialized");
            return Err(Error::AlreadyInitialized);
        };

        let mut bindings = BindingTable::new();
        bindings.extend(self.bindings);
        debug!(bindings = bindings.len(), "recognizer initialized");

        Ok(Recognizer {
            state: State::default(),
            config: self.config,
            bindings,
            sink: self.sink,
            _guard: guard,
        })
    }
}

/// Build a recognizer on the process-wide slot.
///
/// Fails with [`Error::AlreadyInitialized`] while another recognizer is alive.
pub fn create(config: Config, sink: impl NotificationSink + 'static) -> Result<Recognizer> {
    Recognizer::builder().config(config).sink(sink).build()
}

/// Watches key presses for activation, buffers what is typed, and dispatches
/// the matching binding when the buffer is evaluated.
pub struct Recognizer {
    state: State,
    config: Config,
    bindings: BindingTable,
    sink: Box<dyn NotificationSink>,
    _guard: SlotGuard,
}

impl fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recognizer")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

impl Recognizer {
    pub fn builder() -> RecognizerBuilder {
        RecognizerBuilder::default()
    }

    pub fn state(&self) -> RecognizerSnapshot {
        RecognizerSnapshot {
            mode: self.state.mode,
            buffer: self.state.buffer.clone(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current settings as `name: value` lines.
    pub fn settings(&self) -> Vec<String> {
        self.config.settings()
    }

    pub fn add(&mut self, binding: Binding) -> bool {
        self.bindings.add(binding)
    }

    pub fn extend(&mut self, bindings: impl IntoIterator<Item = Binding>) -> bool {
        self.bindings.extend(bindings)
    }

    pub fn remove(&mut self, trigger: &str) -> bool {
        self.bindings.remove(trigger)
    }

    pub fn remove_all<S: AsRef<str>>(&mut self, triggers: impl IntoIterator<Item = S>) -> bool {
        self.bindings.remove_all(triggers)
    }

    /// Registered triggers in insertion order.
    pub fn function_keys(&self) -> Vec<String> {
        self.bindings.keys().into_iter().map(str::to_string).collect()
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Feed one key press. Returns the transition it caused.
    ///
    /// Only a failing callback produces an error, and by then the recognizer
    /// is already inactive with an empty buffer.
    pub fn handle_key(&mut self, press: &KeyPress) -> Result<Step> {
        match decode(press, self.state.mode, &self.config) {
            Signal::Activate => {
                self.activate();
                Ok(Step::Activated)
            }
            Signal::Char(c) => {
                self.state.buffer.push(c);
                trace!(%c, buffer = %self.state.buffer, "appended");
                Ok(Step::Appended(c))
            }
            Signal::Dismiss => {
                self.deactivate();
                Ok(Step::Dismissed)
            }
            Signal::Evaluate => self.evaluate().map(Step::Evaluated),
            Signal::Ignore => {
                trace!(code = press.code, key = ?press.key, "ignored");
                Ok(Step::Ignored)
            }
        }
    }

    /// Enter active mode with an empty buffer. Returns `false` if already active.
    pub fn activate(&mut self) -> bool {
        if self.state.mode == Mode::Active {
            return false;
        }
        self.state.mode = Mode::Active;
        self.state.buffer.clear();
        debug!("activated");
        self.sink.notify(Notification::Activated);
        true
    }

    /// Drop the buffer without evaluating. Returns `false` if already inactive.
    pub fn deactivate(&mut self) -> bool {
        if self.state.mode == Mode::Inactive {
            return false;
        }
        let discarded = self.state.reset();
        debug!(%discarded, "dismissed");
        self.sink.notify(Notification::Dismissed);
        true
    }

    /// Match the buffer against the bindings and run the first match.
    ///
    /// The recognizer returns to inactive before the callback runs. While
    /// inactive this is a no-op returning [`Evaluation::Empty`].
    pub fn evaluate(&mut self) -> Result<Evaluation> {
        if self.state.mode == Mode::Inactive {
            return Ok(Evaluation::Empty);
        }
        let input = self.state.reset();
        self.sink.notify(Notification::Evaluated);

        if input.is_empty() {
            debug!("evaluated empty input");
            return Ok(Evaluation::Empty);
        }

        let case = self.config.case_sensitivity();
        let Some(binding) = self.bindings.lookup_mut(&input, case) else {
            debug!(%input, "no binding matched");
            self.sink.notify(Notification::Failure);
            return Ok(Evaluation::NoMatch);
        };

        let trigger = binding.trigger().to_string();
        binding.invoke().map_err(|source| Error::Callback {
            trigger: trigger.clone(),
            source,
        })?;
        debug!(%input, %trigger, "binding dispatched");
        self.sink.notify(Notification::Success);
        Ok(Evaluation::Matched(trigger))
    }
}
