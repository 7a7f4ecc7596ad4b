use std::fmt;

use tracing::warn;

/// Error type a fallible callback may return. Propagated to the caller of evaluation.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// A boxed callback invoked when its trigger string is evaluated.
pub type Callback = Box<dyn FnMut() -> Result<(), CallbackError>>;

/// How typed input is compared against trigger strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl From<bool> for CaseSensitivity {
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

/// A registered `(trigger, callback)` pair.
pub struct Binding {
    trigger: String,
    callback: Callback,
}

impl Binding {
    /// Bind an infallible callback to `trigger`.
    pub fn new(trigger: impl Into<String>, mut callback: impl FnMut() + 'static) -> Self {
        Self::fallible(trigger, move || {
            callback();
            Ok(())
        })
    }

    /// Bind a callback whose error should reach the caller of evaluation.
    pub fn fallible(
        trigger: impl Into<String>,
        callback: impl FnMut() -> Result<(), CallbackError> + 'static,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            callback: Box::new(callback),
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Run the callback.
    pub fn invoke(&mut self) -> Result<(), CallbackError> {
        (self.callback)()
    }

    fn is_valid(&self) -> bool {
        !self.trigger.is_empty()
    }

    fn matches(&self, candidate: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.trigger == candidate,
            CaseSensitivity::Insensitive => self.trigger.to_lowercase() == candidate.to_lowercase(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of bindings.
///
/// Insertion order is preserved and duplicate triggers are accepted;
/// lookup resolves to the first registered match.
#[derive(Debug, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Returns `false` (and stores nothing) when it is invalid.
    pub fn add(&mut self, binding: Binding) -> bool {
        if !binding.is_valid() {
            warn!("rejected binding with empty trigger");
            return false;
        }
        self.bindings.push(binding);
        true
    }

    /// Append every valid binding, discarding invalid ones individually.
    /// Returns whether at least one binding was added.
    pub fn extend(&mut self, bindings: impl IntoIterator<Item = Binding>) -> bool {
        bindings
            .into_iter()
            .fold(false, |added, binding| self.add(binding) || added)
    }

    /// Remove every binding whose trigger equals `trigger` exactly.
    /// Returns whether the table shrank.
    pub fn remove(&mut self, trigger: &str) -> bool {
        self.remove_all([trigger])
    }

    /// Remove every binding whose trigger equals one of `triggers` exactly.
    /// Returns whether the table shrank.
    pub fn remove_all<S: AsRef<str>>(&mut self, triggers: impl IntoIterator<Item = S>) -> bool {
        let triggers: Vec<S> = triggers.into_iter().collect();
        let before = self.bindings.len();
        self.bindings
            .retain(|b| !triggers.iter().any(|t| t.as_ref() == b.trigger));
        self.bindings.len() != before
    }

    /// All registered triggers in insertion order, duplicates included.
    pub fn keys(&self) -> Vec<&str> {
        self.bindings.iter().map(Binding::trigger).collect()
    }

    /// First binding whose trigger matches `candidate`.
    pub fn lookup(&self, candidate: &str, case: CaseSensitivity) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.matches(candidate, case))
    }

    pub(crate) fn lookup_mut(
        &mut self,
        candidate: &str,
        case: CaseSensitivity,
    ) -> Option<&mut Binding> {
        self.bindings.iter_mut().find(|b| b.matches(candidate, case))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
