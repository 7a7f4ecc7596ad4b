use crate::config::Config;
use crate::key::{KeyPress, Modifiers};
use crate::recognizer::Mode;

/// What a single key press means to the recognizer in its current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Start buffering. Only produced while inactive.
    Activate,
    /// Match the buffer against the bindings. Only produced while active.
    Evaluate,
    /// Abandon the buffer. Only produced while active.
    Dismiss,
    /// Append a character to the buffer. Only produced while active.
    Char(char),
    /// Nothing to do.
    Ignore,
}

/// Map a raw key press to a [`Signal`].
///
/// Pure: depends only on the press, the current mode and the configuration.
/// Blacklisted codes always decode to [`Signal::Ignore`].
pub fn decode(press: &KeyPress, mode: Mode, config: &Config) -> Signal {
    if config.blacklisted_key_codes.contains(&press.code) {
        return Signal::Ignore;
    }

    let is_activation = press.code == config.activation_key_code
        || matches_identity(press, config.activation_identity());
    let is_dismiss = press.code == config.dismiss_key_code
        || matches_identity(press, config.dismiss_identity());

    match mode {
        Mode::Inactive if is_activation => Signal::Activate,
        Mode::Inactive => Signal::Ignore,
        Mode::Active if is_dismiss => Signal::Dismiss,
        Mode::Active if is_activation => Signal::Evaluate,
        Mode::Active => {
            if press.mods.intersects(Modifiers::CHORD) {
                return Signal::Ignore;
            }
            decode_char(press).map_or(Signal::Ignore, Signal::Char)
        }
    }
}

fn matches_identity(press: &KeyPress, identity: Option<&str>) -> bool {
    matches!((press.key(), identity), (Some(k), Some(id)) if k == id)
}

/// Prefer a one-character alphanumeric key identity, else read the code as a code point.
/// Named keys (`"Tab"`, `"ArrowLeft"`, ...) never produce a character.
fn decode_char(press: &KeyPress) -> Option<char> {
    if let Some(key) = press.key() {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => return Some(c),
            (Some(_), Some(_)) => return None,
            _ => {}
        }
    }

    char::from_u32(press.code).filter(|c| !c.is_control())
}
