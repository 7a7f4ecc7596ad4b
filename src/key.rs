/// Well-known browser key codes.
///
/// Hosts that read keys from a platform other than a browser should translate
/// to these values so that the default configuration keeps working.
pub mod codes {
    /// The Enter/Return key. Default activation key.
    pub const ENTER: u32 = 13;
    /// The Shift modifier key. Blacklisted by default.
    pub const SHIFT: u32 = 16;
    /// The Control modifier key.
    pub const CONTROL: u32 = 17;
    /// The Alt/Option modifier key.
    pub const ALT: u32 = 18;
    /// The Caps Lock key.
    pub const CAPS_LOCK: u32 = 20;
    /// The Escape key. Default dismiss key.
    pub const ESCAPE: u32 = 27;
    /// The left Meta/Command/Windows key.
    pub const META: u32 = 91;

    /// Conventional key identity for a control-key code, if it has one.
    pub fn name(code: u32) -> Option<&'static str> {
        match code {
            ENTER => Some("Enter"),
            ESCAPE => Some("Escape"),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifier flags held during a key press.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Modifiers that turn a plain key press into a chord.
    pub const CHORD: Modifiers = Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::META);
}

/// A raw key press as delivered by the host.
///
/// `code` is the numeric key code. `key` is the optional key-identity string
/// (`"a"`, `"Enter"`, `"Shift"`, ...) when the platform provides one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Numeric key code.
    pub code: u32,
    /// Key identity, if known. Never empty when present.
    pub key: Option<String>,
    /// Modifier keys held during the press.
    pub mods: Modifiers,
}

impl KeyPress {
    /// A press carrying only a key code.
    pub fn code(code: u32) -> Self {
        Self {
            code,
            key: None,
            mods: Modifiers::empty(),
        }
    }

    /// A press carrying a key code and a key identity.
    ///
    /// An empty identity is treated as absent.
    pub fn with_key(code: u32, key: &str) -> Self {
        Self {
            code,
            key: (!key.is_empty()).then(|| key.to_string()),
            mods: Modifiers::empty(),
        }
    }

    /// A press for a printable character, shaped like a browser would report it:
    /// the code is the upper-cased ASCII code point, the identity is the character itself.
    pub fn char(c: char) -> Self {
        Self::with_key(c.to_ascii_uppercase() as u32, c.encode_utf8(&mut [0; 4]))
    }

    /// The Enter key.
    pub fn enter() -> Self {
        Self::with_key(codes::ENTER, "Enter")
    }

    /// The Escape key.
    pub fn escape() -> Self {
        Self::with_key(codes::ESCAPE, "Escape")
    }

    /// Replace the held modifiers.
    pub fn mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    /// The key identity as a string slice.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
