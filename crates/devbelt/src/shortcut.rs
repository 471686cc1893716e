//! Keyboard shortcut matching.
//!
//! A [`Shortcut`] names a key and the modifiers it requires; frontends
//! feed every key press through [`Shortcut::matches`]. The primary
//! modifier is Command on macOS and Control everywhere else, so one
//! binding definition serves both.

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Control key.
        const CTRL = 0b0000_0001;
        /// Command key on macOS, Windows key elsewhere.
        const META = 0b0000_0010;
        /// Shift key.
        const SHIFT = 0b0000_0100;
        /// Alt key.
        const ALT = 0b0000_1000;
    }
}

/// Host platform, which decides the primary modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: the primary modifier is Command.
    MacOs,
    /// Everything else: the primary modifier is Control.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// A key binding with its required modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// The key, compared case-insensitively.
    pub key: char,

    /// Require the platform primary modifier.
    pub primary: bool,

    /// Require Shift.
    pub shift: bool,

    /// Require Alt.
    pub alt: bool,

    /// Require Meta explicitly, independent of `primary`.
    pub meta: bool,
}

/// The binding that toggles the command palette.
pub const PALETTE_SHORTCUT: Shortcut = Shortcut::primary('k');

impl Shortcut {
    /// Create a shortcut on the primary modifier, e.g. Ctrl+K or Cmd+K.
    #[must_use]
    pub const fn primary(key: char) -> Self {
        Self {
            key,
            primary: true,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Create a bare key shortcut with no modifiers required.
    #[must_use]
    pub const fn bare(key: char) -> Self {
        Self {
            key,
            primary: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Require Shift as well.
    #[must_use]
    pub const fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Require Alt as well.
    #[must_use]
    pub const fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Require Meta explicitly.
    #[must_use]
    pub const fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Check whether a key press triggers this shortcut.
    ///
    /// When the primary modifier is not required, neither Control nor
    /// Meta may be held. Shift and Alt always match exactly. A required
    /// Meta is checked on its own; an unrequired one imposes no
    /// constraint.
    #[must_use]
    pub fn matches(&self, key: char, held: Modifiers, platform: Platform) -> bool {
        if !key.eq_ignore_ascii_case(&self.key) {
            return false;
        }
        let primary_held = match platform {
            Platform::MacOs => held.contains(Modifiers::META),
            Platform::Other => held.contains(Modifiers::CTRL),
        };
        let primary_ok = if self.primary {
            primary_held
        } else {
            !held.contains(Modifiers::CTRL) && !held.contains(Modifiers::META)
        };
        primary_ok
            && self.shift == held.contains(Modifiers::SHIFT)
            && self.alt == held.contains(Modifiers::ALT)
            && (!self.meta || held.contains(Modifiers::META))
    }
}
