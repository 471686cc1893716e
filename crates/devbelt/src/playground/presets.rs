//! Ready-made pattern and text pairs.
//!
//! A preset replaces the pattern, flags, and sample text in one step.
//! The defaults here also seed a fresh playground.

use super::flags::Flags;

/// A named pattern, flag, and sample text combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,

    /// The pattern to load.
    pub pattern: &'static str,

    /// The flags to load.
    pub flags: Flags,

    /// The sample text to load.
    pub text: &'static str,
}

/// Pattern loaded into a fresh playground.
pub const DEFAULT_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Flags loaded into a fresh playground.
pub const DEFAULT_FLAGS: Flags = Flags::GLOBAL.union(Flags::MULTILINE);

/// Sample text loaded into a fresh playground.
pub const DEFAULT_TEXT: &str = "hello@example.com\n\
support+regex@company.co.uk\n\
123-456-7890\n\
b0c1499c-e349-4787-9b65-6548d7c43632\n\
https://example.com/path?query=1";

/// The presets offered next to the pattern input.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Email",
        pattern: DEFAULT_PATTERN,
        flags: DEFAULT_FLAGS,
        text: "Contact us at support@example.com or sales@example.co.uk",
    },
    Preset {
        name: "URL",
        pattern: r"https?://[\w\-.]+(?::\d+)?(?:/[\w/_.#?&=]*)?",
        flags: DEFAULT_FLAGS,
        text: "Visit https://www.google.com or http://localhost:3000/api",
    },
    Preset {
        name: "Date",
        pattern: r"(\d{4})-(\d{2})-(\d{2})",
        flags: DEFAULT_FLAGS,
        text: "Events: 2024-01-15, 2024-12-25, 2025-01-01",
    },
    Preset {
        name: "UUID",
        pattern: "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        flags: Flags::GLOBAL,
        text: "User ID: 123e4567-e89b-12d3-a456-426614174000",
    },
];

/// Look up a preset by name, case-insensitively.
#[must_use]
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
