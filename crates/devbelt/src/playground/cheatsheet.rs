//! Quick-reference data for the playground sidebar.
//!
//! The first four sections are fragments meant to be combined inside a
//! larger pattern. The Common Recipes section holds complete patterns,
//! each of which compiles on the host engine as-is.

/// One insertable pattern fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheatEntry {
    /// Short display label.
    pub label: &'static str,

    /// The pattern fragment itself.
    pub value: &'static str,

    /// One-line description.
    pub description: &'static str,
}

/// A titled group of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheatSection {
    /// Section title.
    pub title: &'static str,

    /// The entries in display order.
    pub entries: &'static [CheatEntry],
}

/// The full cheatsheet in display order.
pub const CHEATSHEET: &[CheatSection] = &[
    CheatSection {
        title: "Character Classes",
        entries: &[
            CheatEntry {
                label: "Digit",
                value: r"\d",
                description: "Any digit 0-9",
            },
            CheatEntry {
                label: "Word Char",
                value: r"\w",
                description: "Alphanumeric & underscore",
            },
            CheatEntry {
                label: "Whitespace",
                value: r"\s",
                description: "Space, tab, newline",
            },
            CheatEntry {
                label: "Any Character",
                value: ".",
                description: "Any char except newline",
            },
        ],
    },
    CheatSection {
        title: "Quantifiers",
        entries: &[
            CheatEntry {
                label: "Zero or more",
                value: "*",
                description: "Matches 0+ times",
            },
            CheatEntry {
                label: "One or more",
                value: "+",
                description: "Matches 1+ times",
            },
            CheatEntry {
                label: "Optional",
                value: "?",
                description: "Matches 0 or 1 time",
            },
            CheatEntry {
                label: "Exact count",
                value: "{3}",
                description: "Matches exactly 3 times",
            },
            CheatEntry {
                label: "Range count",
                value: "{2,5}",
                description: "Matches 2 to 5 times",
            },
        ],
    },
    CheatSection {
        title: "Anchors",
        entries: &[
            CheatEntry {
                label: "Start of line",
                value: "^",
                description: "Matches beginning of string/line",
            },
            CheatEntry {
                label: "End of line",
                value: "$",
                description: "Matches end of string/line",
            },
            CheatEntry {
                label: "Word boundary",
                value: r"\b",
                description: "Start/end of word",
            },
        ],
    },
    CheatSection {
        title: "Groups",
        entries: &[
            CheatEntry {
                label: "Capture Group",
                value: "(...)",
                description: "Captures match for extraction",
            },
            CheatEntry {
                label: "Non-capturing",
                value: "(?:...)",
                description: "Groups without capturing",
            },
            CheatEntry {
                label: "Or / Alternate",
                value: "a|b",
                description: "Matches a or b",
            },
            CheatEntry {
                label: "Character Set",
                value: "[abc]",
                description: "Any char in brackets",
            },
            CheatEntry {
                label: "Negated Set",
                value: "[^abc]",
                description: "Any char NOT in brackets",
            },
        ],
    },
    CheatSection {
        title: "Common Recipes",
        entries: &[
            CheatEntry {
                label: "Email",
                value: r"[\w.-]+@[\w.-]+\.[a-z]{2,}",
                description: "Simple email validation",
            },
            CheatEntry {
                label: "Date (YYYY-MM-DD)",
                value: r"\d{4}-\d{2}-\d{2}",
                description: "ISO date format",
            },
            CheatEntry {
                label: "IPv4 Address",
                value: r"\b\d{1,3}(?:\.\d{1,3}){3}\b",
                description: "Dotted quad, loose octets",
            },
            CheatEntry {
                label: "URL",
                value: r"https?://[\w\-.]+(?:\.[\w\-.]+)+",
                description: "Basic http/https URL",
            },
        ],
    },
];
