//! Tool registry and command palette filtering.
//!
//! Every tool the shell can open is listed here with its display name,
//! card blurb, and search keywords. [`filter_tools`] implements the
//! palette's substring search over names and keywords.

/// Identifier for each tool in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Unix timestamp conversion.
    Timestamp,
    /// JSON formatting and validation.
    Json,
    /// Markdown preview.
    Markdown,
    /// Base64 encoding and decoding.
    Base64,
    /// The regex playground.
    Regex,
    /// JWT inspection.
    Jwt,
    /// Cron expression description.
    Cron,
}

/// Display metadata for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    /// Human-readable name shown in the palette.
    pub name: &'static str,

    /// One-line description shown on the tool card.
    pub blurb: &'static str,

    /// Lowercase search keywords.
    pub keywords: &'static [&'static str],
}

impl ToolId {
    /// Every tool in display order.
    pub const ALL: [Self; 7] = [
        Self::Timestamp,
        Self::Json,
        Self::Markdown,
        Self::Base64,
        Self::Regex,
        Self::Jwt,
        Self::Cron,
    ];

    /// Display metadata for this tool.
    #[must_use]
    pub const fn info(self) -> ToolInfo {
        match self {
            Self::Timestamp => ToolInfo {
                name: "Timestamp Converter",
                blurb: "Convert Unix timestamps, ISO 8601, and dates across local and UTC timezones instantly.",
                keywords: &["time", "date", "epoch", "unix"],
            },
            Self::Json => ToolInfo {
                name: "JSON Formatter",
                blurb: "Clean, format, and validate your JSON data instantly with syntax highlighting.",
                keywords: &["json", "format", "pretty", "lint"],
            },
            Self::Markdown => ToolInfo {
                name: "Markdown Previewer",
                blurb: "Real-time markdown rendering to preview your documentation and README files.",
                keywords: &["markdown", "md", "preview", "readme"],
            },
            Self::Base64 => ToolInfo {
                name: "Base64 Converter",
                blurb: "Quickly encode or decode strings and files to and from Base64 format.",
                keywords: &["base64", "encode", "decode"],
            },
            Self::Regex => ToolInfo {
                name: "Regex Playground",
                blurb: "Test regular expressions against text with live highlighting, capture groups, and exportable matches.",
                keywords: &["regex", "regexp", "test", "match"],
            },
            Self::Jwt => ToolInfo {
                name: "JWT Inspector",
                blurb: "Decode JWTs locally with human-friendly expiry, claims explanations, and common warnings.",
                keywords: &["jwt", "token", "decode", "security"],
            },
            Self::Cron => ToolInfo {
                name: "Cron Helper",
                blurb: "Parse, validate, and debug cron expressions with human-readable descriptions",
                keywords: &["cron", "schedule", "job", "time"],
            },
        }
    }

    /// Palette display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }
}

/// Filter tools by a palette query.
///
/// A tool matches when its lowercased name contains the query or any
/// keyword contains it. An empty query matches every tool.
#[must_use]
pub fn filter_tools(query: &str) -> Vec<ToolId> {
    let query = query.to_lowercase();
    ToolId::ALL
        .into_iter()
        .filter(|tool| {
            let info = tool.info();
            info.name.to_lowercase().contains(&query)
                || info.keywords.iter().any(|keyword| keyword.contains(&query))
        })
        .collect()
}
