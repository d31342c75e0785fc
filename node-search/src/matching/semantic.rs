//! Fixed synonym tables for general queries.
//!
//! A query like "email" or "web search" names a capability rather than a
//! product. Each table maps trigger substrings in the query words to an
//! allow-list of item-name substrings. The tables are fixed data.

/// Product names that always count as a specific app query.
pub const KNOWN_APP_NAMES: &[&str] = &[
    "gmail",
    "outlook",
    "slack",
    "notion",
    "jira",
    "github",
    "stripe",
    "salesforce",
];

/// One synonym table.
#[derive(Debug, Clone, Copy)]
pub struct SynonymTable {
    /// Short identifier, used in logs.
    pub name: &'static str,
    /// A query word fires the table if it contains any of these.
    pub triggers: &'static [&'static str],
    /// Item names containing any of these match once the table fires.
    pub allow_list: &'static [&'static str],
}

impl SynonymTable {
    /// Returns `true` if any query word fires this table.
    pub fn fires(&self, words: &[&str]) -> bool {
        words
            .iter()
            .any(|word| self.triggers.iter().any(|t| word.contains(t)))
    }

    /// Returns `true` if the lowercased item name is on the allow-list.
    pub fn allows(&self, lower_name: &str) -> bool {
        self.allow_list.iter().any(|term| lower_name.contains(term))
    }
}

/// Email capability. Also gated on the item's own keywords, see
/// [`has_email_keyword`].
pub const EMAIL: SynonymTable = SynonymTable {
    name: "email",
    triggers: &["email", "mail"],
    allow_list: &["gmail", "outlook", "send email"],
};

/// All tables in evaluation order. [`EMAIL`] is first.
pub const TABLES: &[SynonymTable] = &[
    EMAIL,
    SynonymTable {
        name: "search",
        triggers: &["search", "web"],
        allow_list: &["web search", "search", "duckduckgo", "serpapi", "perplexity"],
    },
    SynonymTable {
        name: "drive",
        triggers: &["drive", "storage", "file"],
        allow_list: &["drive", "dropbox", "onedrive", "box", "s3", "blob storage"],
    },
    SynonymTable {
        name: "calendar",
        triggers: &["calendar", "schedule"],
        allow_list: &["calendar", "google calendar"],
    },
    SynonymTable {
        name: "document",
        triggers: &["doc", "document"],
        allow_list: &["docs", "document", "pdf", "word", "excel", "sheets"],
    },
];

/// A single word of at least four characters, or a known product name.
/// Such queries skip the synonym tables.
pub fn is_specific_app_name(lower_query: &str, words: &[&str]) -> bool {
    words.len() == 1
        && (lower_query.chars().count() >= 4 || KNOWN_APP_NAMES.contains(&lower_query))
}

/// Returns `true` if some lowercased keyword mentions email.
pub fn has_email_keyword(lower_keywords: &[String]) -> bool {
    lower_keywords
        .iter()
        .any(|k| k.contains("email") || k.contains("mail"))
}
