//! Keyword classifier for financial messages.
//!
//! Matching is a case-insensitive substring search, so "UPI" also matches
//! inside longer words.

/// Built-in keywords, checked in this order.
pub const FINANCIAL_KEYWORDS: [&str; 13] = [
    "debited",
    "credited",
    "spent",
    "received",
    "payment",
    "transferred",
    "transaction",
    "UPI",
    "NEFT",
    "IMPS",
    "withdrawn",
    "deposited",
    "balance",
];

/// Decides whether a message describes a financial transaction.
#[derive(Debug, Clone)]
pub struct FinancialClassifier {
    /// Lowercased keywords paired with their original spelling.
    keywords: Vec<(String, String)>,
}

impl FinancialClassifier {
    /// Create a classifier with the built-in keyword set.
    pub fn new() -> Self {
        Self {
            keywords: FINANCIAL_KEYWORDS
                .iter()
                .map(|k| (k.to_lowercase(), k.to_string()))
                .collect(),
        }
    }

    /// Add keywords on top of the built-in set. Blank entries are ignored.
    pub fn with_extra_keywords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in extra {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }
            let lower = keyword.to_lowercase();
            if !self.keywords.iter().any(|(k, _)| *k == lower) {
                self.keywords.push((lower, keyword.to_string()));
            }
        }
        self
    }

    /// Check whether the text mentions any financial keyword, ignoring case.
    pub fn is_financial(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }

    /// Return the first keyword that matched.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }

        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|(k, _)| lower.contains(k.as_str()))
            .map(|(_, original)| original.as_str())
    }
}

impl Default for FinancialClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Check text against the built-in keyword set.
pub fn is_financial(text: &str) -> bool {
    let lower = text.to_lowercase();
    FINANCIAL_KEYWORDS
        .iter()
        .any(|k| lower.contains(&k.to_lowercase()))
}
