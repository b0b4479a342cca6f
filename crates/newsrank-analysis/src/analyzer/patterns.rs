use regex::Regex;
use std::sync::LazyLock;

macro_rules! text_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Importance cues ───────────────────────────────────────────────────────
text_pattern!(RE_NUMBER, r"\d+");
text_pattern!(RE_CAPITALIZED, r"\b[A-Z][a-z]+\b");

// ── Keywords ──────────────────────────────────────────────────────────────
text_pattern!(RE_WORD, r"\b[a-zA-Z]{3,}\b");

// ── Entities ──────────────────────────────────────────────────────────────
text_pattern!(RE_PERSON, r"\b[A-Z][a-z]+ [A-Z][a-z]+\b");
text_pattern!(
    RE_ORGANIZATION,
    r"\b[A-Z][A-Z]+\b|\b[A-Z][a-z]+ [A-Z][a-z]+\b(?:\s+(?:Inc|Corp|Ltd|LLC|Company|Organization|University|College))?"
);
text_pattern!(
    RE_DATE,
    r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b|\b\d{1,2}/\d{1,2}/\d{4}\b"
);
text_pattern!(
    RE_MONEY,
    r"\$\d+(?:,\d{3})*(?:\.\d{2})?|\b\d+(?:,\d{3})*(?:\.\d{2})?\s+(?:dollars?|USD|euros?|EUR|pounds?|GBP)\b"
);
text_pattern!(RE_PERCENTAGE, r"\b\d+(?:\.\d+)?%");

/// Entity patterns in precedence order: the first type to claim a span keeps it.
pub static ENTITY_PATTERNS: [(&str, &LazyLock<Option<Regex>>); 5] = [
    ("PERSON", &RE_PERSON),
    ("ORGANIZATION", &RE_ORGANIZATION),
    ("DATE", &RE_DATE),
    ("MONEY", &RE_MONEY),
    ("PERCENTAGE", &RE_PERCENTAGE),
];

/// Count matches of an optional pattern; a pattern that failed to compile matches nothing.
pub fn count_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    pattern
        .as_ref()
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}
