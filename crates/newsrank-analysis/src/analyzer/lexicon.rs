//! Word lists behind the heuristic analyzer.

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome",
    "positive", "success", "win", "victory", "achievement", "breakthrough", "progress",
    "improve", "better", "best", "outstanding", "remarkable", "impressive", "brilliant",
    "celebrate", "happy", "joy", "pleased", "satisfied", "delighted", "thrilled",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disaster", "crisis", "problem", "issue",
    "negative", "fail", "failure", "loss", "defeat", "decline", "drop", "fall",
    "worse", "worst", "concerning", "worried", "alarming", "dangerous", "threat",
    "sad", "angry", "upset", "disappointed", "frustrated", "concerned", "fear",
];

/// Title words that mark a story as newsworthy; each hit adds 0.05 importance.
pub const IMPORTANT_TITLE_WORDS: &[&str] = &[
    "breaking", "urgent", "major", "significant", "important", "critical",
    "exclusive", "first", "new", "latest", "update", "announced",
    "government", "president", "minister", "election", "policy",
    "economy", "market", "stock", "financial", "business",
    "technology", "ai", "innovation", "research", "study",
    "health", "medical", "pandemic", "vaccine", "treatment",
    "climate", "environment", "global", "international", "world",
];

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "up", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "among", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "this", "that", "these",
    "those", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves",
];

/// Topic keyword tables, in tie-break order.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "technology", "tech", "ai", "artificial", "intelligence", "computer", "software",
            "hardware", "internet", "digital", "cyber", "innovation", "startup", "app",
            "platform",
        ],
    ),
    (
        "business",
        &[
            "business", "economy", "economic", "market", "stock", "financial", "finance",
            "investment", "company", "corporate", "trade", "industry", "revenue", "profit",
            "sales",
        ],
    ),
    (
        "politics",
        &[
            "politics", "political", "government", "election", "vote", "president",
            "minister", "congress", "parliament", "policy", "law", "legislation", "campaign",
            "democracy",
        ],
    ),
    (
        "health",
        &[
            "health", "medical", "medicine", "doctor", "hospital", "patient", "treatment",
            "disease", "vaccine", "pandemic", "virus", "healthcare", "wellness", "fitness",
        ],
    ),
    (
        "sports",
        &[
            "sports", "sport", "game", "match", "team", "player", "football", "basketball",
            "cricket", "tennis", "soccer", "baseball", "championship", "tournament", "league",
        ],
    ),
    (
        "science",
        &[
            "science", "scientific", "research", "study", "experiment", "discovery",
            "climate", "environment", "space", "nasa", "physics", "chemistry", "biology",
            "genetics",
        ],
    ),
    (
        "entertainment",
        &[
            "entertainment", "movie", "film", "actor", "actress", "music", "singer",
            "celebrity", "hollywood", "tv", "television", "show", "concert", "album", "award",
        ],
    ),
    (
        "world",
        &[
            "world", "international", "global", "country", "nation", "war", "conflict",
            "peace", "diplomacy", "foreign", "embassy", "europe", "asia", "africa",
        ],
    ),
];

pub const ENGLISH_MARKERS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "is", "it", "you", "that", "he", "was", "for",
    "on", "are", "as", "with", "his", "they", "i",
];

pub const SPANISH_MARKERS: &[&str] = &[
    "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le",
    "da", "su", "por", "son", "con", "para",
];

pub const FRENCH_MARKERS: &[&str] = &[
    "le", "de", "et", "à", "un", "il", "être", "en", "avoir", "que", "pour", "dans",
    "ce", "son", "une", "sur", "avec", "ne", "se",
];
