use std::fmt;

use serde::{Deserialize, Serialize};

/// The five inputs to the final ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Engagement,
    Credibility,
    Content,
    Social,
    Recency,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Engagement,
        Signal::Credibility,
        Signal::Content,
        Signal::Social,
        Signal::Recency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Engagement => "engagement",
            Signal::Credibility => "credibility",
            Signal::Content => "content",
            Signal::Social => "social",
            Signal::Recency => "recency",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
