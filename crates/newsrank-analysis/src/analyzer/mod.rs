//! HeuristicAnalyzer: a dependency-free [`ContentAnalyzer`].

mod lexicon;
mod patterns;
pub mod readability;

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;

use newsrank_core::constants::{GENERAL_CATEGORY, MAX_KEYWORDS};
use newsrank_core::errors::RankResult;
use newsrank_core::models::ContentAnalysis;
use newsrank_core::traits::ContentAnalyzer;

use self::lexicon::*;
use self::patterns::{count_matches, ENTITY_PATTERNS, RE_CAPITALIZED, RE_NUMBER, RE_WORD};

const TRIM_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// Keyword- and regex-based content analysis. Stateless and infallible.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous analysis. `article_id` is left empty for the caller to fill.
    pub fn analyze(&self, title: &str, body: &str) -> ContentAnalysis {
        let combined = format!("{title} {body}");
        ContentAnalysis {
            article_id: String::new(),
            sentiment_score: sentiment(&combined),
            importance_score: importance(title, body),
            readability_score: readability::readability(body),
            keywords: keywords(&combined),
            entities: entities(&combined),
            topic: classify_topic(&combined),
            language: detect_language(body),
            processed_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ContentAnalyzer for HeuristicAnalyzer {
    async fn analyze_content(&self, title: &str, body: &str) -> RankResult<ContentAnalysis> {
        let analysis = self.analyze(title, body);
        tracing::debug!(
            topic = %analysis.topic,
            importance = analysis.importance_score,
            "content analyzed"
        );
        Ok(analysis)
    }
}

fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(TRIM_PUNCTUATION).to_lowercase())
        .filter(|w| !w.is_empty())
}

/// `(positive - negative) / (positive + negative)`, or 0.0 with no sentiment words.
pub fn sentiment(text: &str) -> f64 {
    let (mut positive, mut negative) = (0usize, 0usize);
    for word in normalized_words(text) {
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        }
        if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }
    let total = positive + negative;
    if total == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / total as f64
}

/// Newsworthiness in `[0, 1]`.
///
/// Base 0.5; +0.05 per important title word; +0.1 for a 500–3000 char body
/// (+0.05 above that); +0.1 for more than five numbers; +0.05 for at least four
/// quote marks; +0.05 for more than ten capitalized words.
pub fn importance(title: &str, body: &str) -> f64 {
    let mut score = 0.5;

    score += 0.05
        * normalized_words(title)
            .filter(|w| IMPORTANT_TITLE_WORDS.contains(&w.as_str()))
            .count() as f64;

    let body_len = body.chars().count();
    if (500..=3000).contains(&body_len) {
        score += 0.1;
    } else if body_len > 3000 {
        score += 0.05;
    }

    if count_matches(&RE_NUMBER, body) > 5 {
        score += 0.1;
    }
    if body.matches('"').count() >= 4 {
        score += 0.05;
    }
    if count_matches(&RE_CAPITALIZED, body) > 10 {
        score += 0.05;
    }

    f64::min(score, 1.0)
}

/// Non-stop-words of three or more letters appearing at least twice, most
/// frequent first; ties keep first-occurrence order.
pub fn keywords(text: &str) -> Vec<String> {
    let Some(re) = RE_WORD.as_ref() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, m) in re.find_iter(&lowered).enumerate() {
        let word = m.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut frequent: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count >= 2)
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    frequent.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    frequent
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _, _)| word.to_string())
        .collect()
}

/// Entity text mapped to its type. Earlier pattern types win on identical spans.
pub fn entities(text: &str) -> BTreeMap<String, String> {
    let mut found = BTreeMap::new();
    for (kind, pattern) in ENTITY_PATTERNS {
        let Some(re) = pattern.as_ref() else {
            continue;
        };
        for m in re.find_iter(text) {
            found
                .entry(m.as_str().trim().to_string())
                .or_insert_with(|| kind.to_string());
        }
    }
    found
}

/// Topic with the most keyword hits, or `general` when nothing matches.
pub fn classify_topic(text: &str) -> String {
    let mut scores = vec![0usize; TOPIC_KEYWORDS.len()];
    for word in normalized_words(text) {
        for (i, (_, keywords)) in TOPIC_KEYWORDS.iter().enumerate() {
            scores[i] += keywords
                .iter()
                .filter(|k| word.contains(*k) || (word.len() >= 4 && k.contains(word.as_str())))
                .count();
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| TOPIC_KEYWORDS[i].0.to_string())
        .unwrap_or_else(|| GENERAL_CATEGORY.to_string())
}

/// `en`, `es`, or `fr` by function-word counts; English on ties and empty input.
pub fn detect_language(text: &str) -> String {
    let (mut en, mut es, mut fr) = (0usize, 0usize, 0usize);
    for word in normalized_words(text) {
        let w = word.as_str();
        en += usize::from(ENGLISH_MARKERS.contains(&w));
        es += usize::from(SPANISH_MARKERS.contains(&w));
        fr += usize::from(FRENCH_MARKERS.contains(&w));
    }

    let lang = if en >= es && en >= fr {
        "en"
    } else if es >= fr {
        "es"
    } else {
        "fr"
    };
    lang.to_string()
}
