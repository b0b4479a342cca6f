//! Simplified Flesch reading ease, normalized to `[0, 1]`.
//!
//! `206.835 - 1.015·(words/sentences) - 84.6·(syllables/words)`, clamped to
//! `[0, 100]` and divided by 100. Sentences are split on `.`.

pub fn readability(content: &str) -> f64 {
    if content.is_empty() {
        return 0.0;
    }

    let words: Vec<&str> = content.split_whitespace().collect();
    if words.is_empty() {
        return 0.5;
    }
    let sentences = content.split('.').count().max(1);

    let avg_words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let avg_syllables_per_word = syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word;
    score.clamp(0.0, 100.0) / 100.0
}

/// Vowel-group count with a silent trailing `e`; at least one per word.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllables = 0;
    let mut prev_was_vowel = false;

    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            syllables += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }
    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 1);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("brr"), 1);
    }

    #[test]
    fn empty_and_blank_content() {
        assert_eq!(readability(""), 0.0);
        assert_eq!(readability("   "), 0.5);
    }

    #[test]
    fn short_plain_sentences_read_easily() {
        let easy = readability("The cat sat. The dog ran. We had fun.");
        let hard = readability(
            "Institutional interdependencies necessitate comprehensive organizational \
             reconsideration notwithstanding administrative complications.",
        );
        assert!(easy > hard);
        assert!((0.0..=1.0).contains(&easy));
        assert!((0.0..=1.0).contains(&hard));
    }
}
