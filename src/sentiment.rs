use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Three-way sentiment classification stored on every journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sentiment_label", rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => f.write_str("Positive"),
            SentimentLabel::Neutral => f.write_str("Neutral"),
            SentimentLabel::Negative => f.write_str("Negative"),
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub score: f64,
    pub label: SentimentLabel,
}

// Compound-score thresholds for the three-way split.
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

// Scaling constant for compound normalization: s / sqrt(s^2 + ALPHA).
const ALPHA: f64 = 15.0;

// Dampened flip applied to a valence directly preceded by a negator.
const NEGATION_SCALAR: f64 = -0.74;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[a-z']+").unwrap();

    /// Fixed valence lexicon. Values follow the usual sentiment-intensity
    /// convention: roughly -4 (most negative) to +4 (most positive).
    static ref LEXICON: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            ("love", 3.2),
            ("loved", 2.9),
            ("loves", 3.0),
            ("adore", 3.2),
            ("wonderful", 2.7),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("great", 3.1),
            ("good", 1.9),
            ("best", 3.2),
            ("better", 1.9),
            ("happy", 2.7),
            ("happiness", 2.8),
            ("joy", 2.8),
            ("joyful", 2.9),
            ("glad", 2.0),
            ("grateful", 2.3),
            ("thankful", 2.3),
            ("excited", 2.3),
            ("exciting", 2.2),
            ("fun", 2.3),
            ("calm", 1.3),
            ("peaceful", 2.2),
            ("relaxed", 1.8),
            ("hopeful", 1.9),
            ("hope", 1.9),
            ("proud", 2.1),
            ("beautiful", 2.6),
            ("nice", 1.8),
            ("pleasant", 1.9),
            ("perfect", 2.7),
            ("fantastic", 2.9),
            ("excellent", 2.7),
            ("delighted", 2.8),
            ("smile", 1.6),
            ("smiled", 1.6),
            ("laughed", 2.2),
            ("win", 2.8),
            ("won", 2.7),
            ("success", 2.7),
            ("successful", 2.6),
            ("accomplished", 2.1),
            ("energized", 1.9),
            ("refreshed", 1.7),
            ("hate", -2.7),
            ("hated", -2.6),
            ("hates", -2.6),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("bad", -2.5),
            ("worst", -3.1),
            ("worse", -2.1),
            ("sad", -2.1),
            ("sadness", -2.2),
            ("unhappy", -1.8),
            ("miserable", -2.7),
            ("depressed", -2.3),
            ("depressing", -1.9),
            ("angry", -2.3),
            ("anger", -2.1),
            ("furious", -2.7),
            ("annoyed", -1.8),
            ("annoying", -1.8),
            ("frustrated", -2.1),
            ("frustrating", -2.0),
            ("anxious", -1.9),
            ("anxiety", -1.9),
            ("worried", -1.6),
            ("worry", -1.4),
            ("stressed", -2.0),
            ("stress", -1.6),
            ("tired", -1.4),
            ("exhausted", -1.8),
            ("lonely", -2.0),
            ("alone", -1.0),
            ("afraid", -2.0),
            ("scared", -1.9),
            ("fear", -1.9),
            ("cry", -2.0),
            ("cried", -2.1),
            ("pain", -2.2),
            ("painful", -2.0),
            ("hurt", -2.0),
            ("sick", -1.7),
            ("fail", -2.5),
            ("failed", -2.3),
            ("failure", -2.5),
            ("lost", -1.3),
            ("upset", -1.9),
            ("disappointed", -2.1),
            ("disappointing", -2.1),
            ("hopeless", -2.6),
            ("overwhelmed", -1.6),
        ];
        entries.iter().copied().collect()
    };

    static ref NEGATORS: HashSet<&'static str> = [
        "not", "no", "never", "neither", "nor", "cannot", "can't", "don't",
        "doesn't", "didn't", "won't", "wouldn't", "couldn't", "shouldn't",
        "isn't", "wasn't", "aren't", "weren't", "hardly", "without",
    ]
    .into_iter()
    .collect();
}

/// Classify free text into a compound polarity score in (-1, 1) and a label.
///
/// Pure and deterministic: token valences come from the embedded lexicon, a
/// negator directly before a word flips and dampens its valence, and the raw
/// sum is normalized to the compound range. Text with no sentiment-bearing
/// tokens (including the empty string) scores exactly 0.0 and is Neutral.
pub fn analyze(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let mut sum = 0.0;
    let mut prev_negates = false;

    for m in WORD_RE.find_iter(&lowered) {
        let word = m.as_str();
        if let Some(&valence) = LEXICON.get(word) {
            sum += if prev_negates {
                valence * NEGATION_SCALAR
            } else {
                valence
            };
        }
        prev_negates = NEGATORS.contains(word);
    }

    let score = if sum == 0.0 {
        0.0
    } else {
        sum / (sum * sum + ALPHA).sqrt()
    };

    let label = if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    Sentiment { score, label }
}
