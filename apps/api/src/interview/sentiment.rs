//! Lexicon-based sentiment polarity in [-1, 1].
//!
//! Display-only: polarity never feeds into feedback tiers or the final score.
//! Each lexicon word contributes its polarity, scaled by an intensifier directly
//! before it and flipped (×-0.5) by a negator within the two preceding tokens.
//! The answer's polarity is the mean over contributing words.

const LEXICON: &[(&str, f64)] = &[
    ("excellent", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("outstanding", 0.9),
    ("great", 0.8),
    ("amazing", 0.6),
    ("good", 0.7),
    ("better", 0.5),
    ("efficient", 0.5),
    ("effective", 0.6),
    ("reliable", 0.5),
    ("robust", 0.4),
    ("strong", 0.43),
    ("clear", 0.1),
    ("easy", 0.43),
    ("useful", 0.3),
    ("helpful", 0.3),
    ("confident", 0.5),
    ("correct", 0.4),
    ("right", 0.29),
    ("nice", 0.6),
    ("happy", 0.8),
    ("love", 0.5),
    ("fast", 0.2),
    ("quick", 0.33),
    ("stable", 0.2),
    ("accurate", 0.4),
    ("powerful", 0.3),
    ("flexible", 0.2),
    ("important", 0.4),
    ("successful", 0.75),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("poorly", -0.4),
    ("wrong", -0.5),
    ("weak", -0.38),
    ("hard", -0.29),
    ("difficult", -0.5),
    ("slow", -0.3),
    ("unstable", -0.3),
    ("unreliable", -0.5),
    ("useless", -0.5),
    ("confusing", -0.3),
    ("confused", -0.4),
    ("unsure", -0.25),
    ("fail", -0.5),
    ("failed", -0.5),
    ("error", -0.3),
    ("problem", -0.2),
    ("broken", -0.4),
    ("hate", -0.8),
    ("sad", -0.5),
    ("stupid", -0.8),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("quite", 1.1),
    ("super", 1.4),
    ("so", 1.2),
    ("somewhat", 0.8),
    ("slightly", 0.7),
];

const NEGATORS: &[&str] = &["not", "no", "never", "cannot", "without", "nor"];

const NEGATION_FACTOR: f64 = -0.5;

/// Polarity of `text`; 0.0 when no lexicon word is present.
pub fn polarity(text: &str) -> f64 {
    let tokens = tokenize(text);

    let mut total = 0.0;
    let mut count = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut value) = lookup(LEXICON, token) else {
            continue;
        };
        if let Some(factor) = i
            .checked_sub(1)
            .and_then(|prev| lookup(INTENSIFIERS, &tokens[prev]))
        {
            value *= factor;
        }
        if tokens[i.saturating_sub(2)..i].iter().any(|t| is_negator(t)) {
            value *= NEGATION_FACTOR;
        }
        total += value.clamp(-1.0, 1.0);
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }
    (total / count as f64).clamp(-1.0, 1.0)
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}
