use crate::models::{AnswerTally, PreferenceTally, QuotaType, RankedMethod, StvResults};

/// Visual treatment of an answer bar, keyed off the answer wording.
/// Keyword matching over Icelandic and English yes/no terms; anything
/// unrecognised renders neutrally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerTone {
    Affirmative,
    Negative,
    Neutral,
}

const AFFIRMATIVE_TERMS: [&str; 3] = ["já", "yes", "samþykki"];
const NEGATIVE_TERMS: [&str; 3] = ["nei", "no", "hafna"];

pub fn classify_tone(text: &str) -> AnswerTone {
    let lowered = text.to_lowercase();
    if AFFIRMATIVE_TERMS.iter().any(|t| lowered.contains(t)) {
        AnswerTone::Affirmative
    } else if NEGATIVE_TERMS.iter().any(|t| lowered.contains(t)) {
        AnswerTone::Negative
    } else {
        AnswerTone::Neutral
    }
}

/// Index of the winning entry: maximum votes, first entry wins ties.
pub fn winner_index(results: &[AnswerTally]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, tally) in results.iter().enumerate() {
        match best {
            Some((_, votes)) if tally.votes <= votes => {}
            _ => best = Some((i, tally.votes)),
        }
    }
    best.map(|(i, _)| i)
}

pub fn max_first_preference(counts: &[PreferenceTally]) -> u64 {
    counts.iter().map(|c| c.votes).max().unwrap_or(0)
}

/// STV bar widths scale against the largest first-preference count, not
/// against total ballots, so the leader always spans the full row.
pub fn stv_bar_width(votes: u64, max_votes: u64) -> f64 {
    if max_votes == 0 {
        0.0
    } else {
        votes as f64 / max_votes as f64 * 100.0
    }
}

pub fn methodology_text(method: RankedMethod) -> &'static str {
    match method {
        RankedMethod::Simple => {
            "Ranked by first preferences only; the candidates with the most \
             first-preference votes fill the seats."
        }
        RankedMethod::Stv => {
            "Counted by Single Transferable Vote: candidates reaching the quota \
             are elected and their surplus votes transfer to voters' next \
             preferences until every seat is filled."
        }
    }
}

/// Quota figure with its named method, shown only when the count used one.
pub fn quota_text(results: &StvResults) -> Option<String> {
    let quota = results.quota?;
    let name = match results.quota_type {
        QuotaType::Droop => "Droop",
        QuotaType::Hare => "Hare",
        QuotaType::None => return None,
    };
    Some(format!("{} quota: {}", name, quota))
}

/// Plain-text audit line duplicating what the bar already shows.
pub fn calculation_line(tally: &PreferenceTally, total_ballots: u64) -> String {
    format!(
        "{}/{} = {:.1}%",
        tally.votes, total_ballots, tally.percentage
    )
}
