use std::collections::HashSet;

use crate::models::{Election, VotingType};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("No answer selected")]
    Empty,
    #[error("Too many selections (maximum {0})")]
    TooMany(usize),
    #[error("Unknown answer: {0}")]
    UnknownAnswer(String),
    #[error("Answer ranked more than once: {0}")]
    DuplicateRank(String),
    #[error("Ranked selection submitted to a non-ranked election")]
    WrongKind,
}

/// Checks a selection against its election before it may reach the
/// confirmation step.
pub fn validate_selection(
    election: &Election,
    selection: &Selection,
) -> Result<(), SelectionError> {
    if selection.is_empty() {
        return Err(SelectionError::Empty);
    }

    match (election.voting_type, selection) {
        (VotingType::RankedChoice, Selection::Ranked(_)) => {}
        (VotingType::RankedChoice, Selection::Choice(_))
        | (_, Selection::Ranked(_)) => return Err(SelectionError::WrongKind),
        _ => {}
    }

    if selection.len() > election.selection_cap() {
        return Err(SelectionError::TooMany(election.selection_cap()));
    }

    let mut seen = HashSet::new();
    for ident in selection.idents() {
        if !seen.insert(ident.as_str()) {
            return Err(SelectionError::DuplicateRank(ident.clone()));
        }
        let known = election
            .answers
            .iter()
            .any(|a| a.id.as_deref() == Some(ident.as_str()) || a.text == *ident);
        if !known {
            return Err(SelectionError::UnknownAnswer(ident.clone()));
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingSetupError {
    #[error("This election does not have enough candidates to rank")]
    NotEnoughAnswers,
    #[error("Duplicate candidate entry: {0}")]
    DuplicateAnswer(String),
}

/// The reorder controls need at least two distinct rankable entries;
/// anything less cannot produce a meaningful ranking. Checked before the
/// ranked form mounts its controls.
pub fn validate_ranking_setup(election: &Election) -> Result<(), RankingSetupError> {
    if election.answers.len() < 2 {
        return Err(RankingSetupError::NotEnoughAnswers);
    }
    let mut seen = HashSet::new();
    for answer in &election.answers {
        if !seen.insert(answer.key()) {
            return Err(RankingSetupError::DuplicateAnswer(answer.key().to_string()));
        }
    }
    Ok(())
}

/// Partially masks a national ID: the first six digits stay visible, the
/// rest is replaced with `****`. Already-masked values pass through
/// unchanged. Masking happens before candidate data is cached or rendered.
pub fn mask_kennitala(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 6 {
        return raw.to_string();
    }
    format!("{}****", &digits[..6])
}

/// The committee page edits `focus_areas` as comma-separated text but the
/// backend expects an actual array.
pub fn split_focus_areas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_focus_areas(areas: &[String]) -> String {
    areas.join(", ")
}
