use crate::models::{Answer, Election};

/// What the member picked on a voting form. Choice identifiers are an
/// unordered set; ranked identifiers carry preference order, first
/// preference first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Choice(Vec<String>),
    Ranked(Vec<String>),
}

impl Selection {
    pub fn idents(&self) -> &[String] {
        match self {
            Selection::Choice(ids) | Selection::Ranked(ids) => ids,
        }
    }

    /// Ranked selections preserve the member's chosen order when displayed.
    pub fn is_ordered(&self) -> bool {
        matches!(self, Selection::Ranked(_))
    }

    pub fn is_empty(&self) -> bool {
        self.idents().is_empty()
    }

    pub fn len(&self) -> usize {
        self.idents().len()
    }
}

fn find_answer<'a>(election: &'a Election, ident: &str) -> Option<&'a Answer> {
    election
        .answers
        .iter()
        .find(|a| a.id.as_deref() == Some(ident))
        .or_else(|| election.answers.iter().find(|a| a.text == ident))
}

/// Resolves each selected identifier to its full answer, matching by id
/// first and by display text as a last resort. Returns `None` when nothing
/// resolves; callers treat that as a silent abort (it indicates a
/// selection/data mismatch, not a user error). Order follows the selection.
pub fn resolve_selection<'a>(
    election: &'a Election,
    selection: &Selection,
) -> Option<Vec<&'a Answer>> {
    let resolved: Vec<&Answer> = selection
        .idents()
        .iter()
        .filter_map(|ident| find_answer(election, ident))
        .collect();

    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}
