use crate::selection::Selection;

/// Client-observed voting lifecycle for one election, from the moment a
/// member picks answers to the submission outcome.
///
/// `Ready -> Confirming -> Submitting -> Voted`, with `cancel` returning to
/// `Ready` untouched and a failed submission returning to `Ready` carrying
/// the error message. `Voted` is absorbing: no transition leads back to a
/// submittable state.
#[derive(Debug, Clone, PartialEq)]
pub enum BallotFlow {
    Ready { error: Option<SubmitError> },
    Confirming { selection: Selection },
    Submitting { selection: Selection },
    Voted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub message: String,
    pub duplicate: bool,
}

impl Default for BallotFlow {
    fn default() -> Self {
        BallotFlow::Ready { error: None }
    }
}

impl BallotFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A non-empty selection opens the confirmation step. Only valid from
    /// `Ready`; any other state is left unchanged.
    pub fn begin_confirm(self, selection: Selection) -> Self {
        match self {
            BallotFlow::Ready { .. } if !selection.is_empty() => {
                BallotFlow::Confirming { selection }
            }
            other => other,
        }
    }

    /// Cancelling the modal discards nothing but the modal itself.
    pub fn cancel(self) -> Self {
        match self {
            BallotFlow::Confirming { .. } => BallotFlow::Ready { error: None },
            other => other,
        }
    }

    /// Confirm moves to `Submitting`. A confirm while already submitting is
    /// ignored, which is the in-flight double-submission guard.
    pub fn confirm(self) -> Self {
        match self {
            BallotFlow::Confirming { selection } => BallotFlow::Submitting { selection },
            other => other,
        }
    }

    pub fn complete(self) -> Self {
        match self {
            BallotFlow::Submitting { .. } => BallotFlow::Voted,
            other => other,
        }
    }

    /// A failed submission restores the form; there is no automatic retry.
    pub fn fail(self, error: SubmitError) -> Self {
        match self {
            BallotFlow::Submitting { .. } => BallotFlow::Ready { error: Some(error) },
            other => other,
        }
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self, BallotFlow::Ready { .. })
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, BallotFlow::Submitting { .. })
    }

    pub fn has_voted(&self) -> bool {
        matches!(self, BallotFlow::Voted)
    }

    pub fn pending_selection(&self) -> Option<&Selection> {
        match self {
            BallotFlow::Confirming { selection } | BallotFlow::Submitting { selection } => {
                Some(selection)
            }
            _ => None,
        }
    }
}
