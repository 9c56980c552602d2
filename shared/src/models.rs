use serde::{Serialize, Deserialize};
use time::OffsetDateTime;

/// Lifecycle states as persisted by the backend. The frontend collapses
/// `Published` into `Active` for display; the persisted value is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    Draft,
    Published,
    Active,
    Paused,
    Closed,
    Archived,
}

impl ElectionStatus {
    /// Maps the backend vocabulary to the frontend one. Idempotent:
    /// an already-normalized status passes through unchanged.
    pub fn normalized(self) -> Self {
        match self {
            ElectionStatus::Published => ElectionStatus::Active,
            other => other,
        }
    }

    /// Admin lifecycle transitions. `Active` is the normalized face of
    /// `Published` and shares its transitions.
    pub fn allowed_transitions(self) -> &'static [ElectionStatus] {
        match self {
            ElectionStatus::Draft => &[ElectionStatus::Published],
            ElectionStatus::Published | ElectionStatus::Active => {
                &[ElectionStatus::Paused, ElectionStatus::Closed]
            }
            ElectionStatus::Paused => &[ElectionStatus::Published, ElectionStatus::Closed],
            ElectionStatus::Closed => &[ElectionStatus::Archived],
            ElectionStatus::Archived => &[],
        }
    }

    pub fn can_transition_to(self, next: ElectionStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn label(self) -> &'static str {
        match self {
            ElectionStatus::Draft => "Draft",
            ElectionStatus::Published | ElectionStatus::Active => "Active",
            ElectionStatus::Paused => "Paused",
            ElectionStatus::Closed => "Closed",
            ElectionStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VotingType {
    #[default]
    SingleChoice,
    MultiChoice,
    RankedChoice,
}

/// One selectable option. Older backend payloads name the fields
/// `answer_id`/`answer_text`; the aliases absorb both shapes. An answer
/// without any id falls back to its text as a pseudo-identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, alias = "answer_id")]
    pub id: Option<String>,
    #[serde(alias = "answer_text")]
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Answer {
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.text)
    }
}

fn default_seats() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub description: String,
    pub status: ElectionStatus,
    #[serde(default)]
    pub voting_type: VotingType,
    #[serde(default)]
    pub max_selections: Option<usize>,
    #[serde(default = "default_seats")]
    pub seats_to_fill: u32,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub voting_starts_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub voting_ends_at: Option<OffsetDateTime>,
}

impl Election {
    pub fn normalize(&mut self) {
        self.status = self.status.normalized();
    }

    /// A submittable voting form may only exist while this holds. Closed
    /// elections never accept ballots regardless of `has_voted`.
    pub fn accepts_ballots(&self) -> bool {
        self.status.normalized() == ElectionStatus::Active && !self.has_voted
    }

    /// Upper bound on the number of simultaneous selections. A ranked ballot
    /// carries the whole candidate list.
    pub fn selection_cap(&self) -> usize {
        match self.voting_type {
            VotingType::SingleChoice => 1,
            VotingType::MultiChoice => self.max_selections.unwrap_or(self.answers.len()).max(1),
            VotingType::RankedChoice => self.answers.len().max(1),
        }
    }

    /// Which voting form to mount, if any. Exactly one form exists while the
    /// election accepts ballots; otherwise none.
    pub fn form_kind(&self) -> Option<FormKind> {
        if !self.accepts_ballots() || self.answers.is_empty() {
            return None;
        }
        Some(match self.voting_type {
            VotingType::RankedChoice => FormKind::Ranked {
                seats_to_fill: self.seats_to_fill,
            },
            _ => FormKind::Standard {
                allow_multiple: self.voting_type == VotingType::MultiChoice,
                max_selections: self.selection_cap(),
            },
        })
    }
}

/// Dispatch decision for the voting form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Standard {
        allow_multiple: bool,
        max_selections: usize,
    },
    Ranked {
        seats_to_fill: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLink {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditHistoryEntry {
    pub field: String,
    pub user_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemberInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub django_id: Option<i64>,
    #[serde(default)]
    pub kennitala: Option<String>,
}

/// A person standing for nomination. Distinct from `Answer`: candidates are
/// mutated field-by-field from the committee page and never deleted
/// client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub party_roles: Vec<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub personal: String,
    #[serde(default)]
    pub requested_seat: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub links: Vec<CandidateLink>,
    #[serde(default)]
    pub edit_history: Vec<EditHistoryEntry>,
    #[serde(default)]
    pub member_info: Option<MemberInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerTally {
    #[serde(default)]
    pub answer_id: String,
    #[serde(alias = "answer_text")]
    pub text: String,
    pub votes: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StandardResults {
    #[serde(default)]
    pub total_votes: u64,
    #[serde(default)]
    pub results: Vec<AnswerTally>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankedMethod {
    Simple,
    #[default]
    Stv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuotaType {
    Droop,
    Hare,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceTally {
    pub candidate_id: String,
    pub text: String,
    pub votes: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StvResults {
    #[serde(default)]
    pub total_ballots: u64,
    #[serde(default)]
    pub winners: Vec<String>,
    #[serde(default)]
    pub first_preference_counts: Vec<PreferenceTally>,
    #[serde(default)]
    pub ranked_method: RankedMethod,
    #[serde(default)]
    pub quota_type: QuotaType,
    #[serde(default)]
    pub quota: Option<f64>,
}

/// Tallied results for a closed election. All counts and percentages are
/// server-aggregated; the client only derives presentation from them.
#[derive(Debug, Clone, PartialEq)]
pub enum ElectionResults {
    Standard(StandardResults),
    Stv(StvResults),
}

impl ElectionResults {
    /// Branches on the response shape: a `winners` field or a ranked-choice
    /// `voting_type` routes to the STV shape, anything else is standard.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let is_stv = value.get("winners").is_some()
            || value
                .get("voting_type")
                .and_then(|v| v.as_str())
                .map(|v| v == "ranked-choice")
                .unwrap_or(false);

        if is_stv {
            serde_json::from_value(value).map(ElectionResults::Stv)
        } else {
            serde_json::from_value(value).map(ElectionResults::Standard)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardVoteRequest {
    pub election_id: String,
    pub answer_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedVoteRequest {
    pub election_id: String,
    pub ranked_ids: Vec<String>,
}
