//! API client. This is the single point where backend status vocabulary is
//! normalized (`published` -> `active`) and where member-sensitive candidate
//! fields are masked, so no downstream component ever sees raw values.

use gloo_net::http::{Request, Response};
use serde_json::json;
use shared::{
    mask_kennitala, Candidate, Election, ElectionResults, ElectionStatus, ErrorResponse,
    RankedVoteRequest, StandardVoteRequest,
};
use thiserror::Error;

use crate::config::CONFIG;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("You do not have access to this page")]
    NoAccess,
    #[error("Not found")]
    NotFound,
    #[error("You have already voted in this election")]
    DuplicateVote,
    #[error("{0}")]
    Backend(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse server response")]
    Parse,
}

async fn error_from(response: Response) -> ApiError {
    match response.status() {
        403 => ApiError::NoAccess,
        404 => ApiError::NotFound,
        _ => match response.json::<ErrorResponse>().await {
            Ok(body) if body.is_duplicate_vote() => ApiError::DuplicateVote,
            Ok(body) => ApiError::Backend(body.error),
            Err(_) => ApiError::Backend("Request failed".into()),
        },
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(response)
    } else {
        Err(error_from(response).await)
    }
}

pub async fn fetch_elections() -> Result<Vec<Election>, ApiError> {
    let response = send(Request::get(&format!("{}/elections", CONFIG.api_base_url))).await?;
    let mut elections = response
        .json::<Vec<Election>>()
        .await
        .map_err(|_| ApiError::Parse)?;
    for election in &mut elections {
        election.normalize();
    }
    Ok(elections)
}

pub async fn fetch_election(id: &str) -> Result<Election, ApiError> {
    let response = send(Request::get(&format!(
        "{}/elections/{}",
        CONFIG.api_base_url, id
    )))
    .await?;
    let mut election = response
        .json::<Election>()
        .await
        .map_err(|_| ApiError::Parse)?;
    election.normalize();
    Ok(election)
}

pub async fn fetch_results(id: &str) -> Result<ElectionResults, ApiError> {
    let response = send(Request::get(&format!(
        "{}/elections/{}/results",
        CONFIG.api_base_url, id
    )))
    .await?;
    let value = response
        .json::<serde_json::Value>()
        .await
        .map_err(|_| ApiError::Parse)?;
    ElectionResults::from_value(value).map_err(|_| ApiError::Parse)
}

pub async fn submit_standard_vote(request: &StandardVoteRequest) -> Result<(), ApiError> {
    let req = Request::post(&format!(
        "{}/elections/{}/vote",
        CONFIG.api_base_url, request.election_id
    ))
    .json(request)
    .map_err(|e| ApiError::Network(e.to_string()))?;
    send(req).await?;
    Ok(())
}

pub async fn submit_ranked_vote(request: &RankedVoteRequest) -> Result<(), ApiError> {
    let req = Request::post(&format!(
        "{}/elections/{}/vote",
        CONFIG.api_base_url, request.election_id
    ))
    .json(request)
    .map_err(|e| ApiError::Network(e.to_string()))?;
    send(req).await?;
    Ok(())
}

/// Admin lifecycle change. The backend enforces the same transition table;
/// the returned record is re-normalized like any other.
pub async fn update_election_status(
    id: &str,
    next: ElectionStatus,
) -> Result<Election, ApiError> {
    let req = Request::post(&format!(
        "{}/elections/{}/status",
        CONFIG.api_base_url, id
    ))
    .json(&json!({ "status": next }))
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = send(req).await?;
    let mut election = response
        .json::<Election>()
        .await
        .map_err(|_| ApiError::Parse)?;
    election.normalize();
    Ok(election)
}

/// Elections run by the nomination committee; same record shape, separate
/// listing and cache key.
pub async fn fetch_nomination_elections() -> Result<Vec<Election>, ApiError> {
    let response = send(Request::get(&format!(
        "{}/nomination/elections",
        CONFIG.api_base_url
    )))
    .await?;
    let mut elections = response
        .json::<Vec<Election>>()
        .await
        .map_err(|_| ApiError::Parse)?;
    for election in &mut elections {
        election.normalize();
    }
    Ok(elections)
}

pub async fn fetch_candidates() -> Result<Vec<Candidate>, ApiError> {
    let response = send(Request::get(&format!(
        "{}/candidates",
        CONFIG.members_api_base_url
    )))
    .await?;
    let mut candidates = response
        .json::<Vec<Candidate>>()
        .await
        .map_err(|_| ApiError::Parse)?;
    // National IDs are masked before anything downstream can render or
    // cache them.
    for candidate in &mut candidates {
        if let Some(info) = &mut candidate.member_info {
            if let Some(kennitala) = &mut info.kennitala {
                *kennitala = mask_kennitala(kennitala);
            }
        }
    }
    Ok(candidates)
}

/// One PATCH per edited field.
pub async fn update_candidate_field(
    id: &str,
    field: &str,
    value: serde_json::Value,
) -> Result<(), ApiError> {
    let req = Request::patch(&format!(
        "{}/candidates/{}",
        CONFIG.members_api_base_url, id
    ))
    .json(&json!({ field: value }))
    .map_err(|e| ApiError::Network(e.to_string()))?;
    send(req).await?;
    Ok(())
}
