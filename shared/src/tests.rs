#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};

    use crate::cache::{CacheEntry, STALE_AFTER};
    use crate::error::{ErrorCode, ErrorResponse};
    use crate::flow::{BallotFlow, SubmitError};
    use crate::models::*;
    use crate::results::*;
    use crate::selection::{resolve_selection, Selection};
    use crate::validation::*;

    fn answer(id: &str, text: &str) -> Answer {
        Answer { id: Some(id.to_string()), text: text.to_string(), description: None }
    }

    fn election(status: ElectionStatus, voting_type: VotingType) -> Election {
        Election {
            id: "e1".into(),
            title: "Test election".into(),
            question: String::new(),
            description: String::new(),
            status,
            voting_type,
            max_selections: None,
            seats_to_fill: 1,
            answers: vec![answer("a", "Yes"), answer("b", "No")],
            has_voted: false,
            voting_starts_at: None,
            voting_ends_at: None,
        }
    }

    #[test]
    fn test_status_normalization_idempotence() {
        assert_eq!(ElectionStatus::Published.normalized(), ElectionStatus::Active);
        assert_eq!(ElectionStatus::Active.normalized(), ElectionStatus::Active);
        assert_eq!(
            ElectionStatus::Published.normalized().normalized(),
            ElectionStatus::Published.normalized()
        );
        for status in [
            ElectionStatus::Draft,
            ElectionStatus::Paused,
            ElectionStatus::Closed,
            ElectionStatus::Archived,
        ] {
            assert_eq!(status.normalized(), status);
        }
    }

    #[test]
    fn test_form_dispatch_exclusivity() {
        let mut e = election(ElectionStatus::Published, VotingType::SingleChoice);
        e.normalize();
        assert!(matches!(
            e.form_kind(),
            Some(FormKind::Standard { allow_multiple: false, max_selections: 1 })
        ));

        e.voting_type = VotingType::RankedChoice;
        assert!(matches!(e.form_kind(), Some(FormKind::Ranked { seats_to_fill: 1 })));

        // No form for any other (status, has_voted) combination.
        e.has_voted = true;
        assert_eq!(e.form_kind(), None);
        e.has_voted = false;
        for status in [
            ElectionStatus::Draft,
            ElectionStatus::Paused,
            ElectionStatus::Closed,
            ElectionStatus::Archived,
        ] {
            e.status = status;
            assert_eq!(e.form_kind(), None);
        }

        // Closed never renders a form regardless of has_voted.
        e.status = ElectionStatus::Closed;
        e.has_voted = true;
        assert_eq!(e.form_kind(), None);
    }

    #[test]
    fn test_form_dispatch_multi_choice_cap() {
        let mut e = election(ElectionStatus::Active, VotingType::MultiChoice);
        e.max_selections = Some(2);
        assert!(matches!(
            e.form_kind(),
            Some(FormKind::Standard { allow_multiple: true, max_selections: 2 })
        ));
    }

    #[test]
    fn test_no_form_without_answers() {
        let mut e = election(ElectionStatus::Active, VotingType::SingleChoice);
        e.answers.clear();
        assert_eq!(e.form_kind(), None);
    }

    #[test]
    fn test_selection_resolution_round_trip() {
        let e = election(ElectionStatus::Active, VotingType::SingleChoice);

        let resolved = resolve_selection(&e, &Selection::Choice(vec!["a".into()])).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].text, "Yes");

        // Unknown id resolves to nothing and aborts without a modal.
        assert!(resolve_selection(&e, &Selection::Choice(vec!["z".into()])).is_none());
    }

    #[test]
    fn test_selection_resolution_text_fallback() {
        let mut e = election(ElectionStatus::Active, VotingType::SingleChoice);
        e.answers = vec![Answer { id: None, text: "Yes".into(), description: None }];
        let resolved = resolve_selection(&e, &Selection::Choice(vec!["Yes".into()])).unwrap();
        assert_eq!(resolved[0].key(), "Yes");
    }

    #[test]
    fn test_resolution_preserves_ranked_order() {
        let e = election(ElectionStatus::Active, VotingType::RankedChoice);
        let resolved =
            resolve_selection(&e, &Selection::Ranked(vec!["b".into(), "a".into()])).unwrap();
        let texts: Vec<_> = resolved.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["No", "Yes"]);
    }

    #[test]
    fn test_confirmation_is_a_gate() {
        let flow = BallotFlow::new();

        // Empty selections never open the modal.
        let flow = flow.begin_confirm(Selection::Choice(vec![]));
        assert!(flow.accepts_input());

        let flow = flow.begin_confirm(Selection::Choice(vec!["a".into()]));
        assert!(matches!(flow, BallotFlow::Confirming { .. }));

        // Cancel returns to an unchanged, submittable form.
        let cancelled = flow.clone().cancel();
        assert_eq!(cancelled, BallotFlow::Ready { error: None });

        // Only an explicit confirm reaches the submitting state.
        let submitting = flow.confirm();
        assert!(submitting.in_flight());

        // Second confirm while in flight is a no-op.
        assert!(submitting.clone().confirm().in_flight());
    }

    #[test]
    fn test_voted_state_is_absorbing() {
        let flow = BallotFlow::new()
            .begin_confirm(Selection::Choice(vec!["a".into()]))
            .confirm()
            .complete();
        assert!(flow.has_voted());

        let again = flow
            .clone()
            .begin_confirm(Selection::Choice(vec!["b".into()]));
        assert!(again.has_voted());
        assert!(flow.cancel().has_voted());
    }

    #[test]
    fn test_failed_submission_restores_the_form() {
        let error = SubmitError { message: "server error".into(), duplicate: false };
        let flow = BallotFlow::new()
            .begin_confirm(Selection::Choice(vec!["a".into()]))
            .confirm()
            .fail(error.clone());
        assert_eq!(flow, BallotFlow::Ready { error: Some(error) });
        assert!(flow.accepts_input());
    }

    #[test]
    fn test_selection_validation() {
        let mut e = election(ElectionStatus::Active, VotingType::MultiChoice);
        e.max_selections = Some(1);

        assert_eq!(
            validate_selection(&e, &Selection::Choice(vec![])),
            Err(SelectionError::Empty)
        );
        assert_eq!(
            validate_selection(&e, &Selection::Choice(vec!["a".into(), "b".into()])),
            Err(SelectionError::TooMany(1))
        );
        assert_eq!(
            validate_selection(&e, &Selection::Choice(vec!["z".into()])),
            Err(SelectionError::UnknownAnswer("z".into()))
        );
        assert!(validate_selection(&e, &Selection::Choice(vec!["a".into()])).is_ok());

        let mut ranked = election(ElectionStatus::Active, VotingType::RankedChoice);
        ranked.max_selections = None;
        assert_eq!(
            validate_selection(&ranked, &Selection::Ranked(vec!["a".into(), "a".into()])),
            Err(SelectionError::DuplicateRank("a".into()))
        );
        assert_eq!(
            validate_selection(&ranked, &Selection::Choice(vec!["a".into()])),
            Err(SelectionError::WrongKind)
        );
    }

    #[test]
    fn test_ranking_setup_validation() {
        let e = election(ElectionStatus::Active, VotingType::RankedChoice);
        assert!(validate_ranking_setup(&e).is_ok());

        let mut single = e.clone();
        single.answers.truncate(1);
        assert_eq!(
            validate_ranking_setup(&single),
            Err(RankingSetupError::NotEnoughAnswers)
        );

        let mut duplicated = e.clone();
        duplicated.answers.push(answer("a", "Yes again"));
        assert_eq!(
            validate_ranking_setup(&duplicated),
            Err(RankingSetupError::DuplicateAnswer("a".into()))
        );
    }

    #[test]
    fn test_results_branch_selection() {
        // A winners array routes to STV regardless of other fields.
        let stv = serde_json::json!({
            "winners": ["c1"],
            "total_ballots": 100,
            "first_preference_counts": [
                {"candidate_id": "c1", "text": "Anna", "votes": 60, "percentage": 60.0}
            ],
            "ranked_method": "stv",
            "quota_type": "droop",
            "quota": 51.0
        });
        assert!(matches!(
            ElectionResults::from_value(stv).unwrap(),
            ElectionResults::Stv(_)
        ));

        let standard = serde_json::json!({
            "total_votes": 10,
            "results": [
                {"answer_id": "a", "text": "Yes", "votes": 7, "percentage": 70.0},
                {"answer_id": "b", "text": "No", "votes": 3, "percentage": 30.0}
            ]
        });
        assert!(matches!(
            ElectionResults::from_value(standard).unwrap(),
            ElectionResults::Standard(_)
        ));

        let ranked_typed = serde_json::json!({
            "voting_type": "ranked-choice",
            "total_ballots": 5,
            "first_preference_counts": []
        });
        assert!(matches!(
            ElectionResults::from_value(ranked_typed).unwrap(),
            ElectionResults::Stv(_)
        ));
    }

    #[test]
    fn test_standard_winner_first_entry_wins_ties() {
        let tally = |id: &str, votes: u64| AnswerTally {
            answer_id: id.into(),
            text: id.into(),
            votes,
            percentage: 0.0,
        };
        assert_eq!(winner_index(&[tally("a", 5), tally("b", 5), tally("c", 2)]), Some(0));
        assert_eq!(winner_index(&[tally("a", 1), tally("b", 5)]), Some(1));
        assert_eq!(winner_index(&[]), None);
    }

    #[test]
    fn test_stv_bar_width_proportionality() {
        let counts = [
            PreferenceTally { candidate_id: "a".into(), text: "A".into(), votes: 50, percentage: 50.0 },
            PreferenceTally { candidate_id: "b".into(), text: "B".into(), votes: 30, percentage: 30.0 },
            PreferenceTally { candidate_id: "c".into(), text: "C".into(), votes: 20, percentage: 20.0 },
        ];
        let max = max_first_preference(&counts);
        assert_eq!(stv_bar_width(counts[0].votes, max), 100.0);
        assert_eq!(stv_bar_width(counts[1].votes, max), 60.0);
        assert_eq!(stv_bar_width(counts[2].votes, max), 40.0);
        assert_eq!(stv_bar_width(0, 0), 0.0);
    }

    #[test]
    fn test_quota_and_methodology_text() {
        let mut results = StvResults {
            quota: Some(26.0),
            quota_type: QuotaType::Droop,
            ..Default::default()
        };
        assert_eq!(quota_text(&results).unwrap(), "Droop quota: 26");

        results.quota_type = QuotaType::None;
        assert_eq!(quota_text(&results), None);

        results.quota = None;
        results.quota_type = QuotaType::Hare;
        assert_eq!(quota_text(&results), None);

        assert!(methodology_text(RankedMethod::Stv).contains("transfer"));
        assert!(!methodology_text(RankedMethod::Simple).contains("transfer"));
    }

    #[test]
    fn test_calculation_line() {
        let tally = PreferenceTally {
            candidate_id: "a".into(),
            text: "Anna".into(),
            votes: 50,
            percentage: 50.0,
        };
        assert_eq!(calculation_line(&tally, 100), "50/100 = 50.0%");
    }

    #[test]
    fn test_answer_tone_keywords() {
        assert_eq!(classify_tone("Já"), AnswerTone::Affirmative);
        assert_eq!(classify_tone("Yes, approve"), AnswerTone::Affirmative);
        assert_eq!(classify_tone("Ég samþykki tillöguna"), AnswerTone::Affirmative);
        assert_eq!(classify_tone("Nei"), AnswerTone::Negative);
        assert_eq!(classify_tone("Hafna tillögunni"), AnswerTone::Negative);
        assert_eq!(classify_tone("Abstain"), AnswerTone::Neutral);
    }

    #[test]
    fn test_cache_staleness_boundary() {
        let written = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let entry = CacheEntry::new((), written);

        assert!(!entry.is_stale(written + STALE_AFTER - Duration::seconds(1)));
        assert!(entry.is_stale(written + STALE_AFTER));
        assert!(entry.is_stale(written + STALE_AFTER + Duration::seconds(1)));
    }

    #[test]
    fn test_cache_entry_round_trip() {
        let written = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let entry = CacheEntry::new(vec!["a".to_string()], written);
        let json = serde_json::to_string(&entry).unwrap();
        let back: CacheEntry<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_lifecycle_transitions() {
        use ElectionStatus::*;
        assert!(Draft.can_transition_to(Published));
        assert!(!Draft.can_transition_to(Closed));
        assert!(Published.can_transition_to(Paused));
        assert!(Published.can_transition_to(Closed));
        assert!(Active.can_transition_to(Closed));
        assert!(Paused.can_transition_to(Published));
        assert!(Closed.can_transition_to(Archived));
        assert!(!Closed.can_transition_to(Published));
        assert!(Archived.allowed_transitions().is_empty());
    }

    #[test]
    fn test_duplicate_vote_discrimination() {
        let coded = ErrorResponse::with_code("rejected", ErrorCode::DuplicateVote);
        assert!(coded.is_duplicate_vote());

        let legacy = ErrorResponse::new("You have already voted in this election");
        assert!(legacy.is_duplicate_vote());

        let other = ErrorResponse::new("Internal server error");
        assert!(!other.is_duplicate_vote());
    }

    #[test]
    fn test_kennitala_masking() {
        assert_eq!(mask_kennitala("0101902389"), "010190****");
        assert_eq!(mask_kennitala("010190-2389"), "010190****");
        // Already-masked values pass through unchanged.
        assert_eq!(mask_kennitala("010190****"), "010190****");
        assert_eq!(mask_kennitala(""), "");
    }

    #[test]
    fn test_focus_area_split_and_join() {
        let areas = split_focus_areas("housing, health , , education");
        assert_eq!(areas, ["housing", "health", "education"]);
        assert_eq!(join_focus_areas(&areas), "housing, health, education");
    }

    #[test]
    fn test_answer_payload_key_aliases() {
        let a: Answer =
            serde_json::from_str(r#"{"answer_id": "x", "answer_text": "Option X"}"#).unwrap();
        assert_eq!(a.id.as_deref(), Some("x"));
        assert_eq!(a.text, "Option X");

        let b: Answer = serde_json::from_str(r#"{"text": "No id"}"#).unwrap();
        assert_eq!(b.id, None);
        assert_eq!(b.key(), "No id");
    }

    #[test]
    fn test_multi_choice_scenario_end_to_end() {
        let mut e: Election = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "Board seats",
            "status": "published",
            "has_voted": false,
            "voting_type": "multi-choice",
            "max_selections": 2,
            "answers": [
                {"id": "a1", "text": "X"},
                {"id": "a2", "text": "Y"},
                {"id": "a3", "text": "Z"}
            ]
        }))
        .unwrap();

        e.normalize();
        assert_eq!(e.status, ElectionStatus::Active);
        assert!(matches!(
            e.form_kind(),
            Some(FormKind::Standard { allow_multiple: true, max_selections: 2 })
        ));

        let selection = Selection::Choice(vec!["a1".into(), "a3".into()]);
        validate_selection(&e, &selection).unwrap();
        let resolved = resolve_selection(&e, &selection).unwrap();
        let texts: Vec<_> = resolved.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, ["X", "Z"]);

        let request = StandardVoteRequest {
            election_id: e.id.clone(),
            answer_ids: selection.idents().to_vec(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"electionId": "e1", "answerIds": ["a1", "a3"]})
        );
    }

    #[test]
    fn test_ranked_request_wire_shape() {
        let request = RankedVoteRequest {
            election_id: "e2".into(),
            ranked_ids: vec!["c2".into(), "c1".into()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"electionId": "e2", "rankedIds": ["c2", "c1"]})
        );
    }
}
