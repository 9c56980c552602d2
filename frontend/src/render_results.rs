use yew::prelude::*;
use shared::results::{
    calculation_line, classify_tone, max_first_preference, methodology_text, quota_text,
    stv_bar_width, winner_index, AnswerTone,
};
use shared::{AnswerTally, Election, PreferenceTally, StandardResults, StvResults};

use crate::styles::*;

fn bar_class(tone: AnswerTone) -> &'static str {
    match tone {
        AnswerTone::Affirmative => BAR_POSITIVE,
        AnswerTone::Negative => BAR_NEGATIVE,
        AnswerTone::Neutral => BAR_NEUTRAL,
    }
}

fn render_header(election: &Election) -> Html {
    html! {
        <>
            <h1 class={classes!(HEADING_MD, "break-words")}>{&election.title}</h1>
            {if !election.question.is_empty() {
                html! { <p class="mb-4 text-gray-300 break-words">{&election.question}</p> }
            } else { html! {} }}
        </>
    }
}

fn render_unavailable() -> Html {
    html! {
        <div class={combine_classes(NOTICE_CARD, NOTICE_WARNING)}>
            {"Results are not available for this election yet."}
        </div>
    }
}

pub fn render_standard_results(election: &Election, results: &StandardResults) -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                {render_header(election)}
                {if results.results.is_empty() {
                    render_unavailable()
                } else {
                    render_standard_bars(results)
                }}
            </div>
        </div>
    }
}

fn render_standard_bars(results: &StandardResults) -> Html {
    let winner = winner_index(&results.results);

    html! {
        <>
            <p class={combine_classes(TEXT_MUTED, "mb-4")}>
                {format!("Total votes: {}", results.total_votes)}
            </p>
            <div class={SPACE_Y_LG}>
                {for results.results.iter().enumerate().map(|(index, tally)| {
                    render_standard_bar(tally, winner == Some(index))
                })}
            </div>
        </>
    }
}

fn render_standard_bar(tally: &AnswerTally, is_winner: bool) -> Html {
    // Width comes straight from the server-aggregated percentage; nothing is
    // recomputed from raw ballots here.
    let width = format!("width: {}%", tally.percentage.clamp(0.0, 100.0));
    let bar = bar_class(classify_tone(&tally.text));

    html! {
        <div>
            <div class="flex justify-between items-baseline mb-1">
                <span class="text-gray-200 font-medium break-words">
                    {&tally.text}
                    {if is_winner {
                        html! {
                            <span class="ml-2 px-2 py-0.5 rounded-full text-xs font-semibold bg-green-700 text-green-100">
                                {"Winner"}
                            </span>
                        }
                    } else { html! {} }}
                </span>
                <span class={TEXT_MUTED}>
                    {format!("{} votes ({:.1}%)", tally.votes, tally.percentage)}
                </span>
            </div>
            <div class={BAR_TRACK}>
                <div class={bar} style={width} />
            </div>
        </div>
    }
}

pub fn render_stv_results(election: &Election, results: &StvResults) -> Html {
    html! {
        <div class={CONTAINER_SM}>
            <div class={CARD}>
                {render_header(election)}
                {if results.first_preference_counts.is_empty() {
                    render_unavailable()
                } else {
                    render_stv_body(results)
                }}
            </div>
        </div>
    }
}

fn render_stv_body(results: &StvResults) -> Html {
    let max = max_first_preference(&results.first_preference_counts);

    html! {
        <>
            <p class={combine_classes(TEXT_MUTED, "mb-2")}>
                {format!("Total ballots: {}", results.total_ballots)}
            </p>
            <div class={combine_classes(NOTICE_CARD, NOTICE_INFO)}>
                <p>{methodology_text(results.ranked_method)}</p>
                {if let Some(quota) = quota_text(results) {
                    html! { <p class="mt-2 font-medium">{quota}</p> }
                } else { html! {} }}
            </div>
            <h3 class={combine_classes(HEADING_SM, "mt-4")}>{"First preferences"}</h3>
            <div class={SPACE_Y_LG}>
                {for results.first_preference_counts.iter().map(|tally| {
                    render_stv_row(tally, results, max)
                })}
            </div>
        </>
    }
}

fn render_stv_row(tally: &PreferenceTally, results: &StvResults, max: u64) -> Html {
    let is_winner = results.winners.contains(&tally.candidate_id);
    let width = format!("width: {}%", stv_bar_width(tally.votes, max));

    html! {
        <div>
            <div class="flex justify-between items-baseline mb-1">
                <span class="text-gray-200 font-medium break-words">
                    {&tally.text}
                    {if is_winner {
                        html! {
                            <span class="ml-2 px-2 py-0.5 rounded-full text-xs font-semibold bg-green-700 text-green-100">
                                {"Elected"}
                            </span>
                        }
                    } else { html! {} }}
                </span>
                <span class={TEXT_MUTED}>{format!("{} first preferences", tally.votes)}</span>
            </div>
            <div class={BAR_TRACK}>
                <div class={BAR_NEUTRAL} style={width} />
            </div>
            // Audit line: same numbers as the bar, spelled out.
            <p class="text-xs text-gray-500 font-mono mt-1">
                {calculation_line(tally, results.total_ballots)}
            </p>
        </div>
    }
}
