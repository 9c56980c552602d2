use std::rc::Rc;

use yew::prelude::*;
use shared::{
    resolve_selection, validate_ranking_setup, validate_selection, BallotFlow, Election,
    RankedVoteRequest, Selection,
};

use crate::api::{self, ApiError};
use crate::ballot_form::{selection_texts, submit_error};
use crate::confirm_modal::ConfirmModal;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub election: Rc<Election>,
    pub seats_to_fill: u32,
    pub on_voted: Callback<()>,
}

/// The ranking controls depend on browser capabilities resolved after the
/// component mounts, so construction is asynchronous and fallible.
#[derive(PartialEq)]
enum Phase {
    Preparing,
    Ready,
    Failed(String),
}

pub enum Msg {
    PrepareFinished(Result<(), String>),
    MoveUp(usize),
    MoveDown(usize),
    RequestConfirm,
    CancelConfirm,
    ConfirmSubmit,
    SubmissionComplete(Result<(), ApiError>),
}

/// Rank-ordering form for ranked-choice (STV) elections. The full candidate
/// list is ranked; position 0 is the first preference.
pub struct RankedForm {
    phase: Phase,
    order: Vec<String>,
    flow: BallotFlow,
}

impl Component for RankedForm {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let order = ctx
            .props()
            .election
            .answers
            .iter()
            .map(|a| a.key().to_string())
            .collect();

        let election = ctx.props().election.clone();
        ctx.link().send_future(async move {
            Msg::PrepareFinished(prepare_ranking_controls(&election).await)
        });

        Self { phase: Phase::Preparing, order, flow: BallotFlow::new() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PrepareFinished(Ok(())) => {
                self.phase = Phase::Ready;
                true
            }
            // A construction failure stays inside this container; it must
            // never surface as a page-level load error.
            Msg::PrepareFinished(Err(message)) => {
                self.phase = Phase::Failed(message);
                true
            }
            Msg::MoveUp(index) => self.swap(index, index.wrapping_sub(1)),
            Msg::MoveDown(index) => self.swap(index + 1, index),
            Msg::RequestConfirm => {
                let selection = Selection::Ranked(self.order.clone());
                let election = &ctx.props().election;
                if validate_selection(election, &selection).is_err() {
                    return false;
                }
                if resolve_selection(election, &selection).is_none() {
                    return false;
                }
                self.flow = self.flow.clone().begin_confirm(selection);
                true
            }
            Msg::CancelConfirm => {
                self.flow = self.flow.clone().cancel();
                true
            }
            Msg::ConfirmSubmit => {
                if self.flow.in_flight() {
                    return false;
                }
                self.flow = self.flow.clone().confirm();
                if let BallotFlow::Submitting { selection } = &self.flow {
                    let request = RankedVoteRequest {
                        election_id: ctx.props().election.id.clone(),
                        ranked_ids: selection.idents().to_vec(),
                    };
                    ctx.link().send_future(async move {
                        Msg::SubmissionComplete(api::submit_ranked_vote(&request).await)
                    });
                }
                true
            }
            Msg::SubmissionComplete(result) => {
                match result {
                    Ok(()) => {
                        self.flow = self.flow.clone().complete();
                        ctx.props().on_voted.emit(());
                    }
                    Err(err) => {
                        self.flow = self.flow.clone().fail(submit_error(err));
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.phase {
            Phase::Preparing => html! {
                <div class="flex justify-center p-4">
                    <div class={combine_classes("animate-pulse", TEXT_MUTED)}>
                        {"Preparing ranking controls..."}
                    </div>
                </div>
            },
            Phase::Failed(message) => html! {
                <div class={alert_style("error")}>{message}</div>
            },
            Phase::Ready => self.render_form(ctx),
        }
    }
}

impl RankedForm {
    fn swap(&mut self, lower: usize, upper: usize) -> bool {
        if !self.flow.accepts_input() {
            return false;
        }
        if upper >= self.order.len() || lower >= self.order.len() || lower == 0 {
            return false;
        }
        self.order.swap(lower, upper);
        true
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let election = &ctx.props().election;
        let seats = ctx.props().seats_to_fill;
        let disabled = !self.flow.accepts_input();

        html! {
            <div class={SPACE_Y_LG}>
                <div class="bg-gray-700/30 p-4 rounded-lg">
                    <p class="text-gray-300">
                        {format!(
                            "Rank the candidates in your order of preference; your first choice goes on top. {} will be elected.",
                            if seats == 1 { "One candidate".to_string() } else { format!("{} candidates", seats) }
                        )}
                    </p>
                </div>

                <ul class={SPACE_Y_BASE}>
                    {for self.order.iter().enumerate().map(|(index, key)| {
                        let answer = election.answers.iter().find(|a| a.key() == key);
                        let text = answer.map(|a| a.text.as_str()).unwrap_or(key);
                        let description = answer.and_then(|a| a.description.clone());
                        html! {
                            <li class={CARD_SECTION}>
                                <div class="flex items-center gap-3">
                                    <span class="font-mono text-gray-400 w-8 shrink-0 text-right">
                                        {format!("{}.", index + 1)}
                                    </span>
                                    <div class="flex-grow min-w-0">
                                        <span class="text-white break-words">{text}</span>
                                        {if let Some(description) = description {
                                            html! { <p class={TEXT_MUTED}>{description}</p> }
                                        } else { html! {} }}
                                    </div>
                                    <div class="flex gap-1 shrink-0">
                                        <button
                                            type="button"
                                            disabled={disabled || index == 0}
                                            onclick={ctx.link().callback(move |_| Msg::MoveUp(index))}
                                            class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                                            title="Move up"
                                        >
                                            {"↑"}
                                        </button>
                                        <button
                                            type="button"
                                            disabled={disabled || index + 1 == self.order.len()}
                                            onclick={ctx.link().callback(move |_| Msg::MoveDown(index))}
                                            class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                                            title="Move down"
                                        >
                                            {"↓"}
                                        </button>
                                    </div>
                                </div>
                            </li>
                        }
                    })}
                </ul>

                {self.render_flow_status(ctx)}
                {self.render_modal(ctx)}
            </div>
        }
    }

    fn render_flow_status(&self, ctx: &Context<Self>) -> Html {
        match &self.flow {
            BallotFlow::Ready { error } => html! {
                <>
                    {if let Some(error) = error {
                        let style = if error.duplicate { "warning" } else { "error" };
                        html! { <div class={alert_style(style)}>{&error.message}</div> }
                    } else { html! {} }}
                    <button
                        type="button"
                        onclick={ctx.link().callback(|_| Msg::RequestConfirm)}
                        disabled={self.order.is_empty()}
                        class={button_primary(true)}
                    >
                        {"Submit ranking"}
                    </button>
                </>
            },
            BallotFlow::Confirming { .. } => html! {},
            BallotFlow::Submitting { .. } => html! {
                <div class="flex justify-center">
                    <div class="animate-pulse text-blue-400">{"Submitting your vote..."}</div>
                </div>
            },
            BallotFlow::Voted => html! {
                <div class={combine_classes(NOTICE_CARD, NOTICE_SUCCESS)}>
                    {"Your vote has been recorded."}
                </div>
            },
        }
    }

    fn render_modal(&self, ctx: &Context<Self>) -> Html {
        let BallotFlow::Confirming { selection } = &self.flow else {
            return html! {};
        };
        let items = selection_texts(&ctx.props().election, selection);

        html! {
            <ConfirmModal
                {items}
                ordered={true}
                busy={false}
                heading="Confirm your ranking"
                on_confirm={ctx.link().callback(|_| Msg::ConfirmSubmit)}
                on_cancel={ctx.link().callback(|_| Msg::CancelConfirm)}
            />
        }
    }
}

/// Checks the candidate list can actually be ranked before the reorder
/// controls mount. Waits a tick so the list items are in the DOM first. A
/// bad configuration renders inline in the form container, not as a page
/// error.
async fn prepare_ranking_controls(election: &Election) -> Result<(), String> {
    gloo_timers::future::TimeoutFuture::new(0).await;
    validate_ranking_setup(election).map_err(|e| e.to_string())
}
