use std::rc::Rc;

use yew::prelude::*;
use shared::{
    resolve_selection, validate_selection, Answer, BallotFlow, Election, Selection,
    StandardVoteRequest, SubmitError,
};

use crate::api::{self, ApiError};
use crate::confirm_modal::ConfirmModal;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub election: Rc<Election>,
    pub allow_multiple: bool,
    pub max_selections: usize,
    pub on_voted: Callback<()>,
}

pub enum Msg {
    Toggle(String),
    RequestConfirm,
    CancelConfirm,
    ConfirmSubmit,
    SubmissionComplete(Result<(), ApiError>),
}

/// Standard select-one/select-many voting form. Selection order is kept as
/// clicked so the confirmation list mirrors what the member did.
pub struct BallotForm {
    selected: Vec<String>,
    flow: BallotFlow,
}

impl Component for BallotForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_: &Context<Self>) -> Self {
        Self { selected: Vec::new(), flow: BallotFlow::new() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle(key) => {
                if !self.flow.accepts_input() {
                    return false;
                }
                if let Some(pos) = self.selected.iter().position(|k| *k == key) {
                    self.selected.remove(pos);
                } else if !ctx.props().allow_multiple {
                    self.selected = vec![key];
                } else if self.selected.len() < ctx.props().max_selections {
                    self.selected.push(key);
                } else {
                    return false;
                }
                true
            }
            Msg::RequestConfirm => {
                let selection = Selection::Choice(self.selected.clone());
                let election = &ctx.props().election;
                if validate_selection(election, &selection).is_err() {
                    return false;
                }
                // A selection that resolves to nothing is a data mismatch;
                // abort silently rather than opening an empty modal.
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
                    let request = StandardVoteRequest {
                        election_id: ctx.props().election.id.clone(),
                        answer_ids: selection.idents().to_vec(),
                    };
                    ctx.link().send_future(async move {
                        Msg::SubmissionComplete(api::submit_standard_vote(&request).await)
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
        html! {
            <div class={SPACE_Y_LG}>
                {self.render_instructions(ctx)}
                <div class={SPACE_Y_BASE}>
                    {for ctx.props().election.answers.iter().map(|answer| {
                        self.render_answer(ctx, answer)
                    })}
                </div>
                {self.render_flow_status(ctx)}
                {self.render_modal(ctx)}
            </div>
        }
    }
}

impl BallotForm {
    fn render_instructions(&self, ctx: &Context<Self>) -> Html {
        let text = if ctx.props().allow_multiple {
            format!("Select up to {} answers", ctx.props().max_selections)
        } else {
            "Select one answer".to_string()
        };
        html! { <p class={TEXT_MUTED}>{text}</p> }
    }

    fn render_answer(&self, ctx: &Context<Self>, answer: &Answer) -> Html {
        let key = answer.key().to_string();
        let is_selected = self.selected.iter().any(|k| *k == key);
        let disabled = !self.flow.accepts_input();
        let onclick = {
            let key = key.clone();
            ctx.link().callback(move |_| Msg::Toggle(key.clone()))
        };

        let card_classes = if is_selected {
            combine_classes(CARD_SECTION, "ring-2 ring-blue-400 border-blue-500")
        } else {
            combine_classes(CARD_SECTION, "hover:border-gray-500 cursor-pointer")
        };

        html! {
            <button
                type="button"
                {disabled}
                {onclick}
                class={combine_classes(&card_classes, "w-full text-left")}
            >
                <div class="flex items-center gap-3">
                    <span class={if is_selected {
                        "w-5 h-5 rounded-full bg-blue-500 ring-2 ring-blue-300 shrink-0"
                    } else {
                        "w-5 h-5 rounded-full border-2 border-gray-500 shrink-0"
                    }} />
                    <span class="text-white break-words">{&answer.text}</span>
                </div>
                {if let Some(description) = &answer.description {
                    html! { <p class={combine_classes(TEXT_MUTED, "mt-1 ml-8")}>{description}</p> }
                } else { html! {} }}
            </button>
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
                        disabled={self.selected.is_empty()}
                        class={button_primary(true)}
                    >
                        {"Submit vote"}
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
                ordered={false}
                busy={false}
                on_confirm={ctx.link().callback(|_| Msg::ConfirmSubmit)}
                on_cancel={ctx.link().callback(|_| Msg::CancelConfirm)}
            />
        }
    }
}

pub fn selection_texts(election: &Election, selection: &Selection) -> Vec<String> {
    resolve_selection(election, selection)
        .unwrap_or_default()
        .iter()
        .map(|a| a.text.clone())
        .collect()
}

pub fn submit_error(err: ApiError) -> SubmitError {
    match err {
        ApiError::DuplicateVote => SubmitError {
            message: "You have already voted in this election.".into(),
            duplicate: true,
        },
        other => SubmitError {
            message: format!("Could not submit your vote: {}. Please try again.", other),
            duplicate: false,
        },
    }
}
