use yew::prelude::*;
use shared::{Election, ElectionStatus};

use crate::api::{self, ApiError};
use crate::confirm_modal::ConfirmModal;
use crate::election_list::render_no_access;
use crate::styles::*;

#[derive(Clone, PartialEq, Default)]
enum State {
    #[default]
    Loading,
    Ready,
    NoAccess,
    Error(String),
}

#[derive(Clone, PartialEq)]
struct PendingTransition {
    election_id: String,
    election_title: String,
    next: ElectionStatus,
    in_flight: bool,
}

/// Election lifecycle management. Transitions come from the status
/// transition table; closing and archiving are destructive and go through
/// the confirmation modal.
pub struct Admin {
    elections: Vec<Election>,
    state: State,
    pending: Option<PendingTransition>,
    error: Option<String>,
}

pub enum Msg {
    Loaded(Vec<Election>),
    LoadFailed(ApiError),
    Retry,
    RequestTransition(String, ElectionStatus),
    CancelTransition,
    ConfirmTransition,
    TransitionFinished(Result<Election, ApiError>),
}

fn is_destructive(next: ElectionStatus) -> bool {
    matches!(next, ElectionStatus::Closed | ElectionStatus::Archived)
}

fn transition_label(next: ElectionStatus) -> &'static str {
    match next {
        ElectionStatus::Published => "Publish",
        ElectionStatus::Paused => "Pause",
        ElectionStatus::Closed => "Close",
        ElectionStatus::Archived => "Archive",
        _ => "Update",
    }
}

impl Component for Admin {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        fetch(ctx);
        Self {
            elections: Vec::new(),
            state: State::Loading,
            pending: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(elections) => {
                self.elections = elections;
                self.state = State::Ready;
                true
            }
            Msg::LoadFailed(ApiError::NoAccess) => {
                self.state = State::NoAccess;
                true
            }
            Msg::LoadFailed(err) => {
                self.state = State::Error(err.to_string());
                true
            }
            Msg::Retry => {
                self.state = State::Loading;
                fetch(ctx);
                true
            }
            Msg::RequestTransition(election_id, next) => {
                let Some(election) = self.elections.iter().find(|e| e.id == election_id)
                else {
                    return false;
                };
                if !election.status.can_transition_to(next) {
                    return false;
                }
                let election_title = election.title.clone();
                self.error = None;
                self.pending = Some(PendingTransition {
                    election_id,
                    election_title,
                    next,
                    in_flight: false,
                });
                if !is_destructive(next) {
                    // Non-destructive transitions skip the modal.
                    return <Self as Component>::update(self, ctx, Msg::ConfirmTransition);
                }
                true
            }
            Msg::CancelTransition => {
                self.pending = None;
                true
            }
            Msg::ConfirmTransition => {
                let Some(pending) = &mut self.pending else {
                    return false;
                };
                if pending.in_flight {
                    return false;
                }
                pending.in_flight = true;

                let id = pending.election_id.clone();
                let next = pending.next;
                ctx.link().send_future(async move {
                    Msg::TransitionFinished(api::update_election_status(&id, next).await)
                });
                true
            }
            Msg::TransitionFinished(Ok(updated)) => {
                self.pending = None;
                if let Some(slot) = self.elections.iter_mut().find(|e| e.id == updated.id) {
                    *slot = updated;
                }
                true
            }
            Msg::TransitionFinished(Err(err)) => {
                self.pending = None;
                self.error = Some(format!("Status change failed: {}", err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER}>
                <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Election Administration"}</h1>
                {match &self.state {
                    State::Loading => html! {
                        <div class="flex justify-center p-8">
                            <div class={combine_classes("animate-pulse", TEXT_MUTED)}>
                                {"Loading elections..."}
                            </div>
                        </div>
                    },
                    State::NoAccess => render_no_access(),
                    State::Error(err) => html! {
                        <div class={alert_style("error")}>
                            <p class="mb-3">{err}</p>
                            <button
                                type="button"
                                onclick={ctx.link().callback(|_| Msg::Retry)}
                                class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                            >
                                {"Try again"}
                            </button>
                        </div>
                    },
                    State::Ready => self.render_table(ctx),
                }}
                {self.render_modal(ctx)}
            </div>
        }
    }
}

fn fetch(ctx: &Context<Admin>) {
    // Admin decisions need current state; this page never reads the cache.
    ctx.link().send_future(async {
        match api::fetch_elections().await {
            Ok(elections) => Msg::Loaded(elections),
            Err(err) => Msg::LoadFailed(err),
        }
    });
}

impl Admin {
    fn render_table(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                {if let Some(error) = &self.error {
                    html! { <div class={alert_style("error")}>{error}</div> }
                } else { html! {} }}
                <div class={SPACE_Y_BASE}>
                    {for self.elections.iter().map(|election| self.render_row(ctx, election))}
                </div>
                {if self.elections.is_empty() {
                    html! {
                        <div class="flex justify-center p-8">
                            <div class={TEXT_MUTED}>{"No elections."}</div>
                        </div>
                    }
                } else { html! {} }}
            </>
        }
    }

    fn render_row(&self, ctx: &Context<Self>, election: &Election) -> Html {
        html! {
            <div class={CARD_SECTION}>
                <div class="flex flex-wrap justify-between items-center gap-3">
                    <div class="min-w-0">
                        <div class="text-white font-medium break-words">{&election.title}</div>
                        <span class={status_chip(election.status.label())}>
                            {election.status.label()}
                        </span>
                    </div>
                    <div class="flex gap-2">
                        {for election.status.allowed_transitions().iter().map(|next| {
                            let next = *next;
                            let id = election.id.clone();
                            let onclick = ctx.link().callback(move |_| {
                                Msg::RequestTransition(id.clone(), next)
                            });
                            let style = if is_destructive(next) { BUTTON_DANGER } else { BUTTON_PRIMARY };
                            html! {
                                <button
                                    type="button"
                                    {onclick}
                                    disabled={self.pending.is_some()}
                                    class={combine_classes(BUTTON_BASE, style)}
                                >
                                    {transition_label(next)}
                                </button>
                            }
                        })}
                    </div>
                </div>
            </div>
        }
    }

    fn render_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(pending) = &self.pending else {
            return html! {};
        };
        if !is_destructive(pending.next) {
            return html! {};
        }

        let items = vec![format!(
            "{} \u{2192} {}",
            pending.election_title,
            pending.next.label()
        )];

        html! {
            <ConfirmModal
                {items}
                ordered={false}
                heading={format!("{} this election?", transition_label(pending.next))}
                confirm_label={transition_label(pending.next).to_string()}
                busy={pending.in_flight}
                on_confirm={ctx.link().callback(|_| Msg::ConfirmTransition)}
                on_cancel={ctx.link().callback(|_| Msg::CancelTransition)}
            />
        }
    }
}
