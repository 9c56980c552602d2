use yew::prelude::*;
use yew_router::prelude::*;
use gloo_console::debug;
use shared::cache::ELECTIONS_LIST_KEY;
use shared::{Election, ElectionStatus, VotingType};

use crate::api::{self, ApiError};
use crate::{cache, Route, styles::*};

#[derive(Clone, PartialEq, Default)]
enum State {
    #[default]
    Loading,
    Ready,
    NoAccess,
    Error(String),
}

pub struct ElectionList {
    elections: Vec<Election>,
    state: State,
}

pub enum Msg {
    FreshData(Vec<Election>),
    /// Background refresh failure while cached data is on screen; logged
    /// only, never interrupts the member.
    RefreshFailed(ApiError),
    LoadFailed(ApiError),
    Retry,
}

impl Component for ElectionList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut list = Self { elections: Vec::new(), state: State::Loading };
        list.start_load(ctx);
        list
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FreshData(elections) => {
                cache::store(ELECTIONS_LIST_KEY, &elections);
                self.elections = elections;
                self.state = State::Ready;
                true
            }
            Msg::RefreshFailed(err) => {
                debug!("election list refresh failed", err.to_string());
                false
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
                self.start_load(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER}>
                <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Elections"}</h1>
                {match &self.state {
                    State::Loading => render_loading(),
                    State::NoAccess => render_no_access(),
                    State::Error(err) => self.render_error(ctx, err),
                    State::Ready => self.render_list(),
                }}
            </div>
        }
    }
}

impl ElectionList {
    /// Cache-then-network: a cached list renders instantly with no await; a
    /// stale or missing cache triggers a fetch. When cached data is already
    /// on screen the fetch is a silent background reconcile.
    fn start_load(&mut self, ctx: &Context<Self>) {
        let cached = cache::load::<Vec<Election>>(ELECTIONS_LIST_KEY);
        let mut showing_cache = false;

        if let Some(entry) = cached {
            let stale = cache::is_stale(&entry);
            self.elections = entry.data;
            self.state = State::Ready;
            showing_cache = true;
            if !stale {
                return;
            }
        }

        ctx.link().send_future(async move {
            match api::fetch_elections().await {
                Ok(elections) => Msg::FreshData(elections),
                Err(err) if showing_cache => Msg::RefreshFailed(err),
                Err(err) => Msg::LoadFailed(err),
            }
        });
    }

    fn render_error(&self, ctx: &Context<Self>, err: &str) -> Html {
        html! {
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
        }
    }

    fn render_list(&self) -> Html {
        if self.elections.is_empty() {
            return html! {
                <div class="flex justify-center p-8">
                    <div class={TEXT_MUTED}>{"No elections right now."}</div>
                </div>
            };
        }

        html! {
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {for self.elections.iter().map(render_card)}
            </div>
        }
    }
}

fn voting_type_text(voting_type: VotingType) -> &'static str {
    match voting_type {
        VotingType::SingleChoice => "Single choice",
        VotingType::MultiChoice => "Multiple choice",
        VotingType::RankedChoice => "Ranked choice",
    }
}

fn render_card(election: &Election) -> Html {
    let status = election.status.normalized();
    let route = if status == ElectionStatus::Closed || status == ElectionStatus::Archived {
        Route::Results { id: election.id.clone() }
    } else {
        Route::Election { id: election.id.clone() }
    };

    html! {
        <Link<Route> to={route} classes={classes!(CARD_HOVER_SCALE, "hover:shadow-lg")}>
            <div class="h-full flex flex-col">
                <div class="flex justify-between items-start mb-2">
                    <h2 class={HEADING_SM} title={election.title.clone()}>
                        {&election.title}
                    </h2>
                    <span class={status_chip(status.label())}>{status.label()}</span>
                </div>
                <p class={combine_classes(TEXT_MUTED, "mb-2 break-words")}>
                    {&election.question}
                </p>
                <div class="mt-auto space-y-1">
                    <p class={TEXT_MUTED}>{voting_type_text(election.voting_type)}</p>
                    <p class={TEXT_MUTED}>{"Answers: "}{election.answers.len()}</p>
                    {if election.has_voted {
                        html! { <p class="text-sm text-green-400 font-medium">{"You have voted"}</p> }
                    } else { html! {} }}
                </div>
            </div>
        </Link<Route>>
    }
}

fn render_loading() -> Html {
    html! {
        <div class="flex justify-center p-8">
            <div class={combine_classes("animate-pulse", TEXT_MUTED)}>{"Loading elections..."}</div>
        </div>
    }
}

pub fn render_no_access() -> Html {
    html! {
        <div class={alert_style("warning")}>
            {"You do not have access to this page. Contact the election committee if you believe this is a mistake."}
        </div>
    }
}
