use std::rc::Rc;

use yew::prelude::*;
use futures::try_join;
use shared::{Election, ElectionResults};

use crate::api::{self, ApiError};
use crate::election_list::render_no_access;
use crate::render_results::{render_standard_results, render_stv_results};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[derive(Default)]
enum State {
    #[default]
    Loading,
    Ready { election: Rc<Election>, results: Rc<ElectionResults> },
    NoAccess,
    Error(String),
}

pub struct ResultsDisplay {
    state: State,
}

pub enum Msg {
    Loaded(Election, ElectionResults),
    LoadFailed(ApiError),
    Retry,
}

impl Component for ResultsDisplay {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        fetch(ctx);
        Self { state: State::default() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(election, results) => {
                self.state = State::Ready {
                    election: Rc::new(election),
                    results: Rc::new(results),
                };
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
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            State::Loading => html! {
                <div class={CONTAINER}>
                    <div class="flex items-center justify-center p-8">
                        <div class="animate-spin rounded-full h-12 w-12 border-4 border-blue-500 border-t-transparent"/>
                    </div>
                </div>
            },
            State::Ready { election, results } => {
                // Branch on the response shape: STV payloads carry `winners`.
                match results.as_ref() {
                    ElectionResults::Standard(results) => {
                        render_standard_results(election, results)
                    }
                    ElectionResults::Stv(results) => render_stv_results(election, results),
                }
            }
            State::NoAccess => html! { <div class={CONTAINER}>{render_no_access()}</div> },
            State::Error(err) => html! {
                <div class={CONTAINER}>
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
                </div>
            },
        }
    }
}

fn fetch(ctx: &Context<ResultsDisplay>) {
    let id = ctx.props().id.clone();
    ctx.link().send_future(async move {
        match fetch_data(&id).await {
            Ok((election, results)) => Msg::Loaded(election, results),
            Err(err) => Msg::LoadFailed(err),
        }
    });
}

async fn fetch_data(id: &str) -> Result<(Election, ElectionResults), ApiError> {
    try_join!(api::fetch_election(id), api::fetch_results(id))
}
