use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use shared::{Election, ElectionStatus, FormKind};
use time::OffsetDateTime;

use crate::api::{self, ApiError};
use crate::ballot_form::BallotForm;
use crate::election_list::render_no_access;
use crate::ranked_form::RankedForm;
use crate::{Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

/// Per-election page controller. All page state lives here, passed down into
/// the form components; there is no module-level mutable state.
#[derive(Clone)]
enum State {
    Loading,
    Ready { election: Rc<Election> },
    NoAccess,
    NotFound,
    Error(String),
}

pub struct ElectionDisplay {
    state: State,
}

pub enum Msg {
    Loaded(Election),
    LoadFailed(ApiError),
    /// Successful submission: flip `has_voted` and re-render, which replaces
    /// the form with the already-voted notice.
    Voted,
    Retry,
}

impl Component for ElectionDisplay {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        fetch(ctx);
        Self { state: State::Loading }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(election) => {
                self.state = State::Ready { election: Rc::new(election) };
                true
            }
            Msg::LoadFailed(ApiError::NoAccess) => {
                self.state = State::NoAccess;
                true
            }
            Msg::LoadFailed(ApiError::NotFound) => {
                self.state = State::NotFound;
                true
            }
            Msg::LoadFailed(err) => {
                self.state = State::Error(err.to_string());
                true
            }
            Msg::Voted => {
                if let State::Ready { election } = &mut self.state {
                    Rc::make_mut(election).has_voted = true;
                }
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
            State::Loading => render_loading(),
            State::Ready { election } => self.render_election(ctx, election),
            State::NoAccess => html! { <div class={CONTAINER}>{render_no_access()}</div> },
            State::NotFound => render_not_found(),
            State::Error(err) => render_error(ctx, err),
        }
    }
}

fn fetch(ctx: &Context<ElectionDisplay>) {
    let id = ctx.props().id.clone();
    ctx.link().send_future(async move {
        match api::fetch_election(&id).await {
            Ok(election) => Msg::Loaded(election),
            Err(err) => Msg::LoadFailed(err),
        }
    });
}

impl ElectionDisplay {
    fn render_election(&self, ctx: &Context<Self>, election: &Rc<Election>) -> Html {
        html! {
            <div class="container mx-auto px-4 py-6 max-w-2xl">
                <div class="bg-gray-800 rounded-lg shadow-xl p-6 text-white">
                    <div class="flex justify-between items-start mb-4">
                        <h1 class="text-2xl font-bold break-words text-gray-100">{&election.title}</h1>
                        <span class={status_chip(election.status.label())}>{election.status.label()}</span>
                    </div>
                    {if !election.question.is_empty() {
                        html! { <p class="mb-2 text-lg text-gray-200 break-words">{&election.question}</p> }
                    } else { html! {} }}
                    {if !election.description.is_empty() {
                        html! { <p class="mb-6 text-gray-300 break-words whitespace-pre-wrap">{&election.description}</p> }
                    } else { html! {} }}
                    {render_voting_window(election)}
                    <div class="border-t border-gray-600 pt-4 mb-3">
                        {self.render_body(ctx, election)}
                    </div>
                </div>
            </div>
        }
    }

    /// Exactly one of: results link (closed), already-voted notice, a voting
    /// form, or an unavailable notice. Never a form alongside any of the
    /// others.
    fn render_body(&self, ctx: &Context<Self>, election: &Rc<Election>) -> Html {
        let status = election.status.normalized();

        if status == ElectionStatus::Closed || status == ElectionStatus::Archived {
            return render_closed(&election.id);
        }

        if election.has_voted {
            return render_already_voted();
        }

        match election.form_kind() {
            Some(FormKind::Standard { allow_multiple, max_selections }) => {
                let on_voted = ctx.link().callback(|_| Msg::Voted);
                html! {
                    <BallotForm
                        key={election.id.clone()}
                        election={election.clone()}
                        {allow_multiple}
                        {max_selections}
                        {on_voted}
                    />
                }
            }
            Some(FormKind::Ranked { seats_to_fill }) => {
                let on_voted = ctx.link().callback(|_| Msg::Voted);
                html! {
                    <RankedForm
                        key={election.id.clone()}
                        election={election.clone()}
                        {seats_to_fill}
                        {on_voted}
                    />
                }
            }
            None => render_unavailable(status),
        }
    }
}

fn render_voting_window(election: &Election) -> Html {
    let Some(ends_at) = election.voting_ends_at else {
        return html! {};
    };
    let now = OffsetDateTime::now_utc();
    let text = if now < ends_at {
        let remaining = ends_at - now;
        if remaining.whole_hours() > 24 {
            format!("Voting closes in {} days", remaining.whole_days())
        } else if remaining.whole_hours() > 0 {
            format!(
                "Voting closes in {}h {}m",
                remaining.whole_hours(),
                remaining.whole_minutes() % 60
            )
        } else {
            format!("Voting closes in {}m", remaining.whole_minutes().max(1))
        }
    } else {
        "The voting window has ended".to_string()
    };

    html! {
        <div class="bg-gray-700/50 p-4 rounded-lg mb-6">
            <p class="text-lg">{text}</p>
        </div>
    }
}

fn render_closed(id: &str) -> Html {
    html! {
        <div class={combine_classes(NOTICE_CARD, NOTICE_INFO)}>
            <p class="mb-3">{"This election is closed."}</p>
            <Link<Route> to={Route::Results { id: id.to_string() }}
                classes={classes!(button_primary(false))}>
                {"View results"}
            </Link<Route>>
        </div>
    }
}

fn render_already_voted() -> Html {
    html! {
        <div class={combine_classes(NOTICE_CARD, NOTICE_SUCCESS)}>
            <h3 class="text-lg font-semibold mb-1">{"Your vote has been recorded"}</h3>
            <p>{"You have already voted in this election. Results become available once it closes."}</p>
        </div>
    }
}

fn render_unavailable(status: ElectionStatus) -> Html {
    let text = match status {
        ElectionStatus::Draft => "This election has not opened for voting yet.",
        ElectionStatus::Paused => "Voting is temporarily paused. Please check back later.",
        _ => "Voting is not available for this election.",
    };
    html! {
        <div class={combine_classes(NOTICE_CARD, NOTICE_WARNING)}>
            <p>{text}</p>
        </div>
    }
}

fn render_loading() -> Html {
    html! {
        <div class="flex justify-center p-8">
            <div class="animate-pulse text-lg text-gray-400">{"Loading election..."}</div>
        </div>
    }
}

fn render_not_found() -> Html {
    html! {
        <div class="container mx-auto px-4 py-8">
            <div class={alert_style("error")}>{"Election not found"}</div>
        </div>
    }
}

fn render_error(ctx: &Context<ElectionDisplay>, err: &str) -> Html {
    html! {
        <div class="container mx-auto px-4 py-8">
            <div class={alert_style("error")}>
                <p class="mb-3">{"Failed to load election: "}{err}</p>
                <button
                    type="button"
                    onclick={ctx.link().callback(|_| Msg::Retry)}
                    class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                >
                    {"Try again"}
                </button>
            </div>
        </div>
    }
}
