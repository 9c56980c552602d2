use yew::prelude::*;
use yew_router::prelude::*;
use gloo_console::debug;
use web_sys::HtmlTextAreaElement;
use shared::cache::{NOMINATION_CANDIDATES_KEY, NOMINATION_ELECTIONS_KEY};
use shared::{join_focus_areas, split_focus_areas, Candidate, Election};

use crate::api::{self, ApiError};
use crate::election_list::render_no_access;
use crate::{cache, Route, styles::*};

/// Candidate fields the committee can edit inline. Each save is one PATCH
/// for that field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Bio,
    Education,
    Experience,
    FocusAreas,
    Personal,
    RequestedSeat,
    Notes,
}

impl EditableField {
    const ALL: [EditableField; 7] = [
        EditableField::Bio,
        EditableField::Education,
        EditableField::Experience,
        EditableField::FocusAreas,
        EditableField::Personal,
        EditableField::RequestedSeat,
        EditableField::Notes,
    ];

    fn api_name(self) -> &'static str {
        match self {
            EditableField::Bio => "bio",
            EditableField::Education => "education",
            EditableField::Experience => "experience",
            EditableField::FocusAreas => "focus_areas",
            EditableField::Personal => "personal",
            EditableField::RequestedSeat => "requested_seat",
            EditableField::Notes => "notes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EditableField::Bio => "Bio",
            EditableField::Education => "Education",
            EditableField::Experience => "Experience",
            EditableField::FocusAreas => "Focus areas",
            EditableField::Personal => "Personal",
            EditableField::RequestedSeat => "Requested seat",
            EditableField::Notes => "Notes",
        }
    }

    fn current_text(self, candidate: &Candidate) -> String {
        match self {
            EditableField::Bio => candidate.bio.clone(),
            EditableField::Education => candidate.education.clone(),
            EditableField::Experience => candidate.experience.clone(),
            EditableField::FocusAreas => join_focus_areas(&candidate.focus_areas),
            EditableField::Personal => candidate.personal.clone(),
            EditableField::RequestedSeat => candidate.requested_seat.clone(),
            EditableField::Notes => candidate.notes.clone(),
        }
    }

    /// Wire value for the PATCH body. Focus areas are edited as
    /// comma-separated text but submitted as an actual array.
    fn payload(self, draft: &str) -> serde_json::Value {
        match self {
            EditableField::FocusAreas => {
                serde_json::Value::from(split_focus_areas(draft))
            }
            _ => serde_json::Value::from(draft.trim()),
        }
    }

    fn apply(self, candidate: &mut Candidate, draft: &str) {
        match self {
            EditableField::Bio => candidate.bio = draft.trim().to_string(),
            EditableField::Education => candidate.education = draft.trim().to_string(),
            EditableField::Experience => candidate.experience = draft.trim().to_string(),
            EditableField::FocusAreas => candidate.focus_areas = split_focus_areas(draft),
            EditableField::Personal => candidate.personal = draft.trim().to_string(),
            EditableField::RequestedSeat => candidate.requested_seat = draft.trim().to_string(),
            EditableField::Notes => candidate.notes = draft.trim().to_string(),
        }
    }
}

#[derive(PartialEq)]
struct Editing {
    candidate_id: String,
    field: EditableField,
    draft: String,
    saving: bool,
    error: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
enum State {
    #[default]
    Loading,
    Ready,
    NoAccess,
    Error(String),
}

pub struct Candidates {
    candidates: Vec<Candidate>,
    elections: Vec<Election>,
    state: State,
    editing: Option<Editing>,
}

pub enum Msg {
    FreshData(Vec<Candidate>),
    ElectionsLoaded(Vec<Election>),
    RefreshFailed(ApiError),
    LoadFailed(ApiError),
    Retry,
    StartEdit(String, EditableField),
    UpdateDraft(String),
    CancelEdit,
    SaveEdit,
    SaveFinished(Result<(), ApiError>),
}

impl Component for Candidates {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            candidates: Vec::new(),
            elections: Vec::new(),
            state: State::Loading,
            editing: None,
        };
        page.start_load(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FreshData(candidates) => {
                cache::store(NOMINATION_CANDIDATES_KEY, &candidates);
                self.candidates = candidates;
                self.state = State::Ready;
                true
            }
            Msg::ElectionsLoaded(elections) => {
                cache::store(NOMINATION_ELECTIONS_KEY, &elections);
                self.elections = elections;
                true
            }
            Msg::RefreshFailed(err) => {
                debug!("candidate refresh failed", err.to_string());
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
            Msg::StartEdit(candidate_id, field) => {
                let Some(candidate) =
                    self.candidates.iter().find(|c| c.id == candidate_id)
                else {
                    return false;
                };
                self.editing = Some(Editing {
                    draft: field.current_text(candidate),
                    candidate_id,
                    field,
                    saving: false,
                    error: None,
                });
                true
            }
            Msg::UpdateDraft(value) => {
                if let Some(editing) = &mut self.editing {
                    editing.draft = value;
                    editing.error = None;
                }
                true
            }
            Msg::CancelEdit => {
                self.editing = None;
                true
            }
            Msg::SaveEdit => {
                let Some(editing) = &mut self.editing else {
                    return false;
                };
                if editing.saving {
                    return false;
                }
                editing.saving = true;

                let id = editing.candidate_id.clone();
                let field = editing.field.api_name();
                let payload = editing.field.payload(&editing.draft);
                ctx.link().send_future(async move {
                    Msg::SaveFinished(api::update_candidate_field(&id, field, payload).await)
                });
                true
            }
            Msg::SaveFinished(Ok(())) => {
                if let Some(editing) = self.editing.take() {
                    if let Some(candidate) = self
                        .candidates
                        .iter_mut()
                        .find(|c| c.id == editing.candidate_id)
                    {
                        editing.field.apply(candidate, &editing.draft);
                    }
                    cache::store(NOMINATION_CANDIDATES_KEY, &self.candidates);
                }
                true
            }
            Msg::SaveFinished(Err(err)) => {
                if let Some(editing) = &mut self.editing {
                    editing.saving = false;
                    editing.error = Some(format!("Could not save: {}", err));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER}>
                <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Nomination Candidates"}</h1>
                {self.render_elections_strip()}
                {match &self.state {
                    State::Loading => html! {
                        <div class="flex justify-center p-8">
                            <div class={combine_classes("animate-pulse", TEXT_MUTED)}>
                                {"Loading candidates..."}
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
                    State::Ready => self.render_candidates(ctx),
                }}
            </div>
        }
    }
}

impl Candidates {
    /// Same cache-then-network pattern as the election list; the nomination
    /// elections strip loads independently and silently.
    fn start_load(&mut self, ctx: &Context<Self>) {
        let cached = cache::load::<Vec<Candidate>>(NOMINATION_CANDIDATES_KEY);
        let mut showing_cache = false;

        if let Some(entry) = cached {
            let stale = cache::is_stale(&entry);
            self.candidates = entry.data;
            self.state = State::Ready;
            showing_cache = true;
            if !stale {
                self.load_elections(ctx);
                return;
            }
        }

        ctx.link().send_future(async move {
            match api::fetch_candidates().await {
                Ok(candidates) => Msg::FreshData(candidates),
                Err(err) if showing_cache => Msg::RefreshFailed(err),
                Err(err) => Msg::LoadFailed(err),
            }
        });
        self.load_elections(ctx);
    }

    fn load_elections(&mut self, ctx: &Context<Self>) {
        if let Some(entry) = cache::load::<Vec<Election>>(NOMINATION_ELECTIONS_KEY) {
            let stale = cache::is_stale(&entry);
            self.elections = entry.data;
            if !stale {
                return;
            }
        }
        ctx.link().send_future(async move {
            match api::fetch_nomination_elections().await {
                Ok(elections) => Msg::ElectionsLoaded(elections),
                Err(err) => Msg::RefreshFailed(err),
            }
        });
    }

    fn render_elections_strip(&self) -> Html {
        if self.elections.is_empty() {
            return html! {};
        }
        html! {
            <div class="mb-6">
                <h2 class={HEADING_SM}>{"Nomination elections"}</h2>
                <div class="flex flex-wrap gap-3">
                    {for self.elections.iter().map(|election| html! {
                        <Link<Route>
                            to={Route::Election { id: election.id.clone() }}
                            classes={classes!(CARD_SECTION, "hover:border-blue-500")}
                        >
                            <span class="text-white mr-2">{&election.title}</span>
                            <span class={status_chip(election.status.label())}>
                                {election.status.label()}
                            </span>
                        </Link<Route>>
                    })}
                </div>
            </div>
        }
    }

    fn render_candidates(&self, ctx: &Context<Self>) -> Html {
        if self.candidates.is_empty() {
            return html! {
                <div class="flex justify-center p-8">
                    <div class={TEXT_MUTED}>{"No candidates registered."}</div>
                </div>
            };
        }
        html! {
            <div class={SPACE_Y_LG}>
                {for self.candidates.iter().map(|candidate| self.render_candidate(ctx, candidate))}
            </div>
        }
    }

    fn render_candidate(&self, ctx: &Context<Self>, candidate: &Candidate) -> Html {
        html! {
            <div class={CARD}>
                <div class="flex justify-between items-start mb-3">
                    <h2 class={combine_classes(HEADING_SM, "break-words")}>{&candidate.name}</h2>
                    {if !candidate.requested_seat.is_empty() {
                        html! {
                            <span class={status_chip("")}>
                                {format!("Seat: {}", candidate.requested_seat)}
                            </span>
                        }
                    } else { html! {} }}
                </div>

                {render_member_info(candidate)}

                <div class={SPACE_Y_BASE}>
                    {for EditableField::ALL.iter().map(|field| {
                        self.render_field(ctx, candidate, *field)
                    })}
                </div>

                {render_links(candidate)}
                {render_edit_history(candidate)}
            </div>
        }
    }

    fn render_field(
        &self,
        ctx: &Context<Self>,
        candidate: &Candidate,
        field: EditableField,
    ) -> Html {
        let is_editing = self
            .editing
            .as_ref()
            .map(|e| e.candidate_id == candidate.id && e.field == field)
            .unwrap_or(false);

        if is_editing {
            return self.render_field_editor(ctx);
        }

        let value = field.current_text(candidate);
        let candidate_id = candidate.id.clone();
        let start_edit = ctx
            .link()
            .callback(move |_| Msg::StartEdit(candidate_id.clone(), field));

        html! {
            <div class="border-b border-gray-700/50 pb-2">
                <div class="flex justify-between items-start gap-2">
                    <div class="min-w-0">
                        <div class="text-xs font-medium text-gray-400">{field.label()}</div>
                        <div class="text-gray-200 break-words whitespace-pre-wrap">
                            {if value.is_empty() { html! { <span class={TEXT_MUTED}>{"—"}</span> } }
                             else { html! { {value} } }}
                        </div>
                    </div>
                    <button
                        type="button"
                        onclick={start_edit}
                        disabled={self.editing.is_some()}
                        class={combine_classes(BUTTON_BASE, BUTTON_WARNING)}
                    >
                        {"Edit"}
                    </button>
                </div>
            </div>
        }
    }

    fn render_field_editor(&self, ctx: &Context<Self>) -> Html {
        let Some(editing) = &self.editing else {
            return html! {};
        };
        let oninput = ctx.link().callback(|e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlTextAreaElement>();
            Msg::UpdateDraft(target.value())
        });

        html! {
            <div class="border border-blue-600 rounded-lg p-3">
                <div class="text-xs font-medium text-gray-400 mb-2">
                    {editing.field.label()}
                    {if editing.field == EditableField::FocusAreas {
                        html! { <span class="ml-1">{"(comma-separated)"}</span> }
                    } else { html! {} }}
                </div>
                <textarea
                    value={editing.draft.clone()}
                    rows="3"
                    class={INPUT_BASE}
                    disabled={editing.saving}
                    {oninput}
                />
                {if let Some(error) = &editing.error {
                    html! { <div class={combine_classes(TEXT_ERROR, "mt-2")}>{error}</div> }
                } else { html! {} }}
                <div class="flex gap-2 mt-2 justify-end">
                    <button
                        type="button"
                        onclick={ctx.link().callback(|_| Msg::CancelEdit)}
                        disabled={editing.saving}
                        class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        onclick={ctx.link().callback(|_| Msg::SaveEdit)}
                        disabled={editing.saving}
                        class={combine_classes(BUTTON_BASE, BUTTON_SUCCESS)}
                    >
                        {if editing.saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        }
    }
}

fn render_member_info(candidate: &Candidate) -> Html {
    let Some(info) = &candidate.member_info else {
        return html! {};
    };
    html! {
        <div class="bg-gray-700/30 p-3 rounded-lg mb-4 text-sm text-gray-300 space-y-1">
            {if !info.email.is_empty() {
                html! { <div>{"Email: "}{&info.email}</div> }
            } else { html! {} }}
            {if !info.phone.is_empty() {
                html! { <div>{"Phone: "}{&info.phone}</div> }
            } else { html! {} }}
            {if let Some(kennitala) = &info.kennitala {
                // Already masked at the API boundary.
                html! { <div>{"Kennitala: "}<span class="font-mono">{kennitala}</span></div> }
            } else { html! {} }}
        </div>
    }
}

fn render_links(candidate: &Candidate) -> Html {
    if candidate.links.is_empty() {
        return html! {};
    }
    html! {
        <div class="mt-4">
            <div class="text-xs font-medium text-gray-400 mb-1">{"Links"}</div>
            <ul class="space-y-1">
                {for candidate.links.iter().map(|link| {
                    let label = if link.title.is_empty() { &link.url } else { &link.title };
                    html! {
                        <li>
                            <a href={link.url.clone()} target="_blank"
                               class="text-blue-400 hover:underline break-all">
                                {label}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn render_edit_history(candidate: &Candidate) -> Html {
    if candidate.edit_history.is_empty() {
        return html! {};
    }
    html! {
        <div class="mt-4">
            <div class="text-xs font-medium text-gray-400 mb-1">{"Edit history"}</div>
            <ul class="space-y-0.5 text-xs text-gray-500">
                {for candidate.edit_history.iter().map(|entry| html! {
                    <li>
                        {format!(
                            "{} changed {} on {}",
                            entry.user_name,
                            entry.field,
                            entry.timestamp.date()
                        )}
                    </li>
                })}
            </ul>
        </div>
    }
}
