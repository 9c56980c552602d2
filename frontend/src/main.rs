use yew::prelude::*;
use yew_router::prelude::*;

mod admin;
mod api;
mod ballot_form;
mod cache;
mod candidates;
mod config;
mod confirm_modal;
mod election_display;
mod election_list;
mod home;
mod ranked_form;
pub mod render_results;
mod results_display;
mod styles;

use crate::{
    admin::Admin,
    candidates::Candidates,
    election_display::ElectionDisplay,
    election_list::ElectionList,
    home::Home,
    results_display::ResultsDisplay,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/elections")] Elections,
    #[at("/election/:id")] Election { id: String },
    #[at("/results/:id")] Results { id: String },
    #[at("/candidates")] Candidates,
    #[at("/admin")] Admin,
}

fn nav_link_classes(active: bool) -> Classes {
    classes!(
        "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
        "transition-colors", "duration-200", "ease-in-out",
        "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
        if active {
            "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
        } else {
            ""
        }
    )
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-40">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-6">
                <Link<Route> to={Route::Home} classes={nav_link_classes(current_route == Some(Route::Home))}>
                    {"Home"}
                </Link<Route>>
                <Link<Route> to={Route::Elections} classes={nav_link_classes(current_route == Some(Route::Elections))}>
                    {"Elections"}
                </Link<Route>>
                <Link<Route> to={Route::Candidates} classes={nav_link_classes(current_route == Some(Route::Candidates))}>
                    {"Candidates"}
                </Link<Route>>
                <Link<Route> to={Route::Admin} classes={nav_link_classes(current_route == Some(Route::Admin))}>
                    {"Admin"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Elections => html! { <ElectionList /> },
        Route::Election { id } => html! { <ElectionDisplay {id} /> },
        Route::Results { id } => html! { <ResultsDisplay {id} /> },
        Route::Candidates => html! { <Candidates /> },
        Route::Admin => html! { <Admin /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
