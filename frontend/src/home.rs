use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, styles::*};

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Member Portal"}</h1>

            <div class="space-y-8 max-w-3xl mx-auto">
                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <p class="text-gray-300 mb-4">
                        {"This is the internal governance portal for party members. Here you can
                        take part in internal elections, review nomination candidates, and follow
                        results once voting closes."}
                    </p>
                    <p class="text-gray-300">
                        {"Elections use single-choice, multi-choice, or ranked-choice ballots.
                        Ranked-choice elections are counted with the Single Transferable Vote;
                        the tally runs on the election service and results appear here as soon
                        as an election is closed."}
                    </p>
                </div>

                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h2 class="text-xl font-semibold mb-4 text-white">{"How voting works"}</h2>
                    <ul class="list-disc pl-6 space-y-3 text-gray-300">
                        <li>{"Pick your answer, or rank the candidates in your order of preference"}</li>
                        <li>{"Review your selection in the confirmation step before it is submitted"}</li>
                        <li>{"Each member may vote once per election"}</li>
                        <li>{"Your ballot is anonymous; only aggregate results are published"}</li>
                    </ul>
                </div>

                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h2 class="text-xl font-semibold mb-4 text-white">{"Get started"}</h2>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Elections}
                            classes="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg text-lg font-semibold text-center transition-colors">
                            {"View Elections"}
                        </Link<Route>>
                        <Link<Route> to={Route::Candidates}
                            classes="bg-green-600 hover:bg-green-700 text-white px-8 py-3 rounded-lg text-lg font-semibold text-center transition-colors">
                            {"Nomination Candidates"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
