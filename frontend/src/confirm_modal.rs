use yew::prelude::*;
use crate::styles::*;

/// The mandatory confirmation step between selecting and submitting. The
/// modal stays open until the member acts; there is no timeout or
/// auto-dismiss, and Cancel leaves every piece of form state untouched.
#[derive(Properties, PartialEq)]
pub struct Props {
    /// Display text of each selected item, in the member's chosen order.
    pub items: Vec<String>,
    /// Ranked and multi-choice selections render as a numbered list.
    pub ordered: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or("Confirm your answer".into())]
    pub heading: AttrValue,
    #[prop_or("Confirm".into())]
    pub confirm_label: AttrValue,
    /// Disables Confirm while a submission is in flight.
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &Props) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let summary = if props.items.len() == 1 {
        html! {
            <p class="text-lg text-gray-200">
                {"Your answer: "}
                <span class="font-semibold break-words">{&props.items[0]}</span>
            </p>
        }
    } else if props.ordered {
        html! {
            <ol class="list-decimal list-inside space-y-1 text-gray-200">
                {for props.items.iter().map(|item| html! {
                    <li class="break-words">{item}</li>
                })}
            </ol>
        }
    } else {
        html! {
            <ul class="list-disc list-inside space-y-1 text-gray-200">
                {for props.items.iter().map(|item| html! {
                    <li class="break-words">{item}</li>
                })}
            </ul>
        }
    };

    html! {
        <div class={MODAL_OVERLAY}>
            <div class={MODAL_CARD}>
                <h3 class={HEADING_SM}>{&props.heading}</h3>
                <div class="mb-6">{summary}</div>
                <div class="flex gap-4 justify-end">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class={combine_classes(BUTTON_BASE, BUTTON_NEUTRAL)}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="button"
                        onclick={on_confirm}
                        disabled={props.busy}
                        class={combine_classes(BUTTON_BASE, BUTTON_PRIMARY)}
                    >
                        {&props.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
