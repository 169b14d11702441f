use gloo::events::EventListener;
use shared::reservation::SummaryLine;
use shared::DismissReason;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Summary of the booking; `None` keeps the modal hidden
    pub summary: Option<Vec<SummaryLine>>,
    pub on_dismiss: Callback<DismissReason>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    let is_open = props.summary.is_some();

    // Escape closes the modal while it is shown
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(is_open, move |is_open| {
            let listener = is_open.then(|| {
                EventListener::new(&gloo::utils::document(), "keydown", move |e| {
                    let is_escape = e
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| key.key() == "Escape");
                    if is_escape {
                        on_dismiss.emit(DismissReason::EscapeKey);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_dismiss.emit(DismissReason::Backdrop);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(DismissReason::CloseButton);
        })
    };

    let Some(summary) = props.summary.as_ref() else {
        return html! {};
    };

    html! {
        <div class="modal active" id="successModal" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <div class="modal-icon">{"✓"}</div>
                <h3 class="modal-title">{"예약이 완료되었습니다"}</h3>
                <div class="modal-details" id="modalDetails">
                    {for summary.iter().map(|line| html! {
                        <p><strong>{format!("{}:", line.label)}</strong>{" "}{&line.value}</p>
                    })}
                </div>
                <button type="button" class="modal-button" onclick={on_close_click}>
                    {"확인"}
                </button>
            </div>
        </div>
    }
}
