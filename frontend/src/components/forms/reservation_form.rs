use shared::ReservationForm as FormValues;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReservationFormProps {
    pub form: FormValues,
    pub submitting: bool,
    pub form_error: Option<String>,

    pub on_name_change: Callback<String>,
    pub on_phone_input: Callback<String>,
    pub on_requests_change: Callback<String>,
    pub on_marketing_change: Callback<bool>,
    pub on_guests_change: Callback<i32>,
    pub on_submit: Callback<()>,
}

#[function_component(ReservationForm)]
pub fn reservation_form(props: &ReservationFormProps) -> Html {
    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            on_name_change.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    // Reformatted on every keystroke; the controller writes the value back
    let on_phone_input = {
        let on_phone_input = props.on_phone_input.clone();
        Callback::from(move |e: InputEvent| {
            on_phone_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_requests_input = {
        let on_requests_change = props.on_requests_change.clone();
        Callback::from(move |e: InputEvent| {
            on_requests_change.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_marketing_change = {
        let on_marketing_change = props.on_marketing_change.clone();
        Callback::from(move |e: Event| {
            on_marketing_change.emit(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    let guest_step = |delta: i32| {
        let on_guests_change = props.on_guests_change.clone();
        Callback::from(move |_: MouseEvent| on_guests_change.emit(delta))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="reservation-form" id="reservationForm" onsubmit={on_submit}>
            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <div class="form-group">
                <label for="name">{"예약자명"}</label>
                <input
                    type="text"
                    id="name"
                    placeholder="홍길동"
                    required=true
                    value={props.form.name.clone()}
                    oninput={on_name_input}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="phone">{"연락처"}</label>
                <input
                    type="tel"
                    id="phone"
                    placeholder="010-0000-0000"
                    required=true
                    value={props.form.phone.clone()}
                    oninput={on_phone_input}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="date">{"날짜"}</label>
                    <input type="text" id="date" readonly=true required=true value={props.form.date.clone()} />
                </div>
                <div class="form-group">
                    <label for="time">{"시간"}</label>
                    <input type="text" id="time" readonly=true required=true value={props.form.time.clone()} />
                </div>
            </div>

            <div class="form-group">
                <label for="guests">{"인원"}</label>
                <div class="guest-counter">
                    <button type="button" class="counter-button" onclick={guest_step(-1)} disabled={props.submitting}>{"−"}</button>
                    <input type="number" id="guests" readonly=true value={props.form.guests.get().to_string()} />
                    <button type="button" class="counter-button" onclick={guest_step(1)} disabled={props.submitting}>{"+"}</button>
                </div>
            </div>

            <div class="form-group">
                <label for="requests">{"요청사항"}</label>
                <textarea
                    id="requests"
                    rows="3"
                    placeholder="알레르기, 기념일 등 요청사항을 남겨주세요"
                    value={props.form.requests.clone()}
                    oninput={on_requests_input}
                    disabled={props.submitting}
                />
            </div>

            <label class="checkbox-group">
                <input
                    type="checkbox"
                    id="marketing"
                    checked={props.form.marketing}
                    onchange={on_marketing_change}
                    disabled={props.submitting}
                />
                {"이벤트 및 프로모션 소식 받기"}
            </label>

            <button
                type="submit"
                class={classes!("submit-button", props.submitting.then_some("loading"))}
                disabled={props.submitting}
            >
                {if props.submitting { "예약 처리 중..." } else { "예약하기" }}
            </button>
        </form>
    }
}
