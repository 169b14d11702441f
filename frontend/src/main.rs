use log::LevelFilter;
use shared::SiteConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::chat_widget::{ChatWidget, ChatWidgetProps};
use components::confirmation_modal::ConfirmationModal;
use components::forms::reservation_form::ReservationForm;
use components::location_card::LocationCard;
use components::time_slots::TimeSlots;
use hooks::use_chat::use_chat;
use hooks::use_reservation::use_reservation;
use services::logging::ConsoleLogger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::default());

    let reservation = use_reservation(&config);
    let chat = use_chat(&config);

    let state = reservation.state;
    let actions = reservation.actions;

    html! {
        <>
            <section class="reservation" id="reservation">
                <h2 class="section-title">{"예약하기"}</h2>
                <div class="reservation-container">
                    <div class="calendar-panel">
                        <Calendar
                            calendar_data={state.calendar}
                            on_prev_month={actions.prev_month}
                            on_next_month={actions.next_month}
                            on_select_date={actions.select_date}
                        />
                        <TimeSlots
                            date_label={state.date_label}
                            panel={state.time_slots}
                            on_select={actions.select_time_slot}
                        />
                    </div>
                    <div class="reservation-form-panel">
                        <ReservationForm
                            form={state.form}
                            submitting={state.submitting}
                            form_error={state.error}
                            on_name_change={actions.set_name}
                            on_phone_input={actions.set_phone}
                            on_requests_change={actions.set_requests}
                            on_marketing_change={actions.set_marketing}
                            on_guests_change={actions.change_guests}
                            on_submit={actions.submit}
                        />
                    </div>
                </div>
            </section>

            <LocationCard address={config.restaurant_address.clone()} />

            <ConfirmationModal summary={state.summary} on_dismiss={actions.dismiss} />

            <ChatWidget ..ChatWidgetProps::from_hook(chat.state, chat.actions) />
        </>
    }
}

fn main() {
    ConsoleLogger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
