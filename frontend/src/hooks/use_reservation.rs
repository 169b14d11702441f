use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use shared::calendar::CalendarMonth;
use shared::draft;
use shared::reservation::SummaryLine;
use shared::{DismissReason, ReservationController, ReservationForm, ReservationGateway, SiteConfig, TimeSlotPanel};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::hooks::use_draft_autosave::use_draft_autosave;
use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::reservation::SimulatedGateway;
use crate::services::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct ReservationState {
    pub calendar: CalendarMonth,
    pub date_label: String,
    pub time_slots: TimeSlotPanel,
    pub form: ReservationForm,
    pub submitting: bool,
    pub summary: Option<Vec<SummaryLine>>,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct UseReservationActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_date: Callback<NaiveDate>,
    pub select_time_slot: Callback<String>,
    pub set_name: Callback<String>,
    pub set_phone: Callback<String>,
    pub set_requests: Callback<String>,
    pub set_marketing: Callback<bool>,
    pub change_guests: Callback<i32>,
    pub submit: Callback<()>,
    pub dismiss: Callback<DismissReason>,
}

pub struct UseReservationResult {
    pub state: ReservationState,
    pub actions: UseReservationActions,
}

fn scroll_form_into_view() {
    let Some(form) = gloo::utils::document()
        .query_selector(".reservation-form")
        .ok()
        .flatten()
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    form.scroll_into_view_with_scroll_into_view_options(&options);
}

fn mutate(
    controller: &Rc<RefCell<ReservationController>>,
    trigger: &UseForceUpdateHandle,
    f: impl FnOnce(&mut ReservationController),
) {
    f(&mut controller.borrow_mut());
    trigger.force_update();
}

#[hook]
pub fn use_reservation(config: &SiteConfig) -> UseReservationResult {
    let controller = use_mut_ref(|| ReservationController::new(today()));
    let trigger = use_force_update();

    // Restore the saved draft once on mount
    {
        let controller = controller.clone();
        let trigger = trigger.clone();
        let key = config.draft_storage_key.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = draft::load_draft(&BrowserStorage, &key) {
                controller.borrow_mut().apply_draft(&saved);
                Logger::info_with_component("reservation-hook", "📝 draft restored");
                trigger.force_update();
            }
            || ()
        });
    }

    let autosave = {
        let controller = controller.clone();
        let key = config.draft_storage_key.clone();
        Callback::from(move |_| {
            let form = controller.borrow().form().clone();
            if let Err(e) = draft::autosave(&BrowserStorage, &key, &form) {
                Logger::warn_with_component("reservation-hook", &format!("⚠️ draft not saved: {}", e));
            }
        })
    };
    use_draft_autosave(config.autosave_interval_ms, autosave);

    let prev_month = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| {
            mutate(&controller, &trigger, |c| c.previous_month());
        })
    };

    let next_month = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| {
            mutate(&controller, &trigger, |c| c.next_month());
        })
    };

    let select_date = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |date: NaiveDate| {
            mutate(&controller, &trigger, |c| {
                if let Err(e) = c.select_date(date, today()) {
                    Logger::warn_with_component("reservation-hook", &e.to_string());
                }
            });
        })
    };

    let select_time_slot = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |time: String| {
            let selected = controller.borrow_mut().select_time_slot(&time);
            match selected {
                Ok(()) => {
                    trigger.force_update();
                    scroll_form_into_view();
                }
                Err(e) => Logger::warn_with_component("reservation-hook", &e.to_string()),
            }
        })
    };

    let set_name = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |name: String| {
            mutate(&controller, &trigger, |c| c.set_name(name));
        })
    };

    let set_phone = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |raw: String| {
            mutate(&controller, &trigger, |c| {
                c.set_phone(&raw);
            });
        })
    };

    let set_requests = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |requests: String| {
            mutate(&controller, &trigger, |c| c.set_requests(requests));
        })
    };

    let set_marketing = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |marketing: bool| {
            mutate(&controller, &trigger, |c| c.set_marketing(marketing));
        })
    };

    let change_guests = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |delta: i32| {
            mutate(&controller, &trigger, |c| {
                c.change_guests(delta);
            });
        })
    };

    let dismiss = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |reason: DismissReason| {
            mutate(&controller, &trigger, |c| {
                c.dismiss_confirmation(reason);
            });
        })
    };

    let submit = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        let gateway = SimulatedGateway::new(config.submission_delay_ms);
        Callback::from(move |_| {
            let controller = controller.clone();
            let trigger = trigger.clone();
            spawn_local(async move {
                let submission = controller.borrow_mut().begin_submit();
                let Some(submission) = submission else {
                    return;
                };
                trigger.force_update();

                let result = gateway.submit(&submission).await;
                let outcome = controller.borrow_mut().finish_submit(&submission, result);
                if let Err(e) = outcome {
                    Logger::error_with_component("reservation-hook", &format!("❌ {}", e));
                }
                trigger.force_update();
            });
        })
    };

    let state = {
        let controller = controller.borrow();
        let today = today();
        ReservationState {
            calendar: controller.calendar(today),
            date_label: controller.selected_date_label(),
            time_slots: controller.time_slots(),
            form: controller.form().clone(),
            submitting: controller.is_submitting(),
            summary: controller.modal().summary().map(<[SummaryLine]>::to_vec),
            error: controller.last_error().map(str::to_string),
        }
    };

    let actions = UseReservationActions {
        prev_month,
        next_month,
        select_date,
        select_time_slot,
        set_name,
        set_phone,
        set_requests,
        set_marketing,
        change_guests,
        submit,
        dismiss,
    };

    UseReservationResult { state, actions }
}
