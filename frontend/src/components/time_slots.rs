use shared::TimeSlotPanel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotsProps {
    pub date_label: String,
    pub panel: TimeSlotPanel,
    pub on_select: Callback<String>,
}

#[function_component(TimeSlots)]
pub fn time_slots(props: &TimeSlotsProps) -> Html {
    let content = match &props.panel {
        TimeSlotPanel::Placeholder(message) => html! {
            <p class="time-slots-placeholder">{*message}</p>
        },
        TimeSlotPanel::Slots(slots) => html! {
            {for slots.iter().map(|slot| {
                let onclick = slot.is_selectable.then(|| {
                    let on_select = props.on_select.clone();
                    let time = slot.time.to_string();
                    Callback::from(move |_: MouseEvent| on_select.emit(time.clone()))
                });
                html! {
                    <div class={classes!(slot.class_names())} {onclick}>
                        {slot.time}
                    </div>
                }
            })}
        },
    };

    html! {
        <div class="time-slot-panel">
            <h4 class="selected-date" id="selectedDateDisplay">{&props.date_label}</h4>
            <div class="time-slots" id="timeSlots">
                {content}
            </div>
        </div>
    }
}
