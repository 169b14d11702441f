use chrono::NaiveDate;
use shared::calendar::{CalendarMonth, WEEKDAY_HEADERS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_select_date: Callback<NaiveDate>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_data = &props.calendar_data;

    let calendar_days = calendar_data.cells.iter().map(|cell| {
        let onclick = match cell.date {
            Some(date) if cell.is_clickable() => {
                let on_select_date = props.on_select_date.clone();
                Some(Callback::from(move |_: MouseEvent| on_select_date.emit(date)))
            }
            _ => None,
        };

        html! {
            <div class={classes!(cell.class_names())} {onclick}>
                {cell.day}
            </div>
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button type="button" class="nav-button" id="prevMonth" onclick={props.on_prev_month.clone()}>{"‹"}</button>
                <span class="calendar-month" id="calendarMonth">{&calendar_data.title}</span>
                <button type="button" class="nav-button" id="nextMonth" onclick={props.on_next_month.clone()}>{"›"}</button>
            </div>
            <div class="calendar-weekdays">
                {for WEEKDAY_HEADERS.iter().map(|weekday| html! {
                    <div class="weekday">{*weekday}</div>
                })}
            </div>
            <div class="calendar-days" id="calendarDays">
                {for calendar_days}
            </div>
        </div>
    }
}
