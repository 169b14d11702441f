use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Fires `on_tick` every `interval_ms` while the component is mounted
#[hook]
pub fn use_draft_autosave(interval_ms: u32, on_tick: Callback<()>) {
    use_effect_with(interval_ms, move |interval_ms| {
        crate::services::logging::Logger::debug_with_component(
            "draft-autosave-hook",
            &format!("💾 autosave every {}ms", interval_ms),
        );
        let interval = Interval::new(*interval_ms, move || on_tick.emit(()));
        move || drop(interval)
    });
}
