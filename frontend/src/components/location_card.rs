use shared::map::map_search_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationCardProps {
    pub address: String,
}

#[function_component(LocationCard)]
pub fn location_card(props: &LocationCardProps) -> Html {
    let open_map = {
        let url = map_search_url(&props.address);
        Callback::from(move |_: MouseEvent| {
            if gloo::utils::window()
                .open_with_url_and_target(&url, "_blank")
                .is_err()
            {
                log::warn!("⚠️ could not open map link");
            }
        })
    };

    html! {
        <section class="info" id="location">
            <h3>{"오시는 길"}</h3>
            <p class="address">{&props.address}</p>
            <button type="button" class="map-button" onclick={open_map}>
                {"지도에서 보기"}
            </button>
        </section>
    }
}
