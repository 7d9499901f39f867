use yew::prelude::*;
use crate::utils::NOT_FOUND_IMG_URL;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-container">
            <img src={NOT_FOUND_IMG_URL} alt="not found" class="not-found-img" />
            <h1 class="not-found-heading">{"Not Found"}</h1>
        </div>
    }
}
