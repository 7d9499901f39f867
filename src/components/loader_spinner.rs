use yew::prelude::*;
use crate::utils::{SPINNER_COLOR, SPINNER_SIZE_PX};

#[function_component(LoaderSpinner)]
pub fn loader_spinner() -> Html {
    let style = format!(
        "width: {size}px; height: {size}px; border-top-color: {color};",
        size = SPINNER_SIZE_PX,
        color = SPINNER_COLOR,
    );

    html! {
        <div data-testid="loader">
            <div class="tail-spin" role="status" aria-label="loading" {style}></div>
        </div>
    }
}
