use yew::prelude::*;
use crate::utils::CONTACT_IMG_URL;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-container">
            <img src={CONTACT_IMG_URL} alt="contact" class="contact-img" />
            <h1 class="contact-heading">{"Contact"}</h1>
        </div>
    }
}
