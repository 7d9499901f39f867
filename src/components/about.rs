use yew::prelude::*;
use crate::utils::ABOUT_IMG_URL;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-container">
            <img src={ABOUT_IMG_URL} alt="about" class="about-img" />
            <h1 class="about-heading">{"About"}</h1>
            <p class="about-paragraph">{"I love to create! I am a front-end web developer"}</p>
        </div>
    }
}
