use yew::prelude::*;
use crate::utils::PROFILE_IMG_URL;

#[function_component(UserInfo)]
pub fn user_info() -> Html {
    html! {
        <div class="user-info-container">
            <img class="profile-img" src={PROFILE_IMG_URL} alt="profile" />
            <h1 class="user-name">{"Wade Warren"}</h1>
            <p class="user-designation">{"Software developer at UK"}</p>
        </div>
    }
}
