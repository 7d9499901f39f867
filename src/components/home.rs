use yew::prelude::*;
use crate::components::{BlogList, UserInfo};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-container">
            <UserInfo />
            <BlogList />
        </div>
    }
}
