use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::Route;
use crate::utils::LOGO_IMG_URL;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <nav class="header-container">
            <div class="logo-and-title-container">
                <img alt="wave" class="logo" src={LOGO_IMG_URL} />
                <h1 class="title">{"Wave"}</h1>
            </div>
            <ul class="nav-items-list">
                <li class="link-item">
                    <Link<Route> classes="route-link" to={Route::Home}>{"Home"}</Link<Route>>
                </li>
                <li class="link-item">
                    <Link<Route> classes="route-link" to={Route::About}>{"About"}</Link<Route>>
                </li>
                <li class="link-item">
                    <Link<Route> classes="route-link" to={Route::Contact}>{"Contact"}</Link<Route>>
                </li>
            </ul>
        </nav>
    }
}
