// ============================================================================
// APP - Router + persistent shell
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::Header;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Header and routed body; needs a router in context
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <div class="app-container">
            <div class="responsive-container">
                <Header />
                <div class="app-body">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </div>
    }
}
