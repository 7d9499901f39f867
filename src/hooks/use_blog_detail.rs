// ============================================================================
// USE BLOG DETAIL HOOK - Detail Loader
// ============================================================================
// Refetches whenever the route id changes. The effect teardown runs before
// the next id's effect, so only the latest id's response is applied.
// The route keys the component on the id, so a new id never renders with
// the previous post's state.
// ============================================================================

use yew::prelude::*;
use crate::models::BlogDetail;
use crate::state::{LoadState, RequestGeneration};
use crate::viewmodels::BlogDetailViewModel;

#[derive(Clone)]
pub struct UseBlogDetailHandle {
    pub state: UseStateHandle<LoadState<BlogDetail>>,
}

#[hook]
pub fn use_blog_detail(id: String) -> UseBlogDetailHandle {
    let state = use_state_eq(LoadState::<BlogDetail>::default);
    let generation = use_state(RequestGeneration::new);

    {
        let state = state.clone();
        let generation = (*generation).clone();
        use_effect_with(id, move |id| {
            // Previous post is replaced wholesale
            state.set(LoadState::Loading);

            let vm = BlogDetailViewModel::new();
            let load_id = id.clone();
            let pending = generation.guard(
                async move { vm.load(&load_id).await },
                move |result| state.set(result),
            );
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if !pending.await {
                    log::debug!("⏭️ Stale response for blog {} discarded", id);
                }
            });
            move || generation.invalidate()
        });
    }

    UseBlogDetailHandle { state }
}
