// ============================================================================
// USE BLOG LIST HOOK - List Loader
// ============================================================================
// One request on mount. The generation token is invalidated on unmount so
// a late response cannot touch a component that is gone.
// ============================================================================

use yew::prelude::*;
use crate::models::BlogSummary;
use crate::state::{LoadState, RequestGeneration};
use crate::viewmodels::BlogListViewModel;

#[derive(Clone)]
pub struct UseBlogListHandle {
    pub state: UseStateHandle<LoadState<Vec<BlogSummary>>>,
}

#[hook]
pub fn use_blog_list() -> UseBlogListHandle {
    let state = use_state_eq(LoadState::<Vec<BlogSummary>>::default);
    let generation = use_state(RequestGeneration::new);

    {
        let state = state.clone();
        let generation = (*generation).clone();
        use_effect_with((), move |_| {
            let vm = BlogListViewModel::new();
            let pending = generation.guard(async move { vm.load().await }, move |result| state.set(result));
            wasm_bindgen_futures::spawn_local(async move {
                if !pending.await {
                    log::debug!("⏭️ Blog list response discarded (view unmounted)");
                }
            });
            move || generation.invalidate()
        });
    }

    UseBlogListHandle { state }
}
