use yew::prelude::*;
use crate::components::{BlogItem, LoaderSpinner};
use crate::hooks::use_blog_list;
use crate::models::BlogSummary;
use crate::state::LoadState;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogListViewProps {
    pub state: LoadState<Vec<BlogSummary>>,
}

/// Stateless rendering of the list loader state
#[function_component(BlogListView)]
pub fn blog_list_view(props: &BlogListViewProps) -> Html {
    let blogs: &[BlogSummary] = match &props.state {
        LoadState::Loading => {
            return html! {
                <div class="blogs-list-container">
                    <LoaderSpinner />
                </div>
            };
        }
        LoadState::Loaded(blogs) => blogs,
        // Empty and failed look the same: an empty list
        LoadState::Empty | LoadState::Failed(_) => &[],
    };

    html! {
        <div class="blogs-list-container">
            <ul class="blogs-list">
                { for blogs.iter().map(|blog| html! {
                    <BlogItem key={blog.id.clone()} blog={blog.clone()} />
                }) }
            </ul>
        </div>
    }
}

/// List Loader: fetches `/blogs` on mount
#[function_component(BlogList)]
pub fn blog_list() -> Html {
    let handle = use_blog_list();

    html! { <BlogListView state={(*handle.state).clone()} /> }
}
