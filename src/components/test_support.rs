// Server-side rendering helpers for component tests

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
pub struct RoutedProps {
    pub path: AttrValue,
    pub children: Html,
}

/// Router context backed by an in-memory history positioned at `path`
#[function_component(Routed)]
pub fn routed(props: &RoutedProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(props.path.to_string());

    html! {
        <Router {history}>
            {props.children.clone()}
        </Router>
    }
}

/// Render `view` at `path` to an HTML string
pub async fn render_at<F>(path: &'static str, view: F) -> String
where
    F: FnOnce() -> Html + Send + 'static,
{
    ServerRenderer::<Routed>::with_props(move || RoutedProps {
        path: path.into(),
        children: view(),
    })
    .hydratable(false)
    .render()
    .await
}

pub async fn render<F>(view: F) -> String
where
    F: FnOnce() -> Html + Send + 'static,
{
    render_at("/", view).await
}
