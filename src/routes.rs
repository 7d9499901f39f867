// ============================================================================
// ROUTES - URL path -> view
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::{About, BlogItemDetails, Contact, Home, NotFound};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/blogs/:id")]
    BlogDetail { id: String },
    #[not_found]
    #[at("/not-found")]
    NotFound,
}

impl Route {
    /// View for `path`; anything unmatched is `NotFound`
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        // Keyed so each id mounts with fresh Loading state
        Route::BlogDetail { id } => html! { <BlogItemDetails key={id.clone()} id={id.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::Key;

    #[test]
    fn test_static_pages() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
    }

    #[test]
    fn test_blog_detail_carries_id() {
        assert_eq!(Route::resolve("/blogs/1"), Route::BlogDetail { id: "1".into() });
        assert_eq!(Route::resolve("/blogs/abc-42"), Route::BlogDetail { id: "abc-42".into() });
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(Route::resolve("/unknown-path"), Route::NotFound);
        assert_eq!(Route::resolve("/blogs"), Route::NotFound);
        assert_eq!(Route::resolve("/blogs/1/comments"), Route::NotFound);
    }

    #[test]
    fn test_resolution_ignores_history() {
        for previous in ["/blogs/1", "/about", "/"] {
            let _ = Route::resolve(previous);
            assert_eq!(Route::resolve("/unknown-path"), Route::NotFound);
        }
    }

    #[test]
    fn test_blog_detail_view_is_keyed_by_id() {
        let first = switch(Route::resolve("/blogs/1"));
        let second = switch(Route::resolve("/blogs/2"));
        assert_eq!(first.key(), Some(&Key::from("1")));
        assert_eq!(second.key(), Some(&Key::from("2")));
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(Route::BlogDetail { id: "7".into() }.to_path(), "/blogs/7");
    }
}
