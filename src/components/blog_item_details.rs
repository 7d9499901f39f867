use yew::prelude::*;
use crate::components::LoaderSpinner;
use crate::hooks::use_blog_detail;
use crate::models::BlogDetail;
use crate::state::LoadState;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogDetailViewProps {
    pub state: LoadState<BlogDetail>,
}

#[function_component(BlogDetailView)]
pub fn blog_detail_view(props: &BlogDetailViewProps) -> Html {
    match &props.state {
        LoadState::Loading => html! {
            <div class="blog-container">
                <LoaderSpinner />
            </div>
        },
        LoadState::Empty | LoadState::Failed(_) => html! {
            <p class="error-text">{"Blog not found."}</p>
        },
        LoadState::Loaded(blog) => html! {
            <div class="blog-container">
                <h1 class="blog-details-title">{&blog.title}</h1>
                <div class="author-details">
                    <img class="author-pic" src={blog.avatar_url.clone()} alt={blog.author.clone()} />
                    <p class="details-author-name">{&blog.author}</p>
                </div>
                <img class="blog-image" src={blog.image_url.clone()} alt={blog.title.clone()} />
                <p class="blog-content">{&blog.content}</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BlogItemDetailsProps {
    pub id: String,
}

/// Detail Loader: fetches `/blogs/{id}` and refetches when `id` changes
#[function_component(BlogItemDetails)]
pub fn blog_item_details(props: &BlogItemDetailsProps) -> Html {
    let handle = use_blog_detail(props.id.clone());

    html! { <BlogDetailView state={(*handle.state).clone()} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render;

    fn detail() -> BlogDetail {
        BlogDetail {
            title: "A".to_string(),
            image_url: "i1".to_string(),
            content: "hello".to_string(),
            avatar_url: "a1".to_string(),
            author: "Jo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_loaded_renders_fields() {
        let state = LoadState::Loaded(detail());
        let html = render(move || html! { <BlogDetailView {state} /> }).await;

        assert!(html.contains(r#"<h1 class="blog-details-title">A</h1>"#));
        assert!(html.contains(r#"<p class="details-author-name">Jo</p>"#));
        assert!(html.contains(r#"<p class="blog-content">hello</p>"#));
        assert!(html.contains(r#"src="i1""#));
        assert!(html.contains(r#"src="a1""#));
        assert!(!html.contains("Blog not found."));
    }

    #[tokio::test]
    async fn test_loading_shows_spinner() {
        let html = render(|| html! { <BlogDetailView state={LoadState::<BlogDetail>::Loading} /> }).await;
        assert!(html.contains(r#"data-testid="loader""#));
        assert!(!html.contains("Blog not found."));
    }

    #[tokio::test]
    async fn test_missing_and_failed_render_not_found() {
        let missing = render(|| html! { <BlogDetailView state={LoadState::<BlogDetail>::Empty} /> }).await;
        let failed = render(|| html! {
            <BlogDetailView state={LoadState::<BlogDetail>::Failed("HTTP 500: Internal Server Error".into())} />
        }).await;

        for html in [&missing, &failed] {
            assert!(html.contains(r#"<p class="error-text">Blog not found.</p>"#));
            assert!(!html.contains(r#"data-testid="loader""#));
        }
    }
}
