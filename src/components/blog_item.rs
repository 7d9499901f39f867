use yew::prelude::*;
use yew_router::prelude::*;
use crate::models::BlogSummary;
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogItemProps {
    pub blog: BlogSummary,
}

#[function_component(BlogItem)]
pub fn blog_item(props: &BlogItemProps) -> Html {
    let b = &props.blog;
    let to = Route::BlogDetail { id: b.id.clone() };

    html! {
        <li class="blog-item">
            <Link<Route> classes="blog-item-link" {to}>
                <div class="blog-item-container">
                    <img class="blog-item-image" src={b.image_url.clone()} alt={format!("blog-item-{}", b.id)} />
                    <div class="blog-item-info">
                        <p class="blog-item-topic">{&b.topic}</p>
                        <h1 class="blog-item-title">{&b.title}</h1>
                        <div class="author-info">
                            <img class="avatar" src={b.avatar_url.clone()} alt={format!("author-{}", b.id)} />
                            <p class="author-name">{&b.author}</p>
                        </div>
                    </div>
                </div>
            </Link<Route>>
        </li>
    }
}
