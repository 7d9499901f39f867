pub mod api_client;

pub use api_client::{parse_blog_detail, parse_blog_list, BlogApiClient};
