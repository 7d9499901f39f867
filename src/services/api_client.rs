// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No view logic here: requests, status checks and body parsing
// ============================================================================

use gloo_net::http::{Request, Response};
use crate::config::CONFIG;
use crate::error::FetchError;
use crate::models::{RawBlogDetail, RawBlogSummary};

/// Blogs API client (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct BlogApiClient {
    base_url: String,
}

impl Default for BlogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn blogs_url(&self) -> String {
        format!("{}/blogs", self.base_url)
    }

    pub fn blog_url(&self, id: &str) -> String {
        format!("{}/blogs/{}", self.base_url, id)
    }

    /// List all posts
    pub async fn list_blogs(&self) -> Result<Vec<RawBlogSummary>, FetchError> {
        let url = self.blogs_url();
        log::debug!("📤 GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(status_error(&response));
        }

        let body = response.text().await?;
        parse_blog_list(&body)
    }

    /// Fetch one post; `Ok(None)` when the API has no such post
    pub async fn get_blog(&self, id: &str) -> Result<Option<RawBlogDetail>, FetchError> {
        let url = self.blog_url(id);
        log::debug!("📤 GET {}", url);

        let response = Request::get(&url).send().await?;
        if response.status() == 404 {
            log::info!("⚠️ Blog {} does not exist", id);
            return Ok(None);
        }
        if !response.ok() {
            return Err(status_error(&response));
        }

        let body = response.text().await?;
        parse_blog_detail(&body)
    }
}

fn status_error(response: &Response) -> FetchError {
    FetchError::Status {
        status: response.status(),
        text: response.status_text(),
    }
}

/// Parse the body of `GET /blogs`
pub fn parse_blog_list(body: &str) -> Result<Vec<RawBlogSummary>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Parse the body of `GET /blogs/{id}`; an empty or `null` body is no post
pub fn parse_blog_detail(body: &str) -> Result<Option<RawBlogDetail>, FetchError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<RawBlogDetail>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = BlogApiClient::with_base_url("https://apis.ccbp.in/");
        assert_eq!(client.blogs_url(), "https://apis.ccbp.in/blogs");
        assert_eq!(client.blog_url("42"), "https://apis.ccbp.in/blogs/42");
    }

    #[test]
    fn test_parse_list_keeps_order_and_length() {
        let body = r#"[
            {"id": "1", "title": "A", "image_url": "i1", "avatar_url": "a1", "author": "Jo", "topic": "Tech"},
            {"id": "2", "title": "B", "image_url": "i2", "avatar_url": "a2", "author": "Al", "topic": "Food"},
            {"id": "3", "title": "C", "image_url": "i3", "avatar_url": "a3", "author": "Mo", "topic": "Art"}
        ]"#;
        let blogs = parse_blog_list(body).unwrap();
        let ids: Vec<_> = blogs.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_parse_list_rejects_non_json() {
        assert!(matches!(parse_blog_list("<html>oops</html>"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_blog_list(""), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_parse_detail() {
        let body = r#"{"title": "A", "image_url": "i1", "content": "hello", "avatar_url": "a1", "author": "Jo"}"#;
        let detail = parse_blog_detail(body).unwrap().unwrap();
        assert_eq!(detail.title, "A");
        assert_eq!(detail.content, "hello");
    }

    #[test]
    fn test_parse_detail_empty_body_is_missing() {
        assert_eq!(parse_blog_detail("").unwrap(), None);
        assert_eq!(parse_blog_detail("  \n").unwrap(), None);
        assert_eq!(parse_blog_detail("null").unwrap(), None);
    }

    #[test]
    fn test_parse_detail_invalid_body_is_error() {
        assert!(matches!(parse_blog_detail("{}"), Err(FetchError::Parse(_))));
        assert!(matches!(parse_blog_detail("not json"), Err(FetchError::Parse(_))));
    }
}
