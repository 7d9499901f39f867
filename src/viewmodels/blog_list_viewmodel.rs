// ============================================================================
// BLOG LIST VIEWMODEL
// ============================================================================
// Fetches the collection and turns the outcome into a LoadState.
// Errors end here: logged, never propagated to the component.
// ============================================================================

use crate::error::FetchError;
use crate::models::{BlogSummary, RawBlogSummary};
use crate::services::BlogApiClient;
use crate::state::LoadState;

pub struct BlogListViewModel {
    api_client: BlogApiClient,
}

impl BlogListViewModel {
    pub fn new() -> Self {
        Self::with_client(BlogApiClient::new())
    }

    pub fn with_client(api_client: BlogApiClient) -> Self {
        Self { api_client }
    }

    pub async fn load(&self) -> LoadState<Vec<BlogSummary>> {
        log::info!("📰 Loading blog list...");
        resolve_list(self.api_client.list_blogs().await)
    }
}

impl Default for BlogListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve_list(result: Result<Vec<RawBlogSummary>, FetchError>) -> LoadState<Vec<BlogSummary>> {
    match result {
        Ok(raw) if raw.is_empty() => {
            log::info!("📰 Blog list is empty");
            LoadState::Empty
        }
        Ok(raw) => {
            log::info!("✅ Blogs loaded: {}", raw.len());
            LoadState::Loaded(raw.into_iter().map(BlogSummary::from).collect())
        }
        Err(e) => {
            log::error!("❌ Error fetching blogs: {}", e);
            LoadState::Failed(e.to_string())
        }
    }
}
