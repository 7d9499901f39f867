// ============================================================================
// BLOG DETAIL VIEWMODEL
// ============================================================================

use crate::error::FetchError;
use crate::models::{BlogDetail, RawBlogDetail};
use crate::services::BlogApiClient;
use crate::state::LoadState;

pub struct BlogDetailViewModel {
    api_client: BlogApiClient,
}

impl BlogDetailViewModel {
    pub fn new() -> Self {
        Self::with_client(BlogApiClient::new())
    }

    pub fn with_client(api_client: BlogApiClient) -> Self {
        Self { api_client }
    }

    pub async fn load(&self, id: &str) -> LoadState<BlogDetail> {
        log::info!("📄 Loading blog {}...", id);
        resolve_detail(id, self.api_client.get_blog(id).await)
    }
}

impl Default for BlogDetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve_detail(id: &str, result: Result<Option<RawBlogDetail>, FetchError>) -> LoadState<BlogDetail> {
    match result {
        Ok(Some(raw)) => {
            log::info!("✅ Blog {} loaded: {}", id, raw.title);
            LoadState::Loaded(BlogDetail::from(raw))
        }
        Ok(None) => LoadState::Empty,
        Err(e) => {
            log::error!("❌ Error fetching blog {}: {}", id, e);
            LoadState::Failed(e.to_string())
        }
    }
}
