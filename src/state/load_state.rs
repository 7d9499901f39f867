// ============================================================================
// LOAD STATE - Outcome of one loader request
// ============================================================================

/// View state owned by a loader.
///
/// `Empty` covers both an empty collection and a missing post; `Failed`
/// keeps the reason of a request that never produced data. Both render the
/// same way, but tests and logs can tell them apart.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Loaded data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_only_loaded_exposes_data() {
        assert_eq!(LoadState::Loaded(3).data(), Some(&3));
        assert_eq!(LoadState::<i32>::Empty.data(), None);
        assert_eq!(LoadState::<i32>::Failed("boom".into()).data(), None);
        assert!(LoadState::<i32>::Failed("boom".into()).is_failed());
        assert!(!LoadState::<i32>::Empty.is_failed());
    }
}
