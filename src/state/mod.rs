// ============================================================================
// STATE MODULE - Loader view state + request generations
// ============================================================================

pub mod load_state;
pub mod generation;

pub use load_state::LoadState;
pub use generation::RequestGeneration;
