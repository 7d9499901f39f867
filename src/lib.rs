// ============================================================================
// WAVE BLOG - Yew/WASM blog reader
// ============================================================================
// - Components: stateless views + two loader components
// - Hooks: List/Detail loaders (spawn request, guard by generation)
// - ViewModels: fetch outcome -> LoadState
// - Services: HTTP only
// - Models: wire records and display shapes
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

pub use components::App;
pub use routes::Route;
