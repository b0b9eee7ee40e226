mod auth;
mod recommend;
mod state;

pub use auth::TokenManager;
pub use recommend::recommend;
pub use state::AppState;
