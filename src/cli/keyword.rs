use crate::{info, llm, management::AppState, success, utils};

pub async fn keyword(state: AppState, message: String) {
    let raw = llm::derive_keyword(&state, &message).await;
    info!("Raw keyword: {}", raw);
    success!("Search keyword: {}", utils::sanitize_keyword(Some(&raw)));
}
