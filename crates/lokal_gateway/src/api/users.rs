// --- File: crates/lokal_gateway/src/api/users.rs ---
use crate::gateway::{Gateway, RequestOptions};
use crate::models::{MessageResponse, UpdateProfileRequest, UserProfile};
use crate::outcome::ApiResult;

impl Gateway {
    /// The signed-in user, with wallet and agent summaries when present.
    pub async fn me(&self) -> ApiResult<UserProfile> {
        self.request("/users/me", RequestOptions::get()).await
    }

    pub async fn update_me(&self, update: &UpdateProfileRequest) -> ApiResult<MessageResponse> {
        self.request("/users/me", RequestOptions::put(update)).await
    }
}
