use tracing::{debug, error};

use super::AuthService;
use crate::errors::Result;
use crate::models::users::User;

pub async fn handle_profile(service: &AuthService) -> Result<Option<User>> {
    // 没有 token 时不请求
    if service.session().token().is_none() {
        debug!("No auth token stored, skipping profile request");
        return Ok(None);
    }

    match service.api().get::<User>("/auth/me").await {
        Ok(user) => {
            debug!("Profile loaded for user {} ({})", user.id, user.profile);
            Ok(Some(user))
        }
        Err(e) => {
            error!("Failed to fetch user profile: {}", e);
            Err(e)
        }
    }
}
