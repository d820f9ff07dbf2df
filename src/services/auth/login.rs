use tracing::{error, info};

use super::AuthService;
use crate::errors::Result;
use crate::models::auth::{LoginRequest, LoginResponse};

pub async fn handle_login(service: &AuthService, login_request: &LoginRequest) -> Result<String> {
    match service
        .api()
        .post::<_, LoginResponse>("/auth/login", login_request)
        .await
    {
        Ok(response) => {
            info!("User {} logged in successfully", login_request.email);
            Ok(response.token)
        }
        Err(e) => {
            error!("Login failed for {}: {}", login_request.email, e);
            Err(e)
        }
    }
}
