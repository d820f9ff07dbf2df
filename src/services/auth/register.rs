use tracing::{error, info};

use super::AuthService;
use crate::errors::Result;
use crate::models::users::RegisterRequest;

pub async fn handle_register(
    service: &AuthService,
    register_request: &RegisterRequest,
) -> Result<()> {
    match service
        .api()
        .post_unit("/user", Some(register_request))
        .await
    {
        Ok(()) => {
            info!(
                "Registered {} as {}",
                register_request.email, register_request.profile
            );
            Ok(())
        }
        Err(e) => {
            error!("Registration failed for {}: {}", register_request.email, e);
            Err(e)
        }
    }
}
