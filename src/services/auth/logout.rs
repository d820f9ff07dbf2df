use tracing::info;

use super::AuthService;
use crate::errors::Result;

pub fn handle_logout(service: &AuthService) -> Result<()> {
    service.session().clear()?;
    info!("Auth token removed");
    Ok(())
}
