//! Bulk delete configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Maximum number of identifiers the backend accepts in one bulk delete call.
pub const DEFAULT_MAX_USERS_PER_CALL: usize = 1000;

/// Configuration values controlling the bulk delete service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DELETE_USERS")]
pub struct DeleteUsersSettings {
    /// Largest number of identifiers accepted by one bulk delete call.
    #[ortho_config(default = 1000)]
    pub max_users_per_call: usize,
}
