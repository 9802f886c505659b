//! Authentication service implementation
//!
//! Privileged commands are reserved for the single administrator configured
//! in `bot.admin_id`.

use tracing::{debug, warn};
use crate::config::settings::Settings;
use crate::utils::errors::{AskRelayError, Result};

/// Permission levels for different operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Anyone who can message the bot
    User,
    /// The configured administrator
    Admin,
}

/// Authentication service for admin checks
#[derive(Debug, Clone)]
pub struct AuthService {
    admin_id: i64,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(settings: &Settings) -> Self {
        Self::with_admin(settings.bot.admin_id)
    }

    pub fn with_admin(admin_id: i64) -> Self {
        Self { admin_id }
    }

    pub fn admin_id(&self) -> i64 {
        self.admin_id
    }

    /// Check if user is the bot admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        user_id == self.admin_id
    }

    pub fn permission_for(&self, user_id: i64) -> Permission {
        if self.is_admin(user_id) {
            Permission::Admin
        } else {
            Permission::User
        }
    }

    /// Check that the user holds the given permission
    pub fn require(&self, user_id: i64, permission: Permission) -> Result<()> {
        match (permission, self.permission_for(user_id)) {
            (Permission::User, _) | (Permission::Admin, Permission::Admin) => {
                debug!(user_id = user_id, permission = ?permission, "Permission granted");
                Ok(())
            }
            (Permission::Admin, Permission::User) => {
                warn!(user_id = user_id, "Non-admin user attempted a privileged command");
                Err(AskRelayError::PermissionDenied { user_id })
            }
        }
    }
}
