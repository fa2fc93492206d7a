//! Application Configuration
//!
//! Configuration for the menu items application layer.

use platform::csrf::CsrfConfig;

/// Menu items application configuration
#[derive(Debug, Clone)]
pub struct MenuItemsConfig {
    /// Verifies the `csrf_token` cookie on update
    pub csrf: CsrfConfig,
    /// Maximum description length in characters
    pub description_max_len: usize,
    /// Upper bound on rows returned by the list endpoint
    pub list_limit: i64,
}

impl Default for MenuItemsConfig {
    fn default() -> Self {
        Self {
            csrf: CsrfConfig::default(),
            description_max_len: 2000,
            list_limit: 500,
        }
    }
}

impl MenuItemsConfig {
    pub fn new(csrf: CsrfConfig) -> Self {
        Self {
            csrf,
            ..Default::default()
        }
    }

    /// Create config for development (random CSRF secret, insecure cookie)
    pub fn development() -> Self {
        Self::new(CsrfConfig::development())
    }
}
