//! Startup seed configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Default category created at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether the default category is seeded.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Name of the default category.
    #[serde(default = "default_category_name")]
    pub category_name: String,
    /// Description of the default category.
    #[serde(default = "default_category_description")]
    pub category_description: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category_name: default_category_name(),
            category_description: default_category_description(),
        }
    }
}

fn default_category_name() -> String {
    "Geral".to_string()
}

fn default_category_description() -> String {
    "Categoria padrão para produtos sem categoria definida".to_string()
}
