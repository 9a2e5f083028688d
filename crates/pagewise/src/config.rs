//! List view configuration.
//!
//! [`ListViewConfig`] collects the tunables a list screen would otherwise
//! hard-code: page size, sibling count and the compact threshold. Missing
//! keys take their defaults, so a document may set only what it changes:
//!
//! ```yaml
//! page_size: 12
//! ```

use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, Result};
use crate::planner::{PageWindowPlanner, DEFAULT_COMPACT_THRESHOLD, DEFAULT_SIBLING_COUNT};

/// Tunables for a paginated list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewConfig {
    /// Items per page.
    pub page_size: usize,
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
    /// Page counts at or below this are listed without ellipses.
    pub compact_threshold: usize,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        ListViewConfig {
            page_size: DEFAULT_PAGE_SIZE,
            sibling_count: DEFAULT_SIBLING_COUNT,
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
        }
    }
}

impl ListViewConfig {
    /// Creates a default config with the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        ListViewConfig {
            page_size,
            ..ListViewConfig::default()
        }
    }

    /// Parses a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ListViewConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Parses a config from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ListViewConfig = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    /// The window planner described by this config.
    pub fn planner(&self) -> PageWindowPlanner {
        PageWindowPlanner::new(self.sibling_count).compact_threshold(self.compact_threshold)
    }

    fn validated(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(self)
    }
}
