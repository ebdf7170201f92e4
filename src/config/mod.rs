//! Plugin configuration.
//!
//! | Field                | Purpose                                        |
//! |----------------------|------------------------------------------------|
//! | `preload_polyfill`   | Inline the `rel=preload` polyfill script       |
//! | `noscript_fallback`  | Emit a `<noscript>` fallback for the links     |
//! | `chunks`             | Allow-list of chunk ids to process             |
//! | `exclude_chunks`     | Deny-list of chunk ids to skip                 |
//!
//! # Example
//!
//! ```toml
//! preload_polyfill = true
//! noscript_fallback = true
//! chunks = ["main", "vendor"]
//! exclude_chunks = ["admin"]
//! ```

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// PluginConfig
// ============================================================================

const FIELD_CHUNKS: FieldPath = FieldPath::new("chunks");
const FIELD_EXCLUDE_CHUNKS: FieldPath = FieldPath::new("exclude_chunks");

/// Plugin configuration, immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Inline the `rel=preload` polyfill at the front of the head.
    pub preload_polyfill: bool,

    /// Emit a `<noscript>` fallback carrying the original links.
    pub noscript_fallback: bool,

    /// Allow-list of chunk ids to process.
    /// Absent or empty: all chunks are processed.
    pub chunks: Option<FxHashSet<String>>,

    /// Deny-list of chunk ids to skip.
    pub exclude_chunks: Option<FxHashSet<String>>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            preload_polyfill: false,
            noscript_fallback: true,
            chunks: None,
            exclude_chunks: None,
        }
    }
}

impl PluginConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    ///
    /// Unknown fields are warned about, not rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if let Some(allow) = &self.chunks {
            if allow.is_empty() {
                diag.hint(FIELD_CHUNKS, "empty allow-list is ignored; all chunks are processed");
            }
            if allow.iter().any(String::is_empty) {
                diag.error(FIELD_CHUNKS, "chunk ids must be non-empty");
            }
        }

        if let Some(deny) = &self.exclude_chunks {
            if deny.iter().any(String::is_empty) {
                diag.error(FIELD_EXCLUDE_CHUNKS, "chunk ids must be non-empty");
            }

            if let Some(allow) = &self.chunks {
                let mut overlap: Vec<&str> =
                    allow.intersection(deny).map(String::as_str).collect();
                if !overlap.is_empty() {
                    overlap.sort_unstable();
                    diag.warn(
                        FIELD_EXCLUDE_CHUNKS,
                        format!(
                            "ids also listed in `chunks` stay excluded: {}",
                            overlap.join(", ")
                        ),
                    );
                }
            }
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Decide whether a resolved chunk id passes the allow/deny filters.
    ///
    /// An empty allow-list counts as absent.
    pub fn selects(&self, chunk_id: &str) -> bool {
        if let Some(allow) = &self.chunks
            && !allow.is_empty()
            && !allow.contains(chunk_id)
        {
            return false;
        }
        if let Some(deny) = &self.exclude_chunks
            && deny.contains(chunk_id)
        {
            return false;
        }
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
