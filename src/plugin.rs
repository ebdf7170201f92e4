//! Plugin façade: owns the validated configuration and registers the
//! transform with a host emitter.

use anyhow::Result;
use std::sync::Arc;

use crate::config::{ConfigError, PluginConfig};
use crate::embed;
use crate::head::AlterAssetTags;
use crate::hooks::{AlterAssetTagsHook, HtmlEmitter};
use crate::transform::StylesheetAsync;

/// Tap name under which the plugin registers with host hooks.
pub const PLUGIN_NAME: &str = "async-stylesheet";

/// Converts blocking stylesheet links emitted by a host pipeline into
/// async-loading form.
///
/// Stateless across invocations aside from the immutable configuration;
/// one plugin instance serves every document-generation pass of a build.
pub struct AsyncStylesheetPlugin {
    config: Arc<PluginConfig>,
}

impl AsyncStylesheetPlugin {
    /// Build a plugin from configuration, validating it first.
    pub fn new(config: PluginConfig) -> Result<Self> {
        config.validate()?;

        if config.preload_polyfill && embed::CSSRELPRELOAD.source().is_empty() {
            return Err(ConfigError::Validation(
                "preload_polyfill is enabled but the embedded polyfill is empty".into(),
            )
            .into());
        }

        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Rewrite one hook payload. Style-agnostic entry point for hosts that
    /// call the plugin directly.
    pub fn alter_asset_tags(&self, data: AlterAssetTags) -> AlterAssetTags {
        StylesheetAsync::new(&self.config).transform(data)
    }

    /// Register with a host emitter, branching on the hook style it
    /// advertises. Both adapters delegate to the same transform.
    pub fn apply(&self, emitter: &mut dyn HtmlEmitter) {
        match emitter.alter_asset_tags_hook() {
            AlterAssetTagsHook::Tap(hook) => {
                let config = Arc::clone(&self.config);
                hook.tap(
                    PLUGIN_NAME,
                    Box::new(move |data| StylesheetAsync::new(&config).transform(data)),
                );
            }
            AlterAssetTagsHook::TapAsync(hook) => {
                let config = Arc::clone(&self.config);
                hook.tap(
                    PLUGIN_NAME,
                    Box::new(move |data, done| {
                        done(Ok(StylesheetAsync::new(&config).transform(data)));
                    }),
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
