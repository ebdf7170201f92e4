//! Async stylesheet loading for HTML build pipelines.
//!
//! An HTML-emitting build step hands this plugin the structured list of
//! `<head>` tags it generated, together with the chunks the build produced.
//! The plugin rewrites every eligible `<link rel="stylesheet">` into a
//! `rel="preload"` link that swaps itself back to a stylesheet once loaded,
//! appends an optional `<noscript>` fallback carrying the original links,
//! and optionally prepends an inline polyfill for browsers without native
//! `rel=preload` support. The host renders the returned tag list; this
//! crate never parses or serializes HTML documents itself.
//!
//! # Example
//!
//! ```
//! use async_stylesheet::{AlterAssetTags, AsyncStylesheetPlugin, Chunk, PluginConfig, Tag};
//!
//! let plugin = AsyncStylesheetPlugin::new(PluginConfig::default())?;
//!
//! let mut link = Tag::new("link");
//! link.attrs.set("rel", "stylesheet");
//! link.attrs.set("href", "/static/main.css");
//!
//! let data = AlterAssetTags {
//!     head: vec![link],
//!     chunks: vec![Chunk::new("main", ["main.css"])],
//! };
//!
//! let out = plugin.alter_asset_tags(data);
//! assert_eq!(out.head[0].attrs.get("rel"), Some("preload"));
//! assert_eq!(out.head.last().unwrap().name, "noscript");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Hosts that run a hook registry instead of calling the plugin directly
//! implement [`HtmlEmitter`] and pass themselves to
//! [`AsyncStylesheetPlugin::apply`]; see the `hooks` module.

pub mod config;
pub mod embed;
pub mod head;
pub mod hooks;
pub mod logger;
pub mod plugin;
pub mod transform;

pub use config::PluginConfig;
pub use head::{AlterAssetTags, Attrs, Chunk, Tag};
pub use hooks::{AlterAssetTagsHook, HtmlEmitter, TapAsyncHook, TapHook};
pub use plugin::{AsyncStylesheetPlugin, PLUGIN_NAME};
pub use transform::StylesheetAsync;
