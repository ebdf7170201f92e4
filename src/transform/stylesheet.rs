//! Blocking-stylesheet to async-preload conversion.
//!
//! Rewrites every eligible `<link rel="stylesheet">` in the head into a
//! `rel="preload"` link whose `onload` handler swaps it back to a
//! stylesheet, captures the original links for an optional `<noscript>`
//! fallback, and optionally prepends the embedded `rel=preload` polyfill.

use smallvec::SmallVec;

use crate::config::PluginConfig;
use crate::debug;
use crate::embed;
use crate::head::{AlterAssetTags, Chunk, Tag};

/// Script appended to `onload` to swap a preload back to a stylesheet.
pub const ONLOAD_SWAP: &str = "this.onload=null;this.rel='stylesheet';";

/// Converts blocking stylesheet links into preload-then-swap form.
pub struct StylesheetAsync<'a> {
    config: &'a PluginConfig,
}

impl<'a> StylesheetAsync<'a> {
    pub fn new(config: &'a PluginConfig) -> Self {
        Self { config }
    }

    /// Rewrite one hook payload.
    ///
    /// Tags that are not stylesheet links, resolve to no chunk, or are
    /// filtered out by the chunk allow/deny lists pass through untouched.
    /// When nothing converts, the payload is returned structurally
    /// unchanged.
    pub fn transform(&self, data: AlterAssetTags) -> AlterAssetTags {
        let AlterAssetTags { mut head, chunks } = data;
        let mut fallbacks: SmallVec<[String; 4]> = SmallVec::new();

        for tag in &mut head {
            if !tag.is_blocking_stylesheet() {
                continue;
            }
            let Some(chunk) = owning_chunk(&chunks, tag) else {
                continue;
            };
            if !self.config.selects(&chunk.id) {
                continue;
            }

            // Fallback carries the original attributes: capture before
            // any mutation.
            fallbacks.push(tag.fallback_fragment());

            tag.attrs.set("rel", "preload");
            tag.attrs.set("as", "style");
            // Missing onload counts as an empty handler
            let onload = format!("{}{ONLOAD_SWAP}", tag.attrs.get("onload").unwrap_or_default());
            tag.attrs.set("onload", onload);
        }

        if !fallbacks.is_empty() {
            debug!("stylesheet"; "converted {} blocking link(s)", fallbacks.len());

            if self.config.noscript_fallback {
                head.push(Tag::noscript(fallbacks.concat()));
            }
            // Prepended after the noscript append: the polyfill ends up
            // first, the noscript last.
            if self.config.preload_polyfill {
                head.insert(0, Tag::inline_script(embed::CSSRELPRELOAD.source()));
            }
        }

        AlterAssetTags { head, chunks }
    }
}

/// First chunk (chunk-then-file iteration order) whose file list
/// suffix-matches the tag's `href`. Tags without `href` never match.
fn owning_chunk<'c>(chunks: &'c [Chunk], tag: &Tag) -> Option<&'c Chunk> {
    let href = tag.attrs.get("href")?;
    chunks.iter().find(|chunk| chunk.owns_href(href))
}

// ============================================================================
// Tests
// ============================================================================
