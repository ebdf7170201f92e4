//! Embedded static resources.
//!
//! Scripts ship inside the crate via `include_str!` and resolve through a
//! stable logical name, never a runtime path lookup.

/// A script resource embedded at build time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedScript {
    name: &'static str,
    source: &'static str,
}

impl EmbeddedScript {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    /// Logical resource name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Verbatim script text.
    pub const fn source(&self) -> &'static str {
        self.source
    }
}

/// `rel=preload` polyfill (fg-loadcss cssrelpreload), inlined into the
/// head when `preload_polyfill` is enabled.
pub const CSSRELPRELOAD: EmbeddedScript =
    EmbeddedScript::new("cssrelpreload", include_str!("js/cssrelpreload.min.js"));
