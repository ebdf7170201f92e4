//! Host emitter hook boundary.
//!
//! HTML emitter pipelines expose one of two hook styles for tag rewriting:
//! newer pipelines take a direct-return tap, older ones take a
//! continuation-style tap completed through a callback. The variant a host
//! advertises via [`HtmlEmitter::alter_asset_tags_hook`] decides which
//! adapter [`crate::AsyncStylesheetPlugin::apply`] registers; the
//! transformer itself is style-agnostic.
//!
//! Hooks run synchronously: a continuation-style tap must invoke its
//! callback before returning.

use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::rc::Rc;

use crate::head::AlterAssetTags;

/// Direct-return tap: transform the payload and hand it back.
pub type TapFn = Box<dyn Fn(AlterAssetTags) -> AlterAssetTags + Send + Sync>;

/// Completion callback for continuation-style taps.
pub type DoneFn = Box<dyn FnOnce(Result<AlterAssetTags>)>;

/// Continuation-style tap: completion is signalled through the callback
/// before the tap returns.
pub type TapAsyncFn = Box<dyn Fn(AlterAssetTags, DoneFn) + Send + Sync>;

/// Hook surface variants an emitter can expose for tag rewriting.
pub enum AlterAssetTagsHook<'h> {
    /// Direct-return registration.
    Tap(&'h mut TapHook),
    /// Continuation-style registration.
    TapAsync(&'h mut TapAsyncHook),
}

/// Host HTML emitter pipeline, seen from the plugin side.
pub trait HtmlEmitter {
    /// The alter-asset-tags hook surface this emitter exposes.
    fn alter_asset_tags_hook(&mut self) -> AlterAssetTagsHook<'_>;
}

// ============================================================================
// TapHook (direct return)
// ============================================================================

/// Registry for direct-return taps.
#[derive(Default)]
pub struct TapHook {
    taps: Vec<(&'static str, TapFn)>,
}

impl TapHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named tap.
    pub fn tap(&mut self, name: &'static str, f: TapFn) {
        self.taps.push((name, f));
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Run every tap in registration order, threading the payload through.
    pub fn call(&self, mut data: AlterAssetTags) -> AlterAssetTags {
        for (_, tap) in &self.taps {
            data = tap(data);
        }
        data
    }
}

// ============================================================================
// TapAsyncHook (continuation)
// ============================================================================

/// Registry for continuation-style taps.
#[derive(Default)]
pub struct TapAsyncHook {
    taps: Vec<(&'static str, TapAsyncFn)>,
}

impl TapAsyncHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named tap.
    pub fn tap(&mut self, name: &'static str, f: TapAsyncFn) {
        self.taps.push((name, f));
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Run every tap in registration order.
    ///
    /// The first tap error aborts the chain; a tap that returns without
    /// invoking its callback surfaces as an error to `done`.
    pub fn call(&self, data: AlterAssetTags, done: DoneFn) {
        let mut data = data;
        for (name, tap) in &self.taps {
            let slot = Rc::new(RefCell::new(None));
            let out = Rc::clone(&slot);
            tap(
                data,
                Box::new(move |result| {
                    *out.borrow_mut() = Some(result);
                }),
            );

            let result = slot.borrow_mut().take();
            match result {
                Some(Ok(next)) => data = next,
                Some(Err(err)) => return done(Err(err)),
                None => {
                    return done(Err(anyhow!("tap `{name}` returned without completing")));
                }
            }
        }
        done(Ok(data))
    }
}

// ============================================================================
// Tests
// ============================================================================
