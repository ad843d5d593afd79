//! Tracing support for resources.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. Provides a logging
//! `tap` that records which state a resource is in as it flows through a
//! pipeline.

use crate::Resource;

/// Extension trait for emitting a tracing event about a resource's state.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait ResourceTracingExt: Sized {
    /// Emit a `DEBUG` event with `label` and the current tag, then return
    /// `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    /// use tidewater::trace::ResourceTracingExt;
    ///
    /// let user = Resource::<i32, String>::loading()
    ///     .trace("user")
    ///     .map(|id| id + 1);
    /// assert_eq!(user, Resource::loading());
    /// ```
    fn trace(self, label: &str) -> Self;
}

impl<D, E> ResourceTracingExt for Resource<D, E> {
    fn trace(self, label: &str) -> Self {
        tracing::debug!(label, tag = %self.tag(), "resource state");
        self
    }
}
