//! # Tidewater
//!
//! > *Data comes in, data goes out*
//!
//! A Rust library for modelling remote data as a value.
//!
//! ## Philosophy
//!
//! Fetched data is not just "there" or "not there". **Tidewater** gives it
//! one type with four states:
//! - **Initial** = nothing requested yet
//! - **Loading** = request in flight
//! - **Success** = arrived with a value
//! - **Failure** = arrived with an error
//!
//! Everything else is pure functions over that type: `map`, `and_then`,
//! `fold`, `ap`, `combine` and friends. No I/O happens in this crate.
//!
//! ## Quick Example
//!
//! ```rust
//! use tidewater::Resource;
//!
//! fn greeting(user: Resource<String, String>, unread: Resource<u32, String>) -> String {
//!     Resource::combine((user, unread)).fold(
//!         || "welcome".to_string(),
//!         || "loading...".to_string(),
//!         |(name, n)| format!("hi {}, {} unread", name, n),
//!         |err| format!("something went wrong: {}", err),
//!     )
//! }
//!
//! assert_eq!(
//!     greeting(Resource::success("ada".into()), Resource::success(3)),
//!     "hi ada, 3 unread"
//! );
//! assert_eq!(
//!     greeting(Resource::success("ada".into()), Resource::loading()),
//!     "loading..."
//! );
//! assert_eq!(
//!     greeting(Resource::loading(), Resource::failure("offline".into())),
//!     "something went wrong: offline"
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Resource`] and [`Tag`]
//! - `tracing`: [`trace::ResourceTracingExt`] and events for captured panics
//! - `proptest`: `Arbitrary` for [`Resource`] and [`Tag`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod resource;
pub mod testing;
pub mod traverse;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use error::{ExtractError, Panicked};
pub use resource::{
    ap, combine, is, is_failure, is_initial, is_loading, is_success, Cata, CombineAll, Is,
    Predicate, Resource, Tag,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ExtractError, Panicked};
    pub use crate::resource::{Cata, CombineAll, Resource, Tag};
    #[cfg(feature = "tracing")]
    pub use crate::trace::ResourceTracingExt;
    pub use crate::traverse::{sequence, traverse};
}
