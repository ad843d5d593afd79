//! Error types for misusing or constructing a [`Resource`](crate::Resource).
//!
//! Domain errors never show up here: they live inside
//! [`Resource::Failure`](crate::Resource::Failure) as ordinary data. The two
//! types in this module cover the control-flow cases:
//!
//! - [`ExtractError`]: a value was requested from a resource that has none.
//! - [`Panicked`]: a thunk passed to
//!   [`Resource::catch_unwind`](crate::Resource::catch_unwind) panicked and
//!   the panic was captured into a `Failure`.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

use crate::resource::Tag;

/// Error returned by [`Resource::extract`](crate::Resource::extract) when the
/// resource is not a `Success`.
///
/// Carries the tag the resource actually had.
///
/// # Example
///
/// ```rust
/// use tidewater::{Resource, Tag};
///
/// let r: Resource<i32, String> = Resource::loading();
/// let err = r.extract().unwrap_err();
///
/// assert_eq!(err.tag(), Tag::Loading);
/// assert_eq!(
///     err.to_string(),
///     "can't extract value from resource with \"loading\" tag"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractError {
    tag: Tag,
}

impl ExtractError {
    /// Create an error for a resource with the given tag.
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    /// The tag of the resource the extraction was attempted on.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't extract value from resource with \"{}\" tag",
            self.tag
        )
    }
}

impl StdError for ExtractError {}

/// A panic captured while constructing a resource.
///
/// Produced by [`Resource::catch_unwind`](crate::Resource::catch_unwind) and
/// [`Resource::from_future_catch_unwind`](crate::Resource::from_future_catch_unwind).
///
/// # Example
///
/// ```rust
/// use tidewater::{Panicked, Resource};
///
/// let r: Resource<i32, Panicked> = Resource::catch_unwind(|| panic!("Boom"));
/// assert_eq!(r.into_failure().map(|p| p.message().to_string()), Some("Boom".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create a `Panicked` with an explicit message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build from the payload handed back by `std::panic::catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else is
    /// reported as `Box<dyn Any>`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(s) => *s,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(s) => (*s).to_string(),
                Err(_) => "Box<dyn Any>".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation panicked: {}", self.message)
    }
}

impl StdError for Panicked {}
