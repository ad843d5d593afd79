//! Traverse and sequence utilities for collections of resources
//!
//! - **`sequence`**: `Vec<Resource<T, E>>` → `Resource<Vec<T>, E>`
//! - **`traverse`**: map a function over a collection, then sequence the results
//!
//! Both follow the precedence of [`Resource::combine`]: every item must be
//! `Success` for the result to be `Success`; otherwise the first `Failure`
//! wins, and without one the least advanced state wins.
//!
//! # Examples
//!
//! ```
//! use tidewater::{Resource, traverse::traverse};
//!
//! fn lookup(id: u32) -> Resource<String, String> {
//!     match id {
//!         1 => Resource::success("ada".to_string()),
//!         2 => Resource::success("grace".to_string()),
//!         _ => Resource::loading(),
//!     }
//! }
//!
//! let ids = vec![1, 2];
//! assert_eq!(
//!     traverse(ids, lookup),
//!     Resource::success(vec!["ada".to_string(), "grace".to_string()])
//! );
//!
//! let ids = vec![1, 3];
//! assert!(traverse(ids, lookup).is_loading());
//! ```

use crate::Resource;

/// Traverse a collection with a resource-producing function.
///
/// `f` is called on every element, even after a non-`Success` result has
/// been seen, so side effects in `f` happen once per element.
///
/// # Type Parameters
///
/// * `T` - Input element type
/// * `U` - Output element type
/// * `E` - Error type
/// * `F` - Function type that transforms `T` into `Resource<U, E>`
/// * `I` - Input iterator type
///
/// # Examples
///
/// ```
/// use tidewater::{Resource, traverse::traverse};
///
/// fn parse(s: &str) -> Resource<i32, String> {
///     Resource::try_catch(|| s.parse().map_err(|_| format!("invalid number: {}", s)))
/// }
///
/// assert_eq!(traverse(vec!["1", "2", "3"], parse), Resource::success(vec![1, 2, 3]));
/// assert_eq!(
///     traverse(vec!["1", "x", "y"], parse),
///     Resource::failure("invalid number: x".to_string())
/// );
/// ```
pub fn traverse<T, U, E, F, I>(iter: I, f: F) -> Resource<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Resource<U, E>,
{
    let resources: Vec<_> = iter.into_iter().map(f).collect();
    Resource::combine_vec(resources)
}

/// Sequence a collection of resources.
///
/// # Examples
///
/// ```
/// use tidewater::{Resource, traverse::sequence};
///
/// let rs = vec![
///     Resource::<_, String>::success(1),
///     Resource::success(2),
///     Resource::success(3),
/// ];
/// assert_eq!(sequence(rs), Resource::success(vec![1, 2, 3]));
///
/// let rs = vec![
///     Resource::<i32, String>::loading(),
///     Resource::success(2),
///     Resource::initial(),
/// ];
/// assert_eq!(sequence(rs), Resource::initial());
/// ```
pub fn sequence<T, E, I>(iter: I) -> Resource<Vec<T>, E>
where
    I: IntoIterator<Item = Resource<T, E>>,
{
    Resource::combine_vec(iter.into_iter().collect())
}
