//! The four-state `Resource` type for data that has to be fetched.
//!
//! # Why not `Option<Result<T, E>>`?
//!
//! Remote data goes through more states than "missing" and "present". A view
//! that shows a spinner needs to know the request is in flight; a view that
//! shows a "load" button needs to know nothing was requested yet. Encoding
//! that with `is_loading: bool`, `error: Option<E>` and `data: Option<T>`
//! admits combinations that make no sense (loading *and* failed, data *and*
//! error). `Resource` has exactly one state at a time:
//!
//! | Variant | Payload | Meaning |
//! |---|---|---|
//! | `Initial` | none | no fetch attempted yet |
//! | `Loading` | none | fetch in flight |
//! | `Success` | `D` | fetch completed with a value |
//! | `Failure` | `E` | fetch completed with an error |
//!
//! # Success-Biased Convention
//!
//! Like `Result`, `Resource` is biased towards `Success`: `map`, `and_then`
//! and `ap` transform the success value and pass every other state through
//! untouched. `map_err` is the dual for `Failure`.
//!
//! # Examples
//!
//! ```rust
//! use tidewater::Resource;
//!
//! fn render(user: Resource<&str, String>) -> String {
//!     user.fold(
//!         || "press to load".to_string(),
//!         || "loading...".to_string(),
//!         |name| format!("hello, {}", name),
//!         |err| format!("error: {}", err),
//!     )
//! }
//!
//! assert_eq!(render(Resource::initial()), "press to load");
//! assert_eq!(render(Resource::loading()), "loading...");
//! assert_eq!(render(Resource::success("ada")), "hello, ada");
//! assert_eq!(render(Resource::failure("timeout".into())), "error: timeout");
//! ```
//!
//! Several independent resources combine into one:
//!
//! ```rust
//! use tidewater::Resource;
//!
//! let user: Resource<&str, String> = Resource::success("ada");
//! let posts: Resource<usize, String> = Resource::loading();
//!
//! // Still waiting on posts, so the page as a whole is loading.
//! assert_eq!(Resource::combine((user, posts)), Resource::loading());
//! ```

use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::error::{ExtractError, Panicked};

/// The name of a [`Resource`] variant.
///
/// Displays (and serializes) as the lowercase variant name.
///
/// # Example
///
/// ```rust
/// use tidewater::{Resource, Tag};
///
/// let r: Resource<i32, String> = Resource::loading();
/// assert_eq!(r.tag(), Tag::Loading);
/// assert_eq!(r.tag().to_string(), "loading");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Tag {
    /// No fetch attempted yet
    Initial,
    /// Fetch in flight
    Loading,
    /// Fetch completed with a value
    Success,
    /// Fetch completed with an error
    Failure,
}

impl Tag {
    /// All tags, in declaration order.
    pub const ALL: [Tag; 4] = [Tag::Initial, Tag::Loading, Tag::Success, Tag::Failure];

    /// The lowercase name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Initial => "initial",
            Tag::Loading => "loading",
            Tag::Success => "success",
            Tag::Failure => "failure",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lifecycle of an asynchronously obtained value.
///
/// See the [module documentation](self) for an overview.
///
/// # Example
///
/// ```rust
/// use tidewater::Resource;
///
/// let r: Resource<i32, String> = Resource::success(50);
///
/// assert_eq!(r.map(|n| n * 2), Resource::success(100));
/// assert_eq!(
///     Resource::<i32, String>::loading().map(|n| n * 2),
///     Resource::loading()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource<D, E> {
    /// No fetch attempted yet
    Initial,
    /// Fetch in flight
    Loading,
    /// Fetch completed with a value
    Success(D),
    /// Fetch completed with an error
    Failure(E),
}

impl<D, E> Resource<D, E> {
    // ========== Constructors ==========

    /// Create an `Initial` resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, String> = Resource::initial();
    /// assert!(r.is_initial());
    /// ```
    #[inline]
    pub fn initial() -> Self {
        Resource::Initial
    }

    /// Create a `Loading` resource.
    #[inline]
    pub fn loading() -> Self {
        Resource::Loading
    }

    /// Create a `Success` resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, String> = Resource::success(42);
    /// assert!(r.is_success());
    /// ```
    #[inline]
    pub fn success(value: D) -> Self {
        Resource::Success(value)
    }

    /// Create a `Failure` resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::failure("boom");
    /// assert!(r.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Resource::Failure(error)
    }

    /// Lift a value into `Success`. Same as [`Resource::success`].
    #[inline]
    pub fn of(value: D) -> Self {
        Resource::Success(value)
    }

    /// `Some` becomes `Success`, `None` becomes `Initial`.
    ///
    /// A missing value means nothing has been fetched yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// assert_eq!(Resource::<i32, ()>::from_option(Some(1)), Resource::success(1));
    /// assert_eq!(Resource::<i32, ()>::from_option(None), Resource::initial());
    /// ```
    #[inline]
    pub fn from_option(value: Option<D>) -> Self {
        match value {
            Some(v) => Resource::Success(v),
            None => Resource::Initial,
        }
    }

    /// `Ok` becomes `Success`, `Err` becomes `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let ok: Resource<i32, &str> = Resource::from_result(Ok(42));
    /// let err: Resource<i32, &str> = Resource::from_result(Err("boom"));
    ///
    /// assert_eq!(ok, Resource::success(42));
    /// assert_eq!(err, Resource::failure("boom"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<D, E>) -> Self {
        match result {
            Ok(v) => Resource::Success(v),
            Err(e) => Resource::Failure(e),
        }
    }

    /// Run a fallible computation and capture its outcome.
    ///
    /// The error is stored in `Failure` exactly as returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let ok: Resource<i32, String> = Resource::try_catch(|| Ok(42));
    /// assert_eq!(ok, Resource::success(42));
    ///
    /// let parsed: Resource<i32, std::num::ParseIntError> =
    ///     Resource::try_catch(|| "nope".parse::<i32>());
    /// assert!(parsed.is_failure());
    /// ```
    #[inline]
    pub fn try_catch<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<D, E>,
    {
        Self::from_result(f())
    }

    /// Await a fallible future and capture its outcome.
    ///
    /// Always resolves to a `Resource`; an `Err` from the future becomes
    /// `Failure`. There is no retry, timeout or cancellation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// # tokio_test::block_on(async {
    /// let ok = Resource::from_future(async { Ok::<_, String>(42) }).await;
    /// assert_eq!(ok, Resource::success(42));
    ///
    /// let err = Resource::from_future(async { Err::<i32, _>("rejected") }).await;
    /// assert_eq!(err, Resource::failure("rejected"));
    /// # });
    /// ```
    pub async fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<D, E>>,
    {
        Self::from_result(future.await)
    }

    // ========== Predicates ==========

    /// The tag of the current variant.
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Resource::Initial => Tag::Initial,
            Resource::Loading => Tag::Loading,
            Resource::Success(_) => Tag::Success,
            Resource::Failure(_) => Tag::Failure,
        }
    }

    /// Returns `true` if this is `Initial`.
    #[inline]
    pub fn is_initial(&self) -> bool {
        matches!(self, Resource::Initial)
    }

    /// Returns `true` if this is `Loading`.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// Returns `true` if this is `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    /// Returns `true` if this is `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Resource::Failure(_))
    }

    /// Returns `true` if this is `Success` and the value matches `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, String> = Resource::success(42);
    /// assert!(r.is_success_and(|n| *n > 40));
    /// assert!(!r.is_success_and(|n| *n > 50));
    /// assert!(!Resource::<i32, String>::loading().is_success_and(|_| true));
    /// ```
    #[doc(alias = "exists")]
    #[inline]
    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&D) -> bool,
    {
        match self {
            Resource::Success(v) => predicate(v),
            _ => false,
        }
    }

    // ========== Borrowing ==========

    /// Convert to `Resource<&D, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Resource<&D, &E> {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => Resource::Success(v),
            Resource::Failure(e) => Resource::Failure(e),
        }
    }

    /// Convert to `Resource<&mut D, &mut E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let mut r: Resource<i32, String> = Resource::success(1);
    /// if let Resource::Success(v) = r.as_mut() {
    ///     *v += 1;
    /// }
    /// assert_eq!(r, Resource::success(2));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Resource<&mut D, &mut E> {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => Resource::Success(v),
            Resource::Failure(e) => Resource::Failure(e),
        }
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.as_ref().into_success().into_iter()
    }

    // ========== Extractors ==========

    /// The success value as an `Option`; every other state is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// assert_eq!(Resource::<i32, ()>::success(42).into_success(), Some(42));
    /// assert_eq!(Resource::<i32, ()>::initial().into_success(), None);
    /// assert_eq!(Resource::<i32, ()>::failure(()).into_success(), None);
    /// ```
    #[doc(alias = "to_nullable")]
    #[inline]
    pub fn into_success(self) -> Option<D> {
        match self {
            Resource::Success(v) => Some(v),
            _ => None,
        }
    }

    /// The failure error as an `Option`; every other state is `None`.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Resource::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Take the success value, or report which state the resource was in.
    ///
    /// Prefer [`fold`](Resource::fold) or
    /// [`unwrap_or_else`](Resource::unwrap_or_else) when every state has a
    /// meaningful outcome; `extract` is for code that has already
    /// established the resource is loaded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Resource, Tag};
    ///
    /// assert_eq!(Resource::<i32, ()>::success(1).extract(), Ok(1));
    ///
    /// let err = Resource::<i32, ()>::loading().extract().unwrap_err();
    /// assert_eq!(err.tag(), Tag::Loading);
    /// ```
    pub fn extract(self) -> Result<D, ExtractError> {
        match self {
            Resource::Success(v) => Ok(v),
            other => Err(ExtractError::new(other.tag())),
        }
    }

    /// Take the success value, panicking otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the resource is not `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// assert_eq!(Resource::<i32, ()>::success(7).unwrap(), 7);
    /// ```
    ///
    /// ```should_panic
    /// use tidewater::Resource;
    ///
    /// Resource::<i32, ()>::initial().unwrap(); // panics
    /// ```
    #[inline]
    pub fn unwrap(self) -> D {
        match self.extract() {
            Ok(v) => v,
            Err(err) => panic!("called `Resource::unwrap()`: {}", err),
        }
    }

    /// The success value, or `default`.
    #[inline]
    pub fn unwrap_or(self, default: D) -> D {
        match self {
            Resource::Success(v) => v,
            _ => default,
        }
    }

    /// The success value, or the result of `fallback`.
    ///
    /// `fallback` only runs when the resource is not `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// assert_eq!(Resource::<i32, ()>::success(42).unwrap_or_else(|| 0), 42);
    /// assert_eq!(Resource::<i32, ()>::loading().unwrap_or_else(|| 0), 0);
    /// ```
    #[doc(alias = "get_or_else")]
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> D
    where
        F: FnOnce() -> D,
    {
        match self {
            Resource::Success(v) => v,
            _ => fallback(),
        }
    }

    /// The success value, or `D::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> D
    where
        D: Default,
    {
        self.unwrap_or_else(D::default)
    }

    // ========== Transformations ==========

    /// Transform the success value, passing other states through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, String> = Resource::success(21);
    /// assert_eq!(r.map(|x| x * 2), Resource::success(42));
    ///
    /// let r: Resource<i32, String> = Resource::failure("boom".into());
    /// assert_eq!(r.map(|x| x * 2), Resource::failure("boom".into()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, f: F) -> Resource<T, E>
    where
        F: FnOnce(D) -> T,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => Resource::Success(f(v)),
            Resource::Failure(e) => Resource::Failure(e),
        }
    }

    /// Transform the failure error, passing other states through.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let r: Resource<i32, &str> = Resource::failure("panic");
    /// assert_eq!(r.map_err(|e| e.len()), Resource::failure(5));
    /// ```
    #[doc(alias = "map_error")]
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Resource<D, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => Resource::Success(v),
            Resource::Failure(e) => Resource::Failure(f(e)),
        }
    }

    /// Transform the success value with `f` and the failure error with `g`.
    ///
    /// Same as `map(f).map_err(g)`, in either order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let ok: Resource<i32, &str> = Resource::success(50);
    /// let err: Resource<i32, &str> = Resource::failure("panic");
    ///
    /// assert_eq!(ok.bimap(|n| n * 2, |e| e.len()), Resource::success(100));
    /// assert_eq!(err.bimap(|n| n * 2, |e| e.len()), Resource::failure(5));
    /// ```
    #[inline]
    pub fn bimap<T, E2, F, G>(self, f: F, g: G) -> Resource<T, E2>
    where
        F: FnOnce(D) -> T,
        G: FnOnce(E) -> E2,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => Resource::Success(f(v)),
            Resource::Failure(e) => Resource::Failure(g(e)),
        }
    }

    /// Call `f` with the success value for its side effect.
    ///
    /// Always returns `self` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let mut seen = Vec::new();
    /// let r: Resource<i32, String> = Resource::success(42).tap(|n| seen.push(*n));
    ///
    /// assert_eq!(r, Resource::success(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&D),
    {
        if let Resource::Success(v) = &self {
            f(v);
        }
        self
    }

    /// Call `f` with the failure error for its side effect.
    ///
    /// Always returns `self` unchanged.
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Resource::Failure(e) = &self {
            f(e);
        }
        self
    }

    // ========== Monadic Operations ==========

    /// Chain a computation that depends on the success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let show = |n: i32| Resource::<String, &str>::success(format!("number {}", n));
    ///
    /// assert_eq!(
    ///     Resource::success(100).and_then(show),
    ///     Resource::success("number 100".to_string())
    /// );
    /// assert_eq!(
    ///     Resource::<i32, &str>::loading().and_then(show),
    ///     Resource::loading()
    /// );
    /// ```
    #[doc(alias = "chain")]
    #[doc(alias = "flat_map")]
    #[inline]
    pub fn and_then<T, F>(self, f: F) -> Resource<T, E>
    where
        F: FnOnce(D) -> Resource<T, E>,
    {
        match self {
            Resource::Initial => Resource::Initial,
            Resource::Loading => Resource::Loading,
            Resource::Success(v) => f(v),
            Resource::Failure(e) => Resource::Failure(e),
        }
    }

    /// Keep a `Success`; replace any other state with `fallback()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let cached = || Resource::<i32, &str>::success(100);
    ///
    /// assert_eq!(Resource::success(1).alt(cached), Resource::success(1));
    /// assert_eq!(Resource::failure("boom").alt(cached), Resource::success(100));
    /// assert_eq!(Resource::loading().alt(cached), Resource::success(100));
    /// ```
    #[inline]
    pub fn alt<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Resource::Success(v) => Resource::Success(v),
            _ => fallback(),
        }
    }

    /// Apply a wrapped function to a wrapped value.
    ///
    /// `self` holds the function and `r` the argument. When the two
    /// disagree, the result is picked by precedence:
    ///
    /// 1. A `Failure` wins. If both are `Failure`, the function's error is
    ///    kept.
    /// 2. Otherwise the least advanced state wins: `Initial`, then
    ///    `Loading`.
    /// 3. Two `Success`es apply the function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let rf: Resource<fn(i32) -> String, &str> = Resource::success(|n| format!("number {}", n));
    /// assert_eq!(rf.ap(Resource::success(42)), Resource::success("number 42".to_string()));
    ///
    /// let rf: Resource<fn(i32) -> String, &str> = Resource::success(|n| format!("number {}", n));
    /// assert_eq!(rf.ap(Resource::failure("boom")), Resource::failure("boom"));
    ///
    /// let rf: Resource<fn(i32) -> String, &str> = Resource::loading();
    /// assert_eq!(rf.ap(Resource::initial()), Resource::initial());
    /// ```
    pub fn ap<A, T>(self, r: Resource<A, E>) -> Resource<T, E>
    where
        D: FnOnce(A) -> T,
    {
        match (r, self) {
            (Resource::Initial, Resource::Failure(e)) => Resource::Failure(e),
            (Resource::Initial, _) => Resource::Initial,
            (Resource::Loading, Resource::Initial) => Resource::Initial,
            (Resource::Loading, Resource::Failure(e)) => Resource::Failure(e),
            (Resource::Loading, _) => Resource::Loading,
            (Resource::Success(v), Resource::Success(f)) => Resource::Success(f(v)),
            (Resource::Success(_), Resource::Initial) => Resource::Initial,
            (Resource::Success(_), Resource::Loading) => Resource::Loading,
            (Resource::Success(_), Resource::Failure(e)) => Resource::Failure(e),
            (Resource::Failure(_), Resource::Failure(e)) => Resource::Failure(e),
            (Resource::Failure(e), _) => Resource::Failure(e),
        }
    }

    /// Pair two resources, following the [`ap`](Resource::ap) precedence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let a: Resource<i32, &str> = Resource::success(100);
    /// assert_eq!(a.zip(Resource::success("X")), Resource::success((100, "X")));
    ///
    /// let a: Resource<i32, &str> = Resource::loading();
    /// assert_eq!(a.zip(Resource::<&str, _>::initial()), Resource::initial());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Resource<U, E>) -> Resource<(D, U), E> {
        self.map(|a| move |b: U| (a, b)).ap(other)
    }

    /// Combine two resources with `f`, following the [`ap`](Resource::ap)
    /// precedence.
    #[inline]
    pub fn zip_with<U, T, F>(self, other: Resource<U, E>, f: F) -> Resource<T, E>
    where
        F: FnOnce(D, U) -> T,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Combine a tuple of resources into a resource of a tuple.
    ///
    /// Folds left to right through [`ap`](Resource::ap): every input
    /// `Success` gives `Success` of all values in order. Otherwise the first
    /// `Failure` wins, and without one the least advanced state (`Initial`,
    /// then `Loading`) wins. Tuples of 1 to 12 elements are supported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let a: Resource<i32, &str> = Resource::success(100);
    /// let b: Resource<&str, &str> = Resource::success("X");
    /// assert_eq!(Resource::combine((a, b)), Resource::success((100, "X")));
    ///
    /// let a: Resource<i32, &str> = Resource::success(100);
    /// let b: Resource<&str, &str> = Resource::failure("wow");
    /// assert_eq!(Resource::combine((a, b)), Resource::failure("wow"));
    /// ```
    pub fn combine<C>(resources: C) -> Self
    where
        C: CombineAll<E, Output = D>,
    {
        resources.combine_all()
    }

    /// Combine any number of resources of the same type.
    ///
    /// Same precedence as [`combine`](Resource::combine). An empty input is
    /// `Success` of an empty vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let all: Vec<Resource<i32, &str>> = vec![Resource::success(1), Resource::success(2)];
    /// assert_eq!(Resource::combine_vec(all), Resource::success(vec![1, 2]));
    ///
    /// let some: Vec<Resource<i32, &str>> = vec![Resource::success(1), Resource::loading()];
    /// assert_eq!(Resource::combine_vec(some), Resource::loading());
    /// ```
    pub fn combine_vec(resources: Vec<Resource<D, E>>) -> Resource<Vec<D>, E> {
        resources
            .into_iter()
            .fold(Resource::success(Vec::new()), |combined, r| {
                combined
                    .map(|mut values: Vec<D>| {
                        move |value: D| {
                            values.push(value);
                            values
                        }
                    })
                    .ap(r)
            })
    }

    // ========== Folding ==========

    /// Run exactly one handler, chosen by the current state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let show = |r: Resource<i32, &str>| {
    ///     r.fold(
    ///         || "initial".to_string(),
    ///         || "loading".to_string(),
    ///         |n| format!("number {}", n),
    ///         |e| e.to_string(),
    ///     )
    /// };
    ///
    /// assert_eq!(show(Resource::initial()), "initial");
    /// assert_eq!(show(Resource::success(42)), "number 42");
    /// assert_eq!(show(Resource::failure("boom")), "boom");
    /// ```
    #[inline]
    pub fn fold<R, FI, FL, FS, FF>(
        self,
        on_initial: FI,
        on_loading: FL,
        on_success: FS,
        on_failure: FF,
    ) -> R
    where
        FI: FnOnce() -> R,
        FL: FnOnce() -> R,
        FS: FnOnce(D) -> R,
        FF: FnOnce(E) -> R,
    {
        match self {
            Resource::Initial => on_initial(),
            Resource::Loading => on_loading(),
            Resource::Success(v) => on_success(v),
            Resource::Failure(e) => on_failure(e),
        }
    }

    /// Like [`fold`](Resource::fold), but handlers are optional.
    ///
    /// Returns `None` when the handler for the current state was not given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Cata, Resource};
    ///
    /// let r: Resource<i32, &str> = Resource::success(42);
    /// let shown = r.cata(Cata::new().success(|n| format!("number {}", n)));
    /// assert_eq!(shown, Some("number 42".to_string()));
    ///
    /// let r: Resource<i32, &str> = Resource::loading();
    /// let shown = r.cata(Cata::new().success(|n| format!("number {}", n)));
    /// assert_eq!(shown, None);
    /// ```
    #[inline]
    pub fn cata<R>(self, handlers: Cata<'_, D, E, R>) -> Option<R> {
        handlers.run(self)
    }

    // ========== Equality ==========

    /// Compare two resources with caller-supplied payload equality.
    ///
    /// Same tag is required; `Success` values are compared with `value_eq`
    /// and `Failure` errors with `error_eq`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let a: Resource<&str, ()> = Resource::success("Ada");
    /// let b: Resource<&str, ()> = Resource::success("ADA");
    ///
    /// assert!(a.eq_by(&b, |x, y| x.eq_ignore_ascii_case(y), |_, _| true));
    /// assert!(!a.eq_by(&Resource::loading(), |x, y| x == y, |_, _| true));
    /// ```
    pub fn eq_by<FV, FE>(&self, other: &Self, value_eq: FV, error_eq: FE) -> bool
    where
        FV: FnOnce(&D, &D) -> bool,
        FE: FnOnce(&E, &E) -> bool,
    {
        match (self, other) {
            (Resource::Initial, Resource::Initial) => true,
            (Resource::Loading, Resource::Loading) => true,
            (Resource::Success(a), Resource::Success(b)) => value_eq(a, b),
            (Resource::Failure(a), Resource::Failure(b)) => error_eq(a, b),
            _ => false,
        }
    }
}

impl<D> Resource<D, Panicked> {
    /// Run a computation, capturing a panic as `Failure(Panicked)`.
    ///
    /// For code that signals failure by panicking rather than returning a
    /// `Result`. The panic never escapes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Panicked, Resource};
    ///
    /// assert_eq!(Resource::catch_unwind(|| 42), Resource::success(42));
    ///
    /// let r: Resource<i32, Panicked> = Resource::catch_unwind(|| panic!("Boom"));
    /// assert_eq!(r, Resource::failure(Panicked::new("Boom")));
    /// ```
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> D,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(v) => Resource::Success(v),
            Err(payload) => Resource::Failure(captured(payload)),
        }
    }

    /// Await a future, capturing a panic while polling as
    /// `Failure(Panicked)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::{Panicked, Resource};
    ///
    /// # tokio_test::block_on(async {
    /// let r = Resource::from_future_catch_unwind(async { 42 }).await;
    /// assert_eq!(r, Resource::success(42));
    /// # });
    /// ```
    pub async fn from_future_catch_unwind<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = D>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(v) => Resource::Success(v),
            Err(payload) => Resource::Failure(captured(payload)),
        }
    }
}

fn captured(payload: Box<dyn std::any::Any + Send>) -> Panicked {
    let panicked = Panicked::from_payload(payload);
    #[cfg(feature = "tracing")]
    tracing::warn!(panic = %panicked.message(), "captured panic while building resource");
    panicked
}

impl<D, E> Resource<Resource<D, E>, E> {
    /// Flatten a nested resource.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidewater::Resource;
    ///
    /// let nested: Resource<Resource<i32, &str>, &str> = Resource::success(Resource::loading());
    /// assert_eq!(nested.flatten(), Resource::loading());
    /// ```
    #[inline]
    pub fn flatten(self) -> Resource<D, E> {
        self.and_then(|inner| inner)
    }
}

// ========== Free Functions ==========

/// Apply the function in `rf` to the value in `r`.
///
/// Argument order follows the precedence table: `r` is the value, `rf` the
/// function. See [`Resource::ap`].
pub fn ap<A, T, E, F>(r: Resource<A, E>, rf: Resource<F, E>) -> Resource<T, E>
where
    F: FnOnce(A) -> T,
{
    rf.ap(r)
}

/// Combine a tuple of resources. See [`Resource::combine`].
///
/// # Example
///
/// ```rust
/// use tidewater::{combine, Resource};
///
/// let r = combine((
///     Resource::<i32, ()>::success(1),
///     Resource::success("two"),
///     Resource::success(3.0),
/// ));
/// assert_eq!(r, Resource::success((1, "two", 3.0)));
/// ```
pub fn combine<C, E>(resources: C) -> Resource<C::Output, E>
where
    C: CombineAll<E>,
{
    resources.combine_all()
}

/// Returns `true` if `resource` is `Initial`.
pub fn is_initial<D, E>(resource: &Resource<D, E>) -> bool {
    resource.is_initial()
}

/// Returns `true` if `resource` is `Loading`.
pub fn is_loading<D, E>(resource: &Resource<D, E>) -> bool {
    resource.is_loading()
}

/// Returns `true` if `resource` is `Success`.
pub fn is_success<D, E>(resource: &Resource<D, E>) -> bool {
    resource.is_success()
}

/// Returns `true` if `resource` is `Failure`.
pub fn is_failure<D, E>(resource: &Resource<D, E>) -> bool {
    resource.is_failure()
}

/// A predicate over a resource, as a plain function pointer.
pub type Predicate<D, E> = fn(&Resource<D, E>) -> bool;

/// The four predicates, addressable by name or by [`Tag`].
///
/// Each field is the corresponding free function ([`is_initial`],
/// [`is_loading`], [`is_success`], [`is_failure`]).
///
/// # Example
///
/// ```rust
/// use tidewater::{is, Resource, Tag};
///
/// let preds = is::<i32, String>();
/// let r = Resource::success(1);
///
/// assert!((preds.success)(&r));
/// assert!(!(preds.get(Tag::Loading))(&r));
/// ```
pub struct Is<D, E> {
    /// [`is_initial`]
    pub initial: Predicate<D, E>,
    /// [`is_loading`]
    pub loading: Predicate<D, E>,
    /// [`is_success`]
    pub success: Predicate<D, E>,
    /// [`is_failure`]
    pub failure: Predicate<D, E>,
}

impl<D, E> Is<D, E> {
    /// Look up the predicate for `tag`.
    pub fn get(&self, tag: Tag) -> Predicate<D, E> {
        match tag {
            Tag::Initial => self.initial,
            Tag::Loading => self.loading,
            Tag::Success => self.success,
            Tag::Failure => self.failure,
        }
    }
}

impl<D, E> Clone for Is<D, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, E> Copy for Is<D, E> {}

impl<D, E> fmt::Debug for Is<D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Is").finish_non_exhaustive()
    }
}

/// The predicate table for `Resource<D, E>`.
pub fn is<D, E>() -> Is<D, E> {
    Is {
        initial: is_initial::<D, E>,
        loading: is_loading::<D, E>,
        success: is_success::<D, E>,
        failure: is_failure::<D, E>,
    }
}

// ========== Cata ==========

type Thunk<'a, R> = Box<dyn FnOnce() -> R + 'a>;
type Handler<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;

/// A set of optional handlers for [`Resource::cata`].
///
/// Handlers that are not given produce `None` for their state.
///
/// # Example
///
/// ```rust
/// use tidewater::{Cata, Resource};
///
/// let handlers = Cata::new()
///     .initial(|| "initial")
///     .loading(|| "loading");
///
/// assert_eq!(handlers.run(Resource::<i32, ()>::loading()), Some("loading"));
/// ```
pub struct Cata<'a, D, E, R> {
    initial: Option<Thunk<'a, R>>,
    loading: Option<Thunk<'a, R>>,
    success: Option<Handler<'a, D, R>>,
    failure: Option<Handler<'a, E, R>>,
}

impl<'a, D, E, R> Cata<'a, D, E, R> {
    /// An empty set of handlers.
    pub fn new() -> Self {
        Self {
            initial: None,
            loading: None,
            success: None,
            failure: None,
        }
    }

    /// Handle `Initial`.
    pub fn initial(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.initial = Some(Box::new(f));
        self
    }

    /// Handle `Loading`.
    pub fn loading(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.loading = Some(Box::new(f));
        self
    }

    /// Handle `Success`.
    pub fn success(mut self, f: impl FnOnce(D) -> R + 'a) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    /// Handle `Failure`.
    pub fn failure(mut self, f: impl FnOnce(E) -> R + 'a) -> Self {
        self.failure = Some(Box::new(f));
        self
    }

    /// Run the handler for the state of `resource`, if one was given.
    pub fn run(self, resource: Resource<D, E>) -> Option<R> {
        match resource {
            Resource::Initial => self.initial.map(|f| f()),
            Resource::Loading => self.loading.map(|f| f()),
            Resource::Success(v) => self.success.map(|f| f(v)),
            Resource::Failure(e) => self.failure.map(|f| f(e)),
        }
    }
}

impl<D, E, R> Default for Cata<'_, D, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, E, R> fmt::Debug for Cata<'_, D, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cata")
            .field("initial", &self.initial.is_some())
            .field("loading", &self.loading.is_some())
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

// ========== Combine ==========

/// Tuples of resources that can be combined into a resource of a tuple.
///
/// Implemented for tuples of 1 to 12 `Resource`s sharing an error type.
pub trait CombineAll<E> {
    /// The tuple of success values.
    type Output;

    /// Combine all resources. See [`Resource::combine`].
    fn combine_all(self) -> Resource<Self::Output, E>;
}

// Builds `((((), a), b), c)` from `a, b, c`, the shape left by repeated `zip`.
macro_rules! nested_tuple_pattern {
    ($acc:tt;) => { $acc };
    ($acc:tt; $head:ident $(, $tail:ident)*) => {
        nested_tuple_pattern!(($acc, $head); $($tail),*)
    };
}

macro_rules! impl_combine_all {
    ($($T:ident),+) => {
        impl<E, $($T),+> CombineAll<E> for ($(Resource<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn combine_all(self) -> Resource<Self::Output, E> {
                let ($($T,)+) = self;
                let combined = Resource::success(());
                $(let combined = combined.zip($T);)+
                combined.map(|nested| {
                    let nested_tuple_pattern!((); $($T),+) = nested;
                    ($($T,)+)
                })
            }
        }
    };
}

impl_combine_all!(T1);
impl_combine_all!(T1, T2);
impl_combine_all!(T1, T2, T3);
impl_combine_all!(T1, T2, T3, T4);
impl_combine_all!(T1, T2, T3, T4, T5);
impl_combine_all!(T1, T2, T3, T4, T5, T6);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

// ========== Trait Implementations ==========

impl<D, E> Default for Resource<D, E> {
    /// Returns `Resource::Initial`.
    fn default() -> Self {
        Resource::Initial
    }
}

impl<D, E> From<Option<D>> for Resource<D, E> {
    fn from(value: Option<D>) -> Self {
        Resource::from_option(value)
    }
}

impl<D, E> From<Result<D, E>> for Resource<D, E> {
    fn from(result: Result<D, E>) -> Self {
        Resource::from_result(result)
    }
}

impl<D, E> From<Resource<D, E>> for Option<D> {
    fn from(resource: Resource<D, E>) -> Self {
        resource.into_success()
    }
}

impl<D, E> IntoIterator for Resource<D, E> {
    type Item = D;
    type IntoIter = std::option::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_success().into_iter()
    }
}

impl<'a, D, E> IntoIterator for &'a Resource<D, E> {
    type Item = &'a D;
    type IntoIter = std::option::IntoIter<&'a D>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_success().into_iter()
    }
}
