//! Testing utilities for code that produces resources
//!
//! Assertion macros for each state, plus property-based testing support
//! behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use tidewater::{Resource, assert_failure, assert_loading, assert_success};
//!
//! let loaded = Resource::<_, String>::success(42);
//! assert_success!(loaded);
//! assert_success!(Resource::<_, String>::success(42), 42);
//!
//! assert_loading!(Resource::<i32, String>::loading());
//! assert_failure!(Resource::<i32, _>::failure("boom"), "boom");
//! ```

/// Assert that a resource is `Initial`.
///
/// # Example
///
/// ```rust
/// use tidewater::{Resource, assert_initial};
///
/// assert_initial!(Resource::<i32, String>::initial());
/// ```
#[macro_export]
macro_rules! assert_initial {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Initial => {}
            other => {
                panic!("Expected Initial, got {:?}", other);
            }
        }
    };
}

/// Assert that a resource is `Loading`.
#[macro_export]
macro_rules! assert_loading {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Loading => {}
            other => {
                panic!("Expected Loading, got {:?}", other);
            }
        }
    };
}

/// Assert that a resource is `Success`, optionally with a specific value.
///
/// # Example
///
/// ```rust
/// use tidewater::{Resource, assert_success};
///
/// let r = Resource::<_, String>::success(vec![1, 2]);
/// assert_success!(r, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Success(_) => {}
            other => {
                panic!("Expected Success, got {:?}", other);
            }
        }
    };
    ($resource:expr, $expected:expr) => {
        match $resource {
            $crate::Resource::Success(value) => {
                assert_eq!(value, $expected);
            }
            other => {
                panic!("Expected Success({:?}), got {:?}", $expected, other);
            }
        }
    };
}

/// Assert that a resource is `Failure`, optionally with a specific error.
///
/// # Example
///
/// ```rust
/// use tidewater::{Resource, assert_failure};
///
/// let r = Resource::<i32, _>::failure("timeout".to_string());
/// assert_failure!(r, "timeout".to_string());
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($resource:expr) => {
        match $resource {
            $crate::Resource::Failure(_) => {}
            other => {
                panic!("Expected Failure, got {:?}", other);
            }
        }
    };
    ($resource:expr, $expected:expr) => {
        match $resource {
            $crate::Resource::Failure(error) => {
                assert_eq!(error, $expected);
            }
            other => {
                panic!("Expected Failure({:?}), got {:?}", $expected, other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
use crate::{Resource, Tag};

#[cfg(feature = "proptest")]
impl<D, E> Arbitrary for Resource<D, E>
where
    D: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (D::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (d_params, e_params) = args;
        prop_oneof![
            LazyJust::new(|| Resource::Initial),
            LazyJust::new(|| Resource::Loading),
            any_with::<D>(d_params).prop_map(Resource::success),
            any_with::<E>(e_params).prop_map(Resource::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Tag {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Tag::ALL.to_vec()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Resource;

    #[test]
    fn assert_initial_macro() {
        assert_initial!(Resource::<i32, String>::initial());
    }

    #[test]
    fn assert_loading_macro() {
        assert_loading!(Resource::<i32, String>::loading());
    }

    #[test]
    fn assert_success_macro() {
        let r = Resource::<_, String>::success(42);
        assert_success!(r.clone());
        assert_success!(r, 42);
    }

    #[test]
    fn assert_failure_macro() {
        let r = Resource::<i32, _>::failure("boom".to_string());
        assert_failure!(r.clone());
        assert_failure!(r, "boom".to_string());
    }

    #[test]
    #[should_panic(expected = "Expected Initial, got Loading")]
    fn assert_initial_panics_on_loading() {
        assert_initial!(Resource::<i32, String>::loading());
    }

    #[test]
    #[should_panic(expected = "Expected Loading, got Success(1)")]
    fn assert_loading_panics_on_success() {
        assert_loading!(Resource::<i32, String>::success(1));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Resource::<i32, _>::failure("error".to_string()));
    }

    #[test]
    #[should_panic(expected = "Expected Success(1), got Initial")]
    fn assert_success_with_value_panics_on_initial() {
        assert_success!(Resource::<i32, String>::initial(), 1);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Resource::<_, String>::success(42));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{Resource, Tag};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resource_arbitrary_generates_consistent_tags(
                r in any::<Resource<i32, String>>()
            ) {
                let tag = r.tag();
                match r {
                    Resource::Initial => prop_assert_eq!(tag, Tag::Initial),
                    Resource::Loading => prop_assert_eq!(tag, Tag::Loading),
                    Resource::Success(_) => prop_assert_eq!(tag, Tag::Success),
                    Resource::Failure(_) => prop_assert_eq!(tag, Tag::Failure),
                }
            }

            #[test]
            fn tag_arbitrary_is_one_of_all(tag in any::<Tag>()) {
                prop_assert!(Tag::ALL.contains(&tag));
            }
        }
    }
}
