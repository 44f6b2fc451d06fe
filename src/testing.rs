//! Testing utilities for needs
//!
//! Assertion macros for enforcement outcomes, and property-based testing
//! support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use needs::{assert_fails_with, assert_met, assert_unmet, Const, NeedExt};
//!
//! let login = Const::with_error(true, "login");
//! let admin = Const::with_error(false, "admin");
//!
//! assert_met!(login);
//! assert_unmet!(admin);
//! assert_fails_with!(login.and_with(admin), "admin");
//! ```

/// Assert that a need is met.
///
/// Panics with the reported failure if enforcement fails.
///
/// # Example
///
/// ```rust
/// use needs::{assert_met, no_need};
///
/// assert_met!(no_need());
/// ```
#[macro_export]
macro_rules! assert_met {
    ($need:expr) => {
        match $crate::Need::enforce(&$need) {
            Ok(()) => {}
            Err(e) => {
                panic!("Expected need to be met, got failure: {:?}", e);
            }
        }
    };
}

/// Assert that a need is not met.
///
/// # Example
///
/// ```rust
/// use needs::{assert_unmet, no_need, NeedExt};
///
/// assert_unmet!(no_need().negate());
/// ```
#[macro_export]
macro_rules! assert_unmet {
    ($need:expr) => {
        if $crate::Need::enforce(&$need).is_ok() {
            panic!("Expected need to be unmet, but enforcement succeeded");
        }
    };
}

/// Assert that enforcing a need fails with a specific failure value.
///
/// # Example
///
/// ```rust
/// use needs::{assert_fails_with, Const, NeedExt};
///
/// let need = Const::with_error(false, "a").or_with(Const::with_error(false, "b"));
/// assert_fails_with!(need, "b");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($need:expr, $expected:expr) => {
        match $crate::Need::enforce(&$need) {
            Err(e) => {
                assert_eq!(e, $expected);
            }
            Ok(()) => {
                panic!(
                    "Expected failure {:?}, but enforcement succeeded",
                    $expected
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<E> Arbitrary for crate::Const<E>
where
    E: Arbitrary,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        (any::<bool>(), any_with::<E>(args))
            .prop_map(|(met, error)| crate::Const::with_error(met, error))
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Unmet {
    type Parameters = ();
    type Strategy = Just<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        Just(crate::Unmet)
    }
}
