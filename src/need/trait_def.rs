//! Core `Need` trait
//!
//! A need answers one question, "is this condition met right now?", and
//! knows which failure value to report when it is not.

use std::rc::Rc;
use std::sync::Arc;

/// A boolean authorization condition with an attached failure value.
///
/// Implementors supply [`evaluate`](Need::evaluate) and
/// [`error`](Need::error). [`enforce`](Need::enforce) has a default built on
/// those two; composite needs override it to pick which operand's failure is
/// reported.
///
/// Any context a need depends on (the current session, the object being
/// accessed) is captured when the need is constructed. Evaluation takes no
/// arguments.
///
/// # Example
///
/// ```rust
/// use needs::Need;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum AuthError {
///     NotOwner,
/// }
///
/// struct OwnerNeed<'a> {
///     owner: &'a str,
///     current_user: &'a str,
/// }
///
/// impl Need for OwnerNeed<'_> {
///     type Error = AuthError;
///
///     fn evaluate(&self) -> bool {
///         self.owner == self.current_user
///     }
///
///     fn error(&self) -> AuthError {
///         AuthError::NotOwner
///     }
/// }
///
/// let need = OwnerNeed { owner: "alice", current_user: "bob" };
/// assert!(!need.evaluate());
/// assert_eq!(need.enforce(), Err(AuthError::NotOwner));
/// ```
pub trait Need {
    /// Failure value reported when the need is enforced and not met.
    type Error;

    /// Whether the condition holds right now.
    ///
    /// Must be total and free of side effects. Needs are not cached, so a
    /// need reading a changing source may answer differently between calls.
    fn evaluate(&self) -> bool;

    /// The failure value associated with this need.
    ///
    /// When the need is unmet this must be the failure
    /// [`enforce`](Need::enforce) reports; negation relies on it.
    fn error(&self) -> Self::Error;

    /// Check the need, failing with its failure value when it is not met.
    ///
    /// This is the primitive every guard builds on. Succeeds with no side
    /// effects when the need is met.
    fn enforce(&self) -> Result<(), Self::Error> {
        if self.evaluate() {
            Ok(())
        } else {
            Err(self.error())
        }
    }
}

impl<N: Need + ?Sized> Need for &N {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    #[inline]
    fn error(&self) -> Self::Error {
        (**self).error()
    }

    #[inline]
    fn enforce(&self) -> Result<(), Self::Error> {
        (**self).enforce()
    }
}

impl<N: Need + ?Sized> Need for Box<N> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    #[inline]
    fn error(&self) -> Self::Error {
        (**self).error()
    }

    #[inline]
    fn enforce(&self) -> Result<(), Self::Error> {
        (**self).enforce()
    }
}

impl<N: Need + ?Sized> Need for Arc<N> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    #[inline]
    fn error(&self) -> Self::Error {
        (**self).error()
    }

    #[inline]
    fn enforce(&self) -> Result<(), Self::Error> {
        (**self).enforce()
    }
}

impl<N: Need + ?Sized> Need for Rc<N> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        (**self).evaluate()
    }

    #[inline]
    fn error(&self) -> Self::Error {
        (**self).error()
    }

    #[inline]
    fn enforce(&self) -> Result<(), Self::Error> {
        (**self).enforce()
    }
}
