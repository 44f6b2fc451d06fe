//! Logical combinators for needs
//!
//! This module provides the [`NeedExt`] extension trait and the composite
//! needs it builds. Composites evaluate like their boolean counterparts; what
//! sets them apart is which operand's failure value they report when
//! enforcement fails:
//!
//! | Composite | Evaluates        | Fails with                                   |
//! |-----------|------------------|----------------------------------------------|
//! | [`Not`]   | `!a`             | `a`'s failure                                |
//! | [`And`]   | `a && b`         | `a`'s failure if unmet, else `b`'s           |
//! | [`Or`]    | `a \|\| b`       | `b`'s failure                                |
//! | [`Xor`]   | `a != b`         | `b`'s if neither is met, `a`'s if both are   |
//!
//! Whenever a composite reports an unmet operand, it reports that operand's
//! *enforced* failure, so nested composites keep their own policy. A
//! composite's [`error`](Need::error) is the failure its enforcement would
//! report right now; once met, it falls back to the operand named in the
//! table.
//!
//! The `Or` and `Xor` policies are asymmetric: swapping the operands changes
//! the reported failure. Existing callers depend on which failure surfaces,
//! so the policy is kept as is.

use std::fmt;

use super::boxed::BoxNeed;
use super::trait_def::Need;
use crate::guard::Guarded;

/// Extension trait for composing and applying needs.
///
/// All methods return concrete types, so composition costs nothing at
/// runtime beyond the evaluations themselves.
///
/// # Example
///
/// ```rust
/// use needs::{Const, Need, NeedExt};
///
/// let login_need = Const::with_error(true, "login required");
/// let admin_need = Const::with_error(false, "admin required");
///
/// let both = login_need.and_with(admin_need);
/// assert!(!both.evaluate());
/// assert_eq!(both.enforce(), Err("admin required"));
///
/// let either = login_need.or_with(admin_need);
/// assert!(either.evaluate());
/// assert_eq!(either.enforce(), Ok(()));
/// ```
pub trait NeedExt: Need + Sized {
    /// Invert the need.
    ///
    /// The negation keeps the parent's failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, Need, NeedExt};
    ///
    /// let logged_in = Const::with_error(true, "anonymous only");
    /// let anonymous = logged_in.negate();
    /// assert!(!anonymous.evaluate());
    /// assert_eq!(anonymous.enforce(), Err("anonymous only"));
    /// ```
    fn negate(self) -> Not<Self> {
        Not(self)
    }

    /// Combine with AND logic.
    ///
    /// Enforcement checks `self` first and reports its failure; `other` is
    /// only consulted once `self` is met.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, Need, NeedExt};
    ///
    /// let a = Const::with_error(false, "a");
    /// let b = Const::with_error(false, "b");
    /// assert_eq!(a.and_with(b).enforce(), Err("a"));
    /// assert_eq!(b.and_with(a).enforce(), Err("b"));
    /// ```
    fn and_with<O>(self, other: O) -> And<Self, O>
    where
        O: Need<Error = Self::Error>,
    {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// An `Or` is only unmet when both operands are, and it then reports the
    /// second operand's failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, Need, NeedExt};
    ///
    /// let a = Const::with_error(false, "a");
    /// let b = Const::with_error(false, "b");
    /// assert_eq!(a.or_with(b).enforce(), Err("b"));
    /// ```
    fn or_with<O>(self, other: O) -> Or<Self, O>
    where
        O: Need<Error = Self::Error>,
    {
        Or(self, other)
    }

    /// Combine with XOR logic.
    ///
    /// Met when exactly one operand is met. When neither is met the second
    /// operand's failure is reported; when both are met, the first's.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, Need, NeedExt};
    ///
    /// let met_a = Const::with_error(true, "a");
    /// let met_b = Const::with_error(true, "b");
    /// let unmet_b = Const::with_error(false, "b");
    ///
    /// assert_eq!(met_a.xor_with(met_b).enforce(), Err("a"));
    /// assert_eq!(met_a.xor_with(unmet_b).enforce(), Ok(()));
    /// ```
    fn xor_with<O>(self, other: O) -> Xor<Self, O>
    where
        O: Need<Error = Self::Error>,
    {
        Xor(self, other)
    }

    /// Transform the failure value.
    ///
    /// Lets needs with different failure types be combined.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, Need, NeedExt, Unmet};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Status {
    ///     Unauthorized,
    ///     Forbidden,
    /// }
    ///
    /// let login = Const::new(true).map_err(|_: Unmet| Status::Unauthorized);
    /// let admin = Const::new(false).map_err(|_: Unmet| Status::Forbidden);
    /// assert_eq!(login.and_with(admin).enforce(), Err(Status::Forbidden));
    /// ```
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErr { inner: self, f }
    }

    /// Attach a name, shown in `Debug` output and in enforcement events when
    /// the `tracing` feature is enabled.
    fn named(self, name: impl Into<String>) -> Named<Self> {
        Named {
            inner: self,
            name: name.into(),
        }
    }

    /// Wrap a callable so it only runs when this need is met.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, NeedExt, Unmet};
    ///
    /// let delete_user = Const::new(false).guard(|| "deleted");
    /// assert_eq!(delete_user.call(), Err(Unmet));
    /// ```
    fn guard<F>(self, f: F) -> Guarded<Self, F> {
        Guarded::new(self, f)
    }

    /// Enforce the need, then run `f` and return its value.
    ///
    /// `f` never runs when the need is unmet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, NeedExt};
    ///
    /// let login_need = Const::with_error(true, "login required");
    /// let profile = login_need.run(|| "alice");
    /// assert_eq!(profile, Ok("alice"));
    /// ```
    fn run<R, F>(&self, f: F) -> Result<R, Self::Error>
    where
        F: FnOnce() -> R,
    {
        self.enforce()?;
        Ok(f())
    }

    /// Erase the concrete type, for storing needs of different shapes
    /// together.
    fn boxed(self) -> BoxNeed<Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        BoxNeed::new(self)
    }
}

impl<N: Need> NeedExt for N {}

/// NOT combinator - met when the parent is not.
#[derive(Clone, Copy, Debug)]
pub struct Not<N>(pub N);

impl<N: Need> Need for Not<N> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        !self.0.evaluate()
    }

    #[inline]
    fn error(&self) -> N::Error {
        self.0.error()
    }

    fn enforce(&self) -> Result<(), N::Error> {
        if self.0.evaluate() {
            Err(self.0.error())
        } else {
            Ok(())
        }
    }
}

/// AND combinator - both needs must be met.
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(pub A, pub B);

impl<A, B> Need for And<A, B>
where
    A: Need,
    B: Need<Error = A::Error>,
{
    type Error = A::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.0.evaluate() && self.1.evaluate()
    }

    fn error(&self) -> A::Error {
        match self.enforce() {
            Err(e) => e,
            Ok(()) => self.0.error(),
        }
    }

    fn enforce(&self) -> Result<(), A::Error> {
        self.0.enforce()?;
        self.1.enforce()
    }
}

/// OR combinator - either need must be met.
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(pub A, pub B);

impl<A, B> Need for Or<A, B>
where
    A: Need,
    B: Need<Error = A::Error>,
{
    type Error = A::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.0.evaluate() || self.1.evaluate()
    }

    fn error(&self) -> A::Error {
        match self.enforce() {
            Err(e) => e,
            Ok(()) => self.1.error(),
        }
    }

    fn enforce(&self) -> Result<(), A::Error> {
        if self.0.evaluate() {
            return Ok(());
        }
        self.1.enforce()
    }
}

/// XOR combinator - exactly one need must be met.
#[derive(Clone, Copy, Debug)]
pub struct Xor<A, B>(pub A, pub B);

impl<A, B> Need for Xor<A, B>
where
    A: Need,
    B: Need<Error = A::Error>,
{
    type Error = A::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.0.evaluate() != self.1.evaluate()
    }

    fn error(&self) -> A::Error {
        match self.enforce() {
            Err(e) => e,
            Ok(()) => self.0.error(),
        }
    }

    fn enforce(&self) -> Result<(), A::Error> {
        match (self.0.evaluate(), self.1.evaluate()) {
            (true, true) => Err(self.0.error()),
            (false, false) => self.1.enforce(),
            _ => Ok(()),
        }
    }
}

/// Need with a transformed failure value.
///
/// Created by [`NeedExt::map_err`].
#[derive(Clone, Copy)]
pub struct MapErr<N, F> {
    inner: N,
    f: F,
}

impl<N: fmt::Debug, F> fmt::Debug for MapErr<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<N, F, E2> Need for MapErr<N, F>
where
    N: Need,
    F: Fn(N::Error) -> E2,
{
    type Error = E2;

    #[inline]
    fn evaluate(&self) -> bool {
        self.inner.evaluate()
    }

    #[inline]
    fn error(&self) -> E2 {
        (self.f)(self.inner.error())
    }

    fn enforce(&self) -> Result<(), E2> {
        self.inner.enforce().map_err(&self.f)
    }
}

/// Need with a name attached.
///
/// Created by [`NeedExt::named`].
#[derive(Clone, Debug)]
pub struct Named<N> {
    inner: N,
    name: String,
}

impl<N> Named<N> {
    /// The attached name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unwrap the named need.
    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<N: Need> Need for Named<N> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.inner.evaluate()
    }

    #[inline]
    fn error(&self) -> N::Error {
        self.inner.error()
    }

    fn enforce(&self) -> Result<(), N::Error> {
        let result = self.inner.enforce();

        #[cfg(feature = "tracing")]
        match &result {
            Ok(()) => tracing::trace!(need = %self.name, "need met"),
            Err(_) => tracing::debug!(need = %self.name, "need not met"),
        }

        result
    }
}

/// Met when every need is met (const generic, zero-allocation).
///
/// Enforcement walks left to right and reports the first unmet need's
/// failure, like a chain of [`And`].
#[derive(Clone, Copy, Debug)]
pub struct AllOf<N, const K: usize>([N; K]);

impl<N: Need, const K: usize> Need for AllOf<N, K> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.0.iter().all(|n| n.evaluate())
    }

    fn error(&self) -> N::Error {
        match self.enforce() {
            Err(e) => e,
            Ok(()) => self.0[0].error(),
        }
    }

    fn enforce(&self) -> Result<(), N::Error> {
        self.0.iter().try_for_each(|n| n.enforce())
    }
}

/// Create a need that is met when all given needs are met.
///
/// All needs must share one type; for mixed needs chain
/// [`and_with`](NeedExt::and_with) or box them. Passing an empty array fails
/// to compile.
///
/// # Example
///
/// ```rust
/// use needs::{all_of, Const, Need};
///
/// let need = all_of([
///     Const::with_error(true, "login"),
///     Const::with_error(false, "verified"),
///     Const::with_error(false, "admin"),
/// ]);
/// assert_eq!(need.enforce(), Err("verified"));
/// ```
pub fn all_of<N: Need, const K: usize>(needs: [N; K]) -> AllOf<N, K> {
    const { assert!(K > 0, "all_of requires at least one need") };
    AllOf(needs)
}

/// Met when any need is met (const generic, zero-allocation).
///
/// When none is met, enforcement reports the last need's failure, like a
/// chain of [`Or`].
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<N, const K: usize>([N; K]);

impl<N: Need, const K: usize> Need for AnyOf<N, K> {
    type Error = N::Error;

    #[inline]
    fn evaluate(&self) -> bool {
        self.0.iter().any(|n| n.evaluate())
    }

    fn error(&self) -> N::Error {
        match self.enforce() {
            Err(e) => e,
            Ok(()) => self.0[K - 1].error(),
        }
    }

    fn enforce(&self) -> Result<(), N::Error> {
        if self.0.iter().any(|n| n.evaluate()) {
            Ok(())
        } else {
            self.0[K - 1].enforce()
        }
    }
}

/// Create a need that is met when any given need is met.
///
/// Passing an empty array fails to compile.
///
/// # Example
///
/// ```rust
/// use needs::{any_of, Const, Need};
///
/// let need = any_of([
///     Const::with_error(false, "owner"),
///     Const::with_error(false, "editor"),
///     Const::with_error(false, "admin"),
/// ]);
/// assert_eq!(need.enforce(), Err("admin"));
/// ```
pub fn any_of<N: Need, const K: usize>(needs: [N; K]) -> AnyOf<N, K> {
    const { assert!(K > 0, "any_of requires at least one need") };
    AnyOf(needs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, Unmet};

    const MET_A: Const<&str> = Const::with_error(true, "a");
    const MET_B: Const<&str> = Const::with_error(true, "b");
    const UNMET_A: Const<&str> = Const::with_error(false, "a");
    const UNMET_B: Const<&str> = Const::with_error(false, "b");

    #[test]
    fn test_negate() {
        assert!(!MET_A.negate().evaluate());
        assert!(UNMET_A.negate().evaluate());
        assert_eq!(MET_A.negate().enforce(), Err("a"));
        assert_eq!(UNMET_A.negate().enforce(), Ok(()));
        assert_eq!(MET_A.negate().error(), "a");
    }

    #[test]
    fn test_double_negation() {
        assert!(MET_A.negate().negate().evaluate());
        assert_eq!(UNMET_A.negate().negate().enforce(), Err("a"));
    }

    #[test]
    fn test_and() {
        assert!(MET_A.and_with(MET_B).evaluate());
        assert!(!UNMET_A.and_with(MET_B).evaluate());
        assert!(!MET_A.and_with(UNMET_B).evaluate());
        assert!(!UNMET_A.and_with(UNMET_B).evaluate());
    }

    #[test]
    fn test_and_checks_left_first() {
        assert_eq!(UNMET_A.and_with(MET_B).enforce(), Err("a"));
        assert_eq!(MET_B.and_with(UNMET_A).enforce(), Err("a"));
        assert_eq!(UNMET_A.and_with(UNMET_B).enforce(), Err("a"));
        assert_eq!(UNMET_B.and_with(UNMET_A).enforce(), Err("b"));
        assert_eq!(MET_A.and_with(MET_B).enforce(), Ok(()));
    }

    #[test]
    fn test_or() {
        assert!(MET_A.or_with(MET_B).evaluate());
        assert!(UNMET_A.or_with(MET_B).evaluate());
        assert!(MET_A.or_with(UNMET_B).evaluate());
        assert!(!UNMET_A.or_with(UNMET_B).evaluate());
    }

    #[test]
    fn test_or_reports_second_failure() {
        assert_eq!(UNMET_A.or_with(UNMET_B).enforce(), Err("b"));
        assert_eq!(UNMET_B.or_with(UNMET_A).enforce(), Err("a"));
        assert_eq!(UNMET_A.or_with(UNMET_B).error(), "b");
        assert_eq!(MET_A.or_with(UNMET_B).enforce(), Ok(()));
        assert_eq!(UNMET_A.or_with(MET_B).enforce(), Ok(()));
    }

    #[test]
    fn test_xor() {
        assert!(!MET_A.xor_with(MET_B).evaluate());
        assert!(UNMET_A.xor_with(MET_B).evaluate());
        assert!(MET_A.xor_with(UNMET_B).evaluate());
        assert!(!UNMET_A.xor_with(UNMET_B).evaluate());
    }

    #[test]
    fn test_xor_failure_selection() {
        assert_eq!(UNMET_A.xor_with(UNMET_B).enforce(), Err("b"));
        assert_eq!(MET_A.xor_with(MET_B).enforce(), Err("a"));
        assert_eq!(MET_A.xor_with(UNMET_B).enforce(), Ok(()));
        assert_eq!(UNMET_A.xor_with(MET_B).enforce(), Ok(()));
    }

    #[test]
    fn test_nested_keeps_operand_policy() {
        // The inner Or reports its second operand, and the outer And reports
        // whatever its unmet left operand reports.
        let inner = UNMET_A.or_with(UNMET_B);
        let outer = inner.and_with(UNMET_A);
        assert_eq!(outer.enforce(), Err("b"));

        // An unmet And as the second operand of an Or reports the failure its
        // own enforcement selects, not its static error value.
        let right = MET_A.and_with(UNMET_B);
        assert_eq!(right.error(), "b");
        assert_eq!(UNMET_A.or_with(right).enforce(), Err("b"));
    }

    #[test]
    fn test_double_negation_keeps_selected_failure() {
        let need = MET_A.and_with(UNMET_B);
        assert_eq!(need.enforce(), Err("b"));
        assert_eq!(need.negate().negate().enforce(), need.enforce());

        let nested = UNMET_A.or_with(MET_A.and_with(UNMET_B));
        assert_eq!(nested.error(), "b");
        assert_eq!(nested.negate().negate().enforce(), Err("b"));

        let xor = UNMET_A.xor_with(MET_B.and_with(UNMET_A.or_with(UNMET_B)));
        assert_eq!(xor.enforce(), Err("b"));
        assert_eq!(xor.negate().negate().enforce(), xor.enforce());
    }

    #[test]
    fn test_error_falls_back_when_met() {
        assert_eq!(MET_A.and_with(MET_B).error(), "a");
        assert_eq!(MET_A.or_with(UNMET_B).error(), "b");
        assert_eq!(MET_A.xor_with(UNMET_B).error(), "a");
        assert_eq!(all_of([MET_B, MET_A]).error(), "b");
        assert_eq!(any_of([MET_B, MET_A]).error(), "a");
    }

    #[test]
    fn test_error_matches_enforce_when_unmet() {
        assert_eq!(all_of([MET_A, UNMET_B]).error(), "b");
        assert_eq!(
            any_of([UNMET_A.and_with(UNMET_B), MET_A.and_with(UNMET_B)]).error(),
            "b"
        );
    }

    #[test]
    fn test_map_err() {
        let need = UNMET_A.map_err(|e| e.len());
        assert_eq!(need.enforce(), Err(1));
        assert_eq!(need.error(), 1);
        assert!(!need.evaluate());

        let met = MET_A.map_err(|_| Unmet);
        assert_eq!(met.enforce(), Ok(()));
    }

    #[test]
    fn test_named() {
        let need = UNMET_A.named("admin");
        assert_eq!(need.name(), "admin");
        assert_eq!(need.enforce(), Err("a"));
        assert_eq!(need.into_inner(), UNMET_A);
    }

    #[test]
    fn test_run() {
        assert_eq!(MET_A.run(|| 42), Ok(42));

        let mut ran = false;
        assert_eq!(UNMET_A.run(|| ran = true), Err("a"));
        assert!(!ran);
    }

    #[test]
    fn test_all_of() {
        assert!(all_of([MET_A, MET_B]).evaluate());
        assert_eq!(all_of([MET_A, UNMET_B, UNMET_A]).enforce(), Err("b"));
        assert_eq!(all_of([UNMET_A]).error(), "a");
    }

    #[test]
    fn test_any_of() {
        assert!(any_of([UNMET_A, MET_B]).evaluate());
        assert_eq!(any_of([UNMET_B, UNMET_A]).enforce(), Err("a"));
        assert_eq!(any_of([MET_A, UNMET_B]).enforce(), Ok(()));
        assert_eq!(any_of([MET_A, UNMET_B]).error(), "b");
    }

    #[test]
    fn test_complex_chain() {
        // (a and not b) or (a xor b)
        let p = MET_A.and_with(UNMET_B.negate()).or_with(MET_A.xor_with(MET_B));
        assert!(p.evaluate());
        assert_eq!(p.enforce(), Ok(()));

        let q = UNMET_A
            .and_with(MET_B.negate())
            .or_with(MET_A.xor_with(MET_B));
        assert!(!q.evaluate());
        assert_eq!(q.enforce(), Err("a"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_named_logs_unmet() {
            let need = Const::new(false).named("admin");
            assert_eq!(need.enforce(), Err(Unmet));
            assert!(logs_contain("need not met"));
            assert!(logs_contain("admin"));
        }

        #[traced_test]
        #[test]
        fn test_xor_consults_second_operand_quietly() {
            let need = Const::new(true).xor_with(Const::new(false).named("beta"));
            assert_eq!(need.enforce(), Ok(()));
            assert!(!logs_contain("need not met"));

            let need = Const::new(false).xor_with(Const::new(false).named("beta"));
            assert_eq!(need.enforce(), Err(Unmet));
            assert!(logs_contain("need not met"));
        }

        #[traced_test]
        #[test]
        fn test_named_logs_met() {
            let need = Const::new(true).named("login");
            assert_eq!(need.enforce(), Ok(()));
            assert!(logs_contain("need met"));
            assert!(!logs_contain("need not met"));
        }
    }
}
