//! Guarding callables with needs
//!
//! A guarded callable enforces its need before every call and only runs the
//! wrapped function when the need is met. The need's failure becomes the
//! call's failure; the function is never invoked on an unmet need.
//!
//! # Example
//!
//! ```rust
//! use needs::{guard_call, needs, Const, NeedExt, Unmet};
//!
//! let login_need = Const::new(true);
//! let admin_need = Const::new(false);
//!
//! let view_profile = needs(login_need).guard(|| "profile");
//! assert_eq!(view_profile.call(), Ok("profile"));
//!
//! let delete_account = guard_call(admin_need, || "deleted");
//! assert_eq!(delete_account(), Err(Unmet));
//! ```

use std::future::Future;

use futures::future::{self, Either, FutureExt, Map, Ready};

use crate::need::Need;

/// A callable that only runs when its need is met.
///
/// Created by [`NeedExt::guard`](crate::NeedExt::guard).
#[derive(Clone, Debug)]
pub struct Guarded<N, F> {
    need: N,
    f: F,
}

/// Future returned by [`Guarded::call_async`].
pub type GuardedFuture<Fut, E> = Either<
    Ready<Result<<Fut as Future>::Output, E>>,
    Map<Fut, fn(<Fut as Future>::Output) -> Result<<Fut as Future>::Output, E>>,
>;

impl<N: Need, F> Guarded<N, F> {
    /// Wrap `f` so it only runs when `need` is met.
    pub fn new(need: N, f: F) -> Self {
        Guarded { need, f }
    }

    /// Enforce the need, then call a zero-argument function.
    pub fn call<R>(&self) -> Result<R, N::Error>
    where
        F: Fn() -> R,
    {
        self.need.enforce()?;
        Ok((self.f)())
    }

    /// Enforce the need, then call the function with `args`.
    ///
    /// Pass a tuple for functions of several arguments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, NeedExt};
    ///
    /// let transfer = Const::with_error(true, "frozen")
    ///     .guard(|(from, to, amount): (&str, &str, u32)| format!("{from}->{to}: {amount}"));
    ///
    /// assert_eq!(transfer.call_with(("a", "b", 5)), Ok("a->b: 5".to_string()));
    /// ```
    pub fn call_with<A, R>(&self, args: A) -> Result<R, N::Error>
    where
        F: Fn(A) -> R,
    {
        self.need.enforce()?;
        Ok((self.f)(args))
    }

    /// Enforce the need, then call a fallible function.
    ///
    /// The need's failure is converted into the function's own error type,
    /// so callers see a single `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, NeedExt, Unmet};
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum HandlerError {
    ///     Forbidden,
    ///     NotFound,
    /// }
    ///
    /// impl From<Unmet> for HandlerError {
    ///     fn from(_: Unmet) -> Self {
    ///         HandlerError::Forbidden
    ///     }
    /// }
    ///
    /// let handler = Const::new(false).guard(|| Err::<(), _>(HandlerError::NotFound));
    /// assert_eq!(handler.try_call(), Err(HandlerError::Forbidden));
    /// ```
    pub fn try_call<R, E>(&self) -> Result<R, E>
    where
        F: Fn() -> Result<R, E>,
        E: From<N::Error>,
    {
        self.need.enforce()?;
        (self.f)()
    }

    /// Enforce the need, then call an async function.
    ///
    /// Enforcement happens when `call_async` is called, before the future is
    /// created; an unmet need yields an immediately ready failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use needs::{Const, NeedExt, Unmet};
    ///
    /// # tokio_test::block_on(async {
    /// let fetch = Const::new(true).guard(|| async { 42 });
    /// assert_eq!(fetch.call_async().await, Ok(42));
    /// # });
    /// ```
    pub fn call_async<Fut>(&self) -> GuardedFuture<Fut, N::Error>
    where
        F: Fn() -> Fut,
        Fut: Future,
    {
        let wrap: fn(Fut::Output) -> Result<Fut::Output, N::Error> = Ok;
        match self.need.enforce() {
            Ok(()) => Either::Right((self.f)().map(wrap)),
            Err(e) => Either::Left(future::ready(Err(e))),
        }
    }

    /// The need guarding this callable.
    pub fn need(&self) -> &N {
        &self.need
    }

    /// Split into the need and the wrapped function.
    pub fn into_parts(self) -> (N, F) {
        (self.need, self.f)
    }
}

/// Wrap a zero-argument function so it only runs when `need` is met.
///
/// Returns a plain closure; use [`NeedExt::guard`](crate::NeedExt::guard)
/// for arguments, fallible functions or async functions.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use needs::{guard_call, Const, Unmet};
///
/// let calls = Cell::new(0);
/// let guarded = guard_call(Const::new(false), || calls.set(calls.get() + 1));
///
/// assert_eq!(guarded(), Err(Unmet));
/// assert_eq!(calls.get(), 0);
/// ```
pub fn guard_call<N, F, R>(need: N, f: F) -> impl Fn() -> Result<R, N::Error>
where
    N: Need,
    F: Fn() -> R,
{
    move || {
        need.enforce()?;
        Ok(f())
    }
}

/// Identity adapter for call-site readability.
///
/// `needs(login_need).guard(f)` builds the same guard as
/// `login_need.guard(f)`.
pub fn needs<N: Need>(need: N) -> N {
    need
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Const, NeedExt, Switch, Unmet};
    use std::cell::Cell;

    #[test]
    fn test_call_met() {
        let guarded = Const::new(true).guard(|| 42);
        assert_eq!(guarded.call(), Ok(42));
    }

    #[test]
    fn test_call_unmet_skips_function() {
        let calls = Cell::new(0);
        let guarded = Const::with_error(false, "denied").guard(|| calls.set(calls.get() + 1));

        assert_eq!(guarded.call(), Err("denied"));
        assert_eq!(guarded.call(), Err("denied"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_failure_matches_enforce() {
        let need = Const::with_error(false, "a").and_with(Const::with_error(false, "b"));
        let guarded = need.guard(|| ());
        assert_eq!(guarded.call(), guarded.need().enforce());
    }

    #[test]
    fn test_call_with_args() {
        let add = Const::new(true).guard(|(a, b): (i32, i32)| a + b);
        assert_eq!(add.call_with((2, 3)), Ok(5));

        let double = Const::new(false).guard(|x: i32| x * 2);
        assert_eq!(double.call_with(4), Err(Unmet));
    }

    #[test]
    fn test_try_call_passes_function_error() {
        #[derive(Debug, PartialEq)]
        enum Error {
            Denied,
            Failed,
        }

        impl From<Unmet> for Error {
            fn from(_: Unmet) -> Self {
                Error::Denied
            }
        }

        let failing = Const::new(true).guard(|| Err::<i32, _>(Error::Failed));
        assert_eq!(failing.try_call(), Err(Error::Failed));

        let denied = Const::new(false).guard(|| Ok::<_, Error>(1));
        assert_eq!(denied.try_call(), Err(Error::Denied));
    }

    #[test]
    fn test_guard_reevaluates_each_call() {
        let switch = Switch::new(false);
        let guarded = switch.clone().guard(|| "ok");

        assert_eq!(guarded.call(), Err(Unmet));
        switch.set(true);
        assert_eq!(guarded.call(), Ok("ok"));
    }

    #[test]
    fn test_guard_call_closure() {
        let guarded = guard_call(Const::new(true), || "ran");
        assert_eq!(guarded(), Ok("ran"));
        assert_eq!(guarded(), Ok("ran"));
    }

    #[test]
    fn test_needs_is_identity() {
        let need = Const::with_error(false, "x");
        assert_eq!(needs(need), need);
        assert_eq!(
            needs(need).guard(|| ()).call(),
            need.guard(|| ()).call()
        );
    }

    #[test]
    fn test_into_parts() {
        let (need, f) = Const::new(true).guard(|| 7).into_parts();
        assert_eq!(need, Const::new(true));
        assert_eq!(f(), 7);
    }

    #[tokio::test]
    async fn test_call_async_unmet_never_creates_future() {
        let calls = Cell::new(0);
        let guarded = Const::new(false).guard(|| {
            calls.set(calls.get() + 1);
            async { "fetched" }
        });

        assert_eq!(guarded.call_async().await, Err(Unmet));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_call_async_met() {
        let guarded = Const::new(true).guard(|| async { "fetched" });
        assert_eq!(guarded.call_async().await, Ok("fetched"));
    }
}
