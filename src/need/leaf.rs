//! Leaf needs
//!
//! Leaf needs hold their evaluation logic directly instead of deriving it
//! from other needs. The embedding application usually implements
//! [`Need`] on its own types; the leaves here cover the common shapes:
//!
//! - [`Const`]: a fixed answer decided at construction
//! - [`FromFn`]: an evaluation closure capturing whatever context it needs
//! - [`Switch`]: a shared flag that can be flipped at runtime
//! - [`NoNeed`]: the always-satisfied need

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::trait_def::Need;
use crate::error::Unmet;

/// A need with a fixed answer.
///
/// # Example
///
/// ```rust
/// use needs::{Const, Need, Unmet};
///
/// let login_need = Const::new(true);
/// let admin_need = Const::with_error(false, "admin required");
///
/// assert!(login_need.evaluate());
/// assert_eq!(login_need.enforce(), Ok::<(), Unmet>(()));
/// assert_eq!(admin_need.enforce(), Err("admin required"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Const<E = Unmet> {
    met: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    error: E,
}

impl Const<Unmet> {
    /// Create a constant need that fails with [`Unmet`].
    pub const fn new(met: bool) -> Self {
        Const { met, error: Unmet }
    }
}

impl<E> Const<E> {
    /// Create a constant need with a custom failure value.
    pub const fn with_error(met: bool, error: E) -> Self {
        Const { met, error }
    }

    /// The answer this need always gives.
    pub const fn is_met(&self) -> bool {
        self.met
    }
}

impl<E: Clone> Need for Const<E> {
    type Error = E;

    #[inline]
    fn evaluate(&self) -> bool {
        self.met
    }

    #[inline]
    fn error(&self) -> E {
        self.error.clone()
    }
}

/// A need evaluated by a closure.
///
/// Created by [`from_fn`]. The closure captures its context at construction
/// time; it must not have side effects.
#[derive(Clone)]
pub struct FromFn<F, E = Unmet> {
    f: F,
    error: E,
}

impl<F, E: fmt::Debug> fmt::Debug for FromFn<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("f", &"<closure>")
            .field("error", &self.error)
            .finish()
    }
}

impl<F, E> Need for FromFn<F, E>
where
    F: Fn() -> bool,
    E: Clone,
{
    type Error = E;

    #[inline]
    fn evaluate(&self) -> bool {
        (self.f)()
    }

    #[inline]
    fn error(&self) -> E {
        self.error.clone()
    }
}

/// Create a need from an evaluation closure and a failure value.
///
/// # Example
///
/// ```rust
/// use needs::{from_fn, Need};
///
/// struct Session {
///     user: Option<String>,
/// }
///
/// let session = Session { user: None };
/// let login_need = from_fn(|| session.user.is_some(), "login required");
///
/// assert!(!login_need.evaluate());
/// assert_eq!(login_need.enforce(), Err("login required"));
/// ```
pub fn from_fn<F, E>(f: F, error: E) -> FromFn<F, E>
where
    F: Fn() -> bool,
    E: Clone,
{
    FromFn { f, error }
}

/// A need backed by a shared flag.
///
/// Clones share the same flag, so flipping one clone is visible through all
/// of them and through every composite holding one. Useful for feature gates
/// and maintenance switches.
///
/// # Example
///
/// ```rust
/// use needs::{Need, Switch};
///
/// let writes_enabled = Switch::new(true);
/// let handle = writes_enabled.clone();
///
/// assert!(writes_enabled.evaluate());
/// handle.set(false);
/// assert!(!writes_enabled.evaluate());
/// ```
#[derive(Debug, Clone)]
pub struct Switch<E = Unmet> {
    flag: Arc<AtomicBool>,
    error: E,
}

impl Switch<Unmet> {
    /// Create a switch that fails with [`Unmet`].
    pub fn new(met: bool) -> Self {
        Switch::with_error(met, Unmet)
    }
}

impl<E> Switch<E> {
    /// Create a switch with a custom failure value.
    pub fn with_error(met: bool, error: E) -> Self {
        Switch {
            flag: Arc::new(AtomicBool::new(met)),
            error,
        }
    }

    /// Set whether the need is met.
    pub fn set(&self, met: bool) {
        self.flag.store(met, Ordering::Release);
    }

    /// Flip the flag, returning the previous value.
    pub fn toggle(&self) -> bool {
        self.flag.fetch_xor(true, Ordering::AcqRel)
    }
}

impl<E: Clone> Need for Switch<E> {
    type Error = E;

    #[inline]
    fn evaluate(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    #[inline]
    fn error(&self) -> E {
        self.error.clone()
    }
}

/// The always-satisfied need.
///
/// A neutral starting point for negation and composition chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoNeed;

/// The shared [`NoNeed`] value.
pub const NO_NEED: NoNeed = NoNeed;

/// Returns the always-satisfied need.
///
/// # Example
///
/// ```rust
/// use needs::{no_need, Need, NeedExt, Unmet};
///
/// assert!(no_need().evaluate());
/// assert_eq!(no_need().negate().enforce(), Err(Unmet));
/// ```
pub fn no_need() -> NoNeed {
    NO_NEED
}

impl Need for NoNeed {
    type Error = Unmet;

    #[inline]
    fn evaluate(&self) -> bool {
        true
    }

    #[inline]
    fn error(&self) -> Unmet {
        Unmet
    }
}
