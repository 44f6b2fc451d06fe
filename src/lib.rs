//! # Needs
//!
//! > *"Say what you need, once."*
//!
//! A small library of composable authorization conditions.
//!
//! A *need* is a boolean condition such as "user is logged in" or "user owns
//! this object", paired with the failure value to report when the condition
//! does not hold. Needs can be:
//!
//! - **evaluated**: `need.evaluate()` answers whether the condition holds now
//! - **composed**: `negate`, `and_with`, `or_with`, `xor_with`
//! - **enforced**: `need.enforce()` returns `Err(failure)` when unmet
//! - **used as guards**: `need.guard(f)` only runs `f` when the need is met
//!
//! The library knows nothing about sessions or users. Leaf needs come from
//! the embedding application; this crate decides how they combine and which
//! failure surfaces.
//!
//! ## Quick Example
//!
//! ```rust
//! use needs::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AuthError {
//!     Unauthorized,
//!     Forbidden,
//! }
//!
//! struct Session {
//!     user: Option<&'static str>,
//!     admins: Vec<&'static str>,
//! }
//!
//! let session = Session { user: Some("alice"), admins: vec!["root"] };
//!
//! let login_need = from_fn(|| session.user.is_some(), AuthError::Unauthorized);
//! let admin_need = from_fn(
//!     || session.user.is_some_and(|u| session.admins.contains(&u)),
//!     AuthError::Forbidden,
//! );
//!
//! // Login is checked first, so a logged-in non-admin sees Forbidden.
//! let delete_user = login_need.and_with(admin_need).guard(|| "deleted");
//! assert_eq!(delete_user.call(), Err(AuthError::Forbidden));
//! ```
//!
//! ## Failure selection
//!
//! Composite needs report exactly one failure:
//!
//! - `a.negate()` reports `a`'s failure
//! - `a.and_with(b)` checks `a` first and reports the first unmet operand
//! - `a.or_with(b)` reports `b`'s failure
//! - `a.xor_with(b)` reports `b`'s failure when neither is met and `a`'s when
//!   both are
//!
//! The `or`/`xor` rules are asymmetric; operand order matters.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod guard;
pub mod need;
pub mod testing;

// Re-exports
pub use error::Unmet;
pub use guard::{guard_call, needs, Guarded, GuardedFuture};
pub use need::{
    all_of, any_of, from_fn, no_need, AllOf, And, AnyOf, BoxNeed, Const, FromFn, MapErr, Named,
    Need, NeedExt, NoNeed, Not, Or, Switch, Xor, NO_NEED,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Unmet;
    pub use crate::guard::{guard_call, needs, Guarded};
    pub use crate::need::{
        all_of, any_of, from_fn, no_need, BoxNeed, Const, Need, NeedExt, Switch, NO_NEED,
    };
}
