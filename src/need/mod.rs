//! Needs: composable authorization conditions
//!
//! A need is a boolean condition ("user is logged in", "user owns this
//! document") paired with the failure value to report when the condition is
//! not met. Needs are built from small leaves and combined with logical
//! operators into the exact rule a code path requires.
//!
//! # Philosophy
//!
//! Instead of scattering `if` checks and ad-hoc error mapping across
//! handlers, needs let you:
//!
//! - Define each condition once, with the failure it should produce
//! - Compose conditions with `negate`, `and_with`, `or_with` and `xor_with`
//! - Enforce them with a single, predictable failure value
//!
//! # Example
//!
//! ```rust
//! use needs::need::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum AuthError {
//!     LoginRequired,
//!     AdminRequired,
//! }
//!
//! let login_need = Const::with_error(true, AuthError::LoginRequired);
//! let admin_need = Const::with_error(false, AuthError::AdminRequired);
//!
//! let rule = login_need.clone().and_with(admin_need.clone());
//! assert!(!rule.evaluate());
//! assert_eq!(rule.enforce(), Err(AuthError::AdminRequired));
//!
//! let rule = login_need.or_with(admin_need);
//! assert_eq!(rule.enforce(), Ok(()));
//! ```

mod boxed;
mod combinators;
mod leaf;
mod trait_def;

// Re-export core traits
pub use combinators::NeedExt;
pub use trait_def::Need;

// Re-export combinator types
pub use combinators::{all_of, any_of, AllOf, And, AnyOf, MapErr, Named, Not, Or, Xor};

// Re-export leaf needs
pub use leaf::{from_fn, no_need, Const, FromFn, NoNeed, Switch, NO_NEED};

pub use boxed::BoxNeed;
