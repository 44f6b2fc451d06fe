//! The default failure value for needs
//!
//! Every need carries a failure value that [`enforce`](crate::Need::enforce)
//! returns when the need is not met. Leaf needs built without a custom value
//! use [`Unmet`], a payload-free "need not met" error.
//!
//! # Example
//!
//! ```rust
//! use needs::{Const, Need, Unmet};
//!
//! let need = Const::new(false);
//! assert_eq!(need.enforce(), Err(Unmet));
//! assert_eq!(Unmet.to_string(), "need not met");
//! ```

use std::fmt;

/// Generic failure reported by a need that is not met.
///
/// Carries no payload. Applications that need to tell failures apart (for
/// example to answer 401 for a missing login and 403 for a missing role)
/// supply their own failure values through
/// [`Const::with_error`](crate::Const::with_error) or
/// [`from_fn`](crate::from_fn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unmet;

impl fmt::Display for Unmet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "need not met")
    }
}

impl std::error::Error for Unmet {}
