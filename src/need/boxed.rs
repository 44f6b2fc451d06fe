//! BoxNeed - type-erased need for opt-in boxing.
//!
//! Use `BoxNeed` when you need to:
//! - Store needs of different types in one collection
//! - Return different needs from match arms
//! - Share one need between threads and composites

use std::fmt;
use std::sync::Arc;

use super::trait_def::Need;

/// A type-erased, shareable need.
///
/// Cloning is cheap: clones share the same underlying need.
///
/// # Example
///
/// ```rust
/// use needs::{BoxNeed, Const, Need, NeedExt, Switch};
///
/// fn need_for(role: &str, maintenance: &Switch<&'static str>) -> BoxNeed<&'static str> {
///     match role {
///         "admin" => Const::with_error(true, "admin").boxed(),
///         _ => maintenance.clone().negate().boxed(),
///     }
/// }
///
/// let maintenance = Switch::with_error(true, "down for maintenance");
/// assert_eq!(need_for("admin", &maintenance).enforce(), Ok(()));
/// assert_eq!(
///     need_for("guest", &maintenance).enforce(),
///     Err("down for maintenance")
/// );
/// ```
pub struct BoxNeed<E> {
    inner: Arc<dyn Need<Error = E> + Send + Sync>,
}

impl<E> BoxNeed<E> {
    /// Box any need with a matching failure type.
    pub fn new<N>(need: N) -> Self
    where
        N: Need<Error = E> + Send + Sync + 'static,
    {
        BoxNeed {
            inner: Arc::new(need),
        }
    }
}

impl<E> Clone for BoxNeed<E> {
    fn clone(&self) -> Self {
        BoxNeed {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for BoxNeed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxNeed")
            .field("inner", &"<need>")
            .finish()
    }
}

impl<E> Need for BoxNeed<E> {
    type Error = E;

    #[inline]
    fn evaluate(&self) -> bool {
        self.inner.evaluate()
    }

    #[inline]
    fn error(&self) -> E {
        self.inner.error()
    }

    #[inline]
    fn enforce(&self) -> Result<(), E> {
        self.inner.enforce()
    }
}
