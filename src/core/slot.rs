//! Callback slots: the extension seam between gameplay code and the machine.
//!
//! A slot is a capability object with a single operation. Conditions hold a
//! [`ConditionSlot`] (`check`), actions hold an [`ActionSlot`] (`execute`).
//! Two implementations ship with the crate:
//!
//! - [`FnSlot`] wraps a free function or closure.
//! - [`MethodSlot`] binds a method to a shared receiver. It holds the
//!   receiver weakly, so a slot never keeps its gameplay object alive; once
//!   the receiver is dropped the slot behaves like an empty one.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// Zero-argument boolean predicate.
pub trait ConditionSlot: Send + Sync {
    fn check(&self) -> bool;
}

/// Zero-argument side effect.
pub trait ActionSlot: Send + Sync {
    fn execute(&self);
}

/// Slot backed by a closure or free function.
///
/// # Example
///
/// ```rust
/// use reflex::core::{ConditionSlot, FnSlot};
///
/// let always = FnSlot::new(|| true);
/// assert!(always.check());
/// ```
pub struct FnSlot<F> {
    callback: F,
}

impl<F> FnSlot<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ConditionSlot for FnSlot<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn check(&self) -> bool {
        (self.callback)()
    }
}

impl<F> ActionSlot for FnSlot<F>
where
    F: Fn() + Send + Sync,
{
    fn execute(&self) {
        (self.callback)()
    }
}

impl<F> fmt::Debug for FnSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSlot").finish_non_exhaustive()
    }
}

/// Slot that calls `method` on a weakly held receiver.
///
/// Build one with [`MethodSlot::predicate`] for conditions or
/// [`MethodSlot::command`] for actions.
///
/// # Example
///
/// ```rust
/// use reflex::core::{ActionSlot, ConditionSlot, MethodSlot};
/// use std::sync::{Arc, Mutex};
///
/// struct Sentry {
///     alarms: u32,
/// }
///
/// impl Sentry {
///     fn raise(&mut self) {
///         self.alarms += 1;
///     }
///
///     fn alarmed(&self) -> bool {
///         self.alarms > 0
///     }
/// }
///
/// let sentry = Arc::new(Mutex::new(Sentry { alarms: 0 }));
/// let raise = MethodSlot::command(&sentry, Sentry::raise);
/// let alarmed = MethodSlot::predicate(&sentry, Sentry::alarmed);
///
/// assert!(!alarmed.check());
/// raise.execute();
/// assert!(alarmed.check());
///
/// drop(sentry);
/// assert!(!alarmed.check());
/// ```
pub struct MethodSlot<T, M> {
    receiver: Weak<Mutex<T>>,
    method: M,
}

impl<T> MethodSlot<T, fn(&T) -> bool> {
    pub fn predicate(receiver: &Arc<Mutex<T>>, method: fn(&T) -> bool) -> Self {
        Self {
            receiver: Arc::downgrade(receiver),
            method,
        }
    }
}

impl<T> MethodSlot<T, fn(&mut T)> {
    pub fn command(receiver: &Arc<Mutex<T>>, method: fn(&mut T)) -> Self {
        Self {
            receiver: Arc::downgrade(receiver),
            method,
        }
    }
}

impl<T, M> MethodSlot<T, M> {
    /// Whether the receiver is still alive.
    pub fn is_bound(&self) -> bool {
        self.receiver.strong_count() > 0
    }
}

impl<T: Send> ConditionSlot for MethodSlot<T, fn(&T) -> bool> {
    fn check(&self) -> bool {
        let Some(receiver) = self.receiver.upgrade() else {
            tracing::debug!("method condition receiver dropped, reading false");
            return false;
        };
        // A poisoned receiver is treated like a missing one.
        let guard = match receiver.lock() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        (self.method)(&*guard)
    }
}

impl<T: Send> ActionSlot for MethodSlot<T, fn(&mut T)> {
    fn execute(&self) {
        let Some(receiver) = self.receiver.upgrade() else {
            tracing::debug!("method action receiver dropped, skipping");
            return;
        };
        // A poisoned receiver is treated like a missing one.
        let Ok(mut guard) = receiver.lock() else {
            return;
        };
        (self.method)(&mut *guard);
    }
}

impl<T, M> fmt::Debug for MethodSlot<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSlot")
            .field("bound", &self.is_bound())
            .finish()
    }
}
