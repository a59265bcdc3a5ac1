//! Execution-scoped context propagation
//!
//! A `Context` is an immutable, cheaply cloneable bag of values keyed by their
//! type. Recording calls carry one so that what was active at record time can
//! be inspected later; nothing in this crate reads cancellation or deadlines
//! from it.
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

thread_local! {
    static CURRENT_CONTEXT: RefCell<Context> = RefCell::new(Context::default());
}

/// An immutable set of values keyed by type.
#[derive(Clone, Default)]
pub struct Context {
    entries: Arc<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Context {
    /// Creates an empty `Context`, the background context.
    pub fn new() -> Self {
        Context::default()
    }

    /// Returns a clone of the context attached to the current thread.
    pub fn current() -> Self {
        CURRENT_CONTEXT.with(|cx| cx.borrow().clone())
    }

    /// Returns a copy of this context with the given value added, replacing
    /// any previous value of the same type.
    pub fn with_value<T: 'static + Send + Sync>(&self, value: T) -> Self {
        let mut entries = (*self.entries).clone();
        entries.insert(TypeId::of::<T>(), Arc::new(value));

        Context {
            entries: Arc::new(entries),
        }
    }

    /// Returns a reference to the entry for the corresponding value type.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }

    /// Replaces the current thread's context with this one until the returned
    /// guard is dropped.
    pub fn attach(self) -> ContextGuard {
        let previous_cx = CURRENT_CONTEXT
            .try_with(|current| current.replace(self))
            .ok();

        ContextGuard {
            previous_cx,
            _marker: PhantomData,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Restores the previous context when dropped.
#[derive(Debug)]
pub struct ContextGuard {
    previous_cx: Option<Context>,
    // ensure this type is !Send as it relies on thread locals
    _marker: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        if let Some(previous_cx) = self.previous_cx.take() {
            let _ = CURRENT_CONTEXT.try_with(|current| current.replace(previous_cx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct RequestId(u64);

    #[test]
    fn values_are_keyed_by_type() {
        let cx = Context::new().with_value(RequestId(7));
        assert_eq!(cx.get::<RequestId>(), Some(&RequestId(7)));
        assert_eq!(cx.get::<String>(), None);
        assert_eq!(Context::new().get::<RequestId>(), None);
    }

    #[test]
    fn attach_restores_previous_context() {
        assert!(Context::current().get::<RequestId>().is_none());
        {
            let _guard = Context::new().with_value(RequestId(1)).attach();
            assert_eq!(Context::current().get::<RequestId>(), Some(&RequestId(1)));
        }
        assert!(Context::current().get::<RequestId>().is_none());
    }
}
