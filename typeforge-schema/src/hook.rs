//! Per-node override hooks.

use std::fmt;
use std::sync::Arc;
use typeforge_core::{IdentifierContext, TypeExpr, TypeFactory};

type HookFn = dyn Fn(&TypeFactory, &IdentifierContext) -> TypeExpr + Send + Sync;

/// Caller-supplied function that replaces the default translation of one node.
///
/// The hook receives the type factory and the identifier context of the node it is
/// attached to. Its result is used verbatim.
#[derive(Clone)]
pub struct OverrideHook(Arc<HookFn>);

impl OverrideHook {
    /// Wraps a closure as an override hook.
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&TypeFactory, &IdentifierContext) -> TypeExpr + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    /// Hook that always returns a reference to `name`.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |f, _| f.reference(name.clone()))
    }

    /// Hook that always returns a clone of `expr`.
    #[must_use]
    pub fn fixed(expr: TypeExpr) -> Self {
        Self::new(move |_, _| expr.clone())
    }

    /// Invokes the hook.
    #[must_use]
    pub fn call(&self, factory: &TypeFactory, ctx: &IdentifierContext) -> TypeExpr {
        (self.0)(factory, ctx)
    }
}

impl fmt::Debug for OverrideHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OverrideHook(..)")
    }
}
