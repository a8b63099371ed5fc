//! Per-translation resolution state.

use indexmap::IndexMap;
use typeforge_core::{Accessor, EnumDeclaration, IdentifierContext};

/// State accumulated during one translation pass.
///
/// Holds the identifier path of the node currently being translated and the
/// auxiliary declarations discovered so far. Declarations keep insertion order and
/// are keyed by name; the first declaration registered under a name wins.
#[derive(Debug, Clone)]
pub struct ResolutionStore {
    context: IdentifierContext,
    declarations: IndexMap<String, EnumDeclaration>,
}

impl ResolutionStore {
    /// Creates an empty store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            context: IdentifierContext::new(root),
            declarations: IndexMap::new(),
        }
    }

    /// Registers an auxiliary declaration.
    ///
    /// Returns `true` if the name was new. An existing declaration under the same
    /// name is kept unchanged.
    pub fn register_declaration(&mut self, decl: EnumDeclaration) -> bool {
        if let Some(existing) = self.declarations.get(&decl.name) {
            if *existing != decl {
                tracing::debug!(
                    name = %decl.name,
                    "ignoring different declaration registered under an existing name"
                );
            }
            return false;
        }
        tracing::debug!(name = %decl.name, members = decl.members.len(), "registered declaration");
        self.declarations.insert(decl.name.clone(), decl);
        true
    }

    /// Identifier path of the node currently being translated.
    #[must_use]
    pub fn current_identifier_path(&self) -> &IdentifierContext {
        &self.context
    }

    /// Auxiliary declarations in registration order.
    pub fn declarations(&self) -> impl ExactSizeIterator<Item = &EnumDeclaration> {
        self.declarations.values()
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&EnumDeclaration> {
        self.declarations.get(name)
    }

    /// Number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if no declarations were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Consumes the store, returning declarations in registration order.
    #[must_use]
    pub fn into_declarations(self) -> Vec<EnumDeclaration> {
        self.declarations.into_values().collect()
    }

    pub(crate) fn enter(&mut self, accessor: Accessor) {
        self.context.push(accessor);
    }

    pub(crate) fn leave(&mut self) {
        self.context.pop();
    }

    pub(crate) fn reset_path(&mut self) {
        while self.context.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeforge_core::{LiteralType, TypeFactory};

    fn color(first: &str) -> EnumDeclaration {
        TypeFactory::new().enum_declaration(
            "Color",
            [(first, LiteralType::from("x")), ("Blue", LiteralType::from("blue"))],
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ResolutionStore::new("User");
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.current_identifier_path().root(), "User");
        assert!(store.current_identifier_path().is_root());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store = ResolutionStore::new("User");
        assert!(store.register_declaration(color("Red")));
        assert!(!store.register_declaration(color("Red")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut store = ResolutionStore::new("User");
        assert!(store.register_declaration(color("Red")));
        assert!(!store.register_declaration(color("Green")));
        let kept = store.declaration("Color").expect("declaration missing");
        assert_eq!(kept.members[0].name, "Red");
    }

    #[test]
    fn test_declarations_keep_insertion_order() {
        let f = TypeFactory::new();
        let mut store = ResolutionStore::new("User");
        for name in ["Zeta", "Alpha", "Mid"] {
            store.register_declaration(f.enum_declaration(name, [("A", LiteralType::from(1))]));
        }
        let names: Vec<_> = store.declarations().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        let owned: Vec<_> = store.into_declarations().into_iter().map(|d| d.name).collect();
        assert_eq!(owned, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_enter_leave_path() {
        let mut store = ResolutionStore::new("User");
        store.enter(Accessor::Property("friends".to_string()));
        store.enter(Accessor::Element);
        assert_eq!(store.current_identifier_path().to_string(), "User.friends[]");
        store.leave();
        assert_eq!(store.current_identifier_path().depth(), 1);
        store.reset_path();
        assert!(store.current_identifier_path().is_root());
    }
}
