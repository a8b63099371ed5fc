//! Identifier context: how the translator got from the root to the current node.

use crate::ast::{LiteralType, TypeExpr};
use crate::factory::TypeFactory;
use std::fmt;

/// One step from a parent node to a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// Object property.
    Property(String),
    /// Array element.
    Element,
    /// Positional tuple item.
    Index(usize),
    /// Tuple rest element.
    Rest,
    /// Union or intersection member.
    Member(usize),
    /// Record / map key.
    Key,
    /// Record / map value, or set element.
    Value,
    /// Function parameter.
    Parameter(usize),
    /// Function return type.
    Return,
    /// Promise payload.
    Awaited,
    /// Object catchall value.
    Catchall,
}

/// Ordered path of accessors below a root identifier.
///
/// Override hooks use this to build references such as `User["item"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierContext {
    root: String,
    path: Vec<Accessor>,
}

impl IdentifierContext {
    /// Creates an empty context rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: Vec::new(),
        }
    }

    /// Root identifier.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accessors from the root to the current node.
    #[must_use]
    pub fn path(&self) -> &[Accessor] {
        &self.path
    }

    /// Number of accessors on the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the context points at the root itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The innermost accessor, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Accessor> {
        self.path.last()
    }

    /// Pushes an accessor.
    pub fn push(&mut self, accessor: Accessor) {
        self.path.push(accessor);
    }

    /// Pops the innermost accessor.
    pub fn pop(&mut self) -> Option<Accessor> {
        self.path.pop()
    }

    /// Property names on the path, outermost first.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.path.iter().filter_map(|a| match a {
            Accessor::Property(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Reference to the root identifier.
    #[must_use]
    pub fn root_reference(&self) -> TypeExpr {
        TypeFactory::new().reference(self.root.clone())
    }

    /// Indexed access type that names the current node relative to the root.
    ///
    /// Returns `None` when the path crosses an accessor with no indexed-access
    /// spelling (union members, map keys, function parameters and the like).
    #[must_use]
    pub fn indexed_access(&self) -> Option<TypeExpr> {
        let f = TypeFactory::new();
        let mut expr = self.root_reference();
        for accessor in &self.path {
            let index = match accessor {
                Accessor::Property(name) => f.string_literal(name.clone()),
                Accessor::Element | Accessor::Rest => f.number(),
                Accessor::Index(i) => f.literal(LiteralType::Number(*i as f64)),
                Accessor::Catchall => f.string(),
                _ => return None,
            };
            expr = f.indexed_access(expr, index);
        }
        Some(expr)
    }
}

impl fmt::Display for IdentifierContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for accessor in &self.path {
            match accessor {
                Accessor::Property(name) => write!(f, ".{name}")?,
                Accessor::Element => f.write_str("[]")?,
                Accessor::Index(i) => write!(f, "[{i}]")?,
                Accessor::Rest => f.write_str("[...]")?,
                Accessor::Member(i) => write!(f, "|{i}")?,
                Accessor::Key => f.write_str("<key>")?,
                Accessor::Value => f.write_str("<value>")?,
                Accessor::Parameter(i) => write!(f, "(args_{i})")?,
                Accessor::Return => f.write_str("(return)")?,
                Accessor::Awaited => f.write_str("<awaited>")?,
                Accessor::Catchall => f.write_str("[*]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_item_context() -> IdentifierContext {
        let mut ctx = IdentifierContext::new("User");
        ctx.push(Accessor::Property("inventory".to_string()));
        ctx.push(Accessor::Element);
        ctx.push(Accessor::Property("name".to_string()));
        ctx
    }

    #[test]
    fn test_new_context_is_root() {
        let ctx = IdentifierContext::new("User");
        assert!(ctx.is_root());
        assert_eq!(ctx.depth(), 0);
        assert!(ctx.root_reference().is_reference_to("User"));
    }

    #[test]
    fn test_push_pop() {
        let mut ctx = IdentifierContext::new("User");
        ctx.push(Accessor::Property("item".to_string()));
        assert_eq!(ctx.last(), Some(&Accessor::Property("item".to_string())));
        assert_eq!(ctx.pop(), Some(Accessor::Property("item".to_string())));
        assert!(ctx.is_root());
    }

    #[test]
    fn test_display_path() {
        assert_eq!(user_item_context().to_string(), "User.inventory[].name");
    }

    #[test]
    fn test_indexed_access() {
        let f = TypeFactory::new();
        let expected = f.indexed_access(
            f.indexed_access(
                f.indexed_access(f.reference("User"), f.string_literal("inventory")),
                f.number(),
            ),
            f.string_literal("name"),
        );
        assert_eq!(user_item_context().indexed_access(), Some(expected));
    }

    #[test]
    fn test_indexed_access_not_representable() {
        let mut ctx = IdentifierContext::new("User");
        ctx.push(Accessor::Member(0));
        assert!(ctx.indexed_access().is_none());
    }

    #[test]
    fn test_property_names() {
        let ctx = user_item_context();
        let names: Vec<_> = ctx.property_names().collect();
        assert_eq!(names, vec!["inventory", "name"]);
    }
}
