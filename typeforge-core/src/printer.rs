//! TypeScript source printer.
//!
//! Renders [`TypeExpr`] trees and declarations to source text. Object literals are
//! printed one property per line, everything else inline.

use crate::ast::{
    Declaration, EnumDeclaration, FunctionType, LiteralType, ObjectType, TupleMember,
    TypeAlias, TypeExpr,
};
use crate::naming::is_identifier;

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "    ";

/// Printer for type expressions and declarations.
#[derive(Debug, Clone)]
pub struct Printer {
    indent: String,
    export: bool,
    depth: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Creates a printer with four-space indentation that exports declarations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            export: true,
            depth: 0,
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets whether declarations are prefixed with `export`.
    #[must_use]
    pub fn export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Prints a type expression.
    #[must_use]
    pub fn print_type(&mut self, expr: &TypeExpr) -> String {
        let mut output = String::new();
        self.write_type(expr, &mut output);
        output
    }

    /// Prints a declaration followed by a newline.
    #[must_use]
    pub fn print_declaration(&mut self, decl: &Declaration) -> String {
        match decl {
            Declaration::Alias(alias) => self.print_alias(alias),
            Declaration::Enum(decl) => self.print_enum(decl),
        }
    }

    /// Prints `type Name = T;`.
    #[must_use]
    pub fn print_alias(&mut self, alias: &TypeAlias) -> String {
        let mut output = String::new();
        if let Some(doc) = &alias.doc {
            self.write_doc(doc, &mut output);
        }
        if self.export {
            output.push_str("export ");
        }
        output.push_str(&format!("type {} = ", alias.name));
        self.write_type(&alias.ty, &mut output);
        output.push_str(";\n");
        output
    }

    /// Prints `enum Name { ... }`.
    #[must_use]
    pub fn print_enum(&mut self, decl: &EnumDeclaration) -> String {
        let mut output = String::new();
        if self.export {
            output.push_str("export ");
        }
        output.push_str(&format!("enum {} {{\n", decl.name));
        for member in &decl.members {
            output.push_str(&self.indent);
            write_property_name(&member.name, &mut output);
            output.push_str(" = ");
            write_literal(&member.value, &mut output);
            output.push_str(",\n");
        }
        output.push_str("}\n");
        output
    }

    fn write_type(&mut self, expr: &TypeExpr, output: &mut String) {
        match expr {
            TypeExpr::Keyword(keyword) => output.push_str(keyword.as_str()),
            TypeExpr::Literal(value) => write_literal(value, output),
            TypeExpr::Object(object) => self.write_object(object, output),
            TypeExpr::Array(element) => {
                self.write_operand(element, needs_parens_in_postfix(element), output);
                output.push_str("[]");
            }
            TypeExpr::Tuple(members) => self.write_tuple(members, output),
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        output.push_str(" | ");
                    }
                    self.write_operand(member, matches!(member, TypeExpr::Function(_)), output);
                }
            }
            TypeExpr::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        output.push_str(" & ");
                    }
                    let parens = matches!(member, TypeExpr::Function(_) | TypeExpr::Union(_));
                    self.write_operand(member, parens, output);
                }
            }
            TypeExpr::Function(function) => self.write_function(function, output),
            TypeExpr::Reference { name, type_args } => {
                output.push_str(name);
                if !type_args.is_empty() {
                    output.push('<');
                    for (i, arg) in type_args.iter().enumerate() {
                        if i > 0 {
                            output.push_str(", ");
                        }
                        self.write_type(arg, output);
                    }
                    output.push('>');
                }
            }
            TypeExpr::IndexedAccess { object, index } => {
                self.write_operand(object, needs_parens_in_postfix(object), output);
                output.push('[');
                self.write_type(index, output);
                output.push(']');
            }
        }
    }

    fn write_operand(&mut self, expr: &TypeExpr, parens: bool, output: &mut String) {
        if parens {
            output.push('(');
            self.write_type(expr, output);
            output.push(')');
        } else {
            self.write_type(expr, output);
        }
    }

    fn write_object(&mut self, object: &ObjectType, output: &mut String) {
        if object.properties.is_empty() && object.index.is_none() {
            output.push_str("{}");
            return;
        }

        output.push_str("{\n");
        self.depth += 1;
        for property in &object.properties {
            if let Some(doc) = &property.doc {
                self.write_doc(doc, output);
            }
            self.write_indent(output);
            write_property_name(&property.name, output);
            if property.optional {
                output.push('?');
            }
            output.push_str(": ");
            self.write_type(&property.ty, output);
            output.push_str(";\n");
        }
        if let Some(index) = &object.index {
            self.write_indent(output);
            output.push_str(&format!("[{}: ", index.key_name));
            self.write_type(&index.key, output);
            output.push_str("]: ");
            self.write_type(&index.value, output);
            output.push_str(";\n");
        }
        self.depth -= 1;
        self.write_indent(output);
        output.push('}');
    }

    fn write_tuple(&mut self, members: &[TupleMember], output: &mut String) {
        output.push('[');
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            if member.rest {
                output.push_str("...");
                self.write_operand(&member.ty, needs_parens_in_postfix(&member.ty), output);
                output.push_str("[]");
            } else {
                self.write_type(&member.ty, output);
            }
        }
        output.push(']');
    }

    fn write_function(&mut self, function: &FunctionType, output: &mut String) {
        output.push('(');
        for (i, param) in function.params.iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            if param.rest {
                output.push_str("...");
            }
            output.push_str(&param.name);
            output.push_str(": ");
            if param.rest {
                self.write_operand(&param.ty, needs_parens_in_postfix(&param.ty), output);
                output.push_str("[]");
            } else {
                self.write_type(&param.ty, output);
            }
        }
        output.push_str(") => ");
        self.write_type(&function.returns, output);
    }

    fn write_doc(&self, doc: &str, output: &mut String) {
        let doc = doc.replace("*/", "*\\/");
        let lines: Vec<&str> = doc.lines().collect();
        if lines.len() <= 1 {
            self.write_indent(output);
            output.push_str(&format!("/** {} */\n", doc.trim()));
            return;
        }
        self.write_indent(output);
        output.push_str("/**\n");
        for line in lines {
            self.write_indent(output);
            output.push_str(&format!(" * {}\n", line.trim_end()));
        }
        self.write_indent(output);
        output.push_str(" */\n");
    }

    fn write_indent(&self, output: &mut String) {
        for _ in 0..self.depth {
            output.push_str(&self.indent);
        }
    }
}

/// Prints a type expression with default settings.
#[must_use]
pub fn print_type(expr: &TypeExpr) -> String {
    Printer::new().print_type(expr)
}

/// Prints a declaration with default settings.
#[must_use]
pub fn print_declaration(decl: &Declaration) -> String {
    Printer::new().print_declaration(decl)
}

fn needs_parens_in_postfix(expr: &TypeExpr) -> bool {
    matches!(
        expr,
        TypeExpr::Union(_) | TypeExpr::Intersection(_) | TypeExpr::Function(_)
    )
}

fn write_property_name(name: &str, output: &mut String) {
    if is_identifier(name) {
        output.push_str(name);
    } else {
        write_string_literal(name, output);
    }
}

fn write_literal(value: &LiteralType, output: &mut String) {
    match value {
        LiteralType::String(s) => write_string_literal(s, output),
        LiteralType::Number(n) => {
            if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                output.push_str(&format!("{}", *n as i64));
            } else {
                output.push_str(&format!("{n}"));
            }
        }
        LiteralType::Boolean(b) => output.push_str(if *b { "true" } else { "false" }),
        LiteralType::BigInt(n) => output.push_str(&format!("{n}n")),
    }
}

fn write_string_literal(s: &str, output: &mut String) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Keyword, LiteralType};
    use crate::factory::TypeFactory;

    #[test]
    fn test_print_keywords_and_literals() {
        let f = TypeFactory::new();
        assert_eq!(print_type(&f.string()), "string");
        assert_eq!(print_type(&f.literal(42)), "42");
        assert_eq!(print_type(&f.literal(1.5)), "1.5");
        assert_eq!(print_type(&f.literal(LiteralType::BigInt(10))), "10n");
        assert_eq!(print_type(&f.string_literal("say \"hi\"")), r#""say \"hi\"""#);
    }

    #[test]
    fn test_print_array_of_union_is_parenthesized() {
        let f = TypeFactory::new();
        let expr = f.array(f.union(vec![f.string(), f.number()]));
        assert_eq!(print_type(&expr), "(string | number)[]");
    }

    #[test]
    fn test_print_object() {
        let f = TypeFactory::new();
        let mut nickname = f.property("nickname", true, f.string());
        nickname.doc = Some("Display name".to_string());
        let expr = f.object(vec![
            f.property("username", false, f.string()),
            nickname,
            f.property("first-name", false, f.string()),
        ]);
        let expected = "{\n    username: string;\n    /** Display name */\n    nickname?: string;\n    \"first-name\": string;\n}";
        assert_eq!(print_type(&expr), expected);
    }

    #[test]
    fn test_print_nested_object_indentation() {
        let f = TypeFactory::new();
        let inner = f.object(vec![f.property("id", false, f.number())]);
        let outer = f.object(vec![f.property("item", false, inner)]);
        assert_eq!(
            print_type(&outer),
            "{\n    item: {\n        id: number;\n    };\n}"
        );
    }

    #[test]
    fn test_print_index_signature() {
        let f = TypeFactory::new();
        let expr = f.object_with_index(Vec::new(), f.number());
        assert_eq!(print_type(&expr), "{\n    [key: string]: number;\n}");
    }

    #[test]
    fn test_print_tuple_function_generic() {
        let f = TypeFactory::new();
        let tuple = f.tuple(vec![f.string(), f.number()], Some(f.boolean()));
        assert_eq!(print_type(&tuple), "[string, number, ...boolean[]]");

        let mut rest = f.param("args_1", f.number());
        rest.rest = true;
        let function = f.function(
            vec![f.param("args_0", f.string()), rest],
            f.keyword(Keyword::Void),
        );
        assert_eq!(
            print_type(&function),
            "(args_0: string, ...args_1: number[]) => void"
        );

        let map = f.generic("Map", vec![f.string(), f.number()]);
        assert_eq!(print_type(&map), "Map<string, number>");
    }

    #[test]
    fn test_print_union_of_function_is_parenthesized() {
        let f = TypeFactory::new();
        let function = f.function(Vec::new(), f.string());
        let expr = f.union(vec![function, f.keyword(Keyword::Undefined)]);
        assert_eq!(print_type(&expr), "(() => string) | undefined");
    }

    #[test]
    fn test_print_indexed_access() {
        let f = TypeFactory::new();
        let expr = f.indexed_access(f.reference("User"), f.string_literal("item"));
        assert_eq!(print_type(&expr), r#"User["item"]"#);
    }

    #[test]
    fn test_print_alias_and_enum() {
        let f = TypeFactory::new();
        let alias = f.type_alias("Name", f.string());
        assert_eq!(
            print_declaration(&alias.into()),
            "export type Name = string;\n"
        );

        let decl = f.enum_declaration(
            "Color",
            [("Red", LiteralType::from("red")), ("Blue", LiteralType::from(2))],
        );
        let printed = Printer::new().export(false).print_enum(&decl);
        assert_eq!(printed, "enum Color {\n    Red = \"red\",\n    Blue = 2,\n}\n");
    }

    #[test]
    fn test_doc_comment_terminator_is_escaped() {
        let f = TypeFactory::new();
        let mut alias = f.type_alias("Glob", f.string());
        alias.doc = Some("matches src/*/lib.rs".to_string());
        assert_eq!(
            print_declaration(&alias.into()),
            "/** matches src/*\\/lib.rs */\nexport type Glob = string;\n"
        );

        let mut property = f.property("pattern", false, f.string());
        property.doc = Some("first */\nsecond".to_string());
        let printed = print_type(&f.object(vec![property]));
        assert_eq!(
            printed,
            "{\n    /**\n     * first *\\/\n     * second\n     */\n    pattern: string;\n}"
        );
    }
}
