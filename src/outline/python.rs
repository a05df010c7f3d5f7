//! Python module outline built on the tree-sitter Python grammar
//!
//! Only the module's top-level statements are visited. Class bodies are
//! entered one level deep to collect methods; nothing nested further is
//! reported.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use super::Outliner;
use super::docstring::{docstring_from_literal, docstring_from_literals};
use super::types::{ClassOutline, FunctionOutline, Import, PythonOutline};
use crate::error::{ExplorerError, Result};
use crate::string_utils::normalize_newlines;

/// Extracts imports, classes, functions and docstrings from Python files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonOutliner;

impl PythonOutliner {
    pub fn new() -> Self {
        Self
    }
}

impl Outliner for PythonOutliner {
    type Output = PythonOutline;

    fn outline_file(&self, path: &Path) -> Result<PythonOutline> {
        let source = std::fs::read_to_string(path)?;
        outline_source(&source)
    }

    fn name(&self) -> &'static str {
        "python"
    }
}

/// Parse Python source text and build its outline.
///
/// Source containing a syntax error is rejected with the line of the first
/// error the parser recovered from. Python 2 `print`/`exec` statements and a
/// `return` outside any function are rejected the same way.
pub fn outline_source(source: &str) -> Result<PythonOutline> {
    let source = normalize_newlines(source);
    let tree = parse(&source)?;
    let root = tree.root_node();

    if root.has_error() {
        let line = first_error_line(root).unwrap_or(1);
        return Err(ExplorerError::Parse { line });
    }
    if let Some(line) = first_rejected_statement(root, false) {
        return Err(ExplorerError::Parse { line });
    }

    let mut outline = PythonOutline {
        docstring: body_docstring(root, &source),
        ..Default::default()
    };

    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        match statement.kind() {
            "import_statement" => collect_plain_imports(statement, &source, &mut outline.imports),
            "import_from_statement" | "future_import_statement" => {
                collect_from_imports(statement, &source, &mut outline.imports)
            }
            _ => match definition(statement) {
                Some(def) if def.kind() == "class_definition" => {
                    outline.classes.push(class_outline(def, &source));
                }
                Some(def) if def.kind() == "function_definition" => {
                    outline.functions.push(function_outline(def, &source));
                }
                _ => {}
            },
        }
    }

    Ok(outline)
}

fn parse(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ExplorerError::Grammar(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ExplorerError::Grammar("parser returned no tree".to_string()))
}

/// 1-based line of the first ERROR or MISSING node, depth-first.
fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            if let Some(line) = first_error_line(child) {
                return Some(line);
            }
        }
    }
    None
}

/// 1-based line of the first statement the grammar accepts but Python 3
/// does not compile.
fn first_rejected_statement(node: Node, in_function: bool) -> Option<usize> {
    match node.kind() {
        "print_statement" | "exec_statement" => return Some(line_of(node)),
        "return_statement" if !in_function => return Some(line_of(node)),
        // expressions never contain statements
        "expression_statement" => return None,
        _ => {}
    }
    let in_function = match node.kind() {
        "function_definition" => true,
        "class_definition" => false,
        _ => in_function,
    };
    let mut cursor = node.walk();
    node
        .named_children(&mut cursor)
        .find_map(|child| first_rejected_statement(child, in_function))
}

/// The class or function a statement defines, looking through decorators.
fn definition(node: Node) -> Option<Node> {
    match node.kind() {
        "class_definition" | "function_definition" => Some(node),
        "decorated_definition" => node.child_by_field_name("definition"),
        _ => None,
    }
}

fn class_outline(node: Node, source: &str) -> ClassOutline {
    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if let Some(def) = definition(member).filter(|d| d.kind() == "function_definition") {
                methods.push(function_outline(def, source));
            }
        }
    }

    ClassOutline {
        name: field_text(node, "name", source),
        line: line_of(node),
        docstring: node
            .child_by_field_name("body")
            .and_then(|body| body_docstring(body, source)),
        methods,
    }
}

fn function_outline(node: Node, source: &str) -> FunctionOutline {
    FunctionOutline {
        name: field_text(node, "name", source),
        line: line_of(node),
        docstring: node
            .child_by_field_name("body")
            .and_then(|body| body_docstring(body, source)),
    }
}

/// Docstring of a module or block: its first statement, when that statement
/// is a lone string literal.
fn body_docstring(body: Node, source: &str) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;
    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }

    let literal = first.named_child(0)?;
    match literal.kind() {
        "string" => docstring_from_literal(node_text(literal, source)),
        "concatenated_string" => {
            let mut cursor = literal.walk();
            let pieces: Vec<&str> = literal
                .named_children(&mut cursor)
                .filter(|piece| piece.kind() == "string")
                .map(|piece| node_text(piece, source))
                .collect();
            docstring_from_literals(pieces)
        }
        _ => None,
    }
}

/// `import a.b as c, d` yields `a.b` and `d`.
fn collect_plain_imports(node: Node, source: &str, imports: &mut Vec<Import>) {
    let line = line_of(node);
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        imports.push(Import {
            name: imported_name(name, source),
            line,
        });
    }
}

/// `from m import x, y as z` yields `m.x` and `m.y`. Relative imports keep
/// only the module part after the dots, and a bare `from . import x` yields
/// `x`.
fn collect_from_imports(node: Node, source: &str, imports: &mut Vec<Import>) {
    let line = line_of(node);
    let module = if node.kind() == "future_import_statement" {
        Some("__future__".to_string())
    } else {
        node.child_by_field_name("module_name")
            .and_then(|module| module_name(module, source))
    };
    let qualify = |name: String| match &module {
        Some(module) => format!("{module}.{name}"),
        None => name,
    };

    let mut cursor = node.walk();
    let names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .map(|name| imported_name(name, source))
        .collect();

    if names.is_empty() {
        let mut cursor = node.walk();
        let wildcard = node
            .named_children(&mut cursor)
            .any(|child| child.kind() == "wildcard_import");
        if wildcard {
            imports.push(Import {
                name: qualify("*".to_string()),
                line,
            });
        }
        return;
    }

    for name in names {
        imports.push(Import {
            name: qualify(name),
            line,
        });
    }
}

fn module_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "dotted_name" => Some(dotted_name(node, source)),
        "relative_import" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .find(|child| child.kind() == "dotted_name")
                .map(|dotted| dotted_name(dotted, source))
        }
        _ => Some(node_text(node, source).to_string()),
    }
}

/// Name of an import target, ignoring any `as` alias.
fn imported_name(node: Node, source: &str) -> String {
    match node.kind() {
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|name| dotted_name(name, source))
            .unwrap_or_default(),
        _ => dotted_name(node, source),
    }
}

/// Join the identifiers of a dotted name, dropping any whitespace the
/// source put around the dots.
fn dotted_name(node: Node, source: &str) -> String {
    if node.kind() != "dotted_name" {
        return node_text(node, source).to_string();
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|part| node_text(part, source))
        .collect::<Vec<_>>()
        .join(".")
}

fn field_text(node: Node, field: &str, source: &str) -> String {
    node.child_by_field_name(field)
        .map(|child| node_text(child, source).to_string())
        .unwrap_or_default()
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}
