//! Outline value types
//!
//! Fields are always serialized; empty ones are dropped afterwards by
//! [`crate::strip::strip`].

use serde::Serialize;

/// Structural outline of one Python module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PythonOutline {
    pub docstring: Option<String>,
    pub imports: Vec<Import>,
    pub classes: Vec<ClassOutline>,
    pub functions: Vec<FunctionOutline>,
}

/// An imported name, qualified by its source module for `from` imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub name: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassOutline {
    pub name: String,
    pub line: usize,
    pub docstring: Option<String>,
    /// Functions defined directly in the class body.
    pub methods: Vec<FunctionOutline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionOutline {
    pub name: String,
    pub line: usize,
    pub docstring: Option<String>,
}

/// A Markdown ATX heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    pub line: usize,
}
