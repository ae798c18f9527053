//! Typed model of a TypeScript class declaration.
//!
//! Rules never look at tree-sitter node kinds. The TypeScript lowering pass
//! turns each class into these closed enums, and anything it does not
//! recognise becomes an `Other` variant carrying only its span.

use serde::Serialize;
use strum::{Display, EnumString};

use super::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// `None` for `export default class { ... }`
    pub name: Option<String>,
    pub span: Span,
    pub members: Vec<ClassMember>,
}

impl ClassDeclaration {
    pub fn methods(&self) -> impl Iterator<Item = &MethodDefinition> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Method(method) => Some(method),
            ClassMember::Field(_) | ClassMember::Other(_) => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Field(field) => Some(field),
            ClassMember::Method(_) | ClassMember::Other(_) => None,
        })
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodDefinition> {
        self.methods()
            .filter(|method| method.kind == MethodKind::Constructor)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Method(MethodDefinition),
    Field(FieldDeclaration),
    /// Signatures, index signatures, static blocks and anything unrecognised
    Other(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    pub key: String,
    pub kind: MethodKind,
    pub params: Vec<Parameter>,
    /// `None` when the parser recovered a method without a statement block
    pub body: Option<Vec<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// Ordinary parameter, or a destructuring pattern; never field-backed
    Plain { name: Option<String>, span: Span },
    Property(ParameterProperty),
}

/// Constructor parameter that also declares a same-named instance field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterProperty {
    pub name: String,
    pub accessibility: Accessibility,
    pub readonly: bool,
    /// Whole parameter, decorators and modifiers included
    pub span: Span,
    /// Binding identifier only
    pub name_span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub accessibility: Accessibility,
    pub readonly: bool,
    pub is_static: bool,
    pub span: Span,
    pub name_span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Private,
    Protected,
    Public,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(Expression),
    Block(Vec<Statement>),
    If {
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    },
    /// `for`, `for..in`, `for..of`, `while` and `do..while`
    Loop { body: Box<Statement> },
    Other(Span),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Plain and compound assignment alike; only the target is kept
    Assignment { left: Box<Expression> },
    /// Non-computed member access, `object.property` or `object.#property`
    Member {
        object: Box<Expression>,
        property: String,
    },
    This,
    Other(Span),
}

impl Expression {
    /// Member name when this is `this.<name>`
    pub fn self_member_name(&self) -> Option<&str> {
        match self {
            Expression::Member { object, property } if matches!(**object, Expression::This) => {
                Some(property)
            }
            _ => None,
        }
    }
}
