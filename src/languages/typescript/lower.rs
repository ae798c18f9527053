//! Lowering from the tree-sitter TypeScript tree to the typed class model.
//!
//! Lowering is total: shapes it does not recognise become `Other`, and a
//! parameter or field without a usable name is never field-backed.

use std::str::FromStr;

use tree_sitter::Node;

use crate::types::Span;
use crate::types::class::{
    Accessibility, ClassDeclaration, ClassMember, Expression, FieldDeclaration, MethodDefinition,
    MethodKind, Parameter, ParameterProperty, Statement,
};
use crate::utils::{has_token, named_children_without_comments, node_text};

use super::syntax::{CONSTRUCTOR_KEY, fields, nodes, tokens};

/// Lower a `class_declaration` or `abstract_class_declaration` node
pub fn lower_class(node: Node, source: &str) -> Option<ClassDeclaration> {
    let body = node.child_by_field_name(fields::BODY)?;
    let name = node
        .child_by_field_name(fields::NAME)
        .map(|n| node_text(&n, source).to_string());
    let members = named_children_without_comments(&body)
        .into_iter()
        .map(|member| lower_member(member, source))
        .collect();
    Some(ClassDeclaration {
        name,
        span: Span::of(&node),
        members,
    })
}

fn lower_member(node: Node, source: &str) -> ClassMember {
    let lowered = match node.kind() {
        nodes::METHOD_DEFINITION => lower_method(node, source).map(ClassMember::Method),
        nodes::PUBLIC_FIELD_DEFINITION => lower_field(node, source).map(ClassMember::Field),
        _ => None,
    };
    lowered.unwrap_or_else(|| ClassMember::Other(Span::of(&node)))
}

fn lower_method(node: Node, source: &str) -> Option<MethodDefinition> {
    let name = node.child_by_field_name(fields::NAME)?;
    let key = property_key(&name, source);

    let kind = if has_token(&node, tokens::GET) {
        MethodKind::Get
    } else if has_token(&node, tokens::SET) {
        MethodKind::Set
    } else if key == CONSTRUCTOR_KEY && !has_token(&node, tokens::STATIC) {
        MethodKind::Constructor
    } else {
        MethodKind::Method
    };

    let params = node
        .child_by_field_name(fields::PARAMETERS)
        .map(|list| {
            named_children_without_comments(&list)
                .into_iter()
                .map(|param| lower_parameter(param, source))
                .collect()
        })
        .unwrap_or_default();

    let body = node
        .child_by_field_name(fields::BODY)
        .filter(|block| block.kind() == nodes::STATEMENT_BLOCK && !block.is_missing())
        .map(|block| lower_block(&block, source, 0));

    Some(MethodDefinition {
        key,
        kind,
        params,
        body,
        span: Span::of(&node),
    })
}

/// Method or field key, with quotes stripped from string keys
fn property_key(name: &Node, source: &str) -> String {
    let text = node_text(name, source);
    if name.kind() == nodes::STRING {
        text.trim_matches(|c| c == '"' || c == '\'').to_string()
    } else {
        text.to_string()
    }
}

fn accessibility_of(node: &Node, source: &str) -> Accessibility {
    let mut cursor = node.walk();
    let modifier = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == nodes::ACCESSIBILITY_MODIFIER);
    modifier
        .and_then(|m| Accessibility::from_str(node_text(&m, source).trim()).ok())
        .unwrap_or(Accessibility::None)
}

fn lower_parameter(node: Node, source: &str) -> Parameter {
    let span = Span::of(&node);
    if node.kind() != nodes::REQUIRED_PARAMETER && node.kind() != nodes::OPTIONAL_PARAMETER {
        return Parameter::Plain { name: None, span };
    }

    let pattern = node
        .child_by_field_name(fields::PATTERN)
        .filter(|p| p.kind() == nodes::IDENTIFIER);
    let accessibility = accessibility_of(&node, source);
    let readonly = has_token(&node, tokens::READONLY);

    match pattern {
        Some(ident) if accessibility != Accessibility::None || readonly => {
            Parameter::Property(ParameterProperty {
                name: node_text(&ident, source).to_string(),
                accessibility,
                readonly,
                span,
                name_span: Span::of(&ident),
            })
        }
        _ => Parameter::Plain {
            name: pattern.map(|ident| node_text(&ident, source).to_string()),
            span,
        },
    }
}

fn lower_field(node: Node, source: &str) -> Option<FieldDeclaration> {
    let name = node.child_by_field_name(fields::NAME)?;
    let accessibility = match name.kind() {
        nodes::PRIVATE_PROPERTY_IDENTIFIER => Accessibility::Private,
        nodes::PROPERTY_IDENTIFIER => accessibility_of(&node, source),
        // String and computed keys cannot be reached through `this.<name>`
        _ => return None,
    };
    Some(FieldDeclaration {
        name: node_text(&name, source).to_string(),
        accessibility,
        readonly: has_token(&node, tokens::READONLY),
        is_static: has_token(&node, tokens::STATIC),
        span: Span::of(&node),
        name_span: Span::of(&name),
    })
}

/// Nesting below which statements and expressions are kept as `Other`.
/// Bounds recursion on generated code such as long `else if` chains.
const MAX_NESTING: usize = 64;

fn lower_block(node: &Node, source: &str, depth: usize) -> Vec<Statement> {
    named_children_without_comments(node)
        .into_iter()
        .map(|statement| lower_statement(statement, source, depth))
        .collect()
}

fn lower_statement(node: Node, source: &str, depth: usize) -> Statement {
    let span = Span::of(&node);
    if depth >= MAX_NESTING {
        return Statement::Other(span);
    }
    let depth = depth + 1;
    match node.kind() {
        nodes::EXPRESSION_STATEMENT => match first_named(&node) {
            Some(expr) => Statement::Expression(lower_expression(expr, source, 0)),
            None => Statement::Other(span),
        },
        nodes::STATEMENT_BLOCK => Statement::Block(lower_block(&node, source, depth)),
        nodes::IF_STATEMENT => {
            let Some(consequence) = node.child_by_field_name(fields::CONSEQUENCE) else {
                return Statement::Other(span);
            };
            // The alternative field holds an `else_clause` wrapping the statement
            let alternative = node
                .child_by_field_name(fields::ALTERNATIVE)
                .and_then(|clause| first_named(&clause))
                .map(|statement| Box::new(lower_statement(statement, source, depth)));
            Statement::If {
                consequence: Box::new(lower_statement(consequence, source, depth)),
                alternative,
            }
        }
        nodes::FOR_STATEMENT
        | nodes::FOR_IN_STATEMENT
        | nodes::WHILE_STATEMENT
        | nodes::DO_STATEMENT => match node.child_by_field_name(fields::BODY) {
            Some(body) => Statement::Loop {
                body: Box::new(lower_statement(body, source, depth)),
            },
            None => Statement::Other(span),
        },
        _ => Statement::Other(span),
    }
}

fn lower_expression(node: Node, source: &str, depth: usize) -> Expression {
    let span = Span::of(&node);
    if depth >= MAX_NESTING {
        return Expression::Other(span);
    }
    let depth = depth + 1;
    match node.kind() {
        nodes::ASSIGNMENT_EXPRESSION | nodes::AUGMENTED_ASSIGNMENT_EXPRESSION => {
            match node.child_by_field_name(fields::LEFT) {
                Some(left) => Expression::Assignment {
                    left: Box::new(lower_expression(left, source, depth)),
                },
                None => Expression::Other(span),
            }
        }
        nodes::MEMBER_EXPRESSION => {
            match (
                node.child_by_field_name(fields::OBJECT),
                node.child_by_field_name(fields::PROPERTY),
            ) {
                (Some(object), Some(property))
                    if property.kind() == nodes::PROPERTY_IDENTIFIER
                        || property.kind() == nodes::PRIVATE_PROPERTY_IDENTIFIER =>
                {
                    Expression::Member {
                        object: Box::new(lower_expression(object, source, depth)),
                        property: node_text(&property, source).to_string(),
                    }
                }
                _ => Expression::Other(span),
            }
        }
        nodes::PARENTHESIZED_EXPRESSION => match first_named(&node) {
            Some(inner) => lower_expression(inner, source, depth),
            None => Expression::Other(span),
        },
        nodes::THIS => Expression::This,
        _ => Expression::Other(span),
    }
}

fn first_named<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    named_children_without_comments(node).into_iter().next()
}
