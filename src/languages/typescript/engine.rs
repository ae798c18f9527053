use std::sync::OnceLock;

use log::debug;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

use crate::core::engine::scope::{ScopeResolver, SyntacticScopes};
use crate::core::engine::traits::{LintRule, RuleContext};
use crate::core::trace::{TraceSink, trace_from_env};
use crate::types::class::ClassDeclaration;
use crate::types::{Diagnostic, Dialect, LintError, LintResult, Target};
use crate::utils::visit_nodes_with_cursor;

use super::lower::lower_class;
use super::syntax::nodes;

static TS_LANGUAGE: OnceLock<TsLanguage> = OnceLock::new();
static TSX_LANGUAGE: OnceLock<TsLanguage> = OnceLock::new();

/// Node kinds analysed as class declarations
const CLASS_KINDS: &[&str] = &[nodes::CLASS_DECLARATION, nodes::ABSTRACT_CLASS_DECLARATION];

/// Class declarations, plus `export default class { ... }` which the grammar
/// parses as a class expression. Other class expressions are not analysed.
fn is_class_declaration(node: &Node) -> bool {
    if CLASS_KINDS.contains(&node.kind()) {
        return true;
    }
    node.is_named()
        && node.kind() == nodes::CLASS
        && node
            .parent()
            .is_some_and(|parent| parent.kind() == nodes::EXPORT_STATEMENT)
}

/// Parses TypeScript sources and runs lint rules over every class declaration
pub struct TypeScriptEngine {
    scopes: Box<dyn ScopeResolver>,
}

impl Default for TypeScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptEngine {
    pub fn new() -> Self {
        Self::with_scopes(SyntacticScopes)
    }

    /// Engine that resolves method scopes through a custom resolver
    pub fn with_scopes<S: ScopeResolver + 'static>(scopes: S) -> Self {
        Self {
            scopes: Box::new(scopes),
        }
    }

    pub fn language(dialect: Dialect) -> TsLanguage {
        match dialect {
            Dialect::TypeScript => TS_LANGUAGE
                .get_or_init(|| tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
                .clone(),
            Dialect::Tsx => TSX_LANGUAGE
                .get_or_init(|| tree_sitter_typescript::LANGUAGE_TSX.into())
                .clone(),
        }
    }

    pub fn parse(&self, source: &str, dialect: Dialect) -> LintResult<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&Self::language(dialect))
            .map_err(|e| LintError::Language {
                dialect,
                message: e.to_string(),
            })?;
        parser.parse(source, None).ok_or_else(|| LintError::Parse {
            path: "<source>".into(),
        })
    }

    /// Every class declaration in the source, lowered, in document order
    pub fn classes(&self, source: &str, dialect: Dialect) -> LintResult<Vec<ClassDeclaration>> {
        let tree = self.parse(source, dialect)?;
        let root = tree.root_node();

        let mut classes = Vec::new();
        let mut cursor = root.walk();
        visit_nodes_with_cursor(root, &mut cursor, &mut |node| {
            if is_class_declaration(&node) {
                match lower_class(node, source) {
                    Some(class) => classes.push(class),
                    None => debug!(
                        "Skipping class without a body at line {}",
                        node.start_position().row + 1
                    ),
                }
            }
        });
        Ok(classes)
    }

    /// Lint a target with the given rules. The trace sink is picked from the
    /// environment afresh for every class.
    pub fn lint_source(&self, target: &Target, rules: &[&dyn LintRule]) -> LintResult<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        for class in self.classes_of(target)? {
            let trace = trace_from_env();
            diagnostics.extend(self.check_class(&class, rules, trace.as_ref()));
        }
        diagnostics.sort_by_key(|d| d.span.start);
        Ok(diagnostics)
    }

    /// Lint a target, sending every trace event to `trace`
    pub fn lint_source_with_trace(
        &self,
        target: &Target,
        rules: &[&dyn LintRule],
        trace: &dyn TraceSink,
    ) -> LintResult<Vec<Diagnostic>> {
        let mut diagnostics = Vec::new();
        for class in self.classes_of(target)? {
            diagnostics.extend(self.check_class(&class, rules, trace));
        }
        diagnostics.sort_by_key(|d| d.span.start);
        Ok(diagnostics)
    }

    fn classes_of(&self, target: &Target) -> LintResult<Vec<ClassDeclaration>> {
        self.classes(&target.text, target.dialect)
            .map_err(|e| match e {
                LintError::Parse { .. } => LintError::Parse {
                    path: target.path.clone(),
                },
                other => other,
            })
    }

    fn check_class(
        &self,
        class: &ClassDeclaration,
        rules: &[&dyn LintRule],
        trace: &dyn TraceSink,
    ) -> Vec<Diagnostic> {
        let ctx = RuleContext {
            scopes: self.scopes.as_ref(),
            trace,
        };
        rules
            .iter()
            .flat_map(|rule| rule.check_class(class, &ctx))
            .collect()
    }
}
