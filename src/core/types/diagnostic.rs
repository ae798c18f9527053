use serde::Serialize;

use super::{Span, Target};

/// Insertion of literal text at a byte offset. Fixes never delete or replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub byte_offset: u32,
    pub text: String,
}

impl Fix {
    pub fn insert_before(span: &Span, text: &str) -> Self {
        Self {
            byte_offset: span.start,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub message_id: &'static str,
    pub message: String,
    pub span: Span,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(rule: &'static str, message_id: &'static str, message: &str, span: Span) -> Self {
        Self {
            rule,
            message_id,
            message: message.to_string(),
            span,
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// One-line `path:line:col  message  [rule]` summary
    pub fn display(&self, target: &Target) -> String {
        format!(
            "{}:{}  {}  [{}]",
            target.display(),
            self.span.display(),
            self.message,
            self.rule
        )
    }
}
