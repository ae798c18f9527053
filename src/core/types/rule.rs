use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Problem,
    Suggestion,
    Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FixKind {
    Code,
    Whitespace,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleMessage {
    pub id: &'static str,
    pub text: &'static str,
}

/// Static description of a lint rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub recommended: bool,
    pub fixable: Option<FixKind>,
    pub messages: &'static [RuleMessage],
}

impl RuleMeta {
    pub fn message(&self, id: &str) -> Option<&'static str> {
        self.messages.iter().find(|m| m.id == id).map(|m| m.text)
    }
}
