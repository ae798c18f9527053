use crate::types::class::{FieldDeclaration, ParameterProperty};

/// Name rule that scopes the check to dependency-injected services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNamePattern {
    needle: String,
}

impl ServiceNamePattern {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }

    /// Case-insensitive substring match
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl Default for ServiceNamePattern {
    fn default() -> Self {
        Self::new("service")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    ParameterProperty,
    ClassField,
}

/// Syntax node a candidate was declared by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationSite<'a> {
    Parameter(&'a ParameterProperty),
    Field(&'a FieldDeclaration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub site: DeclarationSite<'a>,
}

impl<'a> Candidate<'a> {
    pub fn parameter(param: &'a ParameterProperty) -> Self {
        Self {
            name: &param.name,
            site: DeclarationSite::Parameter(param),
        }
    }

    pub fn field(field: &'a FieldDeclaration) -> Self {
        Self {
            name: &field.name,
            site: DeclarationSite::Field(field),
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self.site {
            DeclarationSite::Parameter(_) => CandidateKind::ParameterProperty,
            DeclarationSite::Field(_) => CandidateKind::ClassField,
        }
    }
}

/// Fields believed write-once, in declaration order, for one class.
///
/// Names are unique: a second insert under the same name is ignored.
#[derive(Debug, Default)]
pub struct CandidateSet<'a> {
    entries: Vec<Candidate<'a>>,
}

impl<'a> CandidateSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already tracked
    pub fn insert(&mut self, candidate: Candidate<'a>) -> bool {
        if self.contains(candidate.name) {
            return false;
        }
        self.entries.push(candidate);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<Candidate<'a>> {
        let index = self.entries.iter().position(|c| c.name == name)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.entries.iter().map(|c| c.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for CandidateSet<'a> {
    type Item = Candidate<'a>;
    type IntoIter = std::vec::IntoIter<Candidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
