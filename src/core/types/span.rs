use serde::Serialize;
use tree_sitter::Node;

/// Byte range of a syntax node plus the 0-based line/column of its start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn of(node: &Node) -> Self {
        let position = node.start_position();
        Self {
            start: node.start_byte() as u32,
            end: node.end_byte() as u32,
            line: position.row as u32,
            column: position.column as u32,
        }
    }

    /// Text covered by this span
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }

    /// 0-based column counted in UTF-16 code units, as editors and SARIF expect.
    /// Falls back to the byte column when the span does not fit `source`.
    pub fn utf16_column(&self, source: &str) -> u32 {
        let start = self.start as usize;
        let line_start = start.saturating_sub(self.column as usize);
        source
            .get(line_start..start)
            .map(|prefix| prefix.encode_utf16().count() as u32)
            .unwrap_or(self.column)
    }

    /// 1-based `line:column` suitable for editor links
    pub fn display(&self) -> String {
        format!("{}:{}", self.line + 1, self.column + 1)
    }
}
