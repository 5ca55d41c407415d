//! Style tags assigned to spans of text.
//!
//! The vocabulary is closed and mirrors the CodeMirror token classes an editor
//! theme knows how to color; a tag carries no further structure.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Keyword,
    Builtin,
    Def,
    Meta,
    Variable,
    Variable2,
    Variable3,
    Atom,
    Tag,
    Comment,
    String,
    Number,
    Operator,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 13] = [
        Style::Keyword,
        Style::Builtin,
        Style::Def,
        Style::Meta,
        Style::Variable,
        Style::Variable2,
        Style::Variable3,
        Style::Atom,
        Style::Tag,
        Style::Comment,
        Style::String,
        Style::Number,
        Style::Operator,
    ];

    /// The class name an editor theme uses for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Builtin => "builtin",
            Style::Def => "def",
            Style::Meta => "meta",
            Style::Variable => "variable",
            Style::Variable2 => "variable-2",
            Style::Variable3 => "variable-3",
            Style::Atom => "atom",
            Style::Tag => "tag",
            Style::Comment => "comment",
            Style::String => "string",
            Style::Number => "number",
            Style::Operator => "operator",
        }
    }

    /// Styles whose matched text, rather than the style itself, is remembered
    /// as the last token.
    ///
    /// Disambiguation rules compare against words ("concrete", "of", "import"),
    /// which only ever come out of these styles.
    pub fn is_identifier_like(self) -> bool {
        matches!(self, Style::Keyword | Style::Atom | Style::Tag)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown style {s:?}"))
    }
}
