use std::ops::Range;

use crate::tag::TagKind;

/// All types of tokens.
///
/// Tokens are units of bbcode, borrowing from the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text.
    Text(Text<'a>),

    /// Tag head or tail.
    Tag(TagToken<'a>),
}

impl<'a> Token<'a> {
    /// Byte range in source.
    pub fn span(&self) -> Range<usize> {
        match self {
            Token::Text(v) => v.span.clone(),
            Token::Tag(v) => v.span.clone(),
        }
    }
}

/// Run of text between tags, never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text<'a> {
    pub content: &'a str,

    pub span: Range<usize>,
}

/// Tag in one of the forms:
///
/// * `[$name]`
/// * `[/$name]`
/// * `[$name=$value]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken<'a> {
    /// Tag name in lowercase.
    pub name: String,

    /// Is tail or not.
    pub closing: bool,

    /// Optional attribute value, case kept.
    pub value: Option<&'a str>,

    /// Tag text as written, including brackets.
    pub raw: &'a str,

    pub span: Range<usize>,
}

impl<'a> TagToken<'a> {
    pub fn kind(&self) -> TagKind {
        TagKind::from_name(&self.name)
    }
}
