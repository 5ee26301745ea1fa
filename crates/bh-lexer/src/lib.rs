pub mod lexer;
pub mod matcher;
pub mod tag;
pub mod token;

pub use lexer::Tokenizer;
pub use matcher::{find_tags, TagMatch};
pub use tag::TagKind;
pub use token::{TagToken, Text, Token};

/// Default limit of tags recognized in one input.
///
/// Tag-shaped text beyond the limit is kept as plain text.
pub const DEFAULT_MAX_TAGS: usize = 200;
