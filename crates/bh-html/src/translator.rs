use std::ops::ControlFlow;

use bh_lexer::{TagKind, TagToken, Token, Tokenizer};
use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::escape::escape_html;
use crate::options::Options;
use crate::validate::validate_url;

const CENTER_OPEN: &str = r#"<span style="text-align:center;">"#;
const CENTER_CLOSE: &str = "</span>";

/// Result of translating tokens.
#[derive(Debug, Default)]
pub(crate) struct Translation {
    /// Html pieces in order, join them to get the html.
    pub(crate) fragments: Vec<String>,

    pub(crate) errors: Vec<ConvertError>,
}

/// Translate all tokens in `tokenizer` into html.
pub(crate) fn translate(tokenizer: &mut Tokenizer<'_>, options: &Options) -> Translation {
    let mut translator = Translator {
        options,
        output: Translation {
            fragments: Vec::with_capacity(32),
            errors: vec![],
        },
        link_open: false,
    };

    while let Some(token) = tokenizer.next() {
        trace!(?token, "translating");
        let flow = match token {
            Token::Text(text) => {
                translator.emit(escape_html(text.content));
                ControlFlow::Continue(())
            }
            Token::Tag(tag) => translator.dispatch(&tag, tokenizer),
        };
        if flow.is_break() {
            break;
        }
    }

    translator.output
}

/// Translation state on one input.
///
/// `[b]` and `[i]` are plain toggles, no stack is kept to check nesting.
struct Translator<'o> {
    options: &'o Options,

    output: Translation,

    /// Opened `<a>` not closed yet.
    link_open: bool,
}

impl<'o> Translator<'o> {
    fn emit(&mut self, fragment: impl Into<String>) {
        self.output.fragments.push(fragment.into());
    }

    fn fail(&mut self, error: ConvertError) {
        debug!("{error}");
        self.output.errors.push(error);
    }

    fn kind_of(&self, tag: &TagToken<'_>) -> TagKind {
        match tag.kind() {
            TagKind::Center if !self.options.center => TagKind::Unknown,
            kind => kind,
        }
    }

    /// Handle a tag.
    ///
    /// Break when the run shall stop.
    fn dispatch(&mut self, tag: &TagToken<'_>, tokenizer: &mut Tokenizer<'_>) -> ControlFlow<()> {
        match self.kind_of(tag) {
            TagKind::Bold => self.toggle(tag, "<strong>", "</strong>"),
            TagKind::Italic => self.toggle(tag, "<em>", "</em>"),
            TagKind::Center => self.toggle(tag, CENTER_OPEN, CENTER_CLOSE),
            TagKind::Link if tag.closing => self.close_link(tag),
            TagKind::Link => self.open_link(tag, tokenizer),
            // Image is finished in its head, nothing to do with the tail.
            TagKind::Image if tag.closing => {}
            TagKind::Image => return self.image(tag, tokenizer),
            TagKind::Unknown => self.unknown(tag),
        }

        ControlFlow::Continue(())
    }

    fn toggle(&mut self, tag: &TagToken<'_>, open: &str, close: &str) {
        if tag.closing {
            self.emit(close);
        } else {
            self.emit(open);
        }
    }

    /// `[url=$URL]`, or `[url]` taking the next text as both url and label.
    fn open_link(&mut self, tag: &TagToken<'_>, tokenizer: &mut Tokenizer<'_>) {
        let (candidate, labeled) = match tag.value {
            Some(value) => (value, true),
            None => match tokenizer.next() {
                Some(Token::Text(text)) => (text.content, false),
                _ => {
                    self.fail(ConvertError::IncompleteTag(tag.name.clone()));
                    return;
                }
            },
        };

        match validate_url(candidate) {
            Ok(url) => {
                let url = escape_html(&url);
                self.link_open = true;
                self.emit(format!(r#"<a href="{url}">"#));
                if !labeled {
                    self.emit(url);
                }
            }
            Err(e) => self.fail(e),
        }
    }

    fn close_link(&mut self, tag: &TagToken<'_>) {
        if self.link_open {
            self.link_open = false;
            self.emit("</a>");
        } else {
            self.fail(ConvertError::IncompleteTag(tag.name.clone()));
        }
    }

    /// `[img]$URL`.
    ///
    /// Peek the next token as url. Another tag there is handed back to the tokenizer so it is
    /// translated as usual.
    fn image(&mut self, tag: &TagToken<'_>, tokenizer: &mut Tokenizer<'_>) -> ControlFlow<()> {
        tokenizer.begin();

        match tokenizer.next() {
            None => {
                tokenizer.commit();
                self.fail(ConvertError::IncompleteTag(tag.name.clone()));
                ControlFlow::Break(())
            }
            Some(Token::Tag(next)) => {
                tokenizer.rollback();
                self.fail(ConvertError::InvalidUrl(next.name));
                ControlFlow::Continue(())
            }
            Some(Token::Text(text)) => {
                tokenizer.commit();
                match validate_url(text.content) {
                    Ok(url) => self.emit(format!(r#"<img src="{}"/>"#, escape_html(&url))),
                    Err(e) => self.fail(e),
                }
                ControlFlow::Continue(())
            }
        }
    }

    fn unknown(&mut self, tag: &TagToken<'_>) {
        if self.options.report_unknown_tags {
            self.fail(ConvertError::UnknownTag(tag.name.clone()));
        } else {
            trace!(tag = tag.raw, "drop unknown tag");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Translation {
        let mut tokenizer = Tokenizer::new(source, usize::MAX);
        let translation = translate(&mut tokenizer, &Options::default());
        assert_eq!(tokenizer.depth(), 0, "unbalanced checkpoints");
        translation
    }

    #[test]
    fn test_fragments_in_order() {
        let translation = run("a[b]b[/b]");
        assert_eq!(translation.fragments, vec!["a", "<strong>", "b", "</strong>"]);
        assert!(translation.errors.is_empty());
    }

    #[test]
    fn test_image_rollback_hands_tag_back() {
        let translation = run("[img][b]x[/b][/img]");
        assert_eq!(translation.fragments, run("[b]x[/b]").fragments);
        assert_eq!(
            translation.errors,
            vec![ConvertError::InvalidUrl("b".to_owned())]
        );
    }

    #[test]
    fn test_image_at_end_stops() {
        let translation = run("x[img]");
        assert_eq!(translation.fragments, vec!["x"]);
        assert_eq!(
            translation.errors,
            vec![ConvertError::IncompleteTag("img".to_owned())]
        );
    }

    #[test]
    fn test_bare_link_consumes_tag() {
        let translation = run("[url][b]x");
        assert_eq!(translation.fragments, vec!["x"]);
        assert_eq!(
            translation.errors,
            vec![ConvertError::IncompleteTag("url".to_owned())]
        );
    }

    #[test]
    fn test_link_fragments() {
        let translation = run("[url]http://a.com[/url]");
        assert_eq!(
            translation.fragments,
            vec![r#"<a href="http://a.com">"#, "http://a.com", "</a>"]
        );
    }
}
