use tracing::trace;

use crate::matcher::{find_tags, TagMatch};
use crate::token::{TagToken, Text, Token};

/// Restartable tokenizer on bbcode source.
///
/// Tags are located once on construction, tokens are produced lazily on each call to
/// [Iterator::next]: the text before a tag (if any), then the tag itself.
///
/// Position can be saved with [Tokenizer::begin] and later kept with [Tokenizer::commit] or
/// restored with [Tokenizer::rollback], so tokens read in between are produced again.
pub struct Tokenizer<'a> {
    source: &'a str,

    /// All tags found in `source`.
    matches: Vec<TagMatch>,

    /// Saved cursors.
    checkpoints: Vec<usize>,

    /// Current slot in the virtual sequence `text, tag, text, tag, ..., text`.
    ///
    /// Even slots are text before the tag at `cursor / 2`, or the trailing text when
    /// `cursor / 2` is the count of tags. Odd slots are tags.
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Build a tokenizer recognizing no more than `max_tags` tags in `source`.
    pub fn new(source: &'a str, max_tags: usize) -> Self {
        let matches = find_tags(source, max_tags);
        trace!(tags = matches.len(), "tokenizer ready");
        Self {
            source,
            matches,
            checkpoints: vec![],
            cursor: 0,
        }
    }

    /// Count of checkpoints not committed or rolled back yet.
    pub fn depth(&self) -> usize {
        self.checkpoints.len()
    }

    /// Save the current position.
    pub fn begin(&mut self) {
        trace!(cursor = self.cursor, "begin checkpoint");
        self.checkpoints.push(self.cursor);
    }

    /// Drop the latest checkpoint, keep tokens consumed since then as consumed.
    pub fn commit(&mut self) {
        debug_assert!(!self.checkpoints.is_empty(), "commit without checkpoint");
        trace!(cursor = self.cursor, "commit checkpoint");
        self.checkpoints.pop();
    }

    /// Drop the latest checkpoint and move back to it.
    pub fn rollback(&mut self) {
        debug_assert!(!self.checkpoints.is_empty(), "rollback without checkpoint");
        if let Some(cursor) = self.checkpoints.pop() {
            trace!(from = self.cursor, to = cursor, "rollback checkpoint");
            self.cursor = cursor;
        }
    }

    fn slots(&self) -> usize {
        self.matches.len() * 2 + 1
    }

    /// Text between the tag before `index` (or the beginning) and tag `index` (or the end).
    fn collect_text(&self, index: usize) -> Option<Text<'a>> {
        let source = self.source;
        let start = match index {
            0 => 0,
            v => self.matches[v - 1].span.end,
        };
        let end = self
            .matches
            .get(index)
            .map_or(source.len(), |x| x.span.start);

        if start >= end {
            return None;
        }

        Some(Text {
            content: &source[start..end],
            span: start..end,
        })
    }

    fn collect_tag(&self, index: usize) -> TagToken<'a> {
        let source = self.source;
        let tag = &self.matches[index];
        TagToken {
            name: source[tag.name.clone()].to_lowercase(),
            closing: tag.closing,
            value: tag.value.clone().map(|x| &source[x]),
            raw: &source[tag.span.clone()],
            span: tag.span.clone(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.slots() {
            let slot = self.cursor;
            self.cursor += 1;

            let index = slot / 2;
            if slot % 2 == 0 {
                // Empty text is skipped.
                if let Some(text) = self.collect_text(index) {
                    return Some(Token::Text(text));
                }
            } else {
                return Some(Token::Tag(self.collect_tag(index)));
            }
        }

        None
    }
}
