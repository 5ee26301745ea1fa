use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Regex to match all forms of tags.
///
/// * `[name]` and `[/name]`: name is letters, `|` or `*`.
/// * `[name=value]`: name is letters, value is anything but `]` and white spaces.
///
/// White spaces (ASCII only: tab, line feed, form feed, carriage return and space) are
/// allowed before the closing `]`.
static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\[(?:(?<slash>/?)(?<name>[a-z|*]+)|(?<attr>[a-z]+)=(?<value>[^\]\t\n\x0C\r ]+))[\t\n\x0C\r ]*\]",
        )
        .unwrap()
    })
}

/// A tag-shaped range found in source.
///
/// All ranges are byte offsets into the source the match was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatch {
    /// The whole tag, from `[` to `]`.
    pub span: Range<usize>,

    /// In `[/name]` form or not.
    pub closing: bool,

    /// Tag name, case not changed.
    pub name: Range<usize>,

    /// Attribute value in `[name=value]` form.
    pub value: Option<Range<usize>>,
}

/// Find at most `max_tags` tags in `source`, left to right and never overlapping.
pub fn find_tags(source: &str, max_tags: usize) -> Vec<TagMatch> {
    let mut matches = Vec::new();

    for captures in tag_regex().captures_iter(source) {
        if matches.len() >= max_tags {
            debug!(max_tags, "tag limit reached, keep the rest as text");
            break;
        }

        let Some(whole) = captures.get(0) else {
            continue;
        };

        let tag = if let Some(name) = captures.name("name") {
            TagMatch {
                span: whole.range(),
                closing: captures.name("slash").is_some_and(|x| !x.is_empty()),
                name: name.range(),
                value: None,
            }
        } else if let Some(attr) = captures.name("attr") {
            TagMatch {
                span: whole.range(),
                closing: false,
                name: attr.range(),
                value: captures.name("value").map(|x| x.range()),
            }
        } else {
            continue;
        };

        matches.push(tag);
    }

    matches
}
