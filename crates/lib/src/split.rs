//! Splits a raw post document into its metadata block, preview segment and
//! body.
//!
//! A document with front matter looks like this:
//!
//! ```text
//! <!--META--
//! Title: Hello
//! Created: 2018-04-15
//! --END-->
//! The opening paragraph.
//! <!--BREAK-->
//! The rest of the post.
//! ```
//!
//! The preview is everything between the end marker and the break marker.
//! The body is everything after the end marker, break marker included, so the
//! preview is always a leading part of the body.

pub const META_START: &str = "<!--META--";
pub const META_END: &str = "--END-->";
pub const BREAK: &str = "<!--BREAK-->";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("no content in post")]
    EmptyContent,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub metadata: &'a [u8],
    pub preview: &'a [u8],
    pub body: &'a [u8],
}

impl<'a> Segments<'a> {
    fn body_only(data: &'a [u8]) -> Self {
        Segments {
            body: data,
            ..Segments::default()
        }
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Documents without a complete metadata block are not an error: the whole
/// input comes back untouched as the body.
pub fn split(data: &[u8]) -> Result<Segments<'_>, SplitError> {
    if data.is_empty() {
        return Err(SplitError::EmptyContent);
    }

    let Some(rest) = data.strip_prefix(META_START.as_bytes()) else {
        return Ok(Segments::body_only(data));
    };

    // The end marker is searched for after the start marker only, so the two
    // can never overlap.
    let Some(end) = find(rest, META_END.as_bytes()) else {
        return Ok(Segments::body_only(data));
    };

    let metadata = rest[..end].trim_ascii();
    let body = &rest[end + META_END.len()..];
    let preview = find(body, BREAK.as_bytes())
        .map(|i| body[..i].trim_ascii())
        .unwrap_or_default();

    Ok(Segments {
        metadata,
        preview,
        body: body.trim_ascii(),
    })
}
