use pulldown_cmark::{html, Options, Parser};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Renders a markdown segment to an HTML fragment. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// Posts are trusted content: raw HTML in the markdown is passed through
/// as-is and the output is not sanitised.
pub fn to_html(markdown: &[u8]) -> String {
    let mut out = String::new();
    if markdown.is_empty() {
        return out;
    }
    let text = String::from_utf8_lossy(markdown);
    html::push_html(&mut out, Parser::new_ext(&text, options()));
    out
}
