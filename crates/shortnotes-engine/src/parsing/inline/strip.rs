use super::{
    cursor::Cursor,
    kinds::{Comment, Tag},
};

const LINE_BREAK_TAG: &[u8] = b"<br";

/// Removes tags and comments from an HTML fragment and decodes character
/// entities.
///
/// `<br>` becomes a newline. A tag that never closes swallows the rest of the
/// input. Whitespace is left as authored.
pub fn strip_tags(html: &str) -> String {
    let mut cur = Cursor::new(html, 0);
    let mut out = String::with_capacity(html.len());
    let mut text_start = 0;

    while cur.seek(&[Tag::OPEN]) {
        let tag_start = cur.i;
        out.push_str(&html[text_start..tag_start]);

        if cur.starts_with(Comment::OPEN) {
            cur.bump_n(Comment::OPEN.len());
            if cur.seek(Comment::CLOSE) {
                cur.bump_n(Comment::CLOSE.len());
            }
            text_start = cur.i;
            continue;
        }

        let starts_tag = html
            .as_bytes()
            .get(tag_start + 1)
            .is_some_and(|&b| Tag::starts_tag(b));
        if !starts_tag {
            // A literal `<`, kept as text.
            cur.bump();
            text_start = tag_start;
            continue;
        }

        let is_line_break = cur.starts_with_ignore_case(LINE_BREAK_TAG)
            && html
                .as_bytes()
                .get(tag_start + LINE_BREAK_TAG.len())
                .is_some_and(|&b| b.is_ascii_whitespace() || b == b'>' || b == b'/');
        if !skip_tag(&mut cur) {
            text_start = html.len();
            break;
        }
        if is_line_break {
            out.push('\n');
        }
        text_start = cur.i;
    }
    out.push_str(&html[text_start.min(html.len())..]);

    html_escape::decode_html_entities(&out).into_owned()
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips markup and trims: the plain inline text of a fragment.
pub fn inline_text(html: &str) -> String {
    strip_tags(html).trim().to_string()
}

/// Moves the cursor past the `>` that ends the tag at the cursor, skipping
/// over quoted attribute values. Returns false if the tag never closes.
fn skip_tag(cur: &mut Cursor<'_>) -> bool {
    cur.bump();
    while let Some(b) = cur.bump() {
        match b {
            Tag::CLOSE => return true,
            b'"' | b'\'' => {
                if !cur.seek(&[b]) {
                    return false;
                }
                cur.bump();
            }
            _ => {}
        }
    }
    false
}
