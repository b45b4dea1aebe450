use super::{
    cursor::Cursor,
    kinds::{Anchor, Tag},
};

/// A hyperlink target found in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The decoded `href` value. May be empty.
    pub target: String,
    /// Byte offset of the anchor's `<` in the scanned string.
    pub position: usize,
}

/// Lazy iterator over the anchors of an HTML fragment, in document order.
///
/// The scan is finite and restartable: a clone resumes from the same point,
/// and [`extract_links`] can be called again on the same fragment.
#[derive(Clone)]
pub struct Links<'a> {
    cur: Cursor<'a>,
    /// Index of the last `>`, `"` and `'` in the input. A tag or quoted value
    /// opened after these can never terminate, so it fails without scanning.
    last_close: Option<usize>,
    last_double: Option<usize>,
    last_single: Option<usize>,
}

/// Returns the anchors of `html`, in document order.
///
/// Anchor text is discarded. An anchor with an empty `href` yields an empty
/// target; an anchor with no `href` at all yields nothing. An anchor tag
/// still open at the end of input ends the scan. Runs in time linear in the
/// length of `html`.
pub fn extract_links(html: &str) -> Links<'_> {
    Links {
        cur: Cursor::new(html, 0),
        last_close: html.rfind('>'),
        last_double: html.rfind('"'),
        last_single: html.rfind('\''),
    }
}

enum AnchorScan {
    NotAnchor,
    Unterminated,
    Anchor { href: Option<String> },
}

impl Iterator for Links<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        while self.cur.seek(&[Tag::OPEN]) {
            let position = self.cur.pos();
            if self.last_close.is_none_or(|close| close < self.cur.i) {
                // No `>` left anywhere: nothing further can be a tag.
                self.cur.bump_n(self.cur.s.len());
                return None;
            }

            match self.scan_anchor() {
                AnchorScan::Anchor { href: Some(target) } => {
                    return Some(Link { target, position });
                }
                AnchorScan::Anchor { href: None } => {}
                AnchorScan::Unterminated => {
                    log::debug!("skipping unterminated anchor at byte {position}");
                    if self.cur.eof() {
                        // The tag runs to the end of input and swallows it.
                        return None;
                    }
                    // Resume after the quote that never closes.
                    self.cur.bump();
                }
                AnchorScan::NotAnchor => {
                    self.cur.bump();
                }
            }
        }
        None
    }
}

impl<'a> Links<'a> {
    /// Scans an anchor start tag at the cursor, leaving the cursor after its
    /// closing `>` on success.
    fn scan_anchor(&mut self) -> AnchorScan {
        if !self.cur.starts_with_ignore_case(Anchor::OPEN) {
            return AnchorScan::NotAnchor;
        }
        let after_name = self.cur.s.as_bytes().get(self.cur.i + Anchor::OPEN.len());
        if !after_name.is_some_and(|&b| Anchor::is_name_end(b)) {
            return AnchorScan::NotAnchor;
        }
        self.cur.bump_n(Anchor::OPEN.len());

        let mut href = None;
        loop {
            self.cur.skip_whitespace();
            match self.cur.peek() {
                None => return AnchorScan::Unterminated,
                Some(Tag::CLOSE) => {
                    self.cur.bump();
                    return AnchorScan::Anchor { href };
                }
                Some(Tag::END_MARK) => {
                    self.cur.bump();
                    continue;
                }
                Some(_) => {}
            }

            let name_start = self.cur.i;
            while self
                .cur
                .peek()
                .is_some_and(|b| !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/'))
            {
                self.cur.bump();
            }
            let name = self.cur.text_from(name_start);
            if name.is_empty() {
                // Stray `=`: skip it.
                self.cur.bump();
                continue;
            }

            self.cur.skip_whitespace();
            let value = if self.cur.peek() == Some(b'=') {
                self.cur.bump();
                self.cur.skip_whitespace();
                match self.scan_value() {
                    Some(value) => value,
                    None => return AnchorScan::Unterminated,
                }
            } else {
                ""
            };

            if href.is_none() && name.eq_ignore_ascii_case(Anchor::HREF) {
                href = Some(html_escape::decode_html_entities(value).into_owned());
            }
        }
    }

    /// Scans a quoted or unquoted attribute value. `None` if a quote never
    /// closes.
    fn scan_value(&mut self) -> Option<&'a str> {
        let s: &'a str = self.cur.s;
        match self.cur.peek() {
            Some(q @ (b'"' | b'\'')) => {
                let last = if q == b'"' {
                    self.last_double
                } else {
                    self.last_single
                };
                if last.is_none_or(|last| last <= self.cur.i) {
                    return None;
                }
                self.cur.bump();
                let start = self.cur.i;
                self.cur.seek(&[q]);
                let value = &s[start..self.cur.i];
                self.cur.bump();
                Some(value)
            }
            _ => {
                let start = self.cur.i;
                while self
                    .cur
                    .peek()
                    .is_some_and(|b| !b.is_ascii_whitespace() && b != Tag::CLOSE)
                {
                    self.cur.bump();
                }
                Some(&s[start..self.cur.i])
            }
        }
    }
}
