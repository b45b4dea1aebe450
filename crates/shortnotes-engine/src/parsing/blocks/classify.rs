use crate::parsing::{
    error::ParseError,
    inline::{cursor::Cursor, kinds::Comment},
    span::Span,
};

use super::kinds::{BlockComment, Marker};

/// A piece of block markup, classified without reference to its context.
///
/// This is phase 1 of block parsing: the classifier only splits the input
/// into HTML runs and block markers; nesting is the builder's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// HTML (including ordinary and garbled comments).
    Html(Span),
    /// A block marker comment, with the span of the whole comment.
    Marker { marker: Marker, span: Span },
}

/// Splits block markup into [`Token`]s in source order.
pub struct MarkerClassifier<'a> {
    cur: Cursor<'a>,
    /// Start of the HTML run not yet emitted.
    html_start: usize,
    /// A marker found while an HTML run was still pending.
    pending: Option<Token>,
    failed: bool,
}

impl<'a> MarkerClassifier<'a> {
    pub fn new(markup: &'a str) -> Self {
        Self {
            cur: Cursor::new(markup, 0),
            html_start: 0,
            pending: None,
            failed: false,
        }
    }

    fn html_until(&mut self, end: usize) -> Option<Token> {
        let span = Span::new(self.html_start, end);
        self.html_start = end;
        (!span.is_empty()).then_some(Token::Html(span))
    }
}

impl Iterator for MarkerClassifier<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.failed {
            return None;
        }

        while self.cur.seek(Comment::OPEN) {
            let start = self.cur.i;
            self.cur.bump_n(Comment::OPEN.len());
            let body_start = self.cur.i;

            if !self.cur.seek(Comment::CLOSE) {
                if BlockComment::starts_open_marker(&self.cur.s[body_start..]) {
                    self.failed = true;
                    return Some(Err(ParseError::UnterminatedMarker { offset: start }));
                }
                // An unterminated ordinary comment or end marker: the rest is
                // plain HTML.
                break;
            }

            let body = self.cur.text_from(body_start);
            self.cur.bump_n(Comment::CLOSE.len());

            match BlockComment::parse(body) {
                Some(marker) => {
                    let token = Token::Marker {
                        marker,
                        span: Span::new(start, self.cur.i),
                    };
                    let html = self.html_until(start);
                    self.html_start = self.cur.i;
                    return match html {
                        Some(html) => {
                            self.pending = Some(token);
                            Some(Ok(html))
                        }
                        None => Some(Ok(token)),
                    };
                }
                None => {
                    if BlockComment::looks_like_marker(body) {
                        log::warn!("treating garbled block marker at byte {start} as HTML");
                    }
                }
            }
        }

        let end = self.cur.s.len();
        self.html_until(end).map(Ok)
    }
}
