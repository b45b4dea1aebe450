use crate::parsing::{error::ParseError, span::Span};

use super::{
    classify::Token,
    kinds::Marker,
    types::{Block, BlockKind, InnerContent},
};

/// Deepest block nesting that is opened as a block. Markers beyond it are
/// kept as literal HTML of the innermost open block.
pub const MAX_DEPTH: usize = 32;

/// A block whose start marker has been seen but not its end marker.
#[derive(Debug)]
struct Frame {
    name: String,
    attrs: Option<String>,
    offset: usize,
    inner_html: String,
    inner_blocks: Vec<Block>,
    inner_content: Vec<InnerContent>,
}

impl Frame {
    fn open(name: String, attrs: Option<String>, offset: usize) -> Self {
        Self {
            name,
            attrs,
            offset,
            inner_html: String::new(),
            inner_blocks: vec![],
            inner_content: vec![],
        }
    }

    fn push_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
        match self.inner_content.last_mut() {
            Some(InnerContent::Html(last)) => last.push_str(html),
            _ => self.inner_content.push(InnerContent::Html(html.to_string())),
        }
    }

    fn push_block(&mut self, block: Block) {
        self.inner_content
            .push(InnerContent::Block(self.inner_blocks.len()));
        self.inner_blocks.push(block);
    }

    fn close(self) -> Block {
        Block {
            kind: BlockKind::from_name(&self.name),
            name: self.name,
            attrs: self.attrs,
            inner_html: self.inner_html,
            inner_blocks: self.inner_blocks,
            inner_content: self.inner_content,
        }
    }
}

/// Phase 2 of block parsing: a stack machine that turns [`Token`]s into a
/// block tree.
pub struct BlockBuilder<'a> {
    src: &'a str,
    stack: Vec<Frame>,
    /// Names of start markers kept as text because of [`MAX_DEPTH`]; their
    /// end markers must be kept as text too.
    suppressed: Vec<String>,
    freeform: String,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            stack: vec![],
            suppressed: vec![],
            freeform: String::new(),
            out: vec![],
        }
    }

    pub fn push(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Html(span) => self.push_html(span),
            Token::Marker {
                marker: Marker::Open { name, attrs },
                span,
            } => {
                if self.stack.len() >= MAX_DEPTH {
                    log::warn!("block `{name}` at byte {} exceeds nesting depth {MAX_DEPTH}", span.start);
                    self.suppressed.push(name);
                    self.push_html(span);
                } else {
                    self.flush_freeform();
                    self.stack.push(Frame::open(name, attrs, span.start));
                }
            }
            Token::Marker {
                marker: Marker::Void { name, attrs },
                span,
            } => {
                if self.stack.len() >= MAX_DEPTH {
                    self.push_html(span);
                } else {
                    self.emit(Frame::open(name, attrs, span.start).close());
                }
            }
            Token::Marker {
                marker: Marker::Close { name },
                span,
            } => self.close(name, span)?,
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<Block>, ParseError> {
        if let Some(frame) = self.stack.pop() {
            return Err(ParseError::UnterminatedBlock {
                name: frame.name,
                offset: frame.offset,
            });
        }
        self.flush_freeform();
        Ok(self.out)
    }

    fn close(&mut self, name: String, span: Span) -> Result<(), ParseError> {
        if self.suppressed.last() == Some(&name) {
            self.suppressed.pop();
            self.push_html(span);
            return Ok(());
        }

        match self.stack.last() {
            Some(top) if top.name == name => {
                if let Some(frame) = self.stack.pop() {
                    self.emit(frame.close());
                }
                Ok(())
            }
            Some(top) if self.stack.iter().any(|f| f.name == name) => {
                // Closing an outer block while `top` is still open.
                Err(ParseError::UnterminatedBlock {
                    name: top.name.clone(),
                    offset: top.offset,
                })
            }
            _ => {
                log::warn!("end marker for `{name}` at byte {} has no start", span.start);
                self.push_html(span);
                Ok(())
            }
        }
    }

    /// Attaches a finished block to its parent, or to the output at top level.
    fn emit(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(parent) => parent.push_block(block),
            None => {
                self.flush_freeform();
                self.out.push(block);
            }
        }
    }

    fn push_html(&mut self, span: Span) {
        let html = span.slice(self.src);
        match self.stack.last_mut() {
            Some(frame) => frame.push_html(html),
            None => self.freeform.push_str(html),
        }
    }

    /// Emits pending top-level HTML as a freeform block, unless it is only
    /// whitespace.
    fn flush_freeform(&mut self) {
        let html = std::mem::take(&mut self.freeform);
        if !html.trim().is_empty() {
            self.out.push(Block::freeform(html));
        }
    }
}
