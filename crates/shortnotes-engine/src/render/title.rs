use chrono::{
    DateTime, FixedOffset, Offset, Utc,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::parsing::{
    blocks::{Block, BlockKind},
    inline::inline_text,
};

/// Longest title, label included, before the sub-title is cut.
pub const MAX_TITLE_LENGTH: usize = 50;
pub const ELLIPSIS: char = '…';

/// Locale-dependent pieces of a title, supplied by the host.
pub trait TitleLocale {
    /// Formats a creation time with the host's date and time patterns.
    fn format_date_time(&self, at: DateTime<Utc>, date_format: &str, time_format: &str) -> String;

    fn note_label(&self) -> &str {
        "Note"
    }

    fn image_prefix(&self) -> &str {
        "Image posted on"
    }

    fn gallery_prefix(&self) -> &str {
        "Images posted on"
    }
}

/// English labels with `chrono` strftime patterns, rendered in a fixed
/// offset from UTC.
#[derive(Debug, Clone, Copy)]
pub struct EnglishLocale {
    pub offset: FixedOffset,
}

impl EnglishLocale {
    pub const DEFAULT_DATE_FORMAT: &'static str = "%B %-d, %Y";
    pub const DEFAULT_TIME_FORMAT: &'static str = "%-I:%M%P";

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for EnglishLocale {
    fn default() -> Self {
        Self::with_offset(Utc.fix())
    }
}

impl TitleLocale for EnglishLocale {
    fn format_date_time(&self, at: DateTime<Utc>, date_format: &str, time_format: &str) -> String {
        let local = at.with_timezone(&self.offset);
        format!(
            "{} at {}",
            local.format(valid_or(date_format, Self::DEFAULT_DATE_FORMAT)),
            local.format(valid_or(time_format, Self::DEFAULT_TIME_FORMAT)),
        )
    }
}

/// Falls back to `default` when `pattern` has a bad specifier, which would
/// otherwise make formatting panic.
fn valid_or<'a>(pattern: &'a str, default: &'a str) -> &'a str {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        log::warn!("invalid date/time pattern {pattern:?}, using {default:?}");
        default
    } else {
        pattern
    }
}

/// How far [`format_title`] scans once it has found a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleScan {
    /// Keep scanning: a later image or gallery still prefixes the title.
    #[default]
    Continue,
    StopAtFirstParagraph,
}

/// Builds a `Note: …` title from the top-level blocks.
///
/// The sub-title starts as the formatted creation time. The first paragraph
/// replaces it with its (possibly truncated) text, unless that text is empty. The first image
/// and first gallery each prefix it, unless scanning stopped at the
/// paragraph.
pub fn format_title(
    blocks: &[Block],
    created_at_gmt: DateTime<Utc>,
    date_format: &str,
    time_format: &str,
    locale: &dyn TitleLocale,
    scan: TitleScan,
) -> String {
    let mut sub_title = locale.format_date_time(created_at_gmt, date_format, time_format);
    let max_chars = MAX_TITLE_LENGTH.saturating_sub(locale.note_label().chars().count());

    let (mut seen_paragraph, mut seen_image, mut seen_gallery) = (false, false, false);
    for block in blocks {
        match block.kind {
            BlockKind::Paragraph if !seen_paragraph => {
                seen_paragraph = true;
                let text = inline_text(&block.inner_html);
                // An empty paragraph leaves the timestamp in place.
                if !text.is_empty() {
                    sub_title = truncate(&text, max_chars);
                }
                if scan == TitleScan::StopAtFirstParagraph {
                    break;
                }
            }
            BlockKind::Image if !seen_image => {
                seen_image = true;
                sub_title = format!("{} {sub_title}", locale.image_prefix());
            }
            BlockKind::Gallery if !seen_gallery => {
                seen_gallery = true;
                sub_title = format!("{} {sub_title}", locale.gallery_prefix());
            }
            BlockKind::Paragraph
            | BlockKind::Image
            | BlockKind::Gallery
            | BlockKind::Quote
            | BlockKind::Verse
            | BlockKind::Other => {}
        }
    }

    format!("{}: {sub_title}", locale.note_label())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push(ELLIPSIS);
    cut
}
