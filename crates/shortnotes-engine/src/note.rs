use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    parsing::{ParseError, parse_note},
    render::{TitleLocale, TitleScan, format_title},
};

/// Title given to a note until it is published.
pub const PLACEHOLDER_TITLE: &str = "Note";
/// Title the editor gives a freshly created, unsaved note.
pub const AUTO_DRAFT_TITLE: &str = "Auto Draft";

const SLUG_ID_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteStatus {
    #[default]
    Draft,
    Publish,
}

/// A note as handed over for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub slug: String,
    pub status: NoteStatus,
    /// Block markup.
    pub content: String,
    pub created_at_gmt: DateTime<Utc>,
}

/// Host settings used when titling published notes.
pub struct NoteSettings<'a> {
    pub date_format: &'a str,
    pub time_format: &'a str,
    pub locale: &'a dyn TitleLocale,
    pub scan: TitleScan,
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Failed to parse note content: {0}")]
    Content(#[from] ParseError),
}

impl Note {
    /// A new, unsaved draft.
    pub fn new(content: impl Into<String>, created_at_gmt: DateTime<Utc>) -> Self {
        Self {
            title: AUTO_DRAFT_TITLE.to_string(),
            slug: String::new(),
            status: NoteStatus::Draft,
            content: content.into(),
            created_at_gmt,
        }
    }

    /// Fills in title and slug before the note is stored.
    ///
    /// An auto-draft gets the placeholder title and a generated slug. A
    /// published note gets a title derived from its content.
    pub fn prepare_for_insert(mut self, settings: &NoteSettings<'_>) -> Result<Self, NoteError> {
        if self.title == AUTO_DRAFT_TITLE {
            self.title = PLACEHOLDER_TITLE.to_string();
            self.slug = generate_slug(self.created_at_gmt);
        }

        if self.status == NoteStatus::Publish {
            let doc = parse_note(&self.content)?;
            self.title = format_title(
                &doc.blocks,
                self.created_at_gmt,
                settings.date_format,
                settings.time_format,
                settings.locale,
                settings.scan,
            );
            log::debug!("titled published note {:?}: {}", self.slug, self.title);
        }

        Ok(self)
    }
}

/// A short, unique-enough slug: four hex digits of a random UUID followed by
/// the Unix timestamp.
pub fn generate_slug(at: DateTime<Utc>) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}{}", &id[..SLUG_ID_CHARS], at.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EnglishLocale;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 11, 26, 17, 5, 0).unwrap()
    }

    fn settings(locale: &EnglishLocale) -> NoteSettings<'_> {
        NoteSettings {
            date_format: EnglishLocale::DEFAULT_DATE_FORMAT,
            time_format: EnglishLocale::DEFAULT_TIME_FORMAT,
            locale,
            scan: TitleScan::Continue,
        }
    }

    #[test]
    fn slug_is_four_hex_chars_and_timestamp() {
        let slug = generate_slug(created());
        assert_eq!(slug.len(), 4 + "1669482300".len());
        assert!(slug[..4].chars().all(|c| c.is_ascii_hexdigit()));
        assert!(slug.ends_with("1669482300"));
    }

    #[test]
    fn auto_draft_gets_placeholder_and_slug() {
        let locale = EnglishLocale::default();
        let note = Note::new("", created())
            .prepare_for_insert(&settings(&locale))
            .unwrap();
        assert_eq!(note.title, PLACEHOLDER_TITLE);
        assert!(note.slug.ends_with("1669482300"));
    }

    #[test]
    fn draft_with_title_is_untouched() {
        let locale = EnglishLocale::default();
        let mut note = Note::new("<!-- wp:paragraph --><p>hi</p><!-- /wp:paragraph -->", created());
        note.title = "Kept".into();
        note.slug = "abcd1".into();
        let prepared = note.clone().prepare_for_insert(&settings(&locale)).unwrap();
        assert_eq!(prepared, note);
    }

    #[test]
    fn published_note_gets_formatted_title() {
        let locale = EnglishLocale::default();
        let mut note = Note::new(
            "<!-- wp:paragraph --><p>Hello from the road</p><!-- /wp:paragraph -->",
            created(),
        );
        note.status = NoteStatus::Publish;
        let note = note.prepare_for_insert(&settings(&locale)).unwrap();
        assert_eq!(note.title, "Note: Hello from the road");
        assert!(!note.slug.is_empty());
    }

    #[test]
    fn published_note_with_broken_markup_fails() {
        let locale = EnglishLocale::default();
        let mut note = Note::new("<!-- wp:paragraph --><p>oops</p>", created());
        note.status = NoteStatus::Publish;
        let err = note.prepare_for_insert(&settings(&locale)).unwrap_err();
        assert!(matches!(err, NoteError::Content(ParseError::UnterminatedBlock { .. })));
    }
}
