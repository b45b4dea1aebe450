use std::sync::OnceLock;

use regex::Regex;

/// The remote status a note replies to. `status_id == 0` means none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReplyReference {
    pub status_id: u64,
}

impl ReplyReference {
    pub const NONE: Self = Self { status_id: 0 };

    pub fn is_reply(self) -> bool {
        self.status_id != 0
    }
}

/// Extracts the status id from a `https://<host>/@<handle>/<digits>` URL.
///
/// Pure shape matching: the host is never contacted. Any other shape, and
/// ids too large for a `u64`, give [`ReplyReference::NONE`].
pub fn extract_reply_id(url: &str) -> ReplyReference {
    static STATUS_URL: OnceLock<Regex> = OnceLock::new();
    let status_url = STATUS_URL.get_or_init(|| {
        Regex::new(r"^https://[^/?#\s]+/@[^/?#\s]+/(\d+)/?$").expect("Invalid status URL regex")
    });

    let status_id = status_url
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
        .unwrap_or(0);

    ReplyReference { status_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://jeremyfelt.com", 0)]
    #[case("https://indieweb.social/@jeremyfelt", 0)]
    #[case("https://indieweb.social/@jeremyfelt/109408328908231044", 109408328908231044)]
    #[case("https://indieweb.social/@jeremyfelt/109408328908231044/", 109408328908231044)]
    #[case("https://indieweb.social/@jeremyfelt@mastodon.social/42", 42)]
    #[case("https://indieweb.social/@jeremyfelt/notes", 0)]
    #[case("https://indieweb.social/@jeremyfelt/123abc", 0)]
    #[case("https://indieweb.social/jeremyfelt/123", 0)]
    #[case("http://indieweb.social/@jeremyfelt/123", 0)]
    #[case("https://indieweb.social/@jeremyfelt/123?reply=1", 0)]
    #[case("https://indieweb.social/@jeremyfelt/123/activity", 0)]
    #[case("", 0)]
    fn extracts_status_ids(#[case] url: &str, #[case] expected: u64) {
        assert_eq!(extract_reply_id(url).status_id, expected);
    }

    #[test]
    fn largest_u64_survives() {
        let url = format!("https://host.example/@me/{}", u64::MAX);
        assert_eq!(extract_reply_id(&url).status_id, u64::MAX);
    }

    #[test]
    fn overflowing_id_is_no_reply() {
        let url = "https://host.example/@me/18446744073709551616";
        assert_eq!(extract_reply_id(url), ReplyReference::NONE);
    }

    #[test]
    fn is_reply_reflects_sentinel() {
        assert!(!ReplyReference::NONE.is_reply());
        assert!(ReplyReference { status_id: 7 }.is_reply());
    }
}
