//! Video identifier extraction
//!
//! Turns pasted text (a bare token or one of several link shapes) into the
//! canonical 11-character video token.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Which input shape produced a token
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SourceShape {
    /// The input already was a canonical token
    BareToken,
    /// `youtube.com/watch?v=<token>`
    Watch,
    /// `youtu.be/<token>`
    ShortLink,
    /// `youtube.com/embed/<token>`
    Embed,
    /// `youtube.com/v/<token>`
    Legacy,
    /// `youtube.com/shorts/<token>`
    Shorts,
}

/// A token together with the shape it was found in
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceMatch {
    pub token: String,
    pub shape: SourceShape,
}

static BARE_TOKEN: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9_-]{11}$"));

// Tried in order; the first pattern that matches wins.
static URL_SHAPES: Lazy<Vec<(SourceShape, Regex)>> = Lazy::new(|| {
    vec![
        (SourceShape::Watch, compile(r"youtube\.com/watch\?v=([^&\n?#]+)")),
        (SourceShape::ShortLink, compile(r"youtu\.be/([^&\n?#]+)")),
        (SourceShape::Embed, compile(r"youtube\.com/embed/([^&\n?#]+)")),
        (SourceShape::Legacy, compile(r"youtube\.com/v/([^&\n?#]+)")),
        (SourceShape::Shorts, compile(r"youtube\.com/shorts/([^&\n?#]+)")),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("source patterns are valid regex literals")
}

/// Find the video token in `input`, reporting which shape matched
pub fn match_source(input: &str) -> Option<SourceMatch> {
    let input = input.trim();

    if BARE_TOKEN.is_match(input) {
        return Some(SourceMatch {
            token: input.to_string(),
            shape: SourceShape::BareToken,
        });
    }

    URL_SHAPES.iter().find_map(|(shape, pattern)| {
        pattern.captures(input).and_then(|caps| caps.get(1)).map(|token| SourceMatch {
            token: token.as_str().to_string(),
            shape: *shape,
        })
    })
}

/// Extract the canonical video token from `input`
///
/// Returns `None` when no supported shape matches; callers report that as
/// an invalid source reference.
pub fn extract_source_ref(input: &str) -> Option<String> {
    match_source(input).map(|m| m.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_token_returned_unchanged() {
        assert_eq!(extract_source_ref("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
        assert_eq!(extract_source_ref("a_b-c_d-e_f"), Some("a_b-c_d-e_f".to_string()));
    }

    #[test]
    fn test_bare_token_wrong_length_rejected() {
        assert_eq!(extract_source_ref("dQw4w9WgXc"), None);
        assert_eq!(extract_source_ref("dQw4w9WgXcQQ"), None);
        assert_eq!(extract_source_ref("dQw4w9WgX!Q"), None);
    }

    #[test]
    fn test_watch_url() {
        let m = match_source("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(m.token, "dQw4w9WgXcQ");
        assert_eq!(m.shape, SourceShape::Watch);
    }

    #[test]
    fn test_short_link() {
        let m = match_source("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap();
        assert_eq!(m.token, "dQw4w9WgXcQ");
        assert_eq!(m.shape, SourceShape::ShortLink);
    }

    #[test]
    fn test_embed_legacy_and_shorts() {
        let embed = match_source("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(embed.shape, SourceShape::Embed);

        let legacy = match_source("http://youtube.com/v/dQw4w9WgXcQ#frag").unwrap();
        assert_eq!(legacy.token, "dQw4w9WgXcQ");
        assert_eq!(legacy.shape, SourceShape::Legacy);

        let shorts = match_source("youtube.com/shorts/abcdefghijk").unwrap();
        assert_eq!(shorts.token, "abcdefghijk");
        assert_eq!(shorts.shape, SourceShape::Shorts);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            extract_source_ref("   https://youtu.be/dQw4w9WgXcQ \n"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(extract_source_ref("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_first_pattern_wins_for_ambiguous_input() {
        let m = match_source("https://youtube.com/watch?v=AAAAAAAAAAA&next=youtu.be/BBBBBBBBBBB")
            .unwrap();
        assert_eq!(m.token, "AAAAAAAAAAA");
        assert_eq!(m.shape, SourceShape::Watch);
    }

    #[test]
    fn test_unsupported_input_is_no_match() {
        assert_eq!(extract_source_ref(""), None);
        assert_eq!(extract_source_ref("hello world"), None);
        assert_eq!(extract_source_ref("https://vimeo.com/123456"), None);
        assert_eq!(extract_source_ref("https://www.youtube.com/watch?v="), None);
    }
}
