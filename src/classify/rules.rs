// Ordered marker rules for classifying a transcription.
//
// Volunteers open each transcription with a header such as
// `*Image Transcription: Twitter Post*`. Rules are checked top to bottom and
// the first one whose marker appears anywhere in the text wins.
//
// Rules are not mutually exclusive: a transcription carrying both
// "Twitter Post*" and "Twitter Post and Replies*" is a TWITTER_POST because
// that rule comes first. Evaluation order is part of the contract, so the
// table is a plain slice walked linearly.

use std::sync::LazyLock;

use regex::Regex;

use super::category::TranscriptionCategory;

/// A single classification rule: any of `markers` present → `category`.
pub struct MarkerRule {
    pub markers: &'static [&'static str],
    pub category: TranscriptionCategory,
}

/// Specific-format rules in evaluation order.
pub const MARKER_RULES: &[MarkerRule] = &[
    MarkerRule {
        markers: &[
            "*Image Transcription: Greentext*",
            "*Image Transcription: 4chan*",
        ],
        category: TranscriptionCategory::Greentext4chan,
    },
    MarkerRule {
        markers: &["*Image Transcription: Reddit*"],
        category: TranscriptionCategory::RedditPost,
    },
    MarkerRule {
        markers: &["*Image Transcription: Reddit Comments*"],
        category: TranscriptionCategory::RedditComment,
    },
    MarkerRule {
        markers: &["*Image Transcription: Facebook Post*"],
        category: TranscriptionCategory::FacebookPost,
    },
    MarkerRule {
        markers: &[
            "*Image Transcription: Facebook Comments*",
            "*Image Transcription: Facebook Comment*",
        ],
        category: TranscriptionCategory::FacebookComment,
    },
    MarkerRule {
        markers: &["*Image Transcription: Text Messages*"],
        category: TranscriptionCategory::TextMessages,
    },
    MarkerRule {
        markers: &["*Image Transcription: Twitter Post*"],
        category: TranscriptionCategory::TwitterPost,
    },
    MarkerRule {
        markers: &["*Image Transcription: Twitter Post and Replies*"],
        category: TranscriptionCategory::TwitterReply,
    },
    MarkerRule {
        markers: &["*Image Transcription: Comic*"],
        category: TranscriptionCategory::Comic,
    },
    MarkerRule {
        markers: &["*Image Transcription: GIF*"],
        category: TranscriptionCategory::Gif,
    },
    MarkerRule {
        markers: &["*Image Transcription: Code*"],
        category: TranscriptionCategory::Code,
    },
    MarkerRule {
        markers: &["*Image Transcription: Meme*"],
        category: TranscriptionCategory::Meme,
    },
];

/// Header shared by every transcription, with or without a format tag.
pub const GENERIC_MARKER: &str = "*Image Transcription:";

/// A caption-only block: a dashed divider, a `[*...*]` description, and a
/// closing divider. Its presence means the image had no text of its own.
/// `\s` is Unicode-aware, so padding such as NBSP counts as whitespace.
static CAPTION_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)---\s*\[\*.+\*\]\s*---").expect("caption block pattern is valid")
});

impl MarkerRule {
    fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }
}

/// Classify a transcription by its header marker. Total: unmatched text is `Other`.
pub fn classify(text: &str) -> TranscriptionCategory {
    if let Some(rule) = MARKER_RULES.iter().find(|rule| rule.matches(text)) {
        return rule.category;
    }

    if text.contains(GENERIC_MARKER) {
        if CAPTION_BLOCK.is_match(text) {
            return TranscriptionCategory::ArtAndImagesWithoutText;
        }
        return TranscriptionCategory::ImagesWithText;
    }

    TranscriptionCategory::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let text = "*Image Transcription: Meme*\n\n*Image Transcription: Greentext*";
        assert_eq!(classify(text), TranscriptionCategory::Greentext4chan);
    }

    #[test]
    fn facebook_comment_singular_and_plural() {
        assert_eq!(
            classify("*Image Transcription: Facebook Comment*"),
            TranscriptionCategory::FacebookComment
        );
        assert_eq!(
            classify("*Image Transcription: Facebook Comments*"),
            TranscriptionCategory::FacebookComment
        );
    }

    #[test]
    fn caption_block_spans_lines() {
        let text = "*Image Transcription:*\n\n---\n\n[*A watercolor fox.*]\n\n---\n\n^^I'm&#32;a&#32;human";
        assert_eq!(classify(text), TranscriptionCategory::ArtAndImagesWithoutText);
    }

    #[test]
    fn caption_must_stay_on_one_line() {
        let text = "*Image Transcription:*\n---\n[*a\ncat*]\n---";
        assert_eq!(classify(text), TranscriptionCategory::ImagesWithText);
    }

    #[test]
    fn unicode_whitespace_pads_caption_block() {
        let text = "*Image Transcription:*\n---\u{a0}[*a cat*]\u{a0}---";
        assert_eq!(classify(text), TranscriptionCategory::ArtAndImagesWithoutText);

        let text = "*Image Transcription:*\n---\u{3000}\n[*a cat*]\n\u{2003}---";
        assert_eq!(classify(text), TranscriptionCategory::ArtAndImagesWithoutText);
    }

    #[test]
    fn empty_caption_is_not_a_caption_block() {
        let text = "*Image Transcription:*\n---\n[**]\n---";
        assert_eq!(classify(text), TranscriptionCategory::ImagesWithText);
    }
}
