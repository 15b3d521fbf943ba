// Unit tests for the transcription classifier.
//
// Covers each marker rule, the generic-header fallback with and without a
// caption block, rule ordering (including the shadowed rules), and totality
// on odd inputs.

use tor_dataset::classify::rules::MARKER_RULES;
use tor_dataset::classify::{classify, TranscriptionCategory};

// ============================================================
// Specific format markers
// ============================================================

#[test]
fn greentext_and_4chan_share_a_category() {
    assert_eq!(
        classify("*Image Transcription: Greentext* ..."),
        TranscriptionCategory::Greentext4chan
    );
    assert_eq!(
        classify("*Image Transcription: 4chan*\n\n>be me"),
        TranscriptionCategory::Greentext4chan
    );
}

#[test]
fn meme_marker() {
    assert_eq!(
        classify("*Image Transcription: Meme* lol"),
        TranscriptionCategory::Meme
    );
}

#[test]
fn each_single_marker_maps_to_its_category() {
    let cases = [
        ("*Image Transcription: Reddit*", TranscriptionCategory::RedditPost),
        ("*Image Transcription: Facebook Post*", TranscriptionCategory::FacebookPost),
        ("*Image Transcription: Text Messages*", TranscriptionCategory::TextMessages),
        ("*Image Transcription: Twitter Post*", TranscriptionCategory::TwitterPost),
        ("*Image Transcription: Comic*", TranscriptionCategory::Comic),
        ("*Image Transcription: GIF*", TranscriptionCategory::Gif),
        ("*Image Transcription: Code*", TranscriptionCategory::Code),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(text), expected, "text: {text}");
    }
}

#[test]
fn marker_can_appear_anywhere() {
    let text = "Thanks for waiting!\n\n*Image Transcription: Comic*\n\n---\n\n**Panel 1**";
    assert_eq!(classify(text), TranscriptionCategory::Comic);
}

#[test]
fn markers_are_case_sensitive() {
    // Lowercase tag: no specific rule, but no generic header either
    assert_eq!(
        classify("*image transcription: meme*"),
        TranscriptionCategory::Other
    );
    // Generic header intact, tag in wrong case
    assert_eq!(
        classify("*Image Transcription: MEME*"),
        TranscriptionCategory::ImagesWithText
    );
}

// ============================================================
// Rule ordering
// ============================================================

#[test]
fn earlier_rule_beats_later_rule() {
    let text = "*Image Transcription: Code*\n\n*Image Transcription: Facebook Post*";
    assert_eq!(classify(text), TranscriptionCategory::FacebookPost);
}

#[test]
fn twitter_post_marker_is_checked_before_replies() {
    // "Twitter Post and Replies*" does not contain "Twitter Post*", so the
    // replies tag is still reachable on its own.
    assert_eq!(
        classify("*Image Transcription: Twitter Post and Replies*"),
        TranscriptionCategory::TwitterReply
    );
    // With both tags present, the earlier rule wins.
    assert_eq!(
        classify(
            "*Image Transcription: Twitter Post and Replies*\n*Image Transcription: Twitter Post*"
        ),
        TranscriptionCategory::TwitterPost
    );
}

#[test]
fn reddit_comments_tag_is_reachable_alone() {
    assert_eq!(
        classify("*Image Transcription: Reddit Comments*"),
        TranscriptionCategory::RedditComment
    );
    assert_eq!(
        classify("*Image Transcription: Reddit Comments*\n*Image Transcription: Reddit*"),
        TranscriptionCategory::RedditPost
    );
}

#[test]
fn rule_table_order_is_fixed() {
    let order: Vec<TranscriptionCategory> = MARKER_RULES.iter().map(|r| r.category).collect();
    assert_eq!(
        order,
        vec![
            TranscriptionCategory::Greentext4chan,
            TranscriptionCategory::RedditPost,
            TranscriptionCategory::RedditComment,
            TranscriptionCategory::FacebookPost,
            TranscriptionCategory::FacebookComment,
            TranscriptionCategory::TextMessages,
            TranscriptionCategory::TwitterPost,
            TranscriptionCategory::TwitterReply,
            TranscriptionCategory::Comic,
            TranscriptionCategory::Gif,
            TranscriptionCategory::Code,
            TranscriptionCategory::Meme,
        ]
    );
}

// ============================================================
// Generic header fallback
// ============================================================

#[test]
fn caption_block_means_no_text() {
    assert_eq!(
        classify("*Image Transcription:*\n---\n[*a cat*]\n---"),
        TranscriptionCategory::ArtAndImagesWithoutText
    );
}

#[test]
fn generic_header_without_caption_block_has_text() {
    assert_eq!(
        classify("*Image Transcription:* some text, no divider block"),
        TranscriptionCategory::ImagesWithText
    );
}

#[test]
fn caption_block_needs_both_dividers() {
    assert_eq!(
        classify("*Image Transcription:*\n---\n[*a cat*]\n\nsome text"),
        TranscriptionCategory::ImagesWithText
    );
}

#[test]
fn longer_dividers_still_match() {
    assert_eq!(
        classify("*Image Transcription: Art*\n\n------\n\n[*A sketch of a dog.*]\n\n-----"),
        TranscriptionCategory::ArtAndImagesWithoutText
    );
}

#[test]
fn non_breaking_space_around_caption_still_counts() {
    assert_eq!(
        classify("*Image Transcription:*\n---\u{a0}[*a cat*]\u{a0}---"),
        TranscriptionCategory::ArtAndImagesWithoutText
    );
}

#[test]
fn caption_block_without_generic_header_is_other() {
    assert_eq!(
        classify("---\n[*a cat*]\n---"),
        TranscriptionCategory::Other
    );
}

// ============================================================
// Totality
// ============================================================

#[test]
fn unrelated_text_is_other() {
    assert_eq!(classify("random unrelated text"), TranscriptionCategory::Other);
}

#[test]
fn odd_inputs_never_panic() {
    let inputs = [
        "",
        "*",
        "*Image Transcription",
        "[deleted]",
        "🦊 *Image Transcription:* 🦊",
        "\n\n\n",
        "---[**]---",
    ];
    for text in inputs {
        let category = classify(text);
        assert!(TranscriptionCategory::ALL.contains(&category));
    }
    assert_eq!(classify(""), TranscriptionCategory::Other);
}
