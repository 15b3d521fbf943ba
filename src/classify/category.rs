// TranscriptionCategory — the closed set of content labels.
//
// Declaration order is the class-label order written to dataset_info.json,
// so new variants must never be inserted in the middle.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What kind of screenshot a transcription describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranscriptionCategory {
    ArtAndImagesWithoutText,
    ImagesWithText,
    #[serde(rename = "GREENTEXT_4CHAN")]
    Greentext4chan,
    RedditPost,
    RedditComment,
    FacebookPost,
    FacebookComment,
    TextMessages,
    TwitterPost,
    TwitterReply,
    Comic,
    Gif,
    Code,
    Meme,
    Other,
}

impl TranscriptionCategory {
    /// All categories in class-label order.
    pub const ALL: [TranscriptionCategory; 15] = [
        TranscriptionCategory::ArtAndImagesWithoutText,
        TranscriptionCategory::ImagesWithText,
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
        TranscriptionCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionCategory::ArtAndImagesWithoutText => "ART_AND_IMAGES_WITHOUT_TEXT",
            TranscriptionCategory::ImagesWithText => "IMAGES_WITH_TEXT",
            TranscriptionCategory::Greentext4chan => "GREENTEXT_4CHAN",
            TranscriptionCategory::RedditPost => "REDDIT_POST",
            TranscriptionCategory::RedditComment => "REDDIT_COMMENT",
            TranscriptionCategory::FacebookPost => "FACEBOOK_POST",
            TranscriptionCategory::FacebookComment => "FACEBOOK_COMMENT",
            TranscriptionCategory::TextMessages => "TEXT_MESSAGES",
            TranscriptionCategory::TwitterPost => "TWITTER_POST",
            TranscriptionCategory::TwitterReply => "TWITTER_REPLY",
            TranscriptionCategory::Comic => "COMIC",
            TranscriptionCategory::Gif => "GIF",
            TranscriptionCategory::Code => "CODE",
            TranscriptionCategory::Meme => "MEME",
            TranscriptionCategory::Other => "OTHER",
        }
    }

    /// Zero-based class-label index (position in `ALL`).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Class-label names in index order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl std::fmt::Display for TranscriptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TranscriptionCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown transcription category: {s}"))
    }
}
