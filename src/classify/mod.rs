// Transcription classification — map a volunteer transcription to its category.

pub mod category;
pub mod rules;

pub use category::TranscriptionCategory;
pub use rules::classify;
