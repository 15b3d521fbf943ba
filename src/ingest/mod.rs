// Input loading — the two CSV exports and the extracted image directory.

pub mod images;
pub mod tables;

pub use images::list_image_files;
pub use tables::{load_comments, load_submissions, Comment, Submission};
