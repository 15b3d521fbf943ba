// Join pipeline: reconcile the image directory, the submissions table and
// the comments table into one row per usable screenshot.
//
// Steps, in order (dedup and collision handling are order-dependent):
//   1. keep submissions whose URL path ends in a usable extension
//   2. find filenames shared by two or more of those submissions
//   3. drop colliding filenames and filenames with no downloaded image
//   4. dedup comments by stripped link_id, first occurrence wins
//   5. inner-join submissions (by id) with the surviving comments
//
// Rows come out in submission-table order.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::derive::{derived_filename, has_usable_extension, stripped_link_id};
use super::Record;
use crate::classify::classify;
use crate::error::IngestError;
use crate::ingest::{list_image_files, load_comments, load_submissions, Comment, Submission};

/// How many rows survived each step of the join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub submissions_loaded: usize,
    /// Submissions whose URL ends in a usable extension.
    pub downloadable: usize,
    /// Distinct filenames shared by more than one downloadable submission.
    pub colliding_filenames: usize,
    pub dropped_collision: usize,
    pub dropped_missing_image: usize,
    pub usable_submissions: usize,
    pub comments_loaded: usize,
    /// Comments left after keeping one per submission.
    pub unique_comments: usize,
    pub joined: usize,
}

/// A submission paired with its transcription comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    /// Derived filename; the record key.
    pub filename: String,
    pub submission: Submission,
    pub comment: Comment,
}

/// Result of joining the three inputs, held in memory.
#[derive(Debug, Clone)]
pub struct Join {
    pub rows: Vec<JoinedRow>,
    pub report: JoinReport,
}

/// Filenames that appear more than once in `filenames`.
pub fn collision_set<'a>(filenames: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in filenames {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Keep the first comment for each stripped link_id, preserving input order.
pub fn dedup_comments(comments: Vec<Comment>) -> Vec<Comment> {
    let mut seen: HashSet<String> = HashSet::new();
    comments
        .into_iter()
        .filter(|c| seen.insert(stripped_link_id(&c.link_id).to_string()))
        .collect()
}

/// Filter, dedup and inner-join the loaded inputs.
pub fn join(
    submissions: Vec<Submission>,
    comments: Vec<Comment>,
    image_files: &HashSet<String>,
) -> Join {
    let mut report = JoinReport {
        submissions_loaded: submissions.len(),
        comments_loaded: comments.len(),
        ..Default::default()
    };

    // Step 1: usable extensions only
    let downloadable: Vec<(String, Submission)> = submissions
        .into_iter()
        .filter(|s| has_usable_extension(&s.url))
        .map(|s| (derived_filename(&s.url), s))
        .collect();
    report.downloadable = downloadable.len();

    // Step 2: ambiguous filenames
    let collisions = collision_set(downloadable.iter().map(|(name, _)| name.as_str()));
    report.colliding_filenames = collisions.len();

    // Step 3: unambiguous and present on disk
    let mut usable = Vec::with_capacity(downloadable.len());
    for (filename, submission) in downloadable {
        if collisions.contains(&filename) {
            report.dropped_collision += 1;
        } else if !image_files.contains(&filename) {
            report.dropped_missing_image += 1;
        } else {
            usable.push((filename, submission));
        }
    }
    report.usable_submissions = usable.len();
    debug!(
        downloadable = report.downloadable,
        collisions = report.colliding_filenames,
        usable = report.usable_submissions,
        "Filtered submissions"
    );

    // Step 4: one comment per submission
    let unique = dedup_comments(comments);
    report.unique_comments = unique.len();
    let by_id: HashMap<String, Comment> = unique
        .into_iter()
        .map(|c| (stripped_link_id(&c.link_id).to_string(), c))
        .collect();

    // Step 5: inner join in submission order
    let mut rows = Vec::new();
    for (filename, submission) in usable {
        let comment = match by_id.get(&submission.id) {
            Some(c) => c.clone(),
            None => continue,
        };
        rows.push(JoinedRow {
            filename,
            submission,
            comment,
        });
    }
    report.joined = rows.len();

    info!(
        submissions = report.submissions_loaded,
        comments = report.comments_loaded,
        joined = report.joined,
        "Joined submissions with transcriptions"
    );

    Join { rows, report }
}

impl Join {
    /// Lazily turn joined rows into `(key, Record)` pairs rooted at `images_dir`.
    ///
    /// Borrowing, so it can be called again to restart from the first row.
    pub fn records<'a>(
        &'a self,
        images_dir: &'a Path,
    ) -> impl Iterator<Item = (String, Record)> + 'a {
        self.rows.iter().map(move |row| to_record(row, images_dir))
    }

    pub fn into_records(self, images_dir: impl Into<PathBuf>) -> Records {
        Records {
            rows: self.rows.into_iter(),
            images_dir: images_dir.into(),
            report: self.report,
        }
    }
}

fn to_record(row: &JoinedRow, images_dir: &Path) -> (String, Record) {
    let record = Record {
        image: images_dir.join(&row.filename),
        transcription_category: classify(&row.comment.body),
        transcription: row.comment.body.clone(),
    };
    (row.filename.clone(), record)
}

/// Owned, finite, single-pass stream of `(key, Record)` pairs.
///
/// Classification happens as each row is pulled. Clone before consuming to
/// replay from the start.
#[derive(Debug, Clone)]
pub struct Records {
    rows: std::vec::IntoIter<JoinedRow>,
    images_dir: PathBuf,
    report: JoinReport,
}

impl Records {
    pub fn report(&self) -> &JoinReport {
        &self.report
    }
}

impl Iterator for Records {
    type Item = (String, Record);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(to_record(&row, &self.images_dir))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Records {}

/// Load the three inputs, join them and return the lazy record stream.
///
/// Any missing or malformed input aborts the whole run.
pub fn generate_records(
    images_dir: &Path,
    comments_path: &Path,
    submissions_path: &Path,
) -> Result<Records, IngestError> {
    let comments = load_comments(comments_path)?;
    let submissions = load_submissions(submissions_path)?;
    let image_files = list_image_files(images_dir)?;

    Ok(join(submissions, comments, &image_files).into_records(images_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: &str, url: &str) -> Submission {
        Submission {
            id: id.to_string(),
            url: url.to_string(),
        }
    }

    fn comment(link_id: &str, body: &str) -> Comment {
        Comment {
            link_id: link_id.to_string(),
            body: body.to_string(),
        }
    }

    fn images(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn collision_set_keeps_only_repeats() {
        let set = collision_set(["a.jpg", "b.jpg", "a.jpg", "c.png"]);
        assert_eq!(set, images(&["a.jpg"]));
    }

    #[test]
    fn dedup_keeps_first_comment() {
        let comments = vec![
            comment("t3_a", "first"),
            comment("t1_a", "second"),
            comment("t3_b", "other"),
        ];
        let unique = dedup_comments(comments);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].body, "first");
        assert_eq!(unique[1].body, "other");
    }

    #[test]
    fn report_counts_each_drop() {
        let submissions = vec![
            submission("a", "https://i.redd.it/dup.jpg"),
            submission("b", "https://i.imgur.com/dup.jpg"),
            submission("c", "https://i.redd.it/missing.png"),
            submission("d", "https://i.redd.it/anim.gif"),
            submission("e", "https://i.redd.it/ok.png"),
        ];
        let comments = vec![comment("t3_e", "*Image Transcription: Code*")];
        let joined = join(submissions, comments, &images(&["dup.jpg", "ok.png"]));

        assert_eq!(
            joined.report,
            JoinReport {
                submissions_loaded: 5,
                downloadable: 4,
                colliding_filenames: 1,
                dropped_collision: 2,
                dropped_missing_image: 1,
                usable_submissions: 1,
                comments_loaded: 1,
                unique_comments: 1,
                joined: 1,
            }
        );
        assert_eq!(joined.rows[0].filename, "ok.png");
    }

    #[test]
    fn records_are_restartable() {
        let joined = join(
            vec![submission("a", "https://i.redd.it/a.jpg")],
            vec![comment("t3_a", "*Image Transcription: GIF*")],
            &images(&["a.jpg"]),
        );
        let dir = Path::new("/data/images");
        let first: Vec<_> = joined.records(dir).collect();
        let second: Vec<_> = joined.records(dir).collect();
        assert_eq!(first, second);
        assert_eq!(first[0].1.image, PathBuf::from("/data/images/a.jpg"));
    }
}
