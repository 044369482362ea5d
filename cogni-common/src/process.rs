//! The study-text processing pipeline
//!
//! `process_input` is the composition the HTTP layer and the demo seeder
//! both call: classify the text, resolve the subject's config, synthesize
//! summary and flashcards, and schedule the four review points, all from
//! one caller-supplied reference instant. The caller owns input validation,
//! persistence of the result and interaction logging.

use crate::db::subject_configs;
use crate::error::Result;
use crate::schedule::{self, REVIEW_STEP_COUNT};
use crate::subject::{self, SubjectTag};
use crate::synthesis;
use chrono::{DateTime, Utc};
use rand::Rng;
use sqlx::SqlitePool;
use tracing::debug;

/// Result of running the processing pipeline over one piece of study text
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedInput {
    pub subject: SubjectTag,
    pub summary: String,
    pub flashcards: Vec<String>,
    /// Review instants, ascending; formatted by the caller for storage
    pub review_dates: [DateTime<Utc>; REVIEW_STEP_COUNT],
}

/// Run the full pipeline over `text`.
///
/// `now` is the single reference instant for the review schedule; `rng`
/// supplies the variation choice. Empty or whitespace-only `text` is the
/// caller's problem; here it is classified like any other general text.
pub async fn process_input<R: Rng + Send>(
    pool: &SqlitePool,
    text: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<ProcessedInput> {
    let subject = subject::classify(text);
    debug!("Classified input as '{}'", subject);

    let config = subject_configs::resolve(pool, subject).await?;
    let synthesis = synthesis::synthesize(&config, rng)?;

    Ok(ProcessedInput {
        subject,
        summary: synthesis.summary,
        flashcards: synthesis.flashcards,
        review_dates: schedule::review_schedule(now),
    })
}
