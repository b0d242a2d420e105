//! Delivery of a completed submission to the destination group

use chrono::NaiveDateTime;
use teloxide::types::ChatId;

use super::gateway::Gateway;
use super::record;
use super::submission::Submission;
use crate::core::error::{AppError, AppResult};

/// Short heads-up posted before the record when announcements are enabled
pub const NEW_SUBMISSION_NOTICE: &str = "🔔 Поступила новая заявка";

/// Sends `submission` to `destination`.
///
/// Order: optional notice, first photo captioned with the record, remaining
/// photos without caption in capture order. The first failed send aborts the
/// delivery and is returned; nothing is retried.
pub async fn forward_submission(
    gateway: &dyn Gateway,
    destination: ChatId,
    submission: &Submission,
    submitted_at: NaiveDateTime,
    announce: bool,
) -> AppResult<()> {
    let (first, rest) = submission
        .photos()
        .split_first()
        .ok_or_else(|| AppError::InvalidSubmission("submission has no photos".to_string()))?;

    if announce {
        gateway.send_text(destination, NEW_SUBMISSION_NOTICE.to_string()).await?;
    }

    let caption = record::compose(submission, submitted_at);
    gateway.send_photo(destination, first.clone(), Some(caption)).await?;

    for photo in rest {
        gateway.send_photo(destination, photo.clone(), None).await?;
    }

    log::info!(
        "Forwarded submission from {} ({} photo(s)) to {}",
        submission.submitter,
        submission.photos().len(),
        destination
    );

    Ok(())
}
