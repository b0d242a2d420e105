//! Formatting of the record posted to the destination group

use chrono::NaiveDateTime;
use teloxide::utils::html;

use super::submission::Submission;

/// Timestamp layout used in forwarded records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the HTML caption for a forwarded submission.
///
/// Every user-supplied value is escaped, so markup typed into the form shows
/// up literally instead of being interpreted by Telegram.
pub fn compose(submission: &Submission, submitted_at: NaiveDateTime) -> String {
    let body = format!(
        "📬 Новая заявка на выставку:\n\n\
         👤 ФИО: {}\n\
         📞 Телефон: {}\n\
         🚗 Техника: {}\n\
         🕒 Время: {}\n\
         🆔 {}",
        html::escape(&submission.full_name),
        html::escape(&submission.phone),
        html::escape(&submission.vehicle_description),
        submitted_at.format(TIMESTAMP_FORMAT),
        html::escape(&submission.submitter.to_string()),
    );

    format!("<pre>{}</pre>", body)
}
