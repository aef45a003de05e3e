//! Telegram notification text for a submission.
//!
//! The template targets Telegram's legacy Markdown. Field contents are
//! inserted verbatim, so a submission containing `*`, `_` or backticks can
//! break the rendering or make Telegram reject the message.

use chrono::{DateTime, Duration, Utc};

use crate::models::Submission;

/// Africa/Johannesburg observes SAST (UTC+2) all year.
const JOHANNESBURG_UTC_OFFSET_HOURS: i64 = 2;

const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Renders a timestamp the way the inbox reads it, e.g. `14 Oct 2026, 15:04`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let local = at.naive_utc() + Duration::hours(JOHANNESBURG_UTC_OFFSET_HOURS);
    local.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_notification(submission: &Submission, at: DateTime<Utc>, source: &str) -> String {
    format!(
        "📬 *NEW CLIENT INQUIRY*\n\
         {RULE}\n\
         👤 *Name:* {name}\n\
         📧 *Email:* {email}\n\
         🎯 *Service:* {service}\n\
         {RULE}\n\
         📝 *Project Details:*\n\
         {message}\n\
         {RULE}\n\
         ⏰ *Time:* {time}\n\
         📍 *Source:* {source}\n\
         {RULE}\n\
         📧 *Reply to client:* mailto:{email}",
        name = submission.name,
        email = submission.email,
        service = submission.service_label(),
        message = submission.message,
        time = format_timestamp(at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission() -> Submission {
        Submission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            service: None,
            message: "Need a website".to_string(),
        }
    }

    #[test]
    fn test_timestamp_is_johannesburg_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 13, 4, 59).unwrap();
        assert_eq!(format_timestamp(at), "14 Oct 2026, 15:04");
    }

    #[test]
    fn test_timestamp_rolls_over_midnight() {
        let at = Utc.with_ymd_and_hms(2025, 12, 31, 22, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "01 Jan 2026, 00:30");
    }

    #[test]
    fn test_notification_layout() {
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 13, 4, 0).unwrap();
        let text = format_notification(&submission(), at, "thingsdoneimmediately.com");

        let expected = [
            "📬 *NEW CLIENT INQUIRY*",
            RULE,
            "👤 *Name:* Jane",
            "📧 *Email:* jane@x.com",
            "🎯 *Service:* Not specified",
            RULE,
            "📝 *Project Details:*",
            "Need a website",
            RULE,
            "⏰ *Time:* 14 Oct 2026, 15:04",
            "📍 *Source:* thingsdoneimmediately.com",
            RULE,
            "📧 *Reply to client:* mailto:jane@x.com",
        ]
        .join("\n");

        assert_eq!(text, expected);
    }

    #[test]
    fn test_service_is_rendered_when_present() {
        let mut submission = submission();
        submission.service = Some("Branding".to_string());

        let text = format_notification(&submission, Utc::now(), "example.org");
        assert!(text.contains("🎯 *Service:* Branding"));
        assert!(!text.contains("Not specified"));
        assert!(text.contains("📍 *Source:* example.org"));
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let mut submission = submission();
        submission.message = "*bold* _italic_ `code`".to_string();

        let text = format_notification(&submission, Utc::now(), "example.org");
        assert!(text.contains("\n*bold* _italic_ `code`\n"));
    }
}
