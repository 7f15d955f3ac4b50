//! Video-meeting detection helpers.
//!
//! Location strings coming out of email extraction are free text ("Zoom",
//! "Courtroom 5B", "https://meet.google.com/abc-defg-hij"). These helpers do a
//! best-effort sniff so the calendar store can be asked to attach a
//! conferencing link.

/// Detect a video-conferencing platform from free text.
///
/// Checks indicators in the following order:
/// 1. Google Meet links or keywords
/// 2. Zoom URLs or keywords
/// 3. Microsoft Teams URLs or keywords
/// 4. Webex URLs or keywords
/// 5. Generic "video" / "virtual" wording
#[must_use]
pub fn detect_meeting_platform(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();

    if lowered.contains("meet.google.com") || lowered.contains("google meet") {
        return Some("google_meet");
    }
    if lowered.contains("zoom.us") || lowered.contains("zoom") {
        return Some("zoom");
    }
    if lowered.contains("teams.microsoft.com") || lowered.contains("teams") {
        return Some("teams");
    }
    if lowered.contains("webex.com") || lowered.contains("webex") {
        return Some("webex");
    }
    if lowered.contains("video") || lowered.contains("virtual") {
        return Some("video");
    }

    None
}

/// True when a meeting location looks like a video call.
#[must_use]
pub fn is_video_meeting_location(location: &str) -> bool {
    detect_meeting_platform(location).is_some()
}
