//! Decides whether an event should get a generated conferencing link.

use genieflow_domain::{is_video_meeting_location, MeetingDetails};

/// Pluggable "is this a video meeting?" predicate.
pub trait ConferencingDetector: Send + Sync {
    /// True when the store should attach a generated video-meeting link.
    fn wants_conferencing(&self, details: &MeetingDetails) -> bool;
}

/// Honors an explicit `conferencingRequested` flag, otherwise sniffs the
/// location text for video-meeting keywords and domains.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationKeywordDetector;

impl ConferencingDetector for LocationKeywordDetector {
    fn wants_conferencing(&self, details: &MeetingDetails) -> bool {
        details
            .conferencing_requested
            .unwrap_or_else(|| details.location().is_some_and(is_video_meeting_location))
    }
}
