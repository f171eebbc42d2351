//! Clip durations for the video assembly step.
//!
//! Each slide is shown for at least as long as it asks for, and always long enough for
//! its narration to finish with a little padding after it.

/// How long a slide's clip should run, in seconds: the requested duration, stretched
/// to `audio + padding` when the narration (of length `audio` seconds) would not
/// otherwise fit.
pub fn clip_duration(requested: Option<f32>, audio: Option<f32>, padding: f32) -> f32 {
    let requested = requested.unwrap_or(0.0).max(0.0);
    match audio {
        Some(audio) => requested.max(audio + padding),
        None => requested,
    }
}

/// Number of whole frames needed to cover `duration` seconds at `fps`
pub fn frame_count(duration: f32, fps: u32) -> u64 {
    (duration.max(0.0) as f64 * fps as f64).ceil() as u64
}

/// Start offsets of consecutive clips once they are concatenated
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Timeline {
    pub starts: Vec<f32>,
    pub durations: Vec<f32>,
}

impl Timeline {
    pub fn from_durations<I: IntoIterator<Item = f32>>(durations: I) -> Timeline {
        let mut timeline = Timeline::default();
        for duration in durations {
            timeline.push(duration);
        }
        timeline
    }

    /// Append a clip to the end of the timeline, returning its start offset
    pub fn push(&mut self, duration: f32) -> f32 {
        let start = self.total();
        self.starts.push(start);
        self.durations.push(duration);
        start
    }

    pub fn total(&self) -> f32 {
        match (self.starts.last(), self.durations.last()) {
            (Some(start), Some(duration)) => start + duration,
            _ => 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_stretches_clip() {
        let d = clip_duration(Some(4.0), Some(5.2), 0.5);
        assert!((d - 5.7).abs() < 1e-5);
    }

    #[test]
    fn short_narration_keeps_requested_duration() {
        assert_eq!(clip_duration(Some(6.0), Some(3.0), 0.5), 6.0);
        assert_eq!(clip_duration(Some(6.0), None, 0.5), 6.0);
        assert_eq!(clip_duration(None, Some(2.0), 0.5), 2.5);
        assert_eq!(clip_duration(None, None, 0.5), 0.0);
    }

    #[test]
    fn frames_round_up() {
        assert_eq!(frame_count(5.0, 24), 120);
        assert_eq!(frame_count(5.01, 24), 121);
        assert_eq!(frame_count(0.0, 24), 0);
    }

    #[test]
    fn timeline_accumulates() {
        let timeline = Timeline::from_durations([5.0, 4.0, 6.0]);
        assert_eq!(timeline.starts, vec![0.0, 5.0, 9.0]);
        assert_eq!(timeline.total(), 15.0);
        assert!(Timeline::default().is_empty());
    }
}
