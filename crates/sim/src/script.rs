//! Scripted input for the headless run.

use glam::Vec2;
use platformer_core::InputFrame;

/// One held input for a stretch of time.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub label: &'static str,
    pub seconds: f32,
    pub input: InputFrame,
}

/// A sequence of input segments played back frame by frame.
///
/// A segment's jump press is only reported on its first frame; the button
/// stays held for the rest of the segment.
#[derive(Clone, Debug, Default)]
pub struct Script {
    segments: Vec<Segment>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, label: &'static str, seconds: f32, input: InputFrame) -> Self {
        self.segments.push(Segment {
            label,
            seconds: seconds.max(0.0),
            input,
        });
        self
    }

    /// Walk into the wall, climb it, mantle, then jump off the far side and
    /// glide down.
    pub fn training() -> Self {
        let forward = Vec2::Y;
        Self::new()
            .then("approach", 0.6, InputFrame::moving(forward).with_climb())
            .then("climb", 2.0, InputFrame::moving(forward).with_climb())
            .then("settle", 0.5, InputFrame::idle())
            .then("run", 0.3, InputFrame::moving(forward))
            .then("leap", 0.3, InputFrame::moving(forward).with_jump())
            .then("glide", 1.5, InputFrame::moving(forward).with_glide())
            .then("rest", 1.0, InputFrame::idle())
    }

    pub fn duration(&self) -> f32 {
        self.segments.iter().map(|segment| segment.seconds).sum()
    }

    /// Index of the segment active at `time`, or `None` past the end.
    pub fn segment_at(&self, time: f32) -> Option<usize> {
        let mut end = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            end += segment.seconds;
            if time < end {
                return Some(index);
            }
        }
        None
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Input for frame `frame` at a fixed `dt`. Idle once the script ends.
    pub fn input_for_frame(&self, frame: u32, dt: f32) -> InputFrame {
        let time = frame as f32 * dt;
        let Some(index) = self.segment_at(time) else {
            return InputFrame::idle();
        };

        let mut input = self.segments[index].input;
        let first_frame = frame == 0 || self.segment_at(time - dt) != Some(index);
        input.jump_pressed &= first_frame;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.25;

    fn script() -> Script {
        Script::new()
            .then("walk", 0.5, InputFrame::moving(Vec2::Y))
            .then("jump", 0.75, InputFrame::idle().with_jump())
    }

    #[test]
    fn segments_follow_each_other() {
        let script = script();
        assert_eq!(script.duration(), 1.25);
        assert_eq!(script.segment_at(0.0), Some(0));
        assert_eq!(script.segment_at(0.5), Some(1));
        assert_eq!(script.segment_at(1.25), None);
    }

    #[test]
    fn jump_press_only_on_first_frame_of_segment() {
        let script = script();

        let first = script.input_for_frame(2, DT);
        assert!(first.jump_pressed && first.jump_held);

        let later = script.input_for_frame(3, DT);
        assert!(!later.jump_pressed && later.jump_held);
    }

    #[test]
    fn idle_after_the_end() {
        assert_eq!(script().input_for_frame(10, DT), InputFrame::idle());
    }

    #[test]
    fn training_script_is_non_empty() {
        let script = Script::training();
        assert!(script.duration() > 5.0);
        assert_eq!(script.segment(0).map(|s| s.label), Some("approach"));
    }
}
