//! Input events

use std::collections::VecDeque;

/// Events the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the game at any phase
    Quit,
    /// Space bar / tap
    Jump,
}

/// Source of input events, drained once per frame
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then reports nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue one frame's worth of events
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    /// Queue `count` frames with no input
    pub fn idle(&mut self, count: usize) {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(count));
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new([vec![InputEvent::Jump]]);
        input.idle(1);
        input.push_frame(vec![InputEvent::Quit]);
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.poll_events(), vec![InputEvent::Jump]);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.poll_events(), vec![InputEvent::Quit]);
        assert!(input.poll_events().is_empty());
    }
}
