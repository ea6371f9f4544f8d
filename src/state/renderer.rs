//! Per-frame position painting while a drag is in progress.
//!
//! Modeled as an explicit cancelable task rather than a self-rescheduling
//! callback. The host asks for the pending [`FrameTaskId`] and runs it on its
//! next rendering frame; the task keeps itself scheduled for as long as the
//! engine is dragging.

use tracing::debug;

/// Identity of one frame task. A new id is issued for every drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTaskId(u64);

/// What happened when the host ran a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Live offset painted; the task stays scheduled for the next frame.
    Painted,
    /// Dragging had stopped; the task ended without painting.
    Terminated,
    /// The id does not match the pending task (it was cancelled or replaced).
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RendererState {
    Idle,
    Scheduled(FrameTaskId),
}

/// At most one frame task per engine.
#[derive(Debug, Clone)]
pub struct PositionRenderer {
    state: RendererState,
    next_id: u64,
}

impl Default for PositionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionRenderer {
    /// Renderer with no task scheduled.
    pub fn new() -> Self {
        Self {
            state: RendererState::Idle,
            next_id: 0,
        }
    }

    /// Schedule a new task.
    ///
    /// Returns `None` when a task is already pending; a second loop must never
    /// run alongside the first.
    pub fn start(&mut self) -> Option<FrameTaskId> {
        if let RendererState::Scheduled(existing) = self.state {
            debug!(?existing, "Frame task already pending, refusing to start another");
            return None;
        }
        let id = FrameTaskId(self.next_id);
        self.next_id += 1;
        self.state = RendererState::Scheduled(id);
        Some(id)
    }

    /// Cancel the pending task, if any, and return its id.
    pub fn cancel(&mut self) -> Option<FrameTaskId> {
        match std::mem::replace(&mut self.state, RendererState::Idle) {
            RendererState::Scheduled(id) => Some(id),
            RendererState::Idle => None,
        }
    }

    /// Id of the task waiting for the next frame.
    pub fn pending(&self) -> Option<FrameTaskId> {
        match self.state {
            RendererState::Scheduled(id) => Some(id),
            RendererState::Idle => None,
        }
    }

    /// True while a task is scheduled.
    pub fn is_active(&self) -> bool {
        self.pending().is_some()
    }

    /// Advance task `id` by one frame.
    ///
    /// The caller paints the live offset when this returns
    /// [`FrameOutcome::Painted`].
    pub fn on_frame(&mut self, id: FrameTaskId, is_dragging: bool) -> FrameOutcome {
        if self.pending() != Some(id) {
            return FrameOutcome::Stale;
        }
        if is_dragging {
            FrameOutcome::Painted
        } else {
            self.state = RendererState::Idle;
            FrameOutcome::Terminated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_schedules_a_task() {
        let mut renderer = PositionRenderer::new();
        let id = renderer.start().expect("idle renderer should start");
        assert_eq!(renderer.pending(), Some(id));
    }

    #[test]
    fn second_start_is_refused() {
        let mut renderer = PositionRenderer::new();
        renderer.start();
        assert_eq!(renderer.start(), None);
    }

    #[test]
    fn frame_while_dragging_keeps_task_scheduled() {
        let mut renderer = PositionRenderer::new();
        let id = renderer.start().unwrap();
        assert_eq!(renderer.on_frame(id, true), FrameOutcome::Painted);
        assert_eq!(renderer.on_frame(id, true), FrameOutcome::Painted);
        assert!(renderer.is_active());
    }

    #[test]
    fn first_frame_after_drag_stops_terminates() {
        let mut renderer = PositionRenderer::new();
        let id = renderer.start().unwrap();
        assert_eq!(renderer.on_frame(id, false), FrameOutcome::Terminated);
        assert!(!renderer.is_active());
        assert_eq!(renderer.on_frame(id, false), FrameOutcome::Stale);
    }

    #[test]
    fn cancelled_task_is_stale() {
        let mut renderer = PositionRenderer::new();
        let id = renderer.start().unwrap();
        assert_eq!(renderer.cancel(), Some(id));
        assert_eq!(renderer.on_frame(id, true), FrameOutcome::Stale);
    }

    #[test]
    fn each_start_issues_a_fresh_id() {
        let mut renderer = PositionRenderer::new();
        let first = renderer.start().unwrap();
        renderer.cancel();
        let second = renderer.start().unwrap();
        assert_ne!(first, second);
        assert_eq!(renderer.on_frame(first, true), FrameOutcome::Stale);
    }
}
