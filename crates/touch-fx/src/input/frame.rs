use crate::input::touch::{TouchPhase, TouchPoint};

/// Active touches for the current frame.
///
/// Event-driven hosts (the browser) only report changes, so the frame keeps
/// every contact alive between reports: after each tick, ended touches are
/// dropped and the rest become `Stationary` until reported again.
pub struct TouchFrame {
    touches: Vec<TouchPoint>,
    /// Reports for ids whose end is already recorded this frame. They open
    /// the next frame instead of overwriting the end.
    deferred: Vec<TouchPoint>,
}

impl TouchFrame {
    pub fn new() -> Self {
        Self {
            touches: Vec::with_capacity(10),
            deferred: Vec::new(),
        }
    }

    /// Record a touch. A second report for the same id in one frame is merged
    /// into the first, keeping its slot in the ordering. A touch that began this
    /// frame stays `Began` until it ends. Once an id has ended in this frame,
    /// further reports for it (an id reused by a new contact) are held back
    /// until `advance`, so the end is still seen.
    pub fn push(&mut self, touch: TouchPoint) {
        if let Some(existing) = self.deferred.iter_mut().find(|t| t.id == touch.id) {
            Self::merge(existing, touch);
            return;
        }
        match self.touches.iter_mut().find(|t| t.id == touch.id) {
            Some(existing) if existing.phase.is_final() => {
                log::debug!("touch {:?} reported again after ending, deferring", touch.id);
                self.deferred.push(touch);
            }
            Some(existing) => Self::merge(existing, touch),
            None => self.touches.push(touch),
        }
    }

    /// Close the frame: forget released touches, mark the rest stationary,
    /// then open the next frame with any deferred reports.
    pub fn advance(&mut self) {
        self.touches.retain(|t| !t.phase.is_final());
        for t in &mut self.touches {
            t.phase = TouchPhase::Stationary;
        }
        let deferred = std::mem::take(&mut self.deferred);
        for touch in deferred {
            self.push(touch);
        }
    }

    /// Drop every touch (e.g. the page lost focus).
    pub fn clear(&mut self) {
        self.touches.clear();
        self.deferred.clear();
    }

    pub fn as_slice(&self) -> &[TouchPoint] {
        &self.touches
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.touches.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    fn merge(existing: &mut TouchPoint, touch: TouchPoint) {
        let began = existing.phase == TouchPhase::Began;
        *existing = touch;
        if began && !touch.phase.is_final() {
            existing.phase = TouchPhase::Began;
        }
    }
}

impl Default for TouchFrame {
    fn default() -> Self {
        Self::new()
    }
}
