use crate::foundation::error::{CollectError, CollectResult};

/// Absolute scene frame number.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FrameIndex(pub u64);

/// Inclusive, stepped frame range `[start, end]`.
///
/// Iteration stops once the next frame would exceed `end`, so the last emitted frame may be
/// less than `end` when `step` does not divide the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub start: FrameIndex,
    /// Last frame (inclusive).
    pub end: FrameIndex,
    /// Distance between emitted frames.
    pub step: u64, // >= 1
}

impl FrameRange {
    /// Build a validated range (`start <= end`, `step >= 1`).
    pub fn new(start: FrameIndex, end: FrameIndex, step: u64) -> CollectResult<Self> {
        if start.0 > end.0 {
            return Err(CollectError::validation("FrameRange start must be <= end"));
        }
        if step == 0 {
            return Err(CollectError::validation("FrameRange step must be >= 1"));
        }
        Ok(Self { start, end, step })
    }

    /// Build a range without validation.
    ///
    /// `start > end` yields an empty range and a zero step is treated as one.
    pub fn unchecked(start: FrameIndex, end: FrameIndex, step: u64) -> Self {
        Self { start, end, step }
    }

    fn effective_step(self) -> u64 {
        self.step.max(1)
    }

    /// Number of frames emitted by [`FrameRange::frames`], saturating at `u64::MAX`.
    pub fn len_frames(self) -> u64 {
        if self.start.0 > self.end.0 {
            return 0;
        }
        ((self.end.0 - self.start.0) / self.effective_step()).saturating_add(1)
    }

    /// Whether the range emits no frames.
    pub fn is_empty(self) -> bool {
        self.len_frames() == 0
    }

    /// Frames in ascending order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        let step = self.effective_step();
        let end = self.end.0;
        let first = (self.start.0 <= end).then_some(self.start.0);
        std::iter::successors(first, move |f| f.checked_add(step).filter(|next| *next <= end))
            .map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
