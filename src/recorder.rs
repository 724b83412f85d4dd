/*
 *  recorder.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  Recording surface for testing glyphs without a display
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use thiserror::Error;

use crate::surface::DrawSurface;

/// One primitive as issued to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall<C> {
    FillCircle { x: i32, y: i32, r: i32, color: C },
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: C },
    Pixel { x: i32, y: i32, color: C },
    FillRoundRect { x: i32, y: i32, w: i32, h: i32, r: i32, color: C },
    FastHLine { x: i32, y: i32, w: i32, color: C },
    Rect { x: i32, y: i32, w: i32, h: i32, color: C },
}

impl<C: Copy> DrawCall<C> {
    pub fn color(&self) -> C {
        match *self {
            DrawCall::FillCircle { color, .. }
            | DrawCall::Line { color, .. }
            | DrawCall::Pixel { color, .. }
            | DrawCall::FillRoundRect { color, .. }
            | DrawCall::FastHLine { color, .. }
            | DrawCall::Rect { color, .. } => color,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecorderError {
    #[error("simulated surface failure on call {0}")]
    Simulated(usize),
}

/// Surface that draws nothing and remembers every call, in order.
///
/// Tests read the sequence back through [`calls`](Self::calls). A surface
/// built with [`failing_at`](Self::failing_at) rejects the call with that
/// index (0-based), which is how error propagation through the glyph code is
/// checked.
#[derive(Debug, Clone)]
pub struct RecordingSurface<C> {
    calls: Vec<DrawCall<C>>,
    // 0-based index of the call that fails
    fail_at: Option<usize>,
}

impl<C> Default for RecordingSurface<C> {
    fn default() -> Self {
        Self { calls: Vec::new(), fail_at: None }
    }
}

impl<C: Copy> RecordingSurface<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that errors on the call with index `n`
    pub fn failing_at(n: usize) -> Self {
        Self { calls: Vec::new(), fail_at: Some(n) }
    }

    pub fn calls(&self) -> &[DrawCall<C>] {
        &self.calls
    }

    /// Hand back the recorded calls and start over
    pub fn take(&mut self) -> Vec<DrawCall<C>> {
        std::mem::take(&mut self.calls)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    fn record(&mut self, call: DrawCall<C>) -> Result<(), RecorderError> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(RecorderError::Simulated(self.calls.len()));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl<C: Copy> DrawSurface for RecordingSurface<C> {
    type Color = C;
    type Error = RecorderError;

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::FillCircle { x, y, r, color })
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::Line { x0, y0, x1, y1, color })
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::Pixel { x, y, color })
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::FillRoundRect { x, y, w, h, r, color })
    }

    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::FastHLine { x, y, w, color })
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: C) -> Result<(), RecorderError> {
        self.record(DrawCall::Rect { x, y, w, h, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut s = RecordingSurface::new();
        s.draw_pixel(1, 2, 7u8).unwrap();
        s.draw_fast_hline(0, 0, 5, 3u8).unwrap();

        assert_eq!(s.len(), 2);
        assert_eq!(s.calls()[0], DrawCall::Pixel { x: 1, y: 2, color: 7 });
        assert_eq!(s.calls()[1].color(), 3);
    }

    #[test]
    fn test_take_resets() {
        let mut s = RecordingSurface::new();
        s.draw_rect(0, 0, 2, 2, 1u8).unwrap();
        let calls = s.take();
        assert_eq!(calls.len(), 1);
        assert!(s.is_empty());
    }

    #[test]
    fn test_simulated_failure() {
        let mut s = RecordingSurface::failing_at(1);
        assert!(s.fill_circle(0, 0, 1, 1u8).is_ok());
        assert_eq!(s.draw_line(0, 0, 1, 1, 1u8), Err(RecorderError::Simulated(1)));
        assert_eq!(s.len(), 1);
    }
}
