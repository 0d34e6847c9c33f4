// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for sliders.
//!
//! Works from press/move/release pointer events so the same code serves a
//! finger on a touch screen and a mouse drag. Only the horizontal component
//! counts; the displacement must strictly exceed the threshold.
//!
//! A touch screen reports the press before any position, so a press without
//! a known pointer starts the swipe at the first position that follows.

use iced::Point;

/// Pointer events routed from a slider's gesture area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Pointer position inside the slider, in widget-local coordinates.
    Moved(Point),
    Pressed,
    Released,
    /// Pointer left the slider; any pending swipe is abandoned.
    Exited,
}

/// Direction the content was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: show the next slide.
    Left,
    /// Finger moved left-to-right: show the previous slide.
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeGesture {
    threshold: f32,
    pointer: Option<Point>,
    pressed: bool,
    start_x: Option<f32>,
}

impl SwipeGesture {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            pointer: None,
            pressed: false,
            start_x: None,
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Starts tracking a swipe at horizontal position `x`.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finishes the swipe at horizontal position `x`.
    ///
    /// Returns the swipe direction if the displacement exceeds the threshold.
    pub fn end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        if start_x - x > self.threshold {
            Some(SwipeDirection::Left)
        } else if x - start_x > self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pressed = false;
        self.start_x = None;
    }

    /// Feeds one pointer event into the recognizer.
    pub fn handle(&mut self, event: GestureEvent) -> Option<SwipeDirection> {
        match event {
            GestureEvent::Moved(position) => {
                self.pointer = Some(position);
                if self.pressed && self.start_x.is_none() {
                    self.begin(position.x);
                }
                None
            }
            GestureEvent::Pressed => {
                self.pressed = true;
                if let Some(position) = self.pointer {
                    self.begin(position.x);
                }
                None
            }
            GestureEvent::Released => {
                self.pressed = false;
                // A lifted finger has no position; the next touch reports its own.
                match self.pointer.take() {
                    Some(position) => self.end(position.x),
                    None => {
                        self.cancel();
                        None
                    }
                }
            }
            GestureEvent::Exited => {
                self.pointer = None;
                self.cancel();
                None
            }
        }
    }
}
