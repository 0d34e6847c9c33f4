// SPDX-License-Identifier: MPL-2.0
//! Image slider state machine.
//!
//! A [`Slider`] belongs to exactly one card. It owns the current slide index,
//! its [`AutoAdvance`] timer and its [`SwipeGesture`] recognizer. Cards are
//! rebuilt on every category switch; the gallery calls [`Slider::dispose`] on
//! the outgoing sliders so no timer keeps running for a card that is gone.

pub mod gesture;
pub mod timer;
mod view;

pub use gesture::{GestureEvent, SwipeDirection, SwipeGesture};
pub use timer::AutoAdvance;
pub use view::view;

use crate::catalog::ImageSource;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifies a slider for the lifetime of the process.
///
/// Ids are handed out by [`SliderIds`] and never reused, so a message aimed
/// at a disposed slider cannot reach its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(u64);

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slider-{}", self.0)
    }
}

/// Monotonic source of [`SliderId`]s.
#[derive(Debug, Default)]
pub struct SliderIds {
    next: u64,
}

impl SliderIds {
    pub fn next_id(&mut self) -> SliderId {
        let id = SliderId(self.next);
        self.next += 1;
        id
    }
}

/// Manual navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl From<SwipeDirection> for Step {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Step::Next,
            SwipeDirection::Right => Step::Prev,
        }
    }
}

/// Interaction emitted by a slider's view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Step(Step),
    Gesture(GestureEvent),
}

/// Timing and gesture parameters shared by every slider of a gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSettings {
    pub interval: Duration,
    pub swipe_threshold: f32,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(crate::config::DEFAULT_SLIDE_INTERVAL_MS),
            swipe_threshold: crate::config::DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slider {
    id: SliderId,
    slides: Vec<ImageSource>,
    current_index: usize,
    timer: AutoAdvance,
    gesture: SwipeGesture,
}

impl Slider {
    /// Creates a slider showing slide 0 with its timer already running.
    #[must_use]
    pub fn new(
        id: SliderId,
        slides: Vec<ImageSource>,
        settings: SliderSettings,
        now: Instant,
    ) -> Self {
        let mut timer = AutoAdvance::new(settings.interval);
        timer.restart(now);
        Self {
            id,
            slides,
            current_index: 0,
            timer,
            gesture: SwipeGesture::new(settings.swipe_threshold),
        }
    }

    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }

    #[must_use]
    pub fn slides(&self) -> &[ImageSource] {
        &self.slides
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&ImageSource> {
        self.slides.get(self.current_index)
    }

    /// Whether slide `index` is the one being shown.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_index
    }

    #[must_use]
    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        !self.timer.is_armed()
    }

    /// Advances to the following slide, wrapping to the first.
    pub fn next(&mut self) {
        let count = self.slide_count();
        if count > 0 {
            self.current_index = (self.current_index + 1) % count;
        }
    }

    /// Goes back to the preceding slide, wrapping to the last.
    pub fn prev(&mut self) {
        let count = self.slide_count();
        if count > 0 {
            self.current_index = (self.current_index + count - 1) % count;
        }
    }

    /// User-initiated navigation: moves one slide and restarts the timer.
    pub fn step(&mut self, step: Step, now: Instant) {
        if self.is_disposed() {
            return;
        }
        match step {
            Step::Next => self.next(),
            Step::Prev => self.prev(),
        }
        self.timer.restart(now);
    }

    /// Feeds a pointer event to the swipe recognizer.
    ///
    /// A completed swipe navigates like the prev/next controls do and is
    /// returned to the caller.
    pub fn gesture(&mut self, event: GestureEvent, now: Instant) -> Option<Step> {
        if self.is_disposed() {
            return None;
        }
        let step = Step::from(self.gesture.handle(event)?);
        self.step(step, now);
        Some(step)
    }

    /// Applies a view interaction. Returns whether the visible slide changed.
    pub fn update(&mut self, message: Message, now: Instant) -> bool {
        match message {
            Message::Step(step) => {
                if self.is_disposed() {
                    return false;
                }
                self.step(step, now);
                true
            }
            Message::Gesture(event) => self.gesture(event, now).is_some(),
        }
    }

    /// Auto-advance: moves to the next slide if the timer is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Cancels the timer. The slider stays readable but never moves again.
    pub fn dispose(&mut self) {
        self.timer.cancel();
        self.gesture.cancel();
    }
}
