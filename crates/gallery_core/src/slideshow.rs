//! Slideshow navigation over an ordered image list
//!
//! Navigation is bounded: there is no wrap-around. The host owns the timer
//! and calls [`Slideshow::tick`] (or `tick_at`) periodically; the slideshow
//! only decides whether the interval has elapsed.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Slideshow state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SlideshowState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    images: Vec<PathBuf>,
    index: usize,
    state: SlideshowState,
    interval: Duration,
    last_advance: Option<Instant>,
}

impl Slideshow {
    /// Start at `start` (clamped to the list)
    pub fn new(images: Vec<PathBuf>, start: usize, interval: Duration) -> Self {
        let index = start.min(images.len().saturating_sub(1));
        Self {
            images,
            index,
            state: SlideshowState::Stopped,
            interval,
            last_advance: None,
        }
    }

    pub fn current(&self) -> Option<&Path> {
        self.images.get(self.index).map(PathBuf::as_path)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.state == SlideshowState::Playing
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    /// Step forward; stays put on the last image
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Path> {
        if self.index + 1 < self.images.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Step back; stays put on the first image
    pub fn prev(&mut self) -> Option<&Path> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    pub fn first(&mut self) -> Option<&Path> {
        self.index = 0;
        self.current()
    }

    pub fn last(&mut self) -> Option<&Path> {
        self.index = self.images.len().saturating_sub(1);
        self.current()
    }

    /// Start or stop playback
    ///
    /// Starting while on the last image restarts from the first one.
    pub fn toggle_play(&mut self) -> bool {
        self.toggle_play_at(Instant::now())
    }

    pub fn toggle_play_at(&mut self, now: Instant) -> bool {
        match self.state {
            SlideshowState::Playing => self.stop(),
            SlideshowState::Stopped => {
                if self.images.is_empty() {
                    return false;
                }
                if self.index + 1 >= self.images.len() {
                    self.index = 0;
                }
                self.state = SlideshowState::Playing;
                self.last_advance = Some(now);
            }
        }
        self.is_playing()
    }

    pub fn stop(&mut self) {
        self.state = SlideshowState::Stopped;
        self.last_advance = None;
    }

    /// Advance if playing and the interval has elapsed
    ///
    /// Returns the new current image when it changed. Playback stops once the
    /// last image has been shown.
    pub fn tick(&mut self) -> Option<&Path> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<&Path> {
        if self.state != SlideshowState::Playing {
            return None;
        }

        let due = self
            .last_advance
            .map(|last| now.saturating_duration_since(last) >= self.interval)
            .unwrap_or(true);
        if !due {
            return None;
        }

        if self.index + 1 >= self.images.len() {
            tracing::debug!("Slideshow reached the last image");
            self.stop();
            return None;
        }

        self.index += 1;
        self.last_advance = Some(now);
        self.current()
    }
}
