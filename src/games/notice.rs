//! Transient notice board
//!
//! Short-lived messages such as "not in the word list", shown as toasts
//! and dropped again without any user action. Each notice carries its
//! own deadline; the board holds at most [`MAX_NOTICES`] entries and
//! drops the oldest first. Time is always injected by the caller, so
//! expiry is deterministic under test.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notices retained at once
pub const MAX_NOTICES: usize = 6;

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_millis(2500);

/// Portion of the lifetime spent fading out
const FADE: Duration = Duration::from_millis(600);

/// A single transient message with its expiry deadline
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    expires_at: Instant,
}

impl Notice {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Remaining visibility in `0.0..=1.0`
    ///
    /// Stays at `1.0` for most of the lifetime, then ramps down to
    /// `0.0` over the final fade window. Renderers dim the notice once
    /// this drops below full.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(remaining) = self.expires_at.checked_duration_since(now) else {
            return 0.0;
        };
        if remaining >= FADE {
            1.0
        } else {
            remaining.as_secs_f32() / FADE.as_secs_f32()
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Bounded queue of transient notices, oldest dropped first
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    entries: VecDeque<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice with the fixed display duration
    pub fn post(&mut self, text: impl Into<String>, now: Instant) {
        if self.entries.len() == MAX_NOTICES {
            self.entries.pop_front();
        }
        self.entries.push_back(Notice {
            text: text.into(),
            expires_at: now + NOTICE_TTL,
        });
    }

    /// Drop every notice whose deadline has passed
    ///
    /// Notices expire independently; there is no coordination between
    /// overlapping entries beyond this sweep.
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|notice| !notice.is_expired(now));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Live notices, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
