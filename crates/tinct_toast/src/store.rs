//! Toast collection and countdown scheduling
//!
//! The store is single-threaded and cooperative: public operations run to
//! completion synchronously, and countdowns fire from [`ToastStore::tick`],
//! which the host event loop drives. The armed entry in the timer table is
//! the cancellable handle for a toast's countdown - `pause_timer` and
//! `remove` disarm it before touching any other state, so a stale expiry
//! can never fire for a toast that was paused or removed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};
use tinct_theme::{on_color, resolve_color, Theme};

use crate::clock::{Clock, MonotonicClock};

/// Identity of a toast within its store.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct ToastId(u64);

/// Toast visual variants.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ToastVariant {
    /// Solid accent background.
    #[default]
    Filled,
    /// Muted container background.
    Tonal,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    /// Palette token name (or literal CSS color) for the accent.
    pub color: String,
    pub variant: ToastVariant,
    /// Auto-dismiss delay in milliseconds; `None` means the toast stays
    /// until closed by hand. Only strictly positive values arm a countdown.
    pub duration: Option<u64>,
    pub closable: bool,
}

impl Toast {
    /// The accent color resolved through the theme.
    pub fn accent(&self, theme: &Theme) -> Option<String> {
        resolve_color(self.color.as_str(), theme)
    }

    /// The contrast foreground paired with the accent.
    pub fn on_accent(&self, theme: &Theme) -> String {
        on_color(self.color.as_str(), theme)
    }
}

/// Builder for queueing a toast.
pub struct ToastBuilder {
    message: String,
    color: String,
    variant: ToastVariant,
    duration: Option<u64>,
    closable: bool,
}

impl ToastBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: "primary".into(),
            variant: ToastVariant::Filled,
            duration: Some(5000),
            closable: true,
        }
    }

    /// Accent color token (or literal CSS color).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Auto-dismiss after `ms` milliseconds.
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Keep the toast until it is closed by hand.
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Countdown accounting for one toast.
///
/// `armed_at: Some(_)` is a running countdown; `None` is paused with
/// `remaining` already folded down.
struct TimerEntry {
    remaining: Duration,
    armed_at: Option<Instant>,
}

/// Ordered toast collection with cooperative auto-dismiss timers.
///
/// Insertion order is display order. All operations are synchronous; the
/// host drives expiry by calling [`tick`](Self::tick) from its event loop.
pub struct ToastStore {
    toasts: Vec<Toast>,
    timers: FxHashMap<ToastId, TimerEntry>,
    paused: FxHashSet<ToastId>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock))
    }

    /// A store reading time from an explicit source (tests use
    /// [`ManualClock`](crate::clock::ManualClock)).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            toasts: Vec::new(),
            timers: FxHashMap::default(),
            paused: FxHashSet::default(),
            next_id: 0,
            clock,
        }
    }

    /// Queue a toast. Arms a countdown iff the effective duration is a
    /// positive number of milliseconds.
    pub fn add(&mut self, builder: ToastBuilder) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            message: builder.message,
            color: builder.color,
            variant: builder.variant,
            duration: builder.duration,
            closable: builder.closable,
        };
        tracing::debug!(id = id.0, duration = ?toast.duration, "toast queued");
        let duration = toast.duration;
        self.toasts.push(toast);

        if let Some(ms) = duration {
            if ms > 0 {
                self.timers.insert(
                    id,
                    TimerEntry {
                        remaining: Duration::from_millis(ms),
                        armed_at: Some(self.clock.now()),
                    },
                );
            }
        }

        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.add(ToastBuilder::new(message).color("success"))
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.add(ToastBuilder::new(message).color("error"))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.add(ToastBuilder::new(message).color("warning"))
    }

    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.add(ToastBuilder::new(message).color("info"))
    }

    /// Freeze a countdown, folding the elapsed share into the remaining
    /// time. No-op when `id` has no timer; pausing twice does not shrink
    /// the remainder twice.
    pub fn pause_timer(&mut self, id: ToastId) {
        if let Some(entry) = self.timers.get_mut(&id) {
            if let Some(armed_at) = entry.armed_at.take() {
                let elapsed = self.clock.now().saturating_duration_since(armed_at);
                entry.remaining = entry.remaining.saturating_sub(elapsed);
            }
            self.paused.insert(id);
        }
    }

    /// Re-arm a paused countdown for exactly the remaining time. A spent
    /// countdown (zero remaining) stays disarmed; the paused mark clears
    /// either way.
    pub fn resume_timer(&mut self, id: ToastId) {
        if let Some(entry) = self.timers.get_mut(&id) {
            if entry.armed_at.is_none() && entry.remaining > Duration::ZERO {
                entry.armed_at = Some(self.clock.now());
            }
        }
        self.paused.remove(&id);
    }

    /// Drop a toast and disarm its countdown. Removing an id that is gone
    /// (including one that just expired) is a no-op.
    pub fn remove(&mut self, id: ToastId) {
        self.timers.remove(&id);
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.paused.remove(&id);
        if self.toasts.len() != before {
            tracing::debug!(id = id.0, "toast removed");
        }
    }

    /// Disarm every countdown and empty the collection.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.paused.clear();
        self.toasts.clear();
        tracing::debug!("toast store cleared");
    }

    /// Expire due countdowns, routing each through [`remove`](Self::remove).
    /// Returns how many toasts were dismissed.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let expired: Vec<ToastId> = self
            .timers
            .iter()
            .filter(|(_, entry)| {
                entry
                    .armed_at
                    .is_some_and(|armed_at| now.saturating_duration_since(armed_at) >= entry.remaining)
            })
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            tracing::trace!(id = id.0, "toast countdown expired");
            self.remove(*id);
        }
        expired.len()
    }

    /// Time until the next armed countdown expires, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .values()
            .filter_map(|entry| {
                entry.armed_at.map(|armed_at| {
                    entry
                        .remaining
                        .saturating_sub(now.saturating_duration_since(armed_at))
                })
            })
            .min()
    }

    /// Queued toasts in display (insertion) order.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn is_paused(&self, id: ToastId) -> bool {
        self.paused.contains(&id)
    }

    /// Whether any countdown is armed.
    pub fn has_pending_timers(&self) -> bool {
        self.timers.values().any(|entry| entry.armed_at.is_some())
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_field_defaults() {
        let mut store = ToastStore::new();
        let id = store.add(ToastBuilder::new("hi"));
        let toast = &store.toasts()[0];
        assert_eq!(toast.id, id);
        assert_eq!(toast.color, "primary");
        assert_eq!(toast.variant, ToastVariant::Filled);
        assert_eq!(toast.duration, Some(5000));
        assert!(toast.closable);
    }

    #[test]
    fn persistent_builder_disables_auto_dismiss() {
        let mut store = ToastStore::new();
        store.add(ToastBuilder::new("pinned").persistent());
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn ids_are_unique_and_order_is_insertion_order() {
        let mut store = ToastStore::new();
        let a = store.add(ToastBuilder::new("a"));
        let b = store.add(ToastBuilder::new("b"));
        let c = store.add(ToastBuilder::new("c"));
        assert!(a < b && b < c);
        let order: Vec<&str> = store.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn preset_constructors_pick_their_color_token() {
        let mut store = ToastStore::new();
        store.success("saved");
        store.error("boom");
        assert_eq!(store.toasts()[0].color, "success");
        assert_eq!(store.toasts()[1].color, "error");
    }

    #[test]
    fn accent_resolves_through_the_theme() {
        let theme = Theme::default();
        let mut store = ToastStore::new();
        store.success("saved");
        let toast = &store.toasts()[0];
        assert_eq!(toast.accent(&theme).as_deref(), Some("#22c55e"));
        assert_eq!(toast.on_accent(&theme), "#ffffff");
    }
}
