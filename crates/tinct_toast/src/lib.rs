//! Toast notifications for tinct
//!
//! A small cooperative scheduler for transient notifications: toasts queue
//! in display order, auto-dismiss on a per-toast countdown, and the
//! countdown freezes while the pointer hovers (pause/resume) without losing
//! elapsed-time accounting.
//!
//! # Quick Start
//!
//! ```
//! use tinct_toast::{ToastBuilder, ToastStore};
//!
//! let mut toasts = ToastStore::new();
//! let id = toasts.add(ToastBuilder::new("Profile saved").duration_ms(3000));
//!
//! // Host event loop, each frame:
//! toasts.tick();
//!
//! // Pointer entered the toast:
//! toasts.pause_timer(id);
//! // Pointer left:
//! toasts.resume_timer(id);
//! ```
//!
//! Timers are cooperative: nothing fires between public calls, expiry
//! happens inside [`ToastStore::tick`] on the host's own loop.

mod clock;
mod store;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use store::{Toast, ToastBuilder, ToastId, ToastStore, ToastVariant};
