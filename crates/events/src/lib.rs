//! Cards2Cash client event plumbing.
//!
//! - [`EventBus`]: asynchronous fan-out of [`ClientEvent`]s over
//!   `tokio::sync::broadcast`.
//! - [`Listeners`]: synchronous subscribe/unsubscribe registry used by the
//!   client context objects.
//! - [`Notifier`]: the toast collaborator, with bus-backed and in-memory
//!   implementations.

pub mod bus;
pub mod listeners;
pub mod notify;

pub use bus::{ClientEvent, EventBus};
pub use listeners::{Listeners, Subscription};
pub use notify::{BusNotifier, Notification, NotificationKind, Notifier, RecordingNotifier};
