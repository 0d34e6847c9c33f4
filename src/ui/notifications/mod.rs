// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used to confirm that the CV was saved, report download failures and warn
//! when the settings file could not be read. Toasts stack in the
//! bottom-right corner; at most three are visible, the rest wait in a queue.
//!
//! - Success/info: 3s
//! - Warning: 5s
//! - Error: until dismissed
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("CV saved"));
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
