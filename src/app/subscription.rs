// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while something is waiting on the clock: an armed slider
/// timer or a visible toast. Otherwise the application stays idle.
pub fn create_tick_subscription(
    has_running_timers: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if has_running_timers || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
