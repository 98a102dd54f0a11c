//! # Notifications Widget
//!
//! Toast notification system using egui-notify for refresh results and errors.

use crate::app::{Notification, NotificationLevel};
use egui_notify::Toasts;
use std::time::Duration;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a queued application notification
    pub fn notify(&mut self, notification: &Notification) {
        let message = notification.message.clone();
        match notification.level {
            NotificationLevel::Success => {
                self.toasts.success(message).duration(Some(Duration::from_secs(3)));
            }
            NotificationLevel::Error => {
                self.toasts.error(message).duration(Some(Duration::from_secs(4)));
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
