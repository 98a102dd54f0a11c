//! # GUI Rendering Framework
//!
//! egui rendering for the dashboard and the [`DashboardWindow`] that hosts it in
//! an eframe native window.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use std::time::Duration;
use theme::Theme;
use widgets::notifications::NotificationManager;

/// How often the window repaints while idle, so async results and the
/// auto-refresh timer are picked up without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    screens::dashboard::render(ctx, app, theme);
}

/// eframe application hosting the dashboard.
pub struct DashboardWindow {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl DashboardWindow {
    /// Apply the theme and start the startup chain.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(cc: &eframe::CreationContext<'_>, mut app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        app.load_initial_data();

        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for DashboardWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for notification in self.app.take_notifications() {
            self.notifications.notify(&notification);
        }

        render(ctx, &mut self.app, &self.theme);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
