//! # GUI Theme
//!
//! Dark dashboard theme for egui: near-black panels, teal accent, green/red for
//! rate moves.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

/// Dashboard color palette
#[derive(Debug, Clone)]
pub struct DashboardColors {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub text: Color32,
    /// Primary accent (selection, headings)
    pub accent: Color32,
    pub accent_dark: Color32,
    pub border: Color32,
    /// Rising rates
    pub gain: Color32,
    /// Falling rates, errors
    pub loss: Color32,
    pub warning: Color32,
    /// Secondary text
    pub muted: Color32,
}

impl Default for DashboardColors {
    fn default() -> Self {
        DashboardColors {
            background: Color32::from_rgb(11, 14, 20),   // #0B0E14
            panel: Color32::from_rgb(17, 21, 30),        // #11151E
            card: Color32::from_rgb(24, 29, 41),         // #181D29
            text: Color32::from_rgb(230, 233, 240),      // #E6E9F0
            accent: Color32::from_rgb(45, 212, 191),     // #2DD4BF
            accent_dark: Color32::from_rgb(17, 94, 89),  // #115E59
            border: Color32::from_rgb(42, 49, 66),       // #2A3142
            gain: Color32::from_rgb(16, 185, 129),       // #10B981
            loss: Color32::from_rgb(239, 68, 68),        // #EF4444
            warning: Color32::from_rgb(245, 158, 11),    // #F59E0B
            muted: Color32::from_rgb(139, 148, 168),     // #8B94A8
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: DashboardColors,
    /// Highlighted option in lists
    pub selected: Color32,
    pub dim: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = DashboardColors::default();
        Theme {
            selected: colors.accent,
            dim: colors.muted,
            error: colors.loss,
            colors,
        }
    }
}

impl Theme {
    /// Color for a percentage change (`None` renders muted).
    pub fn change_color(&self, change: Option<f64>) -> Color32 {
        match change {
            Some(c) if c > 0.0 => self.colors.gain,
            Some(c) if c < 0.0 => self.colors.loss,
            _ => self.dim,
        }
    }

    /// egui visuals for this palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.panel;
        visuals.extreme_bg_color = colors.card;

        visuals.widgets.noninteractive.bg_fill = colors.card;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.inactive.bg_fill = colors.card;
        visuals.widgets.inactive.weak_bg_fill = colors.card;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.weak_bg_fill = colors.accent_dark;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);

        visuals.widgets.active.weak_bg_fill = colors.accent_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = colors.accent_dark;
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 6.0);
            });
        }
        tracing::debug!("Applied dashboard theme");
    }
}
