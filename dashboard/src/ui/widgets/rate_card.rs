//! # Rate Card Widgets
//!
//! Card components for the rates grid, quick-convert grid and historical grid.

use crate::app::{HistoricalCard, QuickConvertCard, RateCell};
use crate::ui::theme::Theme;
use egui::RichText;
use shared::currency::lookup;
use shared::utils::{format_change, format_rate, NOT_AVAILABLE, PLACEHOLDER};
use shared::CurrencyCode;

pub const CARD_WIDTH: f32 = 190.0;

fn card_frame(ui: &egui::Ui, theme: &Theme) -> egui::Frame {
    egui::Frame::group(ui.style())
        .fill(theme.colors.card)
        .inner_margin(egui::Margin::same(10))
}

/// Render one rates-grid cell. The returned response reports clicks on the
/// whole card.
pub fn render_rate_cell(ui: &mut egui::Ui, cell: &RateCell, base: &CurrencyCode, theme: &Theme) -> egui::Response {
    let inner = card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.label(RichText::new(&cell.meta.flag).size(18.0));
            ui.label(RichText::new(cell.code.as_str()).strong());
        });

        let rate_text = cell.rate.map(format_rate).unwrap_or_else(|| PLACEHOLDER.to_string());
        ui.label(RichText::new(rate_text).size(20.0).monospace());
        ui.colored_label(theme.dim, &cell.meta.name);

        ui.horizontal(|ui| {
            ui.colored_label(theme.dim, &cell.meta.symbol);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(theme.dim, format!("{}/{}", base, cell.code));
            });
        });
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(format!("Convert {} to {}", base, cell.code))
}

/// Render one quick-convert card. Returns the edited amount text, if changed.
pub fn render_quick_card(ui: &mut egui::Ui, index: usize, card: &QuickConvertCard, theme: &Theme) -> Option<String> {
    let mut edited = None;
    let (from, to) = (card.pair.from_code(), card.pair.to_code());
    let (from_meta, to_meta) = (lookup(&from), lookup(&to));

    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.label(format!("{} {}", from_meta.flag, from));
            ui.colored_label(theme.selected, "⇄");
            ui.label(format!("{} {}", to_meta.flag, to));
        });

        let mut amount = card.amount.clone();
        let field = ui.add(
            egui::TextEdit::singleline(&mut amount)
                .id(egui::Id::new("quick-amount").with(index))
                .hint_text("Enter amount")
                .desired_width(f32::INFINITY),
        );
        if field.changed() {
            edited = Some(amount);
        }

        ui.horizontal(|ui| {
            ui.label(RichText::new(card.result.display()).size(18.0).monospace());
            ui.colored_label(theme.dim, format!("{} {}", to_meta.symbol, to));
        });
    });

    edited
}

/// Render one historical comparison card.
pub fn render_historical_card(ui: &mut egui::Ui, card: &HistoricalCard, theme: &Theme) {
    let (from, to) = (card.pair.from_code(), card.pair.to_code());

    card_frame(ui, theme).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.label(format!("{}{}", lookup(&from).flag, lookup(&to).flag));
            ui.label(RichText::new(format!("{}/{}", from, to)).strong());
        });

        let Some(rates) = card.rates else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(theme.dim, "Loading market data...");
            });
            return;
        };

        ui.colored_label(theme.dim, "Current Rate");
        let current = rates
            .current
            .map(|r| shared::utils::format_number(r, 4))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        ui.label(RichText::new(current).size(18.0).monospace());

        for (label, change) in [("7D Change", rates.change_7d()), ("30D Change", rates.change_30d())] {
            ui.horizontal(|ui| {
                ui.colored_label(theme.dim, label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(theme.change_color(change), format_change(change));
                });
            });
        }
    });
}
