//! # Dashboard Screen
//!
//! The single dashboard screen: header with base selector and refresh, the
//! converter, the rates grid, the quick-convert grid and the historical grid.
//!
//! Rendering works on a cloned [`AppState`] so no lock is held while drawing;
//! gestures are collected as [`Command`]s and dispatched after the frame's
//! widgets are laid out.

use crate::app::{App, AppState, Command, ConversionView, SelectorId};
use crate::ui::theme::Theme;
use crate::ui::widgets::{currency_selector, rate_card};
use crate::utils::validation::validate_amount;
use egui::RichText;
use shared::currency::lookup;
use shared::utils::{format_money, format_rate, PLACEHOLDER};

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let state = app.state.read().clone();
    let mut commands = Vec::new();

    if ctx.input(|i| i.key_pressed(egui::Key::R) && i.modifiers.command) {
        commands.push(Command::RequestRefresh);
    }

    egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("💱 FX Dashboard").color(theme.selected).strong());
            ui.add_space(16.0);
            ui.colored_label(theme.dim, "Base");
            currency_selector::render_currency_selector(ui, app, SelectorId::Base, theme);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!state.is_loading, egui::Button::new("⟳ Refresh"))
                    .on_hover_text("Ctrl+R")
                    .clicked()
                {
                    commands.push(Command::RequestRefresh);
                }
                if state.is_loading {
                    ui.spinner();
                }
                if let Some(updated) = state.last_updated {
                    ui.colored_label(theme.dim, format!("Last updated: {}", updated.format("%H:%M:%S")));
                }
            });
        });
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            render_converter(ui, app, &state, theme, &mut commands);
            ui.add_space(16.0);
            render_rates_grid(ui, &state, theme, &mut commands);
            ui.add_space(16.0);
            render_quick_convert(ui, &state, theme, &mut commands);
            ui.add_space(16.0);
            render_historical(ui, &state, theme);
        });
    });

    for command in commands {
        app.dispatch(command);
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str, theme: &Theme) {
    ui.label(RichText::new(title).size(18.0).strong().color(theme.colors.text));
    ui.add_space(6.0);
}

fn render_converter(ui: &mut egui::Ui, app: &mut App, state: &AppState, theme: &Theme, commands: &mut Vec<Command>) {
    egui::Frame::group(ui.style())
        .fill(theme.colors.panel)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            section_heading(ui, "Currency Converter", theme);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.colored_label(theme.dim, "Amount");
                    let mut amount = state.amount.clone();
                    if ui
                        .add(egui::TextEdit::singleline(&mut amount).desired_width(160.0))
                        .changed()
                    {
                        commands.push(Command::EditAmount(amount));
                    }
                    if let Some(hint) = validate_amount(&state.amount).error {
                        ui.colored_label(theme.error, RichText::new(hint).small());
                    }
                });

                ui.vertical(|ui| {
                    ui.colored_label(theme.dim, "From");
                    currency_selector::render_currency_selector(ui, app, SelectorId::From, theme);
                });

                if ui.button(RichText::new("⇄").size(18.0)).on_hover_text("Swap currencies").clicked() {
                    commands.push(Command::SwapPair);
                }

                ui.vertical(|ui| {
                    ui.colored_label(theme.dim, "To");
                    currency_selector::render_currency_selector(ui, app, SelectorId::To, theme);
                });
            });

            ui.add_space(10.0);
            render_conversion_result(ui, state, theme);
        });
}

fn render_conversion_result(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let to_meta = lookup(&state.to_currency);

    match &state.conversion {
        ConversionView::Ready { request, result } => {
            let meta = lookup(&request.to);
            ui.label(
                RichText::new(format!(
                    "{} {} {}",
                    meta.flag,
                    format_money(result.converted_amount, &request.to),
                    request.to
                ))
                .size(28.0)
                .strong(),
            );
            ui.colored_label(
                theme.dim,
                format!("1 {} = {} {}", request.from, format_rate(result.effective_rate), request.to),
            );
        }
        ConversionView::Placeholder => {
            ui.label(RichText::new(format!("{} 0.00", to_meta.flag)).size(28.0).strong());
            ui.colored_label(theme.dim, format!("1 {} = {} {}", state.from_currency, PLACEHOLDER, state.to_currency));
        }
        ConversionView::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(theme.dim, "Converting...");
            });
        }
        ConversionView::Failed(reason) => {
            ui.label(RichText::new("Error").size(28.0).strong().color(theme.error));
            ui.colored_label(theme.dim, "Failed to fetch rate").on_hover_text(reason);
        }
    }
}

fn render_rates_grid(ui: &mut egui::Ui, state: &AppState, theme: &Theme, commands: &mut Vec<Command>) {
    let base = state.grid_base().clone();
    section_heading(ui, &format!("Exchange Rates (1 {})", base), theme);

    let cells = state.rate_grid();
    if cells.is_empty() {
        ui.colored_label(theme.dim, PLACEHOLDER);
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for cell in &cells {
            if rate_card::render_rate_cell(ui, cell, &base, theme).clicked() {
                commands.push(Command::SetPair {
                    from: base.clone(),
                    to: cell.code.clone(),
                });
            }
        }
    });
}

fn render_quick_convert(ui: &mut egui::Ui, state: &AppState, theme: &Theme, commands: &mut Vec<Command>) {
    section_heading(ui, "Quick Convert", theme);

    ui.horizontal_wrapped(|ui| {
        for (index, card) in state.quick_cards.iter().enumerate() {
            if let Some(amount) = rate_card::render_quick_card(ui, index, card, theme) {
                commands.push(Command::EditQuickAmount { index, amount });
            }
        }
    });
}

fn render_historical(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    section_heading(ui, "Market Overview", theme);

    ui.horizontal_wrapped(|ui| {
        for card in &state.historical_cards {
            rate_card::render_historical_card(ui, card, theme);
        }
    });
}
