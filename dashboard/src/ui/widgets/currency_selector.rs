//! # Currency Selector Widget
//!
//! Renders a [`crate::app::CurrencySelector`]: a button showing the selection and,
//! while open, a popup with a search box and the grouped option list.
//!
//! The widget holds no state of its own. It translates egui input into
//! [`SelectorInput`]s and dispatches them, so all selector behavior lives in the
//! state machine.

use crate::app::{App, Command, SelectorId, SelectorInput};
use crate::ui::theme::Theme;
use egui::{Align, Key, RichText};
use shared::currency::{lookup, CurrencyCode};

const POPUP_WIDTH: f32 = 300.0;
const LIST_HEIGHT: f32 = 320.0;

/// Render the selector addressed by `id` and apply the resulting inputs.
pub fn render_currency_selector(ui: &mut egui::Ui, app: &mut App, id: SelectorId, theme: &Theme) {
    let wants_focus = app.selector_mut(id).take_focus_request();
    let inputs = collect_inputs(ui, app, id, theme, wants_focus);

    for input in inputs {
        app.dispatch(Command::Selector(id, input));
    }
}

fn collect_inputs(ui: &mut egui::Ui, app: &App, id: SelectorId, theme: &Theme, wants_focus: bool) -> Vec<SelectorInput> {
    let selector = app.selector(id);
    let mut inputs = Vec::new();

    let meta = selector.display_meta();
    let button = ui.add(
        egui::Button::new(format!("{} {}  {}  ▾", meta.flag, meta.code, meta.name)).min_size(egui::vec2(220.0, 34.0)),
    );
    if button.clicked() {
        inputs.push(SelectorInput::Toggle);
    }

    if !selector.is_open() {
        return inputs;
    }

    let base_id = egui::Id::new(id.key());
    let popup = egui::Area::new(base_id.with("popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(button.rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(POPUP_WIDTH);

                let mut search = selector.search_term().to_string();
                let search_box = ui.add(
                    egui::TextEdit::singleline(&mut search)
                        .id(base_id.with("search"))
                        .hint_text("Search currency...")
                        .desired_width(f32::INFINITY),
                );
                if wants_focus {
                    search_box.request_focus();
                }
                if search_box.changed() {
                    inputs.push(SelectorInput::SetSearch(search));
                }

                ui.input(|i| {
                    if i.key_pressed(Key::ArrowDown) {
                        inputs.push(SelectorInput::ArrowDown);
                    }
                    if i.key_pressed(Key::ArrowUp) {
                        inputs.push(SelectorInput::ArrowUp);
                    }
                    if i.key_pressed(Key::Enter) {
                        inputs.push(SelectorInput::Enter);
                    }
                    if i.key_pressed(Key::Escape) {
                        inputs.push(SelectorInput::Escape);
                    }
                });

                ui.separator();

                let pointer_moved = ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);

                egui::ScrollArea::vertical()
                    .id_salt(base_id.with("list"))
                    .max_height(LIST_HEIGHT)
                    .show(ui, |ui| {
                        if selector.is_empty_result() {
                            ui.colored_label(theme.dim, "No currencies found");
                            return;
                        }

                        let mut index = 0;
                        for group in selector.groups() {
                            ui.label(RichText::new(group.label()).small().color(theme.selected));
                            for code in &group.options {
                                let option_meta = lookup(code);
                                let highlighted = selector.highlighted_index() == Some(index);
                                let current = code == selector.selected();

                                let text = format!("{} {}  {}", option_meta.flag, code, option_meta.name);
                                let response = ui.selectable_label(highlighted || current, text);

                                if highlighted {
                                    response.scroll_to_me(Some(Align::Center));
                                }
                                if let Some(hover) = hover_input(code, response.hovered(), highlighted, pointer_moved) {
                                    inputs.push(hover);
                                }
                                if response.clicked() {
                                    inputs.push(SelectorInput::Click(code.clone()));
                                }
                                index += 1;
                            }
                            ui.add_space(4.0);
                        }
                    });
            });
        });

    let clicked_outside = ui.input(|i| {
        i.pointer.any_click()
            && i
                .pointer
                .interact_pos()
                .is_some_and(|pos| !popup.response.rect.contains(pos) && !button.rect.contains(pos))
    });
    if clicked_outside {
        inputs.push(SelectorInput::ClickOutside);
    }

    inputs
}

/// Hover only takes the highlight when the pointer actually moved over a row.
/// A pointer resting on the list must not undo arrow-key navigation.
fn hover_input(code: &CurrencyCode, hovered: bool, highlighted: bool, pointer_moved: bool) -> Option<SelectorInput> {
    (hovered && pointer_moved && !highlighted).then(|| SelectorInput::Hover(code.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Command, CurrencySelector};

    fn open_selector() -> CurrencySelector {
        let options = ["USD", "EUR", "GBP"].into_iter().map(CurrencyCode::from).collect();
        let mut selector = CurrencySelector::new(options, CurrencyCode::from("USD"), |code| {
            Command::SelectCurrency(SelectorId::From, code)
        });
        selector.open();
        selector
    }

    #[test]
    fn test_resting_pointer_keeps_keyboard_highlight() {
        let mut selector = open_selector();
        let rested_on = selector.filtered()[0].clone();

        selector.handle(SelectorInput::ArrowDown);
        selector.handle(SelectorInput::ArrowDown);
        assert_eq!(selector.highlighted_index(), Some(1));

        // next frame: pointer still over the first row, no movement
        let highlighted = selector.highlighted_code() == Some(&rested_on);
        if let Some(input) = hover_input(&rested_on, true, highlighted, false) {
            selector.handle(input);
        }
        assert_eq!(selector.highlighted_index(), Some(1));
    }

    #[test]
    fn test_moving_pointer_takes_highlight() {
        let mut selector = open_selector();
        selector.handle(SelectorInput::ArrowDown);
        let target = selector.filtered()[2].clone();

        let input = hover_input(&target, true, false, true);
        assert_eq!(input, Some(SelectorInput::Hover(target.clone())));
        selector.handle(SelectorInput::Hover(target));
        assert_eq!(selector.highlighted_index(), Some(2));
    }

    #[test]
    fn test_hover_ignored_when_not_hovered_or_already_highlighted() {
        let code = CurrencyCode::from("EUR");
        assert_eq!(hover_input(&code, false, false, true), None);
        assert_eq!(hover_input(&code, true, true, true), None);
    }
}
