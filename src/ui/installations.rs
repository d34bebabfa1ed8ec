use eframe::egui::{self, Align, Layout, RichText, Stroke, Vec2};

use super::i18n::I18n;
use super::{
    LauncherApp, ThemePalette, badge_frame, primary_button, secondary_button, section_frame,
    tab_heading, tint,
};
use crate::engine::models::{
    ICONS, ItemType, ManagedItem, RESOLUTIONS, VERSIONS, icon_glyph, icon_name,
};
use crate::engine::state::UserAction;
use crate::installations::editor::{EditorOutcome, ItemEditor};
use crate::installations::memory::{
    MAX_MEMORY_MB, MIN_MEMORY_MB, MemoryAllocation, memory_markers,
};
use crate::installations::CollectionKind;
use crate::util::{format_gigabytes, non_empty_or};

const FIELD_WIDTH: f32 = 320.0;

enum CardAction {
    Edit(String),
    Launch,
}

pub(super) fn render_installations(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    if let Some(editor) = app.installations.editor_mut() {
        if let Some(outcome) = render_editor(ui, editor, colors, i18n) {
            app.installations.apply_outcome(outcome);
        }
        return;
    }

    let active = app.installations.active();
    let mut switch_to = None;
    let mut create = false;
    ui.horizontal(|ui| {
        for kind in [CollectionKind::Installations, CollectionKind::Servers] {
            if tab_heading(ui, i18n.collection_label(kind), kind == active, colors) {
                switch_to = Some(kind);
            }
            ui.add_space(12.0);
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add(secondary_button(format!("➕ {}", i18n.new_item_button(active)), colors))
                .clicked()
            {
                create = true;
            }
        });
    });
    ui.add_space(8.0);

    let mut card_action = None;
    if app.installations.items().is_empty() {
        ui.label(RichText::new(i18n.empty_collection(active)).color(colors.text_muted));
    }
    for (index, item) in app.installations.items().iter().enumerate() {
        if let Some(action) = render_item_card(ui, item, index == 0, active, colors, i18n) {
            card_action = Some(action);
        }
        ui.add_space(4.0);
    }

    if let Some(kind) = switch_to {
        app.installations.switch_collection(kind);
    }
    if create {
        app.installations.create_new();
    }
    match card_action {
        Some(CardAction::Edit(id)) => {
            app.installations.edit_existing(&id);
        }
        Some(CardAction::Launch) => app.dispatch(UserAction::ClickLaunch),
        None => {}
    }
}

fn render_item_card(
    ui: &mut egui::Ui,
    item: &ManagedItem,
    featured: bool,
    kind: CollectionKind,
    colors: &ThemePalette,
    i18n: I18n,
) -> Option<CardAction> {
    let mut action = None;
    let frame = if featured {
        section_frame(colors)
            .fill(tint(colors.accent, 36))
            .stroke(Stroke::new(1.0, colors.accent))
    } else {
        section_frame(colors)
    };
    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon_glyph(&item.icon)).size(34.0));
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(non_empty_or(&item.name, i18n.unnamed_item()))
                            .size(18.0)
                            .strong(),
                    );
                    let badge_color = if item.item_type == ItemType::Latest {
                        colors.success
                    } else {
                        colors.border_strong
                    };
                    badge_frame(badge_color).show(ui, |ui| {
                        ui.label(RichText::new(item.item_type.label()).small());
                    });
                });
                ui.label(RichText::new(card_meta(item, i18n)).color(colors.text_muted));
                ui.label(
                    RichText::new(format!(
                        "{}: {}",
                        i18n.card_status_label(kind),
                        item.last_played
                    ))
                    .small()
                    .color(colors.text_faint),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add(primary_button(i18n.card_action_label(kind), colors))
                    .clicked()
                {
                    action = Some(CardAction::Launch);
                }
                if ui.add(secondary_button(i18n.edit_button(), colors)).clicked() {
                    action = Some(CardAction::Edit(item.id.clone()));
                }
            });
        });
    });
    action
}

/// Version line under a card title; servers also show their port.
fn card_meta(item: &ManagedItem, i18n: I18n) -> String {
    match &item.port {
        Some(port) => format!(
            "{} {} · {} {}",
            i18n.version_label(),
            item.version,
            i18n.port_label(),
            port
        ),
        None => format!("{} {}", i18n.version_label(), item.version),
    }
}

fn render_editor(
    ui: &mut egui::Ui,
    editor: &mut ItemEditor,
    colors: &ThemePalette,
    i18n: I18n,
) -> Option<EditorOutcome> {
    let mut outcome = None;
    let kind = editor.kind();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(i18n.editor_title(kind, editor.is_new()).to_uppercase())
                .size(26.0)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add(primary_button(i18n.editor_save_label(editor.is_new()), colors))
                .clicked()
            {
                outcome = Some(editor.save());
            }
            if ui.add(secondary_button(i18n.cancel_button(), colors)).clicked() {
                outcome = Some(editor.cancel());
            }
        });
    });
    ui.add_space(10.0);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            let icon_button = egui::Button::new(RichText::new(icon_glyph(&editor.icon)).size(64.0))
                .min_size(Vec2::splat(128.0))
                .fill(colors.sunken_surface)
                .stroke(Stroke::new(1.0, colors.border));
            if ui
                .add(icon_button)
                .on_hover_text(format!("{}: {}", i18n.change_icon(), icon_name(&editor.icon)))
                .clicked()
            {
                editor.open_icon_picker();
            }
            ui.label(RichText::new(i18n.change_icon_hint()).small().color(colors.text_muted));
        });
        ui.add_space(16.0);

        egui::Grid::new("item_editor_fields")
            .num_columns(2)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                field_label(ui, i18n.name_label(), colors);
                ui.add(egui::TextEdit::singleline(&mut editor.name).desired_width(FIELD_WIDTH));
                ui.end_row();

                if kind == CollectionKind::Servers {
                    field_label(ui, i18n.port_label(), colors);
                    ui.add(egui::TextEdit::singleline(&mut editor.port).desired_width(FIELD_WIDTH));
                    ui.end_row();
                }

                field_label(ui, i18n.branch_label(), colors);
                egui::ComboBox::from_id_salt("item_branch")
                    .width(FIELD_WIDTH)
                    .selected_text(editor.branch.label())
                    .show_ui(ui, |ui| {
                        for branch in ItemType::BRANCHES {
                            ui.selectable_value(&mut editor.branch, branch, branch.label());
                        }
                    });
                ui.end_row();

                field_label(ui, i18n.version_label(), colors);
                egui::ComboBox::from_id_salt("item_version")
                    .width(FIELD_WIDTH)
                    .selected_text(editor.version.as_str())
                    .show_ui(ui, |ui| {
                        for version in VERSIONS {
                            ui.selectable_value(&mut editor.version, version.to_owned(), version);
                        }
                    });
                ui.end_row();

                field_label(ui, i18n.game_dir_label(), colors);
                ui.add(egui::TextEdit::singleline(&mut editor.game_dir).desired_width(FIELD_WIDTH));
                ui.end_row();

                field_label(ui, i18n.resolution_label(), colors);
                resolution_combo(ui, "item_resolution", &mut editor.resolution);
                ui.end_row();
            });
    });

    ui.add_space(8.0);
    ui.separator();
    let arrow = if editor.show_more_options { "⏶" } else { "⏷" };
    if ui
        .add(
            egui::Button::new(
                RichText::new(format!("{} {arrow}", i18n.more_options().to_uppercase()))
                    .strong()
                    .color(colors.text_muted),
            )
            .frame(false),
        )
        .clicked()
    {
        editor.toggle_more_options();
    }

    if editor.show_more_options {
        section_frame(colors).show(ui, |ui| {
            ui.set_width(ui.available_width());
            field_label(ui, i18n.memory_label(), colors);
            render_memory_control(ui, &mut editor.memory, "item_memory", colors, true);
            ui.add_space(8.0);
            egui::Grid::new("item_editor_java")
                .num_columns(2)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    field_label(ui, i18n.java_path_label(), colors);
                    ui.add(
                        egui::TextEdit::singleline(&mut editor.java_path)
                            .desired_width(FIELD_WIDTH),
                    );
                    ui.end_row();

                    field_label(ui, i18n.jvm_args_label(), colors);
                    render_jvm_args(ui, &mut editor.memory);
                    ui.end_row();
                });
        });
    }

    outcome
}

fn field_label(ui: &mut egui::Ui, text: &str, colors: &ThemePalette) {
    ui.label(
        RichText::new(text.to_uppercase())
            .small()
            .strong()
            .color(colors.text_muted),
    );
}

pub(super) fn resolution_combo(ui: &mut egui::Ui, id: &str, resolution: &mut String) {
    egui::ComboBox::from_id_salt(id)
        .width(FIELD_WIDTH)
        .selected_text(format!("🖵 {resolution}"))
        .show_ui(ui, |ui| {
            for option in RESOLUTIONS {
                ui.selectable_value(resolution, option.to_owned(), option);
            }
        });
}

/// Slider plus number field; both write through `set_memory_mb`.
pub(super) fn render_memory_control(
    ui: &mut egui::Ui,
    memory: &mut MemoryAllocation,
    id: &str,
    colors: &ThemePalette,
    show_marker_labels: bool,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            let width = (ui.available_width() - 140.0).max(200.0);
            let mut slider_value = i64::from(memory.memory_mb());
            ui.spacing_mut().slider_width = width;
            let slider = egui::Slider::new(
                &mut slider_value,
                i64::from(MIN_MEMORY_MB)..=i64::from(MAX_MEMORY_MB),
            )
            .step_by(1024.0)
            .show_value(false);
            if ui.push_id(id, |ui| ui.add(slider)).inner.changed() {
                memory.set_memory_mb(slider_value);
            }

            let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 18.0), egui::Sense::hover());
            let filled = egui::Rect::from_min_size(
                rect.left_top(),
                Vec2::new(rect.width() * memory.fill_fraction(), 2.0),
            );
            ui.painter().rect_filled(filled, 0.0, colors.accent);
            let span = (MAX_MEMORY_MB - MIN_MEMORY_MB) as f32;
            for marker in memory_markers(MIN_MEMORY_MB, MAX_MEMORY_MB) {
                let x = rect.left() + rect.width() * (marker - MIN_MEMORY_MB) as f32 / span;
                ui.painter().line_segment(
                    [egui::pos2(x, rect.top()), egui::pos2(x, rect.top() + 6.0)],
                    Stroke::new(1.0, colors.border_strong),
                );
                if show_marker_labels {
                    ui.painter().text(
                        egui::pos2(x, rect.top() + 7.0),
                        egui::Align2::CENTER_TOP,
                        format_gigabytes(marker),
                        egui::FontId::proportional(10.0),
                        colors.text_faint,
                    );
                }
            }
        });

        let mut field_value = i64::from(memory.memory_mb());
        let field = egui::DragValue::new(&mut field_value).speed(64.0);
        if ui.push_id((id, "field"), |ui| ui.add(field)).inner.changed() {
            memory.set_memory_mb(field_value);
        }
        ui.label(RichText::new("MB").color(colors.text_muted));
    });
}

/// Free-text JVM arguments; edits feed back into the memory value when parseable.
pub(super) fn render_jvm_args(ui: &mut egui::Ui, memory: &mut MemoryAllocation) {
    let mut text = memory.jvm_args().to_owned();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(2)
            .desired_width(FIELD_WIDTH)
            .code_editor(),
    );
    if response.changed() {
        memory.set_jvm_args(text);
    }
}

/// Icon catalog dialog. Clicking outside or pressing Escape closes it unchanged.
pub(super) fn render_icon_picker(
    ctx: &egui::Context,
    editor: &mut ItemEditor,
    colors: &ThemePalette,
    i18n: I18n,
) {
    if !editor.icon_picker_open() {
        return;
    }
    let mut selected = None;
    let mut close = false;
    let modal = egui::Modal::new(egui::Id::new("icon_picker")).show(ctx, |ui| {
        ui.set_max_width(560.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(i18n.choose_icon().to_uppercase())
                    .size(22.0)
                    .strong(),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.add(egui::Button::new("✖").frame(false)).clicked() {
                    close = true;
                }
            });
        });
        ui.add_space(8.0);
        egui::Grid::new("icon_picker_grid")
            .num_columns(4)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (index, choice) in ICONS.iter().enumerate() {
                    let label = RichText::new(format!("{}\n{}", icon_glyph(choice.key), choice.name));
                    let button = egui::Button::new(label)
                        .min_size(Vec2::new(120.0, 90.0))
                        .fill(colors.sunken_surface)
                        .stroke(Stroke::new(1.0, colors.border));
                    if ui.add(button).clicked() {
                        selected = Some(choice.key);
                    }
                    if index % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(key) = selected {
        editor.select_icon(key);
    } else if close || modal.should_close() {
        editor.close_icon_picker();
    }
}
