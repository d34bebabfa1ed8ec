use eframe::egui::{self, Align, Layout, RichText, Stroke, Vec2};

use super::i18n::{I18n, Language};
use super::installations::{render_jvm_args, render_memory_control, resolution_combo};
use super::{
    LauncherApp, Theme, ThemePalette, badge_frame, section_frame, tab_heading, tint,
};
use crate::engine::state::SettingsSection;
use crate::installations::CollectionKind;

const SIDEBAR_WIDTH: f32 = 180.0;
const CONTROL_WIDTH: f32 = 300.0;

pub(super) fn render_settings(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    ui.horizontal_top(|ui| {
        ui.allocate_ui_with_layout(
            Vec2::new(SIDEBAR_WIDTH, 0.0),
            Layout::top_down(Align::LEFT),
            |ui| {
                for section in SettingsSection::ALL {
                    let active = app.settings.section == section;
                    let label = RichText::new(i18n.settings_section_label(section)).strong();
                    if ui
                        .add_sized(
                            Vec2::new(SIDEBAR_WIDTH, 32.0),
                            egui::Button::new(label)
                                .fill(if active { colors.accent_soft } else { colors.surface })
                                .stroke(Stroke::new(1.0, colors.border)),
                        )
                        .clicked()
                    {
                        app.settings.section = section;
                    }
                }
            },
        );
        ui.add_space(18.0);
        ui.vertical(|ui| match app.settings.section {
            SettingsSection::Launcher => render_launcher_section(app, ui, colors, i18n),
            SettingsSection::Accounts => render_accounts_section(app, ui, colors, i18n),
            SettingsSection::Defaults => render_defaults_section(app, ui, colors, i18n),
            SettingsSection::About => render_about_section(app, ui, colors, i18n),
        });
    });
}

fn section_heading(ui: &mut egui::Ui, title: &str, colors: &ThemePalette) {
    let rect = ui
        .label(RichText::new(title.to_uppercase()).size(20.0).strong())
        .rect;
    ui.painter().line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(2.0, tint(colors.text_primary, 26)),
    );
    ui.add_space(8.0);
}

/// Title and description on the left, the control on the right.
fn setting_row(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    colors: &ThemePalette,
    control: impl FnOnce(&mut egui::Ui),
) {
    section_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new(description).small().color(colors.text_muted));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.set_min_width(CONTROL_WIDTH);
                ui.with_layout(Layout::top_down(Align::RIGHT), control);
            });
        });
    });
}

fn render_launcher_section(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    section_heading(ui, i18n.settings_section_label(SettingsSection::Launcher), colors);
    setting_row(ui, i18n.theme_title(), i18n.theme_description(), colors, |ui| {
        egui::ComboBox::from_id_salt("theme_combo")
            .selected_text(i18n.theme_label(app.theme))
            .show_ui(ui, |ui| {
                for theme in Theme::ALL {
                    ui.selectable_value(&mut app.theme, theme, i18n.theme_label(theme));
                }
            });
    });
    setting_row(ui, i18n.language_title(), i18n.language_description(), colors, |ui| {
        egui::ComboBox::from_id_salt("language_combo")
            .selected_text(app.language.display_name())
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(&mut app.language, language, language.display_name());
                }
            });
    });
}

fn render_accounts_section(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(i18n.settings_section_label(SettingsSection::Accounts).to_uppercase())
                .size(20.0)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // No authentication backend; both buttons are placeholders.
            let _ = ui.add(
                egui::Button::new(format!("➕ {}", i18n.add_account()))
                    .fill(colors.accent)
                    .stroke(Stroke::new(1.0, colors.accent)),
            );
            let _ = ui.add(
                egui::Button::new(i18n.log_out())
                    .fill(tint(colors.danger, 40))
                    .stroke(Stroke::new(1.0, colors.danger)),
            );
        });
    });
    ui.add_space(8.0);

    let mut selected = None;
    for account in app.settings.accounts() {
        let active = app.settings.is_active_account(&account.id);
        let frame = if active {
            section_frame(colors)
                .fill(tint(colors.accent, 50))
                .stroke(Stroke::new(1.0, colors.accent))
        } else {
            section_frame(colors)
        };
        let response = frame
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("👤").size(28.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&account.name).size(17.0).strong());
                        ui.label(
                            RichText::new(format!("UUID: {}", account.uuid))
                                .small()
                                .color(colors.text_muted),
                        );
                    });
                    if active {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            badge_frame(colors.success).show(ui, |ui| {
                                ui.label(
                                    RichText::new(i18n.active_badge())
                                        .small()
                                        .strong()
                                        .color(colors.success),
                                );
                            });
                        });
                    }
                });
            })
            .response
            .interact(egui::Sense::click());
        if !active && response.clicked() {
            selected = Some(account.id.clone());
        }
        ui.add_space(4.0);
    }
    if let Some(id) = selected {
        app.settings.select_account(&id);
    }
}

fn render_defaults_section(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(i18n.settings_section_label(SettingsSection::Defaults).to_uppercase())
                .size(20.0)
                .strong(),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(i18n.defaults_description()).small().color(colors.text_muted));
        });
    });
    ui.add_space(6.0);

    let tab = app.settings.defaults_tab;
    ui.horizontal(|ui| {
        for kind in [CollectionKind::Installations, CollectionKind::Servers] {
            if tab_heading(ui, i18n.collection_label(kind), kind == tab, colors) {
                app.settings.defaults_tab = kind;
            }
            ui.add_space(12.0);
        }
    });
    ui.add_space(8.0);

    let kind = app.settings.defaults_tab;
    let form = app.settings.defaults_mut(kind);
    setting_row(ui, i18n.game_dir_label(), i18n.default_game_dir_description(), colors, |ui| {
        ui.add(egui::TextEdit::singleline(&mut form.game_dir).desired_width(CONTROL_WIDTH));
    });
    match kind {
        CollectionKind::Installations => {
            setting_row(
                ui,
                i18n.resolution_label(),
                i18n.default_resolution_description(),
                colors,
                |ui| resolution_combo(ui, "defaults_resolution", &mut form.resolution),
            );
        }
        CollectionKind::Servers => {
            setting_row(ui, i18n.port_label(), i18n.default_port_description(), colors, |ui| {
                ui.add(egui::TextEdit::singleline(&mut form.port).desired_width(CONTROL_WIDTH));
            });
        }
    }
    setting_row(ui, i18n.memory_label(), i18n.default_memory_description(), colors, |ui| {
        render_memory_control(ui, &mut form.memory, "defaults_memory", colors, false);
    });
    setting_row(ui, i18n.jvm_args_label(), i18n.default_jvm_args_description(), colors, |ui| {
        render_jvm_args(ui, &mut form.memory);
    });
    setting_row(ui, i18n.java_path_label(), i18n.default_java_path_description(), colors, |ui| {
        ui.add(egui::TextEdit::singleline(&mut form.java_path).desired_width(CONTROL_WIDTH));
    });
}

fn render_about_section(
    app: &mut LauncherApp,
    ui: &mut egui::Ui,
    colors: &ThemePalette,
    i18n: I18n,
) {
    section_heading(ui, i18n.settings_section_label(SettingsSection::About), colors);
    section_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(i18n.heading()).size(22.0).strong().color(colors.accent));
        ui.label(i18n.launcher_version(app.launcher_version));
        ui.label(RichText::new(i18n.about_body()).color(colors.text_muted));
    });
}
