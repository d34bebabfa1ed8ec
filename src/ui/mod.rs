use eframe::egui::{
    self, Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Stroke, Vec2,
};
use log::debug;

use crate::engine::LauncherEngine;
use crate::engine::models::{Account, NewsItem};
use crate::engine::state::{Page, PageProps, SettingsSection, UserAction};
use crate::installations::{CollectionKind, ItemListController};
use crate::settings::SettingsState;
use crate::storage::Catalog;
use crate::util::truncate_text;

mod i18n;
mod installations;
mod settings;

use self::i18n::{I18n, Language};

const NEWS_SUMMARY_MAX_CHARS: usize = 220;
const PAGE_MAX_WIDTH: f32 = 1100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ThemePalette {
    bg: Color32,
    panel: Color32,
    surface: Color32,
    surface_elev: Color32,
    sunken_surface: Color32,
    border: Color32,
    border_strong: Color32,
    text_primary: Color32,
    text_muted: Color32,
    text_faint: Color32,
    accent: Color32,
    accent_soft: Color32,
    danger: Color32,
    success: Color32,
}

impl ThemePalette {
    const fn dark() -> Self {
        Self {
            bg: Color32::from_rgb(9, 12, 18),
            panel: Color32::from_rgb(15, 20, 28),
            surface: Color32::from_rgb(20, 27, 37),
            surface_elev: Color32::from_rgb(27, 36, 48),
            sunken_surface: Color32::from_rgb(12, 16, 23),
            border: Color32::from_rgb(44, 55, 70),
            border_strong: Color32::from_rgb(62, 78, 97),
            text_primary: Color32::from_rgb(229, 234, 241),
            text_muted: Color32::from_rgb(160, 172, 188),
            text_faint: Color32::from_rgb(112, 124, 140),
            accent: Color32::from_rgb(34, 123, 134),
            accent_soft: Color32::from_rgb(26, 84, 92),
            danger: Color32::from_rgb(200, 70, 70),
            success: Color32::from_rgb(96, 196, 120),
        }
    }

    const fn light() -> Self {
        Self {
            bg: Color32::from_rgb(238, 243, 248),
            panel: Color32::from_rgb(224, 232, 241),
            surface: Color32::from_rgb(246, 249, 253),
            surface_elev: Color32::from_rgb(255, 255, 255),
            sunken_surface: Color32::from_rgb(215, 224, 235),
            border: Color32::from_rgb(192, 203, 218),
            border_strong: Color32::from_rgb(168, 182, 202),
            text_primary: Color32::from_rgb(26, 36, 50),
            text_muted: Color32::from_rgb(78, 96, 118),
            text_faint: Color32::from_rgb(116, 132, 152),
            accent: Color32::from_rgb(30, 128, 140),
            accent_soft: Color32::from_rgb(160, 214, 220),
            danger: Color32::from_rgb(206, 72, 72),
            success: Color32::from_rgb(46, 150, 82),
        }
    }
}

impl Theme {
    const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    const fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette::dark(),
            Theme::Light => ThemePalette::light(),
        }
    }
}

fn tint(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

const LOCALE_LANGUAGE_CODES: [(&[&str], Language); 2] = [
    (&["uk", "ua", "ukr"], Language::Ukrainian),
    (&["en", "eng"], Language::English),
];

fn parse_locale_token(token: &str) -> Option<Language> {
    let normalized = token
        .split(['.', '@'])
        .next()
        .unwrap_or(token)
        .replace('-', "_")
        .to_ascii_lowercase();
    let language_code = normalized.split('_').next().unwrap_or(&normalized);

    LOCALE_LANGUAGE_CODES.iter().find_map(|(codes, language)| {
        codes
            .iter()
            .any(|code| *code == language_code)
            .then_some(*language)
    })
}

fn detect_system_language() -> Language {
    for var in ["LC_ALL", "LANGUAGE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            for token in value.split(':') {
                if let Some(language) = parse_locale_token(token) {
                    return language;
                }
            }
        }
    }

    Language::English
}

fn section_frame(colors: &ThemePalette) -> Frame {
    Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(14))
}

fn page_frame(colors: &ThemePalette) -> Frame {
    Frame::new()
        .fill(tint(colors.panel, 235))
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
}

fn badge_frame(color: Color32) -> Frame {
    Frame::new()
        .fill(tint(color, 40))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(255))
        .inner_margin(Margin::symmetric(10, 3))
}

fn primary_button(label: impl Into<egui::WidgetText>, colors: &ThemePalette) -> egui::Button<'_> {
    let label: egui::WidgetText = label.into();
    egui::Button::new(label)
        .fill(colors.accent)
        .stroke(Stroke::new(1.0, colors.accent))
        .min_size(Vec2::new(110.0, 34.0))
}

fn secondary_button(label: impl Into<egui::WidgetText>, colors: &ThemePalette) -> egui::Button<'_> {
    let label: egui::WidgetText = label.into();
    egui::Button::new(label)
        .fill(colors.surface_elev)
        .stroke(Stroke::new(1.0, colors.border_strong))
        .min_size(Vec2::new(90.0, 34.0))
}

fn tab_heading(ui: &mut egui::Ui, label: &str, active: bool, colors: &ThemePalette) -> bool {
    let color = if active {
        colors.text_primary
    } else {
        colors.text_faint
    };
    let response = ui.add(
        egui::Label::new(RichText::new(label.to_uppercase()).size(22.0).strong().color(color))
            .sense(egui::Sense::click()),
    );
    if active {
        let rect = response.rect;
        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(3.0, colors.accent),
        );
    }
    response.clicked()
}

fn apply_theme(ctx: &egui::Context, colors: &ThemePalette) {
    let is_dark = colors == &ThemePalette::dark();
    let mut visuals = if is_dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = colors.bg;
    visuals.window_fill = colors.panel;
    visuals.override_text_color = Some(colors.text_primary);
    visuals.hyperlink_color = colors.accent;
    visuals.widgets.noninteractive.bg_fill = colors.surface;
    visuals.widgets.inactive.bg_fill = colors.surface_elev;
    visuals.widgets.hovered.bg_fill = colors.accent_soft;
    visuals.widgets.active.bg_fill = colors.accent;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_strong);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.3, colors.accent);
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text_muted);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text_muted);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors.text_primary);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors.text_primary);
    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke = Stroke::new(1.0, colors.text_primary);
    visuals.faint_bg_color = colors.sunken_surface;
    visuals.extreme_bg_color = colors.sunken_surface;
    visuals.code_bg_color = colors.sunken_surface;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = Vec2::new(10.0, 10.0);
        style.spacing.button_padding = Vec2::new(14.0, 8.0);
    });
}

/// Start-up choices coming from the command line.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub page: Page,
    pub tab: Option<CollectionKind>,
    pub catalog: Catalog,
}

pub struct LauncherApp {
    engine: LauncherEngine,
    installations: ItemListController,
    settings: SettingsState,
    news: Vec<NewsItem>,
    launcher_version: &'static str,
    language: Language,
    theme: Theme,
    applied_theme: Option<Theme>,
}

impl LauncherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: LaunchOptions) -> Self {
        let mut app = Self::from_options(options);
        app.language = detect_system_language();
        app.refresh_theme_if_needed(&cc.egui_ctx);
        app
    }

    fn from_options(options: LaunchOptions) -> Self {
        let LaunchOptions { page, tab, catalog } = options;
        let props = match (page, tab) {
            (Page::Installations, Some(tab)) => PageProps::Installations { tab },
            _ => PageProps::None,
        };
        Self {
            engine: LauncherEngine::new(page, props),
            installations: ItemListController::new(catalog.installations, catalog.servers, tab),
            settings: SettingsState::new(catalog.accounts, None),
            news: catalog.news,
            launcher_version: env!("CARGO_PKG_VERSION"),
            language: Language::English,
            theme: Theme::Dark,
            applied_theme: None,
        }
    }

    fn colors(&self) -> ThemePalette {
        self.theme.palette()
    }

    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    fn refresh_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            apply_theme(ctx, &self.colors());
            self.applied_theme = Some(self.theme);
        }
    }

    fn active_account(&self) -> Option<&Account> {
        self.settings
            .accounts()
            .iter()
            .find(|account| self.settings.is_active_account(&account.id))
    }

    /// Route a user action to the engine and keep the pages in step with navigation.
    fn dispatch(&mut self, action: UserAction) {
        let previous = self.engine.page;
        self.engine.handle_action(action);
        if let UserAction::Navigate { page, .. } = action {
            if previous == Page::Installations && page != Page::Installations {
                self.installations.cancel();
            }
            let props = self.engine.props;
            match page {
                Page::Installations => self.installations.apply_hint(props.collection_hint()),
                Page::Settings => self.settings.apply_hint(props.settings_section()),
                Page::Play | Page::News => {}
            }
        }
    }

    fn navigate(&mut self, page: Page) {
        self.dispatch(UserAction::Navigate {
            page,
            props: PageProps::None,
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, colors: &ThemePalette, i18n: I18n) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(i18n.heading())
                    .size(26.0)
                    .strong()
                    .color(colors.accent),
            );
            ui.add_space(24.0);
            for page in Page::ALL {
                let active = self.engine.page == page;
                if tab_heading(ui, i18n.page_label(page), active, colors) && !active {
                    self.navigate(page);
                }
                ui.add_space(8.0);
            }
        });
    }

    fn render_footer(&mut self, ui: &mut egui::Ui, colors: &ThemePalette, i18n: I18n) {
        ui.horizontal(|ui| {
            let account_label = self
                .active_account()
                .map(|account| account.name.clone())
                .unwrap_or_else(|| i18n.no_account().to_owned());
            if ui.add(secondary_button(account_label, colors)).clicked() {
                self.dispatch(UserAction::Navigate {
                    page: Page::Settings,
                    props: PageProps::Settings {
                        section: SettingsSection::Accounts,
                    },
                });
            }
            badge_frame(colors.border_strong).show(ui, |ui| {
                ui.label(
                    RichText::new(i18n.launcher_version(self.launcher_version))
                        .small()
                        .color(colors.text_muted),
                );
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                match self.engine.launch_progress() {
                    Some(progress) => {
                        ui.add(
                            egui::ProgressBar::new(progress)
                                .desired_width(260.0)
                                .text(i18n.launching()),
                        );
                    }
                    None => {
                        let launch = primary_button(
                            RichText::new(i18n.launch_button()).size(20.0).strong(),
                            colors,
                        )
                        .min_size(Vec2::new(220.0, 48.0));
                        if ui.add(launch).clicked() {
                            self.dispatch(UserAction::ClickLaunch);
                        }
                    }
                }
            });
        });
    }

    fn render_launch_modal(&mut self, ctx: &egui::Context, colors: &ThemePalette, i18n: I18n) {
        if !self.engine.launch_modal_open() {
            return;
        }
        let mut chosen = None;
        let modal = egui::Modal::new(egui::Id::new("launch_confirm")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading(i18n.launch_confirm_title());
            ui.label(RichText::new(i18n.launch_confirm_body()).color(colors.text_muted));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.add(primary_button(i18n.terminate_and_launch(), colors)).clicked() {
                    chosen = Some(UserAction::ConfirmTerminateAndLaunch);
                }
                if ui.add(secondary_button(i18n.launch_anyway(), colors)).clicked() {
                    chosen = Some(UserAction::LaunchAnyway);
                }
                if ui.add(secondary_button(i18n.cancel_button(), colors)).clicked() {
                    chosen = Some(UserAction::CancelLaunch);
                }
            });
        });
        if chosen.is_none() && modal.should_close() {
            chosen = Some(UserAction::CancelLaunch);
        }
        if let Some(action) = chosen {
            self.dispatch(action);
        }
    }

    fn render_play(&mut self, ui: &mut egui::Ui, colors: &ThemePalette, i18n: I18n) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new(i18n.play_heading())
                    .size(40.0)
                    .strong()
                    .color(colors.text_primary),
            );
            ui.label(RichText::new(i18n.play_tagline()).color(colors.text_muted));
            ui.add_space(16.0);

            let featured = self
                .installations
                .collection(CollectionKind::Installations)
                .first()
                .cloned();
            if let Some(item) = featured {
                section_frame(colors).show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(crate::engine::models::icon_glyph(&item.icon)).size(36.0),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&item.name).size(20.0).strong());
                            ui.label(
                                RichText::new(format!("{} · {}", item.version, item.item_type.label()))
                                    .color(colors.text_muted),
                            );
                        });
                    });
                });
            }
            ui.add_space(16.0);

            let mut target = None;
            ui.horizontal(|ui| {
                if ui.add(secondary_button(i18n.manage_installations(), colors)).clicked() {
                    target = Some(CollectionKind::Installations);
                }
                if ui.add(secondary_button(i18n.manage_servers(), colors)).clicked() {
                    target = Some(CollectionKind::Servers);
                }
                if ui.add(secondary_button(i18n.page_label(Page::News), colors)).clicked() {
                    self.navigate(Page::News);
                }
            });
            if let Some(tab) = target {
                self.dispatch(UserAction::Navigate {
                    page: Page::Installations,
                    props: PageProps::Installations { tab },
                });
            }
        });
    }

    fn render_news(&self, ui: &mut egui::Ui, colors: &ThemePalette, i18n: I18n) {
        ui.label(
            RichText::new(i18n.page_label(Page::News).to_uppercase())
                .size(24.0)
                .strong(),
        );
        ui.add_space(6.0);
        if self.news.is_empty() {
            ui.label(RichText::new(i18n.news_empty()).color(colors.text_muted));
            return;
        }
        for item in &self.news {
            section_frame(colors).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&item.title).size(18.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&item.date).small().color(colors.text_faint));
                    });
                });
                ui.label(
                    RichText::new(truncate_text(&item.summary, NEWS_SUMMARY_MAX_CHARS))
                        .color(colors.text_muted),
                );
            });
            ui.add_space(4.0);
        }
    }

    /// Framed page body with a close button that returns to Play.
    fn render_page_container(
        &mut self,
        ui: &mut egui::Ui,
        colors: &ThemePalette,
        i18n: I18n,
        body: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let mut close = false;
        ui.vertical_centered(|ui| {
            ui.set_max_width(PAGE_MAX_WIDTH);
            page_frame(colors).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("✖").color(colors.text_muted)).frame(false))
                        .on_hover_text(i18n.close_button())
                        .clicked()
                    {
                        close = true;
                    }
                });
                ui.with_layout(Layout::top_down(Align::LEFT), |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| body(self, ui));
                });
            });
        });
        if close {
            self.navigate(Page::Play);
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_theme_if_needed(ctx);
        let colors = self.colors();
        let i18n = self.i18n();

        if self.engine.is_launching() {
            let dt = ctx.input(|input| input.stable_dt);
            if self.engine.tick_launch(dt) {
                debug!("ui: launch progress finished");
            }
            ctx.request_repaint();
        }

        let page = self.engine.page;
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(colors.panel)
                    .stroke(Stroke::new(1.0, colors.border))
                    .inner_margin(Margin::symmetric(18, 12)),
            )
            .show(ctx, |ui| self.render_header(ui, &colors, i18n));

        egui::TopBottomPanel::bottom("footer")
            .frame(
                Frame::new()
                    .fill(colors.panel)
                    .stroke(Stroke::new(1.0, colors.border))
                    .inner_margin(Margin::symmetric(18, 12)),
            )
            .show(ctx, |ui| self.render_footer(ui, &colors, i18n));

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(colors.bg)
                    .inner_margin(Margin::symmetric(24, 18)),
            )
            .show(ctx, |ui| match page {
                Page::Play => self.render_play(ui, &colors, i18n),
                Page::Installations => self.render_page_container(ui, &colors, i18n, |app, ui| {
                    installations::render_installations(app, ui, &colors, i18n);
                }),
                Page::News => self.render_page_container(ui, &colors, i18n, |app, ui| {
                    app.render_news(ui, &colors, i18n);
                }),
                Page::Settings => self.render_page_container(ui, &colors, i18n, |app, ui| {
                    settings::render_settings(app, ui, &colors, i18n);
                }),
            });

        self.render_launch_modal(ctx, &colors, i18n);
        if let Some(editor) = self.installations.editor_mut() {
            installations::render_icon_picker(ctx, editor, &colors, i18n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::LaunchState;

    fn app() -> LauncherApp {
        LauncherApp::from_options(LaunchOptions {
            page: Page::Play,
            tab: None,
            catalog: Catalog::default(),
        })
    }

    #[test]
    fn parses_supported_languages_from_locale_tokens() {
        let samples = [
            ("en_US.UTF-8", Language::English),
            ("uk_UA.UTF-8", Language::Ukrainian),
            ("ua-UA", Language::Ukrainian),
            ("eng_US", Language::English),
            ("uk_UA@euro", Language::Ukrainian),
        ];

        for (token, expected) in samples {
            assert_eq!(parse_locale_token(token), Some(expected));
        }
    }

    #[test]
    fn ignores_unknown_language_tokens() {
        assert_eq!(parse_locale_token("pl_PL"), None);
    }

    #[test]
    fn cli_tab_opens_installations_on_servers() {
        let app = LauncherApp::from_options(LaunchOptions {
            page: Page::Installations,
            tab: Some(CollectionKind::Servers),
            catalog: Catalog::default(),
        });
        assert_eq!(app.engine.page, Page::Installations);
        assert_eq!(app.installations.active(), CollectionKind::Servers);
    }

    #[test]
    fn navigation_hint_switches_collection() {
        let mut app = app();
        app.dispatch(UserAction::Navigate {
            page: Page::Installations,
            props: PageProps::Installations {
                tab: CollectionKind::Servers,
            },
        });
        assert_eq!(app.installations.active(), CollectionKind::Servers);
    }

    #[test]
    fn leaving_installations_discards_open_edit() {
        let mut app = app();
        app.navigate(Page::Installations);
        app.installations.create_new();
        assert!(app.installations.is_editing());

        app.navigate(Page::News);
        assert!(!app.installations.is_editing());
        assert_eq!(
            app.installations.collection(CollectionKind::Installations).len(),
            Catalog::default().installations.len()
        );
    }

    #[test]
    fn footer_account_shortcut_opens_accounts_section() {
        let mut app = app();
        app.dispatch(UserAction::Navigate {
            page: Page::Settings,
            props: PageProps::Settings {
                section: SettingsSection::Accounts,
            },
        });
        assert_eq!(app.settings.section, SettingsSection::Accounts);
        assert_eq!(app.active_account().map(|a| a.name.as_str()), Some("DukeofRealms"));
    }

    #[test]
    fn launch_flow_runs_through_dispatch() {
        let mut app = app();
        app.dispatch(UserAction::ClickLaunch);
        assert_eq!(app.engine.launch, LaunchState::Confirming);
        app.dispatch(UserAction::LaunchAnyway);
        assert!(app.engine.is_launching());
    }
}
