use crate::engine::state::{Page, SettingsSection};
use crate::installations::CollectionKind;

use super::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Ukrainian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Ukrainian];

    pub const fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Ukrainian => "Українська",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    fn pick<'a>(self, english: &'a str, ukrainian: &'a str) -> &'a str {
        match self.language {
            Language::English => english,
            Language::Ukrainian => ukrainian,
        }
    }

    pub fn theme_label(self, theme: Theme) -> &'static str {
        match (theme, self.language) {
            (Theme::Dark, Language::English) => "Dark",
            (Theme::Dark, Language::Ukrainian) => "Темна",
            (Theme::Light, Language::English) => "Light",
            (Theme::Light, Language::Ukrainian) => "Світла",
        }
    }

    pub fn page_label(self, page: Page) -> &'static str {
        match page {
            Page::Play => self.pick("Play", "Грати"),
            Page::Installations => self.pick("Installations", "Інсталяції"),
            Page::News => self.pick("News", "Новини"),
            Page::Settings => self.pick("Settings", "Налаштування"),
        }
    }

    pub fn settings_section_label(self, section: SettingsSection) -> &'static str {
        match section {
            SettingsSection::Launcher => self.pick("Launcher", "Лаунчер"),
            SettingsSection::Accounts => self.pick("Accounts", "Облікові записи"),
            SettingsSection::Defaults => self.pick("Defaults", "Типові значення"),
            SettingsSection::About => self.pick("About", "Про програму"),
        }
    }

    pub fn collection_label(self, kind: CollectionKind) -> &'static str {
        match kind {
            CollectionKind::Installations => self.pick("Installations", "Інсталяції"),
            CollectionKind::Servers => self.pick("Servers", "Сервери"),
        }
    }

    pub fn heading(self) -> &'static str {
        self.pick("StarMade Launcher", "Лаунчер StarMade")
    }

    pub fn launcher_version(self, version: &str) -> String {
        match self.language {
            Language::English => format!("Launcher v{version}"),
            Language::Ukrainian => format!("Версія лаунчера v{version}"),
        }
    }

    pub fn no_account(self) -> &'static str {
        self.pick("Not signed in", "Вхід не виконано")
    }

    pub fn launch_button(self) -> &'static str {
        self.pick("LAUNCH", "ЗАПУСК")
    }

    pub fn launching(self) -> &'static str {
        self.pick("Launching...", "Запуск...")
    }

    pub fn launch_confirm_title(self) -> &'static str {
        self.pick("Game already running", "Гра вже запущена")
    }

    pub fn launch_confirm_body(self) -> &'static str {
        self.pick(
            "Another instance of StarMade appears to be running. Close it before launching a new one?",
            "Схоже, інший екземпляр StarMade уже працює. Закрити його перед новим запуском?",
        )
    }

    pub fn terminate_and_launch(self) -> &'static str {
        self.pick("Terminate & Launch", "Закрити й запустити")
    }

    pub fn launch_anyway(self) -> &'static str {
        self.pick("Launch Anyway", "Все одно запустити")
    }

    pub fn cancel_button(self) -> &'static str {
        self.pick("Cancel", "Скасувати")
    }

    pub fn close_button(self) -> &'static str {
        self.pick("Close", "Закрити")
    }

    pub fn play_heading(self) -> &'static str {
        self.pick("STARMADE", "STARMADE")
    }

    pub fn play_tagline(self) -> &'static str {
        self.pick(
            "Build, explore and fight across a voxel galaxy.",
            "Будуйте, досліджуйте та бийтеся у воксельній галактиці.",
        )
    }

    pub fn manage_installations(self) -> &'static str {
        self.pick("Manage installations", "Керувати інсталяціями")
    }

    pub fn manage_servers(self) -> &'static str {
        self.pick("Manage servers", "Керувати серверами")
    }

    pub fn news_empty(self) -> &'static str {
        self.pick("No news yet.", "Новин поки немає.")
    }

    pub fn new_item_button(self, kind: CollectionKind) -> &'static str {
        match kind {
            CollectionKind::Installations => self.pick("New Installation", "Нова інсталяція"),
            CollectionKind::Servers => self.pick("New Server", "Новий сервер"),
        }
    }

    pub fn empty_collection(self, kind: CollectionKind) -> &'static str {
        match kind {
            CollectionKind::Installations => {
                self.pick("No installations yet.", "Інсталяцій поки немає.")
            }
            CollectionKind::Servers => self.pick("No servers yet.", "Серверів поки немає."),
        }
    }

    pub fn unnamed_item(self) -> &'static str {
        self.pick("Unnamed", "Без назви")
    }

    pub fn card_status_label(self, kind: CollectionKind) -> &'static str {
        match kind {
            CollectionKind::Installations => self.pick("Last played", "Востаннє грали"),
            CollectionKind::Servers => self.pick("Status", "Стан"),
        }
    }

    pub fn card_action_label(self, kind: CollectionKind) -> &'static str {
        match kind {
            CollectionKind::Installations => self.pick("Play", "Грати"),
            CollectionKind::Servers => self.pick("Start", "Запустити"),
        }
    }

    pub fn edit_button(self) -> &'static str {
        self.pick("Edit", "Змінити")
    }

    pub fn editor_title(self, kind: CollectionKind, is_new: bool) -> &'static str {
        match (kind, is_new) {
            (CollectionKind::Installations, true) => {
                self.pick("New Installation", "Нова інсталяція")
            }
            (CollectionKind::Installations, false) => {
                self.pick("Edit Installation", "Редагувати інсталяцію")
            }
            (CollectionKind::Servers, true) => self.pick("New Server", "Новий сервер"),
            (CollectionKind::Servers, false) => self.pick("Edit Server", "Редагувати сервер"),
        }
    }

    pub fn editor_save_label(self, is_new: bool) -> &'static str {
        if is_new {
            self.pick("Create", "Створити")
        } else {
            self.pick("Save", "Зберегти")
        }
    }

    pub fn change_icon(self) -> &'static str {
        self.pick("Change icon", "Змінити іконку")
    }

    pub fn change_icon_hint(self) -> &'static str {
        self.pick("Click to change", "Натисніть, щоб змінити")
    }

    pub fn choose_icon(self) -> &'static str {
        self.pick("Choose an icon", "Оберіть іконку")
    }

    pub fn name_label(self) -> &'static str {
        self.pick("Name", "Назва")
    }

    pub fn port_label(self) -> &'static str {
        self.pick("Port", "Порт")
    }

    pub fn branch_label(self) -> &'static str {
        self.pick("Branch", "Гілка")
    }

    pub fn version_label(self) -> &'static str {
        self.pick("Version", "Версія")
    }

    pub fn game_dir_label(self) -> &'static str {
        self.pick("Game directory", "Тека гри")
    }

    pub fn resolution_label(self) -> &'static str {
        self.pick("Resolution", "Роздільна здатність")
    }

    pub fn more_options(self) -> &'static str {
        self.pick("More options", "Більше параметрів")
    }

    pub fn memory_label(self) -> &'static str {
        self.pick("Memory allocation", "Виділення пам'яті")
    }

    pub fn java_path_label(self) -> &'static str {
        self.pick("Java executable", "Виконуваний файл Java")
    }

    pub fn jvm_args_label(self) -> &'static str {
        self.pick("JVM arguments", "Аргументи JVM")
    }

    pub fn theme_title(self) -> &'static str {
        self.pick("Theme", "Тема")
    }

    pub fn theme_description(self) -> &'static str {
        self.pick("Colour scheme of the launcher.", "Кольорова схема лаунчера.")
    }

    pub fn language_title(self) -> &'static str {
        self.pick("Language", "Мова")
    }

    pub fn language_description(self) -> &'static str {
        self.pick("Language of the launcher interface.", "Мова інтерфейсу лаунчера.")
    }

    pub fn add_account(self) -> &'static str {
        self.pick("Add account", "Додати обліковий запис")
    }

    pub fn log_out(self) -> &'static str {
        self.pick("Log out", "Вийти")
    }

    pub fn active_badge(self) -> &'static str {
        self.pick("ACTIVE", "АКТИВНИЙ")
    }

    pub fn about_body(self) -> &'static str {
        self.pick(
            "Manage StarMade installations and servers, then launch the game from one place.",
            "Керуйте інсталяціями та серверами StarMade і запускайте гру з одного місця.",
        )
    }

    pub fn defaults_description(self) -> &'static str {
        self.pick(
            "Used when creating a new installation or server.",
            "Застосовуються під час створення нової інсталяції чи сервера.",
        )
    }

    pub fn default_game_dir_description(self) -> &'static str {
        self.pick(
            "Where new game files are placed.",
            "Куди розміщуються нові файли гри.",
        )
    }

    pub fn default_resolution_description(self) -> &'static str {
        self.pick("Initial window size of the game.", "Початковий розмір вікна гри.")
    }

    pub fn default_port_description(self) -> &'static str {
        self.pick("Port new servers listen on.", "Порт, який слухають нові сервери.")
    }

    pub fn default_memory_description(self) -> &'static str {
        self.pick(
            "Heap size handed to the Java runtime.",
            "Розмір купи для середовища Java.",
        )
    }

    pub fn default_jvm_args_description(self) -> &'static str {
        self.pick(
            "Extra flags passed to the Java runtime.",
            "Додаткові прапорці для середовища Java.",
        )
    }

    pub fn default_java_path_description(self) -> &'static str {
        self.pick(
            "Java executable used to start the game.",
            "Виконуваний файл Java для запуску гри.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_titles_follow_mode_and_collection() {
        let en = I18n::new(Language::English);
        assert_eq!(en.editor_title(CollectionKind::Servers, true), "New Server");
        assert_eq!(
            en.editor_title(CollectionKind::Installations, false),
            "Edit Installation"
        );
        assert_eq!(en.editor_save_label(true), "Create");
        assert_eq!(en.editor_save_label(false), "Save");
    }

    #[test]
    fn ukrainian_labels_are_localized() {
        let uk = I18n::new(Language::Ukrainian);
        assert_eq!(uk.collection_label(CollectionKind::Servers), "Сервери");
        assert_eq!(uk.editor_title(CollectionKind::Servers, true), "Новий сервер");
        assert_eq!(uk.editor_title(CollectionKind::Servers, false), "Редагувати сервер");
        assert_eq!(uk.theme_label(Theme::Light), "Світла");
    }
}
