use crate::installations::CollectionKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Page {
    Play,
    Installations,
    News,
    Settings,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Play, Page::Installations, Page::News, Page::Settings];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSection {
    Launcher,
    Accounts,
    About,
    Defaults,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::Launcher,
        SettingsSection::Accounts,
        SettingsSection::Defaults,
        SettingsSection::About,
    ];
}

/// Extra context a page is opened with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageProps {
    #[default]
    None,
    Installations {
        tab: CollectionKind,
    },
    Settings {
        section: SettingsSection,
    },
}

impl PageProps {
    pub fn collection_hint(self) -> Option<CollectionKind> {
        match self {
            PageProps::Installations { tab } => Some(tab),
            _ => None,
        }
    }

    pub fn settings_section(self) -> Option<SettingsSection> {
        match self {
            PageProps::Settings { section } => Some(section),
            _ => None,
        }
    }
}

// The launch button's lifecycle. Nothing here starts a process.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LaunchState {
    Idle,
    Confirming,
    Launching { progress: f32 },
}

// Actions triggered by the user from the UI layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserAction {
    Navigate { page: Page, props: PageProps },
    ClickLaunch,
    ConfirmTerminateAndLaunch,
    LaunchAnyway,
    CancelLaunch,
    LaunchComplete,
}
