use log::info;

use crate::engine::models::{Account, DEFAULT_JAVA_PATH, DEFAULT_PORT, DEFAULT_RESOLUTION};
use crate::engine::state::SettingsSection;
use crate::installations::CollectionKind;
use crate::installations::memory::MemoryAllocation;

/// Default game settings for one collection kind, kept for the session only.
#[derive(Clone, Debug)]
pub struct DefaultsForm {
    pub game_dir: String,
    pub resolution: String,
    pub port: String,
    pub java_path: String,
    pub memory: MemoryAllocation,
}

impl DefaultsForm {
    pub fn new(kind: CollectionKind) -> Self {
        let game_dir = match kind {
            CollectionKind::Installations => r"C:\Games\StarMade\Instances\default",
            CollectionKind::Servers => r"C:\Games\StarMade\Servers\default",
        };
        Self {
            game_dir: game_dir.to_owned(),
            resolution: DEFAULT_RESOLUTION.to_owned(),
            port: DEFAULT_PORT.to_owned(),
            java_path: DEFAULT_JAVA_PATH.to_owned(),
            memory: MemoryAllocation::default(),
        }
    }
}

pub struct SettingsState {
    pub section: SettingsSection,
    pub defaults_tab: CollectionKind,
    installation_defaults: DefaultsForm,
    server_defaults: DefaultsForm,
    accounts: Vec<Account>,
    active_account: Option<String>,
}

impl SettingsState {
    pub fn new(accounts: Vec<Account>, section: Option<SettingsSection>) -> Self {
        let active_account = accounts.first().map(|account| account.id.clone());
        Self {
            section: section.unwrap_or(SettingsSection::Launcher),
            defaults_tab: CollectionKind::Installations,
            installation_defaults: DefaultsForm::new(CollectionKind::Installations),
            server_defaults: DefaultsForm::new(CollectionKind::Servers),
            accounts,
            active_account,
        }
    }

    pub fn defaults_mut(&mut self, kind: CollectionKind) -> &mut DefaultsForm {
        match kind {
            CollectionKind::Installations => &mut self.installation_defaults,
            CollectionKind::Servers => &mut self.server_defaults,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_active_account(&self, id: &str) -> bool {
        self.active_account.as_deref() == Some(id)
    }

    /// Make `id` the active account. Unknown ids are ignored.
    pub fn select_account(&mut self, id: &str) {
        if self.accounts.iter().any(|account| account.id == id) {
            info!("settings: active account is now {id}");
            self.active_account = Some(id.to_owned());
        }
    }

    /// Navigation into Settings with an explicit section wins over the last one shown.
    pub fn apply_hint(&mut self, section: Option<SettingsSection>) {
        if let Some(section) = section {
            self.section = section;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::sample_accounts;

    #[test]
    fn first_account_starts_active() {
        let settings = SettingsState::new(sample_accounts(), None);
        assert!(settings.is_active_account("1"));
        assert!(!settings.is_active_account("2"));
        assert_eq!(settings.section, SettingsSection::Launcher);
    }

    #[test]
    fn selecting_accounts() {
        let mut settings = SettingsState::new(sample_accounts(), None);
        settings.select_account("2");
        assert!(settings.is_active_account("2"));
        settings.select_account("ghost");
        assert!(settings.is_active_account("2"));
    }

    #[test]
    fn no_accounts_means_none_active() {
        let settings = SettingsState::new(Vec::new(), Some(SettingsSection::About));
        assert!(!settings.is_active_account("1"));
        assert_eq!(settings.section, SettingsSection::About);
    }

    #[test]
    fn defaults_forms_are_independent() {
        let mut settings = SettingsState::new(sample_accounts(), None);
        settings
            .defaults_mut(CollectionKind::Servers)
            .memory
            .set_memory_mb(12288);
        settings.defaults_mut(CollectionKind::Servers).port = "5555".into();

        let installs = settings.defaults_mut(CollectionKind::Installations);
        assert_eq!(installs.memory.memory_mb(), 4096);
        assert_eq!(installs.port, DEFAULT_PORT);
        assert!(installs.game_dir.ends_with(r"Instances\default"));

        let servers = settings.defaults_mut(CollectionKind::Servers);
        assert_eq!(servers.memory.jvm_args(), "-Xms12G -Xmx12G");
        assert!(servers.game_dir.ends_with(r"Servers\default"));
    }

    #[test]
    fn hint_switches_section() {
        let mut settings = SettingsState::new(sample_accounts(), None);
        settings.apply_hint(Some(SettingsSection::Defaults));
        assert_eq!(settings.section, SettingsSection::Defaults);
        settings.apply_hint(None);
        assert_eq!(settings.section, SettingsSection::Defaults);
    }
}
