use log::{debug, info};

use crate::engine::state::{LaunchState, Page, PageProps, UserAction};

pub mod models;
pub mod state;

/// Seconds the footer progress bar takes to fill once a launch is confirmed.
pub const LAUNCH_DURATION_SECS: f32 = 3.0;

/// Page navigation and the launch button flow.
pub struct LauncherEngine {
    pub page: Page,
    pub props: PageProps,
    pub launch: LaunchState,
}

impl LauncherEngine {
    pub fn new(page: Page, props: PageProps) -> Self {
        Self {
            page,
            props,
            launch: LaunchState::Idle,
        }
    }

    pub fn is_launching(&self) -> bool {
        matches!(self.launch, LaunchState::Launching { .. })
    }

    pub fn launch_modal_open(&self) -> bool {
        self.launch == LaunchState::Confirming
    }

    pub fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Navigate { page, props } => {
                debug!("action: Navigate to {:?} with {:?}", page, props);
                self.page = page;
                self.props = props;
            }
            UserAction::ClickLaunch => {
                if self.is_launching() {
                    debug!("action: ClickLaunch ignored while launching");
                } else {
                    info!("action: ClickLaunch");
                    self.launch = LaunchState::Confirming;
                }
            }
            UserAction::ConfirmTerminateAndLaunch => {
                info!("Terminate & Launch confirmed.");
                self.launch = LaunchState::Launching { progress: 0.0 };
            }
            UserAction::LaunchAnyway => {
                info!("Launch Anyway confirmed.");
                self.launch = LaunchState::Launching { progress: 0.0 };
            }
            UserAction::CancelLaunch => {
                debug!("action: CancelLaunch");
                if self.launch == LaunchState::Confirming {
                    self.launch = LaunchState::Idle;
                }
            }
            UserAction::LaunchComplete => {
                info!("Launch sequence complete.");
                self.launch = LaunchState::Idle;
            }
        }
    }

    /// Advance the launch progress by `dt` seconds. Returns `true` when it finishes.
    pub fn tick_launch(&mut self, dt: f32) -> bool {
        let LaunchState::Launching { progress } = self.launch else {
            return false;
        };
        let progress = (progress + dt / LAUNCH_DURATION_SECS).min(1.0);
        if progress >= 1.0 {
            self.handle_action(UserAction::LaunchComplete);
            return true;
        }
        self.launch = LaunchState::Launching { progress };
        false
    }

    pub fn launch_progress(&self) -> Option<f32> {
        match self.launch {
            LaunchState::Launching { progress } => Some(progress),
            _ => None,
        }
    }
}

impl Default for LauncherEngine {
    fn default() -> Self {
        Self::new(Page::Play, PageProps::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::SettingsSection;
    use crate::installations::CollectionKind;

    #[test]
    fn navigation_records_page_and_props() {
        let mut engine = LauncherEngine::default();
        assert_eq!(engine.page, Page::Play);

        engine.handle_action(UserAction::Navigate {
            page: Page::Installations,
            props: PageProps::Installations {
                tab: CollectionKind::Servers,
            },
        });
        assert_eq!(engine.page, Page::Installations);
        assert_eq!(engine.props.collection_hint(), Some(CollectionKind::Servers));

        engine.handle_action(UserAction::Navigate {
            page: Page::Settings,
            props: PageProps::Settings {
                section: SettingsSection::Accounts,
            },
        });
        assert_eq!(engine.props.settings_section(), Some(SettingsSection::Accounts));
        assert_eq!(engine.props.collection_hint(), None);
    }

    #[test]
    fn launch_requires_confirmation() {
        let mut engine = LauncherEngine::default();
        engine.handle_action(UserAction::ClickLaunch);
        assert!(engine.launch_modal_open());
        assert!(!engine.is_launching());

        engine.handle_action(UserAction::CancelLaunch);
        assert_eq!(engine.launch, LaunchState::Idle);

        engine.handle_action(UserAction::ClickLaunch);
        engine.handle_action(UserAction::ConfirmTerminateAndLaunch);
        assert!(engine.is_launching());
        assert!(!engine.launch_modal_open());
    }

    #[test]
    fn launch_anyway_also_starts() {
        let mut engine = LauncherEngine::default();
        engine.handle_action(UserAction::ClickLaunch);
        engine.handle_action(UserAction::LaunchAnyway);
        assert_eq!(engine.launch_progress(), Some(0.0));
    }

    #[test]
    fn click_while_launching_does_not_reopen_modal() {
        let mut engine = LauncherEngine::default();
        engine.handle_action(UserAction::ClickLaunch);
        engine.handle_action(UserAction::LaunchAnyway);
        engine.handle_action(UserAction::ClickLaunch);
        assert!(engine.is_launching());
        assert!(!engine.launch_modal_open());

        engine.handle_action(UserAction::CancelLaunch);
        assert!(engine.is_launching());
    }

    #[test]
    fn ticking_completes_launch() {
        let mut engine = LauncherEngine::default();
        assert!(!engine.tick_launch(1.0));

        engine.handle_action(UserAction::ClickLaunch);
        engine.handle_action(UserAction::ConfirmTerminateAndLaunch);
        assert!(!engine.tick_launch(LAUNCH_DURATION_SECS / 2.0));
        let progress = engine.launch_progress().expect("still launching");
        assert!((progress - 0.5).abs() < 1e-6);

        assert!(engine.tick_launch(LAUNCH_DURATION_SECS));
        assert_eq!(engine.launch, LaunchState::Idle);
    }
}
