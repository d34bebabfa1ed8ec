use log::{info, warn};
use uuid::Uuid;

use crate::engine::models::{ManagedItem, installation_template, server_template};

pub mod editor;
pub mod memory;

use self::editor::{EditorOutcome, ItemEditor};

/// Which collection the Installations page is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CollectionKind {
    Installations,
    Servers,
}

impl CollectionKind {
    pub fn item_type_name(self) -> &'static str {
        match self {
            CollectionKind::Installations => "Installation",
            CollectionKind::Servers => "Server",
        }
    }

    pub fn template(self) -> ManagedItem {
        match self {
            CollectionKind::Installations => installation_template(),
            CollectionKind::Servers => server_template(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum View {
    List,
    Editing(Box<ItemEditor>),
}

/// Owns both collections and the list/edit view of the Installations page.
pub struct ItemListController {
    active: CollectionKind,
    installations: Vec<ManagedItem>,
    servers: Vec<ManagedItem>,
    view: View,
}

impl ItemListController {
    pub fn new(
        installations: Vec<ManagedItem>,
        servers: Vec<ManagedItem>,
        hint: Option<CollectionKind>,
    ) -> Self {
        Self {
            active: hint.unwrap_or(CollectionKind::Installations),
            installations,
            servers,
            view: View::List,
        }
    }

    pub fn active(&self) -> CollectionKind {
        self.active
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.view, View::Editing(_))
    }

    pub fn editor_mut(&mut self) -> Option<&mut ItemEditor> {
        match &mut self.view {
            View::Editing(editor) => Some(editor.as_mut()),
            View::List => None,
        }
    }

    pub fn items(&self) -> &[ManagedItem] {
        self.collection(self.active)
    }

    pub fn collection(&self, kind: CollectionKind) -> &[ManagedItem] {
        match kind {
            CollectionKind::Installations => &self.installations,
            CollectionKind::Servers => &self.servers,
        }
    }

    fn collection_mut(&mut self, kind: CollectionKind) -> &mut Vec<ManagedItem> {
        match kind {
            CollectionKind::Installations => &mut self.installations,
            CollectionKind::Servers => &mut self.servers,
        }
    }

    /// Open the editor on a clone of the active template with a fresh id.
    pub fn create_new(&mut self) {
        let mut item = self.active.template();
        item.id = self.fresh_id();
        info!(
            "installations: creating new {} {}",
            self.active.item_type_name(),
            item.id
        );
        self.view = View::Editing(Box::new(ItemEditor::new(item, true, self.active)));
    }

    /// Open the editor on an existing entry. Returns `false` when no entry has `id`.
    pub fn edit_existing(&mut self, id: &str) -> bool {
        let Some(item) = self.items().iter().find(|item| item.id == id).cloned() else {
            warn!("installations: no {} with id {}", self.active.item_type_name(), id);
            return false;
        };
        info!("installations: editing {} ({})", item.id, item.name);
        self.view = View::Editing(Box::new(ItemEditor::new(item, false, self.active)));
        true
    }

    /// Merge the editor's result into the active collection and go back to the list.
    pub fn save(&mut self, saved: ManagedItem) {
        let is_new = match &self.view {
            View::Editing(editor) => {
                if editor.item_id() != saved.id {
                    warn!(
                        "installations: editor for {} returned item {}",
                        editor.item_id(),
                        saved.id
                    );
                }
                editor.is_new()
            }
            View::List => {
                warn!("installations: save requested without an open editor");
                return;
            }
        };
        let kind = self.active;
        let items = self.collection_mut(kind);
        if is_new {
            items.insert(0, saved);
        } else if let Some(slot) = items.iter_mut().find(|item| item.id == saved.id) {
            *slot = saved;
        } else {
            warn!("installations: edited item {} no longer exists", saved.id);
        }
        self.view = View::List;
    }

    pub fn cancel(&mut self) {
        if self.is_editing() {
            info!("installations: edit cancelled");
        }
        self.view = View::List;
    }

    pub fn apply_outcome(&mut self, outcome: EditorOutcome) {
        match outcome {
            EditorOutcome::Save(item) => self.save(item),
            EditorOutcome::Cancel => self.cancel(),
        }
    }

    /// Switch the bound collection. Any open edit is dropped, never carried over.
    pub fn switch_collection(&mut self, kind: CollectionKind) {
        if kind == self.active {
            return;
        }
        if self.is_editing() {
            info!("installations: switching tabs discards the open edit");
        }
        self.active = kind;
        self.view = View::List;
    }

    /// Navigation hint from the shell, e.g. a "Servers" shortcut on the Play page.
    pub fn apply_hint(&mut self, hint: Option<CollectionKind>) {
        if let Some(kind) = hint {
            self.switch_collection(kind);
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            let taken = self
                .installations
                .iter()
                .chain(&self.servers)
                .any(|item| item.id == id);
            if !taken {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::{ItemType, sample_installations, sample_servers};

    fn controller() -> ItemListController {
        ItemListController::new(sample_installations(), sample_servers(), None)
    }

    fn save_open_editor(controller: &mut ItemListController) {
        let outcome = controller
            .editor_mut()
            .map(|editor| editor.save())
            .expect("editor open");
        controller.apply_outcome(outcome);
    }

    #[test]
    fn starts_in_list_on_hinted_collection() {
        assert_eq!(controller().active(), CollectionKind::Installations);
        let servers = ItemListController::new(
            sample_installations(),
            sample_servers(),
            Some(CollectionKind::Servers),
        );
        assert_eq!(servers.active(), CollectionKind::Servers);
        assert!(!servers.is_editing());
    }

    #[test]
    fn create_then_save_prepends_with_unique_id() {
        let mut controller = controller();
        let before = controller.items().to_vec();

        controller.create_new();
        let editor = controller.editor_mut().expect("editor open");
        assert!(editor.is_new());
        assert!(!editor.item_id().is_empty());
        editor.name = "Survival".into();
        save_open_editor(&mut controller);

        let after = controller.items();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0].name, "Survival");
        assert!(before.iter().all(|item| item.id != after[0].id));
        assert_eq!(&after[1..], before.as_slice());
        assert!(!controller.is_editing());
    }

    #[test]
    fn new_server_uses_server_template() {
        let mut controller = controller();
        controller.switch_collection(CollectionKind::Servers);
        controller.create_new();
        save_open_editor(&mut controller);

        let created = &controller.items()[0];
        assert_eq!(created.name, "New Server");
        assert_eq!(created.port.as_deref(), Some("4242"));
        assert_eq!(created.item_type, ItemType::Release);
        assert_eq!(controller.collection(CollectionKind::Installations), sample_installations());
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut controller = controller();
        let before = controller.items().to_vec();

        assert!(controller.edit_existing("2"));
        controller.editor_mut().expect("editor open").name = "Renamed".into();
        save_open_editor(&mut controller);

        let after = controller.items();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[1].id, "2");
        assert_eq!(after[1].name, "Renamed");
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn editing_unknown_id_stays_in_list() {
        let mut controller = controller();
        assert!(!controller.edit_existing("missing"));
        assert!(!controller.is_editing());
    }

    #[test]
    fn cancel_leaves_collection_untouched() {
        let mut controller = controller();
        let before = controller.items().to_vec();

        assert!(controller.edit_existing("1"));
        let editor = controller.editor_mut().expect("editor open");
        editor.name = "Scribbles".into();
        editor.game_dir = "nowhere".into();
        let outcome = editor.cancel();
        controller.apply_outcome(outcome);

        controller.create_new();
        controller.cancel();

        assert_eq!(controller.items(), before.as_slice());
        assert!(!controller.is_editing());
    }

    #[test]
    fn switching_collection_discards_open_edit() {
        let mut controller = controller();
        assert!(controller.edit_existing("3"));
        controller.editor_mut().expect("editor open").name = "Lost".into();

        controller.switch_collection(CollectionKind::Servers);

        assert!(!controller.is_editing());
        assert_eq!(controller.active(), CollectionKind::Servers);
        assert_eq!(controller.collection(CollectionKind::Installations), sample_installations());
        assert_eq!(controller.collection(CollectionKind::Servers), sample_servers());
    }

    #[test]
    fn same_collection_switch_keeps_editor() {
        let mut controller = controller();
        assert!(controller.edit_existing("1"));
        controller.apply_hint(Some(CollectionKind::Installations));
        assert!(controller.is_editing());
        controller.apply_hint(None);
        assert!(controller.is_editing());
    }

    #[test]
    fn save_without_editor_is_ignored() {
        let mut controller = controller();
        let stray = sample_servers().remove(0);
        controller.save(stray);
        assert_eq!(controller.items(), sample_installations().as_slice());
    }

    #[test]
    fn templates_follow_collection() {
        assert_eq!(CollectionKind::Installations.template().name, "New Installation");
        assert_eq!(CollectionKind::Servers.template().port.as_deref(), Some("4242"));
        assert_eq!(CollectionKind::Servers.item_type_name(), "Server");
    }
}
