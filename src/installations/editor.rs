use log::{debug, info};

use super::CollectionKind;
use super::memory::MemoryAllocation;
use crate::engine::models::{
    DEFAULT_JAVA_PATH, DEFAULT_PORT, DEFAULT_RESOLUTION, ItemType, ManagedItem,
};

/// What the editor hands back to its owner when the user leaves the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorOutcome {
    Save(ManagedItem),
    Cancel,
}

/// Working copy of one installation or server.
///
/// The fields are seeded from the item once and never written back until the
/// owner asks for [`ItemEditor::save`]. Memory, JVM arguments, resolution and
/// the Java path live only as long as the form is open.
#[derive(Clone, Debug)]
pub struct ItemEditor {
    original: ManagedItem,
    is_new: bool,
    kind: CollectionKind,
    pub name: String,
    pub port: String,
    pub icon: String,
    pub branch: ItemType,
    pub version: String,
    pub game_dir: String,
    pub resolution: String,
    pub java_path: String,
    pub memory: MemoryAllocation,
    pub show_more_options: bool,
    icon_picker_open: bool,
}

impl ItemEditor {
    pub fn new(item: ManagedItem, is_new: bool, kind: CollectionKind) -> Self {
        debug!(
            "editor: opening {} {} (new={})",
            kind.item_type_name(),
            item.id,
            is_new
        );
        Self {
            name: item.name.clone(),
            port: item.port.clone().unwrap_or_else(|| DEFAULT_PORT.to_owned()),
            icon: item.icon.clone(),
            branch: item.item_type.editable(),
            version: item.version.clone(),
            game_dir: item.path.clone(),
            resolution: DEFAULT_RESOLUTION.to_owned(),
            java_path: DEFAULT_JAVA_PATH.to_owned(),
            memory: MemoryAllocation::default(),
            show_more_options: false,
            icon_picker_open: false,
            original: item,
            is_new,
            kind,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.original.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Full replacement entity: the original item with the form fields laid over it.
    pub fn save(&self) -> EditorOutcome {
        let mut saved = self.original.clone();
        saved.name = self.name.clone();
        saved.item_type = self.branch;
        saved.icon = self.icon.clone();
        saved.version = self.version.clone();
        saved.path = self.game_dir.clone();
        if self.kind == CollectionKind::Servers {
            saved.port = Some(self.port.clone());
        }
        info!(
            "editor: saving {} {} ({})",
            self.kind.item_type_name(),
            saved.id,
            saved.name
        );
        EditorOutcome::Save(saved)
    }

    pub fn cancel(&self) -> EditorOutcome {
        debug!("editor: discarding edits for {}", self.original.id);
        EditorOutcome::Cancel
    }

    pub fn toggle_more_options(&mut self) {
        self.show_more_options = !self.show_more_options;
    }

    pub fn icon_picker_open(&self) -> bool {
        self.icon_picker_open
    }

    pub fn open_icon_picker(&mut self) {
        self.icon_picker_open = true;
    }

    /// Picking an icon also dismisses the picker.
    pub fn select_icon(&mut self, key: &str) {
        self.icon = key.to_owned();
        self.icon_picker_open = false;
    }

    /// Dismiss without choosing, e.g. a click outside the dialog.
    pub fn close_icon_picker(&mut self) {
        self.icon_picker_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::{sample_installations, sample_servers};

    fn saved(outcome: EditorOutcome) -> ManagedItem {
        match outcome {
            EditorOutcome::Save(item) => item,
            EditorOutcome::Cancel => panic!("expected a saved item"),
        }
    }

    #[test]
    fn seeds_fields_and_collapses_latest() {
        let item = sample_installations().remove(0);
        let editor = ItemEditor::new(item.clone(), false, CollectionKind::Installations);
        assert_eq!(editor.name, item.name);
        assert_eq!(editor.branch, ItemType::Release);
        assert_eq!(editor.port, DEFAULT_PORT);
        assert_eq!(editor.game_dir, item.path);
        assert_eq!(editor.memory, MemoryAllocation::default());
        assert!(!editor.is_new());
    }

    #[test]
    fn server_editor_keeps_existing_port() {
        let item = sample_servers().remove(1);
        let editor = ItemEditor::new(item, true, CollectionKind::Servers);
        assert!(editor.is_new());
        assert_eq!(editor.kind(), CollectionKind::Servers);
        assert_eq!(editor.port, "27015");
    }

    #[test]
    fn save_overlays_form_fields_on_original() {
        let item = sample_installations().remove(1);
        let mut editor = ItemEditor::new(item.clone(), false, CollectionKind::Installations);
        editor.name = "Nightly".into();
        editor.branch = ItemType::Pre;
        editor.version = "1.0".into();
        editor.game_dir = "/srv/nightly".into();
        editor.port = "9999".into();
        editor.memory.set_memory_mb(8192);

        let result = saved(editor.save());
        assert_eq!(result.id, item.id);
        assert_eq!(result.name, "Nightly");
        assert_eq!(result.item_type, ItemType::Pre);
        assert_eq!(result.version, "1.0");
        assert_eq!(result.path, "/srv/nightly");
        assert_eq!(result.last_played, item.last_played);
        assert_eq!(result.port, None);
    }

    #[test]
    fn server_save_carries_port() {
        let item = sample_servers().remove(0);
        let mut editor = ItemEditor::new(item, false, CollectionKind::Servers);
        editor.port = "25565".into();
        let result = saved(editor.save());
        assert_eq!(result.port.as_deref(), Some("25565"));
    }

    #[test]
    fn unchanged_latest_item_saves_as_release() {
        let item = sample_servers().remove(0);
        let editor = ItemEditor::new(item, false, CollectionKind::Servers);
        assert_eq!(saved(editor.save()).item_type, ItemType::Release);
    }

    #[test]
    fn icon_picker_closes_on_select_and_on_dismiss() {
        let item = sample_installations().remove(2);
        let mut editor = ItemEditor::new(item, false, CollectionKind::Installations);

        editor.open_icon_picker();
        assert!(editor.icon_picker_open());
        editor.select_icon("rocket");
        assert_eq!(editor.icon, "rocket");
        assert!(!editor.icon_picker_open());

        editor.open_icon_picker();
        editor.close_icon_picker();
        assert!(!editor.icon_picker_open());
        assert_eq!(editor.icon, "rocket");
    }

    #[test]
    fn more_options_is_a_local_toggle() {
        let item = sample_installations().remove(0);
        let mut editor = ItemEditor::new(item, false, CollectionKind::Installations);
        assert!(!editor.show_more_options);
        editor.toggle_more_options();
        assert!(editor.show_more_options);
        editor.toggle_more_options();
        assert!(!editor.show_more_options);
    }

    #[test]
    fn cancel_emits_nothing() {
        let item = sample_installations().remove(0);
        let mut editor = ItemEditor::new(item, false, CollectionKind::Installations);
        editor.name = "changed".into();
        assert_eq!(editor.cancel(), EditorOutcome::Cancel);
    }
}
