use serde::{Deserialize, Serialize};

/// Release channel of an installation or server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Latest,
    Release,
    Dev,
    Archive,
    Pre,
}

impl ItemType {
    /// Branches offered by the editor. `Latest` is display-only.
    pub const BRANCHES: [ItemType; 4] = [
        ItemType::Release,
        ItemType::Dev,
        ItemType::Pre,
        ItemType::Archive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemType::Latest => "Latest",
            ItemType::Release => "Release",
            ItemType::Dev => "Dev",
            ItemType::Pre => "Pre-Release",
            ItemType::Archive => "Archive",
        }
    }

    /// Collapse display-only variants into something the editor can offer.
    #[must_use]
    pub fn editable(self) -> Self {
        match self {
            ItemType::Latest => ItemType::Release,
            other => other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedItem {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub icon: String,
    pub path: String,
    pub last_played: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub uuid: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub date: String,
    pub summary: String,
}

pub struct IconChoice {
    pub key: &'static str,
    pub name: &'static str,
}

pub const ICONS: [IconChoice; 12] = [
    IconChoice { key: "release", name: "Release" },
    IconChoice { key: "dev", name: "Dev Build" },
    IconChoice { key: "pre", name: "Pre-release" },
    IconChoice { key: "archive", name: "Archive" },
    IconChoice { key: "rocket", name: "Rocket" },
    IconChoice { key: "planet", name: "Planet" },
    IconChoice { key: "star", name: "Star" },
    IconChoice { key: "server", name: "Server" },
    IconChoice { key: "code", name: "Code" },
    IconChoice { key: "bolt", name: "Bolt" },
    IconChoice { key: "beaker", name: "Beaker" },
    IconChoice { key: "cube", name: "Cube" },
];

pub const VERSIONS: [&str; 3] = ["0.203.175", "24w14a", "1.0"];

pub const RESOLUTIONS: [&str; 4] = ["1280x720", "1920x1080", "2560x1440", "3840x2160"];

pub const DEFAULT_RESOLUTION: &str = "1920x1080";
pub const DEFAULT_PORT: &str = "4242";
pub const DEFAULT_JAVA_PATH: &str = r"C:\Program Files\Java\jdk-17\bin\javaw.exe";

/// Human-readable name for an icon key; unknown keys are shown as-is.
pub fn icon_name(key: &str) -> &str {
    ICONS
        .iter()
        .find(|choice| choice.key == key)
        .map_or(key, |choice| choice.name)
}

/// Single glyph used to draw an icon key inside cards and the picker.
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "latest" | "release" => "🚀",
        "dev" => "🛠",
        "pre" => "🧪",
        "archive" => "📦",
        "rocket" => "🚀",
        "planet" => "🌍",
        "star" => "⭐",
        "server" => "🖧",
        "code" => "⌨",
        "bolt" => "⚡",
        "beaker" => "⚗",
        "cube" => "⬛",
        _ => "❔",
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    version: &str,
    item_type: ItemType,
    icon: &str,
    path: &str,
    last_played: &str,
    port: Option<&str>,
) -> ManagedItem {
    ManagedItem {
        id: id.to_owned(),
        name: name.to_owned(),
        version: version.to_owned(),
        item_type,
        icon: icon.to_owned(),
        path: path.to_owned(),
        last_played: last_played.to_owned(),
        port: port.map(str::to_owned),
    }
}

pub fn sample_installations() -> Vec<ManagedItem> {
    vec![
        item(
            "1",
            "Latest Release",
            "0.203.175",
            ItemType::Latest,
            "latest",
            r"C:\Games\StarMade\Instances\latest-release",
            "2 hours ago",
            None,
        ),
        item(
            "2",
            "Dev Build",
            "24w14a",
            ItemType::Dev,
            "dev",
            r"C:\Games\StarMade\Instances\dev-build",
            "3 days ago",
            None,
        ),
        item(
            "3",
            "Legacy Version",
            "1.0",
            ItemType::Archive,
            "archive",
            r"C:\Games\StarMade\Instances\archive-1.0",
            "Over a year ago",
            None,
        ),
    ]
}

pub fn sample_servers() -> Vec<ManagedItem> {
    vec![
        item(
            "s1",
            "Official EU Server",
            "0.203.175",
            ItemType::Latest,
            "server",
            r"C:\Games\StarMade\Servers\official-eu",
            "Online",
            Some("4242"),
        ),
        item(
            "s2",
            "Creative Build World",
            "24w14a",
            ItemType::Dev,
            "cube",
            r"C:\Games\StarMade\Servers\creative-build",
            "5 minutes ago",
            Some("27015"),
        ),
        item(
            "s3",
            "Legacy PvP Arena",
            "1.0",
            ItemType::Archive,
            "bolt",
            r"C:\Games\StarMade\Servers\pvp-legacy",
            "Offline",
            Some("4243"),
        ),
    ]
}

/// Template cloned when the user creates a new installation.
pub fn installation_template() -> ManagedItem {
    item(
        "",
        "New Installation",
        "0.203.175",
        ItemType::Release,
        "release",
        r"C:\Games\StarMade\Instances\new-installation",
        "Never",
        None,
    )
}

/// Template cloned when the user creates a new server.
pub fn server_template() -> ManagedItem {
    item(
        "",
        "New Server",
        "0.203.175",
        ItemType::Release,
        "server",
        r"C:\Games\StarMade\Servers\new-server",
        "Never",
        Some(DEFAULT_PORT),
    )
}

pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".into(),
            name: "DukeofRealms".into(),
            uuid: "8d3b4e2a-1b9c-4f7d-8a6e-3c5d7f9a1b2c".into(),
        },
        Account {
            id: "2".into(),
            name: "GuestUser123".into(),
            uuid: "f4a7b8e1-5c6d-4e8f-9a1b-2c3d4e5f6a7b".into(),
        },
    ]
}

pub fn sample_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "StarMade 0.203.175 released".into(),
            date: "2024-04-02".into(),
            summary: "Stability fixes for fleets, faster sector loading and a reworked shipyard UI."
                .into(),
        },
        NewsItem {
            title: "Dev build 24w14a".into(),
            date: "2024-04-05".into(),
            summary: "Experimental lighting pipeline and new planet generation. Expect bugs!"
                .into(),
        },
        NewsItem {
            title: "Community build contest".into(),
            date: "2024-03-20".into(),
            summary: "Submit your best stations before the end of the month to win a spot on the official server."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_collapses_to_release_when_editing() {
        assert_eq!(ItemType::Latest.editable(), ItemType::Release);
        assert_eq!(ItemType::Dev.editable(), ItemType::Dev);
        assert!(!ItemType::BRANCHES.contains(&ItemType::Latest));
    }

    #[test]
    fn managed_item_uses_launcher_json_field_names() {
        let raw = r#"{
            "id": "7",
            "name": "Modded",
            "version": "1.0",
            "type": "pre",
            "icon": "star",
            "path": "/games/modded",
            "lastPlayed": "Never"
        }"#;
        let parsed: ManagedItem = serde_json::from_str(raw).expect("valid item");
        assert_eq!(parsed.item_type, ItemType::Pre);
        assert_eq!(parsed.last_played, "Never");
        assert_eq!(parsed.port, None);

        let json = serde_json::to_string(&parsed).expect("serializable");
        assert!(json.contains("\"lastPlayed\""));
        assert!(!json.contains("port"));
    }

    #[test]
    fn unknown_icon_keys_fall_back_to_the_key() {
        assert_eq!(icon_name("bolt"), "Bolt");
        assert_eq!(icon_name("custom"), "custom");
    }

    #[test]
    fn sample_ids_are_unique_across_collections() {
        let mut ids: Vec<String> = sample_installations()
            .into_iter()
            .chain(sample_servers())
            .map(|item| item.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
