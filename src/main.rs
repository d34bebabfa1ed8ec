use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

mod engine;
mod env;
mod installations;
mod settings;
mod storage;
mod ui;
mod util;

use crate::engine::state::Page;
use crate::installations::CollectionKind;

#[derive(Parser, Debug)]
#[command(
    name = "StarMade Launcher",
    author,
    version,
    about = "Desktop launcher for StarMade installations and servers"
)]
struct Cli {
    /// Print launcher version and exit without starting the UI.
    #[arg(long)]
    version_only: bool,

    /// Page shown on start-up.
    #[arg(long, value_enum, default_value_t = Page::Play)]
    page: Page,

    /// Collection to open on the installations page.
    #[arg(long, value_enum)]
    tab: Option<CollectionKind>,

    /// Catalog of installations, servers, accounts and news.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.version_only {
        println!("StarMade Launcher {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let catalog_path = cli.catalog.unwrap_or_else(env::catalog_path);
    info!("main: loading catalog from {}", catalog_path.display());
    let launch_options = ui::LaunchOptions {
        page: cli.page,
        tab: cli.tab,
        catalog: storage::load_catalog(&catalog_path),
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_icon(default_icon())
            .with_min_inner_size(eframe::egui::vec2(960.0, 600.0))
            .with_inner_size(eframe::egui::vec2(1240.0, 760.0)),
        ..Default::default()
    };
    eframe::run_native(
        "StarMade Launcher",
        options,
        Box::new(|cc| Ok(Box::new(ui::LauncherApp::new(cc, launch_options)))),
    )
}

fn default_icon() -> eframe::egui::IconData {
    // 2x2: deep space with a teal star.
    let rgba: Vec<u8> = vec![
        9, 12, 18, 255, 34, 123, 134, 255, //
        9, 12, 18, 255, 26, 84, 92, 255,
    ];
    eframe::egui::IconData {
        rgba,
        width: 2,
        height: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_up_flags() {
        let cli = Cli::parse_from([
            "starmade-launcher",
            "--page",
            "installations",
            "--tab",
            "servers",
            "--catalog",
            "/tmp/catalog.json",
        ]);
        assert_eq!(cli.page, Page::Installations);
        assert_eq!(cli.tab, Some(CollectionKind::Servers));
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/catalog.json")));
        assert!(!cli.version_only);
    }

    #[test]
    fn defaults_to_play_page() {
        let cli = Cli::parse_from(["starmade-launcher"]);
        assert_eq!(cli.page, Page::Play);
        assert_eq!(cli.tab, None);
    }
}
