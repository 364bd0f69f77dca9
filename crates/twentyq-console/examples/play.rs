use std::path::PathBuf;

use log::info;
use twentyq_console::{ConsoleUi, load_path, save_path};
use twentyq_core::{GameConfig, QuestionTree, UserInterface};

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::builtin().expect("builtin config should parse");
    let mut tree = QuestionTree::from_config(&config);

    if let Some(path) = path.as_ref().filter(|p| p.exists()) {
        load_path(&mut tree, path).expect("failed to load question tree");
    }

    let mut ui = ConsoleUi::stdio();
    ui.print("Think of an object and I will try to guess it.");
    loop {
        tree.play(&mut ui);
        ui.print("Do you want to play again?");
        if !ui.read_bool() {
            break;
        }
    }

    ui.print(&format!(
        "Games played: {}, computer won: {}",
        tree.total_games_played(),
        tree.total_games_won()
    ));

    if let Some(path) = path {
        save_path(&tree, &path).expect("failed to save question tree");
        info!("saved tree to {}", path.display());
    }
}
