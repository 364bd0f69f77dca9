mod console;
mod error;
mod io;

pub use console::{ConsoleUi, parse_yes_no};
pub use error::ConsoleError;
pub use io::{export_snapshot_json, load_path, save_path};
