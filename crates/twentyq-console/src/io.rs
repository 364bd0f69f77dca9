use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

use twentyq_core::{QuestionTree, TreeError};

use crate::ConsoleError;

fn check_file_path(path: &Path) -> Result<(), TreeError> {
    if path.as_os_str().is_empty() {
        return Err(TreeError::InvalidArgument {
            reason: "file path is empty".to_string(),
        });
    }
    if path.is_dir() {
        return Err(TreeError::InvalidArgument {
            reason: format!("'{}' is a directory", path.display()),
        });
    }
    Ok(())
}

/// Load a question tree from a text file on disk.
pub fn load_path(tree: &mut QuestionTree, path: impl AsRef<Path>) -> Result<(), TreeError> {
    let path = path.as_ref();
    check_file_path(path)?;
    let file = File::open(path)?;
    tree.load(BufReader::new(file))
}

/// Write a question tree to a text file, replacing any existing content.
pub fn save_path(tree: &QuestionTree, path: impl AsRef<Path>) -> Result<(), TreeError> {
    let path = path.as_ref();
    check_file_path(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    tree.save(&mut writer)
}

/// Write the tree snapshot as pretty JSON.
pub fn export_snapshot_json(
    tree: &QuestionTree,
    path: impl AsRef<Path>,
) -> Result<(), ConsoleError> {
    let path = path.as_ref();
    check_file_path(path)?;
    let json = tree.snapshot().to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}
