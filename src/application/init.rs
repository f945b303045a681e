//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;

    println!("Initialized mindcare workspace at {}", path.display());
    println!("Language: {}", config.language);

    Ok(())
}
