use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".dukkan_core";
const LEDGER_DIR: &str = "ledgers";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.dukkan_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DUKKAN_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding ledger files under the given base.
pub fn ledgers_dir_in(base: &Path) -> PathBuf {
    base.join(LEDGER_DIR)
}

/// Path to the configuration file under the given base.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Creates the directory (and parents) if it does not already exist.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
