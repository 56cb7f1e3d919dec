//! Startup paths: config directory, catalog and locale locations.

use std::path::{Path, PathBuf};

use kaopick_core::{default_document, Config};

/// File name of the catalog inside the config directory.
pub const CATALOG_FILE: &str = "kaomojis.json";

/// Returns the config directory.
///
/// A project-local `config/` directory wins; otherwise `$XDG_CONFIG_HOME/kaopick`
/// or `~/.config/kaopick`.
pub fn config_dir() -> PathBuf {
    let local = PathBuf::from("config");
    if local.exists() {
        return local;
    }
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/"))
                .join(".config")
        })
        .join("kaopick")
}

/// Loads `default.toml` from `dir`, falling back to defaults when it is
/// missing or unreadable.
pub fn load_config(dir: &Path) -> Config {
    let path = dir.join("default.toml");
    match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
            Config::default()
        }
    }
}

/// Catalog location: command-line argument, then config, then `<dir>/kaomojis.json`.
pub fn catalog_path(arg: Option<PathBuf>, config: &Config, dir: &Path) -> PathBuf {
    arg.or_else(|| config.general.catalog_path.clone())
        .unwrap_or_else(|| dir.join(CATALOG_FILE))
}

/// Locale directory: from config, or `<dir>/locales`.
pub fn locale_dir(config: &Config, dir: &Path) -> PathBuf {
    config
        .general
        .locale_dir
        .clone()
        .unwrap_or_else(|| dir.join("locales"))
}

/// Writes the starter catalog to `path` if nothing is there yet.
///
/// Returns `true` when a file was created.
pub fn ensure_catalog(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, default_document())?;
    tracing::info!(path = %path.display(), "wrote starter catalog");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaopick_core::Catalog;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn catalog_path_prefers_argument() {
        let mut config = Config::default();
        config.general.catalog_path = Some(PathBuf::from("/etc/kaomojis.json"));

        let path = catalog_path(Some(PathBuf::from("mine.json")), &config, Path::new("/cfg"));
        assert_eq!(path, PathBuf::from("mine.json"));

        let path = catalog_path(None, &config, Path::new("/cfg"));
        assert_eq!(path, PathBuf::from("/etc/kaomojis.json"));
    }

    #[test]
    fn catalog_path_defaults_to_config_dir() {
        let path = catalog_path(None, &Config::default(), Path::new("/cfg"));
        assert_eq!(path, PathBuf::from("/cfg/kaomojis.json"));
    }

    #[test]
    fn locale_dir_defaults_to_config_dir() {
        let mut config = Config::default();
        assert_eq!(locale_dir(&config, Path::new("/cfg")), PathBuf::from("/cfg/locales"));

        config.general.locale_dir = Some(PathBuf::from("/opt/locales"));
        assert_eq!(locale_dir(&config, Path::new("/cfg")), PathBuf::from("/opt/locales"));
    }

    #[test]
    fn ensure_catalog_writes_loadable_starter() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join(CATALOG_FILE);

        assert!(ensure_catalog(&path).unwrap());

        let catalog = Catalog::load(&path).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn ensure_catalog_keeps_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CATALOG_FILE);
        fs::write(&path, r#"[{"name": "Mine", "emoticons": ["(o_o)"]}]"#).unwrap();

        assert!(!ensure_catalog(&path).unwrap());

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_config_reads_default_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("default.toml"),
            "[general]\nlanguage = \"tr\"\n",
        )
        .unwrap();

        assert_eq!(load_config(tmp.path()).general.language, "tr");
    }

    #[test]
    fn load_config_tolerates_broken_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("default.toml"), "[[[").unwrap();

        assert_eq!(load_config(tmp.path()).general.language, "en");
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        assert!(load_config(tmp.path()).behavior.auto_close_on_copy);
    }
}
