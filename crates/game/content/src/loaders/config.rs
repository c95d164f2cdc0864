//! Player tuning loader.

use std::path::Path;

use platformer_core::PlayerConfig;

use crate::loaders::{LoadResult, read_file};

/// Default tuning shipped with the crate.
const EMBEDDED_PLAYER_TOML: &str = include_str!("../../data/player.toml");

/// Loader for [`PlayerConfig`] from TOML or RON files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load player tuning from a `.toml` or `.ron` file.
    ///
    /// Omitted fields keep their defaults. The result is validated before it
    /// is returned.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, its extension is neither `toml` nor
    /// `ron`, it does not parse, or a parameter is out of range.
    pub fn load(path: &Path) -> LoadResult<PlayerConfig> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::parse_toml(&content),
            Some("ron") => Self::parse_ron(&content),
            _ => Err(anyhow::anyhow!(
                "Unsupported config format for {}: expected .toml or .ron",
                path.display()
            )),
        }
    }

    /// The tuning bundled in `data/player.toml`.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn load_embedded() -> LoadResult<PlayerConfig> {
        Self::parse_toml(EMBEDDED_PLAYER_TOML)
    }

    pub fn parse_toml(content: &str) -> LoadResult<PlayerConfig> {
        let config: PlayerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validated(config)
    }

    pub fn parse_ron(content: &str) -> LoadResult<PlayerConfig> {
        let config: PlayerConfig = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config RON: {}", e))?;
        Self::validated(config)
    }

    fn validated(config: PlayerConfig) -> LoadResult<PlayerConfig> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid player config: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ConfigLoader::load_embedded().expect("embedded config");
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ConfigLoader::parse_toml(
            r#"
            [climb]
            climb_speed = 3.5
            "#,
        )
        .expect("partial config");

        assert_eq!(config.climb.climb_speed, 3.5);
        assert_eq!(config.climb.positioning_time, 0.25);
        assert_eq!(config.stamina, PlayerConfig::default().stamina);
    }

    #[test]
    fn loads_ron_file_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("player.ron");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "(glide: (speed: 7.0), stamina: (max_stamina: 50.0))").unwrap();

        let config = ConfigLoader::load(&path).expect("ron config");
        assert_eq!(config.glide.speed, 7.0);
        assert_eq!(config.stamina.max_stamina, 50.0);
        assert_eq!(config.jump, PlayerConfig::default().jump);
    }

    #[test]
    fn loads_toml_file_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("player.TOML");
        std::fs::write(&path, "[jump]\ncoyote_time = 0.3\n").unwrap();

        let config = ConfigLoader::load(&path).expect("toml config");
        assert_eq!(config.jump.coyote_time, 0.3);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("player.json");
        std::fs::write(&path, "{}").unwrap();

        let error = ConfigLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let error = ConfigLoader::parse_toml("[climb]\nmax_climb_angle = 400.0\n").unwrap_err();
        assert!(error.to_string().contains("climb.max_climb_angle"));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let error = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }
}
