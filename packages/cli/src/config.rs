use letterpress_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "letterpress.config.json";

/// Letterpress configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File holding the persisted document
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Directory exports are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Export compiler options
    #[serde(default)]
    pub compiler_options: CompilerOptions,
}

fn default_state_file() -> String {
    "letterpress.state.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// Pretty print HTML
    pub pretty: bool,

    /// Document `<title>`
    pub title: String,

    /// Max width of the email container in pixels
    pub container_width: u32,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        let defaults = CompileOptions::default();
        Self {
            pretty: defaults.pretty,
            title: defaults.title,
            container_width: defaults.container_width,
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the state file
    pub fn get_state_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.state_file)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            pretty: self.compiler_options.pretty,
            title: self.compiler_options.title.clone(),
            container_width: self.compiler_options.container_width,
            ..CompileOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            out_dir: default_out_dir(),
            compiler_options: CompilerOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "stateFile": "newsletter.json",
            "outDir": "build",
            "compilerOptions": { "pretty": false, "title": "Weekly" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.state_file, "newsletter.json");
        assert_eq!(config.out_dir, "build");
        assert!(!config.compiler_options.pretty);
        assert_eq!(config.compiler_options.title, "Weekly");
        assert_eq!(config.compiler_options.container_width, 600);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.state_file, "letterpress.state.json");
        assert_eq!(config.compile_options(), CompileOptions::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_out_dir("/work"), PathBuf::from("/work/dist"));
    }
}
