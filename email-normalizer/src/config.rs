use serde::Deserialize;

/// Settings for one normalization run, passed into the client at
/// construction.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub user_pool_id: String,
    pub region: String,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_file = base_path.join("config").join("base.yaml");

    let mut builder = config::Config::builder();
    if config_file.exists() {
        builder = builder.add_source(config::File::from(config_file));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("NORMALIZER")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
