use finance_core::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn config_persists_between_managers() {
    let temp = TempDir::new().unwrap();
    let first = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let mut config = first.load().unwrap();
    assert_eq!(config, Config::default());

    config.currency = "GBP".into();
    config.sample_months = 12;
    first.save(&config).unwrap();

    let second = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let loaded = second.load().unwrap();
    assert_eq!(loaded.currency_code().as_str(), "GBP");
    assert_eq!(loaded.sample_data().months, 12);
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    std::fs::write(manager.path(), r#"{ "currency": "EUR" }"#).unwrap();
    let loaded = manager.load().unwrap();
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.locale, "en-US");
}
