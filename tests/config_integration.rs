//! Configuration file integration tests.

use std::path::PathBuf;

use suicidemission::components::weaponcontroller::FireDirection;
use suicidemission::math::Color;
use suicidemission::resources::gameconfig::GameConfig;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "suicidemission_{}_{}.ini",
        name,
        std::process::id()
    ))
}

#[test]
fn missing_file_keeps_defaults() {
    let mut config = GameConfig::with_path(temp_config_path("missing"));
    assert!(config.load_from_file().is_err());
    assert_eq!(config.ship_health, GameConfig::new().ship_health);
    assert!(!config.flash);
}

#[test]
fn saved_config_loads_back() {
    let path = temp_config_path("roundtrip");
    let mut config = GameConfig::with_path(&path);
    config
        .load_from_str(
            "[weapon]\nfiring_delay = 0.25\ndirection = down\n\
             [hit_feedback]\nstage_sprites = hurt, wrecked\n\
             gradient = 0.0:255,0,0,255 | 1.0:0,255,0,255\n\
             flash = true\nflash_color = 0,0,255\nbackground = true\n\
             max_background_alpha = 0.75\n[ship]\nhealth = 250\n",
        )
        .unwrap();
    config.save_to_file().unwrap();

    let mut loaded = GameConfig::with_path(&path);
    loaded.load_from_file().unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.weapon, config.weapon);
    assert_eq!(loaded.weapon.direction, FireDirection::Down);
    assert_eq!(loaded.stage_sprites, vec!["hurt", "wrecked"]);
    assert_eq!(loaded.gradient, config.gradient);
    assert!(loaded.flash);
    assert_eq!(loaded.flash_color, Color::new(0, 0, 255, 255));
    assert!(loaded.background);
    assert_eq!(loaded.max_background_alpha, 0.75);
    assert_eq!(loaded.ship_health, 250);
}

#[test]
fn repo_config_file_loads() {
    let mut config = GameConfig::with_path(concat!(env!("CARGO_MANIFEST_DIR"), "/config.ini"));
    config.load_from_file().unwrap();
    assert!(config.ship_health > 0);
    assert!(config.gradient.is_some());
    assert_eq!(config.stage_sprites.len(), 3);
}
