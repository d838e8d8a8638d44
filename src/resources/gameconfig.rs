//! Game configuration resource.
//!
//! Manages weapon and hit-feedback settings loaded from an INI configuration
//! file. Provides defaults for safe startup and methods to load/save
//! configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [weapon]
//! firing_delay = 0.1
//! heat_capacity = 20
//! heat_cooldown_target = 25
//! heat_reduce_factor = 6
//! projectile_speed = 10
//! projectile_damage = 100
//! projectile_lifetime = 1.5
//! direction = up
//!
//! [hit_feedback]
//! stage_sprites = ship_damaged_1, ship_damaged_2, ship_damaged_3
//! gradient = 0.0:255,0,0,255 | 1.0:255,255,255,255
//! flash = true
//! flash_color = 255,0,0,255
//! flash_speed = 7
//! background = true
//! min_background_alpha = 0.0
//! max_background_alpha = 0.5
//!
//! [ship]
//! health = 1000
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::gradient::Gradient;
use crate::components::hitfeedback::{BackgroundBlink, FlashPulse, HitFeedback, StageSprites};
use crate::components::weaponcontroller::{FireDirection, WeaponParams};
use crate::math::Color;

/// Default safe values for startup
const DEFAULT_SHIP_HEALTH: i32 = 1000;
const DEFAULT_FLASH_COLOR: Color = Color::RED;
const DEFAULT_FLASH_SPEED: f32 = 7.0;
const DEFAULT_MIN_BACKGROUND_ALPHA: f32 = 0.0;
const DEFAULT_MAX_BACKGROUND_ALPHA: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

fn to_i32(section: &str, key: &str, value: i64) -> Result<i32, String> {
    i32::try_from(value).map_err(|_| format!("[{}] {} = {} is out of range", section, key, value))
}

/// Game configuration resource.
///
/// Stores the weapon parameters, the hit-feedback setup and the ship's
/// starting health. [`spawn_player_ship`](crate::game::spawn_player_ship)
/// builds the ship's components from it.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Weapon tuning.
    pub weapon: WeaponParams,
    /// Health the player ship spawns with.
    pub ship_health: i32,
    /// Damage stage sprite keys, least damaged first. Empty disables stages.
    pub stage_sprites: Vec<String>,
    /// Health gradient. `None` disables color changes.
    pub gradient: Option<Gradient>,
    /// Enable the hit flash pulse.
    pub flash: bool,
    pub flash_color: Color,
    pub flash_speed: f32,
    /// Enable the background blink.
    pub background: bool,
    pub min_background_alpha: f32,
    pub max_background_alpha: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            weapon: WeaponParams::default(),
            ship_health: DEFAULT_SHIP_HEALTH,
            stage_sprites: Vec::new(),
            gradient: None,
            flash: false,
            flash_color: DEFAULT_FLASH_COLOR,
            flash_speed: DEFAULT_FLASH_SPEED,
            background: false,
            min_background_alpha: DEFAULT_MIN_BACKGROUND_ALPHA,
            max_background_alpha: DEFAULT_MAX_BACKGROUND_ALPHA,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or a value is malformed;
    /// in that case nothing is changed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;
        info!("Loaded config from {:?}", self.config_path);
        Ok(())
    }

    /// Load configuration from INI text. Same rules as [`load_from_file`].
    ///
    /// [`load_from_file`]: GameConfig::load_from_file
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();

        // [weapon] section
        let weapon = &mut next.weapon;
        if let Some(v) = config.getfloat("weapon", "firing_delay")? {
            weapon.firing_delay = v as f32;
        }
        if let Some(v) = config.getfloat("weapon", "heat_capacity")? {
            weapon.heat_capacity = v as f32;
        }
        if let Some(v) = config.getfloat("weapon", "heat_cooldown_target")? {
            weapon.heat_cooldown_target = v as f32;
        }
        if let Some(v) = config.getfloat("weapon", "heat_reduce_factor")? {
            weapon.heat_reduce_factor = v as f32;
        }
        if let Some(v) = config.getfloat("weapon", "projectile_speed")? {
            weapon.projectile_speed = v as f32;
        }
        if let Some(v) = config.getint("weapon", "projectile_damage")? {
            weapon.projectile_damage = to_i32("weapon", "projectile_damage", v)?;
        }
        if let Some(v) = config.getfloat("weapon", "projectile_lifetime")? {
            weapon.projectile_lifetime = v as f32;
        }
        if let Some(v) = config.get("weapon", "direction") {
            weapon.direction = FireDirection::parse(&v)?;
        }

        // [hit_feedback] section
        if let Some(v) = config.get("hit_feedback", "stage_sprites") {
            next.stage_sprites = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(v) = config.get("hit_feedback", "gradient") {
            next.gradient = Gradient::parse(&v)?;
        }
        if let Some(v) = config.getbool("hit_feedback", "flash")? {
            next.flash = v;
        }
        if let Some(v) = config.get("hit_feedback", "flash_color") {
            next.flash_color = Color::parse(&v)?;
        }
        if let Some(v) = config.getfloat("hit_feedback", "flash_speed")? {
            next.flash_speed = v as f32;
        }
        if let Some(v) = config.getbool("hit_feedback", "background")? {
            next.background = v;
        }
        if let Some(v) = config.getfloat("hit_feedback", "min_background_alpha")? {
            next.min_background_alpha = v as f32;
        }
        if let Some(v) = config.getfloat("hit_feedback", "max_background_alpha")? {
            next.max_background_alpha = v as f32;
        }

        // [ship] section
        if let Some(v) = config.getint("ship", "health")? {
            next.ship_health = to_i32("ship", "health", v)?;
        }

        info!(
            "Config: delay={} capacity={} cooldown={} decay={} health={} stages={} gradient={} flash={} background={}",
            next.weapon.firing_delay,
            next.weapon.heat_capacity,
            next.weapon.heat_cooldown_target,
            next.weapon.heat_reduce_factor,
            next.ship_health,
            next.stage_sprites.len(),
            next.gradient.is_some(),
            next.flash,
            next.background
        );

        *self = next;
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();
        let w = &self.weapon;

        // [weapon] section
        config.set("weapon", "firing_delay", Some(w.firing_delay.to_string()));
        config.set("weapon", "heat_capacity", Some(w.heat_capacity.to_string()));
        config.set(
            "weapon",
            "heat_cooldown_target",
            Some(w.heat_cooldown_target.to_string()),
        );
        config.set(
            "weapon",
            "heat_reduce_factor",
            Some(w.heat_reduce_factor.to_string()),
        );
        config.set(
            "weapon",
            "projectile_speed",
            Some(w.projectile_speed.to_string()),
        );
        config.set(
            "weapon",
            "projectile_damage",
            Some(w.projectile_damage.to_string()),
        );
        config.set(
            "weapon",
            "projectile_lifetime",
            Some(w.projectile_lifetime.to_string()),
        );
        config.set("weapon", "direction", Some(w.direction.as_str().to_string()));

        // [hit_feedback] section
        config.set(
            "hit_feedback",
            "stage_sprites",
            Some(self.stage_sprites.join(", ")),
        );
        config.set(
            "hit_feedback",
            "gradient",
            Some(
                self.gradient
                    .as_ref()
                    .map(Gradient::to_config_string)
                    .unwrap_or_default(),
            ),
        );
        config.set("hit_feedback", "flash", Some(self.flash.to_string()));
        config.set(
            "hit_feedback",
            "flash_color",
            Some(self.flash_color.to_string()),
        );
        config.set(
            "hit_feedback",
            "flash_speed",
            Some(self.flash_speed.to_string()),
        );
        config.set(
            "hit_feedback",
            "background",
            Some(self.background.to_string()),
        );
        config.set(
            "hit_feedback",
            "min_background_alpha",
            Some(self.min_background_alpha.to_string()),
        );
        config.set(
            "hit_feedback",
            "max_background_alpha",
            Some(self.max_background_alpha.to_string()),
        );

        // [ship] section
        config.set("ship", "health", Some(self.ship_health.to_string()));

        config
    }

    /// Build the hit-feedback component for a ship spawned with
    /// `initial_health`. The blink is only set up when `background` names
    /// an entity and the background effect is enabled.
    pub fn hit_feedback(&self, initial_health: i32, background: Option<Entity>) -> HitFeedback {
        let mut feedback = HitFeedback::new(initial_health);
        if let Some(stages) = StageSprites::new(self.stage_sprites.clone()) {
            feedback = feedback.with_stages(stages);
        }
        if let Some(gradient) = self.gradient.clone() {
            feedback = feedback.with_gradient(gradient);
        }
        if self.flash {
            feedback = feedback.with_flash(FlashPulse::new(self.flash_color, self.flash_speed));
        }
        if self.background
            && let Some(target) = background
        {
            feedback = feedback.with_blink(BackgroundBlink::new(
                target,
                self.min_background_alpha,
                self.max_background_alpha,
            ));
        }
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[weapon]
firing_delay = 0.2
heat_capacity = 30
projectile_damage = 50
direction = down

[hit_feedback]
stage_sprites = ship_a, ship_b ,ship_c
gradient = 0.0:255,0,0,255 | 1.0:255,255,255,255
flash = true
flash_color = 0,0,255,255
background = true
max_background_alpha = 0.8

[ship]
health = 400
";

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.weapon, WeaponParams::default());
        assert_eq!(c.ship_health, DEFAULT_SHIP_HEALTH);
        assert!(c.stage_sprites.is_empty());
        assert!(c.gradient.is_none());
        assert!(!c.flash);
        assert!(!c.background);
    }

    #[test]
    fn test_load_from_str() {
        let mut c = GameConfig::new();
        c.load_from_str(SAMPLE).unwrap();
        assert_eq!(c.weapon.firing_delay, 0.2);
        assert_eq!(c.weapon.heat_capacity, 30.0);
        assert_eq!(c.weapon.heat_cooldown_target, 25.0);
        assert_eq!(c.weapon.projectile_damage, 50);
        assert_eq!(c.weapon.direction, FireDirection::Down);
        assert_eq!(c.stage_sprites, vec!["ship_a", "ship_b", "ship_c"]);
        assert_eq!(c.gradient.as_ref().map(|g| g.keys().len()), Some(2));
        assert!(c.flash);
        assert_eq!(c.flash_color, Color::new(0, 0, 255, 255));
        assert!(c.background);
        assert_eq!(c.max_background_alpha, 0.8);
        assert_eq!(c.ship_health, 400);
    }

    #[test]
    fn test_malformed_value_leaves_config_untouched() {
        let mut c = GameConfig::new();
        let text = "[weapon]\nfiring_delay = 0.5\n[hit_feedback]\nflash_color = red\n";
        assert!(c.load_from_str(text).is_err());
        assert_eq!(c.weapon.firing_delay, 0.1);
    }

    #[test]
    fn test_out_of_range_integer_is_rejected() {
        let mut c = GameConfig::new();
        let text = "[ship]\nhealth = 3000000000\n";
        let err = c.load_from_str(text).unwrap_err();
        assert!(err.contains("health"));
        assert_eq!(c.ship_health, DEFAULT_SHIP_HEALTH);

        let text = "[weapon]\nprojectile_damage = -3000000000\n";
        assert!(c.load_from_str(text).is_err());
        assert_eq!(c.weapon.projectile_damage, 100);
    }

    #[test]
    fn test_ini_string_loads_back() {
        let mut source = GameConfig::new();
        source.load_from_str(SAMPLE).unwrap();
        let mut loaded = GameConfig::new();
        loaded.load_from_str(&source.to_ini_string()).unwrap();
        assert_eq!(loaded.weapon, source.weapon);
        assert_eq!(loaded.stage_sprites, source.stage_sprites);
        assert_eq!(loaded.gradient, source.gradient);
        assert_eq!(loaded.flash_color, source.flash_color);
        assert_eq!(loaded.ship_health, source.ship_health);
    }

    #[test]
    fn test_hit_feedback_respects_switches() {
        let mut c = GameConfig::new();
        let f = c.hit_feedback(100, Some(Entity::PLACEHOLDER));
        assert!(f.stages.is_none());
        assert!(f.flash.is_none());
        assert!(f.blink.is_none());

        c.load_from_str(SAMPLE).unwrap();
        let f = c.hit_feedback(100, Some(Entity::PLACEHOLDER));
        assert_eq!(f.stages.as_ref().map(|s| s.len()), Some(3));
        assert!(f.gradient.is_some());
        assert!(f.flash.is_some());
        assert!(f.blink.is_some());

        let f = c.hit_feedback(100, None);
        assert!(f.blink.is_none());
    }
}
