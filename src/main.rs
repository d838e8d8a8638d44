//! Suicide Mission headless ship demo.
//!
//! Runs the player ship's weapon and hit feedback for a number of frames
//! without a window:
//! - **bevy_ecs** drives the ship components and systems
//! - **fastrand** plays the pilot: fire button, movement, hits and pickups
//! - **serde_json** prints the final ship state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --frames 1200 --seed 7 --json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::{info, warn};
use std::path::PathBuf;

use suicidemission::events::boost::{BoostEvent, WeaponBoost};
use suicidemission::game::{
    build_update_schedule, damage_ship, setup_world, ship_snapshot, spawn_player_ship,
};
use suicidemission::resources::gameconfig::GameConfig;
use suicidemission::resources::input::InputState;
use suicidemission::systems::time::update_world_time;

/// Suicide Mission ship simulator
#[derive(Parser)]
#[command(version, about = "Runs the player ship's weapon and hit feedback headless.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for the simulated pilot. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final ship state as JSON.
    #[arg(long)]
    json: bool,
}

/// Per-frame odds of the simulated pilot's actions.
const FIRE_TOGGLE_CHANCE: f32 = 0.05;
const MOVE_TOGGLE_CHANCE: f32 = 0.03;
const HIT_CHANCE: f32 = 0.01;
const BOOST_CHANCE: f32 = 0.004;

fn random_boost(rng: &mut fastrand::Rng) -> WeaponBoost {
    match rng.u8(0..3) {
        0 => WeaponBoost::FireRate {
            multiplier: 2.0,
            duration: 5.0,
        },
        1 => WeaponBoost::LaserSize {
            multiplier: 1.5,
            duration: 6.0,
        },
        _ => WeaponBoost::TripleShot { duration: 4.0 },
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let mut world = World::new();
    setup_world(&mut world, config.clone());
    let ship = spawn_player_ship(&mut world, &config, Vec2::new(0.0, 8.0));
    let mut update = build_update_schedule();

    let mut fire = false;
    let mut movement = Vec2::ZERO;
    for _ in 0..cli.frames {
        if rng.f32() < FIRE_TOGGLE_CHANCE {
            fire = !fire;
        }
        if rng.f32() < MOVE_TOGGLE_CHANCE {
            movement = if movement == Vec2::ZERO {
                Vec2::new(rng.f32() * 2.0 - 1.0, 0.0)
            } else {
                Vec2::ZERO
            };
        }
        world.resource_mut::<InputState>().sample(fire, movement);

        if rng.f32() < HIT_CHANCE {
            let damage = rng.i32(50..=150);
            if let Some(health) = damage_ship(&mut world, ship, damage) {
                info!("Ship hit for {}, health {}", damage, health);
                if health <= 0 {
                    info!("Ship destroyed");
                    break;
                }
            }
        }
        if rng.f32() < BOOST_CHANCE {
            world.trigger(BoostEvent {
                entity: ship,
                boost: random_boost(&mut rng),
            });
        }

        update_world_time(&mut world, cli.dt);
        update.run(&mut world);
    }

    let Some(snapshot) = ship_snapshot(&mut world, ship) else {
        warn!("Player ship is gone");
        return;
    };
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize ship state: {}", e),
        }
    } else {
        println!(
            "frame {} ({:.2}s): health {}/{}, heat {:.2} ({:.0}%), sprite {}, color {}, {} projectiles fired, {} in flight",
            snapshot.frame,
            snapshot.elapsed,
            snapshot.health.current,
            snapshot.health.initial,
            snapshot.weapon.heat,
            snapshot.heat_level * 100.0,
            snapshot.sprite,
            snapshot.color,
            snapshot.projectiles_spawned,
            snapshot.projectiles_alive
        );
    }
}
