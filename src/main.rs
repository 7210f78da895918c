//! collide3d demo entry point
//!
//! Runs the drop tests and prints the resulting motion statistics.
//!
//! Usage: `collide3d [settle|impulse] [seconds] [scatter-seed]`

#[cfg(not(target_arch = "wasm32"))]
use collide3d::{ContactResponse, PhysicsError, scenes};

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_DURATION: f64 = 5.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("collide3d (native) starting...");

    let mut args = std::env::args().skip(1);
    let response = args
        .next()
        .and_then(|s| ContactResponse::from_str(&s))
        .unwrap_or(ContactResponse::Settle);
    let duration = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_DURATION);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    if let Err(e) = run(response, duration, seed) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(response: ContactResponse, duration: f64, seed: Option<u64>) -> Result<(), PhysicsError> {
    for mut scene in scenes::drop_tests(response)? {
        let advance = scene.world.advance_to(duration)?;
        let Some(subject) = scene.world.get(scene.subject) else {
            continue;
        };
        println!(
            "{:<18} {:>4} ticks  position {}  max speed {:.4}",
            scene.name,
            advance.ticks,
            subject.position,
            scene.world.stats().max_speed(scene.subject)
        );
    }

    if let Some(seed) = seed {
        let mut world = scenes::scatter(seed, 32, response)?;
        let advance = world.advance_to(duration)?;
        log::info!(
            "Scatter {}: {} ticks, {} contacts",
            seed,
            advance.ticks,
            world.stats().contacts
        );
        if let Some((id, speed)) = world.stats().fastest() {
            log::info!("Fastest body: {} at {:.4} m/s", id, speed);
        }
        match serde_json::to_string_pretty(world.stats()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("Failed to serialize stats: {}", e),
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the wasm surface; nothing to run here
}
