//! Disc Physics headless demo
//!
//! Spawns a seeded field of circles, runs the physics system at a fixed tick
//! and prints the final state as JSON.
//!
//! Usage: `disc-physics [settings.json | calm | busy | crowded]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use disc_physics::settings::{DemoSettings, ScenePreset};

    env_logger::init();
    log::info!("Disc Physics (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(arg) => match ScenePreset::from_str(&arg) {
            Some(preset) => DemoSettings::from_preset(preset),
            None => DemoSettings::load_or_default(&arg),
        },
        None => DemoSettings::default(),
    };

    if let Err(e) = demo::run(&settings) {
        log::error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use serde::Serialize;

    use disc_physics::entity::{CollisionShapes, RigidBodyComponent, Spatial};
    use disc_physics::settings::DemoSettings;
    use disc_physics::{BodyStore, Entities, EntityId, PhysicsError, PhysicsSystem, World};

    #[derive(Serialize)]
    struct BodySnapshot<'a> {
        entity: EntityId,
        spatial: &'a Spatial,
        body: &'a RigidBodyComponent,
    }

    fn spawn_scene(entities: &mut Entities, settings: &DemoSettings) {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let extent = settings.half_extent.abs();
        let max_speed = settings.max_speed.max(0.0);

        for i in 0..settings.body_count {
            let e = entities.spawn_named(&format!("disc{}", i));
            let x = rng.random_range(-extent..=extent);
            let y = rng.random_range(-extent..=extent);
            let radius = settings.radius_between(&mut rng);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(0.0..=max_speed);

            entities.insert(e, Spatial::at(x, y));
            entities.insert(
                e,
                RigidBodyComponent::with_velocity(speed * angle.cos(), speed * angle.sin())
                    .damped(settings.damping, settings.damping),
            );
            entities.insert(e, CollisionShapes::circle(radius));
        }
    }

    pub fn run(settings: &DemoSettings) -> Result<(), PhysicsError> {
        log::info!(
            "Scene {}: {} bodies, seed {}, {} sub-steps",
            settings.preset.as_str(),
            settings.body_count,
            settings.seed,
            settings.world.effective_steps()
        );

        let mut entities = Entities::new();
        spawn_scene(&mut entities, settings);
        let mut system = PhysicsSystem::new(World::new(settings.world));

        let mut impulses = 0;
        for tick in 0..settings.ticks {
            // Exercise removal halfway through
            let first = entities.ids().next();
            if tick == settings.ticks / 2
                && let Some(first) = first
            {
                entities.despawn(first);
                log::info!("Tick {}: despawned {}", tick, first);
            }
            impulses += system.update(&mut entities, settings.tick_ms)?;
        }

        log::info!(
            "Ran {} ticks ({} bodies left), {} impulses applied",
            settings.ticks,
            system.world().len(),
            impulses
        );

        let snapshot: Vec<BodySnapshot> = system
            .world()
            .bodies()
            .iter()
            .filter_map(|body| {
                Some(BodySnapshot {
                    entity: body.entity,
                    spatial: entities.spatial(body.entity)?,
                    body: entities.rigid_body(body.entity)?,
                })
            })
            .collect();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize final state: {}", e),
        }
        Ok(())
    }
}
