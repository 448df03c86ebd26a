//! Random scene demo
//!
//! Scatters spinning rectangular blockers and more emitters than there are
//! shadow map rows, then prints the frame plan a renderer would execute.

use glam::{Mat4, Quat, Vec2, Vec3};
use hearth_shadow2d::{
    config::ShadowConfig,
    emitter::{create_emitter, emitter_quad, EmitterData},
    geometry::create_triangle_mesh,
    outline::outline_vertex_count,
    plan_shadow_frame,
    registry::{
        blocker_outline, create_registry, emitter_data, emitter_slot, register_blocker,
        register_emitter, retry_emitter_slots, unregister_emitter, update_emitter,
    },
    TriangleMesh,
};
use rand::Rng;
use std::sync::Arc;

const BLOCKER_COUNT: usize = 50;
const LIGHT_COUNT: usize = 72;
const SCENE_RANGE: f32 = 6.0;

fn unit_rectangle() -> TriangleMesh {
    create_triangle_mesh(
        vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

fn random_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-SCENE_RANGE..SCENE_RANGE),
        rng.gen_range(-SCENE_RANGE..SCENE_RANGE),
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let mut registry = create_registry(ShadowConfig::default())?;

    // One shared mesh; each blocker caches its own outline after the first frame
    let mesh = Arc::new(unit_rectangle());
    let mut blockers = Vec::with_capacity(BLOCKER_COUNT);
    for _ in 0..BLOCKER_COUNT {
        let position = random_position(&mut rng);
        let transform = Mat4::from_scale_rotation_translation(
            Vec3::new(rng.gen_range(0.25..1.0), rng.gen_range(0.25..1.0), 1.0),
            Quat::from_rotation_z(rng.gen_range(0.0..360.0f32).to_radians()),
            position.extend(0.0),
        );
        blockers.push(register_blocker(&mut registry, Arc::clone(&mesh), transform));
    }

    let mut emitters = Vec::with_capacity(LIGHT_COUNT);
    for _ in 0..LIGHT_COUNT {
        let mut emitter = create_emitter(
            random_position(&mut rng),
            rng.gen_range(0.0..360.0),
            rng.gen_range(45.0..180.0),
            rng.gen_range(1.0..4.0),
        );
        emitter.color = [
            rng.gen_range(0.25..1.0),
            rng.gen_range(0.25..1.0),
            rng.gen_range(0.25..1.0),
            1.0,
        ];
        emitters.push(register_emitter(&mut registry, emitter));
    }

    let plan = plan_shadow_frame(&mut registry);
    println!(
        "frame 0: {} draws, {} emitters without a row, {} outlines rebuilt",
        plan.draws.len(),
        plan.skipped_emitters,
        plan.rebuilt_outlines
    );
    println!(
        "initial map {}x{}, final map {}x{}",
        plan.targets.initial.width,
        plan.targets.initial.height,
        plan.targets.reduced.width,
        plan.targets.reduced.height
    );
    println!(
        "blocker outline: {} line vertices",
        outline_vertex_count(blocker_outline(&mut registry, blockers[0]))
    );

    // Turn off a few lights; waiting emitters pick up their rows
    for id in emitters.drain(..4) {
        unregister_emitter(&mut registry, id);
    }
    let assigned = retry_emitter_slots(&mut registry);
    println!("released 4 rows, {} waiting emitters received one", assigned);

    // Spin the remaining lights a little, as a game update would
    for &id in &emitters {
        let current: EmitterData = *emitter_data(&registry, id);
        update_emitter(
            &mut registry,
            id,
            EmitterData {
                angle_degrees: current.angle_degrees + 36.0,
                ..current
            },
        );
    }

    let plan = plan_shadow_frame(&mut registry);
    println!(
        "frame 1: {} draws, {} emitters without a row, {} outlines rebuilt",
        plan.draws.len(),
        plan.skipped_emitters,
        plan.rebuilt_outlines
    );

    if let Some(&id) = emitters.last() {
        let emitter = emitter_data(&registry, id);
        let quad = emitter_quad(emitter, 1.0);
        println!(
            "last emitter: slot {:?}, {:?} quad with y scale {:.3}",
            emitter_slot(&registry, id),
            quad.kind,
            quad.scale_y
        );
    }

    Ok(())
}
