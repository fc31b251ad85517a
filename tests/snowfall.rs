/*
 * Snowfall integration tests
 *
 * End-to-end scenarios through the public API: seeded populations, single
 * snowflake motion and the fractal outline.
 */

use koch_winter::fractal;
use koch_winter::{Command, Simulation, SimulationParams, Snowflake, SnowflakeSettings, Wind};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SCREEN: Vec2 = nannou::glam::const_vec2!([800.0, 600.0]);

fn still_snowflake(location: Vec2, size: f32, depth: u32) -> Snowflake {
    let settings = SnowflakeSettings {
        location,
        size,
        fall_speed: 0.0,
        rotational_speed: 1.0,
        direction: 0.0,
        depth,
        blueness: 5,
    };
    Snowflake::new(1, settings, SCREEN, &SimulationParams::default()).unwrap()
}

#[test]
fn thousand_spawn_ticks_stay_capped_and_sorted() {
    let mut sim = Simulation::with_seed(SimulationParams::default(), SCREEN, 2024).unwrap();

    for _ in 0..1000 {
        sim.spawn_tick();
    }

    let snowflakes = sim.snowflakes();
    assert!(snowflakes.len() <= 200);
    assert!(!snowflakes.is_empty());
    assert!(snowflakes.windows(2).all(|pair| pair[0].size() <= pair[1].size()));
}

#[test]
fn same_seed_gives_same_snowfall() {
    let run = |seed| {
        let mut sim = Simulation::with_seed(SimulationParams::default(), SCREEN, seed).unwrap();
        for _ in 0..5000 {
            sim.spawn_tick();
            sim.advance(10.0);
        }
        sim.snowflakes().iter().map(|s| (s.id, s.position)).collect::<Vec<_>>()
    };

    assert_eq!(run(77), run(77));
}

#[test]
fn cap_holds_with_a_small_population_limit() {
    let params = SimulationParams { max_snowflakes: 5, spawn_chance_percent: 100, ..Default::default() };
    let mut sim = Simulation::with_seed(params, SCREEN, 1).unwrap();

    let spawned = (0..100).filter(|_| sim.spawn_tick()).count();
    assert_eq!(spawned, 5);
    assert_eq!(sim.snowflakes().len(), 5);
}

#[test]
fn depth_zero_snowflake_is_plain_triangle() {
    let snowflake = still_snowflake(vec2(200.0, 200.0), 30.0, 0);
    let points = &snowflake.sprite().points;

    assert_eq!(points.len(), 3);
    for i in 0..3 {
        assert!((points[i].distance(points[(i + 1) % 3]) - 30.0).abs() < 1e-3);
        assert!((points[i].length() - 30.0 / 3.0_f32.sqrt()).abs() < 1e-3);
    }
}

#[test]
fn outline_sizes_follow_depth() {
    for depth in 0..=3 {
        let snowflake = still_snowflake(vec2(200.0, 200.0), 45.0, depth);
        assert_eq!(snowflake.sprite().points.len(), 3 * 4usize.pow(depth));
        assert_eq!(snowflake.sprite().points, fractal::generate(Vec2::ZERO, 45.0, depth));
    }
}

#[test]
fn zero_tick_leaves_position_alone() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut snowflake = still_snowflake(vec2(250.0, 125.0), 20.0, 1);
    snowflake.wind = Wind::new(-80.0, 35.0);

    snowflake.update(0.0, &mut rng);
    assert_eq!(snowflake.position, vec2(250.0, 125.0));
}

#[test]
fn snowflake_past_right_margin_wraps_left() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut snowflake = still_snowflake(vec2(SCREEN.x + 101.0, 300.0), 20.0, 0);

    snowflake.update(16.0, &mut rng);

    let jump = (SCREEN.x + 101.0) - snowflake.position.x;
    assert!((jump - (SCREEN.x + 150.0)).abs() < 1e-3);
}

#[test]
fn wind_commands_reach_the_population() {
    let mut sim = Simulation::with_seed(SimulationParams::default(), SCREEN, 31).unwrap();
    while sim.snowflakes().len() < 8 {
        sim.spawn_tick();
    }

    sim.handle_mouse_down(vec2(10.0, 10.0));
    sim.handle_mouse_move(vec2(20.0, 10.0));
    assert!(sim.snowflakes().iter().all(|s| s.wind == Wind::new(20.0, 0.0)));

    sim.handle_mouse_up();
    sim.advance(16.0);
    // Local copies decay on their own after the global wind is cleared
    assert!(sim.snowflakes().iter().all(|s| s.wind.velocity.x < 20.0 && s.wind.velocity.x > 19.9));

    sim.handle_command(Command::RandomizeWind);
    assert!(sim
        .snowflakes()
        .iter()
        .all(|s| s.wind.velocity.x.abs() <= 250.0 && s.wind.velocity.y.abs() <= 250.0));
}
