//! Benchmark für den Per-Frame-Pfad.
//!
//! Misst:
//! - Aufbau der RenderScene aus dem AppState (Marker, Segmente, Pick-Tabelle)
//! - Picking eines Markers per Bildschirmstrahl

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_editor::app::build_render_scene;
use floorplan_editor::{AppState, FloorPlan};
use glam::{Vec2, Vec3};
use std::hint::black_box;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Rechteckiger Linienzug mit `point_count` Punkten im Raster.
fn build_floor_plan(point_count: usize) -> FloorPlan {
    let mut plan = FloorPlan::with_origin();
    let mut last = 0;
    for i in 1..point_count {
        let x = (i % 100) as f32;
        let z = (i / 100) as f32;
        if let Ok(id) = plan.add_point(last, x, z) {
            last = id;
        }
    }
    plan
}

fn build_state(point_count: usize) -> AppState {
    let mut state = AppState::with_floor_plan(build_floor_plan(point_count));
    state.view.viewport_size = VIEWPORT;
    state.interaction.selected_point_id = Some(0);
    state.interaction.cursor_position = Some(Vec3::new(3.0, 0.0, 1.0));
    state
}

fn bench_build_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_render_scene");

    for &count in &[100usize, 1_000, 10_000] {
        let state = build_state(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter(|| black_box(build_render_scene(black_box(state), VIEWPORT)));
        });
    }

    group.finish();
}

fn bench_pick_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_point");

    for &count in &[100usize, 1_000, 10_000] {
        let state = build_state(count);
        let scene = build_render_scene(&state, VIEWPORT);
        let Some(ray) = state.view.camera.screen_to_ray(VIEWPORT * 0.5, VIEWPORT) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::from_parameter(count), &scene, |b, scene| {
            b.iter(|| black_box(scene.pick_point(black_box(&ray))));
        });
    }

    group.finish();
}

criterion_group!(scene_benches, bench_build_render_scene, bench_pick_point);
criterion_main!(scene_benches);
