mod common;

use common::FakeCanvas;
use space_patrol::assets;
use space_patrol::display::Attr;
use space_patrol::input::Intent;
use space_patrol::scheduler::{Control, Task};
use space_patrol::tasks::{BlinkTask, ExplosionTask, GameOverTask};
use space_patrol::world::World;

fn idle() -> Intent {
    Intent::default()
}

#[test]
fn explosion_plays_through_and_cleans_up() {
    let mut world = World::new(20, 40, 42);
    let mut canvas = FakeCanvas::new(20, 40);
    let frames = assets::load().unwrap().explosion;
    let mut task = ExplosionTask::new(10, 20, frames);

    let mut steps = 0;
    loop {
        let control = task.step(&mut world, &mut canvas, idle()).unwrap();
        steps += 1;
        if control == Control::Done {
            break;
        }
        assert!(steps < 50, "explosion never finished");
    }
    // 4 frames held 2 ticks each
    assert_eq!(steps, 8);
    assert!(canvas.cells.is_empty(), "explosion left glyphs behind");
    assert_eq!(world.obstacle_count(), 0, "cosmetic task touched no shared state");
}

#[test]
fn game_over_banner_redraws_forever() {
    let mut world = World::new(30, 80, 42);
    let mut canvas = FakeCanvas::new(30, 80);
    let banner = assets::load().unwrap().game_over;
    let mut task = GameOverTask::new(banner);

    for _ in 0..3 {
        assert_eq!(task.step(&mut world, &mut canvas, idle()).unwrap(), Control::Suspend);
    }
    assert!(!canvas.cells.is_empty());

    // A falling sprite wiping the banner is repaired on the next tick
    let drawn_before = canvas.cells.len();
    canvas.cells.clear();
    task.step(&mut world, &mut canvas, idle()).unwrap();
    assert_eq!(canvas.cells.len(), drawn_before);
}

#[test]
fn star_waits_out_its_phase_offset() {
    let mut world = World::new(20, 40, 42);
    let mut canvas = FakeCanvas::new(20, 40);
    let mut star = BlinkTask::new(5, 5, '*', 3);

    for _ in 0..3 {
        star.step(&mut world, &mut canvas, idle()).unwrap();
        assert_eq!(canvas.glyph_at(5, 5), None);
    }
    star.step(&mut world, &mut canvas, idle()).unwrap();
    assert_eq!(canvas.glyph_at(5, 5), Some('*'));
    assert_eq!(canvas.attr_at(5, 5), Some(Attr::Dim));
}

#[test]
fn star_cycles_dim_normal_bold_normal() {
    let mut world = World::new(20, 40, 42);
    let mut canvas = FakeCanvas::new(20, 40);
    let mut star = BlinkTask::new(5, 5, '+', 0);

    let mut attrs = Vec::new();
    // One full cycle: 20 + 3 + 5 + 3 ticks
    for _ in 0..31 {
        star.step(&mut world, &mut canvas, idle()).unwrap();
        attrs.push(canvas.attr_at(5, 5).unwrap());
    }

    assert_eq!(attrs[0], Attr::Dim);
    assert_eq!(attrs[19], Attr::Dim);
    assert_eq!(attrs[20], Attr::Normal);
    assert_eq!(attrs[22], Attr::Normal);
    assert_eq!(attrs[23], Attr::Bold);
    assert_eq!(attrs[27], Attr::Bold);
    assert_eq!(attrs[28], Attr::Normal);
    assert_eq!(attrs[30], Attr::Normal);

    // Next tick wraps back to dim
    star.step(&mut world, &mut canvas, idle()).unwrap();
    assert_eq!(canvas.attr_at(5, 5), Some(Attr::Dim));
}
