//! Per-frame simulation step
//!
//! The driver calls [`tick`] once per animation frame and draws the returned
//! [`FrameReport`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::state::{SceneEvent, SceneState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in scene coordinates
    pub pointer: Vec2,
    /// New canvas size, if the window changed since the last tick
    pub resize: Option<Bounds>,
    /// Position of a click since the last tick. Kept apart from `pointer`
    /// so later pointer motion does not move the click.
    pub click: Option<Vec2>,
}

/// What happened during one tick, enough to draw the frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    /// Walls drifted this frame
    pub walls_active: bool,
    /// Nearest hit of each ray, in fan order
    pub hits: Vec<Vec2>,
    /// Rays crossing the ball's proxy
    pub target_hits: usize,
    pub target_visible: bool,
    /// Where the ball was when the vote was taken
    pub target_pos: Vec2,
    pub target_radius: f32,
    pub events: Vec<SceneEvent>,
}

/// Advance the scene by one frame
pub fn tick(state: &mut SceneState, input: &TickInput) -> FrameReport {
    if let Some(bounds) = input.resize {
        state.resize(bounds);
    }

    let mut events = Vec::new();
    if let Some(at) = input.click {
        events.extend(handle_click(state, at));
    }

    let walls_active = state.walls_active(input.pointer);
    state.update_walls(walls_active);

    state.emitter.update(input.pointer.x, input.pointer.y);
    let hits = state.emitter.compute_visibility(state.segments());

    let target_hits = state.target.hit_count(&state.emitter);
    let target_visible = state.target.is_lit(target_hits);
    let target_pos = state.target.pos;

    state.move_target();

    let report = FrameReport {
        frame: state.frame,
        walls_active,
        hits,
        target_hits,
        target_visible,
        target_pos,
        target_radius: state.target.radius,
        events,
    };
    state.frame += 1;
    report
}

/// Catch the ball if `pointer` is on it.
///
/// The first successful click stops the ball for good and yields the reveal
/// event; later clicks yield nothing.
pub fn handle_click(state: &mut SceneState, pointer: Vec2) -> Option<SceneEvent> {
    if !state.target.contains(pointer) || !state.target.stop() {
        return None;
    }
    log::info!(
        "Ball caught at ({:.0}, {:.0}) on frame {}",
        state.target.pos.x,
        state.target.pos.y,
        state.frame
    );
    Some(SceneEvent::Reveal {
        url: state.settings.reveal_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::Segment;

    fn scene() -> SceneState {
        SceneState::new(Bounds::new(800.0, 600.0), Settings::default(), 12345)
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut state = scene();
        let input = TickInput {
            pointer: Vec2::new(400.0, 300.0),
            ..Default::default()
        };
        let first = tick(&mut state, &input);
        let second = tick(&mut state, &input);
        assert_eq!(first.frame, 0);
        assert_eq!(second.frame, 1);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_emitter_follows_pointer() {
        let mut state = scene();
        let input = TickInput {
            pointer: Vec2::new(123.0, 456.0),
            ..Default::default()
        };
        let report = tick(&mut state, &input);
        assert_eq!(state.emitter.pos, Vec2::new(123.0, 456.0));
        // Border guarantees a hit for nearly every ray
        assert!(report.hits.len() <= 360);
        assert!(report.hits.len() >= 350);
        for hit in &report.hits {
            assert!(hit.x >= -1.0 - 1e-3 && hit.x <= 800.0 + 1e-3);
            assert!(hit.y >= -1.0 - 1e-3 && hit.y <= 600.0 + 1e-3);
        }
    }

    #[test]
    fn test_walls_frozen_near_center() {
        let mut state = scene();
        let walls = state.walls.clone();
        let input = TickInput {
            pointer: Vec2::new(410.0, 290.0),
            ..Default::default()
        };
        for _ in 0..30 {
            let report = tick(&mut state, &input);
            assert!(!report.walls_active);
        }
        assert_eq!(state.walls, walls);

        let input = TickInput {
            pointer: Vec2::new(10.0, 10.0),
            ..Default::default()
        };
        let report = tick(&mut state, &input);
        assert!(report.walls_active);
        assert_ne!(state.walls, walls);
    }

    #[test]
    fn test_first_tick_retargets_ball() {
        let mut state = scene();
        let spawn = state.target.pos;
        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.target_pos, spawn);
        assert_eq!(state.target.pos, spawn);
        assert_ne!(state.target.target, spawn);

        tick(&mut state, &TickInput::default());
        assert_ne!(state.target.pos, spawn);
    }

    #[test]
    fn test_ball_visible_when_lit_from_nearby() {
        let mut state = scene();
        state.target.pos = Vec2::new(400.0, 300.0);
        state.target.target = Vec2::new(400.0, 300.0);

        let near = TickInput {
            pointer: Vec2::new(250.0, 300.0),
            ..Default::default()
        };
        let report = tick(&mut state, &near);
        assert!(report.target_visible, "hits = {}", report.target_hits);
        assert_eq!(report.target_pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_click_reveals_once() {
        let mut state = scene();
        let on_ball = state.target.pos + Vec2::new(10.0, 0.0);

        let miss = TickInput {
            pointer: on_ball,
            click: Some(state.target.pos + Vec2::new(100.0, 0.0)),
            ..Default::default()
        };
        assert!(tick(&mut state, &miss).events.is_empty());
        assert!(!state.target.is_stopped());

        // The ball has not moved yet: the first tick only re-targeted
        let hit = TickInput {
            pointer: on_ball,
            click: Some(on_ball),
            ..Default::default()
        };
        let report = tick(&mut state, &hit);
        assert_eq!(
            report.events,
            vec![SceneEvent::Reveal {
                url: "https://www.example.com".to_string()
            }]
        );
        assert!(state.target.is_stopped());

        let frozen = state.target.pos;
        let again = tick(&mut state, &hit);
        assert!(again.events.is_empty());
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.target.pos, frozen);
    }

    #[test]
    fn test_click_uses_click_position_not_pointer() {
        let mut state = scene();
        let ball = state.target.pos;

        // Clicked on the ball, then the pointer moved away before the tick
        let input = TickInput {
            pointer: ball + Vec2::new(300.0, 0.0),
            click: Some(ball),
            ..Default::default()
        };
        let report = tick(&mut state, &input);
        assert_eq!(report.events.len(), 1);
        assert!(state.target.is_stopped());

        // Pointer over the ball does not count as a click by itself
        let mut state = scene();
        let hover = TickInput {
            pointer: state.target.pos,
            click: None,
            ..Default::default()
        };
        assert!(tick(&mut state, &hover).events.is_empty());
        assert!(!state.target.is_stopped());
    }

    #[test]
    fn test_visible_flag_matches_hit_count() {
        let mut state = scene();
        for x in (0..800).step_by(40) {
            let input = TickInput {
                pointer: Vec2::new(x as f32, 300.0),
                ..Default::default()
            };
            let report = tick(&mut state, &input);
            assert_eq!(report.target_visible, report.target_hits >= 15);
        }
    }

    #[test]
    fn test_handle_click_directly() {
        let mut state = scene();
        let pos = state.target.pos;
        assert_eq!(handle_click(&mut state, pos + Vec2::new(0.0, 50.0)), None);
        assert!(handle_click(&mut state, pos).is_some());
        assert_eq!(handle_click(&mut state, pos), None);
    }

    #[test]
    fn test_resize_through_tick() {
        let mut state = scene();
        let bounds = Bounds::new(400.0, 300.0);
        let input = TickInput {
            pointer: Vec2::new(0.0, 0.0),
            resize: Some(bounds),
            ..Default::default()
        };
        for _ in 0..500 {
            tick(&mut state, &input);
        }
        assert_eq!(state.bounds, bounds);
        assert_eq!(state.border, Segment::border(bounds));
        // Walls are clamped into the smaller scene from now on
        for wall in &state.walls {
            assert!(bounds.contains(wall.a));
            assert!(bounds.contains(wall.b));
        }
    }
}
