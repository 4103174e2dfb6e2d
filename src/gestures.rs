use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase};

use crate::rig::DragRebase;

pub const TAP_MAX_DURATION: f32 = 0.25;
pub const TAP_MAX_MOVEMENT: f32 = 12.0;
pub const DOUBLE_TAP_WINDOW: f32 = 0.30;
pub const DOUBLE_TAP_RADIUS: f32 = 40.0;

/// Wheel notch to pinch velocity
const SCROLL_LINE_VELOCITY: f32 = 3.0;
const SCROLL_PIXEL_VELOCITY: f32 = 0.05;

/// Classified gesture, carrying the cumulative drag translation since the
/// gesture began (not a per-event delta). Drag events are emitted for every
/// touch transition so the rig can commit its baselines when the finger
/// count changes, exactly like simultaneous platform recognizers would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Orbit { tx: f32, ty: f32, touches: u32 },
    Pan { tx: f32, ty: f32, touches: u32 },
    Pinch { velocity: f32, touches: u32 },
    Tap { x: f32, y: f32 },
    DoubleTap,
}

#[derive(Debug, Clone, Copy)]
struct TouchPoint {
    id: u64,
    pos: Vec2,
}

/// Turns raw touch/mouse events into `GestureEvent`s.
///
/// Orbit and pan keep separate cumulative translations, mirroring two
/// independent platform pan recognizers; the rig hands back a `DragRebase`
/// when a clamp consumed part of a translation and the recognizer zeroes
/// that axis.
///
/// Mouse fallback: left-drag orbits (one synthetic touch), right-drag pans
/// (two), the wheel pinches, a quick left click taps, two in a row
/// double-tap.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    touches: Vec<TouchPoint>,
    orbit_translation: Vec2,
    pan_translation: Vec2,

    pinch_dist: Option<f32>,
    pinch_time: f32,

    press_start: Option<Vec2>,
    press_time: f32,
    press_moved: f32,
    press_was_multi: bool,
    last_tap: Option<(f32, Vec2)>,

    cursor: Vec2,
    left_down: bool,
    right_down: bool,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter for winit touch events; `time` is seconds since startup.
    pub fn handle_touch(&mut self, touch: &Touch, time: f32) -> Vec<GestureEvent> {
        let x = touch.location.x as f32;
        let y = touch.location.y as f32;
        match touch.phase {
            TouchPhase::Started => self.touch_started(touch.id, x, y, time),
            TouchPhase::Moved => self.touch_moved(touch.id, x, y, time),
            TouchPhase::Ended => self.touch_ended(touch.id, x, y, time),
            TouchPhase::Cancelled => self.touch_cancelled(touch.id),
        }
    }

    pub fn touch_started(&mut self, id: u64, x: f32, y: f32, time: f32) -> Vec<GestureEvent> {
        let pos = Vec2::new(x, y);
        self.touches.push(TouchPoint { id, pos });
        if self.touches.len() == 1 {
            self.press_start = Some(pos);
            self.press_time = time;
            self.press_moved = 0.0;
            self.press_was_multi = false;
        } else {
            self.press_was_multi = true;
        }
        self.reset_pinch_baseline(time);

        let mut events = Vec::new();
        self.emit_drags(&mut events, self.touches.len() as u32);
        events
    }

    pub fn touch_moved(&mut self, id: u64, x: f32, y: f32, time: f32) -> Vec<GestureEvent> {
        let pos = Vec2::new(x, y);
        let count = self.touches.len().max(1) as f32;
        if let Some(point) = self.touches.iter_mut().find(|p| p.id == id) {
            let delta = pos - point.pos;
            point.pos = pos;
            // Centroid motion: each finger contributes its share
            let share = delta / count;
            self.orbit_translation += share;
            self.pan_translation += share;
            self.press_moved += delta.length();
        }

        let mut events = Vec::new();
        self.emit_drags(&mut events, self.touches.len() as u32);
        if let Some(velocity) = self.pinch_velocity(time) {
            events.push(GestureEvent::Pinch {
                velocity,
                touches: self.touches.len() as u32,
            });
        }
        events
    }

    pub fn touch_ended(&mut self, id: u64, x: f32, y: f32, time: f32) -> Vec<GestureEvent> {
        self.touches.retain(|p| p.id != id);
        self.reset_pinch_baseline(time);

        let mut events = Vec::new();
        self.emit_drags(&mut events, self.touches.len() as u32);
        if self.touches.is_empty() {
            if let Some(tap) = self.finish_press(Vec2::new(x, y), time) {
                events.push(tap);
            }
            self.press_start = None;
        }
        events
    }

    pub fn touch_cancelled(&mut self, id: u64) -> Vec<GestureEvent> {
        self.touches.retain(|p| p.id != id);
        self.pinch_dist = None;
        if self.touches.is_empty() {
            self.press_start = None;
        }

        let mut events = Vec::new();
        self.emit_drags(&mut events, self.touches.len() as u32);
        events
    }

    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<GestureEvent> {
        let pos = Vec2::new(x, y);
        let delta = pos - self.cursor;
        self.cursor = pos;

        let mut events = Vec::new();
        if self.left_down || self.right_down {
            self.orbit_translation += delta;
            self.pan_translation += delta;
            self.press_moved += delta.length();
            let touches = if self.right_down { 2 } else { 1 };
            self.emit_drags(&mut events, touches);
        }
        events
    }

    pub fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        time: f32,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.left_down = true;
                self.press_start = Some(self.cursor);
                self.press_time = time;
                self.press_moved = 0.0;
                self.press_was_multi = self.right_down;
            }
            (MouseButton::Left, ElementState::Released) => {
                self.left_down = false;
                self.emit_drags(&mut events, 0);
                if let Some(tap) = self.finish_press(self.cursor, time) {
                    events.push(tap);
                }
                self.press_start = None;
            }
            (MouseButton::Right, ElementState::Pressed) => {
                self.right_down = true;
                if self.left_down {
                    self.press_was_multi = true;
                }
            }
            (MouseButton::Right, ElementState::Released) => {
                self.right_down = false;
                self.emit_drags(&mut events, 0);
            }
            _ => {}
        }
        events
    }

    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) -> Vec<GestureEvent> {
        let velocity = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE_VELOCITY,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * SCROLL_PIXEL_VELOCITY,
        };
        vec![GestureEvent::Pinch {
            velocity,
            touches: 2,
        }]
    }

    /// Apply the rig's clamp feedback to the orbit translation.
    pub fn rebase_orbit(&mut self, rebase: DragRebase) {
        if rebase.reset_x {
            self.orbit_translation.x = 0.0;
        }
        if rebase.reset_y {
            self.orbit_translation.y = 0.0;
        }
    }

    /// Apply the rig's clamp feedback to the pan translation.
    pub fn rebase_pan(&mut self, rebase: DragRebase) {
        if rebase.reset_x {
            self.pan_translation.x = 0.0;
        }
        if rebase.reset_y {
            self.pan_translation.y = 0.0;
        }
    }

    fn emit_drags(&self, events: &mut Vec<GestureEvent>, touches: u32) {
        events.push(GestureEvent::Orbit {
            tx: self.orbit_translation.x,
            ty: self.orbit_translation.y,
            touches,
        });
        events.push(GestureEvent::Pan {
            tx: self.pan_translation.x,
            ty: self.pan_translation.y,
            touches,
        });
    }

    fn reset_pinch_baseline(&mut self, time: f32) {
        if self.touches.len() == 2 {
            self.pinch_dist = Some(self.touches[0].pos.distance(self.touches[1].pos));
            self.pinch_time = time;
        } else {
            self.pinch_dist = None;
        }
    }

    /// Relative spread change per second. The divisions are left raw: two
    /// fingers on the same pixel, or two events in the same instant, produce
    /// non-finite values, and the rig substitutes zero for those.
    fn pinch_velocity(&mut self, time: f32) -> Option<f32> {
        if self.touches.len() != 2 {
            return None;
        }
        let dist = self.touches[0].pos.distance(self.touches[1].pos);
        let dt = time - self.pinch_time;
        self.pinch_time = time;
        let prev = self.pinch_dist.replace(dist)?;
        Some((dist - prev) / prev / dt)
    }

    fn finish_press(&mut self, pos: Vec2, time: f32) -> Option<GestureEvent> {
        self.press_start?;
        if self.press_was_multi
            || time - self.press_time > TAP_MAX_DURATION
            || self.press_moved > TAP_MAX_MOVEMENT
        {
            return None;
        }

        if let Some((last_time, last_pos)) = self.last_tap {
            if time - last_time <= DOUBLE_TAP_WINDOW && pos.distance(last_pos) <= DOUBLE_TAP_RADIUS {
                self.last_tap = None;
                return Some(GestureEvent::DoubleTap);
            }
        }
        self.last_tap = Some((time, pos));
        Some(GestureEvent::Tap { x: pos.x, y: pos.y })
    }
}
