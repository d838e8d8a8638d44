//! Hit-feedback animations.
//!
//! The [`HitFeedback`] component reacts to damage with up to four visual
//! effects, each enabled independently by being present (`Some`) in the
//! component:
//!
//! - **stage sprites** – pick one of `n` damage sprites from the health ratio
//! - **gradient** – tint the ship with a color sampled from the health ratio
//! - **flash pulse** – fade to a flash color and back to the original color
//! - **background blink** – blink the alpha of a separate background entity
//!
//! Stage sprites and gradient are stateless and applied immediately on a hit.
//! Flash and blink are small state machines advanced once per frame by
//! [`HitFeedback::tick`] until they detect their own completion.
//!
//! ```text
//! Flash:  Idle --hit--> Flashing --(back at initial color)--> Idle
//!                        ^    |
//!                        +hit-+  (restart pulse, keep running)
//!
//! Blink:  Idle --hit--> Blinking --(alpha back at minimum)--> Idle
//!                        ^    |
//!                        +hit-+  (ignored)
//! ```
//!
//! # Related
//!
//! - [`crate::systems::hitfeedback`] – observer and per-frame system
//! - [`crate::events::hit::HitEvent`] – the hit trigger

use bevy_ecs::prelude::{Component, Entity};
use log::debug;
use serde::Serialize;

use crate::components::gradient::Gradient;
use crate::math::Color;

/// Triangle wave over `t` bouncing between `0` and `length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let r = t.rem_euclid(length * 2.0);
    length - (r - length).abs()
}

/// Round to one decimal place, ties to even.
pub fn round_to_tenths(v: f32) -> f32 {
    (v * 10.0).round_ties_even() / 10.0
}

/// Ordered damage sprites, least damaged first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageSprites {
    sprites: Vec<String>,
}

impl StageSprites {
    /// `None` when `sprites` is empty.
    pub fn new(sprites: Vec<String>) -> Option<Self> {
        if sprites.is_empty() {
            return None;
        }
        Some(Self { sprites })
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn sprites(&self) -> &[String] {
        &self.sprites
    }

    /// Stage for `health` out of `initial_health`.
    ///
    /// Health is split into `n + 1` whole-number buckets of
    /// `initial_health / (n + 1)`; the stage is `n` minus the number of full
    /// buckets left, clamped to `[0, n - 1]`. A zero-sized bucket maps to the
    /// last stage.
    pub fn stage_index(&self, health: i32, initial_health: i32) -> usize {
        let n = self.sprites.len() as i64;
        let bucket = initial_health as i64 / (n + 1);
        if bucket <= 0 {
            return (n - 1) as usize;
        }
        let index = n - health as i64 / bucket;
        index.clamp(0, n - 1) as usize
    }

    pub fn sprite(&self, index: usize) -> Option<&str> {
        self.sprites.get(index).map(String::as_str)
    }
}

/// Flash-and-return color pulse.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlashPulse {
    pub flash_color: Color,
    /// Interpolation speed; the phase grows by `dt * speed` per frame.
    pub speed: f32,
    pub active: bool,
    pub phase: f32,
    /// Displayed color when the pulse started.
    pub initial_color: Color,
    /// Color the pulse is heading to.
    pub target: Color,
}

impl FlashPulse {
    pub fn new(flash_color: Color, speed: f32) -> Self {
        Self {
            flash_color,
            speed,
            active: false,
            phase: 0.0,
            initial_color: Color::WHITE,
            target: flash_color,
        }
    }

    /// Start the pulse, or restart it if already running.
    ///
    /// Returns `true` when the pulse goes from idle to active.
    pub fn trigger(&mut self, displayed: Color) -> bool {
        self.target = self.flash_color;
        self.phase = 0.0;
        if self.active {
            return false;
        }
        self.active = true;
        self.initial_color = displayed;
        true
    }

    /// Advance by `dt` and return the color to display, or `None` while idle.
    pub fn step(&mut self, dt: f32, displayed: Color) -> Option<Color> {
        if !self.active {
            return None;
        }
        self.phase += dt * self.speed;

        if displayed == self.target {
            self.target = self.initial_color;
            self.phase = 0.0;
        }

        if displayed == self.initial_color && self.target == self.initial_color {
            self.active = false;
            self.phase = 0.0;
            self.target = self.flash_color;
            debug!("Hit flash finished");
            return Some(displayed);
        }

        Some(displayed.lerp(self.target, self.phase))
    }
}

/// Alpha blink on a separate background entity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundBlink {
    /// Entity whose [`Tint`](crate::components::tint::Tint) alpha blinks.
    #[serde(skip)]
    pub target: Entity,
    pub min_alpha: f32,
    pub max_alpha: f32,
    pub active: bool,
    pub elapsed: f32,
    /// Background alpha restored when the blink ends.
    pub initial_alpha: f32,
}

impl BackgroundBlink {
    /// `min_alpha` is clamped into `[0, max_alpha]`.
    pub fn new(target: Entity, min_alpha: f32, max_alpha: f32) -> Self {
        let max_alpha = max_alpha.max(0.0);
        Self {
            target,
            min_alpha: min_alpha.clamp(0.0, max_alpha),
            max_alpha,
            active: false,
            elapsed: 0.0,
            initial_alpha: 0.0,
        }
    }

    /// Start blinking from `current_alpha`. A running blink ignores the hit.
    ///
    /// Returns `true` when the blink goes from idle to active.
    pub fn trigger(&mut self, current_alpha: f32) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.initial_alpha = current_alpha;
        true
    }

    /// Advance by `dt` and return the alpha to display, or `None` while idle.
    pub fn step(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        let alpha = ping_pong(self.elapsed, self.max_alpha);
        if self.elapsed > self.max_alpha
            && round_to_tenths(alpha) == round_to_tenths(self.min_alpha)
        {
            self.active = false;
            self.elapsed = 0.0;
            debug!("Hit background blink finished");
            return Some(self.initial_alpha);
        }
        Some(alpha)
    }
}

/// Immediate visual changes caused by one hit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitResponse {
    /// Stage sprite to show, when stage sprites are configured.
    pub stage: Option<usize>,
    /// Color to show, when a gradient is configured.
    pub color: Option<Color>,
    pub flash_started: bool,
    pub blink_started: bool,
}

/// Per-frame visual output of the running animations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeedbackFrame {
    /// Ship color, while the flash pulse runs (including its final frame).
    pub color: Option<Color>,
    /// Background alpha, while the blink runs (including its final frame).
    pub background_alpha: Option<f32>,
}

/// Hit-feedback configuration and animation state of a ship.
#[derive(Component, Clone, Debug, Serialize)]
pub struct HitFeedback {
    /// Health at spawn, used for all health ratios.
    pub initial_health: i32,
    pub stages: Option<StageSprites>,
    pub gradient: Option<Gradient>,
    pub flash: Option<FlashPulse>,
    pub blink: Option<BackgroundBlink>,
}

impl HitFeedback {
    /// Feedback with every animation disabled.
    pub fn new(initial_health: i32) -> Self {
        Self {
            initial_health,
            stages: None,
            gradient: None,
            flash: None,
            blink: None,
        }
    }

    pub fn with_stages(mut self, stages: StageSprites) -> Self {
        self.stages = Some(stages);
        self
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn with_flash(mut self, flash: FlashPulse) -> Self {
        self.flash = Some(flash);
        self
    }

    pub fn with_blink(mut self, blink: BackgroundBlink) -> Self {
        self.blink = Some(blink);
        self
    }

    pub fn stage_index(&self, health: i32) -> Option<usize> {
        self.stages
            .as_ref()
            .map(|s| s.stage_index(health, self.initial_health))
    }

    pub fn gradient_color(&self, health: i32) -> Option<Color> {
        let gradient = self.gradient.as_ref()?;
        let ratio = if self.initial_health > 0 {
            health as f32 / self.initial_health as f32
        } else {
            0.0
        };
        Some(gradient.evaluate(ratio))
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some_and(|f| f.active)
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.is_some_and(|b| b.active)
    }

    /// React to a hit that left the ship at `health`.
    ///
    /// `displayed_color` is the ship's current color and `background_alpha`
    /// the current alpha of the blink target (`None` if it is gone). The
    /// flash pulse starts from the color *after* the gradient update.
    pub fn on_hit(
        &mut self,
        health: i32,
        displayed_color: Color,
        background_alpha: Option<f32>,
    ) -> HitResponse {
        let stage = self.stage_index(health);
        let color = self.gradient_color(health);
        let displayed = color.unwrap_or(displayed_color);

        let flash_started = match self.flash.as_mut() {
            Some(flash) => flash.trigger(displayed),
            None => false,
        };
        let blink_started = match (self.blink.as_mut(), background_alpha) {
            (Some(blink), Some(alpha)) => blink.trigger(alpha),
            _ => false,
        };

        if flash_started {
            debug!("Hit flash started from {}", displayed);
        }
        if blink_started {
            debug!("Hit background blink started");
        }

        HitResponse {
            stage,
            color,
            flash_started,
            blink_started,
        }
    }

    /// Advance the running animations by `dt`.
    pub fn tick(&mut self, dt: f32, displayed_color: Color) -> FeedbackFrame {
        let dt = dt.max(0.0);
        FeedbackFrame {
            color: self
                .flash
                .as_mut()
                .and_then(|f| f.step(dt, displayed_color)),
            background_alpha: self.blink.as_mut().and_then(|b| b.step(dt)),
        }
    }
}

/// Marker for the entity whose alpha the background blink animates.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct HitBackground;

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;
    const DT: f32 = 1.0 / 60.0;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn stages(n: usize) -> StageSprites {
        StageSprites::new((0..n).map(|i| format!("damage_{}", i)).collect()).unwrap()
    }

    // ==================== HELPER TESTS ====================

    #[test]
    fn test_ping_pong() {
        assert!(approx_eq(ping_pong(0.0, 0.5), 0.0));
        assert!(approx_eq(ping_pong(0.25, 0.5), 0.25));
        assert!(approx_eq(ping_pong(0.5, 0.5), 0.5));
        assert!(approx_eq(ping_pong(0.75, 0.5), 0.25));
        assert!(approx_eq(ping_pong(1.0, 0.5), 0.0));
        assert!(approx_eq(ping_pong(1.2, 0.5), 0.2));
        assert_eq!(ping_pong(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_to_tenths() {
        assert_eq!(round_to_tenths(0.04), 0.0);
        assert_eq!(round_to_tenths(0.26), 0.3);
        assert_eq!(round_to_tenths(0.5), 0.5);
    }

    // ==================== STAGE TESTS ====================

    #[test]
    fn test_stage_sprites_empty_is_none() {
        assert!(StageSprites::new(Vec::new()).is_none());
    }

    #[test]
    fn test_stage_index_buckets() {
        let s = stages(3);
        assert_eq!(s.stage_index(100, 100), 0);
        assert_eq!(s.stage_index(75, 100), 0);
        assert_eq!(s.stage_index(74, 100), 1);
        assert_eq!(s.stage_index(60, 100), 1);
        assert_eq!(s.stage_index(50, 100), 1);
        assert_eq!(s.stage_index(49, 100), 2);
        assert_eq!(s.stage_index(30, 100), 2);
        assert_eq!(s.stage_index(26, 100), 2);
        assert_eq!(s.stage_index(25, 100), 2);
        assert_eq!(s.stage_index(1, 100), 2);
    }

    #[test]
    fn test_stage_index_whole_buckets() {
        // 1000 / 4 = 250 per bucket.
        let s = stages(3);
        assert_eq!(s.stage_index(999, 1000), 0);
        assert_eq!(s.stage_index(749, 1000), 1);
        assert_eq!(s.stage_index(700, 1000), 1);
        assert_eq!(s.stage_index(499, 1000), 2);
        // 10 / 4 truncates to 2.
        assert_eq!(s.stage_index(6, 10), 0);
        assert_eq!(s.stage_index(5, 10), 1);
        assert_eq!(s.stage_index(3, 10), 2);
    }

    #[test]
    fn test_stage_index_clamped() {
        let s = stages(3);
        assert_eq!(s.stage_index(0, 100), 2);
        assert_eq!(s.stage_index(-40, 100), 2);
        assert_eq!(s.stage_index(500, 100), 0);
        assert_eq!(s.stage_index(10, 0), 2);
        // 3 / 4 leaves no whole bucket.
        assert_eq!(s.stage_index(3, 3), 2);
    }

    #[test]
    fn test_single_stage_always_zero() {
        let s = stages(1);
        assert_eq!(s.stage_index(100, 100), 0);
        assert_eq!(s.stage_index(1, 100), 0);
        assert_eq!(s.sprite(0), Some("damage_0"));
        assert_eq!(s.sprite(1), None);
    }

    // ==================== FLASH TESTS ====================

    fn run_flash(flash: &mut FlashPulse, mut displayed: Color, max_ticks: usize) -> (Color, usize) {
        for tick in 0..max_ticks {
            match flash.step(DT, displayed) {
                Some(c) => displayed = c,
                None => return (displayed, tick),
            }
        }
        (displayed, max_ticks)
    }

    #[test]
    fn test_flash_trigger_starts_once() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        assert!(f.trigger(Color::WHITE));
        assert!(!f.trigger(Color::BLACK));
        assert_eq!(f.initial_color, Color::WHITE);
    }

    #[test]
    fn test_flash_reaches_target_then_returns() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        f.trigger(Color::WHITE);
        let mut displayed = Color::WHITE;
        let mut reached_flash = false;
        for _ in 0..200 {
            match f.step(DT, displayed) {
                Some(c) => displayed = c,
                None => break,
            }
            if displayed == Color::RED {
                reached_flash = true;
            }
        }
        assert!(reached_flash);
        assert!(!f.active);
        assert_eq!(displayed, Color::WHITE);
        assert_eq!(f.target, Color::RED);
        assert_eq!(f.phase, 0.0);
    }

    #[test]
    fn test_flash_terminates_within_bound() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        f.trigger(Color::WHITE);
        let (displayed, ticks) = run_flash(&mut f, Color::WHITE, 1000);
        // Each leg needs at most ceil(1 / (DT * speed)) ticks plus the swap tick
        assert!(ticks <= 2 * 10 + 3, "took {} ticks", ticks);
        assert!(!f.active);
        assert_eq!(displayed, Color::WHITE);
    }

    #[test]
    fn test_flash_retrigger_restarts_pulse() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        f.trigger(Color::WHITE);
        let mut displayed = Color::WHITE;
        for _ in 0..5 {
            displayed = f.step(DT, displayed).unwrap();
        }
        assert!(f.phase > 0.0);
        assert!(!f.trigger(displayed));
        assert_eq!(f.phase, 0.0);
        assert_eq!(f.target, Color::RED);
        // Return color is still the one captured on the first hit
        assert_eq!(f.initial_color, Color::WHITE);
        let (displayed, _) = run_flash(&mut f, displayed, 1000);
        assert_eq!(displayed, Color::WHITE);
    }

    #[test]
    fn test_flash_same_color_finishes_immediately() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        f.trigger(Color::RED);
        assert_eq!(f.step(DT, Color::RED), Some(Color::RED));
        assert!(!f.active);
    }

    #[test]
    fn test_flash_idle_step_is_none() {
        let mut f = FlashPulse::new(Color::RED, 7.0);
        assert_eq!(f.step(DT, Color::WHITE), None);
    }

    // ==================== BLINK TESTS ====================

    #[test]
    fn test_blink_runs_and_restores_alpha() {
        let mut b = BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5);
        assert!(b.trigger(0.1));
        let mut last = None;
        let mut ticks = 0;
        while b.active && ticks < 1000 {
            last = b.step(DT);
            ticks += 1;
        }
        assert!(!b.active);
        assert!(ticks < 120, "took {} ticks", ticks);
        assert_eq!(last, Some(0.1));
        assert_eq!(b.elapsed, 0.0);
    }

    #[test]
    fn test_blink_alpha_follows_ping_pong() {
        let mut b = BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5);
        b.trigger(0.0);
        let a = b.step(0.25).unwrap();
        assert!(approx_eq(a, 0.25));
        let a = b.step(0.25).unwrap();
        assert!(approx_eq(a, 0.5));
        let a = b.step(0.25).unwrap();
        assert!(approx_eq(a, 0.25));
    }

    #[test]
    fn test_blink_retrigger_is_noop() {
        let mut b = BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5);
        b.trigger(0.2);
        b.step(0.1);
        b.step(0.1);
        let elapsed = b.elapsed;
        assert!(!b.trigger(0.9));
        assert_eq!(b.elapsed, elapsed);
        assert_eq!(b.initial_alpha, 0.2);
    }

    #[test]
    fn test_blink_min_alpha_clamped() {
        let b = BackgroundBlink::new(Entity::PLACEHOLDER, 0.9, 0.5);
        assert!(approx_eq(b.min_alpha, 0.5));
    }

    // ==================== HIT FEEDBACK TESTS ====================

    #[test]
    fn test_disabled_feedback_does_nothing() {
        let mut fb = HitFeedback::new(100);
        let r = fb.on_hit(50, Color::WHITE, Some(0.0));
        assert_eq!(r, HitResponse::default());
        assert_eq!(fb.tick(DT, Color::WHITE), FeedbackFrame::default());
    }

    #[test]
    fn test_on_hit_applies_stage_and_gradient() {
        let mut fb = HitFeedback::new(100)
            .with_stages(stages(3))
            .with_gradient(Gradient::two_keys(Color::RED, Color::WHITE));
        let r = fb.on_hit(50, Color::WHITE, None);
        assert_eq!(r.stage, Some(1));
        assert_eq!(r.color, Some(Color::new(255, 128, 128, 255)));
        assert!(!r.flash_started);
        assert!(!r.blink_started);
    }

    #[test]
    fn test_flash_starts_from_gradient_color() {
        let mut fb = HitFeedback::new(100)
            .with_gradient(Gradient::two_keys(Color::BLACK, Color::WHITE))
            .with_flash(FlashPulse::new(Color::RED, 7.0));
        let r = fb.on_hit(0, Color::WHITE, None);
        assert!(r.flash_started);
        assert_eq!(fb.flash.unwrap().initial_color, Color::BLACK);
    }

    #[test]
    fn test_blink_needs_background_alpha() {
        let mut fb =
            HitFeedback::new(100).with_blink(BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5));
        let r = fb.on_hit(90, Color::WHITE, None);
        assert!(!r.blink_started);
        let r = fb.on_hit(80, Color::WHITE, Some(0.0));
        assert!(r.blink_started);
        assert!(fb.is_blinking());
    }

    #[test]
    fn test_tick_reports_running_animations() {
        let mut fb = HitFeedback::new(100)
            .with_flash(FlashPulse::new(Color::RED, 7.0))
            .with_blink(BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5));
        fb.on_hit(90, Color::WHITE, Some(0.0));
        let frame = fb.tick(DT, Color::WHITE);
        assert!(frame.color.is_some());
        assert!(frame.background_alpha.is_some());
    }

    #[test]
    fn test_flash_and_blink_are_independent() {
        let mut fb = HitFeedback::new(100)
            .with_flash(FlashPulse::new(Color::RED, 30.0))
            .with_blink(BackgroundBlink::new(Entity::PLACEHOLDER, 0.0, 0.5));
        fb.on_hit(90, Color::WHITE, Some(0.0));

        let mut color = Color::WHITE;
        let mut ticks = 0;
        while fb.is_flashing() && ticks < 1000 {
            if let Some(c) = fb.tick(DT, color).color {
                color = c;
            }
            ticks += 1;
        }
        // The faster flash is done while the blink keeps going
        assert!(!fb.is_flashing());
        assert!(fb.is_blinking());
    }

    #[test]
    fn test_gradient_with_zero_initial_health() {
        let fb = HitFeedback::new(0).with_gradient(Gradient::two_keys(Color::RED, Color::WHITE));
        assert_eq!(fb.gradient_color(10), Some(Color::RED));
    }
}
