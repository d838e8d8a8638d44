//! Hit feedback systems.
//!
//! - [`hit_feedback_observer`] reacts to a [`HitEvent`]: it swaps the ship's
//!   stage sprite, recolors it from the health gradient and starts the flash
//!   pulse and background blink.
//! - [`hit_feedback_system`] advances the running flash and blink every
//!   frame and writes the results to the ship's and background's [`Tint`].
//!
//! The ship and its background are separate entities; the two queries are
//! kept disjoint with `With`/`Without` filters on [`HitBackground`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::health::Health;
use crate::components::hitfeedback::{HitBackground, HitFeedback};
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::events::hit::HitEvent;
use crate::math::Color;
use crate::resources::worldtime::WorldTime;

type ShipQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Health,
        &'static mut HitFeedback,
        Option<&'static mut Sprite>,
        Option<&'static mut Tint>,
    ),
    Without<HitBackground>,
>;

type BackgroundQuery<'w, 's> =
    Query<'w, 's, &'static mut Tint, (With<HitBackground>, Without<HitFeedback>)>;

/// Start the hit feedback of the ship named by the event.
pub fn hit_feedback_observer(
    trigger: On<HitEvent>,
    mut ships: ShipQuery,
    backgrounds: BackgroundQuery,
) {
    let entity = trigger.event().entity;
    let Ok((health, mut feedback, sprite, tint)) = ships.get_mut(entity) else {
        warn!("Hit on {:?} ignored: no hit feedback", entity);
        return;
    };

    let displayed = tint.as_ref().map_or(Color::WHITE, |t| t.color);
    let background_alpha = feedback
        .blink
        .and_then(|b| backgrounds.get(b.target).ok())
        .map(|t| t.alpha());

    let response = feedback.on_hit(health.current, displayed, background_alpha);

    if let (Some(index), Some(mut sprite)) = (response.stage, sprite)
        && let Some(key) = feedback.stages.as_ref().and_then(|s| s.sprite(index))
    {
        sprite.tex_key = key.to_string();
    }
    if let (Some(color), Some(mut tint)) = (response.color, tint) {
        tint.color = color;
    }
}

/// Advance flash pulses and background blinks.
pub fn hit_feedback_system(
    time: Res<WorldTime>,
    mut ships: Query<(&mut HitFeedback, Option<&mut Tint>), Without<HitBackground>>,
    mut backgrounds: BackgroundQuery,
) {
    for (mut feedback, tint) in ships.iter_mut() {
        if !feedback.is_flashing() && !feedback.is_blinking() {
            continue;
        }
        let displayed = tint.as_ref().map_or(Color::WHITE, |t| t.color);
        let frame = feedback.tick(time.delta, displayed);

        if let (Some(color), Some(mut tint)) = (frame.color, tint) {
            tint.color = color;
        }
        if let Some(alpha) = frame.background_alpha
            && let Some(target) = feedback.blink.map(|b| b.target)
            && let Ok(mut background) = backgrounds.get_mut(target)
        {
            background.set_alpha(alpha);
        }
    }
}
