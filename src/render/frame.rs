//! Draw list for one frame
//!
//! Turns a [`RenderSnapshot`] into colored triangles in back-to-front order.
//! The host uploads the result as-is (see [`super::vertex::as_bytes`]).

use glam::Vec2;

use super::shapes::{gradient_rect, rect, translate};
use super::snapshot::RenderSnapshot;
use super::vertex::{Vertex, colors, glow, with_alpha};
use crate::consts::*;

/// Build the full frame. The background is not shaken; everything else is.
pub fn build_frame(snap: &RenderSnapshot) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(
        6 * (1 + snap.stars.len() + 3 + 3 + snap.ghosts.len() * 3 + snap.particles.len()),
    );

    out.extend(gradient_rect(
        Vec2::ZERO,
        Vec2::splat(2.0),
        colors::BG_TOP,
        colors::BG_BOTTOM,
    ));
    let background = out.len();

    for star in &snap.stars {
        out.extend(rect(
            star.pos,
            Vec2::splat(star.size),
            glow(with_alpha(colors::STAR, star.alpha), 1.2),
        ));
    }

    // Thin full-height center line
    out.extend(rect(
        Vec2::new(0.0, PLAYER_Y + PLAYER_H * 0.5 + 0.02),
        Vec2::new(0.01, 2.0),
        colors::DIVIDER,
    ));

    push_player(&mut out, snap);
    if snap.bullet_active {
        push_bullet(&mut out, snap.bullet_pos);
    }
    for ghost in snap.ghosts.iter().filter(|g| g.alive) {
        push_ghost(&mut out, ghost.pos, ghost.size, snap.time, ghost.phase);
    }

    for p in &snap.particles {
        out.extend(rect(
            p.pos,
            Vec2::splat(p.size),
            glow(with_alpha(colors::SPARK, p.alpha), 1.0 + 0.5 * p.alpha),
        ));
    }

    translate(&mut out[background..], snap.shake_offset);
    out
}

fn push_player(out: &mut Vec<Vertex>, snap: &RenderSnapshot) {
    let color = glow(colors::PLAYER, snap.player_pulse);
    let size = snap.player_size;
    out.extend(rect(snap.player_pos, size, color));
    // Turret
    out.extend(rect(
        snap.player_pos + Vec2::new(0.0, size.y * 0.35),
        Vec2::new(size.x * 0.35, size.y * 0.6),
        color,
    ));
}

fn push_bullet(out: &mut Vec<Vertex>, pos: Vec2) {
    out.extend(rect(
        pos,
        Vec2::new(BULLET_W, BULLET_H),
        glow(colors::BULLET, 1.2),
    ));
    // Fading trail
    out.extend(rect(
        pos - Vec2::new(0.0, BULLET_H * 0.8),
        Vec2::new(BULLET_W * 0.9, BULLET_H * 0.6),
        with_alpha(colors::BULLET, 0.6),
    ));
    out.extend(rect(
        pos - Vec2::new(0.0, BULLET_H * 1.5),
        Vec2::new(BULLET_W * 0.8, BULLET_H * 0.4),
        glow(with_alpha(colors::BULLET, 0.35), 0.9),
    ));
}

fn push_ghost(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, time: f32, phase: f32) {
    let pulse = 0.85 + 0.35 * (time * 3.0 + phase).sin();
    out.extend(rect(pos, size, glow(colors::GHOST, pulse)));

    let eye_off = Vec2::new(size.x * 0.18, size.y * 0.10);
    let eye_size = size * 0.14;
    out.extend(rect(pos + Vec2::new(-eye_off.x, eye_off.y), eye_size, colors::EYES));
    out.extend(rect(pos + eye_off, eye_size, colors::EYES));
}
