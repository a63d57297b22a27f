//! Approach lighting backdrop of the landing page.
//!
//! The scene is an ALSF-2 style approach light system seen from above: a
//! centerline, five crossbars, two side rows and five sequenced flashers
//! (the "rabbit") running towards the threshold. Coordinates follow the
//! runway: `x` across, `z` along the approach, negative away from the viewer.

use rand::Rng;
use std::fmt::Write;

/// Length of one full rabbit sequence.
pub(crate) const FLASH_CYCLE_MS: u64 = 2000;
const FLASH_DURATION_MS: u64 = 200;
const FLASH_SPACING_MS: u64 = 300;
/// Chance per frame that a steady light changes brightness.
const FLICKER_PROBABILITY: f64 = 0.01;

const RUNWAY_HALF_WIDTH: f32 = 150.0;
const SCENE_DEPTH: f32 = 1600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LightKind {
    Centerline,
    Crossbar,
    SideRow,
    Rabbit,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApproachLight {
    kind: LightKind,
    x: f32,
    z: f32,
    size: f32,
    intensity: f32,
    opacity: f32,
    scale: f32,
}

impl ApproachLight {
    fn new(kind: LightKind, x: f32, z: f32, size: f32, intensity: f32) -> Self {
        Self { kind, x, z, size, intensity, opacity: 1.0, scale: 1.0 }
    }

    pub(crate) fn kind(&self) -> LightKind { self.kind }
    pub(crate) fn position(&self) -> (f32, f32) { (self.x, self.z) }
    pub(crate) fn size(&self) -> f32 { self.size }
    pub(crate) fn intensity(&self) -> f32 { self.intensity }
    pub(crate) fn opacity(&self) -> f32 { self.opacity }
    pub(crate) fn scale(&self) -> f32 { self.scale }
}

#[derive(Debug, Clone)]
pub(crate) struct RunwayScene {
    lights: Vec<ApproachLight>,
    rabbits: Vec<ApproachLight>,
}

impl Default for RunwayScene {
    fn default() -> Self { Self::new() }
}

impl RunwayScene {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn new() -> Self {
        let mut lights = Vec::new();
        for i in 1..=30 {
            lights.push(ApproachLight::new(LightKind::Centerline, 0.0, -(i as f32 * 50.0), 0.5, 0.7));
        }
        for i in 1..=5 {
            let z = -(i as f32 * 200.0);
            for j in (-6..=6).filter(|j: &i32| *j != 0) {
                lights.push(ApproachLight::new(LightKind::Crossbar, j as f32 * 20.0, z, 0.7, 0.8));
            }
        }
        for i in 0..20 {
            let z = -(i as f32 * 75.0);
            lights.push(ApproachLight::new(LightKind::SideRow, -100.0, z, 0.5, 0.7));
            lights.push(ApproachLight::new(LightKind::SideRow, 100.0, z, 0.5, 0.7));
        }
        let rabbits = (1..=5)
            .map(|i| ApproachLight::new(LightKind::Rabbit, 0.0, -(i as f32 * 200.0) - 100.0, 1.0, 2.0))
            .collect();
        Self { lights, rabbits }
    }

    pub(crate) fn lights(&self) -> &[ApproachLight] { &self.lights }
    pub(crate) fn rabbits(&self) -> &[ApproachLight] { &self.rabbits }

    /// Whether rabbit `index` is lit at `time_ms` into the animation.
    pub(crate) fn rabbit_lit(index: usize, time_ms: u64) -> bool {
        let phase = time_ms % FLASH_CYCLE_MS;
        let start = index as u64 * FLASH_SPACING_MS;
        (start..start + FLASH_DURATION_MS).contains(&phase)
    }

    /// Advances the scene to `time_ms`: random flicker on the steady lights,
    /// sequenced flashing on the rabbit.
    pub(crate) fn update<R: Rng>(&mut self, time_ms: u64, rng: &mut R) {
        for light in &mut self.lights {
            if rng.random_bool(FLICKER_PROBABILITY) {
                light.opacity = rng.random_range(0.5..1.0);
            }
        }
        for (index, rabbit) in self.rabbits.iter_mut().enumerate() {
            if Self::rabbit_lit(index, time_ms) {
                rabbit.intensity = 10.0;
                rabbit.scale = 3.0;
                rabbit.opacity = 1.0;
            } else {
                rabbit.intensity = 0.1;
                rabbit.scale = 1.0;
                rabbit.opacity = 0.3;
            }
        }
    }

    /// Top down text frame, far end of the approach at the top.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub(crate) fn render(&self, width: usize, height: usize) -> String {
        if width < 3 || height < 2 {
            return String::new();
        }
        let mut grid = vec![vec![' '; width]; height];
        let column = |x: f32| {
            let t = (x + RUNWAY_HALF_WIDTH) / (2.0 * RUNWAY_HALF_WIDTH);
            ((t * (width - 1) as f32).round() as usize).min(width - 1)
        };
        let row = |z: f32| {
            let t = (-z / SCENE_DEPTH).clamp(0.0, 1.0);
            height - 1 - ((t * (height - 1) as f32).round() as usize).min(height - 1)
        };
        for line in &mut grid {
            line[0] = '|';
            line[width - 1] = '|';
        }
        for light in &self.lights {
            let glyph = if light.opacity > 0.75 { '*' } else { '+' };
            grid[row(light.z)][column(light.x)] = glyph;
        }
        for rabbit in &self.rabbits {
            grid[row(rabbit.z)][column(rabbit.x)] = if rabbit.scale > 1.0 { '@' } else { '.' };
        }
        let mut out = String::with_capacity((width + 1) * height);
        for line in grid {
            let _ = writeln!(out, "{}", line.into_iter().collect::<String>());
        }
        out
    }
}
