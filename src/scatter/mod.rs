//! Random prize layout for the cabinet floor.
//!
//! Generation is one-shot: given a template and settings it produces the
//! position, size and tint of every prize. Instantiating and drawing them
//! is up to the host scene.

use crate::core::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub mod error;

pub use error::ScatterError;

/// Width and height of the rectangle prizes are spawned in, centred on
/// the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub width: f32,
    pub height: f32,
}

/// Settings for one scatter pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterSettings {
    /// How many prizes to generate
    pub count: usize,
    pub spawn_area: SpawnArea,
    /// Smallest uniform scale
    pub min_scale: f32,
    /// Largest uniform scale
    pub max_scale: f32,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            count: 10,
            spawn_area: SpawnArea {
                width: 10.0,
                height: 5.0,
            },
            min_scale: 0.5,
            max_scale: 2.0,
        }
    }
}

/// The prize every spawn is copied from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTemplate {
    pub name: String,
    /// Whether the prize has a sprite that can be tinted
    pub has_sprite: bool,
}

/// Straight RGBA colour, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// One generated prize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrizeSpawn {
    /// Position on the cabinet floor, always with `z == 0`
    pub position: Vec3,
    /// Uniform X/Y scale; Z scale stays 1
    pub scale: f32,
    /// Tint, or `None` if the template has no sprite
    pub color: Option<Rgba>,
}

impl PrizeSpawn {
    pub fn scale_vector(&self) -> Vec3 {
        Vec3::new(self.scale, self.scale, 1.0)
    }
}

/// Generates prize layouts from [`ScatterSettings`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrizeScatter {
    settings: ScatterSettings,
}

impl PrizeScatter {
    pub fn new(settings: ScatterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ScatterSettings {
        &self.settings
    }

    /// Generate `count` prizes from `template`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use claw_machine::scatter::{PrizeScatter, PrizeTemplate, ScatterSettings};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let template = PrizeTemplate { name: "duck".into(), has_sprite: true };
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let prizes = PrizeScatter::new(ScatterSettings::default())
    ///     .generate(Some(&template), &mut rng)
    ///     .unwrap();
    /// assert_eq!(prizes.len(), 10);
    /// ```
    pub fn generate<R>(
        &self,
        template: Option<&PrizeTemplate>,
        rng: &mut R,
    ) -> Result<Vec<PrizeSpawn>, ScatterError>
    where
        R: Rng + ?Sized,
    {
        let template = template.ok_or(ScatterError::MissingTemplate)?;
        self.check()?;

        let half_w = self.settings.spawn_area.width / 2.0;
        let half_h = self.settings.spawn_area.height / 2.0;

        if !template.has_sprite {
            warn!(
                template = %template.name,
                "prize template has no sprite; skipping tint"
            );
        }

        let prizes: Vec<PrizeSpawn> = (0..self.settings.count)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-half_w..=half_w),
                    rng.gen_range(-half_h..=half_h),
                    0.0,
                );
                let scale = rng.gen_range(self.settings.min_scale..=self.settings.max_scale);
                let color = template.has_sprite.then(|| Rgba {
                    r: rng.gen(),
                    g: rng.gen(),
                    b: rng.gen(),
                    a: 1.0,
                });
                PrizeSpawn {
                    position,
                    scale,
                    color,
                }
            })
            .collect();

        info!(count = prizes.len(), template = %template.name, "prizes generated");
        Ok(prizes)
    }

    fn check(&self) -> Result<(), ScatterError> {
        let SpawnArea { width, height } = self.settings.spawn_area;
        if !(sampleable(-width / 2.0, width / 2.0) && sampleable(-height / 2.0, height / 2.0)) {
            return Err(ScatterError::InvalidSpawnArea { width, height });
        }

        let (min, max) = (self.settings.min_scale, self.settings.max_scale);
        if !(min > 0.0 && sampleable(min, max)) {
            return Err(ScatterError::InvalidScaleRange { min, max });
        }

        Ok(())
    }
}

/// Whether `low..=high` can be sampled uniformly. The sampler divides the
/// span by a value just below one, and that quotient must stay finite.
fn sampleable(low: f32, high: f32) -> bool {
    low <= high && ((high - low) / (1.0 - f32::EPSILON)).is_finite()
}
