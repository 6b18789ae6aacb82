use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub size: f32,
    /// Polygon segment count for the star disc.
    pub segments: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub extent: f32,
    pub size_min: f32,
    pub size_span: f32,
    pub segments_min: u32,
    pub segments_max: u32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            extent: STAR_FIELD_EXTENT,
            size_min: STAR_SIZE_MIN,
            size_span: STAR_SIZE_SPAN,
            segments_min: STAR_SEGMENTS_MIN,
            segments_max: STAR_SEGMENTS_MAX,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(config: &StarfieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = config.extent.abs() * 0.5;
        let (seg_lo, seg_hi) = if config.segments_min <= config.segments_max {
            (config.segments_min, config.segments_max)
        } else {
            (config.segments_max, config.segments_min)
        };
        let stars = (0..config.count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * config.extent,
                    (rng.gen::<f32>() - 0.5) * config.extent,
                    (rng.gen::<f32>() - 0.5) * config.extent,
                )
                .clamp(Vec3::splat(-half), Vec3::splat(half));
                Star {
                    position,
                    size: config.size_min + rng.gen::<f32>() * config.size_span,
                    segments: rng.gen_range(seg_lo..=seg_hi),
                }
            })
            .collect();
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Flatten to `[x, y, z, size]` per star for instance buffers.
    pub fn to_instance_floats(&self) -> Vec<f32> {
        self.stars
            .iter()
            .flat_map(|s| [s.position.x, s.position.y, s.position.z, s.size])
            .collect()
    }
}
