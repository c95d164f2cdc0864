//! Course layout loader.
//!
//! A course is a spawn point plus a list of axis-aligned solids. Layers are
//! written by name (`"FLOOR"`, `"CLIMBABLE"`, ...) so data files stay readable.

use std::path::Path;

use glam::Vec3;
use platformer_core::{AabbWorld, LayerMask, Solid, SurfaceId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_COURSE_RON: &str = include_str!("../../data/course.ron");

/// Course data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CourseRon {
    spawn: (f32, f32, f32),
    solids: Vec<SolidRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SolidRon {
    min: (f32, f32, f32),
    max: (f32, f32, f32),
    layers: Vec<String>,
    surface: u32,
}

/// A loaded course, ready to be raycast against.
#[derive(Clone, Debug)]
pub struct Course {
    pub spawn: Vec3,
    pub world: AabbWorld,
}

/// Loader for course layouts from RON files.
pub struct CourseLoader;

impl CourseLoader {
    /// Load a course from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, names an unknown layer,
    /// or contains a box whose `min` is not below its `max` on every axis.
    pub fn load(path: &Path) -> LoadResult<Course> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// The training course bundled in `data/course.ron`.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is broken.
    pub fn load_embedded() -> LoadResult<Course> {
        Self::parse(EMBEDDED_COURSE_RON)
    }

    pub fn parse(content: &str) -> LoadResult<Course> {
        let data: CourseRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse course RON: {}", e))?;

        let mut world = AabbWorld::new();
        for (index, solid) in data.solids.into_iter().enumerate() {
            let min = Vec3::from(solid.min);
            let max = Vec3::from(solid.max);
            if !min.cmplt(max).all() {
                return Err(anyhow::anyhow!(
                    "Solid #{} has an empty extent: min {:?}, max {:?}",
                    index,
                    min,
                    max
                ));
            }

            world.push(Solid {
                min,
                max,
                layers: parse_layers(&solid.layers)?,
                surface: SurfaceId(solid.surface),
            });
        }

        Ok(Course {
            spawn: Vec3::from(data.spawn),
            world,
        })
    }
}

fn parse_layers(names: &[String]) -> LoadResult<LayerMask> {
    if names.is_empty() {
        return Ok(LayerMask::DEFAULT);
    }

    names.iter().try_fold(LayerMask::empty(), |mask, name| {
        LayerMask::from_name(&name.to_ascii_uppercase())
            .map(|layer| mask | layer)
            .ok_or_else(|| anyhow::anyhow!("Unknown layer: {}", name))
    })
}
