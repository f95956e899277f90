use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::SceneError;
use crate::geometry::{Geometry, Model};
use crate::light::Light;
use crate::loader::SceneDescription;
use crate::{Intersection, Ray};

pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Everything a render needs. Read-only while rendering.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<Model>,
    pub lights: Vec<Light>,
    pub ambient_color: Color,
    pub background_color: Color,

    /// Number of reflection/refraction bounces after the primary hit.
    pub max_depth: u32,
}

impl Scene {
    /// An empty scene with white ambient light and a black background.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            lights: Vec::new(),
            ambient_color: Color::WHITE,
            background_color: Color::BLACK,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        log::info!("loading scene from {}", path.as_ref().display());

        let file = File::open(path.as_ref())?;
        let description: SceneDescription = serde_json::from_reader(BufReader::new(file))?;
        description.build()
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let description: SceneDescription = serde_json::from_str(json)?;
        description.build()
    }

    /// Linear scan for the closest hit. On exactly equal distances the object
    /// listed first wins.
    pub fn find_nearest(&self, ray: &Ray) -> Option<(&Model, Intersection)> {
        let mut closest: Option<(&Model, Intersection)> = None;

        for model in &self.objects {
            if let Some(intersection) = model.intersection(ray) {
                if closest.map_or(true, |(_, nearest)| intersection.t < nearest.t) {
                    closest = Some((model, intersection));
                }
            }
        }

        closest
    }
}
