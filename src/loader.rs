//! JSON scene description and its validation into core types.

use std::sync::Arc;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{ColorError, SceneError};
use crate::geometry::{BezierCurve, Model, Plane, RevolutionSurface, Shape, Sphere, Triangle, TriangleMesh};
use crate::light::Light;
use crate::material::{Material, Texture};
use crate::matrix::Matrix4x4;
use crate::scene::{Scene, DEFAULT_MAX_DEPTH};
use crate::transform::Transform;
use crate::vec3::{Point, Vec3};

/// Either `"#RRGGBB"` or `[r, g, b]` bytes.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ColorDescription {
    Hex(String),
    Rgb([u8; 3]),
}

impl ColorDescription {
    fn white() -> Self {
        ColorDescription::Rgb([255, 255, 255])
    }

    fn black() -> Self {
        ColorDescription::Rgb([0, 0, 0])
    }

    fn build(&self) -> Result<Color, ColorError> {
        match self {
            ColorDescription::Hex(hex) => Color::from_hex(hex),
            ColorDescription::Rgb([r, g, b]) => Ok(Color::from_rgb(*r, *g, *b)),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CameraDescription {
    pub h_res: u32,
    pub v_res: u32,
    pub pixel_size: f64,
    pub focal_distance: f64,
    pub eye: Point,
    pub look_at: Point,
    #[serde(default = "default_up")]
    pub up: Vec3<f64>,
}

fn default_up() -> Vec3<f64> {
    Vec3::new(0.0, 1.0, 0.0)
}

#[derive(Clone, Debug, Deserialize)]
pub struct LightDescription {
    pub position: Point,
    #[serde(default = "ColorDescription::white")]
    pub color: ColorDescription,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDescription {
    Sphere {
        center: Point,
        radius: f64,
    },
    Plane {
        point: Point,
        normal: Vec3<f64>,
    },
    Triangle {
        vertices: [Point; 3],
    },
    Mesh {
        vertices: Vec<Point>,
        triangles: Vec<[usize; 3]>,
    },
    Revolution {
        control_points: Vec<Point>,
        axis_point: Point,
        axis: Vec3<f64>,
        resolution: usize,
    },
}

impl GeometryDescription {
    fn build(&self) -> Result<Shape, SceneError> {
        let shape: Shape = match self {
            GeometryDescription::Sphere { center, radius } => Sphere::new(*center, *radius)?.into(),
            GeometryDescription::Plane { point, normal } => Plane::new(*point, *normal)?.into(),
            GeometryDescription::Triangle { vertices: [v0, v1, v2] } => Triangle::new(*v0, *v1, *v2)?.into(),
            GeometryDescription::Mesh { vertices, triangles } => {
                TriangleMesh::new(vertices.clone(), triangles.clone())?.into()
            }
            GeometryDescription::Revolution {
                control_points,
                axis_point,
                axis,
                resolution,
            } => {
                let curve = BezierCurve::new(control_points.clone())?;
                RevolutionSurface::new(&curve, *axis_point, *axis, *resolution)?.into()
            }
        };

        Ok(shape)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub color: ColorDescription,
    pub checker: Option<(ColorDescription, ColorDescription)>,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflection: f64,
    pub phong_exponent: f64,
    pub transmission: f64,
    pub index_of_refraction: f64,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        let material = Material::default();

        Self {
            color: ColorDescription::white(),
            checker: None,
            ambient: material.ambient,
            diffuse: material.diffuse,
            specular: material.specular,
            reflection: material.reflection,
            phong_exponent: material.phong_exponent,
            transmission: material.transmission,
            index_of_refraction: material.index_of_refraction,
        }
    }
}

impl MaterialDescription {
    fn build(&self) -> Result<Material, ColorError> {
        let texture = match &self.checker {
            Some((first, second)) => Texture::Checkered(first.build()?, second.build()?),
            None => Texture::Solid(self.color.build()?),
        };

        Ok(Material {
            texture,
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            reflection: self.reflection,
            phong_exponent: self.phong_exponent,
            transmission: self.transmission,
            index_of_refraction: self.index_of_refraction,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformDescription {
    Translate(Vec3<f64>),
    Rotate { point: Point, axis: Vec3<f64>, angle: f64 },
    Scale(Vec3<f64>),
    Reflect { point: Point, normal: Vec3<f64> },
    Matrix(MatrixDescription),
}

/// Full homogeneous matrix, or a linear 3x3 map promoted to one.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum MatrixDescription {
    Homogeneous(Matrix4x4<f64>),
    Linear([[f64; 3]; 3]),
}

impl MatrixDescription {
    fn build(&self) -> Matrix4x4<f64> {
        match self {
            MatrixDescription::Homogeneous(m) => *m,
            MatrixDescription::Linear(m) => Matrix4x4::from_3x3(*m),
        }
    }
}

impl TransformDescription {
    fn apply<T: Transform>(&self, value: &T) -> T {
        match self {
            TransformDescription::Translate(v) => value.translate(*v),
            TransformDescription::Rotate { point, axis, angle } => value.rotate(*point, *axis, *angle),
            TransformDescription::Scale(v) => value.scale(*v),
            TransformDescription::Reflect { point, normal } => value.reflect(*point, *normal),
            TransformDescription::Matrix(m) => value.transform(&m.build()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ModelDescription {
    pub geometry: GeometryDescription,
    #[serde(default)]
    pub material: MaterialDescription,
    #[serde(default)]
    pub transform: Vec<TransformDescription>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub models: Vec<ModelDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    #[serde(default = "ColorDescription::white")]
    pub ambient_color: ColorDescription,
    #[serde(default = "ColorDescription::black")]
    pub background_color: ColorDescription,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl SceneDescription {
    pub fn build(&self) -> Result<Scene, SceneError> {
        let c = &self.camera;
        let camera = Camera::new(c.v_res, c.h_res, c.pixel_size, c.focal_distance, c.eye, c.look_at, c.up)?;

        let mut objects = Vec::with_capacity(self.models.len());
        for model in &self.models {
            let mut placed = Model {
                geometry: model.geometry.build()?,
                material: Arc::new(model.material.build()?),
            };
            for transform in &model.transform {
                placed = transform.apply(&placed);
            }
            objects.push(placed);
        }

        let lights = self
            .lights
            .iter()
            .map(|l| Ok(Light::new(l.position, l.color.build()?)))
            .collect::<Result<Vec<_>, ColorError>>()?;

        if lights.is_empty() {
            log::warn!("scene has no lights, only ambient shading will be visible");
        }
        log::info!("scene: {} models, {} lights", objects.len(), lights.len());

        Ok(Scene {
            camera,
            objects,
            lights,
            ambient_color: self.ambient_color.build()?,
            background_color: self.background_color.build()?,
            max_depth: self.max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    const SCENE: &str = r##"{
        "camera": {
            "h_res": 4, "v_res": 3, "pixel_size": 0.5, "focal_distance": 2.0,
            "eye": [0, 0, 0], "look_at": [0, 0, 1]
        },
        "background_color": "#191970",
        "max_depth": 3,
        "lights": [{"position": [0, 5, 0]}],
        "models": [
            {
                "geometry": {"type": "sphere", "center": [0, 0, 5], "radius": 1},
                "material": {"color": [255, 0, 0], "reflection": 0.0},
                "transform": [{"translate": [1, 0, 0]}]
            },
            {
                "geometry": {"type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0]},
                "material": {"checker": ["#FFFFFF", "#000000"]}
            },
            {
                "geometry": {"type": "mesh", "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]], "triangles": [[0, 1, 2]]},
                "transform": [
                    {"rotate": {"point": [0, 0, 0], "axis": [0, 1, 0], "angle": 90}},
                    {"scale": [2, 2, 2]}
                ]
            }
        ]
    }"##;

    #[test]
    fn parse_scene() {
        let scene = Scene::from_json(SCENE).unwrap();

        assert_eq!(4, scene.camera.h_res);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), scene.camera.up);
        assert_eq!(Color::from_rgb(0x19, 0x19, 0x70), scene.background_color);
        assert_eq!(Color::WHITE, scene.ambient_color);
        assert_eq!(3, scene.max_depth);
        assert_eq!(1, scene.lights.len());
        assert_eq!(Color::WHITE, scene.lights[0].color);
        assert_eq!(3, scene.objects.len());

        match &scene.objects[0].geometry {
            Shape::Sphere(sphere) => assert_eq!(Vec3::new(1.0, 0.0, 5.0), sphere.center()),
            other => panic!("unexpected shape: {:?}", other),
        }

        let red = &scene.objects[0].material;
        assert_eq!(Texture::Solid(Color::new(1.0, 0.0, 0.0)), red.texture);
        assert_eq!(0.0, red.reflection);
        assert_eq!(Material::default().ambient, red.ambient);

        assert_eq!(Texture::Checkered(Color::WHITE, Color::BLACK), scene.objects[1].material.texture);
    }

    #[test]
    fn transforms_apply_in_order() {
        let scene = Scene::from_json(SCENE).unwrap();

        match &scene.objects[2].geometry {
            Shape::Mesh(mesh) => {
                // (1, 0, 0) rotated 90 degrees about +y lands on -z, then doubles.
                assert!((mesh.vertices()[1] - Vec3::new(0.0, 0.0, -2.0)).len() < 1e-9);
            }
            other => panic!("unexpected shape: {:?}", other),
        }
    }

    #[test]
    fn invalid_geometry_is_reported() {
        let json = r#"{
            "camera": {"h_res": 1, "v_res": 1, "pixel_size": 1, "focal_distance": 1, "eye": [0, 0, 0], "look_at": [0, 0, 1]},
            "models": [{"geometry": {"type": "mesh", "vertices": [[0, 0, 0]], "triangles": [[0, 0, 3]]}}]
        }"#;

        match Scene::from_json(json) {
            Err(SceneError::Geometry(GeometryError::IndexOutOfBounds { index: 3, len: 1 })) => {}
            other => panic!("unexpected result: {:?}", other.map(|s| s.objects.len())),
        }
    }

    #[test]
    fn invalid_color_is_reported() {
        let json = r##"{
            "camera": {"h_res": 1, "v_res": 1, "pixel_size": 1, "focal_distance": 1, "eye": [0, 0, 0], "look_at": [0, 0, 1]},
            "background_color": "#XYZ"
        }"##;

        assert!(matches!(Scene::from_json(json), Err(SceneError::Color(_))));
    }

    #[test]
    fn camera_without_a_view_direction_is_rejected() {
        let json = r#"{
            "camera": {"h_res": 2, "v_res": 2, "pixel_size": 0.5, "focal_distance": 1, "eye": [0, 0, 0], "look_at": [0, 0, 0]},
            "models": [{"geometry": {"type": "sphere", "center": [0, 0, 5], "radius": 1}}]
        }"#;

        assert!(matches!(
            Scene::from_json(json),
            Err(SceneError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn camera_looking_along_up_is_rejected() {
        let json = r#"{
            "camera": {"h_res": 2, "v_res": 2, "pixel_size": 0.5, "focal_distance": 1, "eye": [0, 0, 0], "look_at": [0, 5, 0], "up": [0, 1, 0]}
        }"#;

        assert!(matches!(
            Scene::from_json(json),
            Err(SceneError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn matrix_transforms_accept_3x3_and_4x4() {
        let json = r#"{
            "camera": {"h_res": 1, "v_res": 1, "pixel_size": 1, "focal_distance": 1, "eye": [0, 0, 0], "look_at": [0, 0, 1]},
            "models": [
                {
                    "geometry": {"type": "sphere", "center": [1, 2, 3], "radius": 1},
                    "transform": [{"matrix": [[0, -1, 0], [1, 0, 0], [0, 0, 1]]}]
                },
                {
                    "geometry": {"type": "sphere", "center": [1, 2, 3], "radius": 1},
                    "transform": [{"matrix": [[1, 0, 0, 10], [0, 1, 0, 0], [0, 0, 1, -1], [0, 0, 0, 1]]}]
                }
            ]
        }"#;

        let scene = Scene::from_json(json).unwrap();
        let centers: Vec<Point> = scene
            .objects
            .iter()
            .map(|model| match &model.geometry {
                Shape::Sphere(sphere) => sphere.center(),
                other => panic!("unexpected shape: {:?}", other),
            })
            .collect();

        assert_eq!(vec![Vec3::new(-2.0, 1.0, 3.0), Vec3::new(11.0, 2.0, 2.0)], centers);
    }
}
