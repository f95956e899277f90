//! Recursive Whitted-style tracing: local shading plus mirror and refracted rays.

use std::time::Instant;

use rand::Rng;

use crate::color::Color;
use crate::material::Material;
use crate::raster::Image;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::{Point, Vec3};

/// Distance under which hits are ignored, so secondary rays do not hit the
/// surface they leave from. Also the parallelism tolerance of the primitives.
pub const DEFAULT_EPSILON: f64 = 0.001;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderEngine {
    pub epsilon: f64,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Renders with the default engine. `anti_aliasing_samples = 0` takes a single
/// unjittered sample per pixel.
pub fn render(scene: &Scene, anti_aliasing_samples: u32) -> Image {
    RenderEngine::default().render(scene, anti_aliasing_samples)
}

impl RenderEngine {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn render(&self, scene: &Scene, anti_aliasing_samples: u32) -> Image {
        self.render_with_rng(scene, anti_aliasing_samples, &mut rand::thread_rng())
    }

    /// Same as [`RenderEngine::render`], jittering samples with the given generator.
    pub fn render_with_rng<R: Rng + ?Sized>(&self, scene: &Scene, anti_aliasing_samples: u32, rng: &mut R) -> Image {
        let camera = &scene.camera;
        let (width, height) = (camera.h_res, camera.v_res);
        let basis = camera.basis();
        let plane_origin = camera.plane_origin(&basis);

        log::info!(
            "rendering {}x{} with {} objects, {} lights, {} samples per pixel",
            width,
            height,
            scene.objects.len(),
            scene.lights.len(),
            anti_aliasing_samples.max(1)
        );
        let now = Instant::now();

        let mut image = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let color = if anti_aliasing_samples == 0 {
                    let ray = camera.primary_ray(&basis, plane_origin, f64::from(x), f64::from(y), self.epsilon);
                    self.trace(scene, &ray, 0)
                } else {
                    let mut sum = Color::BLACK;
                    for _ in 0..anti_aliasing_samples {
                        let sx = f64::from(x) + rng.gen::<f64>();
                        let sy = f64::from(y) + rng.gen::<f64>();
                        let ray = camera.primary_ray(&basis, plane_origin, sx, sy, self.epsilon);
                        sum += self.trace(scene, &ray, 0);
                    }
                    sum / f64::from(anti_aliasing_samples)
                };

                image.set_pixel(x, y, color);
            }

            log::debug!("{:.2}%", f64::from(y + 1) / f64::from(height) * 100.0);
        }

        log::info!("finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

        image
    }

    /// Color seen along `ray`. Secondary rays are spawned only while
    /// `depth < scene.max_depth`, so a primary ray (depth 0) nests at most
    /// `max_depth + 1` calls.
    pub fn trace(&self, scene: &Scene, ray: &Ray, depth: u32) -> Color {
        let (model, hit) = match scene.find_nearest(ray) {
            Some(nearest) => nearest,
            None => return scene.background_color,
        };
        let material: &Material = &model.material;

        let mut color = self.shade(scene, material, hit.point, hit.normal);

        if depth < scene.max_depth {
            let direction = *ray.direction();

            if material.reflection > 0.0 {
                let normal = if hit.normal.dot(&-direction) < 0.0 {
                    -hit.normal
                } else {
                    hit.normal
                };

                let reflected = self.reflected_ray(hit.point, direction, normal);
                color += self.trace(scene, &reflected, depth + 1).scale(material.reflection);
            }

            if material.transmission > 0.0 {
                let refracted = self.refracted_ray(hit.point, direction, hit.normal, material.index_of_refraction);
                color += self.trace(scene, &refracted, depth + 1).scale(material.transmission);
            }
        }

        color
    }

    /// Ambient + Lambertian diffuse + Phong specular at a hit point. Lights
    /// blocked by any object closer than the light contribute nothing.
    pub fn shade(&self, scene: &Scene, material: &Material, point: Point, normal: Vec3<f64>) -> Color {
        let base = material.color_at(&point);
        let to_camera = (scene.camera.eye - point).unit();

        let mut color = base.hadamard(&scene.ambient_color).scale(material.ambient);

        for light in &scene.lights {
            let to_light = light.position - point;
            let probe = Ray::new(point, to_light, self.epsilon..f64::INFINITY);

            if let Some((_, blocker)) = scene.find_nearest(&probe) {
                if blocker.t > 0.0 && blocker.t < to_light.len() {
                    continue;
                }
            }

            let l = *probe.direction();
            let n_dot_l = normal.dot(&l);

            color += base.hadamard(&light.color).scale(material.diffuse * n_dot_l.max(0.0));

            // Light direction mirrored about the normal (Phong, not Blinn-Phong).
            let mirrored = normal.scale(2.0 * n_dot_l) - l;
            let highlight = mirrored.dot(&to_camera).max(0.0).powf(material.phong_exponent);
            color += light.color.scale(material.specular * highlight);
        }

        color
    }

    /// Mirror ray off a surface whose `normal` faces the incoming `direction`.
    pub(crate) fn reflected_ray(&self, point: Point, direction: Vec3<f64>, normal: Vec3<f64>) -> Ray {
        let reflected = direction - normal.scale(2.0 * direction.dot(&normal));

        Ray::new(point + normal.scale(self.epsilon), reflected, self.epsilon..f64::INFINITY)
    }

    /// Snell refraction through a surface with outward `normal`.
    ///
    /// On total internal reflection this returns the mirror ray instead; the
    /// caller still weights it by the transmission coefficient.
    pub(crate) fn refracted_ray(&self, point: Point, direction: Vec3<f64>, normal: Vec3<f64>, index_of_refraction: f64) -> Ray {
        let omega = -direction;

        let (normal, eta) = if normal.dot(&omega) < 0.0 {
            (-normal, 1.0 / index_of_refraction)
        } else {
            (normal, index_of_refraction)
        };

        let cos = normal.dot(&omega);
        let ratio = 1.0 / eta;
        let delta = 1.0 - ratio * ratio * (1.0 - cos * cos);

        if delta < 0.0 {
            return self.reflected_ray(point, direction, normal);
        }

        let refracted = -omega.scale(ratio) - normal.scale(delta.sqrt() - ratio * cos);

        Ray::new(point - normal.scale(self.epsilon), refracted, self.epsilon..f64::INFINITY)
    }
}
