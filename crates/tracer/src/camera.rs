use serde::Deserialize;

use crate::{
    error::{RayError, SceneError},
    math::{
        float::FloatAsExt,
        vec::{Vec3, Vec3AsNonZero, Vec3FromArrayExt},
    },
    ray::Ray,
};

/// Smallest `t` accepted when intersections behind the eye are culled
pub const CULLING_EPSILON: f64 = 1e-9;

/// Bounds of the image plane, in the (U, V) coordinates of the camera basis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewPlane {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl ViewPlane {
    /// A plane of height 2 centered on the view direction, keeping square pixels
    pub fn symmetric(width: u32, height: u32) -> Self {
        let aspect_ratio = width as f64 / height as f64;
        Self {
            left: -aspect_ratio,
            right: aspect_ratio,
            bottom: -1.0,
            top: 1.0,
        }
    }

    fn validate(&self) -> Result<(), SceneError> {
        let bounds = [self.left, self.right, self.bottom, self.top];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(SceneError::InvalidViewPlane {
                reason: "bounds must be finite",
            });
        }
        if self.left >= self.right {
            return Err(SceneError::InvalidViewPlane {
                reason: "left must be lower than right",
            });
        }
        if self.bottom >= self.top {
            return Err(SceneError::InvalidViewPlane {
                reason: "bottom must be lower than top",
            });
        }
        Ok(())
    }
}

/// Orthonormal camera frame: `u` points right, `v` up and `w` back, away from the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Basis {
    /// Right handed frame looking along `direction`, with `v` as close to `up` as possible
    pub fn look_along(direction: Vec3, up: Vec3) -> Result<Self, SceneError> {
        let degenerate = || SceneError::DegenerateCamera { direction, up };

        let w = -direction.into_non_zero(1e-12).ok_or_else(degenerate)?.normalize();
        let u = up.cross(w).into_non_zero(1e-12).ok_or_else(degenerate)?.normalize();
        let v = w.cross(u);

        Ok(Self { u, v, w })
    }
}

/// A pinhole camera mapping pixels to viewing rays.
#[derive(Debug, Clone)]
pub struct Camera {
    /// width of the image, in pixel
    pub width: u32,
    /// height of the image, in pixel
    pub height: u32,

    pub view_plane: ViewPlane,
    /// distance between the eye and the image plane, in world unit
    pub distance: f64,
    pub basis: Basis,
    pub eye: Vec3,

    /// Reject intersections behind the eye
    pub cull_behind_eye: bool,
}

impl Camera {
    pub fn new(
        width: u32,
        height: u32,
        view_plane: ViewPlane,
        distance: f64,
        eye: Vec3,
        basis: Basis,
    ) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyImage { width, height });
        }
        view_plane.validate()?;
        let distance = distance
            .into_positive()
            .ok_or(SceneError::InvalidViewPlane {
                reason: "distance to the image plane must be positive",
            })?;

        Ok(Self {
            width,
            height,
            view_plane,
            distance,
            basis,
            eye,
            cull_behind_eye: false,
        })
    }

    pub fn with_culling(self, cull_behind_eye: bool) -> Self {
        Self {
            cull_behind_eye,
            ..self
        }
    }

    /// Ray from the eye through the center of pixel `(i, j)`.
    ///
    /// `i` is the column, from the left, and `j` is the row, counted from the bottom of the view plane.
    pub fn viewing_ray(&self, i: u32, j: u32) -> Result<Ray, RayError> {
        self.check_bounds(i, j)?;
        let ViewportCoord { u, v } = ViewportCoord::from_pixel_coord(self, PixelCoord { i, j });
        let Basis {
            u: u_axis,
            v: v_axis,
            w: w_axis,
        } = self.basis;

        let direction = u * u_axis + v * v_axis - self.distance * w_axis;
        if self.cull_behind_eye {
            Ray::new_with_range(self.eye, direction, CULLING_EPSILON..=f64::INFINITY)
        } else {
            Ray::new(self.eye, direction)
        }
    }

    /// Same as [Camera::viewing_ray] for raster coordinates, where row 0 is the top of the image
    pub fn raster_ray(&self, x: u32, y: u32) -> Result<Ray, RayError> {
        self.check_bounds(x, y)?;
        self.viewing_ray(x, self.height - 1 - y)
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), RayError> {
        if x >= self.width || y >= self.height {
            return Err(RayError::OutOfImage {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// A pixel, `i` is the column and `j` the row counted from the bottom.
#[derive(Debug, Clone, Copy)]
pub struct PixelCoord {
    pub i: u32,
    pub j: u32,
}

/// Position of a pixel center on the view plane.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub u: f64,
    pub v: f64,
}

impl ViewportCoord {
    // Sample the center of the pixel
    pub fn from_pixel_coord(camera: &Camera, coord: PixelCoord) -> Self {
        let ViewPlane {
            left,
            right,
            bottom,
            top,
        } = camera.view_plane;
        Self {
            u: left + (right - left) * (coord.i as f64 + 0.5) / camera.width as f64,
            v: bottom + (top - bottom) * (coord.j as f64 + 0.5) / camera.height as f64,
        }
    }
}

/// Camera as written in a scene description.
///
/// Defaults to an eye at the origin looking along +Z, with +Y up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraDescription {
    pub eye: [f64; 3],
    pub direction: [f64; 3],
    pub up: [f64; 3],
    pub distance: f64,
    /// When absent, see [ViewPlane::symmetric]
    pub view_plane: Option<ViewPlane>,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 0.0],
            direction: [0.0, 0.0, 1.0],
            up: [0.0, 1.0, 0.0],
            distance: 1.0,
            view_plane: None,
        }
    }
}

impl CameraDescription {
    pub fn build(&self, width: u32, height: u32) -> Result<Camera, SceneError> {
        let basis = Basis::look_along(
            Vec3::from_f64_array(self.direction),
            Vec3::from_f64_array(self.up),
        )?;
        let view_plane = self
            .view_plane
            .unwrap_or_else(|| ViewPlane::symmetric(width, height));

        Camera::new(
            width,
            height,
            view_plane,
            self.distance,
            Vec3::from_f64_array(self.eye),
            basis,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{RayError, SceneError},
        math::vec::Vec3,
    };

    use super::{Basis, CameraDescription, ViewPlane};

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-12, "{a} != {b}");
    }

    #[test]
    fn basis_is_orthonormal() {
        let basis = Basis::look_along(Vec3::new(1.0, -2.0, 3.0), Vec3::Y).unwrap();
        for axis in [basis.u, basis.v, basis.w] {
            assert!((axis.length() - 1.0).abs() < 1e-12);
        }
        assert!(basis.u.dot(basis.v).abs() < 1e-12);
        assert!(basis.v.dot(basis.w).abs() < 1e-12);
        assert!(basis.w.dot(basis.u).abs() < 1e-12);
        assert_close(basis.u.cross(basis.v), basis.w);
    }

    #[test]
    fn default_camera_looks_along_z() {
        let basis = Basis::look_along(Vec3::Z, Vec3::Y).unwrap();
        assert_close(basis.w, Vec3::NEG_Z);
        assert_close(basis.v, Vec3::Y);
        assert_close(basis.u, Vec3::NEG_X);
    }

    #[test]
    fn degenerate_basis() {
        assert!(matches!(
            Basis::look_along(Vec3::ZERO, Vec3::Y),
            Err(SceneError::DegenerateCamera { .. })
        ));
        assert!(matches!(
            Basis::look_along(Vec3::Y, 2.0 * Vec3::Y),
            Err(SceneError::DegenerateCamera { .. })
        ));
    }

    #[test]
    fn viewing_rays_sample_pixel_centers() {
        let camera = CameraDescription {
            view_plane: Some(ViewPlane {
                left: -2.0,
                right: 2.0,
                bottom: -1.0,
                top: 1.0,
            }),
            ..Default::default()
        }
        .build(4, 2)
        .unwrap();

        // u = -2 + 4 * 0.5 / 4, v = -1 + 2 * 0.5 / 2, basis u is -X
        let ray = camera.viewing_ray(0, 0).unwrap();
        assert_close(ray.origin(), Vec3::ZERO);
        assert_close(ray.direction(), Vec3::new(1.5, -0.5, 1.0));

        let ray = camera.viewing_ray(3, 1).unwrap();
        assert_close(ray.direction(), Vec3::new(-1.5, 0.5, 1.0));

        // raster row 0 is the top row
        let ray = camera.raster_ray(3, 0).unwrap();
        assert_close(ray.direction(), Vec3::new(-1.5, 0.5, 1.0));
    }

    #[test]
    fn pixels_outside_of_the_image() {
        let camera = CameraDescription::default().build(4, 2).unwrap();
        assert!(camera.raster_ray(3, 1).is_ok());
        assert_eq!(
            camera.raster_ray(0, 2).unwrap_err(),
            RayError::OutOfImage {
                x: 0,
                y: 2,
                width: 4,
                height: 2
            }
        );
        assert!(camera.raster_ray(4, 0).is_err());
        assert!(camera.raster_ray(0, u32::MAX).is_err());
        assert!(camera.viewing_ray(4, 1).is_err());
    }

    #[test]
    fn culling_sets_the_ray_range() {
        let camera = CameraDescription::default().build(3, 3).unwrap();
        assert!(camera.viewing_ray(1, 1).unwrap().range().contains(&-1.0));

        let camera = camera.with_culling(true);
        let range = camera.viewing_ray(1, 1).unwrap().range();
        assert!(!range.contains(&-1.0));
        assert!(!range.contains(&0.0));
        assert!(range.contains(&1e-6));
    }

    #[test]
    fn invalid_cameras() {
        let description = CameraDescription::default();
        assert!(matches!(
            description.build(0, 10),
            Err(SceneError::EmptyImage { .. })
        ));

        let flat = CameraDescription {
            view_plane: Some(ViewPlane {
                left: 1.0,
                right: 1.0,
                bottom: -1.0,
                top: 1.0,
            }),
            ..Default::default()
        };
        assert!(matches!(
            flat.build(10, 10),
            Err(SceneError::InvalidViewPlane { .. })
        ));

        let behind = CameraDescription {
            distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            behind.build(10, 10),
            Err(SceneError::InvalidViewPlane { .. })
        ));
    }
}
