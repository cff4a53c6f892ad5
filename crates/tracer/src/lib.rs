//! A single-bounce ray tracer for scenes made of spheres.
//!
//! One primary ray is cast per pixel by the [camera::Camera], the nearest hit in the
//! [scene::Scene] is found, and a [shader::Shader] evaluates the local illumination
//! at that point. [renderer::Renderer] drives the whole pipeline.

pub mod aggregate;
pub mod camera;
pub mod color;
pub mod error;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod shape;
pub mod utils;
