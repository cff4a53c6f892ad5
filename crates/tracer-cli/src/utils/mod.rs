use core::fmt::Display;

use clap::ValueEnum;
use tracer::{
    error::SceneError,
    scene::{
        examples::{DebugScene, SpheresScene},
        Scene,
    },
    shader::{BlinnPhong, Flat, Normals, Shader},
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    /// A single red sphere, lit from below
    Debug,
    #[default]
    Spheres,
}

impl TryFrom<AvailableScene> for Scene {
    type Error = SceneError;

    fn try_from(val: AvailableScene) -> Result<Self, Self::Error> {
        match val {
            AvailableScene::Debug => DebugScene.try_into(),
            AvailableScene::Spheres => SpheresScene.try_into(),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum AvailableShader {
    #[default]
    BlinnPhong,
    Flat,
    Normals,
}

impl From<AvailableShader> for Box<dyn Shader> {
    fn from(val: AvailableShader) -> Self {
        match val {
            AvailableShader::BlinnPhong => Box::new(BlinnPhong::default()),
            AvailableShader::Flat => Box::new(Flat),
            AvailableShader::Normals => Box::new(Normals),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExecutionMode {
    Monothreaded,
    #[default]
    Multithreaded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!("Dimensions must be non zero"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}
