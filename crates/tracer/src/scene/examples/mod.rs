mod debug;
mod spheres;

pub use debug::DebugScene;
pub use spheres::SpheresScene;
