use anyhow::{Context, Result};
use tracer::{
    camera::CameraDescription,
    renderer::Renderer,
    scene::{description::SceneDescription, Scene},
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    output::{FileOutput, FinalOutput},
    progress::Progress,
    utils::{Dimensions, ExecutionMode},
    Args,
};

pub struct Cli {
    pub renderer: Renderer,
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub execution_mode: ExecutionMode,
    pub show_progress: bool,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        if let Some(threads) = args.threads {
            log::info!("Working on {threads} threads");
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Could not build the thread pool")?;
        }

        let (scene, camera): (Scene, CameraDescription) = match args.scene_file {
            Some(ref path) => {
                log::info!("Loading scene from {}", path.display());
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                let description = SceneDescription::from_toml_str(&content)
                    .with_context(|| format!("Could not parse {}", path.display()))?;
                (description.build_scene()?, description.camera)
            }
            None => {
                log::info!("Loading {:?} scene", args.scene);
                (args.scene.try_into()?, CameraDescription::default())
            }
        };

        let Dimensions { width, height } = args.dimensions;
        let camera = camera
            .build(width, height)?
            .with_culling(args.cull_behind_eye);

        Ok(Self {
            renderer: Renderer {
                camera,
                scene,
                shader: args.shader.into(),
            },
            final_outputs: vec![Box::new(FileOutput::new(args.output))],
            execution_mode: args.execution_mode,
            show_progress: !args.no_progress,
        })
    }

    pub fn run(self) -> Result<()> {
        let progress = Progress::new(self.renderer.camera.height as usize);
        let on_row_rendered = |_row: u32| {
            progress.add(1);
            if self.show_progress {
                progress.print();
            }
        };

        let image = timed_scope_log("Render", || match self.execution_mode {
            ExecutionMode::Monothreaded => self.renderer.run_monothreaded(on_row_rendered),
            ExecutionMode::Multithreaded => self.renderer.run_multithreaded(on_row_rendered),
        })
        .res;
        if self.show_progress {
            println!();
        }
        let image = image?;

        for final_output in &self.final_outputs {
            final_output.commit(&image)?;
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
