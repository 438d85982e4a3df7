use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CoinscanError, Result};

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving one PNG per stage
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// Save `image` as `<output_dir>/<NN>_<stage>.png`.
    fn save(&self, index: usize, stage: &str, image: &DynamicImage) -> Result<PathBuf> {
        let filename = format!("{:02}_{}.png", index, stage.to_lowercase().replace(' ', "_"));
        let path = self.output_dir.join(filename);
        image.save(&path)?;
        Ok(path)
    }
}

/// Context available to all pipeline steps
#[derive(Clone, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// A single image-to-image stage
pub trait PipelineStep {
    fn process(&self, image: DynamicImage) -> Result<DynamicImage>;

    /// Human-readable name, used in logs and debug file names
    fn name(&self) -> &str;
}

/// Composable sequence of stages
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    pub fn with_context(mut self, context: PipelineContext) -> Self {
        self.context = context;
        self
    }

    pub fn add_step(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order on `input`
    pub fn run(&self, input: DynamicImage) -> Result<DynamicImage> {
        if let Some(debug_config) = &self.context.debug {
            let path = debug_config.save(0, "input", &input)?;
            debug!("saved {}", path.display());
        }

        let mut image = input;

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                info!("running step {}: {}", step_idx + 1, step.name());
            } else {
                debug!("running step {}: {}", step_idx + 1, step.name());
            }

            image = step.process(image)?;

            if let Some(debug_config) = &self.context.debug {
                let path = debug_config.save(step_idx + 1, step.name(), &image)?;
                debug!("saved {}", path.display());
            }
        }

        Ok(image)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Create `output_dir` if needed and refuse one that already holds files.
pub fn prepare_debug_dir(output_dir: PathBuf) -> Result<DebugConfig> {
    if output_dir.exists() {
        if !is_empty_dir(&output_dir)? {
            return Err(CoinscanError::DebugDirNotEmpty { path: output_dir });
        }
    } else {
        std::fs::create_dir_all(&output_dir)?;
    }
    Ok(DebugConfig { output_dir })
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(std::fs::read_dir(path)?.next().is_none())
}
