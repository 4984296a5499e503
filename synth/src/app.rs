use crate::assembly::{self, CloudAssembly};
use crate::stack::{Stack, SynthError, SynthResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// Default output directory for synthesized assemblies.
pub const DEFAULT_OUT_DIR: &str = "cdk.out";

/// The top-level application context.
///
/// Stacks are registered once, in order, and converted into a
/// [`CloudAssembly`] by a single synthesis pass. `synth` takes the app by
/// value, so a second synthesis of the same context is a type error rather
/// than a runtime surprise.
pub struct App {
    out_dir: PathBuf,
    stacks: Vec<Box<dyn Stack>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            stacks: Vec::new(),
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Register a stack on this app.
    ///
    /// Stack names must be unique within an app; registering a second stack
    /// under an existing name fails with [`SynthError::DuplicateStack`].
    pub fn add_stack(&mut self, stack: Box<dyn Stack>) -> SynthResult<()> {
        if self.stacks.iter().any(|s| s.name() == stack.name()) {
            return Err(SynthError::DuplicateStack {
                name: stack.name().to_string(),
            });
        }
        debug!(stack = stack.name(), "Registered stack");
        self.stacks.push(stack);
        Ok(())
    }

    pub fn out_dir(&self) -> &PathBuf {
        &self.out_dir
    }

    pub fn stack_names(&self) -> Vec<&str> {
        self.stacks.iter().map(|s| s.name()).collect()
    }

    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Synthesize every registered stack and write the cloud assembly.
    ///
    /// All templates are produced in registration order before anything is
    /// written, so a failing stack leaves the output directory untouched.
    pub fn synth(self) -> SynthResult<CloudAssembly> {
        info!(
            out_dir = %self.out_dir.display(),
            stacks = self.stacks.len(),
            "Synthesizing cloud assembly"
        );

        let mut synthesized = Vec::with_capacity(self.stacks.len());
        for stack in &self.stacks {
            debug!(stack = stack.name(), "Synthesizing stack");
            let template = stack.synthesize()?;
            synthesized.push((
                stack.name().to_string(),
                stack.props().env.clone(),
                template,
            ));
        }

        let assembly = assembly::write_assembly(&self.out_dir, synthesized)?;
        info!(
            stacks = assembly.stacks.len(),
            "Cloud assembly written"
        );
        Ok(assembly)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
