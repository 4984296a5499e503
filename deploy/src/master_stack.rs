use synth::{Stack, StackProps, SynthResult, Template};

/// Name under which the master stack is registered.
pub const STACK_NAME: &str = "AudioVideoEmbeddingsMasterStack";

/// Description attached to the master stack and its template.
pub const STACK_DESCRIPTION: &str =
    "Master stack that orchestrates the deployment of all audio/video processing stacks";

/// The master orchestration stack.
///
/// Synthesizes to a template carrying the stack description and no
/// resources of its own.
pub struct MasterStack {
    name: String,
    props: StackProps,
}

impl MasterStack {
    pub fn new(name: impl Into<String>, props: StackProps) -> Self {
        Self {
            name: name.into(),
            props,
        }
    }
}

impl Stack for MasterStack {
    fn name(&self) -> &str {
        &self.name
    }

    fn props(&self) -> &StackProps {
        &self.props
    }

    fn synthesize(&self) -> SynthResult<Template> {
        let mut template = Template::new();
        template.description = self.props.description.clone();
        Ok(template)
    }
}
