use crate::env::Environment;
use crate::template::Template;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Stack {name} is already registered")]
    DuplicateStack { name: String },

    #[error("Stack {name} failed to synthesize: {reason}")]
    StackFailed { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SynthResult<T> = Result<T, SynthError>;

/// Construction-time properties of a stack: the target environment and a
/// human-readable description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackProps {
    pub env: Environment,
    pub description: Option<String>,
}

impl StackProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named, described unit of deployable infrastructure.
///
/// Implementations are registered on an [`App`](crate::app::App) and later
/// converted into a deployment template during the synthesis pass. The app
/// never inspects a stack beyond this trait.
pub trait Stack {
    /// Unique name of the stack within its app.
    fn name(&self) -> &str;

    /// Environment and description the stack was constructed with.
    fn props(&self) -> &StackProps;

    /// Produce the deployment template for this stack.
    fn synthesize(&self) -> SynthResult<Template>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullStack {
        name: String,
        props: StackProps,
    }

    impl Stack for NullStack {
        fn name(&self) -> &str {
            &self.name
        }

        fn props(&self) -> &StackProps {
            &self.props
        }

        fn synthesize(&self) -> SynthResult<Template> {
            Ok(Template::new())
        }
    }

    #[test]
    fn test_stack_props_builder() {
        let props = StackProps::new()
            .with_env(Environment::new().with_region("us-east-1"))
            .with_description("A test stack");
        assert_eq!(props.env.region.as_deref(), Some("us-east-1"));
        assert_eq!(props.description.as_deref(), Some("A test stack"));
    }

    #[test]
    fn test_stack_trait_object() {
        let stack: Box<dyn Stack> = Box::new(NullStack {
            name: "Null".to_string(),
            props: StackProps::new(),
        });
        assert_eq!(stack.name(), "Null");
        assert!(stack.synthesize().is_ok());
    }

    #[test]
    fn test_duplicate_stack_error_message() {
        let err = SynthError::DuplicateStack {
            name: "Master".to_string(),
        };
        assert_eq!(err.to_string(), "Stack Master is already registered");
    }
}
