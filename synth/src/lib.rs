//! Orchestration framework for synthesizing deployment templates.
//!
//! An [`App`] collects named stacks, each scoped to an account/region
//! [`Environment`], and a single synthesis pass converts them into a
//! [`CloudAssembly`] on disk: one CloudFormation-shaped template per stack
//! plus a manifest describing the whole assembly.

pub mod app;
pub mod assembly;
pub mod env;
pub mod stack;
pub mod template;

pub use app::{App, DEFAULT_OUT_DIR};
pub use assembly::{AssemblyManifest, CloudAssembly, StackArtifact};
pub use env::{Environment, ACCOUNT_ENV_VAR, REGION_ENV_VAR};
pub use stack::{Stack, StackProps, SynthError, SynthResult};
pub use template::{Template, TEMPLATE_FORMAT_VERSION};

pub mod prelude {
    pub use crate::app::*;
    pub use crate::assembly::*;
    pub use crate::env::*;
    pub use crate::stack::*;
    pub use crate::template::*;
}
