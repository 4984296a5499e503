pub mod master_stack;

pub use master_stack::{MasterStack, STACK_DESCRIPTION, STACK_NAME};

use std::path::PathBuf;
use synth::{App, Environment, StackProps, SynthResult};

/// Build the application context with the master stack registered.
///
/// The environment is constructed by the caller at the outermost boundary
/// and threaded in; nothing below this reads process state.
pub fn build_app(env: Environment, out_dir: impl Into<PathBuf>) -> SynthResult<App> {
    let mut app = App::new().with_out_dir(out_dir);
    app.add_stack(Box::new(MasterStack::new(
        STACK_NAME,
        StackProps::new()
            .with_env(env)
            .with_description(STACK_DESCRIPTION),
    )))?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app_registers_exactly_one_stack() {
        let app = build_app(Environment::new(), "cdk.out").unwrap();
        assert_eq!(app.stack_count(), 1);
        assert_eq!(app.stack_names(), vec!["AudioVideoEmbeddingsMasterStack"]);
    }

    #[test]
    fn test_build_app_is_deterministic() {
        let env = Environment::new()
            .with_account("111122223333")
            .with_region("us-east-1");
        let a = build_app(env.clone(), "cdk.out").unwrap();
        let b = build_app(env, "cdk.out").unwrap();
        assert_eq!(a.stack_names(), b.stack_names());
    }
}
