use clap::{Parser, Subcommand};
use deploy::build_app;
use std::path::PathBuf;
use synth::{Environment, DEFAULT_OUT_DIR};
use tracing::info;

#[derive(Parser)]
#[command(name = "deploy")]
#[command(about = "Synthesizes deployment templates for the audio/video embeddings stacks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the cloud assembly for all registered stacks
    Synth {
        /// Output directory for templates and the manifest
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
        /// Override the target account (defaults to CDK_DEFAULT_ACCOUNT)
        #[arg(long)]
        account: Option<String>,
        /// Override the target region (defaults to CDK_DEFAULT_REGION)
        #[arg(long)]
        region: Option<String>,
    },
    /// List the stacks that would be synthesized
    Ls,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Process environment is read exactly once, here.
    let env = Environment::from_process_env();

    match cli.command {
        Commands::Synth {
            out_dir,
            account,
            region,
        } => {
            let mut env = env;
            if let Some(account) = account {
                env = env.with_account(account);
            }
            if let Some(region) = region {
                env = env.with_region(region);
            }
            synthesize(env, out_dir)?;
        }
        Commands::Ls => {
            list_stacks(env)?;
        }
    }

    Ok(())
}

fn synthesize(env: Environment, out_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    info!(env = %env, "Building application context");

    let app = build_app(env, out_dir)?;
    let assembly = app.synth()?;

    println!("Wrote assembly to {}", assembly.directory.display());
    for artifact in &assembly.stacks {
        println!(
            "  - {} ({}): {}",
            artifact.stack_name,
            artifact.env,
            artifact.template_file.display()
        );
    }

    Ok(())
}

fn list_stacks(env: Environment) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(env, DEFAULT_OUT_DIR)?;
    for name in app.stack_names() {
        println!("{name}");
    }
    Ok(())
}
