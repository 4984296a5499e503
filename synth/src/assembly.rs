//! On-disk representation of a synthesis pass.
//!
//! A cloud assembly is a directory containing one pretty-printed JSON
//! template per stack plus a `manifest.json` that indexes the artifacts.

use crate::env::Environment;
use crate::stack::SynthResult;
use crate::template::Template;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Schema version written into every assembly manifest.
pub const ASSEMBLY_VERSION: &str = "1.0.0";

/// Artifact type tag for stack templates.
pub const STACK_ARTIFACT_TYPE: &str = "aws:cloudformation:stack";

/// File name of the assembly manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// The result of a synthesis pass: where it was written, and what.
#[derive(Debug, Clone)]
pub struct CloudAssembly {
    pub directory: PathBuf,
    pub stacks: Vec<StackArtifact>,
}

/// One synthesized stack template within an assembly.
#[derive(Debug, Clone)]
pub struct StackArtifact {
    pub stack_name: String,
    pub template_file: PathBuf,
    pub env: Environment,
}

/// Serialized index of an assembly directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyManifest {
    pub version: String,
    pub synthesized_at: DateTime<Utc>,
    pub artifacts: BTreeMap<String, ManifestArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestArtifact {
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub environment: String,
    pub properties: ManifestProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestProperties {
    #[serde(rename = "templateFile")]
    pub template_file: String,
}

/// Write synthesized templates and their manifest under `out_dir`.
///
/// The directory is created if absent. Existing files for the same stack
/// names are overwritten; unrelated files are left alone.
pub(crate) fn write_assembly(
    out_dir: &Path,
    stacks: Vec<(String, Environment, Template)>,
) -> SynthResult<CloudAssembly> {
    fs::create_dir_all(out_dir)?;

    let mut artifacts = BTreeMap::new();
    let mut written = Vec::with_capacity(stacks.len());

    for (stack_name, env, template) in stacks {
        let file_name = format!("{stack_name}.template.json");
        let template_file = out_dir.join(&file_name);
        let mut json = template.to_json_pretty()?;
        json.push('\n');
        fs::write(&template_file, json)?;

        artifacts.insert(
            stack_name.clone(),
            ManifestArtifact {
                artifact_type: STACK_ARTIFACT_TYPE.to_string(),
                environment: env.to_string(),
                properties: ManifestProperties {
                    template_file: file_name,
                },
            },
        );
        written.push(StackArtifact {
            stack_name,
            template_file,
            env,
        });
    }

    let manifest = AssemblyManifest {
        version: ASSEMBLY_VERSION.to_string(),
        synthesized_at: Utc::now(),
        artifacts,
    };
    let mut manifest_json = serde_json::to_string_pretty(&manifest)?;
    manifest_json.push('\n');
    fs::write(out_dir.join(MANIFEST_FILE), manifest_json)?;

    Ok(CloudAssembly {
        directory: out_dir.to_path_buf(),
        stacks: written,
    })
}

impl CloudAssembly {
    /// Load the manifest back from an assembly directory.
    pub fn read_manifest(directory: &Path) -> SynthResult<AssemblyManifest> {
        let raw = fs::read_to_string(directory.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&raw)?)
    }
}
