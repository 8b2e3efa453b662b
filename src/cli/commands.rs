use crate::descriptor::{load_descriptors, FunctionDescriptor};
use crate::synth::{partition, synthesize, SynthOptions};
use crate::template::EndpointTemplate;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for autoroute
///
/// Provides commands for synthesizing endpoint templates from descriptor
/// files and inspecting how signatures partition.
#[derive(Parser)]
#[command(name = "autoroute-gen")]
#[command(about = "autoroute CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for autoroute
#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize endpoint templates from a descriptor file
    Synthesize {
        /// Path to the descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptors: PathBuf,

        /// Root directory source paths are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Prefix substituted when a source is not under the root
        #[arg(long)]
        fallback_prefix: Option<String>,

        /// Print templates exactly as synthesized, skipping URL hygiene
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Show the required/optional/hidden partition per function.
    /// Also validates type tags: an unmapped tag fails the command, the same
    /// way it would fail synthesis.
    Inspect {
        /// Path to the descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptors: PathBuf,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Synthesize {
            descriptors,
            root,
            fallback_prefix,
            raw,
        } => {
            let synthesized = synthesize_file(
                descriptors,
                root.as_deref(),
                fallback_prefix.as_deref(),
            )?;
            for (name, templates) in &synthesized {
                for template in templates {
                    if *raw {
                        println!("{name} {template}");
                    } else {
                        println!("{name} {}", template.normalized());
                    }
                }
            }
            Ok(())
        }
        Commands::Inspect { descriptors } => {
            for summary in inspect_file(descriptors)? {
                println!(
                    "{}: required={:?} optional={:?} hidden={:?}",
                    summary.name, summary.required, summary.optional, summary.hidden
                );
            }
            Ok(())
        }
    }
}

/// Partition counts and names for one function, as shown by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub name: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub hidden: Vec<String>,
}

/// Load a descriptor file and synthesize templates for every function in it.
pub fn synthesize_file(
    descriptors: &Path,
    root: Option<&Path>,
    fallback_prefix: Option<&str>,
) -> anyhow::Result<Vec<(String, Vec<EndpointTemplate>)>> {
    let funcs = load_descriptors(descriptors)?;
    let options = SynthOptions {
        explicit_name: None,
        fallback_prefix: fallback_prefix.map(str::to_string),
    };
    funcs
        .iter()
        .map(|desc| {
            let templates = synthesize(desc, root, &options)
                .with_context(|| format!("failed to synthesize endpoints for '{}'", desc.name))?;
            Ok((desc.name.clone(), templates))
        })
        .collect()
}

/// Load a descriptor file and report each function's parameter partition.
///
/// Partitioning renders placeholder segments, so this validates every type
/// tag as a side effect: a descriptor that would fail synthesis fails here
/// too, before any URL is built.
pub fn inspect_file(descriptors: &Path) -> anyhow::Result<Vec<PartitionSummary>> {
    let funcs = load_descriptors(descriptors)?;
    funcs.iter().map(summarize).collect()
}

fn summarize(desc: &FunctionDescriptor) -> anyhow::Result<PartitionSummary> {
    let parts = partition(desc)
        .with_context(|| format!("failed to partition parameters of '{}'", desc.name))?;
    Ok(PartitionSummary {
        name: desc.name.clone(),
        required: parts.required.into_iter().map(|p| p.name).collect(),
        optional: parts.optional.into_iter().map(|p| p.name).collect(),
        hidden: parts.hidden,
    })
}
