mod output;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::process::ExitCode;
use targetdecl_manifest::{MANIFEST_FILE_NAME, discover_manifest, load_manifest};
use targetdecl_registry::TargetRegistry;
use targetdecl_types::wire::{SeedV1, record_fingerprint};
use targetdecl_types::{DependencySeed, InvocationContext};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "targetdecl",
    version,
    about = "Inspect and validate declarative build-target manifests."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the targets a manifest declares.
    List(ListArgs),
    /// Show one target's declaration in full.
    Describe(DescribeArgs),
    /// Construct every declared target and report configuration errors.
    Validate(ValidateArgs),
    /// Print the dependency seed for one target and invocation.
    Seed(SeedArgs),
}

#[derive(Debug, Parser)]
struct ManifestArgs {
    /// Project root to search for targets.toml (default: current directory).
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Explicit manifest path (overrides discovery).
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListArgs {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: output::OutputFormat,
}

#[derive(Debug, Parser)]
struct DescribeArgs {
    /// Target name to describe.
    target: String,

    #[command(flatten)]
    manifest: ManifestArgs,
}

#[derive(Debug, Parser)]
struct ValidateArgs {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Platform identifier for the invocation context.
    #[arg(long, default_value = "host")]
    platform: String,

    /// Requested build configuration.
    #[arg(long, default_value = "development")]
    configuration: String,
}

#[derive(Debug, Parser)]
struct SeedArgs {
    /// Target name to seed.
    target: String,

    #[command(flatten)]
    manifest: ManifestArgs,

    /// Platform identifier for the invocation context.
    #[arg(long)]
    platform: String,

    /// Requested build configuration.
    #[arg(long)]
    configuration: String,

    /// Extra context parameters as key=value (repeatable).
    #[arg(long = "param")]
    params: Vec<String>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: output::OutputFormat,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Describe(args) => cmd_describe(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Seed(args) => cmd_seed(args),
    }
}

fn load_registry(args: &ManifestArgs) -> anyhow::Result<TargetRegistry> {
    let path = match &args.manifest {
        Some(path) => path.clone(),
        None => discover_manifest(&args.project_root).with_context(|| {
            format!("no {} found under {}", MANIFEST_FILE_NAME, args.project_root)
        })?,
    };
    debug!(path = %path, "loading manifest");

    let manifest = load_manifest(&path).with_context(|| format!("load manifest {}", path))?;
    manifest
        .into_registry()
        .with_context(|| format!("register targets from {}", path))
}

fn invocation_context(
    platform: &str,
    configuration: &str,
    raw_params: &[String],
) -> anyhow::Result<InvocationContext> {
    let mut params = BTreeMap::new();
    for raw in raw_params {
        let (key, value) = raw
            .split_once('=')
            .with_context(|| format!("malformed --param `{}` (expected key=value)", raw))?;
        params.insert(key.to_string(), value.to_string());
    }
    let mut ctx = InvocationContext::new(platform, configuration);
    ctx.params = params;
    Ok(ctx)
}

fn cmd_list(args: ListArgs) -> anyhow::Result<ExitCode> {
    let registry = load_registry(&args.manifest)?;
    output::print_target_list(&registry, args.format)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<ExitCode> {
    let registry = load_registry(&args.manifest)?;
    let Some(def) = registry.get(&args.target) else {
        anyhow::bail!("unknown target `{}`", args.target);
    };
    output::print_definition(def);
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let registry = load_registry(&args.manifest)?;
    let ctx = invocation_context(&args.platform, &args.configuration, &[])?;

    let mut failures = 0usize;
    for name in registry.names() {
        match registry.construct(name, &ctx) {
            Ok(record) => {
                let fingerprint = record_fingerprint(&record);
                println!(
                    "ok    {} ({}, settings {}) {}",
                    name,
                    record.category(),
                    record.settings_version(),
                    &fingerprint[..12]
                );
            }
            Err(err) => {
                failures += 1;
                println!("error {}", err);
            }
        }
    }

    if failures > 0 {
        println!("{} of {} targets failed validation", failures, registry.len());
        return Ok(ExitCode::from(2));
    }
    println!("{} targets valid", registry.len());
    Ok(ExitCode::SUCCESS)
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<ExitCode> {
    let registry = load_registry(&args.manifest)?;
    let ctx = invocation_context(&args.platform, &args.configuration, &args.params)?;

    let record = match registry.construct(&args.target, &ctx) {
        Ok(record) => record,
        Err(targetdecl_registry::RegistryError::Config(err)) => {
            println!("error {}", err);
            return Ok(ExitCode::from(2));
        }
        Err(err) => return Err(err.into()),
    };

    let seed = DependencySeed::for_record(&record);
    let wire = SeedV1::new(&seed, &ctx);
    output::print_seed(&wire, args.format)?;
    Ok(ExitCode::SUCCESS)
}
