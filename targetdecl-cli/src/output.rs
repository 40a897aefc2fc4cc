use targetdecl_registry::TargetRegistry;
use targetdecl_types::wire::SeedV1;
use targetdecl_types::TargetDefinition;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_target_list(
    registry: &TargetRegistry,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for def in registry.definitions() {
                let category = def
                    .category
                    .map(|c| c.as_str())
                    .unwrap_or("unset");
                let version = def
                    .settings_version
                    .map(|v| v.as_str())
                    .unwrap_or("unset");
                println!(
                    "{}  category={}  settings={}  extra_modules={}",
                    def.name,
                    category,
                    version,
                    def.extra_modules.len()
                );
            }
        }
        OutputFormat::Json => {
            let defs: Vec<&TargetDefinition> = registry.definitions().collect();
            println!("{}", serde_json::to_string_pretty(&defs)?);
        }
    }
    Ok(())
}

pub fn print_definition(def: &TargetDefinition) {
    println!("target: {}", def.name);
    match def.category {
        Some(category) => println!("category: {}", category),
        None => println!("category: unset"),
    }
    match def.settings_version {
        Some(version) => println!("settings_version: {}", version),
        None => println!("settings_version: unset"),
    }
    if def.extra_modules.is_empty() {
        println!("extra_modules: (none)");
    } else {
        println!("extra_modules:");
        for module in &def.extra_modules {
            println!("  - {}", module);
        }
    }
}

pub fn print_seed(wire: &SeedV1, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "seed for {} ({}/{})",
                wire.target, wire.platform, wire.configuration
            );
            for module in &wire.modules {
                println!("  {}", module);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(wire)?);
        }
    }
    Ok(())
}
