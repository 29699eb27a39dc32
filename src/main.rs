use anyhow::Context;
use clap::{Parser, Subcommand};
use quantity::config::{Config, DEFAULT_CONFIG_FILE};
use quantity::prefix::{self, Prefix, PrefixTable};
use quantity::quantity::{format_value, Quantity};
use quantity::temperature::{AbsoluteTemperature, TemperatureScale};
use quantity::unit::{self, BaseUnitRegistry, UnitKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quantity")]
#[command(about = "Metric prefix and physical quantity conversion tool", long_about = None)]
struct Cli {
    /// Configuration file (default: ./quantity.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered prefixes, largest first
    Prefixes,

    /// Look up a prefix by name, symbol or scale
    Resolve {
        /// Prefix token (e.g., "kilo", "k", "1e3")
        token: String,
    },

    /// Re-express a value from one prefix in another
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source prefix token
        from: String,

        /// Target prefix token
        to: String,
    },

    /// List the base units
    Units,

    /// Build a quantity over a base unit and print it
    Show {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Base unit key (e.g., "metre", "kilogram")
        unit: String,

        /// Prefix the value is given in (default: the unit's own anchor)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Additional prefixed view
        #[arg(long = "as")]
        view: Option<String>,
    },

    /// Print a temperature on every scale
    Temperature {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Scale the value is given in
        #[arg(short, long, default_value = "kelvin")]
        scale: String,
    },
}

#[derive(Serialize)]
struct ConvertReport {
    value: f64,
    from: Prefix,
    to: Prefix,
    result: f64,
}

#[derive(Serialize)]
struct UnitReport {
    key: &'static str,
    name: String,
    symbol: String,
    description: String,
    dimension: String,
    kind: UnitKind,
}

#[derive(Serialize)]
struct ViewReport {
    prefix: Prefix,
    value: f64,
    symbol: String,
}

#[derive(Serialize)]
struct ShowReport {
    unit: String,
    display: String,
    raw_value: f64,
    base_prefix: Prefix,
    view: Option<ViewReport>,
}

#[derive(Serialize)]
struct ScaleReport {
    scale: &'static str,
    symbol: &'static str,
    value: f64,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    config
        .apply_global()
        .context("Failed to apply configuration")?;
    let table = prefix::global::snapshot();

    match cli.command {
        Commands::Prefixes => list_prefixes(&table, cli.json),
        Commands::Resolve { token } => resolve_prefix(&table, &token, cli.json),
        Commands::Convert { value, from, to } => convert_value(&table, value, &from, &to, cli.json),
        Commands::Units => list_units(cli.json),
        Commands::Show {
            value,
            unit,
            prefix,
            view,
        } => {
            let view = config.view_prefix(view.as_deref());
            show_quantity(&table, value, &unit, prefix.as_deref(), view, cli.json)
        }
        Commands::Temperature { value, scale } => show_temperature(value, &scale, cli.json),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        log::debug!("Loading {}", default_path.display());
        Config::load_from_file(default_path)
            .with_context(|| format!("Failed to load config {}", default_path.display()))
    } else {
        Ok(Config::empty())
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list_prefixes(table: &PrefixTable, json: bool) -> anyhow::Result<()> {
    let prefixes = table.list();
    if json {
        return print_json(&prefixes);
    }

    println!("Prefixes ({}):", prefixes.len());
    for prefix in prefixes {
        println!("  {}", prefix);
    }
    Ok(())
}

fn resolve_prefix(table: &PrefixTable, token: &str, json: bool) -> anyhow::Result<()> {
    let prefix = table.resolve(token)?;
    if json {
        return print_json(&prefix);
    }
    println!("{}", prefix);
    Ok(())
}

fn convert_value(
    table: &PrefixTable,
    value: f64,
    from: &str,
    to: &str,
    json: bool,
) -> anyhow::Result<()> {
    let from = table.resolve(from)?;
    let to = table.resolve(to)?;
    let result = prefix::convert(value, &from, &to);

    if json {
        return print_json(&ConvertReport {
            value,
            from,
            to,
            result,
        });
    }
    println!("{} {} = {} {}", value, label(&from), result, label(&to));
    Ok(())
}

fn label(prefix: &Prefix) -> &str {
    if prefix.name().is_empty() {
        "(none)"
    } else {
        prefix.name()
    }
}

fn list_units(json: bool) -> anyhow::Result<()> {
    let entries = BaseUnitRegistry::entries();
    if json {
        let reports: Vec<UnitReport> = entries
            .iter()
            .map(|(key, unit)| UnitReport {
                key: *key,
                name: unit.name_with_prefix(unit.anchor()),
                symbol: unit.symbol_with_prefix(unit.anchor()),
                description: unit.description().to_string(),
                dimension: unit.dimension().to_string(),
                kind: unit.kind(),
            })
            .collect();
        return print_json(&reports);
    }

    println!("Base units ({}):", entries.len());
    for (key, unit) in &entries {
        println!(
            "  {:<10} {} ({})",
            key,
            unit.name_with_prefix(unit.anchor()),
            unit.symbol_with_prefix(unit.anchor())
        );
    }
    Ok(())
}

fn show_quantity(
    table: &PrefixTable,
    value: f64,
    unit_key: &str,
    prefix: Option<&str>,
    view: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let unit = unit::base_unit(unit_key)?;
    let prefix = prefix.map(|token| table.resolve(token)).transpose()?;
    let quantity = Quantity::with_prefixes(value, unit.clone(), unit.anchor().clone(), prefix)?;

    let view = match view {
        Some(token) => {
            let prefix = table.resolve(token)?;
            let value = quantity.value_as(prefix.clone())?;
            Some(ViewReport {
                symbol: unit.symbol_with_prefix(&prefix),
                prefix,
                value,
            })
        }
        None => None,
    };

    if json {
        return print_json(&ShowReport {
            unit: unit_key.to_string(),
            display: quantity.to_string(),
            raw_value: quantity.raw_value(),
            base_prefix: quantity.base_prefix().clone(),
            view,
        });
    }

    println!("{}", quantity);
    if let Some(view) = view {
        println!("= {} {}", format_value(view.value), view.symbol);
    }
    Ok(())
}

fn show_temperature(value: f64, scale: &str, json: bool) -> anyhow::Result<()> {
    let scale: TemperatureScale = scale.parse()?;
    let temperature = AbsoluteTemperature::from_scale(value, scale)?;

    let reports: Vec<ScaleReport> = TemperatureScale::ALL
        .iter()
        .map(|s| ScaleReport {
            scale: s.name(),
            symbol: s.symbol(),
            value: temperature.in_scale(*s),
        })
        .collect();

    if json {
        return print_json(&reports);
    }
    for report in reports {
        println!(
            "  {:<10} {} {}",
            report.scale,
            format_value(report.value),
            report.symbol
        );
    }
    Ok(())
}
