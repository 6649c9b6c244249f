pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod parse;
pub mod product;
pub mod resolver;
pub mod tables;

pub use error::{ProductInfoError, Result};
pub use info::{code_from_name, name_from_code, InfoCode};
pub use product::{query, set, ProductInfo};

use anyhow::Context;
use cli::Cli;
use config::Config;
use product::DumpMap;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load().context("load config")?,
    };
    if let Some(kind) = cli.backend {
        config.backends = vec![kind];
    }
    let info = ProductInfo::new(&config);

    if let Some(name) = &cli.query {
        return query_cmd(&info, name);
    }

    if let Some(arg) = &cli.set {
        return set_cmd(&info, arg);
    }

    dump_cmd(&info, cli.json, cli.strict)
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn query_cmd(info: &ProductInfo, name: &str) -> anyhow::Result<()> {
    let code = code_from_name(name)
        .with_context(|| format!("Error getting variable {name} value: unknown variable"))?;
    let value = info
        .query(code)
        .with_context(|| format!("Error getting variable {name} value"))?;
    println!("{value}");
    Ok(())
}

fn set_cmd(info: &ProductInfo, arg: &str) -> anyhow::Result<()> {
    let (code, value) =
        cli::parse_set_arg(arg).context("Wrong argument, should be VAR=<value>")?;
    info.set(code, value)
        .with_context(|| format!("Error setting variable {code}"))?;
    Ok(())
}

fn dump_cmd(info: &ProductInfo, json: bool, strict: bool) -> anyhow::Result<()> {
    let entries = info.dump();

    if json {
        println!("{}", serde_json::to_string_pretty(&DumpMap(&entries))?);
    } else {
        for entry in &entries {
            println!(
                "{}='{}'",
                entry.code,
                entry.value.as_deref().unwrap_or_default()
            );
        }
    }

    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();
    if strict && failed > 0 {
        anyhow::bail!("{failed} variable(s) could not be read");
    }

    Ok(())
}
