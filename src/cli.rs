use clap::Parser;
use std::path::PathBuf;

use crate::backend::BackendKind;
use crate::info::InfoCode;

#[derive(Parser, Debug)]
#[command(
    name = "osso-product-info",
    version,
    about = "Query and set device product information",
    after_help = "With no --query or --set, every variable is printed as NAME='value'."
)]
pub struct Cli {
    #[arg(short, long, value_name = "NAME", conflicts_with = "set", help = "Query <NAME> variable")]
    pub query: Option<String>,

    #[arg(short, long, value_name = "NAME=VALUE", help = "Set <NAME> variable")]
    pub set: Option<String>,

    #[arg(long, value_name = "PATH", help = "Read configuration from this file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Use only this source instead of the configured order")]
    pub backend: Option<BackendKind>,

    #[arg(long, help = "Fail if any variable cannot be read when printing all")]
    pub strict: bool,

    #[arg(long, help = "Print all variables as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

/// Splits `NAME=value`; the value must be non-empty and contain no further `=`.
pub fn parse_set_arg(arg: &str) -> Option<(InfoCode, &str)> {
    let (name, value) = arg.split_once('=')?;
    if value.is_empty() || value.contains('=') {
        return None;
    }
    let code = InfoCode::from_name(name)?;
    Some((code, value))
}
