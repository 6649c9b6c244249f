use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = match osso_product_info::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1 like every other failure; --help and --version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    osso_product_info::run(cli)
}
