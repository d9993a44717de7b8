use clap::Parser;
use esi2ddl_cli::{logging, Cli, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::from(cli);
    esi2ddl_cli::run(&config, &mut std::io::stdout()).await
}
