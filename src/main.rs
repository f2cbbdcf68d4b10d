use clap::Parser;
use fincalc::cli::{Cli, Command, run_calculation};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    fincalc::logging::init(cli.verbose);

    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = fincalc::api::run_http_server(port).await {
                error!("server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Calculate(command) => match run_calculation(&command) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}
