use clap::Parser;
use fanchart::api::{Cli, Command};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Serve { port } => {
            if let Err(e) = fanchart::api::run_http_server(port).await {
                log::error!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Render(args) => match fanchart::api::run_render(&args) {
            Ok(report) => println!("{report}"),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
    }
}
