mod args;
mod env_file;

use clap::Parser;
use dotenv::dotenv;
use pretty_env_logger::env_logger::{Builder, Env};

use env_file::PatchOutcome;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let logger_env = Env::default().default_filter_or("info");
    let mut logger_builder = Builder::from_env(logger_env);
    logger_builder.init();

    let args = args::Args::parse();

    match env_file::set_env_key(&args.file, &args.key, &args.value).await {
        Ok(PatchOutcome::Updated) => println!("Updated {}", args.file),
        Ok(PatchOutcome::Created) => println!("Created {}", args.file),
        Err(e) => {
            log::error!("Failed to patch {}: {:#}", args.file, e);
            std::process::exit(1);
        }
    }
}
