use nft_rarity::cli;
use nft_rarity::config::Config;
use nft_rarity::logging::init_logging;

#[tokio::main]
pub async fn main() {
    init_logging("warn");

    let mut stdout = std::io::stdout();
    if let Err(e) = cli::run(std::env::args_os(), Config::from_env, &mut stdout).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
