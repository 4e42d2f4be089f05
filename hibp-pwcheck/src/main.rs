use clap::Parser;
use hibp_range_client::RangeClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-pwcheck")]
#[command(about = "Check how many times a password appears in known data breaches")]
struct Args {
    /// Password to check (only a 5-character hash prefix is sent)
    password: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let result = match RangeClient::new() {
        Ok(client) => client.count(&args.password).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => println!("{count}"),
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    }
}
