use std::env;

use dataviewer::app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Default port, overridable as the only command-line argument
    let mut port = 8000;

    if args.len() >= 2 {
        port = args[1].parse().unwrap_or(8000);
    }

    app::run(port).await
}
