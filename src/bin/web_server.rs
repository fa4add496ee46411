use route_sssp::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // A positional argument overrides the configured port
    if let Some(arg) = env::args().nth(1) {
        config.port = arg.parse()?;
    }

    println!("Starting route_sssp web server...");
    println!("Configuration:");
    println!("   Address: http://{}", config.socket_addr());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max graphs: {}", config.max_graphs);
    println!("   Max batch size: {}", config.max_batch);
    println!();

    start_server(config).await?;

    Ok(())
}
