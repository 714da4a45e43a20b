//! Basic usage example

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Loaded from the `database_url` environment variable
    #[env(name = "database_url")]
    pub database_url: String,

    // With default value
    #[env(name = "server_addr", default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env(name = "max_connections", default = "10")]
    pub max_connections: u32,

    // Any non-empty value turns this on
    #[env(name = "debug_mode")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("database_url", "postgres://localhost/mydb");
    std::env::set_var("server_addr", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
