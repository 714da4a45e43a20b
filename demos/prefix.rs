//! Example demonstrating prefix attribute

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
#[env(prefix = "myapp")]
struct Config {
    // Environment variables will be prefixed: myapp.database_url, myapp.port
    #[env(name = "database_url")]
    pub database_url: String,

    #[env(name = "port", default = "8080")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    // Dotted names cannot be set from most shells, but are valid variables
    std::env::set_var("myapp.database_url", "postgres://localhost/db");
    std::env::set_var("myapp.port", "3000");

    let config = Config::from_env()?;

    println!("Configuration with prefix 'myapp':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);

    Ok(())
}
