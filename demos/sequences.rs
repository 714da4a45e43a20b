//! Example demonstrating list fields

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Split on `,`, whitespace around numbers is ignored
    #[env(name = "ports")]
    pub ports: Vec<u16>,

    // Custom separator; strings are kept verbatim
    #[env(name = "hosts", sep = ";")]
    pub hosts: Vec<String>,

    // Default applies before splitting
    #[env(name = "weights", default = "0.5, 0.25, 0.25")]
    pub weights: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    // `x` is not a port and is dropped
    std::env::set_var("ports", "80, 443, x, 8080");
    std::env::set_var("hosts", "a.example.com;b.example.com");

    let config = Config::from_env()?;

    println!("Lists:");
    println!("  Ports: {:?}", config.ports); // [80, 443, 8080]
    println!("  Hosts: {:?}", config.hosts);
    println!("  Weights: {:?}", config.weights);

    Ok(())
}
