use ipinfo_csv::config::{read_config, CONFIG_ENV, DEFAULT_CONFIG_FILE};
use ipinfo_csv::converter::Registry;
use ipinfo_csv::output::{print_converters, print_summary};
use ipinfo_csv::{run, write_output};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let registry = Registry::with_defaults();

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("list") {
        print_converters(&registry);
        return Ok(());
    }

    let config_file = arg
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = read_config(&PathBuf::from(config_file))?;

    let container = run(&config, &registry).inspect_err(|e| log::error!("{e}"))?;
    print_summary(&container);

    if let Some(output) = &config.output {
        write_output(&container, output)?;
    }

    Ok(())
}
