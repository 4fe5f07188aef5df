use rocket_ascent::*;
use tracing_subscriber::EnvFilter;

// Usage: main [--json] [m_r=1.31e5] [v_e=3600] ...
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut raw = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if let Some((key, value)) = arg.split_once('=') {
            raw.push((key.to_string(), value.to_string()));
        } else {
            eprintln!("Ignoring argument without '=': {}", arg);
        }
    }

    let mut output = None;

    run(raw, |bundle| {
        output = Some(if json {
            serde_json::to_string_pretty(&bundle)
        } else {
            Ok(Telemetry::from_bundle(&bundle).to_string())
        });
    })?;

    if let Some(rendered) = output {
        println!("{}", rendered?);
    }

    Ok(())
}
