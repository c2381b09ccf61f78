//! a compact system monitor.

use {minimon::App, tracing_subscriber::EnvFilter};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    App::new().run()?;

    println!("system monitor stopped.");
    Ok(())
}
