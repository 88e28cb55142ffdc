use clap::Parser;
use storefront_core::LocalizationConfig;
use storefront_localize::args::Args;
use storefront_localize::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing();
    let config = LocalizationConfig::from_env()?;

    let html = run(&args, &config).await?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}
