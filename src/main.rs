use clap::Parser;
use school_menu::config::{GenerateOptions, SchoolConfig};
use school_menu::generate::generate_menu_data;
use school_menu::{resolve_data_path, router, AppState};
use std::{env, net::SocketAddr, path::PathBuf};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// School meal menu page with a NEIS-backed cache generator.
#[derive(Parser)]
#[command(name = "school_menu")]
struct Cli {
    /// Fetch meal rows from the meal service API and write the JSON cache.
    #[arg(long)]
    generate: bool,

    /// Override the cache output path (generate only).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    if cli.generate {
        let mut options = GenerateOptions::from_env();
        if let Some(out) = cli.out {
            options.output_path = out;
        }
        if let Err(err) = generate_menu_data(&options).await {
            error!("failed to generate menu data: {err}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let state = AppState::new(resolve_data_path(), SchoolConfig::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
