use clap::Parser;
use status_service::panel::{DEFAULT_API_URL, LoginForm, PanelState, StatusPanel};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fetches the public message once and prints the status panel.
///
/// Supplying `--email` and `--password` also runs the simulated sign-in,
/// which never contacts the backend.
#[derive(Debug, Parser)]
#[command(name = "status-panel", version, about)]
struct Cli {
    /// Public message endpoint of the status service
    #[arg(long, env = "STATUS_API_URL", default_value = DEFAULT_API_URL)]
    endpoint: String,

    /// Email address for the simulated sign-in
    #[arg(long, requires = "password")]
    email: Option<String>,

    /// Password for the simulated sign-in
    #[arg(long, requires = "email")]
    password: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let panel = StatusPanel::new(cli.endpoint);
    info!(endpoint = %panel.endpoint(), "loading status panel");

    println!("{}\n", PanelState::Loading);
    let state = panel.load().await;
    println!("{state}");

    if let (Some(email), Some(password)) = (cli.email, cli.password) {
        match LoginForm::new(email, password).submit() {
            Ok(alert) => println!("\n{alert}"),
            Err(e) => eprintln!("\n{e}"),
        }
    }

    if state.is_error() {
        std::process::exit(1);
    }
}
