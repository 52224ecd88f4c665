//! `food-delivery` command: drive the food API port and the sign-up flow from a terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use food_delivery_client::ApiSettings;
use food_delivery_client::domain::ports::{FixtureFoodApi, FoodApi};
use food_delivery_client::domain::{SignUpController, SignUpUiState};
use food_delivery_client::outbound::http::HttpFoodApi;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `food-delivery` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "food-delivery",
    about = "Talk to the food delivery API the way the mobile client does",
    version
)]
struct CliArgs {
    /// Use the built-in fixture API instead of HTTP.
    #[arg(long)]
    fixture: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Print the food list.
    Food,
    /// Run the sign-up flow once and report the outcome.
    SignUp {
        /// Display name.
        #[arg(long, default_value = "")]
        name: String,
        /// Email address.
        #[arg(long, default_value = "")]
        email: String,
        /// Password.
        #[arg(long, default_value = "")]
        password: String,
    },
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let api = build_api(args.fixture)?;

    match args.command {
        Command::Food => {
            let items = api
                .fetch_food()
                .await
                .map_err(|error| io::Error::other(format!("fetch food: {error}")))?;
            for item in items {
                println!("{item}");
            }
        }
        Command::SignUp {
            name,
            email,
            password,
        } => {
            let controller = SignUpController::new(api);
            let mut navigation = controller.navigation();
            controller.set_name(name);
            controller.set_email(email);
            controller.set_password(password);
            controller.submit().await;

            let state = controller.current_state();
            println!("state={state:?}");
            if let Some(event) = navigation.try_recv() {
                println!("navigation={event:?}");
            }
            if !state.is_settled() {
                warn!(?state, "sign-up did not settle");
            }
            if state != SignUpUiState::Success {
                return Err(io::Error::other(format!("sign-up ended in {state:?}")));
            }
        }
    }

    Ok(())
}

fn build_api(fixture: bool) -> io::Result<Arc<dyn FoodApi>> {
    if fixture {
        return Ok(Arc::new(FixtureFoodApi));
    }

    // Only the program name is passed so settings come from the environment
    // and config files, not from this command's own flags.
    let settings = ApiSettings::load_from_iter([OsString::from("food-delivery")])
        .map_err(|error| io::Error::other(format!("load API settings: {error}")))?;
    let base_url = settings.base_url().map_err(io::Error::other)?;
    let timeout = settings.timeout().map_err(io::Error::other)?;
    let api = HttpFoodApi::new(base_url, timeout)
        .map_err(|error| io::Error::other(format!("build HTTP client: {error}")))?;
    Ok(Arc::new(api))
}
