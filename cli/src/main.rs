use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use parkdeck_client::net::types::{
    DuplicateProbe, LoginRequest, NewLot, RegisterRequest, ReserveRequest,
};
use parkdeck_client::session::ACCESS_TOKEN_KEY;
use parkdeck_client::{Api, ApiConfig, ApiError, MemoryStore, SessionStore};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to construct http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "parkdeck-cli", about = "ParkDeck parking-reservation API CLI")]
struct Cli {
    #[arg(long, env = "PARKDECK_API_URL", default_value = "http://localhost:5000/api")]
    base_url: String,

    #[arg(long, env = "PARKDECK_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the issued session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the issued session.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the currently authenticated user.
    Me,
    /// Probe whether a username or email is already taken.
    Check {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    User(UserCommand),
    Parking(ParkingCommand),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    Role,
    Dashboard,
}

#[derive(Args, Debug)]
struct ParkingCommand {
    #[command(subcommand)]
    command: ParkingSubcommand,
}

#[derive(Subcommand, Debug)]
enum ParkingSubcommand {
    Lots,
    Spots {
        lot_id: i64,
    },
    Reserve {
        #[arg(long)]
        lot_id: i64,
        #[arg(long)]
        spot_id: Option<i64>,
        #[arg(long)]
        parking_time: String,
        #[arg(long)]
        vehicle_number: String,
    },
    Cancel {
        reservation_id: i64,
    },
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    Dashboard,
    Users,
    Reservations,
    Lots,
    CreateLot {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price_per_hr: f64,
        #[arg(long)]
        address: String,
        #[arg(long)]
        pin_code: String,
        #[arg(long)]
        max_spots: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = Arc::new(MemoryStore::new());
    if let Some(token) = &cli.access_token {
        store.set(ACCESS_TOKEN_KEY, token);
    }
    let api = Api::new(&ApiConfig::new(cli.base_url), store)?;

    match cli.command {
        Command::Login { email, password } => {
            let response = api.login(&LoginRequest { email, password }).await?;
            eprintln!("export PARKDECK_ACCESS_TOKEN={}", response.access_token);
            print_json(&response)
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let response = api
                .register(&RegisterRequest {
                    username,
                    email,
                    password,
                })
                .await?;
            eprintln!("export PARKDECK_ACCESS_TOKEN={}", response.access_token);
            print_json(&response)
        }
        Command::Me => print_json(&api.me().await?),
        Command::Check { username, email } => {
            print_json(&api.check_duplicate(&DuplicateProbe { username, email }).await?)
        }
        Command::User(user) => run_user(&api, user).await,
        Command::Parking(parking) => run_parking(&api, parking).await,
        Command::Admin(admin) => run_admin(&api, admin).await,
    }
}

async fn run_user(api: &Api, user: UserCommand) -> Result<(), CliError> {
    match user.command {
        UserSubcommand::Role => print_json(&api.user_role().await?),
        UserSubcommand::Dashboard => print_json(&api.user_dashboard_data().await?),
    }
}

async fn run_parking(api: &Api, parking: ParkingCommand) -> Result<(), CliError> {
    match parking.command {
        ParkingSubcommand::Lots => print_json(&api.parking_lots().await?),
        ParkingSubcommand::Spots { lot_id } => print_json(&api.lot_spots(lot_id).await?),
        ParkingSubcommand::Reserve {
            lot_id,
            spot_id,
            parking_time,
            vehicle_number,
        } => {
            let request = ReserveRequest {
                lot_id,
                spot_id,
                parking_time,
                vehicle_number,
            };
            print_json(&api.reserve(&request).await?)
        }
        ParkingSubcommand::Cancel { reservation_id } => {
            print_json(&api.cancel_reservation(reservation_id).await?)
        }
    }
}

async fn run_admin(api: &Api, admin: AdminCommand) -> Result<(), CliError> {
    match admin.command {
        AdminSubcommand::Dashboard => print_json(&api.admin_dashboard_data().await?),
        AdminSubcommand::Users => print_json(&api.admin_users().await?),
        AdminSubcommand::Reservations => print_json(&api.admin_reservations().await?),
        AdminSubcommand::Lots => print_json(&api.admin_lots().await?),
        AdminSubcommand::CreateLot {
            name,
            price_per_hr,
            address,
            pin_code,
            max_spots,
        } => {
            let lot = NewLot {
                prime_location_name: name,
                price_per_hr,
                address,
                pin_code,
                max_spots,
            };
            print_json(&api.create_lot(&lot).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
