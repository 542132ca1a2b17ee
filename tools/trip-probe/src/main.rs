use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use titan_rush_core::campus::{
    BuildingIdentifier, CampusProvider, ClockTime, Coordinate, Leg, StaticCampusProvider,
    TravelDuration, backsolve_leave_time_str,
};
use titan_rush_core::{
    fit_region_with_padding, Availability, FetchStatus, OccupancyResolver, PlannerConfig,
    TripOrchestrator, TripRequest,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "trip-probe",
    author,
    version,
    about = "Exercise the trip planner against live or local collaborators",
    long_about = "Runs the same planning core the mobile app uses: leave-by arithmetic, \
                  the parking occupancy scrape and the two-leg trip estimate.\n\n\
                  Endpoints come from a JSON config file (same format the app receives) \
                  and may be overridden per flag."
)]
struct Args {
    /// Planner config JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the driving estimate endpoint
    #[arg(long, global = true)]
    drive_url: Option<String>,

    /// Override the walking route endpoint
    #[arg(long, global = true)]
    walk_url: Option<String>,

    /// Override the occupancy document URL
    #[arg(long, global = true)]
    occupancy_url: Option<String>,

    /// Verbose output (show debug messages)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Backsolve a leave-by time without any network calls
    LeaveBy {
        /// Desired arrival, e.g. "9:00 AM"
        arrival: String,
        #[arg(long, default_value_t = 0)]
        hours: u32,
        #[arg(long, default_value_t = 0)]
        minutes: u32,
        #[arg(long, default_value_t = 0)]
        seconds: u32,
    },

    /// Fetch the occupancy document and print free spaces per facility
    Occupancy,

    /// Plan a trip and print both legs and the leave-by time
    Plan {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Facility id, e.g. Nutwood
        #[arg(long)]
        facility: String,
        /// Building id, e.g. pollak-library
        #[arg(long)]
        building: String,
        /// Desired arrival; defaults to the next five-minute slot
        #[arg(long)]
        arrival: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List facilities, or the nearest ones to a building
    Facilities {
        #[arg(long)]
        near: Option<String>,
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
}

fn load_config(args: &Args) -> Result<PlannerConfig> {
    let json = match &args.config {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => String::new(),
    };

    let mut config = PlannerConfig::from_json_str(&json).context("Invalid planner config")?;

    if let Some(url) = &args.drive_url {
        config.drive_estimate_url = url.clone();
    }
    if let Some(url) = &args.walk_url {
        config.walk_route_url = url.clone();
    }
    if let Some(url) = &args.occupancy_url {
        config.occupancy_url = url.clone();
    }

    config.validate().context("Invalid endpoint override")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = load_config(&args)?;
    let campus = StaticCampusProvider::csuf();

    match &args.command {
        Command::LeaveBy {
            arrival,
            hours,
            minutes,
            seconds,
        } => {
            let total = TravelDuration::new(*hours, *minutes, *seconds);
            let leave = backsolve_leave_time_str(arrival, &total);
            if leave.is_empty() {
                bail!("Could not compute a leave-by time for {arrival:?}");
            }
            println!("{leave}");
        }

        Command::Occupancy => {
            let resolver = OccupancyResolver::from_config(&config, config.http_client()?)?;
            let facilities = campus.all_facilities();
            let snapshot = resolver.resolve(&facilities).await;

            if snapshot.status == FetchStatus::Offline {
                tracing::warn!("Occupancy document unavailable");
            }

            for facility in &facilities {
                match snapshot.availability(&facility.id) {
                    Availability::Spaces(n) => println!("{:<28} {n}", facility.display_name),
                    Availability::Unknown => println!("{:<28} unknown", facility.display_name),
                }
            }
        }

        Command::Plan {
            lat,
            lon,
            facility,
            building,
            arrival,
            json,
        } => {
            let origin = Coordinate::new(*lat, *lon).context("Origin must be finite")?;
            let arrival = arrival
                .clone()
                .unwrap_or_else(|| ClockTime::default_arrival().to_string());

            let request = TripRequest::new(origin)
                .with_facility(facility.as_str())
                .with_building(building.as_str())
                .with_desired_arrival(arrival.as_str());

            let orchestrator = TripOrchestrator::from_config(&config, config.http_client()?)?;
            let result = orchestrator
                .plan_trip(&request)
                .await
                .context("Trip planning failed")?;

            let route: Vec<Coordinate> = result
                .vehicle_leg
                .coordinates
                .iter()
                .chain(&result.pedestrian_leg.coordinates)
                .copied()
                .collect();
            let region = fit_region_with_padding(&route, config.viewport_padding_deg);

            if *json {
                let out = serde_json::json!({
                    "arrival": arrival,
                    "leave_by": result.leave_by_display(),
                    "total": result.total_duration.to_string(),
                    "vehicle": leg_json(&result.vehicle_leg),
                    "pedestrian": leg_json(&result.pedestrian_leg),
                    "region": region.map(|r| serde_json::json!({
                        "latitude": r.center.latitude(),
                        "longitude": r.center.longitude(),
                        "latitude_delta": r.latitude_delta,
                        "longitude_delta": r.longitude_delta,
                    })),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_leg(&result.vehicle_leg);
                print_leg(&result.pedestrian_leg);
                println!("total     {}", result.total_duration);
                match result.leave_by {
                    Some(leave) => println!("leave by  {leave} to arrive at {arrival}"),
                    None => println!("leave by  unknown ({arrival:?} is not a clock time)"),
                }
            }
        }

        Command::Facilities { near, count } => {
            let facilities = match near {
                Some(building) => campus
                    .suggest_facilities_for(&BuildingIdentifier::new(building), *count)
                    .context("Cannot suggest facilities")?,
                None => campus.all_facilities(),
            };

            for facility in facilities.iter().map(Arc::as_ref) {
                println!(
                    "{:<16} {:<28} {}",
                    facility.id.as_str(),
                    facility.display_name,
                    facility.location
                );
            }
        }
    }

    Ok(())
}

fn print_leg(leg: &Leg) {
    let route = if leg.is_routable() {
        format!("{} points, {:.0} m", leg.coordinates.len(), leg.length_meters())
    } else {
        "no route".to_owned()
    };

    match leg.extra {
        Some(minutes) => println!(
            "{:<9} {} ({route}, ~{minutes:.0} min to park)",
            leg.kind.to_string(),
            leg.duration
        ),
        None => println!("{:<9} {} ({route})", leg.kind.to_string(), leg.duration),
    }
}

fn leg_json(leg: &Leg) -> serde_json::Value {
    serde_json::json!({
        "duration": leg.duration.to_string(),
        "points": leg.coordinates.len(),
        "length_m": leg.length_meters(),
        "parking_minutes": leg.extra,
    })
}
