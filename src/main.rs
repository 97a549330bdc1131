use serde::Serialize;
use std::{env, path::PathBuf, process::ExitCode};
use tokio::fs;
use tourism_tracker::{
    models::{BulkPayload, VisitorProfile},
    resolve_config, ui, PageContext, PageLoadReport, Tracker, TrackingClient,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: tourism_tracker <command>
  health                               check the tracking api
  stats                                print aggregate statistics
  increment                            bump the total view counter
  page <path> [title]                  classify and record a page view
  visit <type> <sejour> <age> <persona>  submit a visitor profile
  bulk <file.json>                     submit a bulk envelope
  visitors [limit]                     list recorded visitors
  pages                                list recorded pages
  values                               print accepted option values
  form                                 print the visitor survey form html
  page-load <path> [title]             run the full page-load sequence";

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(args: &[String]) -> CliResult {
    let config = resolve_config()?;
    info!("tracking api at {}", config.base_url());
    let client = TrackingClient::new(config);
    let arg = |index: usize| args.get(index).map(String::as_str);

    match (arg(0), arg(1)) {
        (Some("health"), _) => {
            let health = client.health().await?;
            print_json(&serde_json::json!({
                "status": health.status,
                "healthy": health.is_healthy(),
                "database": health.database,
                "vues_totales": health.vues_totales,
                "checked_at": health.checked_at().map(|at| at.to_string()),
            }))
        }
        (Some("stats"), _) => print_json(&client.fetch_stats().await?),
        (Some("increment"), _) => print_json(&client.increment_total_views().await?),
        (Some("page"), Some(path)) => {
            let page = tourism_tracker::classify_page(path, arg(2));
            client.record_page_view(&page).await?;
            print_json(&page)
        }
        (Some("visit"), Some(_)) => {
            let profile = parse_profile(&args[1..])?;
            client.submit_visitor_profile(&profile).await?;
            print_json(&profile)
        }
        (Some("bulk"), Some(file)) => {
            let payload = load_bulk(PathBuf::from(file)).await?;
            print_json(&client.submit_bulk(&payload).await?)
        }
        (Some("visitors"), limit) => {
            let limit = limit.map(str::parse::<u32>).transpose()?.unwrap_or(100);
            print_json(&client.list_visitors(limit).await?)
        }
        (Some("pages"), _) => print_json(&client.list_pages().await?),
        (Some("values"), _) => print_json(&client.valid_values().await?),
        (Some("form"), _) => {
            print!("{}", ui::render_visitor_form());
            Ok(())
        }
        (Some("page-load"), Some(path)) => {
            let mut page = PageContext::new(path);
            if let Some(title) = arg(2) {
                page = page.with_title(title);
            }
            let mut tracker = Tracker::new(client);
            match tracker.on_page_load(&page).await {
                PageLoadReport::Disabled => Err("tracking api unavailable, tracking disabled".into()),
                PageLoadReport::Tracked {
                    total_views,
                    page,
                    page_recorded,
                    stats,
                    ..
                } => print_json(&serde_json::json!({
                    "vues_totales": total_views,
                    "page": page,
                    "page_enregistree": page_recorded,
                    "stats": stats,
                })),
            }
        }
        _ => Err(USAGE.into()),
    }
}

fn parse_profile(values: &[String]) -> Result<VisitorProfile, Box<dyn std::error::Error>> {
    let [type_visiteur, temps_sejour, tranche_age, type_personna] = values else {
        return Err(USAGE.into());
    };
    Ok(VisitorProfile {
        type_visiteur: type_visiteur.parse()?,
        temps_sejour: temps_sejour.parse()?,
        tranche_age: tranche_age.parse()?,
        type_personna: type_personna.parse()?,
    })
}

async fn load_bulk(path: PathBuf) -> Result<BulkPayload, Box<dyn std::error::Error>> {
    let bytes = fs::read(&path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
