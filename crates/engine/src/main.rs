//! restolist - command line front end for the saved restaurant lists.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restolist_domain::{ListName, RestaurantRecord};
use restolist_engine::infrastructure::config::AppConfig;
use restolist_engine::use_cases::{ExploreUpdate, ListView};
use restolist_engine::App;
use restolist_shared::RawPlace;

const USAGE: &str = "Usage: restolist <command>

Commands:
  show <list> [query]        List saved restaurants, optionally filtered
  add <list> <record-json>   Save a restaurant (replaces an existing entry)
  remove <list> <place-id>   Remove a restaurant
  toggle <list> <record-json>
  contains <list> <place-id>
  clear                      Empty both lists
  bridge                     Read map page messages (JSON lines) from stdin

<list> is `favorites` or `to-visit`.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restolist_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let app = App::new(&config).await;
    app.store.load().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["show", list] => show(&app, list.parse()?, ""),
        ["show", list, query @ ..] => show(&app, list.parse()?, &query.join(" ")),
        ["add", list, json] => {
            let record = parse_record(json)?;
            let list: ListName = list.parse()?;
            app.store.add(list, record).await?;
            println!("Saved to {}", list.title());
            Ok(())
        }
        ["remove", list, place_id] => {
            let list: ListName = list.parse()?;
            if app.store.remove(list, place_id).await? {
                println!("Removed from {}", list.title());
            } else {
                println!("Not in {}", list.title());
            }
            Ok(())
        }
        ["toggle", list, json] => {
            let record = parse_record(json)?;
            let outcome = app.store.toggle(list.parse()?, record).await?;
            println!("{:?}", outcome);
            Ok(())
        }
        ["contains", list, place_id] => {
            println!("{}", app.store.contains(list.parse()?, place_id));
            Ok(())
        }
        ["clear"] => {
            app.store.clear_all().await?;
            println!("Both lists cleared");
            Ok(())
        }
        ["bridge"] => bridge(&app).await,
        [cmd, ..] => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        [] => anyhow::bail!("{USAGE}"),
    }
}

/// Coerce a place payload the same way bridge messages are.
fn parse_record(json: &str) -> anyhow::Result<RestaurantRecord> {
    let raw: RawPlace = serde_json::from_str(json).context("record must be a JSON object")?;
    Ok(raw.into_record()?)
}

fn show(app: &App, list: ListName, query: &str) -> anyhow::Result<()> {
    match app.use_cases.lists.view(list, query) {
        ListView::Loading => println!("Still loading"),
        ListView::Empty => println!("{} is empty", list.title()),
        ListView::NoMatches => println!("No restaurants in {} match '{}'", list.title(), query),
        ListView::Records(records) => {
            for record in records {
                print_record(app, &record);
            }
        }
    }
    Ok(())
}

fn print_record(app: &App, record: &RestaurantRecord) {
    let badge = app.store.membership(record.place_id.as_str()).badge();
    let rating = if record.has_rating() {
        format!("{:.1}", record.rating)
    } else {
        "no rating".to_string()
    };
    println!("{} {} ({}) [{}]", badge.symbol(), record.name, rating, record.place_id);
    if let Some(address) = &record.address {
        println!("    {}", address);
    }
    if let Some(uri) = record.dial_uri() {
        println!("    {}", uri);
    }
    if let Some(url) = record.website_url() {
        println!("    {}", url);
    }
}

async fn bridge(app: &App) -> anyhow::Result<()> {
    let mut session = app.explore_session();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match session.handle_message(&line) {
            Ok(ExploreUpdate::BoundsMoved(_)) => println!("{}", session.reload_request()?),
            Ok(update) => tracing::debug!(update = ?update, "Applied bridge message"),
            Err(e) => tracing::warn!(error = %e, "Skipping bridge message"),
        }
    }

    println!(
        "markers: {}, nearby: {}",
        session.marker_count(),
        session.nearby().len()
    );
    match (session.selected(), session.selected_membership()) {
        (Some(record), Some(membership)) => {
            println!("selected: {} ({})", record.name, membership.badge().label());
        }
        _ => println!("selected: none"),
    }
    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
