use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::{error, info};

use mergington_activities::database::seed::{self, ActivityMap};

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("ACTIVITIES_SEED_PATH").map(PathBuf::from));
    let source = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded".to_string());

    let activities = match seed::load(path.as_deref()) {
        Ok(a) => a,
        Err(e) => {
            error!(seed = %source, error = %e, "seed check failed");
            std::process::exit(1);
        }
    };

    info!(seed = %source, activities = activities.len(), "seed is valid");
    for line in report(&source, &activities) {
        println!("{}", line);
    }
}

fn report(source: &str, activities: &ActivityMap) -> Vec<String> {
    let header = format!("seed {}: {} activities", source, activities.len());
    let mut lines = vec![header];
    for (name, activity) in activities {
        lines.push(format!(
            "  {}: participants={}, max={}, spots_left={}",
            name,
            activity.participants.len(),
            activity.max_participants,
            activity.spots_left()
        ));
    }
    lines
}
