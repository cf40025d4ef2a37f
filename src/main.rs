use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;

use baustellen_service::error::Error;
use baustellen_service::ocit::client::{
    FeedClient, FileFeedClient, OBJECT_TYPE_INCIDENTS, OBJECT_TYPE_ROADWORKS,
};
use baustellen_service::pipeline;
use baustellen_service::publish::{FilePublisher, Publisher};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding one pre-fetched <object type>.json response per query
    #[arg(long)]
    feed_dir: String,

    /// Path of the GeoJSON document to write
    #[arg(long, default_value = "baustellen_sperrungen.json")]
    output_path: String,

    /// Feed object types to query, in order
    #[arg(long = "object-type", default_values_t = [
        OBJECT_TYPE_ROADWORKS.to_string(),
        OBJECT_TYPE_INCIDENTS.to_string(),
    ])]
    object_types: Vec<String>,

    /// Minutes between runs; 0 runs the export once and exits
    #[arg(long, default_value_t = 10)]
    interval_minutes: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let client = FileFeedClient::new(&args.feed_dir);
    let publisher = FilePublisher::new(&args.output_path);

    loop {
        log::info!("Run import");
        if let Err(err) = run_once(&client, &args.object_types, &publisher) {
            log::error!("Import failed: {}", err);
            if args.interval_minutes == 0 {
                std::process::exit(1);
            }
        }
        if args.interval_minutes == 0 {
            break;
        }
        thread::sleep(Duration::from_secs(args.interval_minutes * 60));
    }
}

/// One complete import: fetch, transform, serialize, publish. The document
/// only reaches the publisher after every stage has succeeded.
fn run_once<C: FeedClient, P: Publisher>(
    client: &C,
    object_types: &[String],
    publisher: &P,
) -> Result<(), Error> {
    let collection = pipeline::run(client, object_types, Utc::now())?;
    let document = collection.to_pretty_json()?;
    publisher.publish(&document)
}
