//! Easel demo CLI.
//!
//! Seeds an in-memory store from a JSON file and resolves saved-object
//! relationships against it. HTTP mounting of the resolver is the
//! embedding application's concern, not this binary's.

use anyhow::Context;
use clap::{value_parser, Arg, Command};
use easel_object::{MemoryStore, SavedObject};
use easel_relations::{find_relationships, RelationshipOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("easel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Easel saved-object tools")
        .subcommand_required(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve relationships for one saved object")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("Kind of the subject object"),
                )
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .help("Id of the subject object"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .default_value("10")
                        .value_parser(value_parser!(usize))
                        .help("Maximum inbound referrers to return"),
                )
                .arg(
                    Arg::new("types")
                        .long("types")
                        .num_args(1..)
                        .required(true)
                        .help("Allow-listed kinds considered in both directions"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .required(true)
                        .help("Path to a JSON array of saved objects"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("resolve", args)) => {
            let kind = args.get_one::<String>("type").unwrap();
            let id = args.get_one::<String>("id").unwrap();
            let size = *args.get_one::<usize>("size").unwrap();
            let object_types: Vec<String> =
                args.get_many::<String>("types").unwrap().cloned().collect();
            let seed_path = args.get_one::<String>("seed").unwrap();

            let raw = std::fs::read_to_string(seed_path)
                .with_context(|| format!("reading seed file {seed_path}"))?;
            let objects: Vec<SavedObject> =
                serde_json::from_str(&raw).context("parsing seed file")?;
            tracing::info!(objects = objects.len(), "seeding in-memory store");

            let store = MemoryStore::new();
            for object in objects {
                store.insert(object);
            }

            let map = find_relationships(
                kind,
                id,
                RelationshipOptions {
                    size,
                    client: &store,
                    object_types: &object_types,
                },
            )
            .await?;

            println!("{}", serde_json::to_string_pretty(&map)?);
            Ok(())
        }
        _ => unreachable!("subcommand is required"),
    }
}
