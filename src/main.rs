use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use folio_media::catalog::{CatalogClient, CatalogEntry, Collection};
use folio_media::config::{Config, CONFIG_FILE};
use folio_media::media::{
    classify, resolve_all, AssetReference, Classification, MediaKind, ResolvedMedia,
};

/// Resolve portfolio media references into displayable urls
#[derive(Debug, Parser)]
#[command(name = "folio-media", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a single pasted url or file id
    Resolve {
        input: String,
        /// Stored Google Drive file id
        #[arg(long)]
        drive_id: Option<String>,
        /// Explicit thumbnail url
        #[arg(long)]
        thumbnail: Option<String>,
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Thumbnail width in pixels
        #[arg(long)]
        size: Option<u32>,
    },
    /// Fetch published collections from the API and resolve their media
    List {
        #[arg(value_enum, required = true)]
        collections: Vec<CollectionArg>,
        #[arg(long)]
        category: Option<String>,
        /// Thumbnail width in pixels
        #[arg(long)]
        size: Option<u32>,
    },
    /// List the categories of a collection
    Categories {
        #[arg(value_enum)]
        collection: CollectionArg,
    },
    /// Resolve the featured edit, if there is one
    Featured {
        /// Thumbnail width in pixels
        #[arg(long)]
        size: Option<u32>,
    },
}

/// Output of `resolve`
#[derive(Debug, Serialize)]
struct Report {
    classification: Classification,
    media: ResolvedMedia,
}

fn report(reference: &AssetReference, thumbnail_size: u32, api_origin: &str) -> Report {
    Report {
        classification: reference
            .primary_url()
            .map(classify)
            .unwrap_or(Classification::Empty),
        media: resolve_all(reference, thumbnail_size, api_origin),
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Youtube,
    Gdrive,
    Direct,
    Upload,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Youtube => MediaKind::YouTube,
            KindArg::Gdrive => MediaKind::GDrive,
            KindArg::Direct => MediaKind::Direct,
            KindArg::Upload => MediaKind::Upload,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionArg {
    Photos,
    Videos,
    Edits,
    Profile,
}

impl From<CollectionArg> for Collection {
    fn from(collection: CollectionArg) -> Self {
        match collection {
            CollectionArg::Photos => Collection::Photos,
            CollectionArg::Videos => Collection::Videos,
            CollectionArg::Edits => Collection::Edits,
            CollectionArg::Profile => Collection::Profile,
        }
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match Config::get_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, config).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: Config) -> Result<()> {
    match command {
        Command::Resolve {
            input,
            drive_id,
            thumbnail,
            kind,
            size,
        } => {
            let reference = AssetReference {
                explicit_id: drive_id,
                primary_url: Some(input),
                thumbnail_override_url: thumbnail,
                kind_hint: kind.map(MediaKind::from),
            };
            let report = report(
                &reference,
                size.unwrap_or(config.thumbnail_size),
                &config.api_origin,
            );
            info!("Classified input as {:?}", report.classification);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::List {
            collections,
            category,
            size,
        } => {
            let client = client(&config, size)?;
            let collections = collections.into_iter().map(Collection::from).collect_vec();
            let listings = client.entries_for(&collections, category.as_deref()).await?;
            for (collection, entries) in listings {
                println!("# {}", collection.endpoint());
                println!("{}", entries.iter().map(format_entry).join("\n"));
            }
        }
        Command::Categories { collection } => {
            let client = client(&config, None)?;
            let categories = client.categories(collection.into()).await?;
            println!("{}", categories.iter().join("\n"));
        }
        Command::Featured { size } => {
            let client = client(&config, size)?;
            match client.featured_edit().await? {
                Some(edit) => {
                    let entries = client.resolve_records(&[edit]);
                    println!("{}", entries.iter().map(format_entry).join("\n"));
                }
                None => println!("-"),
            }
        }
    }
    Ok(())
}

fn client(config: &Config, size: Option<u32>) -> Result<CatalogClient> {
    let client = CatalogClient::new(config)?;
    Ok(match size {
        Some(size) => client.with_thumbnail_size(size),
        None => client,
    })
}

/// `title  [embed|media]  thumbnail  player`, with `-` where nothing resolved
fn format_entry(entry: &CatalogEntry) -> String {
    let media = &entry.media;
    let player = if media.embeddable {
        media.embed.as_deref()
    } else {
        media.direct.as_deref()
    };
    [
        entry.title.as_str(),
        if media.embeddable { "embed" } else { "media" },
        media.thumbnail.as_deref().unwrap_or("-"),
        player.unwrap_or("-"),
    ]
    .iter()
    .join("\t")
}
