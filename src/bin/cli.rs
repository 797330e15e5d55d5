//! Coffee SNOB CLI
//!
//! Browse the shop list and keep ratings from the terminal:
//! - List and inspect shops
//! - Rate shops and jot notes
//! - Export ratings in the browser's `coffeeRatings` format

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use coffee_snob::config::{generate_default_config, Config};
use coffee_snob::ratings::{FileStore, RatingStore};
use coffee_snob::shops::{ShopCatalog, ShopId};
use coffee_snob::views::{average_label, ShopDetailView, SHOP_NOT_FOUND_MESSAGE};

#[derive(Parser)]
#[command(name = "coffee-snob-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Specialty coffee shops and your own ratings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ratings file (overrides config)
    #[arg(long, global = true)]
    pub ratings_file: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all shops with your ratings
    Shops,

    /// Show one shop
    Show {
        /// Shop id
        id: String,
    },

    /// Rate a shop from 1 to 5 stars
    Rate {
        id: ShopId,
        stars: u8,
    },

    /// Attach a note to a shop
    Note {
        id: ShopId,
        /// Note text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List shops you have rated or annotated
    Ratings,

    /// Print ratings as the browser stores them
    Export,

    /// Delete all local ratings
    Reset {
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        coffee_snob::logging::during_startup(|| Config::load_default(cli.config.as_deref()))?;
    coffee_snob::logging::init(&config.logging);

    let catalog = ShopCatalog::bundled().context("bundled shop dataset is invalid")?;
    let ratings_path = cli
        .ratings_file
        .clone()
        .unwrap_or_else(|| config.ratings.path());

    match cli.command {
        Commands::Shops => {
            let ratings = open_ratings(&ratings_path)?;

            if cli.format == "json" {
                let rows: Vec<_> = catalog
                    .iter()
                    .map(|shop| {
                        serde_json::json!({
                            "shop": shop,
                            "yours": ratings.entry(shop.id),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{:<4} {:<28} {:<12} {:<6} {}", "ID", "Name", "City", "Avg", "Yours");
                println!("{}", "-".repeat(64));
                for shop in catalog.iter() {
                    let yours = ratings
                        .rating(shop.id)
                        .map(|s| stars_bar(s.get()))
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<4} {:<28} {:<12} {:<6} {}",
                        shop.id,
                        truncate(&shop.name, 28),
                        truncate(&shop.city, 12),
                        format!("{:.1}", shop.rating),
                        yours
                    );
                }
            }
        }

        Commands::Show { id } => match ShopDetailView::resolve(&catalog, &id) {
            ShopDetailView::Found(shop) => {
                let ratings = open_ratings(&ratings_path)?;

                if cli.format == "json" {
                    println!("{}", serde_json::to_string_pretty(shop)?);
                } else {
                    println!("{}", shop.name);
                    println!("{}", shop.city);
                    println!("{}", shop.address);
                    println!("{}", shop.website);
                    println!();
                    println!("{}", shop.desc);
                    println!("{}", average_label(shop));
                    if let Some(stars) = ratings.rating(shop.id) {
                        println!("Yours: {}", stars_bar(stars.get()));
                    }
                    if let Some(note) = ratings.note(shop.id) {
                        println!("Note: {}", note);
                    }
                }
            }
            ShopDetailView::NotFound => {
                eprintln!("{}: {}", SHOP_NOT_FOUND_MESSAGE, id);
                eprintln!("List shops with: coffee-snob-cli shops");
                std::process::exit(1);
            }
        },

        Commands::Rate { id, stars } => {
            let shop = require_shop(&catalog, id)?;
            let mut ratings = open_ratings(&ratings_path)?;
            ratings.set_rating(id, stars)?;
            println!("Rated {} {}", shop.name, stars_bar(stars));
        }

        Commands::Note { id, text } => {
            let shop = require_shop(&catalog, id)?;
            let mut ratings = open_ratings(&ratings_path)?;
            ratings.set_note(id, text.join(" "))?;
            println!("Noted for {}", shop.name);
        }

        Commands::Ratings => {
            let ratings = open_ratings(&ratings_path)?;

            if ratings.book().is_empty() {
                println!("No ratings yet.");
                println!();
                println!("Rate your first shop with:");
                println!("  coffee-snob-cli rate 1 5");
            } else if cli.format == "json" {
                let rows: Vec<_> = ratings
                    .book()
                    .iter()
                    .map(|(id, entry)| serde_json::json!({ "id": id, "entry": entry }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (id, entry) in ratings.book().iter() {
                    let name = catalog
                        .find(id)
                        .map(|s| s.name.as_str())
                        .unwrap_or("(unknown shop)");
                    let stars = entry
                        .rating
                        .map(|s| stars_bar(s.get()))
                        .unwrap_or_else(|| "-".to_string());
                    println!("{:<4} {:<28} {}", id, truncate(name, 28), stars);
                    if let Some(note) = &entry.note {
                        println!("     \"{}\"", note);
                    }
                }
            }
        }

        Commands::Export => {
            let ratings = open_ratings(&ratings_path)?;
            println!("{}", ratings.export_json());
        }

        Commands::Reset { yes } => {
            if !yes {
                bail!("refusing to delete ratings without --yes");
            }
            let mut ratings = open_ratings(&ratings_path)?;
            ratings.clear()?;
            println!("Ratings cleared");
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, &content)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

fn open_ratings(path: &Path) -> anyhow::Result<RatingStore<FileStore>> {
    let store = FileStore::open(path)
        .with_context(|| format!("opening ratings file {}", path.display()))?;
    Ok(RatingStore::load(store))
}

fn require_shop(catalog: &ShopCatalog, id: ShopId) -> anyhow::Result<&coffee_snob::Shop> {
    match catalog.find(id) {
        Some(shop) => Ok(shop),
        None => bail!("{}: {}", SHOP_NOT_FOUND_MESSAGE, id),
    }
}

fn stars_bar(stars: u8) -> String {
    let lit = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(lit), "☆".repeat(5 - lit))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
