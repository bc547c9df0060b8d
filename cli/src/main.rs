use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use uuid::Uuid;

use noteify_core::entry::{CustomerEntry, seed_entries};
use noteify_core::export::entries_to_csv;
use noteify_core::summary::SummaryResult;

mod store;

#[derive(Parser)]
#[command(
    name = "noteify",
    version,
    about = "Noteify CLI — manage customer entries and generate summaries through the Noteify API"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "NOTEIFY_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Entry store file (defaults to the platform data dir)
    #[arg(long, env = "NOTEIFY_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Add a customer entry and generate its summary
    Add {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer email
        #[arg(long)]
        email: String,
        /// Free-text notes
        #[arg(long)]
        notes: String,
    },
    /// List entries, optionally filtered by a search term
    List {
        /// Case-insensitive search over name, email, and notes
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single entry
    Show {
        /// Entry id
        id: Uuid,
    },
    /// Generate a summary for an entry through the API and store it
    Summarize {
        /// Entry id
        id: Uuid,
    },
    /// Delete an entry
    Delete {
        /// Entry id
        id: Uuid,
    },
    /// Export all entries to a CSV file
    Export {
        /// Output file path
        #[arg(long, default_value = "customers.csv")]
        output: PathBuf,
    },
    /// Restore the store to the starter entries
    Reset,
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn exit_error(message: &str) -> ! {
    let err = json!({ "error": message });
    eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let store_path = cli.data_file.clone().unwrap_or_else(store::default_path);

    let result = match cli.command {
        Commands::Health => health(&cli.api_url).await,
        Commands::Add { name, email, notes } => {
            add(&cli.api_url, &store_path, &name, &email, &notes).await
        }
        Commands::List { search } => list(&store_path, search.as_deref()),
        Commands::Show { id } => show(&store_path, id),
        Commands::Summarize { id } => summarize(&cli.api_url, &store_path, id).await,
        Commands::Delete { id } => delete(&store_path, id),
        Commands::Export { output } => export(&store_path, &output),
        Commands::Reset => reset(&store_path),
    };

    if let Err(e) = result {
        exit_error(&e.to_string());
    }
}

async fn health(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let resp = client().get(format!("{api_url}/health")).send().await?;
    let body: serde_json::Value = resp.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Create an entry and ask the API for its summary in one step. A failed
/// generation still stores the entry; `summarize` can retry it later.
async fn add(
    api_url: &str,
    store_path: &Path,
    name: &str,
    email: &str,
    notes: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = store::load(store_path)?;
    let mut entry = CustomerEntry::new(name, email, notes);

    let resp = client()
        .post(format!("{api_url}/api/summary"))
        .json(&json!({ "notes": notes, "name": name, "email": email }))
        .send()
        .await?;

    if resp.status().is_success() {
        let result: SummaryResult = resp.json().await?;
        entry.apply_summary(&result);
    } else {
        let resp_body: serde_json::Value = resp.json().await?;
        eprintln!("{}", serde_json::to_string_pretty(&resp_body)?);
    }

    entries.push(entry.clone());
    store::save(store_path, &entries)?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

fn list(store_path: &Path, search: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let entries = store::load(store_path)?;
    let filtered: Vec<&CustomerEntry> = match search {
        Some(query) => entries.iter().filter(|e| e.matches_search(query)).collect(),
        None => entries.iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&filtered)?);
    Ok(())
}

fn show(store_path: &Path, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let entries = store::load(store_path)?;
    let Some(entry) = entries.iter().find(|e| e.id == id) else {
        exit_error(&format!("No entry with id {id}"));
    };
    println!("{}", serde_json::to_string_pretty(entry)?);
    Ok(())
}

/// Send an entry's notes to the summary endpoint and store the generated
/// summary, tags, and next step on the entry.
async fn summarize(
    api_url: &str,
    store_path: &Path,
    id: Uuid,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = store::load(store_path)?;
    let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
        exit_error(&format!("No entry with id {id}"));
    };

    let body = json!({
        "notes": entry.notes,
        "name": entry.name,
        "email": entry.email,
    });

    let resp = client()
        .post(format!("{api_url}/api/summary"))
        .json(&body)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let resp_body: serde_json::Value = resp.json().await?;
        eprintln!("{}", serde_json::to_string_pretty(&resp_body)?);
        std::process::exit(1);
    }

    let result: SummaryResult = resp.json().await?;
    entry.apply_summary(&result);
    let updated = entry.clone();
    store::save(store_path, &entries)?;
    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}

fn delete(store_path: &Path, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let mut entries = store::load(store_path)?;
    let Some(position) = entries.iter().position(|e| e.id == id) else {
        exit_error(&format!("No entry with id {id}"));
    };
    let removed = entries.remove(position);
    store::save(store_path, &entries)?;
    println!("{}", serde_json::to_string_pretty(&removed)?);
    Ok(())
}

fn export(store_path: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let entries = store::load(store_path)?;
    std::fs::write(output, entries_to_csv(&entries))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "exported": entries.len(),
            "path": output,
        }))?
    );
    Ok(())
}

fn reset(store_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let entries = seed_entries();
    store::save(store_path, &entries)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
