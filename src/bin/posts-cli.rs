use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "posts-cli")]
#[command(about = "Command-line client for the postboard JSON API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts
    List,
    /// Show a single post
    Get { id: String },
    /// Create a post
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// Change some fields of a post
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// Delete a post
    Delete { id: String },
}

fn fields(title: Option<String>, content: Option<String>, author: Option<String>) -> Value {
    let mut body = Map::new();
    for (key, value) in [("title", title), ("content", content), ("author", author)] {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::String(value));
        }
    }
    Value::Object(body)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.get(format!("{base}/posts")),
        Commands::Get { id } => client.get(format!("{base}/posts/{id}")),
        Commands::Create {
            title,
            content,
            author,
        } => client
            .post(format!("{base}/posts"))
            .json(&fields(title, content, author)),
        Commands::Update {
            id,
            title,
            content,
            author,
        } => client
            .patch(format!("{base}/posts/{id}"))
            .json(&fields(title, content, author)),
        Commands::Delete { id } => client.delete(format!("{base}/posts/{id}")),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
