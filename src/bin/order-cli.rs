use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "order-cli")]
#[command(about = "Management CLI for the Order Gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Fetch the configured WhatsApp number
    Number,
    /// Submit a test order and print the wa.me link
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        /// Cart items as "title=price" pairs
        #[arg(long)]
        item: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Number => {
            let res = client
                .get(format!("{}/get_whatsapp", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Submit {
            name,
            phone,
            address,
            item,
        } => {
            let cart: Vec<Value> = item
                .iter()
                .map(|pair| match pair.split_once('=') {
                    Some((title, price)) => json!({
                        "title": title,
                        "price": price.parse::<f64>().unwrap_or(0.0),
                    }),
                    None => json!({ "title": pair }),
                })
                .collect();

            let res = client
                .post(format!("{}/submit_order", cli.url))
                .json(&json!({
                    "name": name,
                    "phone": phone,
                    "address": address,
                    "cart": cart,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
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
