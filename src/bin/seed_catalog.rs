use anyhow::{bail, Context, Result};
use odop_client::application::ports::marketplace_gateway::{ImageUpload, MarketplaceGateway};
use odop_client::domain::entities::NewProduct;
use odop_client::infrastructure::api::rest_client::RestApiClient;
use odop_client::shared::config::AppConfig;
use rand::Rng;
use std::env;
use tracing::info;

const DEFAULT_COUNT: usize = 12;

/// Smallest valid PNG (1x1, transparent), used as the product image part.
const PLACEHOLDER_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const SAMPLE_PRODUCTS: [(&str, &str, bool); 8] = [
    ("Madhubani painting", "Madhubani", true),
    ("Banarasi silk saree", "Varanasi", true),
    ("Blue pottery vase", "Jaipur", true),
    ("Channapatna wooden toy", "Ramanagara", true),
    ("Dhokra brass figurine", "Bastar", false),
    ("Pashmina shawl", "Srinagar", true),
    ("Terracotta lamp", "Bishnupur", false),
    ("Bidriware jewellery box", "Bidar", true),
];

#[derive(Debug, Clone)]
struct SeedOptions {
    count: usize,
    tag: String,
    email: String,
    password: String,
}

fn usage() -> &'static str {
    "Usage: seed_catalog [--count <n>] [--tag <suffix>]\n\
     Credentials come from ODOP_SEED_EMAIL / ODOP_SEED_PASSWORD; the\n\
     backend base URL from ODOP_API_BASE_URL."
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<SeedOptions> {
    let mut count = DEFAULT_COUNT;
    // A fresh tag per run keeps repeated seeds from colliding on name.
    let mut tag = uuid::Uuid::new_v4().to_string()[..8].to_string();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => {
                let value = args.next().context(usage())?;
                count = value.parse().context("--count expects a number")?;
            }
            "--tag" => {
                tag = args.next().context(usage())?;
            }
            "--help" | "-h" => bail!(usage()),
            other => bail!("Unknown argument '{other}'\n{}", usage()),
        }
    }

    let email = env::var("ODOP_SEED_EMAIL").unwrap_or_else(|_| "vendor@odop.local".to_string());
    let password = env::var("ODOP_SEED_PASSWORD").unwrap_or_else(|_| "vendor123".to_string());

    Ok(SeedOptions {
        count,
        tag,
        email,
        password,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    odop_client::shared::logging::init("seed_catalog");

    let options = parse_args(env::args().skip(1))?;
    let config = AppConfig::from_env();
    let client = RestApiClient::new(&config.api).context("failed to build API client")?;

    let session = client
        .login(&options.email, &options.password, "vendor")
        .await
        .context("vendor login failed")?;
    info!(account_id = %session.account_id, "logged in");

    let mut rng = rand::thread_rng();
    let mut created = 0usize;
    for index in 0..options.count {
        let (name, district, gi_tagged) = SAMPLE_PRODUCTS[index % SAMPLE_PRODUCTS.len()];
        let product = NewProduct {
            name: format!("{name} [{}-{index}]", options.tag),
            description: format!("Handcrafted {name} from {district}."),
            price: rng.gen_range(199..4999) as f64,
            district: district.to_string(),
            gi_tagged,
            stock: rng.gen_range(1..50),
        };
        let image = ImageUpload {
            file_name: format!("{}-{index}.png", options.tag),
            content_type: "image/png".to_string(),
            bytes: PLACEHOLDER_PNG.to_vec(),
        };

        match client.create_product(&product, Some(image)).await {
            Ok(stored) => {
                created += 1;
                info!(product_id = %stored.id, name = %stored.name, "seeded");
            }
            Err(err) => {
                tracing::warn!(name = %product.name, error = %err, "seed failed");
            }
        }
    }

    println!("Seeded {created}/{} products (tag {})", options.count, options.tag);
    Ok(())
}
