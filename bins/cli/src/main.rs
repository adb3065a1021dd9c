//! Enterprise coupon tooling CLI.
//!
//! Usage:
//!   coupons upload <file>...                                         - Upload email templates
//!   coupons resolve <product_id>                                     - Enterprise of a coupon product
//!   coupons notify <site_domain> <enterprise_api_url> <email> <enterprise_id> <coupon_id>
//!                                                                    - Send the new codes email

use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coupons_core::storage::UploadRequest;
use coupons_core::{
    EnterpriseResolver, HttpEnterpriseClient, NewCodesNotifier, OpendalStore, Site,
    TemplateUploader,
};
use coupons_db::{ProductRepository, connect_with_pool};
use coupons_shared::{AppConfig, EmailService};

const USAGE: &str = "usage: coupons <upload <file>... | resolve <product_id> | notify <site_domain> <enterprise_api_url> <email> <enterprise_id> <coupon_id>>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coupons=debug,coupons_core=debug,coupons_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        Some((command, rest)) if command == "upload" => upload(&config, rest).await,
        Some((command, [product_id])) if command == "resolve" => resolve(&config, product_id).await,
        Some((command, [domain, api_url, email, enterprise_id, coupon_id]))
            if command == "notify" =>
        {
            let site = Site::new(domain.as_str(), api_url.as_str());
            notify(&config, &site, email, enterprise_id, coupon_id).await
        }
        _ => bail!(USAGE),
    }
}

async fn upload(config: &AppConfig, paths: &[String]) -> anyhow::Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {path}"))?;
        let name = std::path::Path::new(path)
            .file_name()
            .map_or_else(|| path.clone(), |n| n.to_string_lossy().into_owned());
        files.push(UploadRequest {
            name,
            size: contents.len() as u64,
            contents,
        });
    }

    let store = OpendalStore::from_provider(config.template_storage.provider.clone())?;
    info!(
        provider = store.provider_name(),
        bucket = %config.template_storage.provider.bucket(),
        "Template storage configured"
    );

    let uploaded = TemplateUploader::new(Arc::new(store))
        .upload_files(Some(files.as_slice()))
        .await?;

    println!("{}", serde_json::to_string_pretty(&uploaded)?);
    Ok(())
}

async fn resolve(config: &AppConfig, product_id: &str) -> anyhow::Result<()> {
    let product_id: i32 = product_id
        .parse()
        .with_context(|| format!("Invalid product id: {product_id}"))?;

    let db = connect_with_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Connected to database");

    let resolver = EnterpriseResolver::new(Arc::new(ProductRepository::new(db)));
    match resolver.get_enterprise_from_product(product_id).await? {
        Some(enterprise_id) => println!("{enterprise_id}"),
        None => info!(product_id, "No such coupon product"),
    }
    Ok(())
}

async fn notify(
    config: &AppConfig,
    site: &Site,
    email_address: &str,
    enterprise_id: &str,
    coupon_id: &str,
) -> anyhow::Result<()> {
    let email_service = EmailService::new(config.email.clone())?;
    info!(
        smtp_host = %config.email.smtp_host,
        smtp_port = %config.email.smtp_port,
        "Email service configured"
    );
    let enterprise = HttpEnterpriseClient::new(&config.enterprise_api)?;

    let notifier = NewCodesNotifier::new(
        Arc::new(email_service),
        Arc::new(enterprise),
        config.new_codes_email.clone(),
    );

    let outcome = notifier
        .send_new_codes_notification(site, email_address, enterprise_id, coupon_id)
        .await?;

    println!("{outcome:?}");
    Ok(())
}
