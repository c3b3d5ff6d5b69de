// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! favmark CLI: log in to the store API, browse products, and mark favorites.

use anyhow::Context;
use clap::{Parser, Subcommand};
use favmark::config::Config;
use favmark::models::Credentials;
use favmark::{App, Toggle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "favmark", about = "Store API client for products and favorites")]
struct Cli {
    /// Base URL of the store API.
    #[arg(long, env = "FAVMARK_API_URL")]
    api_url: Option<String>,

    /// Path of the persisted-token file.
    #[arg(long, env = "FAVMARK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the issued token.
    Login { username: String, password: String },
    /// Create an account (does not log in).
    Register { username: String, password: String },
    /// Clear the persisted token.
    Logout,
    /// Show the identity behind the persisted token, if it still verifies.
    Whoami,
    /// List all products; favorites are starred.
    Products,
    /// List the current user's favorite records.
    Favorites,
    /// Mark a product as favorite.
    Add { product_id: i64 },
    /// Unmark a favorite by its record id.
    Remove { favorite_id: i64 },
    /// Flip a product's favorite status.
    Toggle { product_id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(token_file) = cli.token_file {
        config.token_path = token_file;
    }

    let mut app = App::new(&config);

    match cli.command {
        Command::Login { username, password } => {
            let credentials = Credentials { username, password };
            app.login(&credentials)
                .await
                .context("login failed (wrong credentials?)")?;
            match app.session.identity() {
                Some(user) => println!("logged in as {} (id {})", user.username, user.id),
                None => anyhow::bail!("login succeeded but the issued token did not verify"),
            }
        }
        Command::Register { username, password } => {
            let credentials = Credentials { username, password };
            app.register(&credentials)
                .await
                .context("registration failed")?;
            println!("registered; log in to start a session");
        }
        Command::Logout => {
            app.logout().await?;
            println!("logged out");
        }
        Command::Whoami => {
            app.session.restore(&app.api).await?;
            match app.session.identity() {
                Some(user) => println!("{} (id {})", user.username, user.id),
                None => println!("not logged in"),
            }
        }
        Command::Products => {
            app.init().await?;
            for product in app.catalog.products() {
                match app.favorites.get(product.id) {
                    Some(favorite) => {
                        println!("* {:>4}  {}  (favorite {})", product.id, product.name, favorite.id);
                    }
                    None => println!("  {:>4}  {}", product.id, product.name),
                }
            }
        }
        Command::Favorites => {
            app.init().await?;
            if app.session.identity().is_none() {
                println!("not logged in");
                return Ok(());
            }
            for product in favorite_products(&app) {
                println!("{}", product);
            }
        }
        Command::Add { product_id } => {
            sync_session(&mut app).await?;
            match app.favorites.add(&app.api, &app.session, product_id).await {
                Ok(favorite) => println!("favorited product {} (favorite {})", product_id, favorite.id),
                Err(_) => println!("no change"),
            }
        }
        Command::Remove { favorite_id } => {
            sync_session(&mut app).await?;
            match app
                .favorites
                .remove(&app.api, &app.session, favorite_id)
                .await
            {
                Ok(()) => println!("removed favorite {}", favorite_id),
                Err(_) => println!("no change"),
            }
        }
        Command::Toggle { product_id } => {
            sync_session(&mut app).await?;
            match app.toggle_favorite(product_id).await {
                Ok(Toggle::Added(id)) => println!("favorited product {} (favorite {})", product_id, id),
                Ok(Toggle::Removed(id)) => println!("removed favorite {}", id),
                Err(_) => println!("no change"),
            }
        }
    }

    Ok(())
}

/// Restore the session and load favorites for it; bail if nobody is
/// logged in, since every mutation is scoped to an identity.
async fn sync_session(app: &mut App) -> anyhow::Result<()> {
    app.session.restore(&app.api).await?;
    if app.session.identity().is_none() {
        anyhow::bail!("not logged in; run `favmark login` first");
    }
    app.favorites.reload(&app.api, &app.session).await;
    Ok(())
}

/// Favorite rows as "favorite_id  product_id" lines.
fn favorite_products(app: &App) -> Vec<String> {
    let mut rows: Vec<String> = app
        .catalog
        .products()
        .iter()
        .filter_map(|p| {
            app.favorites
                .get(p.id)
                .map(|f| format!("{:>4}  product {}  {}", f.id, p.id, p.name))
        })
        .collect();
    rows.sort();
    rows
}

/// Initialize logging to stderr, filtered by RUST_LOG (default: warn).
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(format)
        .init();
}
