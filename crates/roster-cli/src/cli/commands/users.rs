//! User directory listing.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use roster_core::config::{self, Config};
use roster_core::users::{User, UsersClient};

pub async fn run(config: &Config, url_override: Option<String>) -> Result<()> {
    let client = match url_override {
        Some(url) => {
            config::check_http_url("--url", &url)?;
            UsersClient::new(url, config.request_timeout())
        }
        None => UsersClient::from_config(config),
    };

    let users = client
        .fetch_users()
        .await
        .with_context(|| format!("fetch users from {}", client.url()))?;
    tracing::info!(url = %client.url(), count = users.len(), "users fetched");

    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    println!("{}", users_table(&users));
    Ok(())
}

fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Email"]);
    for user in users {
        table.add_row(vec![user.id.to_string(), user.name.clone(), user.email.clone()]);
    }
    table
}
