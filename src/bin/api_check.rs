use std::collections::HashSet;

use opsboard::board;
use opsboard::sync::api::ApiClient;
use opsboard::sync::WorkItemService;

#[tokio::main]
async fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("opsboard-api-check".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let config = opsboard::config::get();

    println!("=== Remote Service Check ===\n");
    println!("--- API: {} ---", config.api_base_url);

    let client = match ApiClient::new(&config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            println!("  Client error: {}", e);
            return;
        }
    };

    match client.health().await {
        Ok(health) => {
            println!("  Health: {} ({} {})", health.status, health.service, health.version);
        }
        Err(e) => {
            println!("  Health check failed: {}", e);
            return;
        }
    }

    let profiles = match client.list_profiles().await {
        Ok(p) => p,
        Err(e) => {
            println!("  Error listing profiles: {}", e);
            return;
        }
    };
    let items = match client.list_work_items(None).await {
        Ok(i) => i,
        Err(e) => {
            println!("  Error listing work items: {}", e);
            return;
        }
    };

    println!("\nRemote: {} profiles, {} work items\n", profiles.len(), items.len());

    // Compare the full collection's per-profile slices against the
    // filtered-query results the detail pages use.
    let mut mismatches = 0;
    for profile in &profiles {
        let local = board::profile_items(&items, &profile.key);
        match client.list_work_items(Some(&profile.key)).await {
            Ok(scoped) => {
                let marker = if scoped.len() == local.len() { "" } else { "  MISMATCH" };
                if scoped.len() != local.len() {
                    mismatches += 1;
                }
                println!(
                    "  {}: {} items (filtered query: {}){}",
                    profile.key,
                    local.len(),
                    scoped.len(),
                    marker
                );
            }
            Err(e) => {
                println!("  {}: error on filtered query: {}", profile.key, e);
            }
        }
    }

    // Items pointing at no known profile
    let known: HashSet<&str> = profiles.iter().map(|p| p.key.as_str()).collect();
    let orphaned: Vec<_> = items
        .iter()
        .filter(|i| !known.contains(i.profile_key.as_str()))
        .collect();
    if !orphaned.is_empty() {
        println!("\n  ORPHANED ITEMS ({}):", orphaned.len());
        for item in &orphaned {
            println!("    [{}] {} ({})", item.profile_key, item.title, item.id);
        }
    }

    if mismatches == 0 && orphaned.is_empty() {
        println!("\nAll consistent!");
    }

    println!("\n=== Done ===");
}
