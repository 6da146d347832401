use opsboard::board::{self, BoardFilter};
use opsboard::config;
use opsboard::core::work_item::{WorkItem, WorkPriority, WorkStatus};
use opsboard::sync::api::ApiClient;
use opsboard::sync::{load_profile_snapshot, load_snapshot};

fn print_item(item: &WorkItem) {
    println!(
        "  [{}/{}] {} ({})",
        item.priority.as_keyword(),
        item.status.as_keyword(),
        item.title,
        item.assignee.as_deref().unwrap_or("unassigned"),
    );
    if let Some(notes) = &item.notes {
        println!("      {}", notes);
    }
}

#[tokio::main]
async fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("opsboard".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    // Parse CLI flags
    let args: Vec<String> = std::env::args().collect();
    let flag = |name: &str| -> Option<String> {
        args.iter()
            .find_map(|a| a.strip_prefix(name).map(|v| v.to_string()))
    };

    let mut filter = BoardFilter::default();
    if let Some(v) = flag("--status=") {
        match WorkStatus::from_keyword(&v) {
            Some(s) => filter.status = Some(s),
            None => {
                println!("Unknown status \"{}\". One of: backlog, in_progress, done", v);
                return;
            }
        }
    }
    if let Some(v) = flag("--priority=") {
        match WorkPriority::from_keyword(&v) {
            Some(p) => filter.priority = Some(p),
            None => {
                println!("Unknown priority \"{}\". One of: low, medium, high, urgent", v);
                return;
            }
        }
    }

    let config = config::get();
    let client = match ApiClient::new(&config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            println!("Client error: {}", e);
            return;
        }
    };

    if let Some(key) = flag("--profile=") {
        // Single-profile detail view, unfiltered
        let snapshot = match load_profile_snapshot(&client, &key).await {
            Ok(s) => s,
            Err(e) => {
                println!("Failed to load profile {}: {}", key, e);
                return;
            }
        };

        println!("=== {} ===", snapshot.profile.label);
        if let Some(desc) = &snapshot.profile.description {
            println!("{}", desc);
        }
        println!();

        if snapshot.work_items.is_empty() {
            println!("No work items yet for this profile.");
        } else {
            for item in &snapshot.work_items {
                print_item(item);
            }
        }
        return;
    }

    // Cross-profile board
    let snapshot = match load_snapshot(&client).await {
        Ok(s) => s,
        Err(e) => {
            println!("Failed to load board: {}", e);
            return;
        }
    };

    println!("=== Work items across profiles ===\n");

    let view = board::board_view(&snapshot.profiles, &snapshot.work_items, filter);
    for lane in &view.lanes {
        println!(
            "--- {} {} ({}) ---",
            lane.profile.key.to_uppercase(),
            lane.profile.label,
            lane.items.len()
        );
        if lane.items.is_empty() {
            println!("  No work items matching filters.");
        } else {
            for item in &lane.items {
                print_item(item);
            }
        }
        println!();
    }

    for lane in &view.orphans {
        println!("--- {} (unknown profile, {}) ---", lane.profile_key, lane.items.len());
        for item in &lane.items {
            print_item(item);
        }
        println!();
    }
}
