use std::io::{self, Write};

use chrono::Local;
use shelfwatch_core::{DashboardViewModel, QueuePhase, QueueRowView, StatsView};

/// Renders the dashboard as plain text lines. Pure so it can be asserted on.
pub fn render(view: &DashboardViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let mut header = format!("Shelfwatch: processing queue ({})", view.item_count);
    if view.scanning {
        header.push_str("  [scanning...]");
    }
    lines.push(header);

    if view.pending_count > 0 {
        lines.push(format!("Processing {} new files...", view.pending_count));
    }

    if let Some(stats) = view.stats.snapshot() {
        let mut parts = Vec::new();
        if stats.tracked_files_count > 0 {
            parts.push(format!("Stabilizing: {}", stats.tracked_files_count));
        }
        if stats.groups_count > 0 {
            parts.push(format!("Grouping: {}", stats.groups_count));
        }
        if matches!(view.stats, StatsView::Stale(_)) {
            parts.push("(stale)".to_string());
        }
        if !parts.is_empty() {
            lines.push(parts.join("  "));
        }
    }

    if let Some(message) = &view.connection.message {
        lines.push(format!("!! {message}"));
    }

    match view.phase {
        QueuePhase::Loading => lines.push("Loading...".to_string()),
        QueuePhase::AllCaughtUp => {
            lines.push("All caught up! No items pending review.".to_string());
        }
        QueuePhase::Ready => {
            for row in &view.items {
                lines.push(render_row(row));
            }
        }
    }

    lines.push("keys: [r]escan  [u]pdate  [q]uit".to_string());
    lines
}

fn render_row(row: &QueueRowView) -> String {
    let name = match (&row.title, &row.author) {
        (Some(title), Some(author)) => format!("{title} - {author}"),
        (Some(title), None) => title.clone(),
        _ => row.dirpath.clone(),
    };
    format!(
        "  [{:<10}] {}  ({} files, id {})",
        row.status.label(),
        name,
        row.file_count,
        row.id
    )
}

/// Clears the terminal and prints the current view with a timestamp footer.
pub fn paint(view: &DashboardViewModel) {
    let mut out = String::from("\x1b[2J\x1b[H");
    for line in render(view) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("updated {}\n", Local::now().format("%H:%M:%S")));
    print!("{out}");
    let _ = io::stdout().flush();
}
