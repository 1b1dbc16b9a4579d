use std::path::PathBuf;

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/statfront"))
}

pub fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("settings.toml"))
}

fn audit_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("audit.jsonl"))
}

/// Appends one diagnostic event to the audit log. Best effort: the log is
/// operator-facing, so failures never surface to the visitor flow.
pub fn audit(action: &str, data: serde_json::Value) {
    let Ok(path) = audit_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
