/// User-facing activity log consumed by the presentation layer.
///
/// Batch ingestion and store mutations append here; entries carry a
/// `[HH:MM:SS]` timestamp so the UI can show them verbatim.
#[derive(Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<String>,
}

impl ActivityLog {
    /// Appends a message prefixed with the current wall-clock time.
    pub fn add_entry(&mut self, message: String) {
        let duration = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        let secs = duration.as_secs();
        let ts = format!(
            "[{:02}:{:02}:{:02}]",
            (secs % 86400) / 3600,
            (secs % 3600) / 60,
            secs % 60
        );

        self.entries.push(format!("{ts} :: {message}"));
    }
}
