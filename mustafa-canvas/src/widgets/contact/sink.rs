use std::path::{Path, PathBuf};

use super::errors::ContactError;
use super::model::Inquiry;

/// Destination for validated inquiries.
pub(crate) trait InquirySink: Send + Sync {
    fn deliver(&self, inquiry: &Inquiry) -> Result<(), ContactError>;
}

/// Appends inquiries to a JSON array on disk.
#[derive(Debug, Clone)]
pub(crate) struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl InquirySink for OutboxSink {
    fn deliver(&self, inquiry: &Inquiry) -> Result<(), ContactError> {
        let mut outbox = load_outbox(&self.path)?;
        outbox.push(inquiry.clone());
        save_outbox(&self.path, &outbox)
    }
}

/// Read the stored inquiries; a missing file is an empty outbox.
pub(crate) fn load_outbox(path: &Path) -> Result<Vec<Inquiry>, ContactError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Vec::new());
        },
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Replace the outbox atomically.
fn save_outbox(path: &Path, outbox: &[Inquiry]) -> Result<(), ContactError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(outbox)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use chrono::{TimeZone, Utc};

    use super::{InquirySink, OutboxSink, load_outbox};
    use crate::widgets::contact::errors::ContactError;
    use crate::widgets::contact::model::Inquiry;

    fn inquiry(name: &str) -> Inquiry {
        Inquiry {
            name: String::from(name),
            email: String::from("ada@example.com"),
            subject: String::from("Commission"),
            message: String::from("Hello"),
            received_at: Utc
                .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
                .single()
                .expect("timestamp should be valid"),
        }
    }

    #[test]
    fn given_missing_outbox_when_delivering_twice_then_both_are_appended() {
        let root = test_temp_dir("append");
        let sink = OutboxSink::new(root.join("nested").join("inquiries.json"));

        sink.deliver(&inquiry("Ada")).expect("first delivery");
        sink.deliver(&inquiry("Grace")).expect("second delivery");

        let stored = load_outbox(sink.path()).expect("outbox should load");
        assert_eq!(stored, vec![inquiry("Ada"), inquiry("Grace")]);
        assert!(!sink.path().with_extension("json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_corrupt_outbox_when_delivering_then_json_error_and_file_kept() {
        let root = test_temp_dir("corrupt");
        let path = root.join("inquiries.json");
        fs::write(&path, b"{ not json").expect("fixture should be written");
        let sink = OutboxSink::new(&path);

        let err = sink
            .deliver(&inquiry("Ada"))
            .expect_err("corrupt outbox should fail");

        assert!(matches!(err, ContactError::Json(_)));
        assert_eq!(
            fs::read(&path).expect("fixture should remain"),
            b"{ not json"
        );

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "mustafa-canvas-outbox-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
