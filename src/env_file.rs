use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncWriteExt;

/// Whether the env file existed before patching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Created,
    Updated,
}

/// Ensures `key` is assigned `value` in the env file at `file_path`.
///
/// Every line whose prefix is exactly `KEY=` is replaced with the new
/// assignment; all other lines keep their position. When no line matches,
/// the assignment is appended after a blank separator line. A missing file
/// is created with the assignment as its only line. The rewrite is a full
/// overwrite in place, not an atomic temp-file swap.
pub async fn set_env_key(file_path: &str, key: &str, value: &str) -> anyhow::Result<PatchOutcome> {
    let assignment = format!("{}={}", key, value);

    if !Path::new(file_path).exists() {
        tokio::fs::write(file_path, format!("{assignment}\n"))
            .await
            .context("Failed to create env file")?;
        return Ok(PatchOutcome::Created);
    }

    let content = tokio::fs::read_to_string(file_path)
        .await
        .context("Failed to read env file")?;

    // Exact prefix test, so KEY_OTHER= never matches KEY. Non-matching
    // lines keep their original bytes, line endings included.
    let prefix = format!("{}=", key);
    let mut output = String::with_capacity(content.len() + assignment.len() + 2);
    let mut found = false;
    for line in content.split_inclusive('\n') {
        if line.starts_with(&prefix) {
            output.push_str(&assignment);
            output.push('\n');
            found = true;
        } else {
            output.push_str(line);
        }
    }
    if !found {
        output.push('\n');
        output.push_str(&assignment);
        output.push('\n');
    }

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(file_path)
        .await
        .context("Failed to open env file for rewrite")?;
    file.write_all(output.as_bytes())
        .await
        .context("Failed to write env file")?;
    // Tokio files buffer writes in background tasks; flush before drop
    // or the truncated file may never receive the rewritten content.
    file.flush()
        .await
        .context("Failed to flush env file")?;

    Ok(PatchOutcome::Updated)
}
