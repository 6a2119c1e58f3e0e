//! CSV file row appender.
//!
//! One file per survey. The header is written only by the append that creates
//! the file (`create_new`), so an existing file never gets a second header.
//! Each append opens, writes, and closes the file within the call. There is
//! no locking between concurrent writers: only one of them can create the
//! file, but another may append its row before the creator's header lands.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use bridgeai_core::appender::{AppendOutcome, RowAppender};
use bridgeai_types::error::StorageError;

const LINE_TERMINATOR: &str = "\r\n";

/// Appends rows to a CSV file on local disk.
#[derive(Debug, Clone)]
pub struct CsvFileAppender {
    path: PathBuf,
}

impl CsvFileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Open for append, reporting whether this call created the file.
    async fn open(&self) -> Result<(File, bool), StorageError> {
        match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => Ok((file, true)),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                let file = OpenOptions::new()
                    .append(true)
                    .open(&self.path)
                    .await
                    .map_err(|e| self.write_error(e))?;
                Ok((file, false))
            }
            Err(err) => Err(self.write_error(err)),
        }
    }
}

impl RowAppender for CsvFileAppender {
    async fn append(
        &self,
        header: &[String],
        row: &[String],
    ) -> Result<AppendOutcome, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let (mut file, header_written) = self.open().await?;

        let mut buf = String::new();
        if header_written {
            tracing::debug!(path = %self.path.display(), "creating output file with header");
            buf.push_str(&encode_record(header));
        }
        buf.push_str(&encode_record(row));

        file.write_all(buf.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;

        Ok(AppendOutcome {
            path: self.path.clone(),
            header_written,
        })
    }
}

/// Quote a field only when it contains a delimiter, quote, or line break.
fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One CSV line including the terminator.
pub fn encode_record(fields: &[String]) -> String {
    let mut line = fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str(LINE_TERMINATOR);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_encode_plain_fields() {
        assert_eq!(encode_record(&strings(&["a", "b c", ""])), "a,b c,\r\n");
    }

    #[test]
    fn test_encode_quotes_when_needed() {
        assert_eq!(
            encode_record(&strings(&["Insurance (Home, Auto, Life, Health)", "say \"hi\"", "two\nlines"])),
            "\"Insurance (Home, Auto, Life, Health)\",\"say \"\"hi\"\"\",\"two\nlines\"\r\n"
        );
    }

    #[test]
    fn test_multi_select_delimiter_needs_no_quoting() {
        assert_eq!(
            encode_record(&strings(&["Toronto/GTA; Vancouver/Lower Mainland"])),
            "Toronto/GTA; Vancouver/Lower Mainland\r\n"
        );
    }

    #[tokio::test]
    async fn test_header_written_only_on_creation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let appender = CsvFileAppender::new(&path);
        let header = strings(&["timestamp", "q1"]);

        let first = appender.append(&header, &strings(&["t1", "a"])).await.unwrap();
        let second = appender.append(&header, &strings(&["t2", "b"])).await.unwrap();

        assert!(first.header_written);
        assert!(!second.header_written);
        assert_eq!(second.path, path);

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "timestamp,q1\r\nt1,a\r\nt2,b\r\n");
    }

    #[tokio::test]
    async fn test_existing_file_gets_no_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        tokio::fs::write(&path, "").await.unwrap();

        let appender = CsvFileAppender::new(&path);
        let outcome = appender
            .append(&strings(&["timestamp"]), &strings(&["t1"]))
            .await
            .unwrap();

        assert!(!outcome.header_written);
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "t1\r\n");
    }

    #[tokio::test]
    async fn test_unwritable_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "file, not dir").await.unwrap();

        let appender = CsvFileAppender::new(blocker.join("out.csv"));
        let err = appender
            .append(&strings(&["timestamp"]), &strings(&["t1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::CreateDir { .. }));
    }

    #[tokio::test]
    async fn test_business_submission_lands_as_aligned_row() {
        use bridgeai_core::service::SurveyService;
        use bridgeai_types::answer::Answer;
        use bridgeai_types::submission::Submission;
        use bridgeai_types::survey::SurveyId;

        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("business_survey_responses.csv");
        let service = SurveyService::new(CsvFileAppender::new(&path));

        let mut submission = Submission::new(SurveyId::Business);
        submission.set("industry", Answer::Choice("Other".into()));
        submission.set("industry_other", Answer::Text(String::new()));
        submission.set(
            "cities",
            Answer::Choices(vec!["Toronto/GTA".into(), "Vancouver/Lower Mainland".into()]),
        );
        submission.set("difficulty", Answer::Rating(4));

        service.submit(&submission).await.unwrap();
        service.submit(&submission).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = content.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,industry,industry_other,cities,"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("timestamp")).count(), 1);

        let header_width = lines[0].split(',').count();
        for row in &lines[1..] {
            // No field in this submission needs quoting, so a plain split is exact.
            let cells: Vec<&str> = row.split(',').collect();
            assert_eq!(cells.len(), header_width);
            assert_eq!(cells[1], "Other");
            assert_eq!(cells[2], "");
            assert_eq!(cells[3], "Toronto/GTA; Vancouver/Lower Mainland");
        }
    }
}
