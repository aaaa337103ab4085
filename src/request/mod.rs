//! Writes request documents and the batch script that fetches them.
//!
//! Nothing is rolled back on failure: documents and script lines written
//! before an error stay on disk, and a document that failed mid-write is left
//! truncated. Existing request files with the same name are overwritten.

pub mod document;
pub mod script;

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    reading::CalendarDate,
};

pub use document::{RequestDocument, StationCode};
pub use script::DEFAULT_SCRIPT_NAME;

/// State for one generation run.
///
/// The script is truncated and given its header by the first `emit` of the
/// run; later calls only append to it.
pub struct RunContext {
    output_dir: PathBuf,
    script_name: String,
    header_written: bool,
    documents_written: usize,
    progress: ProgressBar,
}

impl RunContext {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        RunContext {
            output_dir: output_dir.into(),
            script_name: DEFAULT_SCRIPT_NAME.to_string(),
            header_written: false,
            documents_written: 0,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = script_name.into();
        self
    }

    /// Advances `progress` once per request written.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(&self.script_name)
    }

    pub fn documents_written(&self) -> usize {
        self.documents_written
    }

    /// Writes one request per date for `station` and appends the matching
    /// client invocations to the script.
    pub fn emit(&mut self, dates: &[CalendarDate], station: &StationCode) -> Result<()> {
        let script_path = self.script_path();
        let mut script = self.open_script(&script_path)?;

        self.progress
            .suspend(|| info!(station = %station, dates = dates.len(), "Writing requests"));

        for date in dates {
            let doc = RequestDocument::new(station, *date);
            let doc_path = self.output_dir.join(doc.file_name());

            write_document(&doc, &doc_path)?;
            debug!(path = %doc_path.display(), "Request written");

            script
                .write_all(script::invocation(&doc).as_bytes())
                .map_err(|e| Error::Write(script_path.clone(), e))?;

            self.documents_written += 1;
            self.progress.inc(1);
        }

        Ok(())
    }

    fn open_script(&mut self, script_path: &Path) -> Result<File> {
        if self.header_written {
            return OpenOptions::new()
                .append(true)
                .open(script_path)
                .map_err(|e| Error::Write(script_path.to_path_buf(), e));
        }

        let mut script =
            File::create(script_path).map_err(|e| Error::Write(script_path.to_path_buf(), e))?;
        script
            .write_all(script::HEADER.as_bytes())
            .map_err(|e| Error::Write(script_path.to_path_buf(), e))?;
        self.header_written = true;

        Ok(script)
    }
}

fn write_document(doc: &RequestDocument, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::Write(path.to_path_buf(), e))?;
    file.write_all(doc.render().as_bytes())
        .map_err(|e| Error::Write(path.to_path_buf(), e))?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn dates(values: &[&str]) -> Vec<CalendarDate> {
        values.iter().map(|v| v.parse().unwrap()).collect()
    }

    fn script_lines(ctx: &RunContext) -> Vec<String> {
        fs::read_to_string(ctx.script_path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn should_write_request_and_script_line() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path());

        ctx.emit(&dates(&["2024/04/15"]), &"i01ar".into()).unwrap();

        let request = fs::read_to_string(dir.path().join("I01AR_2024_04_15.req")).unwrap();
        assert_eq!(
            request,
            "begin ims2.0\nmsg_type request\nmsg_id mseed_i01ar\n\
             time 2024/04/15 00:00:00 to 2024/04/15 23:59:59\nsta_list I01AR\n\
             chan_list BDF\nwaveform ims2.0:ms_st2_512\nstop\n"
        );

        let script = fs::read_to_string(dir.path().join("run_nmsclient.sh")).unwrap();
        assert_eq!(
            script,
            "#!/bin/bash\n\nnms_client.sh I01AR_2024_04_15.req -f I01AR_2024_04_15.mseed\n"
        );
        assert_eq!(ctx.documents_written(), 1);
    }

    #[test]
    fn should_write_header_for_empty_dates() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path());

        ctx.emit(&[], &"x".into()).unwrap();

        let script = fs::read_to_string(ctx.script_path()).unwrap();
        assert_eq!(script, "#!/bin/bash\n\n");

        let requests = fs::read_dir(dir.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == "req")
            })
            .count();
        assert_eq!(requests, 0);
    }

    #[test]
    fn should_append_in_call_order() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path());
        let days = dates(&["2023/01/01"]);

        ctx.emit(&days, &"a".into()).unwrap();
        ctx.emit(&days, &"b".into()).unwrap();

        assert!(dir.path().join("A_2023_01_01.req").exists());
        assert!(dir.path().join("B_2023_01_01.req").exists());
        assert_eq!(
            script_lines(&ctx),
            vec![
                "#!/bin/bash",
                "",
                "nms_client.sh A_2023_01_01.req -f A_2023_01_01.mseed",
                "nms_client.sh B_2023_01_01.req -f B_2023_01_01.mseed",
            ]
        );
    }

    #[test]
    fn should_keep_one_line_per_pair() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path());
        let days = dates(&["2024/04/15", "2024/04/16", "2024/04/17"]);
        let stations: Vec<StationCode> = ["i01ar", "i11cv"].into_iter().map(Into::into).collect();

        for station in &stations {
            ctx.emit(&days, station).unwrap();
        }

        let lines = script_lines(&ctx);
        assert_eq!(&lines[..2], &["#!/bin/bash", ""]);
        assert_eq!(lines.len() - 2, 6);
        assert_eq!(ctx.documents_written(), 6);
        assert_eq!(
            lines[2],
            "nms_client.sh I01AR_2024_04_15.req -f I01AR_2024_04_15.mseed"
        );
        assert_eq!(
            lines[7],
            "nms_client.sh I11CV_2024_04_17.req -f I11CV_2024_04_17.mseed"
        );
    }

    #[test]
    fn should_truncate_script_on_new_run() {
        let dir = TempDir::new().unwrap();
        let days = dates(&["2024/04/15"]);

        let mut first = RunContext::new(dir.path());
        first.emit(&days, &"a".into()).unwrap();
        first.emit(&days, &"b".into()).unwrap();

        let mut second = RunContext::new(dir.path());
        second.emit(&days, &"c".into()).unwrap();

        assert_eq!(
            script_lines(&second),
            vec![
                "#!/bin/bash",
                "",
                "nms_client.sh C_2024_04_15.req -f C_2024_04_15.mseed",
            ]
        );
    }

    #[test]
    fn should_overwrite_existing_request() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("I01AR_2024_04_15.req");
        fs::write(&path, "stale contents that are longer than the request itself").unwrap();

        let mut ctx = RunContext::new(dir.path());
        ctx.emit(&dates(&["2024/04/15"]), &"I01AR".into()).unwrap();

        let request = fs::read_to_string(&path).unwrap();
        assert!(request.starts_with("begin ims2.0\n"));
        assert!(request.ends_with("stop\n"));
    }

    #[test]
    fn should_advance_progress_per_request() {
        let dir = TempDir::new().unwrap();
        let progress = ProgressBar::hidden();
        let mut ctx = RunContext::new(dir.path()).with_progress(progress.clone());

        ctx.emit(&dates(&["2024/04/15", "2024/04/16"]), &"a".into())
            .unwrap();

        assert_eq!(progress.position(), 2);
    }

    #[test]
    fn should_use_custom_script_name() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path()).with_script_name("fetch.sh");

        ctx.emit(&[], &"x".into()).unwrap();

        assert!(dir.path().join("fetch.sh").exists());
        assert!(!dir.path().join("run_nmsclient.sh").exists());
    }

    #[test]
    fn should_fail_when_output_dir_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let mut ctx = RunContext::new(&missing);

        let err = ctx.emit(&dates(&["2024/04/15"]), &"a".into()).unwrap_err();

        assert!(matches!(err, Error::Write(p, _) if p == missing.join("run_nmsclient.sh")));
    }

    #[test]
    fn should_keep_earlier_output_after_failure() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(dir.path());
        let days = dates(&["2024/04/15"]);

        ctx.emit(&days, &"a".into()).unwrap();
        let err = ctx.emit(&days, &"no/such/dir".into()).unwrap_err();

        assert!(matches!(err, Error::Write(..)));
        assert!(dir.path().join("A_2024_04_15.req").exists());
        assert_eq!(script_lines(&ctx).len(), 3);
    }
}
