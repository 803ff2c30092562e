use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use timeline_core::{PostRecord, TimelineError};
use timeline_sheets::{parse_values_str, SheetRequest, DEFAULT_ENDPOINT, DEFAULT_RANGE};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Id bảng tính (mặc định đọc biến môi trường SHEET_ID).
    #[arg(long)]
    sheet_id: Option<String>,
    /// API key (mặc định đọc biến môi trường API_KEY).
    #[arg(long)]
    api_key: Option<String>,
    /// Tên sheet / vùng cần đọc.
    #[arg(long, default_value = DEFAULT_RANGE)]
    range: String,
    /// Gốc endpoint của API bảng tính.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// File JSON đầu ra.
    #[arg(short, long, default_value = "public/timeline-data.json")]
    output: PathBuf,
}

pub fn run_fetch(args: &FetchArgs) -> anyhow::Result<()> {
    let sheet_id = args
        .sheet_id
        .clone()
        .or_else(|| env::var("SHEET_ID").ok())
        .context("thiếu id bảng tính: dùng --sheet-id hoặc SHEET_ID")?;
    let api_key = args
        .api_key
        .clone()
        .or_else(|| env::var("API_KEY").ok())
        .context("thiếu API key: dùng --api-key hoặc API_KEY")?;

    let request = SheetRequest {
        endpoint: args.endpoint.clone(),
        sheet_id,
        range: args.range.clone(),
        api_key,
    };
    let url = request.url()?;
    debug!(range = %request.range, "đang tải dữ liệu bảng tính");

    let body = download(url.as_str())?;
    let count = export_body(&body, &args.output)?;

    info!(
        records = count,
        output = %args.output.display(),
        "đã tải và lưu dữ liệu timeline"
    );
    Ok(())
}

fn download(url: &str) -> anyhow::Result<String> {
    match ureq::get(url).set("Accept", "application/json").call() {
        Ok(response) => response
            .into_string()
            .context("không đọc được body phản hồi của API bảng tính"),
        Err(ureq::Error::Status(code, response)) => {
            let body = response.into_string().unwrap_or_default();
            match parse_values_str(&body) {
                Err(TimelineError::Upstream(message)) => {
                    bail!("API bảng tính báo lỗi: {message}")
                }
                _ => bail!("API bảng tính trả về HTTP {code}"),
            }
        }
        Err(err) => Err(anyhow::anyhow!("không gọi được API bảng tính: {err}")),
    }
}

/// Chuyển body thành bài đăng rồi ghi file. Body lỗi thì file đầu ra không bị đụng tới.
pub fn export_body(body: &str, output: &Path) -> anyhow::Result<usize> {
    let records = parse_values_str(body).context("dữ liệu bảng tính không hợp lệ")?;
    write_records(&records, output)?;
    Ok(records.len())
}

fn write_records(records: &[PostRecord], output: &Path) -> anyhow::Result<()> {
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("không tạo được thư mục {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(output, json).with_context(|| format!("không ghi được {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES_BODY: &str = r#"{
        "values": [
            ["ts", "date", "work", "url"],
            ["t0", "1983-05-28", "A", "https://x.com/acc1/status/1"],
            ["t1", "1983-05-28", "A", "https://x.com/acc1/status/2"]
        ]
    }"#;

    #[test]
    fn export_creates_parent_dirs_and_writes_pretty_json() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let output = dir.path().join("public/nested/timeline-data.json");

        let count = export_body(VALUES_BODY, &output).expect("xuất thành công");
        assert_eq!(count, 2);

        let written = fs::read_to_string(&output).expect("đọc file đầu ra");
        assert!(written.contains("\n  {\n    \"id\": 0,"));
        let records: Vec<PostRecord> = serde_json::from_str(&written).expect("JSON hợp lệ");
        assert_eq!(records[1].url, "https://x.com/acc1/status/2");
    }

    #[test]
    fn upstream_error_leaves_existing_output_untouched() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let output = dir.path().join("timeline-data.json");
        fs::write(&output, "[]").expect("ghi file cũ");

        let err = export_body(r#"{"error": {"message": "quota exceeded"}}"#, &output)
            .expect_err("body lỗi phải thất bại");
        assert!(format!("{err:#}").contains("quota exceeded"));
        assert_eq!(fs::read_to_string(&output).expect("đọc file"), "[]");
    }

    #[test]
    fn upstream_error_does_not_create_output() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let output = dir.path().join("out/timeline-data.json");

        assert!(export_body(r#"{"error": {"message": "quota exceeded"}}"#, &output).is_err());
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
    }
}
