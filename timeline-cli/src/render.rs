use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use timeline_core::{
    build_scene, compute_layout, group_posts, sample_textures, AccountTextures, PostRecord,
    TimelineConfig,
};
use tracing::info;

use crate::PackingArg;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File JSON bài đăng `[{id, date, work, url}]`.
    #[arg(short, long)]
    input: PathBuf,
    /// File SVG đầu ra; bỏ trống thì in ra stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// File JSON cấu hình bố cục (có thể chỉ chứa một phần trường).
    #[arg(long)]
    config: Option<PathBuf>,
    /// File JSON `{tài khoản: URL ảnh}`; mặc định dùng bảng có sẵn.
    #[arg(long)]
    textures: Option<PathBuf>,
    /// Ghi đè chiều rộng canvas.
    #[arg(long)]
    width: Option<f64>,
    /// Ghi đè cách xếp chấm.
    #[arg(long, value_enum)]
    packing: Option<PackingArg>,
}

pub fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    let records = read_records(&args.input)?;

    let mut config = match &args.config {
        Some(path) => read_json::<TimelineConfig>(path)?,
        None => TimelineConfig::default(),
    };
    if let Some(width) = args.width {
        config.canvas_width = width;
    }
    if let Some(packing) = args.packing {
        config.packing = packing.into();
    }

    let textures = match &args.textures {
        Some(path) => read_json::<AccountTextures>(path)?,
        None => sample_textures(),
    };

    let svg = build_scene(&records, &textures, &config).to_svg();

    match &args.output {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("không ghi được {}", path.display()))?;
            info!(records = records.len(), output = %path.display(), "đã dựng SVG");
        }
        None => print!("{svg}"),
    }
    Ok(())
}

pub fn run_summary(input: &Path) -> anyhow::Result<()> {
    let records = read_records(input)?;
    let config = TimelineConfig::default();
    let grouping = group_posts(&records);
    let layout = compute_layout(&grouping, &config);

    println!(
        "Bài đăng: {}\nNăm: {}\nHàng: {}\nChấm mỗi dòng: {}\nChiều cao canvas: {}",
        records.len(),
        grouping.years.len(),
        layout.rows.len(),
        layout.max_per_line,
        layout.height
    );
    for row in &layout.rows {
        println!(
            "  {} | {} | {} bài, {} dòng",
            row.year,
            row.work,
            row.markers.len(),
            row.line_count
        );
    }
    Ok(())
}

fn read_records(path: &Path) -> anyhow::Result<Vec<PostRecord>> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Không đọc được file {path:?}"))?;
    serde_json::from_str(&data).with_context(|| format!("File {path:?} không phải JSON hợp lệ"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTS: &str = r#"[
        {"id": 1, "date": "1983-05-28", "work": "A", "url": "https://twitter.com/uBTpfEAU2cEZucx/status/1"},
        {"id": 2, "date": "1976-09-01", "work": "B", "url": "https://x.com/other/status/2"}
    ]"#;

    #[test]
    fn render_writes_svg_with_overrides() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        let input = dir.path().join("posts.json");
        let config = dir.path().join("config.json");
        let output = dir.path().join("timeline.svg");
        fs::write(&input, POSTS).expect("ghi input");
        fs::write(&config, r#"{"min_height": 400}"#).expect("ghi config");

        let args = RenderArgs {
            input,
            output: Some(output.clone()),
            config: Some(config),
            textures: None,
            width: Some(640.0),
            packing: Some(PackingArg::Left),
        };
        run_render(&args).expect("dựng SVG");

        let svg = fs::read_to_string(output).expect("đọc SVG");
        assert!(svg.contains(r#"width="640" height="400""#));
        assert!(svg.contains("url(#avatar-uBTpfEAU2cEZucx)"));
        assert!(svg.contains(r##"fill="#1da1f2""##));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("tạo thư mục tạm");
        assert!(run_summary(&dir.path().join("missing.json")).is_err());
    }
}
