mod fetch;
mod render;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use timeline_core::PackingMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "timeline-cli",
    about = "Xuất dữ liệu bảng tính và dựng timeline bài đăng."
)]
struct Cli {
    /// Bật log chi tiết.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tải các dòng bảng tính và ghi ra file JSON tĩnh.
    Fetch(fetch::FetchArgs),
    /// Dựng file SVG tĩnh từ file JSON bài đăng.
    Render(render::RenderArgs),
    /// In tóm tắt nhóm năm / tác phẩm và chiều cao canvas.
    Summary {
        /// Đường dẫn tới file JSON bài đăng.
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PackingArg {
    Left,
    Center,
}

impl From<PackingArg> for PackingMode {
    fn from(arg: PackingArg) -> Self {
        match arg {
            PackingArg::Left => Self::Left,
            PackingArg::Center => Self::Center,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TIMELINE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "timeline=debug,info"
        } else {
            "timeline=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Fetch(args) => fetch::run_fetch(args),
        Command::Render(args) => render::run_render(args),
        Command::Summary { input } => render::run_summary(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
