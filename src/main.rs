//! hangul-search - 표준 입력의 줄을 한글 검색어로 거르는 필터

use clap::error::ErrorKind;
use clap::Parser;
use hangul_search::config::{load_config, load_config_from};
use hangul_search::filter::{build_queries, filter_lines};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hangul-search")]
#[command(about = "표준 입력의 줄 중 한글 검색어와 일치하는 줄만 출력")]
#[command(version)]
struct Args {
    /// 설정 파일 경로 (기본: $HANGUL_SEARCH_CONFIG 또는 ~/.config/hangul-search/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 검색어 (초성, 입력 중인 글자, 영문 자판 입력 허용)
    query: String,
}

fn run(args: Args) -> Result<bool, String> {
    let config = match &args.config {
        Some(path) => load_config_from(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => load_config(),
    };
    let queries = build_queries(&args.query, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let printed = filter_lines(stdin.lock(), &mut out, &queries, config.limit)
        .map_err(|e| format!("입출력 실패: {}", e))?;

    log::info!("{}줄 일치", printed);
    Ok(printed > 0)
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}
