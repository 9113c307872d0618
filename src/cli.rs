// パス: src/cli.rs
// 役割: コマンドライン引数の解釈、ロギング初期化、実行結果の表示
// 意図: バイナリを薄く保ち、引数から設定への変換と終了コードをテスト可能にする
// 関連ファイル: src/bin/fixturegen.rs, src/config.rs, src/errors.rs
//! CLI エントリポイント

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, warn, LevelFilter};

use crate::config::{GeneratorConfig, WriteMode, DEFAULT_EXTENSION};
use crate::errors::GenError;
use crate::{generate, GenerateReport};

#[derive(Parser, Debug)]
#[command(name = "fixturegen")]
#[command(version, about = "テンプレートを N 回展開して munch のストレステスト用ソースを生成する", long_about = None)]
pub struct Cli {
    /// 生成するインスタンス数（既定: 1024）
    #[arg(allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// 出力先ディレクトリ（存在している必要がある）
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// 出力ファイルの拡張子
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// コーパスを保持せずインスタンスごとに書き出す
    #[arg(long)]
    pub stream: bool,

    /// 結果を JSON で出力する
    #[arg(long)]
    pub json: bool,

    /// ログを詳細にする（-v: info, -vv: debug）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 引数を実行設定へ変換する。件数の検証もここで行う。
    pub fn to_config(&self) -> Result<GeneratorConfig, GenError> {
        let mut config = GeneratorConfig::default()
            .with_output_dir(&self.output_dir)
            .with_extension(&self.extension)
            .with_mode(if self.stream {
                WriteMode::Streaming
            } else {
                WriteMode::Buffered
            });
        if let Some(raw) = self.count {
            config = config.with_count(raw)?;
        }
        Ok(config)
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn setup_logging(verbose: u8) {
    // RUST_LOG があればそちらを優先する
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .try_init();
}

/// プロセス引数を解釈して生成を実行する。
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut stdout = io::stdout();
    match execute(&cli, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} で失敗しました", err.code());
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// 設定を組み立てて生成し、結果を `out` へ表示する。
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<GenerateReport, GenError> {
    let config = cli.to_config()?;
    let report = generate(&config)?;
    // 成果物は確定済みなので、表示の失敗は警告に留める
    if let Err(err) = print_report(out, &report, cli.json) {
        warn!("結果の表示に失敗しました: {err}");
    }
    Ok(report)
}

fn print_report<W: Write>(out: &mut W, report: &GenerateReport, json: bool) -> io::Result<()> {
    if json {
        let s = serde_json::to_string(report).map_err(io::Error::from)?;
        writeln!(out, "{s}")
    } else {
        writeln!(
            out,
            "{} 件 ({} バイト) -> {}",
            report.count,
            report.bytes,
            report.path.display()
        )
    }
}
