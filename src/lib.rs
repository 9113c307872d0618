// パス: src/lib.rs
// 役割: Crate root wiring modules and exports
// 意図: Expose the template → substitute → repeat → write pipeline as one call
// 関連ファイル: src/template.rs, src/driver.rs, src/sink.rs
//! munch フィクスチャ生成器 ルートモジュール
//!
//! 目的:
//! - 1 つのテンプレートを N 回展開し、各コピーの識別子を番号で区別した
//!   大きなコンパイル単位を生成する（字句解析器・構文解析器の負荷試験用）。
//!
//! 方針:
//! - テンプレートは不透明なテキストとして扱い、構文は解釈しない。
//! - 置換はリテラル部分文字列の単一パス置換のみ。
//! - 生成は全件成功か全件失敗のどちらか（部分的な出力は残さない）。

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod sink;
pub mod substitute;
pub mod template;

use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;

pub use crate::config::{GeneratorConfig, WriteMode};
pub use crate::driver::{build_corpus, Corpus};
pub use crate::errors::{GenError, GenResult};
pub use crate::template::Template;

/// 1 回の生成実行の結果。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub count: usize,
    pub bytes: u64,
    pub substitutions: usize,
}

/// 組み込みテンプレートで生成し、設定の出力先へ書き出す。
pub fn generate(config: &GeneratorConfig) -> GenResult<GenerateReport> {
    generate_from(Template::builtin(), config)
}

/// 任意のテンプレートで生成し、設定の出力先へ書き出す。
pub fn generate_from(template: &Template, config: &GeneratorConfig) -> GenResult<GenerateReport> {
    let path = config.output_path();
    debug!(
        "テンプレート: {} バイト, プレースホルダ {:?} x {}",
        template.text().len(),
        template.placeholder(),
        template.occurrences()
    );
    let (bytes, substitutions) = match config.mode {
        WriteMode::Buffered => {
            let corpus = build_corpus(template, config.count)?;
            let bytes = sink::write_corpus(&corpus, &path)?;
            (bytes, corpus.substitutions())
        }
        WriteMode::Streaming => {
            let bytes = sink::write_streaming(template, config.count, &path)?;
            (bytes, template.substitutions_for(config.count))
        }
    };
    info!(
        "{} 件のインスタンス ({} バイト) を {} へ書き出しました",
        config.count,
        bytes,
        path.display()
    );
    Ok(GenerateReport {
        path,
        count: config.count,
        bytes,
        substitutions,
    })
}
