// パス: src/config.rs
// 役割: 生成件数・出力先・書き出し方式をまとめた実行設定
// 意図: 不正な件数を作業開始前に弾き、出力パスを設定から一意に導出する
// 関連ファイル: src/cli.rs, src/lib.rs, src/sink.rs
//! 実行設定

use std::path::PathBuf;

use serde::Serialize;

use crate::errors::GenError;
use crate::sink::output_path;

/// 既定の生成件数（2 の冪）。
pub const DEFAULT_COUNT: usize = 1 << 10;
/// 既定の出力拡張子（munch ソース）。
pub const DEFAULT_EXTENSION: &str = "mch";

/// 出力の書き出し方式。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// コーパス全体をメモリ上に組み立ててから一度に書き出す。
    #[default]
    Buffered,
    /// インスタンスごとに逐次書き出す（メモリ使用量は 1 インスタンス分）。
    Streaming,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    pub count: usize,
    pub output_dir: PathBuf,
    pub extension: String,
    pub mode: WriteMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            mode: WriteMode::Buffered,
        }
    }
}

impl GeneratorConfig {
    /// 符号付きの件数を検証して設定する。負数は [`GenError::InvalidCount`]。
    pub fn with_count(mut self, raw: i64) -> Result<Self, GenError> {
        self.count = validate_count(raw)?;
        Ok(self)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// 件数から決まる出力先パス。
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_dir, self.count, &self.extension)
    }
}

/// 件数を検証する。0 は空のコーパスとして有効。
pub fn validate_count(raw: i64) -> Result<usize, GenError> {
    usize::try_from(raw).map_err(|_| GenError::InvalidCount { value: raw })
}
