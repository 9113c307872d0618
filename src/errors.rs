// パス: src/errors.rs
// 役割: フィクスチャ生成で発生しうるエラー型を定義する
// 意図: 設定エラーと I/O エラーを区別し、終了コードと診断コードを一元管理する
// 関連ファイル: src/sink.rs, src/config.rs, src/cli.rs
//! エラー型の定義（共通フォーマット: \[CODE\] メッセージ）。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 生成処理全体で共有するエラー種別。いずれも実行全体にとって致命的。
#[derive(Debug, Error)]
pub enum GenError {
    #[error("[GEN001] 生成数が不正です: {value} (0 以上の整数を指定してください)")]
    InvalidCount { value: i64 },
    #[error("[GEN002] プレースホルダが空です")]
    EmptyPlaceholder,
    #[error("[GEN003] コーパスが大きすぎてメモリ上に確保できません: {count} 件 (--stream を使用してください)")]
    CorpusTooLarge { count: usize },
    #[error("[GEN010] 出力ファイルを作成できません: {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("[GEN011] 出力ファイルへの書き込みに失敗しました: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("[GEN012] 出力ファイルを確定できません: {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    pub fn code(&self) -> &'static str {
        match self {
            GenError::InvalidCount { .. } => "GEN001",
            GenError::EmptyPlaceholder => "GEN002",
            GenError::CorpusTooLarge { .. } => "GEN003",
            GenError::Create { .. } => "GEN010",
            GenError::Write { .. } => "GEN011",
            GenError::Persist { .. } => "GEN012",
        }
    }

    /// 作業開始前に弾かれる設定エラーかどうか。
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            GenError::InvalidCount { .. } | GenError::EmptyPlaceholder
        )
    }

    /// プロセス終了コード（設定エラー: 2、それ以外: 1）。
    pub fn exit_code(&self) -> u8 {
        if self.is_config() {
            2
        } else {
            1
        }
    }

    /// 下位の I/O エラーがあれば返す。
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            GenError::Create { source, .. }
            | GenError::Write { source, .. }
            | GenError::Persist { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// 生成結果を表す型。
pub type GenResult<T> = Result<T, GenError>;
