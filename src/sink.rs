// パス: src/sink.rs
// 役割: 生成したコーパスを N から決まるパスへ書き出す出力シンク
// 意図: 一時ファイルに書いてから置き換えることで、失敗時に中途半端なファイルを残さない
// 関連ファイル: src/driver.rs, src/errors.rs, tests/sink.rs
//! 出力シンク
//!
//! 出力先と同じディレクトリに `tempfile::NamedTempFile` を作り、書き込み・flush・
//! sync の後に `persist` で出力先へリネームする。既存ファイルは置き換えられる。
//! 出力先ディレクトリは作成しない（存在しなければエラー）。

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::driver::{stream_corpus, Corpus};
use crate::errors::GenError;
use crate::template::Template;

/// 出力ファイル名の接頭辞。
pub const FILE_STEM_PREFIX: &str = "test";

/// `dir/test{count}.{extension}` を返す。拡張子が空ならドットを付けない。
pub fn output_path(dir: &Path, count: usize, extension: &str) -> PathBuf {
    let name = if extension.is_empty() {
        format!("{FILE_STEM_PREFIX}{count}")
    } else {
        format!("{FILE_STEM_PREFIX}{count}.{extension}")
    };
    dir.join(name)
}

/// コーパスを `dest` へそのまま書き出し、書き込んだバイト数を返す。
pub fn write_corpus(corpus: &Corpus, dest: &Path) -> Result<u64, GenError> {
    persist_with(dest, |w| {
        w.write_all(corpus.as_bytes())?;
        Ok(corpus.len() as u64)
    })
}

/// コーパスを組み立てずにインスタンスを逐次 `dest` へ書き出す。
pub fn write_streaming(template: &Template, count: usize, dest: &Path) -> Result<u64, GenError> {
    persist_with(dest, |w| stream_corpus(template, count, w))
}

fn persist_with<F>(dest: &Path, fill: F) -> Result<u64, GenError>
where
    F: FnOnce(&mut BufWriter<&mut std::fs::File>) -> io::Result<u64>,
{
    let dir = parent_dir(dest);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| GenError::Create {
        path: dest.to_path_buf(),
        source,
    })?;
    debug!("一時ファイル: {}", tmp.path().display());

    let write_err = |source: io::Error| GenError::Write {
        path: dest.to_path_buf(),
        source,
    };
    let written = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let n = fill(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
        n
    };
    tmp.as_file().sync_all().map_err(write_err)?;

    // 失敗時は NamedTempFile の Drop が一時ファイルを削除する
    tmp.persist(dest).map_err(|err| GenError::Persist {
        path: dest.to_path_buf(),
        source: err.error,
    })?;
    Ok(written)
}

fn parent_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
