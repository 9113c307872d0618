// パス: tests/sink.rs
// 役割: 出力シンクと generate の書き出し結果を実ファイルで検証する
// 意図: 正確なバイト列・上書き・失敗時に何も残さないことを保証する
// 関連ファイル: src/sink.rs, src/lib.rs, tests/test_support.rs
#[path = "test_support.rs"]
mod support;

use std::fs;

use fixturegen::sink::{output_path, write_corpus, write_streaming};
use fixturegen::{
    build_corpus, generate, generate_from, GenError, GeneratorConfig, Template, WriteMode,
};
use support::{file_names, marker, read_text};
use tempfile::tempdir;

#[test]
fn writes_exact_corpus_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let t = marker("id(?) = (?);");
    let corpus = build_corpus(&t, 3)?;
    let dest = output_path(dir.path(), 3, "mch");
    let n = write_corpus(&corpus, &dest)?;
    assert_eq!(n, corpus.len() as u64);
    assert_eq!(read_text(&dest), "id0 = 0;id1 = 1;id2 = 2;");
    assert_eq!(file_names(dir.path()), vec!["test3.mch"]);
    Ok(())
}

#[test]
/// 件数 0 でも空のファイルが作られる。
fn zero_count_writes_empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg = GeneratorConfig::default().with_count(0)?.with_output_dir(dir.path());
    let report = generate(&cfg)?;
    assert_eq!(report.path, dir.path().join("test0.mch"));
    assert_eq!(report.bytes, 0);
    assert_eq!(fs::metadata(&report.path)?.len(), 0);
    Ok(())
}

#[test]
/// 既存ファイルは完全に置き換えられ、余分なバイトは残らない。
fn existing_file_is_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let dest = dir.path().join("test2.mch");
    fs::write(&dest, "x".repeat(4096))?;
    let t = marker("a(?);");
    write_corpus(&build_corpus(&t, 2)?, &dest)?;
    assert_eq!(read_text(&dest), "a0;a1;");
    assert_eq!(file_names(dir.path()), vec!["test2.mch"]);
    Ok(())
}

#[test]
/// 出力先ディレクトリが無ければ I/O エラーになり、ファイルは作られない。
fn missing_directory_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("no-such-dir");
    let cfg = GeneratorConfig::default().with_count(4)?.with_output_dir(&missing);
    let err = generate(&cfg).unwrap_err();
    assert!(matches!(err, GenError::Create { .. }), "{err}");
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(std::io::ErrorKind::NotFound)
    );
    assert!(!missing.exists());
    assert!(file_names(dir.path()).is_empty());
    Ok(())
}

#[test]
/// 出力先がディレクトリの場合は確定に失敗し、既存の無関係なファイルには触れない。
fn unwritable_destination_leaves_other_files_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("test4.mch"))?;
    fs::write(dir.path().join("notes.txt"), "keep")?;
    let cfg = GeneratorConfig::default().with_count(4)?.with_output_dir(dir.path());
    let err = generate(&cfg).unwrap_err();
    assert!(matches!(err, GenError::Persist { .. }), "{err}");
    assert_eq!(read_text(&dir.path().join("notes.txt")), "keep");
    assert!(dir.path().join("test4.mch").is_dir());
    assert_eq!(file_names(dir.path()), vec!["notes.txt", "test4.mch"]);
    Ok(())
}

#[test]
fn streaming_and_buffered_outputs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let buffered = dir.path().join("buffered");
    let streamed = dir.path().join("streamed");
    fs::create_dir(&buffered)?;
    fs::create_dir(&streamed)?;

    let base = GeneratorConfig::default().with_count(128)?;
    let a = generate(&base.clone().with_output_dir(&buffered))?;
    let b = generate(&base.with_output_dir(&streamed).with_mode(WriteMode::Streaming))?;
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.substitutions, b.substitutions);
    assert_eq!(a.substitutions, 128 * 61);
    assert_eq!(fs::read(&a.path)?, fs::read(&b.path)?);
    Ok(())
}

#[test]
fn write_streaming_matches_in_memory_corpus() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let t = Template::builtin();
    let dest = output_path(dir.path(), 10, "");
    let n = write_streaming(t, 10, &dest)?;
    let corpus = build_corpus(t, 10)?;
    assert_eq!(n, corpus.len() as u64);
    assert_eq!(read_text(&dest), corpus.as_str());
    Ok(())
}

#[test]
/// 同じ設定で 2 回生成してもバイト単位で同一になる。
fn repeated_runs_are_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let t = marker("var v(?): int = (?);\n");
    let cfg = GeneratorConfig::default()
        .with_count(50)?
        .with_output_dir(dir.path())
        .with_extension("txt");
    let first = generate_from(&t, &cfg)?;
    let first_bytes = fs::read(&first.path)?;
    let second = generate_from(&t, &cfg)?;
    assert_eq!(first, second);
    assert_eq!(first_bytes, fs::read(&second.path)?);
    assert!(read_text(&first.path).starts_with("var v0: int = 0;\nvar v1: int = 1;\n"));
    Ok(())
}

#[test]
/// 確保できない件数はパニックせずに失敗し、出力ファイルを作らない。
fn huge_count_fails_cleanly_in_buffered_mode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg = GeneratorConfig::default()
        .with_count(1i64 << 62)?
        .with_output_dir(dir.path());
    let result = std::panic::catch_unwind(|| generate(&cfg));
    let err = result.expect("generate must not panic").unwrap_err();
    assert!(matches!(err, GenError::CorpusTooLarge { .. }), "{err}");
    assert_eq!(err.exit_code(), 1);
    assert!(file_names(dir.path()).is_empty());
    Ok(())
}
