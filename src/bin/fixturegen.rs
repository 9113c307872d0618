// パス: src/bin/fixturegen.rs
// 役割: Binary entrypoint that runs one fixture generation
// 意図: Keep argument handling in the library so it stays testable
// 関連ファイル: src/cli.rs, src/lib.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    fixturegen::cli::run()
}
