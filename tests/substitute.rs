// パス: tests/substitute.rs
// 役割: 置換エンジンの振る舞いを外部 API から検証する
// 意図: 全置換・単一パス・構文非依存といった置換規則の退行を防ぐ
// 関連ファイル: src/substitute.rs, src/template.rs
use fixturegen::substitute::{count_occurrences, instantiate, instantiate_instance};

#[test]
/// `id(?) = (?);` をインデックス 0 で展開する。
fn single_instance_replaces_all_markers() {
    assert_eq!(instantiate("id(?) = (?);", "(?)", 0), "id0 = 0;");
}

#[test]
fn template_without_marker_is_unchanged() {
    let t = "struct V { x: int; }\n";
    for i in [0, 1, 99, 123_456] {
        assert_eq!(instantiate(t, "(?)", i), t);
    }
}

#[test]
/// コメントや文字列リテラルの中のマーカーも置換する。
fn markers_inside_comments_and_literals_are_replaced() {
    let t = "// fn(?)\n/* (?) */ s(?) = \"(?)\";";
    assert_eq!(instantiate(t, "(?)", 8), "// fn8\n/* 8 */ s8 = \"8\";");
}

#[test]
/// インデックスの表記がプレースホルダを含んでも出力を再走査しない。
fn index_digits_matching_placeholder_are_not_rescanned() {
    // プレースホルダ "1" をインデックス 11 で置換すると "11" が並ぶが、それ以上は置換しない
    assert_eq!(instantiate("a1b1", "1", 11), "a11b11");
    // 置換値と後続テキストが連結してプレースホルダを作っても同様
    assert_eq!(instantiate("x#y", "#", 1), "x1y");
    assert_eq!(instantiate("0_", "0_", 10), "10");
    let inst = instantiate_instance("a1b1", "1", 11);
    assert_eq!(inst.points, vec![1, 4]);
    assert_eq!(inst.restore("1"), "a1b1");
}

#[test]
fn restore_ignores_incidental_numbers() {
    // 置換位置以外に同じ数字 "7" が現れても元に戻るのは置換位置だけ
    let t = "v(?) = 7; w(?) = 77;";
    let inst = instantiate_instance(t, "(?)", 7);
    assert_eq!(inst.text, "v7 = 7; w7 = 77;");
    assert_eq!(inst.restore("(?)"), t);
}

#[test]
fn counts_non_overlapping_matches() {
    assert_eq!(count_occurrences("(?)(?)(?)", "(?)"), 3);
    assert_eq!(count_occurrences("((?)?)", "(?)"), 1);
    assert_eq!(count_occurrences("", "(?)"), 0);
}

#[test]
fn large_indices_use_plain_decimal() {
    assert_eq!(instantiate("n(?)", "(?)", usize::MAX), format!("n{}", usize::MAX));
    assert_eq!(instantiate("n(?)", "(?)", 1_000_000), "n1000000");
}
