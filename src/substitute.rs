// パス: src/substitute.rs
// 役割: プレースホルダをインデックスの10進表記へ置換する置換エンジン
// 意図: 文字列リテラルとしての単一パス置換を提供し、置換位置を逆変換できる形で記録する
// 関連ファイル: src/template.rs, src/driver.rs, tests/substitute.rs
//! 置換エンジン
//!
//! - プレースホルダはパターンではなくリテラル部分文字列として扱う。
//! - 左から右へ重なりなく走査し、すべての出現を置換する（先頭だけではない）。
//! - 置換後の出力は再走査しない。インデックスの表記がプレースホルダを
//!   再び作り出しても、それ以上の置換は行わない。
//! - テンプレート側の構文（コメント・文字列など）は一切解釈しない。

/// 置換済みの 1 インスタンス。置換位置を保持し、元のテンプレートへ戻せる。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub index: usize,
    pub text: String,
    /// `text` 内で置換値が始まるバイトオフセット（昇順）。
    pub points: Vec<usize>,
    label_len: usize,
}

impl Instance {
    /// 置換位置の値をプレースホルダへ戻し、元のテンプレート文字列を再構成する。
    ///
    /// 置換位置以外に偶然現れる同じ数字列には触れない。
    pub fn restore(&self, placeholder: &str) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;
        for &p in &self.points {
            out.push_str(&self.text[last..p]);
            out.push_str(placeholder);
            last = p + self.label_len;
        }
        out.push_str(&self.text[last..]);
        out
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// `template_text` 中のすべての `placeholder` を `index` の10進表記へ置換した写しを返す。
///
/// # Examples
/// ```
/// use fixturegen::substitute::instantiate;
/// assert_eq!(instantiate("id(?) = (?);", "(?)", 0), "id0 = 0;");
/// assert_eq!(instantiate("no marker", "(?)", 7), "no marker");
/// ```
pub fn instantiate(template_text: &str, placeholder: &str, index: usize) -> String {
    let mut out = String::with_capacity(template_text.len() + 8);
    instantiate_into(&mut out, template_text, placeholder, index);
    out
}

/// 置換結果を既存バッファ `out` の末尾へ追記し、置換した箇所の数を返す。
///
/// 空のプレースホルダはどこにも一致しないものとして扱い、テンプレートをそのまま追記する。
pub fn instantiate_into(
    out: &mut String,
    template_text: &str,
    placeholder: &str,
    index: usize,
) -> usize {
    substitute_with(out, template_text, placeholder, &index.to_string(), |_| {})
}

/// 置換位置を記録した [`Instance`] を生成する。
pub fn instantiate_instance(template_text: &str, placeholder: &str, index: usize) -> Instance {
    let label = index.to_string();
    let mut text = String::with_capacity(template_text.len() + 8);
    let mut points = Vec::new();
    substitute_with(&mut text, template_text, placeholder, &label, |p| points.push(p));
    Instance {
        index,
        text,
        points,
        label_len: label.len(),
    }
}

// 単一パスの走査本体。置換値を書き込む直前の `out` 長を `on_point` へ渡す。
fn substitute_with<F: FnMut(usize)>(
    out: &mut String,
    template_text: &str,
    placeholder: &str,
    label: &str,
    mut on_point: F,
) -> usize {
    if placeholder.is_empty() {
        out.push_str(template_text);
        return 0;
    }
    let mut last = 0;
    let mut hits = 0;
    for (start, _) in template_text.match_indices(placeholder) {
        out.push_str(&template_text[last..start]);
        on_point(out.len());
        out.push_str(label);
        last = start + placeholder.len();
        hits += 1;
    }
    out.push_str(&template_text[last..]);
    hits
}

/// 重なりなしで数えたプレースホルダの出現回数。
pub fn count_occurrences(template_text: &str, placeholder: &str) -> usize {
    if placeholder.is_empty() {
        return 0;
    }
    template_text.matches(placeholder).count()
}
