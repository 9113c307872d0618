// パス: src/driver.rs
// 役割: インデックス 0..N-1 についてテンプレートを展開し、順番どおりに連結する
// 意図: コーパスの順序と件数を一箇所で保証し、メモリ上と逐次書き出しの両経路を揃える
// 関連ファイル: src/substitute.rs, src/sink.rs, tests/corpus.rs
//! 反復ドライバ
//!
//! インスタンス `i` は常に `i + 1` より前に置かれる。区切り文字は挿入せず、
//! テンプレート自身が持つ末尾改行などだけが境界になる。

use std::io::{self, Write};

use crate::errors::GenError;
use crate::substitute::{instantiate_into, Instance};
use crate::template::Template;

/// 全インスタンスを連結したバッファと各インスタンスの開始位置。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    // 長さは count + 1。末尾は text.len()
    bounds: Vec<usize>,
    substitutions: usize,
}

impl Corpus {
    pub fn count(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 全インスタンスで行った置換の総数。
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    /// インデックス `i` のインスタンス本文。
    pub fn instance(&self, i: usize) -> Option<&str> {
        let start = *self.bounds.get(i)?;
        let end = *self.bounds.get(i + 1)?;
        Some(&self.text[start..end])
    }

    /// インデックス順にインスタンス本文を返す。
    pub fn instances(&self) -> impl Iterator<Item = &str> + '_ {
        self.bounds.windows(2).map(|w| &self.text[w[0]..w[1]])
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// テンプレートを `count` 回展開し、インデックス順に連結したコーパスを返す。
///
/// # Examples
/// ```
/// use fixturegen::{build_corpus, Template};
/// let t = Template::new("id(?) = (?);", "(?)").unwrap();
/// assert_eq!(build_corpus(&t, 3).unwrap().as_str(), "id0 = 0;id1 = 1;id2 = 2;");
/// assert!(build_corpus(&t, 0).unwrap().is_empty());
/// ```
///
/// 必要なバッファは最初に一括で確保する。確保できない件数は生成を始める前に
/// [`GenError::CorpusTooLarge`] で失敗する。
pub fn build_corpus(template: &Template, count: usize) -> Result<Corpus, GenError> {
    let too_large = || GenError::CorpusTooLarge { count };
    let len = corpus_len(template, count).ok_or_else(too_large)?;
    let mut text = String::new();
    text.try_reserve_exact(len).map_err(|_| too_large())?;
    let mut bounds = Vec::new();
    bounds
        .try_reserve_exact(count.checked_add(1).ok_or_else(too_large)?)
        .map_err(|_| too_large())?;
    let mut substitutions = 0;
    bounds.push(0);
    for index in 0..count {
        substitutions +=
            instantiate_into(&mut text, template.text(), template.placeholder(), index);
        bounds.push(text.len());
    }
    Ok(Corpus {
        text,
        bounds,
        substitutions,
    })
}

/// インスタンスを 1 件ずつ生成する遅延イテレータ。
pub fn instances(template: &Template, count: usize) -> Instances<'_> {
    Instances {
        template,
        next: 0,
        count,
    }
}

pub struct Instances<'a> {
    template: &'a Template,
    next: usize,
    count: usize,
}

impl Iterator for Instances<'_> {
    type Item = Instance;

    fn next(&mut self) -> Option<Instance> {
        if self.next >= self.count {
            return None;
        }
        let inst = self.template.instantiate(self.next);
        self.next += 1;
        Some(inst)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Instances<'_> {}

/// コーパスを保持せず、インスタンスごとに `out` へ書き出す。書き込んだバイト数を返す。
///
/// 出力は [`build_corpus`] と完全に同じバイト列になる。
pub fn stream_corpus<W: Write>(template: &Template, count: usize, out: &mut W) -> io::Result<u64> {
    let mut buf = String::with_capacity(template.text().len() + 64);
    let mut written = 0u64;
    for index in 0..count {
        buf.clear();
        instantiate_into(&mut buf, template.text(), template.placeholder(), index);
        out.write_all(buf.as_bytes())?;
        written += buf.len() as u64;
    }
    Ok(written)
}

/// `count` 件分のコーパスの正確なバイト長。`usize` に収まらなければ `None`。
pub fn corpus_len(template: &Template, count: usize) -> Option<usize> {
    let occurrences = template.occurrences();
    // 非重複一致なので引き算は負にならない
    let fixed = template.text().len() - occurrences * template.placeholder().len();
    count
        .checked_mul(fixed)?
        .checked_add(occurrences.checked_mul(label_digits(count)?)?)
}

// 0..count の10進表記の桁数の総和
fn label_digits(count: usize) -> Option<usize> {
    let mut total = 0usize;
    let mut lo = 0usize;
    let mut hi = 10usize;
    let mut width = 1usize;
    while lo < count {
        let end = count.min(hi);
        total = total.checked_add((end - lo).checked_mul(width)?)?;
        lo = end;
        hi = hi.checked_mul(10).unwrap_or(usize::MAX);
        width += 1;
    }
    Some(total)
}
