// パス: src/template.rs
// 役割: 組み込みテンプレートとプレースホルダを保持するテンプレートソース
// 意図: プロセス全体で一度だけ初期化される読み取り専用データとして公開する
// 関連ファイル: src/substitute.rs, src/driver.rs, tests/corpus.rs
//! テンプレートソース
//!
//! 組み込みテンプレートは munch 言語の宣言群（struct / union / const / var /
//! typedef / func / enum とコメント）で、識別子の直後に `(?)` を置いてある。
//! インスタンスごとにこのマーカーが番号へ置き換わり、同名の定義が衝突しなくなる。

use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::errors::GenError;
use crate::substitute::{count_occurrences, instantiate_instance, Instance};

/// 組み込みテンプレートのプレースホルダ。
pub const DEFAULT_PLACEHOLDER: &str = "(?)";

/// 組み込みテンプレート本文（munch 言語のストレステスト用ペイロード）。
pub const MUNCH_SOURCE: &str = r#"

// comment 1
// comment 2 // //
/*
 comment 3
*/

/**
 * comment 4
 * 
 */

/**
 ***  // //
 */

struct V(?) {
    x: int;
    y: int;
}

union IntOrPtr(?) {
    i: int;
    p: int*;
}

const xx(?) = 42
var zero(?): V(?) = {x = 0, y = 0}
var one(?) = (:V(?)) {x = 1, y = 1}
var zero_(?): V(?) = {x = 0}
var basis(?): V(?)[2] = {{0, cast(int, 1.0)}, {1, 0}}

typedef T1(?) = V(?)*[sizeof(:V(?))]
typedef T2(?) = S(?)*
const yy(?) = sizeof(vec_add(?)(zero(?), one(?)))

struct S(?) {
    i: int;
    f: float;
    c: char;
}

struct Student(?) {
    index(?): int;
}

func fib(?)(n: int): int {
    if(n <= 1) {
        return n;
    }
    return fib(?)(n - 1) + fib(?)(n - 2);
}

func do_abs_nothing(?)() {
    ;;;;;;;;
    return;
}

func vec_add(?)(a: V(?), b: V(?)): V(?) {
    return {a.x + b.x, a.y + b.y};
}

func norm(?)(a: V(?)): int {
    return a.x * a.x + a.y * a.y;
}

func mul(?)(a: V(?), k: int): V(?) {
    return {k * a.x, k * a.y};
}

typedef vec_decay_t(?) = func(V(?)):int

func adj_sum(?)(a: V(?), f: vec_decay_t(?)):int {
    // s := 0
    var s = 0;
    for(i := 0; i < 2; i++) {
        s += f(vec_add(?)(a, basis(?)[i]));
        s += f(vec_add(?)(mul(?)(a, -1), basis(?)[i]));
    }
    return s;
}

enum Dirs(?) {
    up(?),
    down(?) = 10,
    left(?),
    right(?),
    blah(?) = 'A'
}

func grade(?)(marks: int): int {
    if(marks >= 75) {
        return 'A';
    } else if(marks >= 50) {
        return 'B';
    } else if(marks >= 25) {
        return 'C';
    }
    return 'F';
}

func do_nothing(?)(grade: int) {
    switch(grade) {
        case 'A': {
            break;
        }
        case 'B': {
            break;
        }
        case 'C': {
        }
        case 'F': {
        }
        default: {
            do_abs_nothing(?)();
        }
    }
    do_abs_nothing(?)();
}

func facto_while(?)(n: int): int {
    i := 1;
    p := 1;
    while(i <= n) {
        p *= i;
        i++;
    }
    return p;
}

func facto_do_while(?)(n: int): int {
    i := 1;
    p := 1;
    do {
        p *= i;
        i++;
        if(i == n) {
            break;
        }
    } while(i <= n);
    return p;
}

func facto_rec(?)(n: int): int {
    return n <= 1 ? 1 : n * facto_rec(?)(n - 1);
}

func is_prime(?)(n: int): int {
    for(i := 2; i * i <= n; i++) {
        if(n % i == 0) {
            return false;
        }
    }
    return true;
}

"#;

static BUILTIN: Lazy<Template> = Lazy::new(|| Template {
    text: Cow::Borrowed(MUNCH_SOURCE),
    placeholder: Cow::Borrowed(DEFAULT_PLACEHOLDER),
});

/// テンプレート本文とプレースホルダの組。生成後は変更されない。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    text: Cow<'static, str>,
    placeholder: Cow<'static, str>,
}

impl Template {
    /// 任意のテンプレートを構築する。空のプレースホルダは受け付けない。
    pub fn new(
        text: impl Into<Cow<'static, str>>,
        placeholder: impl Into<Cow<'static, str>>,
    ) -> Result<Self, GenError> {
        let placeholder = placeholder.into();
        if placeholder.is_empty() {
            return Err(GenError::EmptyPlaceholder);
        }
        Ok(Self {
            text: text.into(),
            placeholder,
        })
    }

    /// 組み込みテンプレート。初回アクセス時に一度だけ初期化される。
    pub fn builtin() -> &'static Template {
        &BUILTIN
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// 1 インスタンスあたりの置換箇所の数。
    pub fn occurrences(&self) -> usize {
        count_occurrences(&self.text, &self.placeholder)
    }

    /// `count` 件分の置換総数。`usize` を超える場合は飽和する。
    pub fn substitutions_for(&self, count: usize) -> usize {
        self.occurrences().saturating_mul(count)
    }

    pub fn instantiate(&self, index: usize) -> Instance {
        instantiate_instance(&self.text, &self.placeholder, index)
    }
}
