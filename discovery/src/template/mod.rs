//! URLテンプレート解決
//!
//! テンプレート中のプレースホルダーをクエリパラメータの値で置換する。
//!
//! プレースホルダーは2形式:
//! - bare: `<key>`
//! - typed: `<key:constraint>`（constraintはドキュメント用で出力には残らない）
//!
//! 正規表現は使わず、`<` `:` `>` を走査する小さなスキャナーで照合する。
//! キーに正規表現のメタ文字が含まれていてもそのまま文字列として扱われる。

use std::collections::HashSet;

/// エンドポイント名を渡すクエリキー
pub const ENDPOINT_KEY: &str = "endpoint";

/// 共有シークレットを渡すクエリキー
pub const SECRET_KEY: &str = "secret_key";

/// 置換対象から除外するクエリキーの集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedKeys {
    keys: HashSet<String>,
}

impl ReservedKeys {
    /// 任意のキー集合から作成
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// 予約済みキーか判定
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Default for ReservedKeys {
    fn default() -> Self {
        Self::new([ENDPOINT_KEY, SECRET_KEY])
    }
}

/// テンプレート中のプレースホルダー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// キー
    pub key: String,
    /// 型ヒント（typed形式のみ）
    pub constraint: Option<String>,
}

/// テンプレートをパラメータで解決する
///
/// パラメータは与えられた順に1つずつ処理し、1パラメータにつき1回だけ
/// テンプレート全体を置換する。解決は失敗しない。一致しなかった
/// プレースホルダーはそのまま残る。
pub fn resolve<I, K, V>(template: &str, params: I, reserved: &ReservedKeys) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = template.to_string();

    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        if reserved.contains(key) {
            continue;
        }

        let (key, value) = effective_pair(key, value);
        if key.is_empty() {
            continue;
        }

        url = match replace_typed(&url, key, value) {
            Some(replaced) => replaced,
            None => url.replace(&format!("<{key}>"), value),
        };
    }

    url
}

/// 値に埋め込まれた `key=value` を取り出す
///
/// 最初の `=` でのみ分割する。埋め込みキーが空の場合はパラメータ自身の
/// キーと値を使う。
pub fn effective_pair<'a>(key: &'a str, value: &'a str) -> (&'a str, &'a str) {
    match value.split_once('=') {
        Some((inner_key, inner_value)) if !inner_key.is_empty() => (inner_key, inner_value),
        _ => (key, value),
    }
}

/// `<key:...>` 形式のスパンをすべて値で置換する
///
/// 1つも一致しなければ `None`。
fn replace_typed(template: &str, key: &str, value: &str) -> Option<String> {
    let open = format!("<{key}:");
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut matched = false;

    while let Some(start) = rest.find(&open) {
        let after_open = &rest[start + open.len()..];
        // '>' がなければ以降にも一致するスパンは存在しない
        let Some(end) = after_open.find('>') else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &after_open[end + 1..];
        matched = true;
    }

    if !matched {
        return None;
    }
    out.push_str(rest);
    Some(out)
}

/// テンプレートに含まれるプレースホルダーを出現順に列挙する
///
/// 解決後のURLに適用すると未解決のプレースホルダーが得られる。
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, ch) in template.char_indices() {
        match ch {
            '<' => open = Some(idx + 1),
            '>' => {
                if let Some(start) = open.take() {
                    if let Some(placeholder) = parse_placeholder(&template[start..idx]) {
                        found.push(placeholder);
                    }
                }
            }
            _ => {}
        }
    }

    found
}

fn parse_placeholder(body: &str) -> Option<Placeholder> {
    let (key, constraint) = match body.split_once(':') {
        Some((key, constraint)) => (key, Some(constraint.to_string())),
        None => (body, None),
    };
    if key.is_empty() {
        return None;
    }
    Some(Placeholder {
        key: key.to_string(),
        constraint,
    })
}
