use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Lấy tên tài khoản (path segment đầu tiên) từ URL bài đăng.
///
/// URL lỗi không bao giờ làm hỏng luồng vẽ: lỗi được ghi log và trả về `None`,
/// khi đó chấm dùng màu phẳng thay cho ảnh nền.
pub fn account_from_url(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(url, error = %err, "không parse được URL bài đăng");
            return None;
        }
    };

    parsed
        .path_segments()?
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Bảng ảnh nền theo tài khoản.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AccountTextures {
    images: BTreeMap<String, String>,
}

impl AccountTextures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, account: impl Into<String>, image_href: impl Into<String>) {
        self.images.insert(account.into(), image_href.into());
    }

    pub fn image_for(&self, account: &str) -> Option<&str> {
        self.images.get(account).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Id `<pattern>` SVG cho tài khoản; ký tự ngoài `[A-Za-z0-9_-]` đổi thành `_`.
    pub fn pattern_id(account: &str) -> String {
        let sanitized: String = account
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        format!("avatar-{sanitized}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AccountTextures {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            images: iter
                .into_iter()
                .map(|(account, href)| (account.into(), href.into()))
                .collect(),
        }
    }
}
