use crate::{AccountTextures, PostRecord};

const SAMPLE_ACCOUNT: &str = "uBTpfEAU2cEZucx";
const SAMPLE_AVATAR: &str =
    "https://pbs.twimg.com/profile_images/1246044432006168577/-kA1KKDu_400x400.jpg";

// (id, ngày, tác phẩm, status id)
const SAMPLE_ROWS: &[(u32, &str, &str, &str)] = &[
    (1, "1983-05-28", "てんコミ大長編鬼岩城", "1918816524514505130"),
    (2, "1983-05-28", "てんコミ大長編鬼岩城", "1941308279805931838"),
    (3, "1983-05-28", "てんコミ大長編鬼岩城", "1940938557465809207"),
    (4, "1983-05-28", "てんコミ大長編鬼岩城", "1940583974541447186"),
    (5, "1983-05-28", "てんコミ大長編鬼岩城", "1939864099556663519"),
    (6, "1976-09-01", "みどりの守り神", "1909901401742029056"),
    (7, "1985-08-01", "アン子大いに怒る", "1906968694099480962"),
    (8, "1985-08-01", "アン子大いに怒る", "1907307948478746669"),
    (9, "1985-08-01", "アン子大いに怒る", "1907638029260566923"),
    (10, "1985-08-01", "アン子大いに怒る", "1908003288899027034"),
    (11, "1985-08-01", "アン子大いに怒る", "1908385657317462179"),
    (12, "1985-08-01", "アン子大いに怒る", "1908815254940966991"),
    (13, "1985-08-01", "アン子大いに怒る", "1909112837617914071"),
    (14, "1985-08-01", "アン子大いに怒る", "1909503047010750781"),
];

/// Bộ dữ liệu mẫu biên dịch sẵn, dùng khi chưa có file JSON.
pub fn sample_posts() -> Vec<PostRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, date, work, status)| PostRecord {
            id,
            date: date.to_string(),
            work: work.to_string(),
            url: format!("https://twitter.com/{SAMPLE_ACCOUNT}/status/{status}"),
        })
        .collect()
}

/// Bảng ảnh nền mặc định theo tài khoản.
pub fn sample_textures() -> AccountTextures {
    [(SAMPLE_ACCOUNT, SAMPLE_AVATAR)].into_iter().collect()
}
