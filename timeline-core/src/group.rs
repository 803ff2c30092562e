use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::PostRecord;

/// Các bài đăng cùng năm và cùng nhãn tác phẩm, giữ nguyên thứ tự gốc.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkGroup<'a> {
    pub year: &'a str,
    pub work: &'a str,
    pub records: Vec<&'a PostRecord>,
    /// Vị trí của `records[i]` trong danh sách đầu vào.
    pub indices: Vec<usize>,
}

/// Các nhóm tác phẩm của một năm, theo thứ tự xuất hiện đầu tiên.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: &'a str,
    pub works: Vec<WorkGroup<'a>>,
}

/// Kết quả gom nhóm: năm tăng dần, nhãn tác phẩm theo thứ tự gặp.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grouping<'a> {
    pub years: Vec<YearGroup<'a>>,
}

impl<'a> Grouping<'a> {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Duyệt mọi hàng `(năm, tác phẩm)` theo thứ tự bố cục.
    pub fn rows(&self) -> impl Iterator<Item = &WorkGroup<'a>> {
        self.years.iter().flat_map(|year| year.works.iter())
    }

    pub fn row_count(&self) -> usize {
        self.years.iter().map(|year| year.works.len()).sum()
    }

    pub fn member_count(&self) -> usize {
        self.rows().map(|row| row.records.len()).sum()
    }
}

/// Gom bài đăng theo năm rồi theo nhãn tác phẩm.
pub fn group_posts(records: &[PostRecord]) -> Grouping<'_> {
    let mut by_year: BTreeMap<&str, IndexMap<&str, Vec<(usize, &PostRecord)>>> =
        BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        by_year
            .entry(record.year())
            .or_default()
            .entry(record.work.as_str())
            .or_default()
            .push((index, record));
    }

    let years = by_year
        .into_iter()
        .map(|(year, works)| YearGroup {
            year,
            works: works
                .into_iter()
                .map(|(work, members)| {
                    let (indices, records) = members.into_iter().unzip();
                    WorkGroup {
                        year,
                        work,
                        records,
                        indices,
                    }
                })
                .collect(),
        })
        .collect();

    Grouping { years }
}
