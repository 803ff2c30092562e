use crate::PostRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StoreState {
    /// Đang chờ tải; không được vẽ gì.
    #[default]
    Pending,
    Loaded(Vec<PostRecord>),
    /// Tải thất bại; store rỗng vĩnh viễn, không thử lại.
    Failed,
}

/// Kho bài đăng duy nhất của một timeline. Danh sách chỉ được thay nguyên khối.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostStore {
    state: StoreState,
    generation: u64,
}

impl PostStore {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn loaded(records: Vec<PostRecord>) -> Self {
        let mut store = Self::default();
        store.replace(records);
        store
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Số lần danh sách đã được thay; dùng làm khóa vẽ lại.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, StoreState::Loaded(_))
    }

    pub fn records(&self) -> &[PostRecord] {
        match &self.state {
            StoreState::Loaded(records) => records,
            StoreState::Pending | StoreState::Failed => &[],
        }
    }

    pub fn get(&self, id: u32) -> Option<&PostRecord> {
        self.records().iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn replace(&mut self, records: Vec<PostRecord>) -> u64 {
        self.state = StoreState::Loaded(records);
        self.generation += 1;
        self.generation
    }

    pub fn mark_failed(&mut self) {
        self.state = StoreState::Failed;
        self.generation += 1;
    }
}
