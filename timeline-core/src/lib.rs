//! Logic lõi dựng timeline bài đăng: gom nhóm, bố cục, cảnh vẽ và hover.

mod account;
mod config;
mod group;
mod hover;
mod layout;
mod model;
mod sample;
mod scene;
mod store;

pub use account::{account_from_url, AccountTextures};
pub use config::{DataSource, Margin, PackingMode, PopupOffset, TimelineConfig};
pub use group::{group_posts, Grouping, WorkGroup, YearGroup};
pub use hover::{HoverChange, HoverController, HoverEvent, HoverState, PreviewRenderer};
pub use layout::{compute_layout, LayoutRow, MarkerPosition, TimelineLayout, YearAnchor};
pub use model::{Point, PostRecord};
pub use sample::{sample_posts, sample_textures};
pub use scene::{render_scene, Fill, PatternDef, Scene, Shape, TextAnchor};
pub use store::{PostStore, StoreState};

/// Lỗi chung khi dựng timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Nguồn dữ liệu trả về lỗi: {0}")]
    Upstream(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}

/// Chạy trọn chuỗi gom nhóm → bố cục → cảnh vẽ cho một danh sách bài đăng.
pub fn build_scene(
    records: &[PostRecord],
    textures: &AccountTextures,
    config: &TimelineConfig,
) -> Scene {
    let grouping = group_posts(records);
    let layout = compute_layout(&grouping, config);
    render_scene(&layout, records, textures, config)
}

/// Cảnh vẽ theo trạng thái kho: `None` khi dữ liệu chưa về (không vẽ gì),
/// kho lỗi cho timeline rỗng chỉ có trục.
pub fn store_scene(
    store: &PostStore,
    textures: &AccountTextures,
    config: &TimelineConfig,
) -> Option<Scene> {
    match store.state() {
        StoreState::Pending => None,
        StoreState::Loaded(_) | StoreState::Failed => {
            Some(build_scene(store.records(), textures, config))
        }
    }
}
