//! Cảnh vẽ khai báo: danh sách hình có vị trí, kiểu dáng và id bài đăng.
//!
//! Giao diện yew và bộ xuất SVG tĩnh cùng đọc một `Scene`, nên phép tính vị trí
//! chỉ nằm ở `layout`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::{account_from_url, AccountTextures, Point, PostRecord, TimelineConfig, TimelineLayout};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const YEAR_TICK_SIZE: f64 = 6.0;
const YEAR_TICK_PADDING: f64 = 16.0;
const ROW_LABEL_GAP: f64 = 8.0;
const SPINE_WIDTH: f64 = 6.0;
const SPINE_OPACITY: f64 = 0.85;
const MARKER_STROKE: &str = "#fff";
const MARKER_STROKE_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Cách tô một chấm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Fill {
    Color(String),
    /// Tham chiếu tới `PatternDef::id`.
    Pattern(String),
}

impl Fill {
    /// Giá trị thuộc tính `fill` của SVG.
    pub fn css_value(&self) -> String {
        match self {
            Self::Color(color) => color.clone(),
            Self::Pattern(id) => format!("url(#{id})"),
        }
    }
}

/// Ảnh nền của một tài khoản, khai báo đúng một lần cho mỗi tài khoản.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternDef {
    pub id: String,
    pub account: String,
    pub image_href: String,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Shape {
    Line {
        class: String,
        from: Point,
        to: Point,
        stroke: String,
        stroke_width: f64,
        opacity: f64,
    },
    Text {
        class: String,
        position: Point,
        anchor: TextAnchor,
        content: String,
    },
    Marker {
        record_id: u32,
        url: String,
        center: Point,
        radius: f64,
        fill: Fill,
        stroke: String,
        stroke_width: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub patterns: Vec<PatternDef>,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn markers(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Marker { .. }))
    }

    /// Tìm chấm của một bài đăng, trả về tâm và URL.
    pub fn marker(&self, id: u32) -> Option<(Point, &str)> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::Marker {
                record_id,
                center,
                url,
                ..
            } if *record_id == id => Some((*center, url.as_str())),
            _ => None,
        })
    }

    /// Xuất cảnh thành một tài liệu SVG độc lập.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );

        if !self.patterns.is_empty() {
            out.push_str("  <defs>\n");
            for pattern in &self.patterns {
                let _ = writeln!(
                    out,
                    r#"    <pattern id="{id}" patternUnits="objectBoundingBox" width="1" height="1"><image href="{href}" x="0" y="0" width="{s}" height="{s}" preserveAspectRatio="xMidYMid slice"/></pattern>"#,
                    id = escape_xml(&pattern.id),
                    href = escape_xml(&pattern.image_href),
                    s = pattern.size
                );
            }
            out.push_str("  </defs>\n");
        }

        for shape in &self.shapes {
            match shape {
                Shape::Line {
                    class,
                    from,
                    to,
                    stroke,
                    stroke_width,
                    opacity,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
                        escape_xml(class),
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        escape_xml(stroke),
                        stroke_width,
                        opacity
                    );
                }
                Shape::Text {
                    class,
                    position,
                    anchor,
                    content,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <text class="{}" x="{}" y="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                        escape_xml(class),
                        position.x,
                        position.y,
                        anchor.as_str(),
                        escape_xml(content)
                    );
                }
                Shape::Marker {
                    record_id,
                    url,
                    center,
                    radius,
                    fill,
                    stroke,
                    stroke_width,
                } => {
                    let _ = writeln!(
                        out,
                        r#"  <a href="{}"><circle class="timeline-dot" data-id="{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/></a>"#,
                        escape_xml(url),
                        record_id,
                        center.x,
                        center.y,
                        radius,
                        escape_xml(&fill.css_value()),
                        escape_xml(stroke),
                        stroke_width
                    );
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

/// Dựng cảnh từ bố cục. Mỗi lần gọi tạo cảnh mới hoàn toàn.
pub fn render_scene(
    layout: &TimelineLayout,
    records: &[PostRecord],
    textures: &AccountTextures,
    config: &TimelineConfig,
) -> Scene {
    let mut scene = Scene {
        width: layout.width,
        height: layout.height,
        ..Scene::default()
    };

    scene.shapes.push(Shape::Line {
        class: "verticalLine".to_string(),
        from: Point::new(config.margin.left, layout.spine_top),
        to: Point::new(config.margin.left, layout.spine_bottom),
        stroke: config.spine_color.clone(),
        stroke_width: SPINE_WIDTH,
        opacity: SPINE_OPACITY,
    });

    let axis_x = layout.year_axis_x;
    for anchor in &layout.years {
        scene.shapes.push(Shape::Line {
            class: "year-tick".to_string(),
            from: Point::new(axis_x - YEAR_TICK_SIZE, anchor.y),
            to: Point::new(axis_x, anchor.y),
            stroke: config.spine_color.clone(),
            stroke_width: 1.0,
            opacity: 1.0,
        });
        scene.shapes.push(Shape::Text {
            class: "year-label".to_string(),
            position: Point::new(axis_x - YEAR_TICK_PADDING, anchor.y),
            anchor: TextAnchor::End,
            content: anchor.year.clone(),
        });
    }

    for row in &layout.rows {
        let left_x = row
            .markers
            .iter()
            .filter(|marker| marker.line_index == 0)
            .map(|marker| marker.x)
            .fold(f64::INFINITY, f64::min);
        let left_x = if left_x.is_finite() {
            left_x
        } else {
            config.margin.left
        };
        scene.shapes.push(Shape::Text {
            class: "work-label".to_string(),
            position: Point::new(left_x, row.slot_y - config.dot_radius - ROW_LABEL_GAP),
            anchor: TextAnchor::Start,
            content: row.work.clone(),
        });
    }

    for marker in layout.markers() {
        let Some(record) = records
            .get(marker.record_index)
            .filter(|record| record.id == marker.record_id)
        else {
            continue;
        };

        let fill = match textured_account(record, textures) {
            Some((account, href)) => {
                let id = AccountTextures::pattern_id(&account);
                if !scene.patterns.iter().any(|pattern| pattern.id == id) {
                    scene.patterns.push(PatternDef {
                        id: id.clone(),
                        account,
                        image_href: href.to_string(),
                        size: config.dot_radius * 2.0,
                    });
                }
                Fill::Pattern(id)
            }
            None => Fill::Color(config.dot_color.clone()),
        };

        scene.shapes.push(Shape::Marker {
            record_id: record.id,
            url: record.url.clone(),
            center: Point::new(marker.x, marker.y),
            radius: config.dot_radius,
            fill,
            stroke: MARKER_STROKE.to_string(),
            stroke_width: MARKER_STROKE_WIDTH,
        });
    }

    scene
}

fn textured_account<'t>(
    record: &PostRecord,
    textures: &'t AccountTextures,
) -> Option<(String, &'t str)> {
    let account = account_from_url(&record.url)?;
    let href = textures.image_for(&account)?;
    Some((account, href))
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
