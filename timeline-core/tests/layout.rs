use timeline_core::{
    compute_layout, group_posts, sample_posts, PackingMode, PostRecord, TimelineConfig,
};

fn post(id: u32, date: &str, work: &str) -> PostRecord {
    PostRecord {
        id,
        date: date.to_string(),
        work: work.to_string(),
        url: format!("https://x.com/acc1/status/{id}"),
    }
}

fn narrow_config() -> TimelineConfig {
    let base = TimelineConfig::default();
    TimelineConfig {
        canvas_width: base.margin.left + base.dot_gap,
        ..base
    }
}

#[test]
fn single_slot_per_line_wraps_into_same_row() {
    let config = narrow_config();
    let records = vec![post(1, "1983-05-28", "A"), post(2, "1983-05-28", "A")];

    let grouping = group_posts(&records);
    let layout = compute_layout(&grouping, &config);

    assert_eq!(layout.max_per_line, 1);
    assert_eq!(layout.rows.len(), 1);
    let row = &layout.rows[0];
    assert_eq!((row.year.as_str(), row.work.as_str()), ("1983", "A"));
    assert_eq!(row.line_count, 2);

    let first = layout.marker(1).expect("thiếu chấm 1");
    let second = layout.marker(2).expect("thiếu chấm 2");
    assert_eq!((first.line_index, second.line_index), (0, 1));
    assert_eq!(first.x, second.x);
    assert_eq!(second.y - first.y, 2.0 * config.dot_radius + config.line_spacing);
}

#[test]
fn degenerate_width_clamps_to_one_per_line() {
    let config = TimelineConfig {
        canvas_width: 100.0,
        ..TimelineConfig::default()
    };
    let records = vec![post(1, "2000-01-01", "A"), post(2, "2000-01-01", "A")];
    let layout = compute_layout(&group_posts(&records), &config);
    assert_eq!(layout.max_per_line, 1);
    assert_eq!(layout.total_lines, 2);

    let zero_gap = TimelineConfig {
        dot_gap: 0.0,
        ..TimelineConfig::default()
    };
    let layout = compute_layout(&group_posts(&records), &zero_gap);
    assert_eq!(layout.max_per_line, 1);
}

#[test]
fn center_packing_is_symmetric_around_spine() {
    let config = TimelineConfig::default();
    let records: Vec<PostRecord> = (1..=3).map(|id| post(id, "1990-01-01", "A")).collect();
    let layout = compute_layout(&group_posts(&records), &config);

    let xs: Vec<f64> = layout.markers().map(|marker| marker.x).collect();
    let left = config.margin.left;
    assert_eq!(xs, vec![left - config.dot_gap, left, left + config.dot_gap]);
}

#[test]
fn center_packing_centers_partial_last_line() {
    let config = TimelineConfig::default();
    // 7 chấm mỗi dòng với cấu hình mặc định, dòng thứ hai có 2 chấm.
    let records: Vec<PostRecord> = (1..=9).map(|id| post(id, "1990-01-01", "A")).collect();
    let layout = compute_layout(&group_posts(&records), &config);
    assert_eq!(layout.max_per_line, 7);

    let second_line: Vec<f64> = layout
        .markers()
        .filter(|marker| marker.line_index == 1)
        .map(|marker| marker.x)
        .collect();
    let left = config.margin.left;
    let half_gap = config.dot_gap / 2.0;
    assert_eq!(second_line, vec![left - half_gap, left + half_gap]);
}

#[test]
fn left_packing_starts_on_spine() {
    let config = TimelineConfig {
        packing: PackingMode::Left,
        ..TimelineConfig::default()
    };
    let records: Vec<PostRecord> = (1..=3).map(|id| post(id, "1990-01-01", "A")).collect();
    let layout = compute_layout(&group_posts(&records), &config);

    let xs: Vec<f64> = layout.markers().map(|marker| marker.x).collect();
    let left = config.margin.left;
    assert_eq!(
        xs,
        vec![left, left + config.dot_gap, left + 2.0 * config.dot_gap]
    );
}

#[test]
fn slots_are_evenly_spaced_inside_margin_band() {
    let config = TimelineConfig::default();
    let records = sample_posts();
    let layout = compute_layout(&group_posts(&records), &config);

    assert_eq!(layout.height, config.min_height);
    let ys: Vec<f64> = layout.rows.iter().map(|row| row.slot_y).collect();
    assert_eq!(ys.len(), 3);

    let band = layout.spine_bottom - layout.spine_top;
    let step = band / 3.0;
    for (index, y) in ys.iter().enumerate() {
        let expected = layout.spine_top + (index as f64 + 0.5) * step;
        assert!((y - expected).abs() < 1e-9);
        assert!(*y > layout.spine_top && *y < layout.spine_bottom);
    }
}

#[test]
fn year_anchor_uses_first_row_of_year() {
    let config = TimelineConfig::default();
    let records = vec![
        post(1, "1985-01-01", "A"),
        post(2, "1985-01-01", "B"),
        post(3, "1990-01-01", "C"),
    ];
    let layout = compute_layout(&group_posts(&records), &config);

    assert_eq!(layout.years.len(), 2);
    assert_eq!(layout.years[0].year, "1985");
    assert_eq!(layout.years[0].y, layout.rows[0].slot_y);
    assert_eq!(layout.years[1].y, layout.rows[2].slot_y);
}

#[test]
fn height_grows_with_wrapped_rows() {
    let config = narrow_config();
    let records: Vec<PostRecord> = (1..=20).map(|id| post(id, "1990-01-01", "A")).collect();
    let layout = compute_layout(&group_posts(&records), &config);

    let dynamic = 20.0 * config.row_height + config.margin.top + config.margin.bottom;
    assert_eq!(layout.total_lines, 20);
    assert!(layout.height >= dynamic);
    assert_eq!(layout.spine_bottom, layout.height - config.margin.bottom);

    let last = layout.marker(20).expect("thiếu chấm 20");
    assert_eq!(last.line_index, 19);
    assert!(last.y + config.dot_radius <= layout.spine_bottom + 1e-9);
}

#[test]
fn wrapped_last_row_stays_inside_canvas() {
    // Một dòng 60px không chứa nổi hai bước ngắt 34px; hàng cuối dễ tràn nhất.
    let config = narrow_config();
    let mut records = vec![post(1, "1980-01-01", "A")];
    records.extend((2..=11).map(|id| post(id, "1990-01-01", "B")));
    let layout = compute_layout(&group_posts(&records), &config);

    assert_eq!(layout.rows[1].line_count, 10);
    for marker in layout.markers() {
        assert!(
            marker.y + config.dot_radius <= layout.spine_bottom + 1e-9,
            "chấm {} tràn khỏi trục: y = {}, đáy = {}",
            marker.record_id,
            marker.y,
            layout.spine_bottom
        );
    }
}

#[test]
fn year_axis_clears_leftmost_marker() {
    let config = TimelineConfig::default();
    let records: Vec<PostRecord> = (1..=7).map(|id| post(id, "1990-01-01", "A")).collect();
    let layout = compute_layout(&group_posts(&records), &config);

    let leftmost_edge = layout
        .markers()
        .map(|marker| marker.x - config.dot_radius)
        .fold(f64::INFINITY, f64::min);
    assert!(layout.year_axis_x < leftmost_edge);
    assert!(layout.year_axis_x <= config.margin.left / 2.0);
}

#[test]
fn year_axis_defaults_to_half_left_margin() {
    let config = TimelineConfig::default();
    let layout = compute_layout(&group_posts(&[post(1, "1990-01-01", "A")]), &config);
    assert_eq!(layout.year_axis_x, config.margin.left / 2.0);
}

#[test]
fn markers_remember_their_input_position() {
    let config = TimelineConfig::default();
    let records = vec![
        post(7, "1990-01-01", "A"),
        post(7, "1985-01-01", "B"),
        post(9, "1990-01-01", "A"),
    ];
    let layout = compute_layout(&group_posts(&records), &config);

    let indices: Vec<(u32, usize)> = layout
        .markers()
        .map(|marker| (marker.record_id, marker.record_index))
        .collect();
    assert_eq!(indices, vec![(7, 1), (7, 0), (9, 2)]);
}

#[test]
fn empty_grouping_keeps_minimum_canvas() {
    let config = TimelineConfig::default();
    let layout = compute_layout(&group_posts(&[]), &config);
    assert!(layout.rows.is_empty());
    assert!(layout.years.is_empty());
    assert_eq!(layout.height, config.min_height);
}
