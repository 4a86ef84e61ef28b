use label_sheet::*;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

fn request(serials: &[&str]) -> LabelRequest {
    LabelRequest::new(
        "2024-01-01",
        "X",
        serials.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn test_default_geometry_is_three_by_seven() {
    let geometry = PageGeometry::default();
    assert_eq!(geometry.columns, 3);
    assert_eq!(geometry.rows, 7);
    assert_eq!(geometry.capacity(), 21);
    assert!(geometry.validate().is_ok());
}

#[test]
fn test_grid_position_row_major() {
    let geometry = PageGeometry::default();

    assert_eq!(
        grid_position(&geometry, 0),
        GridPosition { page: 0, row: 0, column: 0 }
    );
    assert_eq!(
        grid_position(&geometry, 2),
        GridPosition { page: 0, row: 0, column: 2 }
    );
    assert_eq!(
        grid_position(&geometry, 3),
        GridPosition { page: 0, row: 1, column: 0 }
    );
    assert_eq!(
        grid_position(&geometry, 20),
        GridPosition { page: 0, row: 6, column: 2 }
    );
}

#[test]
fn test_grid_position_starts_new_page() {
    let geometry = PageGeometry::default();

    assert_eq!(
        grid_position(&geometry, 21),
        GridPosition { page: 1, row: 0, column: 0 }
    );
    assert_eq!(
        grid_position(&geometry, 44),
        GridPosition { page: 2, row: 0, column: 2 }
    );
}

#[test]
fn test_label_origin_formula() {
    let geometry = PageGeometry::default();

    let first = label_origin(&geometry, 0);
    assert!(approx_eq(first.x, 56.7));
    assert!(approx_eq(first.y, geometry.page_height_pt - 56.7 - 107.64));

    // Row 1, column 1
    let p = label_origin(&geometry, 4);
    assert!(approx_eq(p.x, 56.7 + 180.08 + 5.67));
    assert!(approx_eq(p.y, geometry.page_height_pt - 56.7 - 2.0 * 107.64));
}

#[test]
fn test_origins_inside_page_for_full_page() {
    let geometry = PageGeometry::default();

    for index in 0..geometry.capacity() {
        let p = label_origin(&geometry, index);
        assert!(p.x > 0.0 && p.x < geometry.page_width_pt, "index {index}: x={}", p.x);
        assert!(p.y > 0.0 && p.y < geometry.page_height_pt, "index {index}: y={}", p.y);
    }
}

#[test]
fn test_cells_do_not_overlap() {
    let geometry = PageGeometry::default();
    let w = geometry.label_width_pt;
    let h = geometry.label_height_pt;

    let origins: Vec<PagePoint> = (0..geometry.capacity())
        .map(|i| label_origin(&geometry, i))
        .collect();

    for (i, a) in origins.iter().enumerate() {
        for b in origins.iter().skip(i + 1) {
            let separate_x = a.x + w <= b.x + 0.001 || b.x + w <= a.x + 0.001;
            let separate_y = a.y + h <= b.y + 0.001 || b.y + h <= a.y + 0.001;
            assert!(separate_x || separate_y, "cells at {a:?} and {b:?} overlap");
        }
    }
}

#[test]
fn test_next_page_reuses_first_page_coordinates() {
    let geometry = PageGeometry::default();
    assert_eq!(label_origin(&geometry, 21), label_origin(&geometry, 0));
    assert_eq!(label_origin(&geometry, 25), label_origin(&geometry, 4));
}

#[test]
fn test_page_count() {
    let geometry = PageGeometry::default();
    assert_eq!(geometry.page_count(1), 1);
    assert_eq!(geometry.page_count(21), 1);
    assert_eq!(geometry.page_count(22), 2);
    assert_eq!(geometry.page_count(63), 3);
}

#[test]
fn test_plan_auto_five_labels() {
    let serials = generate_serials(5, &SerialSource::Auto { start: 100 }).unwrap();
    let request = LabelRequest::new("2024-01-01", "X", serials).unwrap();
    let placed = plan_labels(&request, &LabelOptions::default());

    let expected = [
        ("#100", 0, 0),
        ("#101", 0, 1),
        ("#102", 0, 2),
        ("#103", 1, 0),
        ("#104", 1, 1),
    ];
    assert_eq!(placed.len(), expected.len());
    for (label, (serial, row, column)) in placed.iter().zip(expected) {
        assert_eq!(label.lines[0].text, serial);
        assert_eq!(label.position.page, 0);
        assert_eq!(label.position.row, row);
        assert_eq!(label.position.column, column);
    }
}

#[test]
fn test_plan_text_lines() {
    let options = LabelOptions::default();
    let placed = plan_labels(&request(&["7"]), &options);
    let label = &placed[0];

    let kinds: Vec<LineKind> = label.lines.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, vec![LineKind::Serial, LineKind::ProductType, LineKind::Date]);

    assert_eq!(label.lines[0].text, "#7");
    assert_eq!(label.lines[1].text, "Typ X");
    assert_eq!(label.lines[2].text, "2024-01-01");

    let top = label.origin.y + options.geometry.label_height_pt;
    assert!(approx_eq(label.lines[0].anchor.y, top - 20.0));
    assert!(approx_eq(label.lines[1].anchor.y, top - 40.0));
    assert!(approx_eq(label.lines[2].anchor.y, top - 60.0));
    for line in &label.lines {
        assert!(approx_eq(line.anchor.x, label.origin.x + 10.0));
    }
}

#[test]
fn test_plan_skips_blank_serials_but_keeps_their_cells() {
    let placed = plan_labels(&request(&["A1", "", "C3"]), &LabelOptions::default());

    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].index, 0);
    assert_eq!(placed[1].index, 2);
    assert_eq!(placed[1].position.column, 2);
}

#[test]
fn test_plan_paginates() {
    let serials = generate_serials(22, &SerialSource::Auto { start: 1 }).unwrap();
    let request = LabelRequest::new("d", "p", serials).unwrap();
    let placed = plan_labels(&request, &LabelOptions::default());

    let last = placed.last().unwrap();
    assert_eq!(last.index, 21);
    assert_eq!(last.position, GridPosition { page: 1, row: 0, column: 0 });
}
