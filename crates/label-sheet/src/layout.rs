use crate::options::{LabelOptions, LabelTemplate, PageGeometry};
use crate::types::LabelRequest;

/// Cell slot of one label on the paginated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub page: usize,
    pub row: usize,
    pub column: usize,
}

/// Absolute page coordinate in points, origin at the bottom-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePoint {
    pub x: f32,
    pub y: f32,
}

/// Which field a line of label text shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Serial,
    ProductType,
    Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub kind: LineKind,
    pub anchor: PagePoint,
    pub text: String,
}

/// A label with its final position and the text drawn inside it
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub index: usize,
    pub position: GridPosition,
    pub origin: PagePoint,
    pub lines: Vec<TextLine>,
}

/// Map a zero-based label index to its page, row and column.
///
/// Once a page's rows are used up the index continues on the next page.
pub fn grid_position(geometry: &PageGeometry, index: usize) -> GridPosition {
    let capacity = geometry.capacity().max(1);
    let columns = geometry.columns.max(1);
    let on_page = index % capacity;

    GridPosition {
        page: index / capacity,
        row: on_page / columns,
        column: on_page % columns,
    }
}

/// Bottom-left corner of the cell at `position`
pub fn cell_origin(geometry: &PageGeometry, position: GridPosition) -> PagePoint {
    PagePoint {
        x: geometry.margin_pt
            + position.column as f32 * (geometry.label_width_pt + geometry.x_spacing_pt),
        y: geometry.page_height_pt
            - geometry.margin_pt
            - (position.row + 1) as f32 * (geometry.label_height_pt + geometry.y_spacing_pt),
    }
}

/// Cell origin for a zero-based label index
pub fn label_origin(geometry: &PageGeometry, index: usize) -> PagePoint {
    cell_origin(geometry, grid_position(geometry, index))
}

/// Text anchor for a line whose baseline sits `offset_pt` below the cell top
pub fn line_anchor(
    geometry: &PageGeometry,
    template: &LabelTemplate,
    origin: PagePoint,
    offset_pt: f32,
) -> PagePoint {
    PagePoint {
        x: origin.x + template.text_inset_pt,
        y: origin.y + geometry.label_height_pt - offset_pt,
    }
}

/// Lay out every non-blank label of `request` in index order
pub fn plan_labels(request: &LabelRequest, options: &LabelOptions) -> Vec<PlacedLabel> {
    let geometry = &options.geometry;
    let template = &options.template;

    request
        .serials
        .iter()
        .enumerate()
        .filter(|(_, serial)| !serial.trim().is_empty())
        .map(|(index, serial)| {
            let position = grid_position(geometry, index);
            let origin = cell_origin(geometry, position);

            let lines = vec![
                TextLine {
                    kind: LineKind::Serial,
                    anchor: line_anchor(geometry, template, origin, template.serial_offset_pt),
                    text: format!("{}{}", template.serial_prefix, serial.trim()),
                },
                TextLine {
                    kind: LineKind::ProductType,
                    anchor: line_anchor(
                        geometry,
                        template,
                        origin,
                        template.product_type_offset_pt,
                    ),
                    text: format!("{}{}", template.product_type_prefix, request.product_type),
                },
                TextLine {
                    kind: LineKind::Date,
                    anchor: line_anchor(geometry, template, origin, template.date_offset_pt),
                    text: request.date.clone(),
                },
            ];

            PlacedLabel {
                index,
                position,
                origin,
                lines,
            }
        })
        .collect()
}
