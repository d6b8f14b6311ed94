use std::cell::Cell;

pub const HEADER_OFFSET_PROPERTY: &str = "--header-total";

pub fn header_total(header_height: Option<f64>, nav_height: Option<f64>) -> f64 {
    header_height.unwrap_or(0.0) + nav_height.unwrap_or(0.0)
}

pub fn format_px(value: f64) -> String {
    format!("{value}px")
}

pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64, gap: f64) -> f64 {
    element_top + scroll_y - header_offset - gap
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the section whose vertical center is closest to the viewport
/// center. Ties go to the earliest section.
pub fn nearest_to_viewport_center(
    sections: impl IntoIterator<Item = SectionBox>,
    viewport_height: f64,
) -> Option<usize> {
    let viewport_center = viewport_height / 2.0;
    let mut best: Option<(usize, f64)> = None;

    for (index, section) in sections.into_iter().enumerate() {
        let distance = (section.center() - viewport_center).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

#[derive(Debug, Default)]
pub struct LayoutOffset {
    value: Cell<f64>,
}

impl LayoutOffset {
    pub fn get(&self) -> f64 {
        self.value.get()
    }

    pub fn publish(&self, total: f64) -> bool {
        self.value.replace(total) != total
    }
}
