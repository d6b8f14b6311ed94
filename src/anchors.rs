use crate::layout::scroll_destination;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    Default,
    Swallow,
    Intercept(String),
}

pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn classify_anchor(
    href: Option<&str>,
    primary: bool,
    target_exists: impl FnOnce(&str) -> bool,
) -> AnchorAction {
    let Some(href) = href.filter(|value| value.starts_with('#')) else {
        return AnchorAction::Default;
    };

    match fragment_target(href).filter(|id| target_exists(id)) {
        Some(id) => AnchorAction::Intercept(id.to_string()),
        None if primary => AnchorAction::Swallow,
        None => AnchorAction::Default,
    }
}

pub fn initial_fragment(hash: &str) -> Option<&str> {
    fragment_target(hash)
}

pub fn fragment_url(id: &str) -> String {
    format!("#{id}")
}

pub const SCROLL_GAP_PX: f64 = 6.0;

pub trait ScrollSurface {
    fn section_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn scroll_window_to(&self, top: f64);
    fn replace_fragment(&self, id: &str);
}

/// Scrolls to `target_id`, keeping it clear of the sticky header. A missing
/// target leaves the page untouched and returns `false`.
pub fn scroll_to_section(surface: &impl ScrollSurface, target_id: &str, header_offset: f64) -> bool {
    let Some(top) = surface.section_top(target_id) else {
        return false;
    };

    surface.scroll_window_to(scroll_destination(
        top,
        surface.scroll_y(),
        header_offset,
        SCROLL_GAP_PX,
    ));
    true
}

pub fn navigate(surface: &impl ScrollSurface, target_id: &str, header_offset: f64) -> bool {
    if !scroll_to_section(surface, target_id, header_offset) {
        return false;
    }

    surface.replace_fragment(target_id);
    true
}
