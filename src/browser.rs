use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::anchors::{fragment_url, ScrollSurface};
use crate::countdown::{CountdownFields, DISPLAY_FIELD_IDS};
use crate::layout::{format_px, SectionBox, HEADER_OFFSET_PROPERTY};

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn document_is_complete(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
        .is_some_and(|state| state == "complete")
}

pub fn rendered_height(element: Option<HtmlElement>) -> Option<f64> {
    element.map(|element| f64::from(element.offset_height()))
}

pub fn publish_header_offset(total: f64) {
    let Some(root) = document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let _ = root.style().set_property(HEADER_OFFSET_PROPERTY, &format_px(total));
}

pub fn set_scroll_lock(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

pub fn section_box(element: &Element) -> SectionBox {
    let rect = element.get_bounding_client_rect();
    SectionBox {
        top: rect.top(),
        height: rect.height(),
    }
}

pub struct WindowPage {
    window: Window,
    reduced_motion: bool,
}

impl WindowPage {
    pub fn current(reduced_motion: bool) -> Option<Self> {
        Some(Self {
            window: window()?,
            reduced_motion,
        })
    }
}

impl ScrollSurface for WindowPage {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_window_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if self.reduced_motion {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn replace_fragment(&self, id: &str) {
        if let Ok(history) = self.window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment_url(id)));
        }
    }
}

pub fn current_fragment() -> Option<String> {
    window()?.location().hash().ok()
}

pub fn element_exists(id: &str) -> bool {
    document().and_then(|d| d.get_element_by_id(id)).is_some()
}

pub struct CountdownDisplay {
    fields: [Element; 4],
}

impl CountdownDisplay {
    pub fn locate(document: &Document) -> Result<Self, &'static str> {
        let find = |id: &'static str| document.get_element_by_id(id).ok_or(id);

        Ok(Self {
            fields: [
                find(DISPLAY_FIELD_IDS[0])?,
                find(DISPLAY_FIELD_IDS[1])?,
                find(DISPLAY_FIELD_IDS[2])?,
                find(DISPLAY_FIELD_IDS[3])?,
            ],
        })
    }
}

impl CountdownFields for CountdownDisplay {
    fn render(&self, values: &[String; 4]) {
        for (field, value) in self.fields.iter().zip(values) {
            if field.text_content().as_deref() != Some(value.as_str()) {
                field.set_text_content(Some(value));
            }
        }
    }
}

pub fn expose_global(window: &Window, name: &str, value: &JsValue) -> bool {
    Reflect::set(window, &JsValue::from_str(name), value).unwrap_or(false)
}

pub fn remove_global(name: &str) {
    if let Some(win) = window() {
        let _ = Reflect::delete_property(&win, &JsValue::from_str(name));
    }
}
