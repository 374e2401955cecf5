use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCollection, HtmlElement};

use crate::field::{DotVisual, GridSpec, ProximityField};

/// Publishes the pointer's viewport position as `--mouse-x`/`--mouse-y` on
/// the document root. The custom cursor glyph is positioned purely in CSS
/// from those two variables, so this component renders nothing itself.
///
/// The listener is removed when the component is disposed; the last written
/// values are deliberately left in place.
#[component]
pub fn MouseTracker() -> impl IntoView {
    let _ = use_event_listener(use_document(), ev::mousemove, |evt| {
        let Some(root) = document().document_element() else {
            return;
        };
        let Ok(root) = root.dyn_into::<HtmlElement>() else {
            return;
        };
        let style = root.style();
        let _ = style.set_property("--mouse-x", &format!("{}px", evt.client_x()));
        let _ = style.set_property("--mouse-y", &format!("{}px", evt.client_y()));
    });
}

/// Background grid of dots which shy away from the cursor.
///
/// `container` is the element whose pointer events drive the field - the dot
/// layer itself is `pointer-events-none` so it never swallows clicks. Dot
/// centers are derived from the grid fractions and one container rect sample
/// per event instead of reading each dot's rendered rect back.
#[component]
pub fn DotField(container: NodeRef<html::Div>) -> impl IntoView {
    let dots_ref = NodeRef::<html::Div>::new();
    let spec = GridSpec::default();
    let field = StoredValue::new(Arc::new(Mutex::new(ProximityField::new(spec))));

    let _ = use_event_listener(container, ev::mousemove, move |evt| {
        let Some(container_el) = container.get_untracked() else {
            return;
        };
        let Some(dots_el) = dots_ref.get_untracked() else {
            return;
        };
        let rect = container_el.get_bounding_client_rect();
        let x = f64::from(evt.client_x()) - rect.left();
        let y = f64::from(evt.client_y()) - rect.top();
        let dots = dots_el.children();
        field.with_value(|f| {
            let mut f = f.lock().expect("should be able to lock dot field");
            for (i, visual) in f.pointer_moved(rect.width(), rect.height(), x, y).iter().enumerate() {
                apply_visual(&dots, i as u32, visual);
            }
        });
    });

    let _ = use_event_listener(container, ev::mouseleave, move |_| {
        let Some(dots_el) = dots_ref.get_untracked() else {
            return;
        };
        let dots = dots_el.children();
        field.with_value(|f| {
            let mut f = f.lock().expect("should be able to lock dot field");
            for (i, visual) in f.pointer_left().iter().enumerate() {
                apply_visual(&dots, i as u32, visual);
            }
        });
    });

    view! {
        <div node_ref=dots_ref class="absolute inset-0 pointer-events-none" aria-hidden="true">
            {(0..spec.rows)
                .flat_map(|row| (0..spec.cols).map(move |col| (row, col)))
                .map(|(row, col)| {
                    let delay = (row + col) as f64 * 0.1;
                    view! {
                        <div
                            class="dot w-1 h-1 bg-teal-400 rounded-full transition-all duration-200 ease-out"
                            style:left=format!("{}%", spec.left_frac(col) * 100.0)
                            style:top=format!("{}%", spec.top_frac(row) * 100.0)
                            style:animation-delay=format!("{delay}s")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn apply_visual(dots: &HtmlCollection, index: u32, visual: &DotVisual) {
    // a dot with no live element yet (first-render race) is skipped this event
    let Some(dot) = dots.item(index) else {
        return;
    };
    let Ok(dot) = dot.dyn_into::<HtmlElement>() else {
        return;
    };
    let style = dot.style();
    let _ = style.set_property(
        "transform",
        &format!(
            "translate({}px, {}px) scale({})",
            visual.offset_x, visual.offset_y, visual.scale
        ),
    );
    let _ = style.set_property("opacity", &visual.opacity.to_string());
}
