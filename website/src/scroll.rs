//! Smooth-scroll driver on `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use folio_app::{ScrollPlan, ScrollRequest};
use folio_core::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Measure the target and animate the viewport to it
pub fn animate(request: ScrollRequest) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let current_y = window.scroll_y().unwrap_or(0.0);
    let target_top = request
        .target
        .anchor()
        .and_then(|anchor| document_top(&window, anchor));
    let plan = request.plan(current_y, target_top);

    debug!(
        "Scrolling to {:?}: {} -> {} in {}ms",
        request.target,
        current_y,
        plan.destination(),
        request.duration_ms
    );
    run(&window, plan);
}

/// Offset of an element from the top of the document
fn document_top(window: &Window, id: &str) -> Option<f64> {
    let element = window.document()?.get_element_by_id(id)?;
    let scroll_y = window.scroll_y().ok()?;
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

fn run(window: &Window, plan: ScrollPlan) {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let mut started_at: Option<f64> = None;

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let start = *started_at.get_or_insert(now);
        let elapsed = now - start;

        let Some(window) = web_sys::window() else {
            return;
        };
        window.scroll_to_with_x_and_y(0.0, plan.position_at(elapsed));

        if plan.is_finished(elapsed) {
            // Releases this closure; no further frames are scheduled
            let _ = next.borrow_mut().take();
            return;
        }
        request_frame(&window, &next);
    }));

    request_frame(window, &frame);
}

fn request_frame(window: &Window, frame: &FrameCallback) {
    if let Some(callback) = frame.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
