//! Page micro-interactions around the canvases. Every wiring function
//! silently does nothing when its elements are missing.

use crate::constants::*;
use crate::core::ticker::{self, Jitter, TICKER_SYMBOLS};
use crate::dom;
use js_sys::Array;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_all(document: &web::Document) {
    wire_nav_fade(document);
    observe_once(document, FADE_IN_SELECTOR, FADE_IN_THRESHOLD, |el| {
        _ = el.class_list().add_1(CLASS_VISIBLE);
    });
    observe_once(document, STAT_SELECTOR, STAT_THRESHOLD, |el| {
        _ = el.class_list().add_1(CLASS_COUNTED);
    });
    wire_live_ticker(document);
    wire_ticker_jitter(document);
    wire_smooth_anchors(document);
    wire_video_card(document);
    wire_course_switching(document);
}

fn wire_nav_fade(document: &web::Document) {
    let Ok(Some(nav)) = document.query_selector(NAV_SELECTOR) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        _ = nav
            .class_list()
            .toggle_with_force(CLASS_SCROLLED, ticker::nav_scrolled(y));
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Apply `on_visible` to each matching element the first time it crosses
/// `threshold`, then stop observing it.
fn observe_once(
    document: &web::Document,
    selector: &str,
    threshold: f64,
    on_visible: impl Fn(&web::Element) + 'static,
) {
    let targets = dom::query_all(document, selector);
    if targets.is_empty() {
        return;
    }
    let Some(observer) = intersection_observer(threshold, move |entry, observer| {
        let el = entry.target();
        on_visible(&el);
        observer.unobserve(&el);
    }) else {
        return;
    };
    for el in &targets {
        observer.observe(el);
    }
}

fn intersection_observer(
    threshold: f64,
    mut on_enter: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_enter(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    callback.forget();
    match observer {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[page] IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

fn wire_live_ticker(document: &web::Document) {
    let Ok(live) = dom::element_by_id::<web::HtmlElement>(document, LIVE_RATE_ID) else {
        return;
    };
    dom::set_style(&live, "transition", "opacity 0.3s ease");
    let index = Rc::new(Cell::new(0usize));
    dom::set_interval(TICKER_ROTATE_MS, move || {
        let next = ticker::next_symbol_index(index.get(), TICKER_SYMBOLS.len());
        index.set(next);
        dom::set_style(&live, "opacity", "0");
        let live_swap = live.clone();
        dom::set_timeout(TICKER_FADE_MS, move || {
            live_swap.set_text_content(Some(TICKER_SYMBOLS[next]));
            dom::set_style(&live_swap, "opacity", "1");
        });
    });
}

fn wire_ticker_jitter(document: &web::Document) {
    let items = dom::query_all(document, TICKER_ITEM_SELECTOR);
    if items.is_empty() {
        return;
    }
    let rng = RefCell::new(StdRng::from_entropy());
    dom::set_interval(JITTER_MS, move || {
        let mut rng = rng.borrow_mut();
        for item in &items {
            if let Ok(Some(change)) = item.query_selector(TICKER_CHANGE_SELECTOR) {
                let jitter = Jitter::random(&mut *rng);
                change.set_text_content(Some(&jitter.label()));
                change.set_class_name(jitter.class_name());
            }
        }
    });
}

fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href_source = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

fn wire_video_card(document: &web::Document) {
    let (Ok(video), Ok(play_btn)) = (
        dom::element_by_id::<web::HtmlVideoElement>(document, VIDEO_ID),
        dom::element_by_id::<web::Element>(document, VIDEO_PLAY_BTN_ID),
    ) else {
        return;
    };

    let toggle = {
        let video = video.clone();
        let play_btn = play_btn.clone();
        Rc::new(move || {
            if video.paused() {
                play(&video, &play_btn);
            } else {
                _ = video.pause();
                _ = play_btn.class_list().remove_1(CLASS_PLAYING);
            }
        })
    };

    let toggle_btn = toggle.clone();
    dom::add_click_listener(&play_btn, move |ev| {
        ev.stop_propagation();
        toggle_btn();
    });

    let card = dom::element_by_id::<web::Element>(document, VIDEO_CARD_ID).ok();
    if let Some(card) = &card {
        let toggle_card = toggle.clone();
        dom::add_click_listener(card, move |_ev| toggle_card());
    }

    if let Ok(progress) = dom::element_by_id::<web::HtmlElement>(document, VIDEO_PROGRESS_ID) {
        let video_time = video.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(pct) = ticker::progress_percent(video_time.current_time(), video_time.duration())
            {
                dom::set_style(&progress, "width", &format!("{pct}%"));
            }
        }) as Box<dyn FnMut()>);
        _ = video.add_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(card) = card {
        let video_auto = video.clone();
        let btn_auto = play_btn.clone();
        if let Some(observer) = intersection_observer(VIDEO_THRESHOLD, move |entry, observer| {
            play(&video_auto, &btn_auto);
            observer.unobserve(&entry.target());
        }) {
            observer.observe(&card);
        }
    }
}

/// Start playback; the button only shows "playing" once the browser agrees.
/// A rejected play (autoplay policy) is ignored.
fn play(video: &web::HtmlVideoElement, play_btn: &web::Element) {
    let Ok(promise) = video.play() else {
        return;
    };
    let btn = play_btn.clone();
    spawn_local(async move {
        if JsFuture::from(promise).await.is_ok() {
            _ = btn.class_list().add_1(CLASS_PLAYING);
        }
    });
}

fn wire_course_switching(document: &web::Document) {
    let nodes = Rc::new(dom::query_all(document, SECTOR_NODE_SELECTOR));
    if nodes.is_empty() {
        return;
    }
    let tracks = Rc::new(dom::query_all(document, COURSE_TRACK_SELECTOR));

    for node in nodes.iter() {
        let nodes_c = nodes.clone();
        let tracks_c = tracks.clone();
        let node_c = node.clone();
        let doc = document.clone();
        dom::add_click_listener(node, move |_ev| {
            let course = node_c.get_attribute("data-course").unwrap_or_default();
            for n in nodes_c.iter() {
                _ = n.class_list().remove_1(CLASS_ACTIVE);
            }
            _ = node_c.class_list().add_1(CLASS_ACTIVE);

            let wanted = ticker::course_track_id(&course);
            for track in tracks_c.iter() {
                _ = track.class_list().remove_1(CLASS_VISIBLE);
                if track.id() == wanted {
                    let track = track.clone();
                    dom::set_timeout(COURSE_REVEAL_DELAY_MS, move || {
                        _ = track.class_list().add_1(CLASS_VISIBLE);
                    });
                }
            }

            let narrow = web::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .is_some_and(ticker::is_mobile_width);
            if narrow {
                if let Some(details) = doc.get_element_by_id(COURSE_DETAILS_ID) {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    details.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
        });
    }

    let default_selector = format!("[data-course=\"{DEFAULT_COURSE}\"]");
    if let Ok(Some(default_node)) = document.query_selector(&default_selector) {
        _ = default_node.class_list().add_1(CLASS_ACTIVE);
    }
}
