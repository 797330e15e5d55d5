//! Shop Map Component
//!
//! Raster tile map with shop markers, a "you are here" marker, popups,
//! zoom buttons and drag-to-pan. Tiles come from OpenStreetMap; all the
//! projection math lives in `coffee_snob::map`.

use coffee_snob::map::{MapView, Marker, MarkerKind, Viewport, TILE_SIZE};
use coffee_snob::views::{average_label, detail_path};
use coffee_snob::TileLayer;
use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Size used until the container has been measured
const INITIAL_SIZE: (f64, f64) = (800.0, 600.0);

/// Interactive map for the shop list
#[component]
pub fn ShopMap(map: MapView) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let viewport = create_rw_signal(map.viewport(INITIAL_SIZE.0, INITIAL_SIZE.1));
    let selected = create_rw_signal(None::<MarkerKind>);
    let drag_from = create_rw_signal(None::<(i32, i32)>);
    let layer = store_value(TileLayer::openstreetmap());

    let measure = move || {
        if let Some(el) = container.get_untracked() {
            let (w, h) = (f64::from(el.client_width()), f64::from(el.client_height()));
            if w > 0.0 && h > 0.0 {
                viewport.update(|v| v.resize(w, h));
            }
        }
    };

    container.on_load(move |_| {
        // Layout is not final until the next frame
        request_animation_frame(measure);
    });
    let resize_handle = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize_handle.remove());

    let on_mousedown = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        drag_from.set(Some((ev.client_x(), ev.client_y())));
    };
    let on_mousemove = move |ev: ev::MouseEvent| {
        if let Some((x, y)) = drag_from.get_untracked() {
            let (nx, ny) = (ev.client_x(), ev.client_y());
            viewport.update(|v| v.pan_by(f64::from(nx - x), f64::from(ny - y)));
            drag_from.set(Some((nx, ny)));
        }
    };
    let end_drag = move |_: ev::MouseEvent| drag_from.set(None);

    let tiles = move || {
        viewport.with(Viewport::visible_tiles)
            .into_iter()
            .map(|tile| {
                let src = layer.with_value(|l| l.tile_url(tile.id));
                view! {
                    <img
                        src=src
                        alt=""
                        draggable="false"
                        class="absolute select-none pointer-events-none"
                        style=format!(
                            "left: {}px; top: {}px; width: {}px; height: {}px;",
                            tile.left, tile.top, TILE_SIZE, TILE_SIZE
                        )
                    />
                }
            })
            .collect_view()
    };

    let markers = map
        .markers
        .iter()
        .copied()
        .map(|marker| view! { <MarkerPin marker=marker viewport=viewport selected=selected /> })
        .collect_view();

    view! {
        <div
            node_ref=container
            class="relative flex-1 h-full overflow-hidden bg-amber-100 cursor-grab"
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseup=end_drag
            on:mouseleave=end_drag
        >
            {tiles}
            {markers}
            <Popup viewport=viewport selected=selected markers=map.markers.clone() />

            // Zoom controls
            <div class="absolute top-3 right-3 z-20 flex flex-col bg-white rounded shadow-md text-black">
                <button
                    type="button"
                    class="w-8 h-8 text-lg font-bold hover:bg-gray-100 border-b"
                    on:mousedown=|ev| ev.stop_propagation()
                    on:click=move |_| viewport.update(Viewport::zoom_in)
                >
                    "+"
                </button>
                <button
                    type="button"
                    class="w-8 h-8 text-lg font-bold hover:bg-gray-100"
                    on:mousedown=|ev| ev.stop_propagation()
                    on:click=move |_| viewport.update(Viewport::zoom_out)
                >
                    "−"
                </button>
            </div>

            // Tile attribution
            <div class="absolute bottom-0 right-0 z-20 bg-white/80 px-2 py-0.5 text-xs text-gray-700">
                {layer.with_value(|l| {
                    let url = l.attribution_url.clone();
                    let text = l.attribution.clone();
                    view! { <a href=url target="_blank" rel="noopener noreferrer" class="hover:underline">{text}</a> }
                })}
            </div>
        </div>
    }
}

/// One marker, positioned from the current viewport
#[component]
fn MarkerPin(
    marker: Marker,
    viewport: RwSignal<Viewport>,
    selected: RwSignal<Option<MarkerKind>>,
) -> impl IntoView {
    let (icon, label) = match marker.kind {
        MarkerKind::Shop(_) => ("📍", "Coffee shop"),
        MarkerKind::User => ("🔵", "Your location"),
    };

    let style = move || {
        let p = viewport.with(|v| v.project(marker.position));
        format!(
            "left: {}px; top: {}px; transform: translate(-50%, -100%);",
            p.x, p.y
        )
    };

    view! {
        <button
            type="button"
            aria-label=label
            class="absolute z-10 text-2xl leading-none drop-shadow"
            style=style
            on:mousedown=|ev| ev.stop_propagation()
            on:click=move |_| {
                selected.update(|s| {
                    *s = if *s == Some(marker.kind) { None } else { Some(marker.kind) };
                });
            }
        >
            {icon}
        </button>
    }
}

/// Popup for the selected marker
#[component]
fn Popup(
    viewport: RwSignal<Viewport>,
    selected: RwSignal<Option<MarkerKind>>,
    markers: Vec<Marker>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        let kind = selected.get()?;
        let marker = markers.iter().find(|m| m.kind == kind).copied()?;
        let p = viewport.with(|v| v.project(marker.position));

        let body = match kind {
            MarkerKind::Shop(id) => {
                let shop = state.catalog.find(id)?.clone();
                view! {
                    <div class="min-w-[200px]">
                        <b>{shop.name.clone()}</b>
                        <br />
                        {shop.desc.clone()}
                        <br />
                        {average_label(&shop)}
                        <br />
                        <A
                            href=detail_path(shop.id)
                            class="text-blue-600 hover:underline block mt-2 text-sm"
                        >
                            "View Full Details →"
                        </A>
                    </div>
                }
                .into_view()
            }
            MarkerKind::User => view! { <span>"You are here! ☕"</span> }.into_view(),
        };

        Some(view! {
            <div
                class="absolute z-30 bg-white text-black text-sm rounded-lg shadow-lg p-3"
                style=format!(
                    "left: {}px; top: {}px; transform: translate(-50%, calc(-100% - 2.5rem));",
                    p.x, p.y
                )
                on:mousedown=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="absolute top-1 right-2 text-gray-400 hover:text-black"
                    on:click=move |_| selected.set(None)
                >
                    "×"
                </button>
                {body}
            </div>
        })
    }
}
