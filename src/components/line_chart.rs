//! Rate Line Chart Component
//!
//! Animated SVG line chart of weekly average interest rates: responsive
//! width via a ResizeObserver on the container, a stroke-dash reveal on the
//! line, and a pointer-driven tooltip with a hover dot and direction
//! triangle.

use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::chart::{
    build_chart, nearest_index, tooltip_layout, ChartGeometry, RateRecord, MARGIN,
    REVEAL_SECONDS, TOTAL_HEIGHT,
};

/// Accent color for the line, value labels and hover dot
const COLOR_ORANGE: &str = "#ff6c00";
/// Neutral color for axis lines and tick text
const COLOR_GRAY: &str = "#707882";
/// Gridline color
const COLOR_LIGHT_GRAY: &str = "#edeef0";

/// Container width assumed until the first resize observation arrives
const DEFAULT_WIDTH: f64 = 600.0;

/// Animated weekly-rate line chart.
///
/// The component owns its container, tooltip and hover state; everything is
/// rebuilt from the records and the observed width on each change.
#[component]
pub fn RateLineChart(#[prop(into)] data: Signal<Vec<RateRecord>>) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let (width, set_width) = create_signal(DEFAULT_WIDTH);
    let hovered = create_rw_signal::<Option<usize>>(None);

    // Track the container's rendered width; re-renders follow via the memo
    create_effect(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            if entries.length() == 0 {
                return;
            }
            let entry: web_sys::ResizeObserverEntry = entries.get(0).unchecked_into();
            set_width.set(entry.content_rect().width());
        });

        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(_) => return,
        };
        observer.observe(&container);

        on_cleanup(move || {
            observer.disconnect();
            drop(callback);
        });
    });

    // One geometry rebuild per data or width change
    let geometry = create_memo(move |_| {
        let records = data.get();
        let container_width = width.get();
        match build_chart(&records, container_width) {
            Ok(Some(chart)) => Some(Rc::new(chart)),
            Ok(None) => {
                if !records.is_empty() {
                    web_sys::console::warn_1(
                        &format!("rate chart: no drawable area at width {}", container_width)
                            .into(),
                    );
                }
                None
            }
            Err(e) => {
                web_sys::console::error_1(&format!("rate chart: {}", e).into());
                None
            }
        }
    });

    // A fresh render invalidates any hovered index from the previous one
    create_effect(move |_| {
        let _ = geometry.get();
        hovered.set(None);
    });

    view! {
        <div node_ref=container_ref class="relative w-full">
            {move || {
                geometry
                    .get()
                    .map(|geometry| view! { <ChartSvg geometry=geometry hovered=hovered /> })
            }}
            <ChartTooltip geometry=geometry hovered=hovered />
        </div>
    }
}

/// The SVG subtree for one computed geometry.
///
/// Recreated wholesale whenever the geometry changes, which also replays the
/// line reveal animation; only the hover dot and triangle update in place.
#[component]
fn ChartSvg(geometry: Rc<ChartGeometry>, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let g = geometry;
    let svg_width = g.width + MARGIN.left + MARGIN.right;
    let dash = format!("{} {}", g.line_length, g.line_length);
    let dur = format!("{}s", REVEAL_SECONDS);

    let enter_geometry = Rc::clone(&g);
    let on_enter = move |ev: MouseEvent| update_hover(&enter_geometry, &ev, hovered);

    let move_geometry = Rc::clone(&g);
    let on_move = move |ev: MouseEvent| update_hover(&move_geometry, &ev, hovered);

    let leave_geometry = Rc::clone(&g);
    let on_leave = move |ev: MouseEvent| {
        // Leaving onto the hover dot or triangle keeps the tooltip; only a
        // pointer outside the drawable area hides it
        match pointer_position(&ev) {
            Some((x, y))
                if x >= 0.0 && x <= leave_geometry.width && y >= 0.0
                    && y <= leave_geometry.height => {}
            _ => hovered.set(None),
        }
    };

    let hover_geometry = Rc::clone(&g);

    view! {
        <svg width=svg_width height=TOTAL_HEIGHT>
            <g transform=format!("translate({}, {})", MARGIN.left, MARGIN.top)>
                // Horizontal gridlines at the y ticks, no labels
                {g.y_ticks
                    .iter()
                    .map(|tick| {
                        let y = tick.y;
                        view! {
                            <line
                                x1="0"
                                y1=y
                                x2=g.width
                                y2=y
                                stroke=COLOR_LIGHT_GRAY
                                stroke-dasharray="2.2"
                            />
                        }
                    })
                    .collect_view()}

                // x axis: domain line and one label per band, tick marks suppressed
                <g transform=format!("translate(0, {})", g.height)>
                    <line x1="0" y1="0" x2=g.width y2="0" stroke=COLOR_GRAY />
                    {g.x_ticks
                        .iter()
                        .map(|tick| {
                            view! {
                                <text
                                    x=tick.x
                                    y="15"
                                    dy="0.71em"
                                    text-anchor="middle"
                                    font-size="10"
                                    fill=COLOR_GRAY
                                >
                                    {tick.label.clone()}
                                </text>
                            }
                        })
                        .collect_view()}
                </g>

                // y axis: domain line and percentage labels
                <g>
                    <line x1="0" y1="0" x2="0" y2=g.height stroke=COLOR_GRAY />
                    {g.y_ticks
                        .iter()
                        .map(|tick| {
                            view! {
                                <text
                                    x="-10"
                                    y=tick.y
                                    dy="0.32em"
                                    text-anchor="end"
                                    font-size="10"
                                    fill=COLOR_GRAY
                                >
                                    {tick.label.clone()}
                                </text>
                            }
                        })
                        .collect_view()}
                </g>

                // The rate line, revealed by animating the dash offset
                <path
                    d=g.line_path.clone()
                    fill="none"
                    stroke=COLOR_ORANGE
                    stroke-width="2"
                    stroke-dasharray=dash
                    stroke-dashoffset=g.line_length
                >
                    <animate
                        attributeName="stroke-dashoffset"
                        from=g.line_length
                        to="0"
                        dur=dur
                        fill="freeze"
                    />
                </path>

                // Value labels: white halo behind, orange bold in front
                {g.points
                    .iter()
                    .map(|point| {
                        let label_y = point.y - 10.0;
                        view! {
                            <text
                                x=point.x
                                y=label_y
                                text-anchor="middle"
                                font-size="14"
                                fill="white"
                            >
                                {format!("{:.2}%", point.y_value)}
                            </text>
                        }
                    })
                    .collect_view()}
                {g.points
                    .iter()
                    .map(|point| {
                        let label_y = point.y - 10.0;
                        view! {
                            <text
                                x=point.x
                                y=label_y
                                text-anchor="middle"
                                font-size="12"
                                font-weight="bold"
                                fill=COLOR_ORANGE
                            >
                                {format!("{:.2}%", point.y_value)}
                            </text>
                        }
                    })
                    .collect_view()}

                // Invisible overlay driving the tooltip
                <rect
                    width=g.width
                    height=g.height
                    fill="none"
                    pointer-events="all"
                    on:mouseenter=on_enter
                    on:mousemove=on_move
                    on:mouseleave=on_leave
                />

                // Hover dot and tooltip triangle, drawn above the overlay
                {move || {
                    hovered
                        .get()
                        .and_then(|index| tooltip_layout(&hover_geometry, index))
                        .map(|layout| {
                            view! {
                                <circle
                                    cx=layout.triangle_x
                                    cy=layout.triangle_y
                                    r="5"
                                    fill=COLOR_ORANGE
                                />
                                <path
                                    d=layout.triangle_path.clone()
                                    fill="black"
                                    transform=format!(
                                        "translate({}, {})",
                                        layout.triangle_x,
                                        layout.triangle_y,
                                    )
                                />
                            }
                        })
                }}
            </g>
        </svg>
    }
}

/// Component-owned tooltip box, shown for the hovered point and destroyed
/// with the component
#[component]
fn ChartTooltip(
    geometry: Memo<Option<Rc<ChartGeometry>>>,
    hovered: RwSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        {move || {
            geometry
                .get()
                .zip(hovered.get())
                .and_then(|(geometry, index)| {
                    let layout = tooltip_layout(&geometry, index)?;
                    let point = &geometry.points[index];
                    Some((layout, point.x_label.clone(), point.y_value))
                })
                .map(|(layout, x_label, y_value)| {
                    view! {
                        <div style=format!(
                            "position: absolute; left: {}px; top: {}px; \
                             transform: translate(-50%, -100%); background-color: black; \
                             color: white; border-radius: 5px; padding: 8px; \
                             pointer-events: none; font-size: 12px; z-index: 100;",
                            layout.left,
                            layout.top,
                        )>
                            <div>{x_label}</div>
                            <div style="padding-top: 5px;">
                                {format!("보상률: {:.2}%", y_value)}
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Pointer position relative to the drawable area (the overlay rect)
fn pointer_position(ev: &MouseEvent) -> Option<(f64, f64)> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some((
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    ))
}

/// Move the hover state to the point nearest the pointer
fn update_hover(geometry: &ChartGeometry, ev: &MouseEvent, hovered: RwSignal<Option<usize>>) {
    let Some((x, _)) = pointer_position(ev) else {
        return;
    };
    if let Some(index) = nearest_index(geometry, x) {
        hovered.set(Some(index));
    }
}
