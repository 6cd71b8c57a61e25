//! Leptos component wrapping the expandable force-directed graph.
//!
//! The component renders an `<svg id="graph">` and wires up mouse/wheel event
//! handlers for clicking (expansion), node dragging, panning and zooming. An
//! animation loop runs via `requestAnimationFrame`, stepping the simulation
//! and publishing a [`Layout`] snapshot each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent, WheelEvent, Window};

use super::config::GraphConfig;
use super::data::{IconPicker, fetch_data};
use super::error::GraphError;
use super::layout::Layout;
use super::render::{LinkLine, NodeGlyph};
use super::state::ForceGraphState;
use super::types::{GraphLink, GraphNode};

/// DOM id of the SVG container.
pub const GRAPH_ID: &str = "graph";

/// Simulation state plus the icon source used for expansions.
struct GraphContext {
	state: ForceGraphState,
	icons: IconPicker,
}

type SharedContext = Rc<RefCell<Option<GraphContext>>>;

/// Reactive values the view reads; updated from event handlers and the frame loop.
#[derive(Clone, Copy)]
struct GraphSignals {
	layout: RwSignal<Layout>,
	nodes: RwSignal<Vec<GraphNode>>,
	links: RwSignal<Vec<GraphLink>>,
	selected: RwSignal<Option<String>>,
	hovered: RwSignal<Option<GraphNode>>,
}

fn graph_element() -> Result<Element, GraphError> {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(GRAPH_ID))
		.ok_or(GraphError::SvgMissing)
}

/// Size of the SVG container as given by its `width`/`height` attributes.
fn graph_viewport() -> Result<(f64, f64), GraphError> {
	let svg = graph_element()?;
	let dim = |name: &str| {
		svg.get_attribute(name)
			.and_then(|v| v.parse::<f64>().ok())
			.unwrap_or(0.0)
	};
	let (width, height) = (dim("width"), dim("height"));
	if width > 0.0 && height > 0.0 {
		Ok((width, height))
	} else {
		Err(GraphError::InvalidViewport { width, height })
	}
}

/// Pointer position relative to the SVG container.
fn local_point(ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = graph_element().ok()?.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Select and center on `id`, then append its children after the configured delay.
fn expand_node(context: &SharedContext, id: String, signals: GraphSignals) {
	let delay = {
		let mut guard = context.borrow_mut();
		let Some(c) = guard.as_mut() else {
			return;
		};
		if let Err(e) = c.state.activate(&id, graph_viewport()) {
			warn!("icon-graph: cannot select {}: {}", id, e);
			return;
		}
		c.state.config.expand_delay()
	};
	signals.selected.set(Some(id.clone()));

	let context = context.clone();
	set_timeout(
		move || {
			let added = {
				let mut guard = context.borrow_mut();
				let Some(c) = guard.as_mut() else {
					return;
				};
				match c.state.expand(&id, &mut c.icons) {
					Ok(added) => added,
					Err(e) => {
						warn!("icon-graph: expansion of {} failed: {}", id, e);
						return;
					}
				}
			};
			signals.nodes.update(|n| n.extend(added.nodes));
			signals.links.update(|l| l.extend(added.links));
		},
		delay,
	);
}

/// Publish the hovered node to the info panel when it changes.
fn sync_hover(c: &GraphContext, hovered: RwSignal<Option<GraphNode>>) {
	let now = c.state.hovered_node();
	let changed = hovered.with_untracked(|h| h.as_ref().map(|n| &n.id) != now.map(|n| &n.id));
	if changed {
		hovered.set(now.cloned());
	}
}

/// Renders the expandable graph into `<svg id="graph">`.
///
/// Nodes are fetched from the mock provider once mounted. Clicking a node
/// selects it, centers the view on it and expands it; hovering writes the
/// node into `hovered` for the info panel.
#[component]
pub fn IconGraph(
	#[prop(optional)] config: GraphConfig,
	hovered: RwSignal<Option<GraphNode>>,
) -> impl IntoView {
	let signals = GraphSignals {
		layout: RwSignal::new(Layout::default()),
		nodes: RwSignal::new(Vec::new()),
		links: RwSignal::new(Vec::new()),
		selected: RwSignal::new(None),
		hovered,
	};
	let size = RwSignal::new((config.width, config.height));
	let icon_radius = config.icon_radius;

	let context: SharedContext = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			error!("icon-graph: no window, graph not started");
			return;
		};
		let mut config = config.clone();
		if config.fullscreen {
			if let Some((w, h)) = window_size(&window) {
				config.width = w;
				config.height = h;
				size.set((w, h));
			}
		}

		let seed = js_sys::Date::now() as u64;
		let (count, delay) = (config.initial_nodes, config.load_delay());
		*context_init.borrow_mut() = Some(GraphContext {
			state: ForceGraphState::new(config.clone()),
			icons: IconPicker::new(seed.wrapping_add(1)),
		});

		let context_load = context_init.clone();
		fetch_data(count, delay, seed, move |loaded| {
			let nodes = {
				let mut guard = context_load.borrow_mut();
				let Some(c) = guard.as_mut() else {
					return;
				};
				if let Err(e) = c.state.load(loaded) {
					warn!("icon-graph: failed to load nodes: {}", e);
					return;
				}
				c.state.nodes().to_vec()
			};
			info!("icon-graph: loaded {} nodes", nodes.len());
			signals.nodes.set(nodes);
		});

		if config.fullscreen {
			let context_resize = context_init.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((w, h)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				size.set((w, h));
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(w, h);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		let mut was_idle = false;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let frame = context_anim.borrow_mut().as_mut().and_then(|c| {
				c.state.tick(0.016);
				// Skip idle frames; the first idle frame is still published.
				let idle = c.state.is_idle();
				let panned = signals.layout.with_untracked(|l| l.transform != c.state.transform);
				let stale = !(idle && was_idle) || panned;
				was_idle = idle;
				stale.then(|| c.state.snapshot())
			});
			if let Some(layout) = frame {
				signals.layout.set(layout);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
		debug!("icon-graph: animation loop started");
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.press(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.pointer_move(x, y);
			sync_hover(c, signals.hovered);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = context_mu
			.borrow_mut()
			.as_mut()
			.and_then(|c| c.state.release());
		if let Some(id) = clicked {
			debug!("icon-graph: clicked {}", id);
			expand_node(&context_mu, id, signals);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.leave();
			sync_hover(c, signals.hovered);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<svg
			id=GRAPH_ID
			width=move || size.get().0.to_string()
			height=move || size.get().1.to_string()
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		>
			<g class="zoom-layer" transform=move || signals.layout.with(|l| l.transform.to_svg())>
				<g class="links">
					<For
						each=move || signals.links.get()
						key=|link: &GraphLink| link.key()
						children=move |link: GraphLink| {
							view! { <LinkLine link=link layout=signals.layout radius=icon_radius /> }
						}
					/>
				</g>
				<g class="nodes">
					<For
						each=move || signals.nodes.get()
						key=|node: &GraphNode| node.id.clone()
						children=move |node: GraphNode| {
							view! {
								<NodeGlyph node=node layout=signals.layout selected=signals.selected />
							}
						}
					/>
				</g>
			</g>
		</svg>
	}
}
