//! icon-graph: expandable force-directed graph of icon nodes for the browser.
//!
//! This crate provides a WASM client that renders a graph of FontAwesome icon
//! nodes into an SVG with physics-based layout, click-to-expand, pan/zoom and
//! an info panel describing the hovered node.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::force_graph::{
	GraphConfig, GraphData, GraphError, GraphLink, GraphNode, Icon, IconGraph, NodeKind,
};
pub use components::info_box::InfoBox;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("icon-graph: logging initialized");
}

/// Load configuration overrides from a script element with id="graph-config".
/// Falls back to defaults when the element is absent or its JSON is invalid.
fn load_config() -> GraphConfig {
	let Some(text) = config_text() else {
		debug!("icon-graph: no #graph-config element, using defaults");
		return GraphConfig::default();
	};
	match GraphConfig::from_json(&text) {
		Ok(config) => {
			info!("icon-graph: loaded config overrides");
			config
		}
		Err(e) => {
			warn!("icon-graph: {}, using defaults", e);
			GraphConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component: the graph and its info panel side by side.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let hovered = RwSignal::new(None::<GraphNode>);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Icon Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="graph-page">
			<IconGraph config=config hovered=hovered />
			<InfoBox node=hovered />
			<div class="graph-overlay">
				<p class="subtitle">
					"Click a node to expand it. Drag nodes to reposition. Scroll to zoom. Drag background to pan."
				</p>
			</div>
		</div>
	}
}
