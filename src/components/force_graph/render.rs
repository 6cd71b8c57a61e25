//! SVG elements for links and nodes.
//!
//! Elements are keyed by node id / link key and created once; their geometry
//! attributes read the per-frame [`Layout`] signal, so only attributes change
//! while the simulation runs.

use leptos::prelude::*;

use super::geometry::LineSegment;
use super::layout::Layout;
use super::types::{GraphLink, GraphNode};

fn coord(segment: Option<LineSegment>, pick: fn(&LineSegment) -> f64) -> String {
	segment.as_ref().map(pick).unwrap_or(0.0).to_string()
}

/// A link drawn between the icon boundaries of its endpoints.
#[component]
pub fn LinkLine(link: GraphLink, layout: RwSignal<Layout>, radius: f64) -> impl IntoView {
	let segment = {
		let link = link.clone();
		Memo::new(move |_| layout.with(|l| l.link_segment(&link, radius)))
	};
	let opacity = move || layout.with(|l| l.link_opacity(&link)).to_string();

	view! {
		<line
			class="link"
			x1=move || coord(segment.get(), |s| s.x1)
			y1=move || coord(segment.get(), |s| s.y1)
			x2=move || coord(segment.get(), |s| s.x2)
			y2=move || coord(segment.get(), |s| s.y2)
			visibility=move || if segment.with(Option::is_some) { "visible" } else { "hidden" }
			opacity=opacity
		/>
	}
}

/// A node drawn as its FontAwesome glyph.
#[component]
pub fn NodeGlyph(
	node: GraphNode,
	layout: RwSignal<Layout>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let (id_class, id_pos, id_alpha) = (node.id.clone(), node.id.clone(), node.id.clone());
	let class = move || {
		if selected.with(|s| s.as_deref() == Some(id_class.as_str())) {
			"node selected"
		} else {
			"node"
		}
	};

	view! {
		<g
			class=class
			transform=move || layout.with(|l| l.node_transform(&id_pos))
			opacity=move || layout.with(|l| l.node_opacity(&id_alpha)).to_string()
		>
			<text
				class="icon"
				text-anchor="middle"
				dominant-baseline="central"
				font-family="FontAwesome"
				font-size="24px"
			>
				{node.icon.to_string()}
			</text>
		</g>
	}
}
