//! Side panel describing the node under the pointer.

use leptos::prelude::*;

use super::force_graph::GraphNode;

/// Heading shown while no node is hovered.
pub const PLACEHOLDER_TITLE: &str = "No object selected";
/// Hint shown under the placeholder heading.
pub const PLACEHOLDER_HINT: &str = "Hover over a node to see details";

/// Label/value rows shown under the node id.
pub fn details(node: &GraphNode) -> [(&'static str, String); 3] {
	[
		("Type", node.kind.to_string()),
		("Created", node.created.to_string()),
		("Owner", node.owner.clone()),
	]
}

/// Heading and lines the panel shows for `node`, or the placeholder for `None`.
pub fn panel_text(node: Option<&GraphNode>) -> (String, Vec<String>) {
	match node {
		Some(n) => (
			n.id.clone(),
			details(n)
				.into_iter()
				.map(|(label, value)| format!("{label}: {value}"))
				.collect(),
		),
		None => (PLACEHOLDER_TITLE.to_string(), vec![PLACEHOLDER_HINT.to_string()]),
	}
}

/// `#info-box`: details of the hovered node, or a placeholder when none is hovered.
#[component]
pub fn InfoBox(#[prop(into)] node: Signal<Option<GraphNode>>) -> impl IntoView {
	view! {
		<div id="info-box">
			{move || {
				node.with(|n| {
					let (title, lines) = panel_text(n.as_ref());
					let icon = n
						.is_none()
						.then(|| view! { <i class="fas fa-question-circle placeholder-icon"></i> });
					let lines = lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view();
					view! {
						{icon}
						<h3>{title}</h3>
						{lines}
					}
				})
			}}
		</div>
	}
}
