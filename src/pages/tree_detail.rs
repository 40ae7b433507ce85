use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::info;

use crate::api::fetch_family_tree;
use crate::components::family_tree::{CrossId, FamilyTreeView};
use crate::config::ApiConfig;

/// A single family tree loaded from the API.
#[component]
pub fn FamilyTreeDetail() -> impl IntoView {
	let params = use_params_map();
	let tree_id = move || params.read().get("id").unwrap_or_default();
	let tree = LocalResource::new(move || {
		let id = tree_id();
		async move { fetch_family_tree(&ApiConfig::default(), &id).await }
	});

	let on_select = Callback::new(move |id: Option<CrossId>| {
		if let Some(id) = id {
			info!("tree {}: cross {id} selected", tree_id());
		}
	});
	let on_share = Callback::new(move |_: ()| {
		info!("share link: {}", ApiConfig::default().family_tree_url(&tree_id()));
	});

	view! {
		<Suspense fallback=|| view! { <p class="loading">"Loading family tree..."</p> }>
			<ErrorBoundary fallback=|errors| {
				view! {
					<div class="not-found">
						<h2>"Family Tree Not Found"</h2>
						<p>
							"The family tree you're looking for doesn't exist or you don't have access to it."
						</p>
						<ul>
							{move || {
								errors
									.get()
									.into_iter()
									.map(|(_, e)| view! { <li>{e.to_string()}</li> })
									.collect_view()
							}}
						</ul>
						<A href="/">"Back to Family Trees"</A>
					</div>
				}
			}>
				{move || {
					tree.get()
						.map(|result| {
							result
								.map(|tree| {
									let title = tree.name.clone();
									let description = tree.description.clone();
									let tree = Signal::derive(move || tree.clone());
									view! {
										<div class="page">
											<div class="page-header">
												<h1>{title}</h1>
												{description.map(|d| view! { <p class="subtitle">{d}</p> })}
											</div>
											<FamilyTreeView tree=tree on_select=on_select on_share=on_share />
										</div>
									}
								})
						})
				}}
			</ErrorBoundary>
		</Suspense>
	}
}
