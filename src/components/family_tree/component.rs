use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::hit_test::{ClientOrigin, hit_test};
use super::layout::{Position, compute_layout};
use super::render;
use super::search::{all_strains_ranked, filter_crosses, offspring_usage};
use super::state::TreeViewState;
use super::surface::{CanvasSurface, SurfaceMetrics};
use super::types::{Cross, CrossId, FamilyTree};

const RECENT_CROSSES: usize = 3;
const POPULAR_STRAINS: usize = 5;

fn draw(canvas: &HtmlCanvasElement, crosses: &[Cross], positions: &[Position], view: &TreeViewState) {
	let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
		Ok(Some(ctx)) => match ctx.dyn_into() {
			Ok(ctx) => ctx,
			Err(_) => {
				warn!("2d context has an unexpected type");
				return;
			}
		},
		_ => {
			warn!("canvas has no 2d context; skipping render");
			return;
		}
	};
	let rect = canvas.get_bounding_client_rect();
	let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
	let metrics = SurfaceMetrics::new(rect.width(), rect.height(), dpr);

	let mut surface = CanvasSurface::new(canvas.clone(), ctx);
	render::render(
		&mut surface,
		&metrics,
		crosses,
		positions,
		view.selected.as_ref(),
		view.zoom.get(),
	);
}

#[component]
pub fn FamilyTreeView(
	#[prop(into)] tree: Signal<FamilyTree>,
	#[prop(optional)] on_select: Option<Callback<Option<CrossId>>>,
	#[prop(optional)] on_add_cross: Option<Callback<()>>,
	#[prop(optional)] on_share: Option<Callback<()>>,
	#[prop(optional)] on_export_pdf: Option<Callback<()>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let view_state = RwSignal::new(TreeViewState::default());
	let crosses = Memo::new(move |_| tree.with(|t| t.crosses.clone()));
	let positions = Memo::new(move |_| crosses.with(|c| compute_layout(c)));
	let resized = Trigger::new();

	let handle = window_event_listener(ev::resize, move |_| resized.notify());
	on_cleanup(move || handle.remove());

	Effect::new(move |_| {
		resized.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let view = view_state.get();
		crosses.with(|crosses| {
			if crosses.is_empty() {
				return;
			}
			positions.with(|positions| draw(&canvas, crosses, positions, &view));
		});
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let origin = ClientOrigin {
			left: rect.left(),
			top: rect.top(),
		};
		let client = Position::new(ev.client_x() as f64, ev.client_y() as f64);
		let zoom = view_state.with_untracked(|s| s.zoom.get());
		let hit = crosses.with_untracked(|c| {
			positions.with_untracked(|p| hit_test(origin, client, c, p, zoom).cloned())
		});

		let changed = view_state
			.try_update(|s| s.select(hit.as_ref()))
			.unwrap_or(false);
		if changed {
			match &hit {
				Some(id) => info!("selected cross {id}"),
				None => info!("selection cleared"),
			}
			if let Some(cb) = on_select {
				cb.run(hit);
			}
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		let delta_y = ev.delta_y();
		if delta_y == 0.0 {
			return;
		}
		ev.prevent_default();
		view_state.update(|s| s.zoom = s.zoom.wheel(delta_y));
	};

	let filtered = Memo::new(move |_| {
		let term = view_state.with(|s| s.search.clone());
		crosses.with(|all| filter_crosses(all, &term).into_iter().cloned().collect::<Vec<_>>())
	});

	let popular = move || {
		let ranked = filtered.with(|c| all_strains_ranked(c));
		if ranked.is_empty() {
			return view! { <p class="muted">"No strains yet"</p> }.into_any();
		}
		ranked
			.into_iter()
			.take(POPULAR_STRAINS)
			.map(|strain| {
				view! {
					<div class="strain-usage">
						<span class="strain-name">{strain.name}</span>
						<span class="badge">{format!("{} uses", strain.usage)}</span>
					</div>
				}
			})
			.collect_view()
			.into_any()
	};

	let recent = move || {
		let recent: Vec<Cross> = filtered.with(|c| c.iter().take(RECENT_CROSSES).cloned().collect());
		if recent.is_empty() {
			return view! { <p class="muted">"No crosses match your search"</p> }.into_any();
		}
		recent
			.into_iter()
			.map(|cross| view! { <CrossCard cross=cross /> })
			.collect_view()
			.into_any()
	};

	let selection = move || {
		let id = view_state.with(|s| s.selected.clone())?;
		let usage = crosses
			.with(|all| offspring_usage(all, &id))
			.map(|(offspring, count)| format!("{offspring} appears in {count} cross(es)"));
		Some(view! {
			<div class="selection-chip">
				<p class="selection-title">{format!("Cross #{id} selected")}</p>
				{usage.map(|u| view! { <p class="muted">{u}</p> })}
				<p class="muted">"Click elsewhere to deselect"</p>
			</div>
		})
	};

	let actions = view! {
		<div class="tree-actions">
			{on_add_cross.map(|cb| view! { <button class="primary" on:click=move |_| cb.run(())>"Add Cross"</button> })}
			{on_share.map(|cb| view! { <button on:click=move |_| cb.run(())>"Share"</button> })}
			{on_export_pdf.map(|cb| view! { <button on:click=move |_| cb.run(())>"Export PDF"</button> })}
		</div>
	};

	view! {
		<Show when=move || crosses.with(|c| !c.is_empty()) fallback=|| view! { <EmptyTree /> }>
			<div class="tree-view">
				<div class="tree-controls">
					<input
						type="text"
						placeholder="Search strains..."
						prop:value=move || view_state.with(|s| s.search.clone())
						on:input=move |ev| {
							let term = event_target_value(&ev);
							view_state.update(|s| s.search = term);
						}
					/>
					<div class="zoom-controls">
						<button on:click=move |_| view_state.update(|s| s.zoom = s.zoom.zoom_out())>"-"</button>
						<span>{move || format!("{}%", view_state.with(|s| s.zoom.percent()))}</span>
						<button on:click=move |_| view_state.update(|s| s.zoom = s.zoom.zoom_in())>"+"</button>
					</div>
				</div>

				<div class="tree-body">
					<div class="tree-canvas-wrap">
						<canvas
							node_ref=canvas_ref
							class="tree-canvas"
							on:click=on_click
							on:wheel=on_wheel
							style="display: block; width: 100%; height: 24rem; cursor: pointer;"
						/>
						{selection}
					</div>

					<aside class="tree-panels">
						<section>
							<h3>"Popular Strains"</h3>
							{popular}
						</section>
						<section>
							<h3>"Recent Crosses"</h3>
							{recent}
						</section>
					</aside>
				</div>

				<Legend />
			</div>
		</Show>
		{actions}
	}
}

#[component]
fn CrossCard(cross: Cross) -> impl IntoView {
	let resolved = cross.resolve();
	let title = format!("{} × {}", resolved.parent1, resolved.parent2);
	let offspring = format!("→ {}", resolved.offspring);
	let generation = resolved.generation_label();
	let date = cross.date_label();
	let notes = cross.notes.clone();

	view! {
		<div class="cross-card">
			<div class="cross-title">{title}</div>
			<div class="cross-offspring">{offspring}</div>
			<div class="cross-meta">
				<span class="badge">{generation}</span>
				<span class="muted">{date}</span>
			</div>
			{notes.map(|n| view! { <p class="cross-notes">{n}</p> })}
		</div>
	}
}

#[component]
fn EmptyTree() -> impl IntoView {
	view! {
		<div class="tree-empty">
			<h3>"No crosses yet"</h3>
			<p>"Add parent strains and generate offspring to build your family tree."</p>
			<ul>
				<li>"Go to the Strains page to add parent strains"</li>
				<li>"Create crosses between parent strains"</li>
				<li>"Watch your family tree grow with each generation"</li>
			</ul>
		</div>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="tree-legend">
			<h3>"Legend"</h3>
			<span><i class="dot" style=format!("background: {}", render::PARENT_COLOR)></i>"Parent Strain"</span>
			<span><i class="dot" style=format!("background: {}", render::OFFSPRING_COLOR)></i>"Offspring Strain"</span>
			<span><i class="dot" style=format!("background: {}", render::SELECTED_COLOR)></i>"Selected Node"</span>
			<span><b>"×"</b>" Cross Point"</span>
			<span>"F1, F2, F3... Generation"</span>
		</div>
	}
}
