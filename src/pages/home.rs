use leptos::prelude::*;
use log::info;

use crate::components::family_tree::{Cross, CrossId, FamilyTree, FamilyTreeView};

const FOUNDERS: &[&str] = &[
	"OG Kush",
	"Sour Diesel",
	"Blue Dream",
	"Granddaddy Purple",
	"Durban Poison",
	"Northern Lights",
	"Haze",
	"Chemdog",
];

fn first_word(name: &str) -> &str {
	name.split(' ').next().unwrap_or(name)
}

/// Generate a sample breeding project where later crosses reuse earlier offspring.
fn generate_sample_tree(n: usize) -> FamilyTree {
	let mut pool: Vec<(String, u32)> = FOUNDERS.iter().map(|s| (s.to_string(), 0)).collect();

	let crosses: Vec<Cross> = (0..n)
		.map(|i| {
			let a = (rand_simple(i) * pool.len() as f64) as usize;
			let mut b = (rand_simple(i + 31) * pool.len() as f64) as usize;
			if b == a {
				b = (a + 1) % pool.len();
			}
			let (p1, g1) = pool[a].clone();
			let (p2, g2) = pool[b].clone();
			let generation = g1.max(g2) + 1;
			let offspring = format!("{} {} #{}", first_word(&p1), first_word(&p2), i + 1);
			pool.push((offspring.clone(), generation));

			Cross::new(CrossId::Int(i as i64 + 1), &p1, &p2, &offspring, generation)
		})
		.collect();

	FamilyTree {
		name: "Demo Project".into(),
		description: Some("Generated sample crosses".into()),
		crosses,
	}
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let tree = Signal::derive(move || generate_sample_tree(8));
	let on_select = Callback::new(move |id: Option<CrossId>| match id {
		Some(id) => info!("demo: cross {id} selected"),
		None => info!("demo: nothing selected"),
	});

	view! {
		<div class="page">
			<div class="page-header">
				<h1>"Family Tree Visualization"</h1>
				<p class="subtitle">"Click a strain to select its cross. Scroll or use +/- to zoom."</p>
			</div>
			<FamilyTreeView tree=tree on_select=on_select />
		</div>
	}
}
