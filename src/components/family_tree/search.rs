use std::collections::HashMap;

use super::types::{Cross, CrossId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrainUsage {
	/// First spelling seen in the crosses.
	pub name: String,
	pub usage: usize,
}

fn strain_key(name: &str) -> String {
	name.trim().to_lowercase()
}

fn names(cross: &Cross) -> [Option<&str>; 3] {
	[cross.parent1_name(), cross.parent2_name(), cross.offspring_name()]
}

/// Crosses with any strain name containing `term`, ignoring case, in input order.
pub fn filter_crosses<'a>(crosses: &'a [Cross], term: &str) -> Vec<&'a Cross> {
	let term = term.to_lowercase();
	crosses
		.iter()
		.filter(|cross| {
			names(cross)
				.iter()
				.any(|name| name.unwrap_or_default().to_lowercase().contains(&term))
		})
		.collect()
}

/// Number of crosses in which `name` appears in any role.
pub fn strain_usage_count(crosses: &[Cross], name: &str) -> usize {
	let key = strain_key(name);
	crosses
		.iter()
		.filter(|cross| names(cross).iter().flatten().any(|n| strain_key(n) == key))
		.count()
}

/// Offspring name of the cross `id` and how many crosses use it.
/// `None` when the cross is unknown or has no offspring strain.
pub fn offspring_usage(crosses: &[Cross], id: &CrossId) -> Option<(String, usize)> {
	let offspring = crosses.iter().find(|c| &c.id == id)?.offspring_name()?;
	Some((offspring.to_owned(), strain_usage_count(crosses, offspring)))
}

/// Distinct strains with their usage counts, most used first.
///
/// Equal counts keep the order in which strains first appear.
pub fn all_strains_ranked(crosses: &[Cross]) -> Vec<StrainUsage> {
	let mut ranked: Vec<StrainUsage> = Vec::new();
	let mut index: HashMap<String, usize> = HashMap::new();

	for cross in crosses {
		let mut seen: Vec<usize> = Vec::with_capacity(3);
		for name in names(cross).into_iter().flatten() {
			let slot = *index.entry(strain_key(name)).or_insert_with(|| {
				ranked.push(StrainUsage {
					name: name.to_owned(),
					usage: 0,
				});
				ranked.len() - 1
			});
			if !seen.contains(&slot) {
				seen.push(slot);
				ranked[slot].usage += 1;
			}
		}
	}

	ranked.sort_by(|a, b| b.usage.cmp(&a.usage));
	ranked
}
