use std::fmt;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Deserializer};

pub const PARENT1_PLACEHOLDER: &str = "Parent 1";
pub const PARENT2_PLACEHOLDER: &str = "Parent 2";
pub const OFFSPRING_PLACEHOLDER: &str = "Offspring";

/// Opaque cross identifier; the API emits integers but strings are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum CrossId {
	Int(i64),
	Text(String),
}

impl fmt::Display for CrossId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CrossId::Int(n) => write!(f, "{n}"),
			CrossId::Text(s) => f.write_str(s),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct StrainRef {
	#[serde(default)]
	pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cross {
	pub id: CrossId,
	#[serde(default)]
	pub parent1_strain: Option<StrainRef>,
	#[serde(default)]
	pub parent2_strain: Option<StrainRef>,
	#[serde(default)]
	pub offspring_strain: Option<StrainRef>,
	// Flat names as emitted by the backend's cross serializer.
	#[serde(default)]
	pub parent1_name: Option<String>,
	#[serde(default)]
	pub parent2_name: Option<String>,
	#[serde(default)]
	pub offspring_name: Option<String>,
	#[serde(default = "first_generation", deserialize_with = "generation_or_default")]
	pub generation: u32,
	#[serde(default)]
	pub cross_date: Option<NaiveDate>,
	#[serde(default)]
	pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct FamilyTree {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub crosses: Vec<Cross>,
}

/// Response body of the family-tree detail endpoint.
#[derive(Debug, Deserialize)]
pub struct FamilyTreeEnvelope {
	pub family_tree: FamilyTree,
}

fn first_generation() -> u32 {
	1
}

fn generation_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	// Anything but a positive integer falls back to F1 rather than failing the tree.
	let raw = serde_json::Value::deserialize(deserializer)?;
	match raw.as_u64().and_then(|g| u32::try_from(g).ok()) {
		Some(g) if g > 0 => Ok(g),
		_ => {
			if !raw.is_null() && raw.as_u64() != Some(0) {
				debug!("unusable generation {raw}; using 1");
			}
			Ok(1)
		}
	}
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Cross>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<Cross>>::deserialize(deserializer)?.unwrap_or_default())
}

fn strain_name<'a>(strain: &'a Option<StrainRef>, flat: &'a Option<String>) -> Option<&'a str> {
	strain
		.as_ref()
		.and_then(|s| s.name.as_deref())
		.or(flat.as_deref())
		.filter(|name| !name.is_empty())
}

impl Cross {
	pub fn new(id: CrossId, parent1: &str, parent2: &str, offspring: &str, generation: u32) -> Self {
		let strain = |name: &str| {
			Some(StrainRef {
				name: Some(name.to_owned()),
			})
		};
		Self {
			id,
			parent1_strain: strain(parent1),
			parent2_strain: strain(parent2),
			offspring_strain: strain(offspring),
			parent1_name: None,
			parent2_name: None,
			offspring_name: None,
			generation: generation.max(1),
			cross_date: None,
			notes: None,
		}
	}

	pub fn parent1_name(&self) -> Option<&str> {
		strain_name(&self.parent1_strain, &self.parent1_name)
	}

	pub fn parent2_name(&self) -> Option<&str> {
		strain_name(&self.parent2_strain, &self.parent2_name)
	}

	pub fn offspring_name(&self) -> Option<&str> {
		strain_name(&self.offspring_strain, &self.offspring_name)
	}

	/// Cross date as `M/D/YYYY`, or "No date".
	pub fn date_label(&self) -> String {
		self.cross_date
			.map(|d| d.format("%-m/%-d/%Y").to_string())
			.unwrap_or_else(|| "No date".to_owned())
	}

	/// Substitutes placeholder labels for missing strains, once per cross.
	pub fn resolve(&self) -> ResolvedCross<'_> {
		let names = [self.parent1_name(), self.parent2_name(), self.offspring_name()];
		if names.iter().any(Option::is_none) {
			debug!("cross {} is missing strain names; using placeholders", self.id);
		}
		ResolvedCross {
			id: &self.id,
			parent1: self.parent1_name().unwrap_or(PARENT1_PLACEHOLDER),
			parent2: self.parent2_name().unwrap_or(PARENT2_PLACEHOLDER),
			offspring: self.offspring_name().unwrap_or(OFFSPRING_PLACEHOLDER),
			generation: self.generation.max(1),
		}
	}
}

/// A cross with every display name filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCross<'a> {
	pub id: &'a CrossId,
	pub parent1: &'a str,
	pub parent2: &'a str,
	pub offspring: &'a str,
	pub generation: u32,
}

impl ResolvedCross<'_> {
	pub fn generation_label(&self) -> String {
		format!("F{}", self.generation)
	}
}
