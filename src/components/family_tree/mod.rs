mod component;
mod hit_test;
mod layout;
mod render;
mod search;
mod state;
mod surface;
mod types;

pub use component::FamilyTreeView;
pub use types::{Cross, CrossId, FamilyTree, FamilyTreeEnvelope};
