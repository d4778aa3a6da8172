//! Page content supplied by the host document.

use serde::Deserialize;

/// A top-level page section. Its `id` doubles as the nav fragment (`#id`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section {
	pub id: String,
	/// Heading and nav label.
	pub title: String,
	/// Paragraphs shown under the heading.
	#[serde(default)]
	pub paragraphs: Vec<String>,
}

/// An outbound link on a project card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectLink {
	pub label: String,
	pub href: String,
}

/// A project summary card, expandable into the detail dialog.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
	pub title: String,
	pub summary: String,
	/// Extra paragraphs only shown in the detail dialog.
	#[serde(default)]
	pub details: Vec<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub links: Vec<ProjectLink>,
}

/// Everything the page renders, in document order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PortfolioData {
	pub owner: String,
	#[serde(default)]
	pub tagline: Option<String>,
	pub sections: Vec<Section>,
	#[serde(default)]
	pub projects: Vec<Project>,
	/// Use the denser particle preset for the background.
	#[serde(default)]
	pub dense_particles: bool,
}

impl PortfolioData {
	/// Section that hosts the project cards.
	pub const PROJECTS_SECTION: &'static str = "projects";

	pub fn section_ids(&self) -> impl Iterator<Item = &str> {
		self.sections.iter().map(|s| s.id.as_str())
	}
}

impl Default for PortfolioData {
	fn default() -> Self {
		let section = |id: &str, title: &str| Section {
			id: id.to_string(),
			title: title.to_string(),
			paragraphs: Vec::new(),
		};
		Self {
			owner: "Portfolio".to_string(),
			tagline: None,
			sections: vec![
				section("home", "Home"),
				section("experience", "Experience"),
				section("projects", "Projects"),
				section("skills", "Skills"),
				section("contact", "Contact"),
			],
			projects: Vec::new(),
			dense_particles: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn minimal_json_fills_defaults() {
		let data: PortfolioData = serde_json::from_str(
			r##"{
				"owner": "K. S.",
				"sections": [{ "id": "home", "title": "Home" }],
				"projects": [{ "title": "Tracker", "summary": "A small tool" }]
			}"##,
		)
		.unwrap();
		assert_eq!(data.section_ids().collect::<Vec<_>>(), ["home"]);
		assert!(data.sections[0].paragraphs.is_empty());
		assert!(data.projects[0].links.is_empty());
		assert!(!data.dense_particles);
	}

	#[test]
	fn project_links_deserialize() {
		let project: Project = serde_json::from_str(
			r##"{
				"title": "Site",
				"summary": "This page",
				"links": [{ "label": "Source", "href": "https://example.com/src" }]
			}"##,
		)
		.unwrap();
		assert_eq!(project.links[0].href, "https://example.com/src");
	}

	#[test]
	fn default_page_has_the_usual_sections() {
		let ids: Vec<_> = PortfolioData::default().section_ids().map(String::from).collect();
		assert_eq!(ids, ["home", "experience", "projects", "skills", "contact"]);
	}
}
