//! Evolution chain helpers.

use serde::{Deserialize, Serialize};

/// How a species evolves from its parent
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub min_level: Option<u8>,
    pub trigger: Option<String>,
    pub item: Option<String>,
}

/// One species in an evolution tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: String,
    /// First entry describes the usual method; the rest are alternatives
    #[serde(default)]
    pub details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            details: Vec::new(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: EvolutionDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn evolves_to(mut self, next: EvolutionNode) -> Self {
        self.evolves_to.push(next);
        self
    }

    /// Depth-first search for `species`
    pub fn find(&self, species: &str) -> Option<&EvolutionNode> {
        if self.species == species {
            return Some(self);
        }
        self.evolves_to.iter().find_map(|next| next.find(species))
    }
}

/// Next stage of an evolution, as shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub name: String,
    pub level: Option<u8>,
    pub trigger: Option<String>,
    pub item: Option<String>,
}

/// Species whose default form needs an explicit suffix to resolve
fn default_form(species: &str) -> &str {
    match species {
        "toxtricity" => "toxtricity-amped",
        "urshifu" => "urshifu-single-strike",
        "basculegion" => "basculegion-male",
        other => other,
    }
}

/// Every species in the chain, base first (pre-order)
pub fn family(chain: &EvolutionNode) -> Vec<String> {
    let mut out = Vec::new();
    collect_family(chain, &mut out);
    out
}

fn collect_family(node: &EvolutionNode, out: &mut Vec<String>) {
    out.push(node.species.clone());
    for next in &node.evolves_to {
        collect_family(next, out);
    }
}

/// Direct evolutions of `species`, empty if it is fully evolved or absent
pub fn next_evolutions(chain: &EvolutionNode, species: &str) -> Vec<Evolution> {
    let Some(node) = chain.find(species) else {
        return Vec::new();
    };
    node.evolves_to
        .iter()
        .map(|next| {
            let detail = next.details.first();
            Evolution {
                name: default_form(&next.species).to_string(),
                level: detail.and_then(|d| d.min_level),
                trigger: detail.and_then(|d| d.trigger.clone()),
                item: detail.and_then(|d| d.item.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> EvolutionDetail {
        EvolutionDetail {
            min_level: Some(n),
            trigger: Some("level-up".to_string()),
            item: None,
        }
    }

    fn corviknight_line() -> EvolutionNode {
        EvolutionNode::new("rookidee").evolves_to(
            EvolutionNode::new("corvisquire")
                .with_detail(level(18))
                .evolves_to(EvolutionNode::new("corviknight").with_detail(level(38))),
        )
    }

    #[test]
    fn family_is_preorder() {
        let applin = EvolutionNode::new("applin")
            .evolves_to(EvolutionNode::new("flapple"))
            .evolves_to(EvolutionNode::new("appletun"));
        assert_eq!(family(&applin), vec!["applin", "flapple", "appletun"]);
        assert_eq!(family(&corviknight_line()), vec!["rookidee", "corvisquire", "corviknight"]);
    }

    #[test]
    fn next_stage_of_middle_species() {
        let next = next_evolutions(&corviknight_line(), "corvisquire");
        assert_eq!(
            next,
            vec![Evolution {
                name: "corviknight".to_string(),
                level: Some(38),
                trigger: Some("level-up".to_string()),
                item: None,
            }]
        );
        assert!(next_evolutions(&corviknight_line(), "corviknight").is_empty());
        assert!(next_evolutions(&corviknight_line(), "pikachu").is_empty());
    }

    #[test]
    fn forms_are_remapped() {
        let toxel = EvolutionNode::new("toxel").evolves_to(EvolutionNode::new("toxtricity").with_detail(level(30)));
        let next = next_evolutions(&toxel, "toxel");
        assert_eq!(next[0].name, "toxtricity-amped");

        let kubfu = EvolutionNode::new("kubfu").evolves_to(EvolutionNode::new("urshifu"));
        let next = next_evolutions(&kubfu, "kubfu");
        assert_eq!(next[0].name, "urshifu-single-strike");
        assert_eq!(next[0].level, None);
    }
}
