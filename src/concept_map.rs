//! Static concept graph: which ideas a learner needs before the RUA.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptNode {
    pub id: &'static str,
    pub label: &'static str,
    pub prerequisites: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConceptMap {
    pub topic: &'static str,
    pub concepts: &'static [ConceptNode],
}

/// Nodes are listed in a valid learning order: every prerequisite appears
/// before the node that depends on it.
const CONCEPTS: &[ConceptNode] = &[
    ConceptNode {
        id: "right_triangle",
        label: "Right triangle",
        prerequisites: &[],
    },
    ConceptNode {
        id: "pythagorean_theorem",
        label: "Pythagorean theorem",
        prerequisites: &["right_triangle"],
    },
    ConceptNode {
        id: "legs_and_hypotenuse",
        label: "Legs x, 1 − x and hypotenuse",
        prerequisites: &["pythagorean_theorem"],
    },
    ConceptNode {
        id: "sine",
        label: "Sine",
        prerequisites: &["legs_and_hypotenuse"],
    },
    ConceptNode {
        id: "cosine",
        label: "Cosine",
        prerequisites: &["legs_and_hypotenuse"],
    },
    ConceptNode {
        id: "tangent",
        label: "Tangent",
        prerequisites: &["sine", "cosine"],
    },
    ConceptNode {
        id: "reciprocal_ratios",
        label: "Secant and cosecant",
        prerequisites: &["sine", "cosine"],
    },
    ConceptNode {
        id: "arctangent",
        label: "Arctangent",
        prerequisites: &["tangent"],
    },
    ConceptNode {
        id: "radians_and_degrees",
        label: "Radians and degrees",
        prerequisites: &["right_triangle"],
    },
    ConceptNode {
        id: "rua",
        label: "Radical Unit Angle",
        prerequisites: &["arctangent", "reciprocal_ratios", "radians_and_degrees"],
    },
];

pub fn concept_map() -> ConceptMap {
    ConceptMap {
        topic: "rua",
        concepts: CONCEPTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_precede_dependents() {
        let map = concept_map();
        for (i, node) in map.concepts.iter().enumerate() {
            for pre in node.prerequisites {
                let pos = map.concepts.iter().position(|n| n.id == *pre);
                assert!(
                    matches!(pos, Some(p) if p < i),
                    "{} depends on {pre}, which is missing or listed later",
                    node.id
                );
            }
        }
    }

    #[test]
    fn test_ids_unique() {
        let map = concept_map();
        for (i, a) in map.concepts.iter().enumerate() {
            assert!(map.concepts[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn test_rua_is_last() {
        assert_eq!(concept_map().concepts.last().map(|n| n.id), Some("rua"));
    }
}
