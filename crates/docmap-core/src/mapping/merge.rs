use super::{FieldsMapping, Node};

/// Merges two mapping trees.
///
/// Where only one tree maps a name, its node is kept. Where both trees hold
/// an embedded mapping under the same name, the two are merged recursively.
/// Any other conflict is won by `preferred`.
pub fn merge(preferred: FieldsMapping, fallback: FieldsMapping) -> FieldsMapping {
    let mut fallback = fallback.into_nodes();
    let mut merged = FieldsMapping::default().into_nodes();

    for (name, node) in preferred.into_nodes() {
        let node = match (node, fallback.shift_remove(&name)) {
            (Node::Embedded(preferred), Some(Node::Embedded(fallback))) => {
                Node::Embedded(merge(preferred, fallback))
            }
            (node, _) => node,
        };

        merged.insert(name, node);
    }

    merged.extend(fallback);
    FieldsMapping::new(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Field;
    use pretty_assertions::assert_eq;

    fn leaf(name: &str, ty: &str) -> (String, Node) {
        (name.to_string(), Node::Field(Field::new(name, ty)))
    }

    fn tree(nodes: impl IntoIterator<Item = (String, Node)>) -> FieldsMapping {
        nodes.into_iter().collect()
    }

    #[test]
    fn preferred_leaf_wins() {
        let merged = merge(
            tree([leaf("age", "string")]),
            tree([leaf("age", "integer")]),
        );

        assert_eq!(merged, tree([leaf("age", "string")]));
    }

    #[test]
    fn disjoint_names_are_unioned() {
        let merged = merge(tree([leaf("a", "string")]), tree([leaf("b", "integer")]));
        assert_eq!(merged, tree([leaf("a", "string"), leaf("b", "integer")]));
    }

    #[test]
    fn subtrees_merge_key_wise() {
        let preferred = tree([(
            "address".to_string(),
            Node::Embedded(tree([leaf("city", "json")])),
        )]);
        let fallback = tree([(
            "address".to_string(),
            Node::Embedded(tree([leaf("city", "string"), leaf("zip", "integer")])),
        )]);

        let expected = tree([(
            "address".to_string(),
            Node::Embedded(tree([leaf("city", "json"), leaf("zip", "integer")])),
        )]);

        assert_eq!(merge(preferred, fallback), expected);
    }

    #[test]
    fn leaf_replaces_subtree() {
        let merged = merge(
            tree([leaf("address", "json")]),
            tree([(
                "address".to_string(),
                Node::Embedded(tree([leaf("city", "string")])),
            )]),
        );

        assert_eq!(merged, tree([leaf("address", "json")]));
    }
}
