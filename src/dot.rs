//! Graphviz rendering of a [`Tree`], for looking at its shape with `dot -Tpng`.
//!
//! A node that has exactly one child gets an extra point-shaped placeholder where the missing
//! child would be, so left and right children can be told apart in the picture. Placeholders
//! are named `null<n>` with a random `n`, which makes the output differ from run to run. Use
//! [`Tree::to_dot_graph_with`] and a seeded generator when the output has to be reproducible.

use std::fmt::Display;

use rand::Rng;

use crate::node::Node;
use crate::tree::Tree;

/// Largest number used in a placeholder name.
const MAX_PLACEHOLDER_ID: u32 = 1_000_000_000;

/// One half of a node's output, left edge or right edge.
enum Step<'a, T> {
    Left(&'a Node<T>),
    Right(&'a Node<T>),
}

impl<T: Display> Tree<T> {
    /// Renders the tree as a `digraph` using the thread local random generator for placeholder
    /// names.
    ///
    /// # Examples
    ///
    /// ```
    /// use parented_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.to_dot_graph(), "digraph G{\n\t2;\n\t2 -> 1;\n\t2 -> 3;\n}");
    /// ```
    pub fn to_dot_graph(&self) -> String {
        self.to_dot_graph_with(&mut rand::thread_rng())
    }

    /// Renders the tree as a `digraph`, drawing placeholder names from `rng`.
    pub fn to_dot_graph_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let Some(root) = self.root() else {
            return String::from("digraph G{\n}");
        };

        let mut lines = Vec::new();
        let mut pending = vec![Step::Left(root)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Left(node) => {
                    pending.push(Step::Right(node));
                    match (node.left(), node.right()) {
                        (Some(left), _) => {
                            lines.push(format!("\t{} -> {};", node.value(), left.value()));
                            pending.push(Step::Left(left));
                        }
                        (None, Some(_)) => push_placeholder(&mut lines, node, rng),
                        (None, None) => {}
                    }
                }
                Step::Right(node) => match (node.left(), node.right()) {
                    (_, Some(right)) => {
                        lines.push(format!("\t{} -> {};", node.value(), right.value()));
                        pending.push(Step::Left(right));
                    }
                    (Some(_), None) => push_placeholder(&mut lines, node, rng),
                    (None, None) => {}
                },
            }
        }

        format!("digraph G{{\n\t{};\n{}\n}}", root.value(), lines.join("\n"))
    }
}

fn push_placeholder<T: Display, R: Rng + ?Sized>(
    lines: &mut Vec<String>,
    node: &Node<T>,
    rng: &mut R,
) {
    let id = rng.gen_range(0..=MAX_PLACEHOLDER_ID);
    lines.push(format!("\tnull{id} [shape=point];"));
    lines.push(format!("\t{} -> null{id};", node.value()));
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn tree_of(values: &[i32]) -> Tree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        assert_eq!(Tree::<i32>::new().to_dot_graph(), "digraph G{\n}");
    }

    #[test]
    fn lone_root() {
        assert_eq!(tree_of(&[7]).to_dot_graph(), "digraph G{\n\t7;\n\n}");
    }

    #[test]
    fn left_subtree_is_written_before_right_edge() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let expected = [
            "digraph G{",
            "\t4;",
            "\t4 -> 2;",
            "\t2 -> 1;",
            "\t2 -> 3;",
            "\t4 -> 6;",
            "\t6 -> 5;",
            "\t6 -> 7;",
            "}",
        ]
        .join("\n");

        assert_eq!(tree.to_dot_graph(), expected);
    }

    #[test]
    fn missing_children_get_placeholders() {
        let tree = tree_of(&[2, 1, 4, 3]);
        let graph = tree.to_dot_graph_with(&mut StdRng::seed_from_u64(7));
        let lines: Vec<_> = graph.lines().collect();

        assert_eq!(lines[..4], ["digraph G{", "\t2;", "\t2 -> 1;", "\t2 -> 4;"]);
        assert_eq!(lines[4], "\t4 -> 3;");
        // 4 has no right child.
        let id = lines[5]
            .strip_prefix("\tnull")
            .and_then(|rest| rest.strip_suffix(" [shape=point];"))
            .unwrap();
        assert!(id.parse::<u32>().unwrap() <= MAX_PLACEHOLDER_ID);
        assert_eq!(lines[6], format!("\t4 -> null{id};"));
        assert_eq!(lines[7], "}");
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let tree = tree_of(&[5, 3, 8, 1, 9]);

        let first = tree.to_dot_graph_with(&mut StdRng::seed_from_u64(42));
        let second = tree.to_dot_graph_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.matches("[shape=point]").count(), 2);
    }
}
