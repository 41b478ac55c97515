extern crate dot;

use std::io;
use std::io::Write;

use crate::expr::Expression;

/// Flattened expression tree, renderable as a GraphViz graph.
///
/// Shared sub-expressions are drawn once per occurrence.
pub struct ExpressionGraph {
    labels: Vec<String>,
    edges: Vec<GraphEdge>,
}

type GraphNode = usize;
type GraphEdge = (usize, &'static str, usize);

impl ExpressionGraph {
    pub fn new(root: &Expression) -> Self {
        let mut graph = Self {
            labels: Vec::new(),
            edges: Vec::new(),
        };

        graph.insert(root);
        graph
    }

    fn insert(&mut self, node: &Expression) -> GraphNode {
        let id = self.labels.len();

        match node {
            Expression::Constant(_) | Expression::Variable(_) => {
                self.labels.push(node.to_string());
            }
            Expression::Unary(op, operand) => {
                self.labels.push(op.to_string());
                let child = self.insert(operand);
                self.edges.push((id, "", child));
            }
            Expression::Binary(op, left, right) => {
                self.labels.push(op.to_string());
                let l = self.insert(left);
                let r = self.insert(right);
                self.edges.push((id, "L", l));
                self.edges.push((id, "R", r));
            }
        }

        id
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for ExpressionGraph {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("expression").expect("cannot create Id named 'expression'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n)).unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1)
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for ExpressionGraph {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        self.edges.clone().into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
