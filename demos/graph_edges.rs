//! A simple graph example.
//!
//! In this example, the edges of a directed multigraph are indexed by their
//! (source, target) pair, each edge carrying a list of weights:
//! -   Adding an edge appends its weight to the list of the pair.
//! -   Deleting a node erases all its edges, leaving tombstones behind.
//! -   Compacting rehashes the index, purging the tombstones.

extern crate lineprobe;

use lineprobe::hashmap::HashMap;

type Edge = (String, String);

#[derive(Default)]
struct Graph {
    edges: HashMap<Edge, Vec<i32>>,
}

impl Graph {
    fn add_edge(&mut self, source: &str, target: &str, weight: i32) {
        let edge = (source.to_string(), target.to_string());
        self.edges.get_or_insert_default(edge).push(weight);
    }

    fn weights(&self, source: &str, target: &str) -> &[i32] {
        let edge = (source.to_string(), target.to_string());
        self.edges.get(&edge).map(|weights| &weights[..]).unwrap_or(&[])
    }

    //  Iterates over all edges; fine for a demo.
    fn outbound<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .keys()
            .filter(move |(from, _)| from == source)
            .map(|(_, to)| to.as_str())
    }

    fn delete_node(&mut self, node: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|(from, to), _| from != node && to != node);
        before - self.edges.len()
    }

    fn compact(&mut self) {
        let capacity = self.edges.len().max(1) * 2;
        self.edges.rehash(capacity);
    }
}

fn main() {
    let mut graph = Graph::default();

    graph.add_edge("a", "b", 1);
    graph.add_edge("a", "b", 7);
    graph.add_edge("a", "c", 3);
    graph.add_edge("b", "c", 2);
    graph.add_edge("c", "d", 5);
    graph.add_edge("d", "a", 4);

    println!("a -> b: {:?}", graph.weights("a", "b"));

    let mut targets: Vec<_> = graph.outbound("a").collect();
    targets.sort();
    println!("a -> {:?}", targets);

    assert_eq!(&[1, 7], graph.weights("a", "b"));
    assert_eq!(vec!["b", "c"], targets);

    let deleted = graph.delete_node("c");
    println!(
        "deleted {} edges of c, {} edges left, {} tombstones",
        deleted,
        graph.edges.len(),
        graph.edges.tombstones()
    );

    assert_eq!(3, deleted);
    assert!(graph.weights("a", "c").is_empty());

    graph.compact();
    println!("compacted: {:?}", graph.edges);

    assert_eq!(0, graph.edges.tombstones());
    assert_eq!(&[4], graph.weights("d", "a"));
}
