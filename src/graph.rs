//! Co-occurrence graph over adjacent accepted terms.
//!
//! Terms are interned to dense ids in order of first appearance; adjacent
//! pairs are keyed by `(min_id, max_id)` so that `(a, b)` and `(b, a)` are the
//! same undirected edge. Only the `top_k` heaviest pairs become edges, with
//! ties going to the pair seen first.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Default number of edges kept
pub const DEFAULT_TOP_K: usize = 15;

type TermId = u32;

/// Dense ids for the distinct terms of one sequence
#[derive(Debug, Default)]
struct TermArena<'a> {
    ids: HashMap<&'a str, TermId>,
    terms: Vec<&'a str>,
}

impl<'a> TermArena<'a> {
    fn intern(&mut self, term: &'a str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len() as TermId;
        self.ids.insert(term, id);
        self.terms.push(term);
        id
    }

    fn resolve(&self, id: TermId) -> &'a str {
        self.terms[id as usize]
    }
}

/// An undirected weighted edge; `source <= target` lexicographically
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: usize,
}

/// Undirected weighted co-occurrence graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CooccurrenceGraph {
    nodes: Vec<String>,
    edges: Vec<Edge>,
}

impl CooccurrenceGraph {
    /// Nodes in order of insertion
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges, heaviest first
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// An empty graph means there is not enough data for a network view
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Weight of the edge between `a` and `b` in either order
    pub fn weight(&self, a: &str, b: &str) -> Option<usize> {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
            .map(|e| e.weight)
    }

    /// Sum of the weights of edges touching `term`
    pub fn weighted_degree(&self, term: &str) -> usize {
        self.edges
            .iter()
            .filter(|e| e.source == term || e.target == term)
            .map(|e| if e.source == e.target { 2 * e.weight } else { e.weight })
            .sum()
    }
}

/// Builds co-occurrence graphs with a fixed edge cap
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    top_k: usize,
    skip_repeated_pairs: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder {
            top_k: DEFAULT_TOP_K,
            skip_repeated_pairs: true,
        }
    }
}

impl GraphBuilder {
    /// Keep at most `top_k` edges
    pub fn new(top_k: usize) -> Self {
        GraphBuilder {
            top_k,
            ..Default::default()
        }
    }

    /// Drop pairs made of the same term twice (no self-loops)
    pub fn skip_repeated_pairs(mut self, skip: bool) -> Self {
        self.skip_repeated_pairs = skip;
        self
    }

    /// Build the graph of adjacent pairs in `terms`
    pub fn build<S: AsRef<str>>(&self, terms: &[S]) -> CooccurrenceGraph {
        if terms.len() < 2 || self.top_k == 0 {
            return CooccurrenceGraph::default();
        }

        let mut arena = TermArena::default();
        let ids: Vec<TermId> = terms.iter().map(|t| arena.intern(t.as_ref())).collect();

        let mut slot: HashMap<(TermId, TermId), usize> = HashMap::new();
        let mut pairs: Vec<((TermId, TermId), usize)> = Vec::new();
        for w in ids.windows(2) {
            let (a, b) = (w[0], w[1]);
            if self.skip_repeated_pairs && a == b {
                continue;
            }
            let key = (a.min(b), a.max(b));
            match slot.get(&key) {
                Some(&i) => pairs[i].1 += 1,
                None => {
                    slot.insert(key, pairs.len());
                    pairs.push((key, 1));
                }
            }
        }

        // Stable sort: equal weights keep first-seen order
        pairs.sort_by(|x, y| y.1.cmp(&x.1));
        pairs.truncate(self.top_k);

        let mut graph = CooccurrenceGraph::default();
        let mut seen: HashSet<TermId> = HashSet::new();
        for ((a, b), weight) in pairs {
            let (a, b) = if arena.resolve(a) <= arena.resolve(b) { (a, b) } else { (b, a) };
            for id in [a, b] {
                if seen.insert(id) {
                    graph.nodes.push(arena.resolve(id).to_string());
                }
            }
            graph.edges.push(Edge {
                source: arena.resolve(a).to_string(),
                target: arena.resolve(b).to_string(),
                weight,
            });
        }

        graph
    }
}

/// Build a graph keeping the `top_k` heaviest pairs, without self-loops
pub fn build_graph<S: AsRef<str>>(terms: &[S], top_k: usize) -> CooccurrenceGraph {
    GraphBuilder::new(top_k).build(terms)
}
