//! Render graphs in the graphviz DOT format.
use crate::{
    graph::{validate::is_undirected, *},
    Error, Result,
};
use std::io::Write;

/**
 * Rendering options for [WriteDot].
 *
 * Built by chaining setters on [DotConfig::new].
 */
pub struct DotConfig<'a> {
    directed: Option<bool>,
    indent: String,
    isolated: bool,
    graph_attrs: Vec<(String, String)>,
    node_label: Option<Box<dyn Fn(NodeId) -> String + 'a>>,
    edge_label: Option<Box<dyn Fn(Label) -> String + 'a>>,
}

impl Default for DotConfig<'_> {
    fn default() -> Self {
        Self {
            directed: None,
            indent: "  ".to_owned(),
            isolated: false,
            graph_attrs: vec![],
            node_label: None,
            edge_label: None,
        }
    }
}

impl<'a> DotConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /**
     * Renders a `digraph` with `->` arcs, or a `graph` with `--` edges.
     *
     * When unset, adjacency lists are directed, while [Undirected],
     * [LabeledUndirected] and [WeightedEdgeList] are not.
     * An undirected rendering of an adjacency list lists each edge once,
     * from the endpoint with the lower id, and requires reciprocal arcs.
     */
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = Some(directed);
        self
    }

    /// Prefix of every statement. Two spaces by default.
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_owned();
        self
    }

    /// Also lists nodes without any arc.
    pub fn isolated(mut self, isolated: bool) -> Self {
        self.isolated = isolated;
        self
    }

    /// Adds a `key = value` statement right after the opening line.
    pub fn graph_attr(mut self, key: &str, value: &str) -> Self {
        self.graph_attrs.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Names nodes in the output. Node ids are used by default.
    pub fn node_label<F>(mut self, f: F) -> Self
    where
        F: Fn(NodeId) -> String + 'a,
    {
        self.node_label = Some(Box::new(f));
        self
    }

    /**
     * Text of the `label` attribute of a labeled arc.
     *
     * By default the label value itself, or the quoted weight for a
     * [WeightedEdgeList].
     */
    pub fn edge_label<F>(mut self, f: F) -> Self
    where
        F: Fn(Label) -> String + 'a,
    {
        self.edge_label = Some(Box::new(f));
        self
    }

    fn name(&self, n: NodeId) -> String {
        match &self.node_label {
            Some(f) => f(n),
            None => n.to_string(),
        }
    }

    fn open<O: Write>(&self, out: &mut O, directed: bool) -> Result<()> {
        writeln!(out, "{} {{", if directed { "digraph" } else { "graph" })?;
        for (k, v) in self.graph_attrs.iter() {
            writeln!(out, "{}{} = {}", self.indent, k, v)?;
        }
        Ok(())
    }
}

/**
 * Dumps a graph in the DOT format.
 *
 * # Examples
 *
 * ```rust
 * use adjgraph::{algorithm::graphviz::*, graph::*};
 *
 * let g = AdjacencyList::from(vec![vec![3], vec![], vec![3, 4], vec![], vec![]]);
 * let mut buf = vec![];
 * g.write_dot(&mut buf, &DotConfig::new()).unwrap();
 * assert_eq!(
 *     String::from_utf8(buf).unwrap(),
 *     "digraph {\n  0 -> 3\n  2 -> {3 4}\n}\n"
 * );
 * ```
 */
pub trait WriteDot {
    fn write_dot<O>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()>
    where
        O: Write;
}

impl WriteDot for AdjacencyList {
    fn write_dot<O: Write>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()> {
        write_arcs(self, out, config, true)
    }
}

impl WriteDot for LabeledAdjacencyList {
    fn write_dot<O: Write>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()> {
        write_arcs(self, out, config, true)
    }
}

impl WriteDot for Undirected {
    fn write_dot<O: Write>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()> {
        write_arcs(&self.adjacency, out, config, false)
    }
}

impl WriteDot for LabeledUndirected {
    fn write_dot<O: Write>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()> {
        write_arcs(&self.adjacency, out, config, false)
    }
}

impl<W> WriteDot for WeightedEdgeList<W>
where
    W: Fn(Label) -> f64,
{
    fn write_dot<O: Write>(&self, out: &mut O, config: &DotConfig<'_>) -> Result<()> {
        let directed = config.directed.unwrap_or(false);
        let op = if directed { "->" } else { "--" };
        config.open(out, directed)?;
        if config.isolated {
            let mut touched = Bits::new(self.order);
            for e in self.edges.iter() {
                touched.set(e.edge.0);
                touched.set(e.edge.1);
            }
            for n in (0..self.order).map(NodeId::new) {
                if !touched.bit(n) {
                    writeln!(out, "{}{}", config.indent, config.name(n))?;
                }
            }
        }
        for e in self.edges.iter() {
            let label = match &config.edge_label {
                Some(f) => f(e.label),
                None => format!("\"{}\"", (self.weight)(e.label)),
            };
            writeln!(
                out,
                "{}{} {} {} [label = {}]",
                config.indent,
                config.name(e.edge.0),
                op,
                config.name(e.edge.1),
                label
            )?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

fn write_arcs<G, O>(g: &G, out: &mut O, config: &DotConfig<'_>, default_directed: bool) -> Result<()>
where
    G: Adjacency,
    O: Write,
{
    let directed = config.directed.unwrap_or(default_directed);
    if !directed {
        is_undirected(g).map_err(|(from, to)| Error::NotUndirected { from, to })?;
    }
    let op = if directed { "->" } else { "--" };
    config.open(out, directed)?;

    let mut targeted = Bits::new(g.order());
    if config.isolated {
        for n in g.nodes() {
            for a in g.arcs(n) {
                targeted.set(a.to);
            }
        }
    }

    for fr in g.nodes() {
        let arcs: Vec<OutArc> = g.arcs(fr).filter(|a| directed || fr <= a.to).collect();
        if arcs.is_empty() {
            if config.isolated && g.out_degree(fr) == 0 && !targeted.bit(fr) {
                writeln!(out, "{}{}", config.indent, config.name(fr))?;
            }
            continue;
        }
        let name = config.name(fr);
        if arcs.iter().all(|a| a.label.is_none()) {
            if let [a] = arcs.as_slice() {
                writeln!(out, "{}{} {} {}", config.indent, name, op, config.name(a.to))?;
            } else {
                let tos: Vec<String> = arcs.iter().map(|a| config.name(a.to)).collect();
                writeln!(out, "{}{} {} {{{}}}", config.indent, name, op, tos.join(" "))?;
            }
            continue;
        }
        for a in arcs.iter() {
            let to = config.name(a.to);
            match a.label {
                Some(l) => {
                    let label = match &config.edge_label {
                        Some(f) => f(l),
                        None => l.to_string(),
                    };
                    writeln!(out, "{}{} {} {} [label = {}]", config.indent, name, op, to, label)?;
                }
                None => writeln!(out, "{}{} {} {}", config.indent, name, op, to)?,
            }
        }
    }
    writeln!(out, "}}")?;
    Ok(())
}
