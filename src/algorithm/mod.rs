//! Graph algorithms
mod depth_first;
pub use self::depth_first::*;
mod components;
pub use self::components::*;
mod bipartite;
pub use self::bipartite::*;
mod acyclic;
pub use self::acyclic::*;
mod toposort;
pub use self::toposort::*;
mod tarjan;
pub use self::tarjan::*;
mod union_find;
pub use self::union_find::*;
mod kruskal;
mod prim;
pub mod graphviz;
