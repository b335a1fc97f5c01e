pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {edge} references node {node}, but the graph has {node_count} nodes")]
    InvalidGraph {
        edge: usize,
        node: usize,
        node_count: usize,
    },

    #[error("dataset JSON error: {0}")]
    Dataset(#[from] serde_json::Error),
}
