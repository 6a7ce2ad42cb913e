use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    #[error("a face needs at least one sticker")]
    EmptyFace,
    #[error("{area} stickers cannot be laid out as a square face")]
    NotPerfectSquare { area: usize },
}
