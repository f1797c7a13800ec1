use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("card {front:?}/{back:?} is filed in more than one bucket: {buckets:?}")]
    DuplicateCard {
        front: String,
        back: String,
        buckets: Vec<u32>,
    },
}
