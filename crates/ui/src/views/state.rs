#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::NotFound => "Cette méthodologie n'existe pas.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
