mod completion;
mod fiche;
mod ids;
mod methodology;

pub use ids::{FicheId, MethodologyId, ParseIdError};

pub use completion::CompletionSet;
pub use fiche::{DetailedSection, Fiche, FicheDraft, FicheError};
pub use methodology::{Methodology, MethodologyError, MethodologyProgress, ThemeToken};
