mod home;
mod methodology;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use methodology::{MethodologySection, MethodologyView};
pub use state::ViewError;
