mod fiche_card;
mod section;
mod view;

pub use section::MethodologySection;
#[cfg(test)]
pub(crate) use section::MethodologyTestHandles;
pub use view::MethodologyView;
