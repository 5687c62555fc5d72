mod pill;
mod section;

pub use pill::{Pill, PillProps};
pub use section::{Section, SectionProps};
