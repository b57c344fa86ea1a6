mod overlay;
mod schedule;
mod standing;
mod theme;

pub use overlay::*;
pub use schedule::*;
pub use standing::*;
pub use theme::*;
