mod food;
mod species;

pub use food::Food;
pub use species::Species;
