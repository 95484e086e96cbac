mod animal_type;
mod food_type;

pub use animal_type::AnimalType;
pub use food_type::FoodType;
