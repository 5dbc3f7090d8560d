pub mod houses;
pub mod signs;

pub use houses::house_for;
pub use signs::{get_sign_index, sign_for, ZodiacSign};
