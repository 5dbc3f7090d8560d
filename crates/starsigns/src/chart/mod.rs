pub mod data;
pub mod generator;
pub mod input;
pub mod settings;

pub use data::{BirthChart, ChartEntry};
pub use generator::{generate_birth_chart, ChartGenerator};
pub use input::BirthInput;
pub use settings::ChartSettings;
