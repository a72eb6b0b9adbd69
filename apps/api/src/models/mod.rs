pub mod career;

pub use career::{CareerNode, CareerProfile};
