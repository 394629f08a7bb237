pub mod button;
pub mod card;
pub mod checkbox;
pub mod input;

pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use input::*;
