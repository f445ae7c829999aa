pub mod card;
pub mod deck;
pub mod query;
pub mod request;

pub use card::*;
pub use deck::*;
pub use query::*;
pub use request::*;
