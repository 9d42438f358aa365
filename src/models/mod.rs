// Data records and the progression model built around them

pub mod profile;
pub mod progression;
pub mod session;
pub mod user;
pub mod validation;
pub mod workout;

pub use profile::*;
pub use progression::*;
pub use session::*;
pub use user::*;
pub use validation::*;
pub use workout::*;
