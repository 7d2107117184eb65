pub mod error;
pub mod event;
pub mod outcome;
pub mod record;
pub mod schema;
pub mod traits;

pub use self::error::*;
pub use self::event::*;
pub use self::outcome::*;
pub use self::record::*;
pub use self::schema::*;
pub use self::traits::*;
