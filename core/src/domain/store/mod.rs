pub mod entities;
pub mod persistence;
pub mod ports;
pub mod services;

pub use entities::*;
pub use persistence::PersistenceAdapter;
pub use ports::*;
pub use services::AppStore;
