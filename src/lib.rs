pub mod config;
pub mod data;
pub mod error;
pub mod store;

pub use config::{Config, IdPolicy, STATUS_LIST};
pub use data::{Diet, Dish, DishBuilder, Restaurant, RestaurantBuilder, Status};
pub use error::{Result, StoreError};
pub use store::DishStore;
