pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{CreateItemInput, ItemChanges, NewItem, UpdateItemInput};
pub use repository::ItemRepository;
pub use service::ItemService;
