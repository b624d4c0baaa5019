//! PostgreSQL repository implementations.

pub mod user;
pub mod wish;
pub mod wish_list;

pub use user::UserRepository;
pub use wish::WishRepository;
pub use wish_list::WishListRepository;
