mod users;
pub use users::UsersView;
