pub mod authenticate_user;

pub use authenticate_user::AuthenticateUser;
