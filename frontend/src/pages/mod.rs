pub mod admin;
pub mod home;
pub mod leave;
pub mod login;
pub mod signup;
pub mod utils;
