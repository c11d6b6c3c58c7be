pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod logout;
pub mod update_user;
