pub mod use_cases;

// Re-export use cases and their errors for convenience
pub use use_cases::{
    create_user::{CreateUserError, CreateUserUseCase},
    delete_user::{DeleteUserError, DeleteUserUseCase},
    get_user::{GetUserError, GetUserUseCase},
    list_users::ListUsersUseCase,
    login::{LoginError, LoginUserUseCase},
    logout::{LogoutError, LogoutUseCase},
    update_user::{UpdateUserError, UpdateUserUseCase},
};
