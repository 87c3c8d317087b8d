mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::SignUp;

mod dashboard;
pub use dashboard::Dashboard;
