//! Screens of the demo shop mobile app.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod login;
pub mod product_details;
pub mod products;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use product_details::ProductDetailsPage;
pub use products::ProductsPage;
