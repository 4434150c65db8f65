pub mod apollo;
