pub mod about;
pub mod contact;
pub mod home;
pub mod how_it_works;
pub mod services;
pub mod why_outsource;
